//! The uniform error every tool reports to its caller.
//!
//! AWS SDK failures, credential problems and argument validation all end up
//! as a [`ClientError`]. Callers never see the SDK's own error types; they see
//! a human-readable message plus an [`ErrorKind`] describing how the failure
//! can be handled.

use std::fmt;

/// Broad category of a [`ClientError`].
///
/// - [`ErrorKind::Validation`] - Fix the arguments and retry
/// - [`ErrorKind::Credentials`] - Fix credentials and retry
/// - [`ErrorKind::AccessDenied`] - Grant the IAM permission and retry
/// - [`ErrorKind::Throttling`] - Back off and retry
/// - [`ErrorKind::NotFound`] - The named resource does not exist
/// - [`ErrorKind::ServiceUnavailable`] - AWS side failure, wait and retry
/// - [`ErrorKind::Network`] - Check connectivity, retry
/// - [`ErrorKind::Service`] - Any other error reported by AWS
/// - [`ErrorKind::Internal`] - Bug or unexpected local failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Credentials,
    AccessDenied,
    Throttling,
    NotFound,
    ServiceUnavailable,
    Network,
    Service,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Credentials => "credentials",
            ErrorKind::AccessDenied => "access_denied",
            ErrorKind::Throttling => "throttling",
            ErrorKind::NotFound => "not_found",
            ErrorKind::ServiceUnavailable => "service_unavailable",
            ErrorKind::Network => "network",
            ErrorKind::Service => "service",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by every tool.
///
/// Displays as its message alone so it can be handed to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ClientError {
    kind: ErrorKind,
    code: Option<String>,
    message: String,
}

impl ClientError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
        }
    }

    /// Invalid or missing caller-supplied arguments. Never reaches AWS.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    pub fn credentials(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Credentials, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Build an error from an AWS error code and message.
    ///
    /// The code (e.g. `ThrottlingException`, `InvalidParameterValue`) decides
    /// the kind; the message is prefixed with the code when both are present.
    pub fn from_aws(code: Option<&str>, message: Option<&str>) -> Self {
        let kind = code.map(classify_aws_code).unwrap_or(ErrorKind::Service);
        let message = match (code, message) {
            (Some(code), Some(message)) if !message.is_empty() => {
                format!("{}: {}", code, message)
            }
            (Some(code), _) => code.to_string(),
            (None, Some(message)) if !message.is_empty() => message.to_string(),
            (None, _) => "Unknown AWS error".to_string(),
        };

        Self {
            kind,
            code: code.map(str::to_string),
            message,
        }
    }

    /// Attach the AWS error code this error originated from.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ErrorKind::Validation
    }

    /// Returns true if waiting and repeating the same call may succeed.
    ///
    /// Nothing in this crate retries; the SDK's built-in retry policy has
    /// already run by the time an error is produced.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Throttling | ErrorKind::ServiceUnavailable | ErrorKind::Network
        )
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::internal(format!("Serialization error: {}", err))
    }
}

impl From<String> for ClientError {
    fn from(s: String) -> Self {
        Self::new(ErrorKind::Service, s)
    }
}

impl From<&str> for ClientError {
    fn from(s: &str) -> Self {
        Self::new(ErrorKind::Service, s)
    }
}

/// Map an AWS error code to an [`ErrorKind`].
///
/// Codes come from the Query protocol error documents Elastic Beanstalk
/// returns, plus the common errors shared by every AWS service:
/// https://docs.aws.amazon.com/elasticbeanstalk/latest/api/CommonErrors.html
fn classify_aws_code(code: &str) -> ErrorKind {
    match code {
        "InvalidClientTokenId"
        | "UnrecognizedClientException"
        | "SignatureDoesNotMatch"
        | "IncompleteSignature"
        | "MissingAuthenticationToken"
        | "ExpiredToken"
        | "ExpiredTokenException"
        | "InvalidAccessKeyId"
        | "AuthFailure" => ErrorKind::Credentials,
        "AccessDenied" | "AccessDeniedException" | "InsufficientPrivilegesException"
        | "OptInRequired" => ErrorKind::AccessDenied,
        "Throttling" | "ThrottlingException" | "RequestLimitExceeded" | "TooManyRequests" => {
            ErrorKind::Throttling
        }
        "InvalidParameterValue"
        | "InvalidParameterCombination"
        | "MissingParameter"
        | "MalformedQueryString"
        | "ValidationError"
        | "InvalidAction" => ErrorKind::Validation,
        "ServiceUnavailable" | "InternalFailure" | "InternalError" => {
            ErrorKind::ServiceUnavailable
        }
        "RequestTimeout" | "RequestExpired" => ErrorKind::Network,
        _ if code.ends_with("NotFound") || code.ends_with("NotFoundException") => {
            ErrorKind::NotFound
        }
        _ => ErrorKind::Service,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message_only() {
        let err = ClientError::validation("Either environment_name or template_name must be provided");
        assert_eq!(
            err.to_string(),
            "Either environment_name or template_name must be provided"
        );
        assert!(err.is_validation());
        assert!(err.code().is_none());
    }

    #[test]
    fn test_from_aws_with_code_and_message() {
        let err = ClientError::from_aws(Some("ThrottlingException"), Some("Rate exceeded"));
        assert_eq!(err.kind(), ErrorKind::Throttling);
        assert_eq!(err.code(), Some("ThrottlingException"));
        assert_eq!(err.to_string(), "ThrottlingException: Rate exceeded");
        assert!(err.is_retryable());
    }

    #[test]
    fn test_from_aws_code_only() {
        let err = ClientError::from_aws(Some("AccessDenied"), None);
        assert_eq!(err.kind(), ErrorKind::AccessDenied);
        assert_eq!(err.to_string(), "AccessDenied");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_from_aws_message_only() {
        let err = ClientError::from_aws(None, Some("something broke"));
        assert_eq!(err.kind(), ErrorKind::Service);
        assert_eq!(err.to_string(), "something broke");
    }

    #[test]
    fn test_from_aws_nothing() {
        let err = ClientError::from_aws(None, Some(""));
        assert_eq!(err.to_string(), "Unknown AWS error");
    }

    #[test]
    fn test_classify_aws_code() {
        assert_eq!(classify_aws_code("InvalidClientTokenId"), ErrorKind::Credentials);
        assert_eq!(classify_aws_code("ExpiredToken"), ErrorKind::Credentials);
        assert_eq!(
            classify_aws_code("InsufficientPrivilegesException"),
            ErrorKind::AccessDenied
        );
        assert_eq!(classify_aws_code("InvalidParameterValue"), ErrorKind::Validation);
        assert_eq!(classify_aws_code("ServiceUnavailable"), ErrorKind::ServiceUnavailable);
        assert_eq!(classify_aws_code("ResourceNotFound"), ErrorKind::NotFound);
        assert_eq!(
            classify_aws_code("ResourceNotFoundException"),
            ErrorKind::NotFound
        );
        assert_eq!(
            classify_aws_code("TooManyEnvironmentsException"),
            ErrorKind::Service
        );
    }

    #[test]
    fn test_with_code() {
        let err = ClientError::credentials("no credentials").with_code("NoCredentials");
        assert_eq!(err.code(), Some("NoCredentials"));
        assert_eq!(err.kind(), ErrorKind::Credentials);
    }

    #[test]
    fn test_from_serde_error_is_internal() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ClientError = serde_err.into();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.message().starts_with("Serialization error"));
    }

    #[test]
    fn test_kind_as_str() {
        assert_eq!(ErrorKind::Validation.to_string(), "validation");
        assert_eq!(ErrorKind::ServiceUnavailable.as_str(), "service_unavailable");
    }
}
