//! Outbound request parameters.
//!
//! Every optional filter is an `Option` that is skipped on serialization, so
//! the serialized form of a params struct is exactly the set of keys sent to
//! Elastic Beanstalk. Unset filters are absent keys, never nulls or defaults.

use crate::prelude::*;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parameters for `DescribeEnvironments`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEnvironmentsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_names: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_deleted: Option<bool>,
}

/// Parameters for `DescribeApplications`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeApplicationsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_names: Option<Vec<String>>,
}

/// Parameters for `DescribeEvents`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeEventsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_records: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

/// Parameters for `DescribeConfigurationSettings`.
///
/// At most one of `environment_name` / `template_name` is ever set.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeConfigSettingsParams {
    pub application_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_name: Option<String>,
}

/// Event severity filter. Events at or above this level are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[serde(alias = "trace")]
    Trace,
    #[serde(alias = "debug")]
    Debug,
    #[serde(alias = "info")]
    Info,
    #[serde(alias = "warn")]
    Warn,
    #[serde(alias = "error")]
    Error,
    #[serde(alias = "fatal")]
    Fatal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

/// A page of records returned by one describe call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub items: Vec<serde_json::Value>,
    pub next_token: Option<String>,
}

impl Page {
    pub fn new(items: Vec<serde_json::Value>) -> Self {
        Self {
            items,
            next_token: None,
        }
    }

    pub fn with_next_token(mut self, token: Option<String>) -> Self {
        self.next_token = token;
        self
    }
}

/// Keep a string filter only when it carries a value.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Keep a list filter only when it has at least one element.
pub(crate) fn non_empty_list(values: Option<Vec<String>>) -> Option<Vec<String>> {
    values.filter(|v| !v.is_empty())
}

/// Parse an event time filter.
///
/// Accepts RFC 3339 (`2024-05-01T12:00:00Z`, `2024-05-01T12:00:00+02:00`),
/// a naive timestamp taken as UTC (`2024-05-01T12:00:00`), or a bare date
/// meaning midnight UTC (`2024-05-01`).
pub(crate) fn parse_timestamp(field: &str, value: &str) -> Result<DateTime<Utc>, ClientError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    if let Some(naive) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(naive.and_utc());
    }

    Err(ClientError::validation(format!(
        "{} must be an ISO 8601 timestamp (e.g. 2024-05-01T12:00:00Z), got '{}'",
        field, value
    )))
}
