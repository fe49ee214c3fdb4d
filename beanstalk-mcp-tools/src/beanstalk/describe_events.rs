use super::client::{connect, ClientFactory};
use super::params::{non_empty, parse_timestamp, DescribeEventsParams, Severity};
use crate::prelude::*;
use std::sync::Arc;

/// Input parameters for describe_events tool
#[derive(Debug, Default, Deserialize, JsonSchema)]
pub struct DescribeEventsInput {
    /// Application name filter
    #[serde(default)]
    pub application_name: Option<String>,

    /// Environment name filter
    #[serde(default)]
    pub environment_name: Option<String>,

    /// Environment ID filter
    #[serde(default)]
    pub environment_id: Option<String>,

    /// Start time for retrieving events (ISO 8601 format)
    #[serde(default)]
    pub start_time: Option<String>,

    /// End time for retrieving events (ISO 8601 format)
    #[serde(default)]
    pub end_time: Option<String>,

    /// Maximum number of records to retrieve
    #[serde(default)]
    pub max_records: Option<u32>,

    /// Severity level filter (TRACE, DEBUG, INFO, WARN, ERROR, FATAL)
    #[serde(default)]
    pub severity: Option<Severity>,

    /// The AWS region to run the tool
    #[serde(default)]
    pub region_name: Option<String>,
}

impl DescribeEventsInput {
    /// Validate the filters and build the outbound params.
    ///
    /// Fails without contacting AWS on unparseable times, an inverted time
    /// range, or a record limit beyond `i32`.
    pub(crate) fn to_params(&self) -> Result<DescribeEventsParams, ClientError> {
        let start_time = non_empty(self.start_time.clone())
            .map(|t| parse_timestamp("start_time", &t))
            .transpose()?;
        let end_time = non_empty(self.end_time.clone())
            .map(|t| parse_timestamp("end_time", &t))
            .transpose()?;

        if let (Some(start), Some(end)) = (start_time, end_time) {
            if start > end {
                return Err(ClientError::validation(format!(
                    "start_time ({}) must not be after end_time ({})",
                    start.to_rfc3339(),
                    end.to_rfc3339()
                )));
            }
        }

        let max_records = match self.max_records {
            None | Some(0) => None,
            Some(n) => Some(i32::try_from(n).map_err(|_| {
                ClientError::validation(format!("max_records is too large: {}", n))
            })?),
        };

        Ok(DescribeEventsParams {
            application_name: non_empty(self.application_name.clone()),
            environment_name: non_empty(self.environment_name.clone()),
            environment_id: non_empty(self.environment_id.clone()),
            start_time,
            end_time,
            max_records,
            severity: self.severity,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeEventsOutput {
    events: Vec<serde_json::Value>,
    next_token: Option<String>,
}

/// Tool for listing Elastic Beanstalk events
pub struct DescribeEventsTool {
    factory: Arc<dyn ClientFactory>,
}

impl DescribeEventsTool {
    pub fn new(factory: Arc<dyn ClientFactory>) -> Self {
        Self { factory }
    }
}

impl Tool for DescribeEventsTool {
    type Input = DescribeEventsInput;

    fn name(&self) -> &str {
        "describe_events"
    }

    fn description(&self) -> &str {
        "Returns list of events for an environment, application, or platform. You can filter \
         events by application name, environment name, environment ID, time range, and severity."
    }

    fn read_only(&self) -> bool {
        true
    }

    async fn execute(&self, input: Self::Input) -> Result<ToolResult, ClientError> {
        let params = input.to_params()?;
        let client = connect(self.factory.as_ref(), input.region_name.as_deref()).await?;

        let page = client.describe_events(params).await?;

        Ok(ToolResult::json(DescribeEventsOutput {
            events: page.items,
            next_token: page.next_token,
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_sends_no_filters() {
        let params = DescribeEventsInput::default().to_params().unwrap();
        assert_eq!(params, DescribeEventsParams::default());
    }

    #[test]
    fn test_zero_max_records_is_omitted() {
        let input = DescribeEventsInput {
            max_records: Some(0),
            ..Default::default()
        };
        assert_eq!(input.to_params().unwrap().max_records, None);
    }

    #[test]
    fn test_max_records_forwarded() {
        let input = DescribeEventsInput {
            max_records: Some(25),
            ..Default::default()
        };
        assert_eq!(input.to_params().unwrap().max_records, Some(25));
    }

    #[test]
    fn test_max_records_overflow_rejected() {
        let input = DescribeEventsInput {
            max_records: Some(u32::MAX),
            ..Default::default()
        };
        assert!(input.to_params().unwrap_err().is_validation());
    }

    #[test]
    fn test_time_range_parsed() {
        let input = DescribeEventsInput {
            start_time: Some("2024-05-01".to_string()),
            end_time: Some("2024-05-02T00:00:00Z".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(input.to_params().unwrap()).unwrap();
        assert_eq!(json["StartTime"], "2024-05-01T00:00:00Z");
        assert_eq!(json["EndTime"], "2024-05-02T00:00:00Z");
    }

    #[test]
    fn test_inverted_time_range_rejected() {
        let input = DescribeEventsInput {
            start_time: Some("2024-05-02T00:00:00Z".to_string()),
            end_time: Some("2024-05-01T00:00:00Z".to_string()),
            ..Default::default()
        };
        let err = input.to_params().unwrap_err();
        assert!(err.is_validation());
        assert!(err.message().contains("must not be after"));
    }

    #[test]
    fn test_invalid_start_time_rejected() {
        let input = DescribeEventsInput {
            start_time: Some("last tuesday".to_string()),
            ..Default::default()
        };
        assert!(input.to_params().unwrap_err().message().contains("start_time"));
    }

    #[test]
    fn test_empty_strings_are_unset() {
        let input = DescribeEventsInput {
            application_name: Some(String::new()),
            start_time: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(input.to_params().unwrap(), DescribeEventsParams::default());
    }
}
