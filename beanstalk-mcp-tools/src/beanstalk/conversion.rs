//! Conversion from Elastic Beanstalk SDK shapes to JSON records.
//!
//! Records use the AWS wire member names (`EnvironmentName`, `DateCreated`,
//! ...) so tool output matches the API documentation. Members the service
//! did not return are left out; timestamps are RFC 3339 strings and enums
//! are their wire values.

use aws_sdk_elasticbeanstalk::primitives::{DateTime, DateTimeFormat};
use aws_sdk_elasticbeanstalk::types::{
    ApplicationDescription, ConfigurationOptionSetting, ConfigurationSettingsDescription,
    EnvironmentDescription, EnvironmentLink, EnvironmentResourcesDescription, EnvironmentTier,
    EventDescription,
};
use serde_json::{Map, Value};

/// Incrementally built JSON object that drops absent members.
#[derive(Default)]
struct Record(Map<String, Value>);

impl Record {
    fn str(mut self, key: &str, value: Option<&str>) -> Self {
        if let Some(v) = value {
            self.0.insert(key.to_string(), Value::String(v.to_string()));
        }
        self
    }

    fn bool(mut self, key: &str, value: Option<bool>) -> Self {
        if let Some(v) = value {
            self.0.insert(key.to_string(), Value::Bool(v));
        }
        self
    }

    fn time(self, key: &str, value: Option<&DateTime>) -> Self {
        let formatted = value.and_then(|dt| dt.fmt(DateTimeFormat::DateTime).ok());
        self.str(key, formatted.as_deref())
    }

    fn strings(mut self, key: &str, values: &[String]) -> Self {
        if !values.is_empty() {
            self.0.insert(
                key.to_string(),
                Value::Array(values.iter().cloned().map(Value::String).collect()),
            );
        }
        self
    }

    fn records(mut self, key: &str, values: Vec<Value>) -> Self {
        if !values.is_empty() {
            self.0.insert(key.to_string(), Value::Array(values));
        }
        self
    }

    fn object(mut self, key: &str, value: Option<Value>) -> Self {
        match value {
            Some(Value::Object(obj)) if obj.is_empty() => {}
            Some(v) => {
                self.0.insert(key.to_string(), v);
            }
            None => {}
        }
        self
    }

    fn build(self) -> Value {
        Value::Object(self.0)
    }
}

pub fn environment_to_json(env: &EnvironmentDescription) -> Value {
    Record::default()
        .str("EnvironmentName", env.environment_name())
        .str("EnvironmentId", env.environment_id())
        .str("ApplicationName", env.application_name())
        .str("VersionLabel", env.version_label())
        .str("SolutionStackName", env.solution_stack_name())
        .str("PlatformArn", env.platform_arn())
        .str("TemplateName", env.template_name())
        .str("Description", env.description())
        .str("EndpointURL", env.endpoint_url())
        .str("CNAME", env.cname())
        .time("DateCreated", env.date_created())
        .time("DateUpdated", env.date_updated())
        .str("Status", env.status().map(|s| s.as_str()))
        .bool(
            "AbortableOperationInProgress",
            env.abortable_operation_in_progress(),
        )
        .str("Health", env.health().map(|h| h.as_str()))
        .str("HealthStatus", env.health_status().map(|h| h.as_str()))
        .object("Resources", env.resources().map(resources_to_json))
        .object("Tier", env.tier().map(tier_to_json))
        .records(
            "EnvironmentLinks",
            env.environment_links().iter().map(link_to_json).collect(),
        )
        .str("EnvironmentArn", env.environment_arn())
        .str("OperationsRole", env.operations_role())
        .build()
}

fn resources_to_json(resources: &EnvironmentResourcesDescription) -> Value {
    let load_balancer = resources.load_balancer().map(|lb| {
        Record::default()
            .str("LoadBalancerName", lb.load_balancer_name())
            .str("Domain", lb.domain())
            .build()
    });

    Record::default().object("LoadBalancer", load_balancer).build()
}

fn tier_to_json(tier: &EnvironmentTier) -> Value {
    Record::default()
        .str("Name", tier.name())
        .str("Type", tier.r#type())
        .str("Version", tier.version())
        .build()
}

fn link_to_json(link: &EnvironmentLink) -> Value {
    Record::default()
        .str("LinkName", link.link_name())
        .str("EnvironmentName", link.environment_name())
        .build()
}

pub fn application_to_json(app: &ApplicationDescription) -> Value {
    Record::default()
        .str("ApplicationArn", app.application_arn())
        .str("ApplicationName", app.application_name())
        .str("Description", app.description())
        .time("DateCreated", app.date_created())
        .time("DateUpdated", app.date_updated())
        .strings("Versions", app.versions())
        .strings("ConfigurationTemplates", app.configuration_templates())
        .build()
}

pub fn event_to_json(event: &EventDescription) -> Value {
    Record::default()
        .time("EventDate", event.event_date())
        .str("Message", event.message())
        .str("ApplicationName", event.application_name())
        .str("VersionLabel", event.version_label())
        .str("TemplateName", event.template_name())
        .str("EnvironmentName", event.environment_name())
        .str("PlatformArn", event.platform_arn())
        .str("RequestId", event.request_id())
        .str("Severity", event.severity().map(|s| s.as_str()))
        .build()
}

pub fn config_settings_to_json(settings: &ConfigurationSettingsDescription) -> Value {
    Record::default()
        .str("SolutionStackName", settings.solution_stack_name())
        .str("PlatformArn", settings.platform_arn())
        .str("ApplicationName", settings.application_name())
        .str("TemplateName", settings.template_name())
        .str("Description", settings.description())
        .str("EnvironmentName", settings.environment_name())
        .str(
            "DeploymentStatus",
            settings.deployment_status().map(|s| s.as_str()),
        )
        .time("DateCreated", settings.date_created())
        .time("DateUpdated", settings.date_updated())
        .records(
            "OptionSettings",
            settings
                .option_settings()
                .iter()
                .map(option_setting_to_json)
                .collect(),
        )
        .build()
}

fn option_setting_to_json(option: &ConfigurationOptionSetting) -> Value {
    Record::default()
        .str("ResourceName", option.resource_name())
        .str("Namespace", option.namespace())
        .str("OptionName", option.option_name())
        .str("Value", option.value())
        .build()
}
