use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Alertmanager receiver (notification channel) definition
///
/// Channel configurations are passed through to Alertmanager untouched, so
/// each entry is kept as raw JSON. Empty channel lists are left out of the
/// request body.
///
/// # Example
///
/// ```rust
/// use alert_route_client::Receiver;
/// use serde_json::json;
///
/// let receiver = Receiver::new("ops-slack")
///     .with_slack_config(json!({
///         "api_url": "https://hooks.slack.com/services/T000/B000/XXX",
///         "channel": "#ops",
///         "send_resolved": true
///     }));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Receiver {
    /// Unique receiver name, used as the route identifier
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub email_configs: Vec<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pagerduty_configs: Vec<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slack_configs: Vec<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub webhook_configs: Vec<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub opsgenie_configs: Vec<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wechat_configs: Vec<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pushover_configs: Vec<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub victorops_configs: Vec<Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sns_configs: Vec<Value>,
}

impl Receiver {
    /// Create a receiver with no channels attached
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_email_config(mut self, config: Value) -> Self {
        self.email_configs.push(config);
        self
    }

    pub fn with_pagerduty_config(mut self, config: Value) -> Self {
        self.pagerduty_configs.push(config);
        self
    }

    pub fn with_slack_config(mut self, config: Value) -> Self {
        self.slack_configs.push(config);
        self
    }

    pub fn with_webhook_config(mut self, config: Value) -> Self {
        self.webhook_configs.push(config);
        self
    }

    pub fn with_opsgenie_config(mut self, config: Value) -> Self {
        self.opsgenie_configs.push(config);
        self
    }

    pub fn with_wechat_config(mut self, config: Value) -> Self {
        self.wechat_configs.push(config);
        self
    }

    pub fn with_pushover_config(mut self, config: Value) -> Self {
        self.pushover_configs.push(config);
        self
    }

    pub fn with_victorops_config(mut self, config: Value) -> Self {
        self.victorops_configs.push(config);
        self
    }

    pub fn with_sns_config(mut self, config: Value) -> Self {
        self.sns_configs.push(config);
        self
    }
}

/// Body of a route deletion request
#[derive(Debug, Serialize)]
pub(crate) struct DeleteRouteRequest<'a> {
    pub name: &'a str,
}
