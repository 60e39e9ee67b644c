use std::time::Duration;

/// Default Alertmanager API prefix
pub const DEFAULT_API_PREFIX: &str = "http://alertmanager:9093/api/";
/// Default path of the channel (receiver) API, relative to the prefix
pub const DEFAULT_CHANNEL_PATH: &str = "v1/routes";
/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const API_PREFIX_ENV: &str = "ALERTMANAGER_API_PREFIX";
const CHANNEL_PATH_ENV: &str = "ALERTMANAGER_API_CHANNEL_PATH";

/// Configuration for [`RouteClient`](crate::RouteClient)
///
/// Empty strings and a zero timeout mean "not set" and fall back to the
/// environment, then to the defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteClientConfig {
    /// Alertmanager API prefix. Default: `http://alertmanager:9093/api/`.
    pub api_prefix: String,
    /// Channel API path. Default: `v1/routes`.
    pub channel_path: String,
    /// Request timeout. Default: 10 seconds.
    pub timeout: Duration,
}

impl Default for RouteClientConfig {
    fn default() -> Self {
        Self {
            api_prefix: DEFAULT_API_PREFIX.to_owned(),
            channel_path: DEFAULT_CHANNEL_PATH.to_owned(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RouteClientConfig {
    /// Read `ALERTMANAGER_API_PREFIX` and `ALERTMANAGER_API_CHANNEL_PATH`,
    /// falling back to the defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            api_prefix: String::new(),
            channel_path: String::new(),
            timeout: Duration::ZERO,
        }
        .resolve_with(|key| std::env::var(key).ok())
    }

    /// Fill every unset field from the environment, then from the defaults
    pub fn resolve(self) -> Self {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    fn resolve_with(self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_prefix = first_non_empty(&[
            &self.api_prefix,
            &lookup(API_PREFIX_ENV).unwrap_or_default(),
            DEFAULT_API_PREFIX,
        ]);

        let channel_path = first_non_empty(&[
            &self.channel_path,
            &lookup(CHANNEL_PATH_ENV).unwrap_or_default(),
            DEFAULT_CHANNEL_PATH,
        ]);

        let timeout = if self.timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            self.timeout
        };

        Self {
            api_prefix,
            channel_path,
            timeout,
        }
    }
}

fn first_non_empty(values: &[&str]) -> String {
    values
        .iter()
        .find(|v| !v.is_empty())
        .map(|v| (*v).to_owned())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn unset() -> RouteClientConfig {
        RouteClientConfig {
            api_prefix: String::new(),
            channel_path: String::new(),
            timeout: Duration::ZERO,
        }
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let cfg = unset().resolve_with(|_| None);
        assert_eq!(cfg, RouteClientConfig::default());
    }

    #[test]
    fn test_env_overrides_defaults() {
        let env: HashMap<&str, &str> = HashMap::from([
            (API_PREFIX_ENV, "http://am:9093/api/"),
            (CHANNEL_PATH_ENV, "/v1/receivers"),
        ]);

        let cfg = unset().resolve_with(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(cfg.api_prefix, "http://am:9093/api/");
        assert_eq!(cfg.channel_path, "/v1/receivers");
        assert_eq!(cfg.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_explicit_values_win_over_env() {
        let cfg = RouteClientConfig {
            api_prefix: "http://explicit:9093/api/".to_string(),
            channel_path: String::new(),
            timeout: Duration::from_secs(3),
        }
        .resolve_with(|key| match key {
            API_PREFIX_ENV => Some("http://env:9093/api/".to_string()),
            _ => None,
        });

        assert_eq!(cfg.api_prefix, "http://explicit:9093/api/");
        assert_eq!(cfg.channel_path, DEFAULT_CHANNEL_PATH);
        assert_eq!(cfg.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_empty_env_value_is_ignored() {
        let cfg = unset().resolve_with(|_| Some(String::new()));
        assert_eq!(cfg.api_prefix, DEFAULT_API_PREFIX);
        assert_eq!(cfg.channel_path, DEFAULT_CHANNEL_PATH);
    }
}
