use std::env;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_USAGE_THRESHOLD: f64 = 100.0;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("USAGE_THRESHOLD must be a non-negative number, got '{0}'")]
    InvalidThreshold(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub port: u16,
    /// kWh above which the most recent reading raises an alert. Fixed for the process lifetime.
    pub usage_threshold: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            usage_threshold: DEFAULT_USAGE_THRESHOLD,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(env::var("PORT").ok(), env::var("USAGE_THRESHOLD").ok())
    }

    fn from_values(port: Option<String>, threshold: Option<String>) -> Result<Self, ConfigError> {
        let port = port
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        let usage_threshold = match threshold {
            Some(value) => parse_threshold(&value)?,
            None => DEFAULT_USAGE_THRESHOLD,
        };

        Ok(Self {
            port,
            usage_threshold,
        })
    }
}

fn parse_threshold(value: &str) -> Result<f64, ConfigError> {
    match value.trim().parse::<f64>() {
        Ok(threshold) if threshold.is_finite() && threshold >= 0.0 => Ok(threshold),
        _ => Err(ConfigError::InvalidThreshold(value.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        assert_eq!(Config::from_values(None, None).unwrap(), Config::default());
    }

    #[test]
    fn bad_port_falls_back_to_default() {
        let config = Config::from_values(Some("not-a-port".into()), None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);

        let config = Config::from_values(Some("3000".into()), Some("42.5".into())).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.usage_threshold, 42.5);
    }

    #[test]
    fn bad_threshold_is_an_error() {
        for raw in ["lots", "-5", "NaN"] {
            assert!(Config::from_values(None, Some(raw.into())).is_err(), "{raw}");
        }
    }
}
