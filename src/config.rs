//! Service configuration
//!
//! Read from environment variables with defaults, the same way the server
//! binary has always been configured:
//!
//! | Variable | Default |
//! |---|---|
//! | `PORT` | `5000` |
//! | `RAINFALL_API_URL` | `https://archive-api.open-meteo.com/v1/archive` |
//! | `RAINFALL_TIMEOUT_SECS` | `10` |
//! | `RAINFALL_START_DATE` | `2020-01-01` |
//! | `RAINFALL_END_DATE` | `2023-12-31` |
//! | `RAINFALL_TIMEZONE` | `Asia/Kolkata` |

use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_RAINFALL_API_URL: &str = "https://archive-api.open-meteo.com/v1/archive";
pub const DEFAULT_RAINFALL_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_TIMEZONE: &str = "Asia/Kolkata";

/// Settings for the historical precipitation source.
#[derive(Debug, Clone, PartialEq)]
pub struct RainfallConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub timezone: String,
}

impl Default for RainfallConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_RAINFALL_API_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_RAINFALL_TIMEOUT_SECS),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default(),
            end_date: NaiveDate::from_ymd_opt(2023, 12, 31).unwrap_or_default(),
            timezone: DEFAULT_TIMEZONE.to_string(),
        }
    }
}

/// Top-level service settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub port: u16,
    pub rainfall: RainfallConfig,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rainfall: RainfallConfig::default(),
        }
    }
}

impl ServiceConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary key lookup (environment, test map, ...).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ServiceConfig::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a port number, got '{}'", raw))?,
            None => defaults.port,
        };

        let base_url = lookup("RAINFALL_API_URL").unwrap_or(defaults.rainfall.base_url);

        let timeout = match lookup("RAINFALL_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().with_context(|| {
                    format!("RAINFALL_TIMEOUT_SECS must be whole seconds, got '{}'", raw)
                })?;
                if secs == 0 {
                    anyhow::bail!("RAINFALL_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => defaults.rainfall.timeout,
        };

        let start_date = parse_date(lookup("RAINFALL_START_DATE"), "RAINFALL_START_DATE")?
            .unwrap_or(defaults.rainfall.start_date);
        let end_date = parse_date(lookup("RAINFALL_END_DATE"), "RAINFALL_END_DATE")?
            .unwrap_or(defaults.rainfall.end_date);
        if end_date < start_date {
            anyhow::bail!(
                "RAINFALL_END_DATE ({}) is before RAINFALL_START_DATE ({})",
                end_date,
                start_date
            );
        }

        let timezone = lookup("RAINFALL_TIMEZONE").unwrap_or(defaults.rainfall.timezone);

        Ok(Self {
            port,
            rainfall: RainfallConfig {
                base_url,
                timeout,
                start_date,
                end_date,
                timezone,
            },
        })
    }
}

fn parse_date(raw: Option<String>, key: &str) -> Result<Option<NaiveDate>> {
    raw.map(|value| {
        NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
            .with_context(|| format!("{} must be YYYY-MM-DD, got '{}'", key, value))
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServiceConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.port, 5000);
        assert_eq!(config.rainfall.timeout, Duration::from_secs(10));
        assert_eq!(config.rainfall.start_date.to_string(), "2020-01-01");
        assert_eq!(config.rainfall.end_date.to_string(), "2023-12-31");
    }

    #[test]
    fn test_overrides() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            ("PORT", "8080"),
            ("RAINFALL_API_URL", "http://localhost:9000/archive"),
            ("RAINFALL_TIMEOUT_SECS", "3"),
            ("RAINFALL_START_DATE", "2019-01-01"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rainfall.base_url, "http://localhost:9000/archive");
        assert_eq!(config.rainfall.timeout, Duration::from_secs(3));
        assert_eq!(config.rainfall.start_date.to_string(), "2019-01-01");
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(ServiceConfig::from_lookup(lookup_from(&[("PORT", "http")])).is_err());
        assert!(ServiceConfig::from_lookup(lookup_from(&[("RAINFALL_TIMEOUT_SECS", "0")])).is_err());
        assert!(ServiceConfig::from_lookup(lookup_from(&[("RAINFALL_END_DATE", "2010-01-01")])).is_err());
        assert!(ServiceConfig::from_lookup(lookup_from(&[("RAINFALL_START_DATE", "01/01/2020")])).is_err());
    }
}
