use std::env;
use std::time::Duration;

pub const DEFAULT_CURRENCY: &str = "S/.";
pub const DEFAULT_SNACKBAR_MS: u64 = 4000;
const MAX_SNACKBAR_MS: u64 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub currency_symbol: String,
    pub log_level: String,
    pub environment: String,
    pub snackbar_duration_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: DEFAULT_CURRENCY.to_string(),
            log_level: "warn".to_string(),
            environment: "development".to_string(),
            snackbar_duration_ms: DEFAULT_SNACKBAR_MS,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let snackbar_duration_ms = match lookup("SNACKBAR_DURATION_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                anyhow::anyhow!(
                    "SNACKBAR_DURATION_MS must be a whole number of milliseconds, got '{}'",
                    raw
                )
            })?,
            None => defaults.snackbar_duration_ms,
        };

        let config = Config {
            currency_symbol: lookup("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            environment: lookup("APP_ENV").unwrap_or(defaults.environment),
            snackbar_duration_ms,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.currency_symbol.trim().is_empty() {
            return Err(anyhow::anyhow!("CURRENCY_SYMBOL must not be empty"));
        }

        if self.snackbar_duration_ms == 0 || self.snackbar_duration_ms > MAX_SNACKBAR_MS {
            return Err(anyhow::anyhow!(
                "SNACKBAR_DURATION_MS must be between 1 and {}",
                MAX_SNACKBAR_MS
            ));
        }

        Ok(())
    }

    pub fn snackbar_duration(&self) -> Duration {
        Duration::from_millis(self.snackbar_duration_ms)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
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
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.snackbar_duration(), Duration::from_secs(4));
        assert!(!config.is_production());
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("CURRENCY_SYMBOL", "$"),
            ("LOG_LEVEL", "debug"),
            ("APP_ENV", "production"),
            ("SNACKBAR_DURATION_MS", "1500"),
        ]))
        .unwrap();

        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.log_level, "debug");
        assert!(config.is_production());
        assert_eq!(config.snackbar_duration(), Duration::from_millis(1500));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Config::from_lookup(lookup_from(&[("CURRENCY_SYMBOL", "  ")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("SNACKBAR_DURATION_MS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("SNACKBAR_DURATION_MS", "0")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[("SNACKBAR_DURATION_MS", "60001")])).is_err());
    }
}
