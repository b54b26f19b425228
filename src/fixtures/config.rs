use anyhow::{anyhow, Context, Result};
use garde::Validate;
use serde::Deserialize;
use std::path::Path;

/// Env var pointing at a TOML file with fixture bounds.
pub const CONFIG_PATH_VAR: &str = "STRATEGY_FIXTURES_CONFIG";
/// Env var overriding the generator seed.
pub const SEED_VAR: &str = "STRATEGY_FIXTURES_SEED";

/// Bounds for randomly generated positions.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureConfig {
    /// Fixed seed for reproducible runs; a random one is drawn when unset.
    #[garde(skip)]
    pub seed: Option<u64>,
    #[garde(range(min = 1.0))]
    pub min_strike: f64,
    #[garde(custom(validate_strike_span(&self.min_strike)))]
    pub max_strike: f64,
    #[garde(range(min = 0.01))]
    pub max_option_price: f64,
    #[garde(custom(validate_stock_covers_options(&self.max_option_price)))]
    pub max_stock_price: f64,
    #[garde(range(min = 1))]
    pub max_shares: u32,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            seed: None,
            min_strike: 100.0,
            max_strike: 1000.0,
            max_option_price: 10.0,
            max_stock_price: 1000.0,
            max_shares: 200,
        }
    }
}

/// Four distinct whole-dollar strikes must fit between the bounds.
fn validate_strike_span(min_strike: &f64) -> impl FnOnce(&f64, &()) -> garde::Result + '_ {
    move |max_strike: &f64, (): &()| {
        if *max_strike < min_strike.ceil() + 3.0 {
            return Err(garde::Error::new(format!(
                "max_strike ({max_strike}) must leave room for four strikes \
                 above min_strike ({min_strike})"
            )));
        }
        Ok(())
    }
}

/// A stock must be able to outweigh a full set of option premiums.
fn validate_stock_covers_options(
    max_option_price: &f64,
) -> impl FnOnce(&f64, &()) -> garde::Result + '_ {
    move |max_stock_price: &f64, (): &()| {
        let floor = 2.0 * max_option_price + 1.0;
        if *max_stock_price < floor {
            return Err(garde::Error::new(format!(
                "max_stock_price ({max_stock_price}) must be at least {floor}"
            )));
        }
        Ok(())
    }
}

impl FixtureConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw).context("Failed to parse fixture config")?;
        config.checked()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read fixture config: {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("Invalid fixture config: {}", path.display()))
    }

    /// Build from environment variables (a `.env` file is honoured when present).
    ///
    /// | Env Var | Default | Purpose |
    /// |---------|---------|---------|
    /// | `STRATEGY_FIXTURES_CONFIG` | (none) | TOML file with bounds |
    /// | `STRATEGY_FIXTURES_SEED` | (random) | Generator seed |
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }

        let mut config = match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(raw) = std::env::var(SEED_VAR) {
            let seed = raw
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{SEED_VAR} must be an unsigned integer, got '{raw}'"))?;
            config.seed = Some(seed);
        }

        config.checked()
    }

    pub(crate) fn checked(self) -> Result<Self> {
        self.validate()
            .map_err(|report| anyhow!("Invalid fixture bounds: {report}"))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = FixtureConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_shares, 200);
    }

    #[test]
    fn toml_overrides_selected_fields() {
        let config = FixtureConfig::from_toml_str("seed = 7\nmax_strike = 250.0\n").unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_strike, 250.0);
        assert_eq!(config.min_strike, 100.0);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(FixtureConfig::from_toml_str("max_strikes = 5.0").is_err());
    }

    #[test]
    fn narrow_strike_range_is_rejected() {
        let err =
            FixtureConfig::from_toml_str("min_strike = 100.0\nmax_strike = 102.0").unwrap_err();
        assert!(err.to_string().contains("Invalid fixture bounds"), "{err}");
    }

    #[test]
    fn cheap_stock_is_rejected() {
        let config = FixtureConfig {
            max_option_price: 10.0,
            max_stock_price: 20.0,
            ..FixtureConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_option_price = 5.0\nmax_shares = 50").unwrap();
        let config = FixtureConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_option_price, 5.0);
        assert_eq!(config.max_shares, 50);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FixtureConfig::from_file("/nonexistent/fixtures.toml").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/fixtures.toml"));
    }
}
