//! Swap configuration
//!
//! The form only needs to know:
//! - the two assets and their fixed balances
//! - the coin → token rate
//! - how long the simulated confirmation takes
//! - the constants of the time estimate
//!
//! Everything has a built-in default. An optional `~/.mockswap/config.toml`
//! overrides individual values; it is read once at startup and never written.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::asset::{Asset, AssetKind};

/// Highest precision an asset may declare.
pub const MAX_PRECISION: u32 = 18;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapConfig {
    /// Token received per coin sent
    #[serde(default = "default_rate")]
    pub rate: Decimal,

    /// Simulated settlement delay after pressing confirm
    #[serde(default = "default_confirm_delay_ms")]
    pub confirm_delay_ms: u64,

    /// The volatile coin
    #[serde(default = "default_coin")]
    pub coin: Asset,

    /// The stable token, valued at one USD
    #[serde(default = "default_token")]
    pub token: Asset,

    #[serde(default)]
    pub estimate: EstimateConfig,
}

/// Constants of the "estimated transaction time" heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimateConfig {
    pub base_minutes: f64,
    pub minutes_per_usd: f64,
    pub jitter_low: f64,
    pub jitter_high: f64,
    pub min_minutes: u32,
    pub max_minutes: u32,
}

impl Default for EstimateConfig {
    fn default() -> Self {
        Self {
            base_minutes: 10.0,
            minutes_per_usd: 0.05,
            jitter_low: 0.7,
            jitter_high: 1.3,
            min_minutes: 5,
            max_minutes: 30,
        }
    }
}

fn default_coin() -> Asset {
    Asset {
        name: "Ether".to_string(),
        symbol: "ETH".to_string(),
        icon: "eth.svg".to_string(),
        balance: dec!(3.5),
        precision: 6,
    }
}

fn default_token() -> Asset {
    Asset {
        name: "USD Coin".to_string(),
        symbol: "USDC".to_string(),
        icon: "usdc.svg".to_string(),
        balance: dec!(5000),
        precision: 2,
    }
}

fn default_rate() -> Decimal {
    dec!(2184.33)
}

fn default_confirm_delay_ms() -> u64 {
    2000
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            rate: default_rate(),
            confirm_delay_ms: default_confirm_delay_ms(),
            coin: default_coin(),
            token: default_token(),
            estimate: EstimateConfig::default(),
        }
    }
}

impl SwapConfig {
    /// Load configuration from `~/.mockswap/config.toml`, falling back to the
    /// built-in defaults when the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!("📝 No config file, using built-in defaults");
            Ok(Self::default())
        }
    }

    /// Load and validate configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        log::info!("📁 Loading config from: {}", path.display());
        let contents = fs::read_to_string(path)?;
        let config: SwapConfig = toml::from_str(&contents)?;
        config.validate()?;
        log::info!(
            "✅ Config loaded: 1 {} = {} {}",
            config.coin.symbol,
            config.rate,
            config.token.symbol
        );
        Ok(config)
    }

    /// Get config file path
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let mut path = Self::data_dir()?;
        path.push("config.toml");
        Ok(path)
    }

    /// Get base data directory
    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        let mut path = home;
        path.push(".mockswap");
        Ok(path)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rate <= Decimal::ZERO {
            return Err(ConfigError::InvalidRate(self.rate));
        }

        for asset in [&self.coin, &self.token] {
            if asset.symbol.trim().is_empty() {
                return Err(ConfigError::InvalidAsset(
                    "asset symbol must not be empty".to_string(),
                ));
            }
            if asset.balance <= Decimal::ZERO {
                return Err(ConfigError::InvalidAsset(format!(
                    "{} balance must be positive",
                    asset.symbol
                )));
            }
            if asset.precision > MAX_PRECISION {
                return Err(ConfigError::InvalidAsset(format!(
                    "{} precision {} exceeds {}",
                    asset.symbol, asset.precision, MAX_PRECISION
                )));
            }
        }

        if self.coin.symbol == self.token.symbol {
            return Err(ConfigError::InvalidAsset(format!(
                "both assets use the symbol {}",
                self.coin.symbol
            )));
        }

        let est = &self.estimate;
        if !(est.jitter_low > 0.0 && est.jitter_low <= est.jitter_high) {
            return Err(ConfigError::InvalidEstimate(format!(
                "jitter range [{}, {}] is empty or not positive",
                est.jitter_low, est.jitter_high
            )));
        }
        if est.min_minutes > est.max_minutes {
            return Err(ConfigError::InvalidEstimate(format!(
                "min_minutes {} exceeds max_minutes {}",
                est.min_minutes, est.max_minutes
            )));
        }

        Ok(())
    }

    /// Look up an asset.
    pub fn asset(&self, kind: AssetKind) -> &Asset {
        match kind {
            AssetKind::Coin => &self.coin,
            AssetKind::Token => &self.token,
        }
    }

    /// Conversion factor from one asset to another.
    ///
    /// Token → coin is the exact decimal inverse of the configured rate.
    pub fn rate(&self, from: AssetKind, to: AssetKind) -> Decimal {
        match (from, to) {
            (AssetKind::Coin, AssetKind::Token) => self.rate,
            (AssetKind::Token, AssetKind::Coin) => Decimal::ONE
                .checked_div(self.rate)
                .unwrap_or(Decimal::ZERO),
            _ => Decimal::ONE,
        }
    }

    /// USD value of an amount, taking the token at par.
    pub fn usd_value(&self, kind: AssetKind, amount: Decimal) -> Decimal {
        amount
            .checked_mul(self.rate(kind, AssetKind::Token))
            .unwrap_or(Decimal::MAX)
    }

    pub fn confirm_delay(&self) -> Duration {
        Duration::from_millis(self.confirm_delay_ms)
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Home directory not found")]
    NoHomeDir,

    #[error("Invalid rate: {0} (must be positive)")]
    InvalidRate(Decimal),

    #[error("Invalid asset: {0}")]
    InvalidAsset(String),

    #[error("Invalid estimate settings: {0}")]
    InvalidEstimate(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = SwapConfig::default();
        assert_eq!(config.coin.symbol, "ETH");
        assert_eq!(config.token.symbol, "USDC");
        assert_eq!(config.rate, dec!(2184.33));
        assert_eq!(config.confirm_delay(), Duration::from_secs(2));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rate_directions() {
        let config = SwapConfig::default();
        assert_eq!(config.rate(AssetKind::Coin, AssetKind::Token), dec!(2184.33));
        assert_eq!(config.rate(AssetKind::Coin, AssetKind::Coin), Decimal::ONE);

        let inverse = config.rate(AssetKind::Token, AssetKind::Coin);
        let product = inverse * dec!(2184.33);
        assert!((product - Decimal::ONE).abs() < dec!(0.000000000001));
    }

    #[test]
    fn test_usd_value() {
        let config = SwapConfig::default();
        assert_eq!(config.usd_value(AssetKind::Coin, dec!(2)), dec!(4368.66));
        assert_eq!(config.usd_value(AssetKind::Token, dec!(150.25)), dec!(150.25));
    }

    #[test]
    fn test_validation() {
        let mut config = SwapConfig::default();
        config.rate = Decimal::ZERO;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRate(_))));

        let mut config = SwapConfig::default();
        config.token.symbol = "ETH".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::InvalidAsset(_))));

        let mut config = SwapConfig::default();
        config.coin.precision = 19;
        assert!(config.validate().is_err());

        let mut config = SwapConfig::default();
        config.estimate.min_minutes = 40;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidEstimate(_))
        ));
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rate = \"2000.5\"").unwrap();
        writeln!(file, "confirm_delay_ms = 500").unwrap();
        writeln!(file, "[estimate]").unwrap();
        writeln!(file, "max_minutes = 45").unwrap();

        let config = SwapConfig::load_from(file.path()).unwrap();
        assert_eq!(config.rate, dec!(2000.5));
        assert_eq!(config.confirm_delay_ms, 500);
        assert_eq!(config.estimate.max_minutes, 45);
        assert_eq!(config.estimate.min_minutes, 5);
        assert_eq!(config.coin, SwapConfig::default().coin);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rate = \"-1\"").unwrap();
        assert!(SwapConfig::load_from(file.path()).is_err());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rate = [").unwrap();
        assert!(matches!(
            SwapConfig::load_from(file.path()),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let config = SwapConfig::default();
        let toml = toml::to_string(&config).unwrap();
        let deserialized: SwapConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config, deserialized);
    }
}
