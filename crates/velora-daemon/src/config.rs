//! Configuration file management.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use velora_pricing::policy::{self, PricingPolicy};
use velora_types::Credits;

/// Complete daemon configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Pricing policy overrides.
    #[serde(default)]
    pub pricing: PricingConfig,
    /// Advanced settings.
    #[serde(default)]
    pub advanced: AdvancedConfig,
}

/// Storage configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory. Empty = platform default.
    #[serde(default)]
    pub data_dir: String,
}

/// Pricing policy configuration.
///
/// Operators can tune the bounds and ratios here; the values are validated
/// into a [`PricingPolicy`] at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_min_rate")]
    pub min_rate: Credits,
    #[serde(default = "default_max_rate")]
    pub max_rate: Credits,
    #[serde(default = "default_min_rate")]
    pub min_rate_15: Credits,
    #[serde(default = "default_min_rate_30")]
    pub min_rate_30: Credits,
    #[serde(default = "default_min_rate_60")]
    pub min_rate_60: Credits,
    #[serde(default = "default_min_rate_90")]
    pub min_rate_90: Credits,
    /// Minimum credits per minute across all durations.
    #[serde(default = "default_per_minute_floor")]
    pub per_minute_floor: f64,
    /// Fraction of the shorter duration's per-minute price a longer
    /// duration must retain.
    #[serde(default = "default_consistency_floor")]
    pub consistency_floor: f64,
    #[serde(default = "default_creator_share_pct")]
    pub creator_share_pct: u8,
    #[serde(default = "default_audio_rate_pct")]
    pub audio_rate_pct: u8,
    #[serde(default = "default_micro_usd_per_credit")]
    pub micro_usd_per_credit: u64,
}

/// Advanced configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancedConfig {
    /// Log level: "debug" | "info" | "warn" | "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Log file path. Empty = stderr.
    #[serde(default)]
    pub log_file: String,
}

// Default value functions

fn default_min_rate() -> Credits {
    policy::MIN_RATE
}

fn default_max_rate() -> Credits {
    policy::MAX_RATE
}

fn default_min_rate_30() -> Credits {
    policy::MIN_RATE_30
}

fn default_min_rate_60() -> Credits {
    policy::MIN_RATE_60
}

fn default_min_rate_90() -> Credits {
    policy::MIN_RATE_90
}

fn default_per_minute_floor() -> f64 {
    policy::PER_MINUTE_FLOOR
}

fn default_consistency_floor() -> f64 {
    policy::CONSISTENCY_FLOOR
}

fn default_creator_share_pct() -> u8 {
    policy::CREATOR_SHARE_PCT
}

fn default_audio_rate_pct() -> u8 {
    policy::AUDIO_RATE_PCT
}

fn default_micro_usd_per_credit() -> u64 {
    policy::MICRO_USD_PER_CREDIT
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            min_rate: default_min_rate(),
            max_rate: default_max_rate(),
            min_rate_15: default_min_rate(),
            min_rate_30: default_min_rate_30(),
            min_rate_60: default_min_rate_60(),
            min_rate_90: default_min_rate_90(),
            per_minute_floor: default_per_minute_floor(),
            consistency_floor: default_consistency_floor(),
            creator_share_pct: default_creator_share_pct(),
            audio_rate_pct: default_audio_rate_pct(),
            micro_usd_per_credit: default_micro_usd_per_credit(),
        }
    }
}

impl Default for AdvancedConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_file: String::new(),
        }
    }
}

impl PricingConfig {
    /// Materialize and validate the pricing policy.
    pub fn to_policy(&self) -> anyhow::Result<PricingPolicy> {
        let policy = PricingPolicy {
            min_rate: self.min_rate,
            max_rate: self.max_rate,
            min_rate_15: self.min_rate_15,
            min_rate_30: self.min_rate_30,
            min_rate_60: self.min_rate_60,
            min_rate_90: self.min_rate_90,
            per_minute_floor: self.per_minute_floor,
            consistency_floor: self.consistency_floor,
            creator_share_pct: self.creator_share_pct,
            audio_rate_pct: self.audio_rate_pct,
            micro_usd_per_credit: self.micro_usd_per_credit,
        };
        policy.validate()?;
        Ok(policy)
    }
}

impl DaemonConfig {
    /// Load configuration from the default config file location.
    ///
    /// Falls back to defaults if the file does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: DaemonConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> PathBuf {
        if self.storage.data_dir.is_empty() {
            Self::default_data_dir()
        } else {
            PathBuf::from(&self.storage.data_dir)
        }
    }

    /// Get the config file path.
    fn config_path() -> PathBuf {
        // Check env var override first
        if let Ok(dir) = std::env::var("VELORA_DATA_DIR") {
            return PathBuf::from(dir).join("config.toml");
        }
        Self::default_data_dir().join("config.toml")
    }

    /// Platform-specific default data directory.
    fn default_data_dir() -> PathBuf {
        if let Ok(dir) = std::env::var("VELORA_DATA_DIR") {
            return PathBuf::from(dir);
        }
        #[cfg(target_os = "macos")]
        {
            dirs_fallback("Library/Application Support/Velora")
        }
        #[cfg(target_os = "windows")]
        {
            dirs_fallback("Velora")
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            dirs_fallback(".velora")
        }
    }
}

/// Fallback home directory resolution.
fn dirs_fallback(subpath: &str) -> PathBuf {
    std::env::var("HOME")
        .map(|h| PathBuf::from(h).join(subpath))
        .unwrap_or_else(|_| PathBuf::from("/tmp/velora"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DaemonConfig::default();
        assert_eq!(config.pricing.min_rate, 200);
        assert_eq!(config.pricing.max_rate, 900);
        assert_eq!(config.pricing.creator_share_pct, 70);
        assert_eq!(config.advanced.log_level, "info");
    }

    #[test]
    fn test_default_policy_materializes() {
        let policy = DaemonConfig::default().pricing.to_policy().expect("valid");
        assert_eq!(policy, velora_pricing::policy::DEFAULT_POLICY);
    }

    #[test]
    fn test_config_serialization() {
        let config = DaemonConfig::default();
        let toml_str = toml::to_string(&config).expect("serialize");
        let _parsed: DaemonConfig = toml::from_str(&toml_str).expect("parse");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: DaemonConfig = toml::from_str(
            "[pricing]\nmax_rate = 1200\n",
        )
        .expect("parse");
        assert_eq!(config.pricing.max_rate, 1200);
        assert_eq!(config.pricing.min_rate, 200);
    }

    #[test]
    fn test_bad_policy_rejected() {
        let config: DaemonConfig = toml::from_str(
            "[pricing]\nconsistency_floor = 1.5\n",
        )
        .expect("parse");
        assert!(config.pricing.to_policy().is_err());
    }
}
