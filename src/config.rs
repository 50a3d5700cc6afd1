use crate::keymap::Keymap;
use crate::navigation::ScreenId;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name shown in the header of every screen
    #[serde(default = "default_kiosk_name")]
    pub kiosk_name: String,
    /// UI theme: "dark", "light" or "nocolor"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Session timing (inactivity and simulated delays)
    #[serde(default)]
    pub timing: TimingConfig,
    /// Keyboard shortcuts
    #[serde(default)]
    pub keymap: Keymap,
}

/// Session timing, all in milliseconds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Idle time after which the session is ended
    #[serde(default = "default_inactivity_timeout_ms")]
    pub inactivity_timeout_ms: u64,
    /// How often the inactivity check runs
    #[serde(default = "default_inactivity_poll_ms")]
    pub inactivity_poll_ms: u64,
    /// Simulated identity card / QR read
    #[serde(default = "default_identity_read_delay_ms")]
    pub identity_read_delay_ms: u64,
    /// Simulated identity verification
    #[serde(default = "default_verification_delay_ms")]
    pub verification_delay_ms: u64,
    /// Simulated application submission
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

pub fn default_kiosk_name() -> String {
    "MyDigital Citizen Services".to_string()
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_inactivity_timeout_ms() -> u64 {
    600_000
}

fn default_inactivity_poll_ms() -> u64 {
    10_000
}

fn default_identity_read_delay_ms() -> u64 {
    2_000
}

fn default_verification_delay_ms() -> u64 {
    2_000
}

fn default_processing_delay_ms() -> u64 {
    3_000
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            inactivity_timeout_ms: default_inactivity_timeout_ms(),
            inactivity_poll_ms: default_inactivity_poll_ms(),
            identity_read_delay_ms: default_identity_read_delay_ms(),
            verification_delay_ms: default_verification_delay_ms(),
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

impl TimingConfig {
    pub fn inactivity_timeout(&self) -> Duration {
        Duration::from_millis(self.inactivity_timeout_ms)
    }

    pub fn inactivity_poll(&self) -> Duration {
        Duration::from_millis(self.inactivity_poll_ms)
    }

    /// Delay before a timed screen signals completion, `None` for screens
    /// that wait on the user.
    pub fn completion_delay(&self, screen: ScreenId) -> Option<Duration> {
        let ms = match screen {
            ScreenId::ReadingId => self.identity_read_delay_ms,
            ScreenId::Verification => self.verification_delay_ms,
            ScreenId::Processing => self.processing_delay_ms,
            _ => return None,
        };
        Some(Duration::from_millis(ms))
    }

    /// Reject values that would make the session unusable
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("inactivity_timeout_ms", self.inactivity_timeout_ms),
            ("inactivity_poll_ms", self.inactivity_poll_ms),
            ("identity_read_delay_ms", self.identity_read_delay_ms),
            ("verification_delay_ms", self.verification_delay_ms),
            ("processing_delay_ms", self.processing_delay_ms),
        ];
        for (name, value) in fields {
            if value == 0 {
                bail!("timing.{} must be greater than zero", name);
            }
        }
        if self.inactivity_poll_ms > self.inactivity_timeout_ms {
            bail!(
                "timing.inactivity_poll_ms ({}) must not exceed timing.inactivity_timeout_ms ({})",
                self.inactivity_poll_ms,
                self.inactivity_timeout_ms
            );
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kiosk_name: default_kiosk_name(),
            theme: default_theme(),
            timing: TimingConfig::default(),
            keymap: Keymap::default(),
        }
    }
}

impl Config {
    /// Load configuration from file, writing the defaults if it does not exist
    pub fn load_or_create(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: Config =
                toml::from_str(&content).with_context(|| "Failed to parse config file")?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", config_path))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save(config_path)?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.timing.validate()?;
        self.keymap.validate()?;
        Ok(())
    }

    /// Render the effective configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).with_context(|| "Failed to serialize config")
    }
}
