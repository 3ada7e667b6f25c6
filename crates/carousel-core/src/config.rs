use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (log file lives here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
        }
    }
}

/// Gesture resolution settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Release speed (units/second) above which a drag forces a one-item step
    #[serde(default = "default_velocity_threshold")]
    pub velocity_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            velocity_threshold: default_velocity_threshold(),
        }
    }
}

impl CarouselConfig {
    /// Reject thresholds that would make release decisions meaningless
    pub fn validate(&self) -> crate::Result<()> {
        if !self.velocity_threshold.is_finite() || self.velocity_threshold <= 0.0 {
            return Err(crate::Error::Config(format!(
                "velocity_threshold must be a positive number, got {}",
                self.velocity_threshold
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Pixel-equivalent width of one terminal column, used to scale drag velocity
    #[serde(default = "default_column_width_px")]
    pub column_width_px: f64,
    /// Settle animation
    #[serde(default)]
    pub settle: SettleConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            column_width_px: default_column_width_px(),
            settle: SettleConfig::default(),
        }
    }
}

/// Easing curve applied to the settle animation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the animation
    None,
    Linear,
    #[default]
    Cubic,
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettleConfig {
    /// Animate the strip into place (false = jump)
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Settle duration in milliseconds
    #[serde(default = "default_settle_duration")]
    pub duration_ms: u64,
    /// Easing curve
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate while an animation or drag is in flight
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            duration_ms: default_settle_duration(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("carousel")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_velocity_threshold() -> f64 {
    500.0
}

fn default_tick_rate() -> u64 {
    100
}

fn default_column_width_px() -> f64 {
    8.0
}

fn default_true() -> bool {
    true
}

fn default_settle_duration() -> u64 {
    300
}

fn default_animation_fps() -> u32 {
    60
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from an explicit path, defaults if it does not exist
    pub fn load_from(path: &std::path::Path) -> crate::Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to file, creating parent directories
    pub fn save_to(&self, path: &std::path::Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn validate(&self) -> crate::Result<()> {
        self.carousel.validate()?;
        if !self.ui.column_width_px.is_finite() || self.ui.column_width_px <= 0.0 {
            return Err(crate::Error::Config(format!(
                "ui.column_width_px must be a positive number, got {}",
                self.ui.column_width_px
            )));
        }
        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/carousel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("carousel")
            .join("config.toml")
    }

    /// Get the log file path
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("carousel.log")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.carousel.velocity_threshold, 500.0);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert!(config.ui.settle.enabled);
        assert_eq!(config.ui.settle.easing, EasingType::Cubic);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [carousel]
            velocity_threshold = 750.0

            [ui.settle]
            easing = "ease_out"
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.velocity_threshold, 750.0);
        assert_eq!(config.ui.settle.easing, EasingType::EaseOut);
        assert_eq!(config.ui.settle.duration_ms, 300);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_non_positive_threshold_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = CarouselConfig {
                velocity_threshold: bad,
            };
            assert!(
                matches!(config.validate(), Err(crate::Error::Config(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_load_from_rejects_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[carousel]\nvelocity_threshold = -5.0\n").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = AppConfig::default();
        config.ui.column_width_px = 10.0;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.ui.column_width_px, 10.0);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.carousel, CarouselConfig::default());
    }
}
