use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::error::{BoardError, BoardResult};

// ---------- Board ----------
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BoardConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_text_color")]
    pub text_color: String,
    #[serde(default = "default_display_seconds")]
    pub display_seconds: u64,
    #[serde(default = "default_scroll_speed")]
    pub scroll_speed: f64,
    #[serde(default = "default_refresh_interval_hours")]
    pub refresh_interval_hours: u64,
    #[serde(default = "default_show_header")]
    pub show_header: bool,
}

fn default_enabled() -> bool {
    true
}

fn default_text_color() -> String {
    "yellow".to_string()
}

fn default_display_seconds() -> u64 {
    10
}

fn default_scroll_speed() -> f64 {
    0.05
}

fn default_refresh_interval_hours() -> u64 {
    1
}

fn default_show_header() -> bool {
    true
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            text_color: default_text_color(),
            display_seconds: default_display_seconds(),
            scroll_speed: default_scroll_speed(),
            refresh_interval_hours: default_refresh_interval_hours(),
            show_header: default_show_header(),
        }
    }
}

impl BoardConfig {
    pub fn validate(&self) -> BoardResult<()> {
        if !self.scroll_speed.is_finite() || self.scroll_speed < 0.0 {
            return Err(BoardError::config(format!(
                "scroll_speed must be a non-negative number, got {}",
                self.scroll_speed
            )));
        }
        Ok(())
    }

    /// How long a static (non-scrolling) joke stays on screen.
    pub fn display_duration(&self) -> Duration {
        Duration::from_secs(self.display_seconds)
    }

    /// Delay between scroll frames.
    pub fn scroll_delay(&self) -> Duration {
        Duration::from_secs_f64(self.scroll_speed)
    }

    pub fn refresh_interval(&self) -> chrono::Duration {
        chrono::Duration::hours(self.refresh_interval_hours as i64)
    }
}

// ---------- Loader ----------
pub fn load(path: impl AsRef<Path>) -> BoardResult<BoardConfig> {
    let path = path.as_ref();
    let txt = std::fs::read_to_string(path)
        .map_err(|e| BoardError::config(format!("read {}: {}", path.display(), e)))?;
    let cfg: BoardConfig = serde_json::from_str(&txt)
        .map_err(|e| BoardError::config(format!("parse {}: {}", path.display(), e)))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_keys() {
        let cfg: BoardConfig = serde_json::from_str("{}").unwrap();
        assert!(cfg.enabled);
        assert_eq!(cfg.text_color, "yellow");
        assert_eq!(cfg.display_seconds, 10);
        assert_eq!(cfg.scroll_speed, 0.05);
        assert_eq!(cfg.refresh_interval_hours, 1);
        assert!(cfg.show_header);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let cfg: BoardConfig = serde_json::from_str(
            r##"{
                "enabled": false,
                "text_color": "#00ff00",
                "display_seconds": 5,
                "scroll_speed": 0.02,
                "refresh_interval_hours": 6,
                "show_header": false
            }"##,
        )
        .unwrap();
        assert!(!cfg.enabled);
        assert_eq!(cfg.text_color, "#00ff00");
        assert_eq!(cfg.display_seconds, 5);
        assert_eq!(cfg.scroll_speed, 0.02);
        assert_eq!(cfg.refresh_interval_hours, 6);
        assert!(!cfg.show_header);
    }

    #[test]
    fn validate_rejects_negative_scroll_speed() {
        let cfg = BoardConfig {
            scroll_speed: -0.05,
            ..BoardConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_nan_scroll_speed() {
        let cfg = BoardConfig {
            scroll_speed: f64::NAN,
            ..BoardConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn duration_helpers() {
        let cfg = BoardConfig::default();
        assert_eq!(cfg.display_duration(), Duration::from_secs(10));
        assert_eq!(cfg.scroll_delay(), Duration::from_secs_f64(0.05));
        assert_eq!(cfg.refresh_interval(), chrono::Duration::hours(1));
    }
}
