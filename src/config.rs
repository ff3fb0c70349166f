//! Playback configuration.
//!
//! Every field has a default, so an empty JSON object (`{}`) is a valid configuration.

use std::path::Path;

use crate::chain::builder::MAX_EPICYCLES;
use crate::coeffs::parse::ParseMode;
use crate::foundation::core::{Canvas, Fps, Vec2};
use crate::foundation::error::{EpicycleError, EpicycleResult};

/// Default playback length of one period, in milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 10_000.0;

/// Tunables for parsing, chain building and playback.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaybackConfig {
    /// Target frame rate.
    pub fps: Fps,
    /// Cap on the number of epicycles built from the input.
    pub max_epicycles: usize,
    /// Drawing area.
    pub canvas: Canvas,
    /// Where chain-space `(0, 0)` lands on the canvas. Defaults to the canvas center.
    pub origin: Option<Vec2>,
    /// Handling of non-numeric coefficient tokens.
    pub parse_mode: ParseMode,
    /// Real-time delay before the first frame.
    pub lead_in_ms: u64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            fps: Fps::DEFAULT,
            max_epicycles: MAX_EPICYCLES,
            canvas: Canvas::default(),
            origin: None,
            parse_mode: ParseMode::default(),
            lead_in_ms: 0,
        }
    }
}

impl PlaybackConfig {
    /// Check field ranges.
    pub fn validate(&self) -> EpicycleResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.max_epicycles == 0 {
            return Err(EpicycleError::validation("max_epicycles must be > 0"));
        }
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(EpicycleError::validation("canvas must be non-empty"));
        }
        if let Some(o) = self.origin
            && !(o.x.is_finite() && o.y.is_finite())
        {
            return Err(EpicycleError::validation("origin must be finite"));
        }
        Ok(())
    }

    /// Effective origin offset.
    pub fn origin(&self) -> Vec2 {
        self.origin.unwrap_or_else(|| self.canvas.center())
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> EpicycleResult<Self> {
        let cfg: Self =
            serde_json::from_str(json).map_err(|e| EpicycleError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read and validate a JSON configuration file.
    pub fn load(path: &Path) -> EpicycleResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            EpicycleError::Other(
                anyhow::Error::new(e).context(format!("read config '{}'", path.display())),
            )
        })?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
