//! Page configuration.
//!
//! Every field has a default, so an empty JSON object (or no file at all) is
//! a complete configuration. Durations are stored in milliseconds to keep the
//! file format flat.

use std::ops::Range;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{PageError, PageResult};
use crate::theme::ThemePalette;

/// Text rendered by the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageCopy {
    pub title: String,
    pub subtitle: String,
    pub action_label: String,
}

impl Default for PageCopy {
    fn default() -> Self {
        Self {
            title: "Welcome to Lumen".to_string(),
            subtitle: "light, color and a little motion".to_string(),
            action_label: "Shift the colors".to_string(),
        }
    }
}

/// Fixed delays and intervals, in milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    /// Stand-in for "the next paint frame"
    pub frame_ms: u64,
    pub typewriter_start_ms: u64,
    pub typewriter_interval_ms: u64,
    pub subtitle_delay_ms: u64,
    pub action_delay_ms: u64,
    pub theme_cycle_ms: u64,
    pub cooldown_ms: u64,
    pub pulse_ms: u64,
    pub ripple_ms: u64,
    pub notification_visible_ms: u64,
    pub notification_fade_ms: u64,
    pub resize_debounce_ms: u64,
    pub pointer_debounce_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            frame_ms: 16,
            typewriter_start_ms: 500,
            typewriter_interval_ms: 100,
            subtitle_delay_ms: 1500,
            action_delay_ms: 2000,
            theme_cycle_ms: 8000,
            cooldown_ms: 600,
            pulse_ms: 150,
            ripple_ms: 600,
            notification_visible_ms: 3000,
            notification_fade_ms: 300,
            resize_debounce_ms: 250,
            pointer_debounce_ms: 16,
        }
    }
}

impl Timings {
    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn typewriter_start(&self) -> Duration {
        Duration::from_millis(self.typewriter_start_ms)
    }

    pub fn typewriter_interval(&self) -> Duration {
        Duration::from_millis(self.typewriter_interval_ms)
    }

    pub fn subtitle_delay(&self) -> Duration {
        Duration::from_millis(self.subtitle_delay_ms)
    }

    pub fn action_delay(&self) -> Duration {
        Duration::from_millis(self.action_delay_ms)
    }

    pub fn theme_cycle(&self) -> Duration {
        Duration::from_millis(self.theme_cycle_ms)
    }

    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    pub fn pulse(&self) -> Duration {
        Duration::from_millis(self.pulse_ms)
    }

    pub fn ripple(&self) -> Duration {
        Duration::from_millis(self.ripple_ms)
    }

    pub fn notification_visible(&self) -> Duration {
        Duration::from_millis(self.notification_visible_ms)
    }

    pub fn notification_fade(&self) -> Duration {
        Duration::from_millis(self.notification_fade_ms)
    }

    pub fn resize_debounce(&self) -> Duration {
        Duration::from_millis(self.resize_debounce_ms)
    }

    pub fn pointer_debounce(&self) -> Duration {
        Duration::from_millis(self.pointer_debounce_ms)
    }

    fn validate(&self) -> PageResult<()> {
        let must_be_positive = [
            ("frame_ms", self.frame_ms),
            ("typewriter_interval_ms", self.typewriter_interval_ms),
            ("theme_cycle_ms", self.theme_cycle_ms),
            ("cooldown_ms", self.cooldown_ms),
        ];
        for (name, value) in must_be_positive {
            if value == 0 {
                return Err(PageError::InvalidConfig(format!("{} must be > 0", name)));
            }
        }
        Ok(())
    }
}

/// Randomization ranges for the background particle field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParticleConfig {
    pub count: usize,
    /// Size in pixels, `[size_min_px, size_max_px)`
    pub size_min_px: f64,
    pub size_max_px: f64,
    /// Float animation period in seconds
    pub duration_min_s: f64,
    pub duration_max_s: f64,
    /// Animation start delay in seconds, `[0, delay_max_s)`; zero disables it
    pub delay_max_s: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 50,
            size_min_px: 1.0,
            size_max_px: 5.0,
            duration_min_s: 10.0,
            duration_max_s: 30.0,
            delay_max_s: 5.0,
        }
    }
}

impl ParticleConfig {
    pub fn size_range(&self) -> Range<f64> {
        self.size_min_px..self.size_max_px
    }

    pub fn duration_range(&self) -> Range<f64> {
        self.duration_min_s..self.duration_max_s
    }

    fn validate(&self) -> PageResult<()> {
        if !(self.size_min_px > 0.0 && self.size_min_px < self.size_max_px) {
            return Err(PageError::InvalidConfig(format!(
                "particle size range {}..{} is empty or non-positive",
                self.size_min_px, self.size_max_px
            )));
        }
        if !(self.duration_min_s > 0.0 && self.duration_min_s < self.duration_max_s) {
            return Err(PageError::InvalidConfig(format!(
                "particle duration range {}..{} is empty or non-positive",
                self.duration_min_s, self.duration_max_s
            )));
        }
        if !(self.delay_max_s.is_finite() && self.delay_max_s >= 0.0) {
            return Err(PageError::InvalidConfig(
                "particle delay_max_s must be a finite number >= 0".to_string(),
            ));
        }
        Ok(())
    }
}

/// Complete page configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub copy: PageCopy,
    pub timings: Timings,
    pub particles: ParticleConfig,
    /// Maximum container offset in pixels when the pointer sits at a viewport edge
    pub parallax_strength_px: f64,
    pub palette: ThemePalette,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            copy: PageCopy::default(),
            timings: Timings::default(),
            particles: ParticleConfig::default(),
            parallax_strength_px: 20.0,
            palette: ThemePalette::default(),
        }
    }
}

impl PageConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> PageResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(raw: &str) -> PageResult<Self> {
        let config: PageConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// This config if it validates, otherwise the defaults.
    ///
    /// The rejection is logged; nothing of the invalid config is kept.
    pub fn validated_or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                tracing::error!(error = %e, "Invalid page config, falling back to defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> PageResult<()> {
        self.timings.validate()?;
        self.particles.validate()?;
        if !self.parallax_strength_px.is_finite() || self.parallax_strength_px < 0.0 {
            return Err(PageError::InvalidConfig(
                "parallax_strength_px must be a finite, non-negative number".to_string(),
            ));
        }
        if self.copy.title.is_empty() {
            return Err(PageError::InvalidConfig("title must not be empty".to_string()));
        }
        Ok(())
    }
}
