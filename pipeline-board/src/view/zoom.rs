//! Zoom level, stepped within configured limits

use crate::config::ZoomConfig;
use serde::{Deserialize, Serialize};

/// Display scale in whole percent. 100 is natural size.
///
/// Steps that would leave `[min_percent, max_percent]` are ignored rather
/// than clamped, so the level only ever lands on reachable values. A level
/// that is already outside the range (from a stale snapshot or a changed
/// config) snaps to the nearest limit on the next step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoomLevel(u16);

impl ZoomLevel {
    /// The configured starting level
    pub fn initial(config: &ZoomConfig) -> Self {
        Self(config.default_percent)
    }

    /// The level in whole percent
    pub fn percent(self) -> u16 {
        self.0
    }

    /// Multiplier applied to widths
    pub fn factor(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// Step up by `step_percent`
    pub fn zoom_in(self, config: &ZoomConfig) -> Self {
        if !self.in_range(config) {
            return self.clamp_to(config);
        }
        self.0
            .checked_add(config.step_percent)
            .and_then(|next| self.set(next, config))
            .unwrap_or(self)
    }

    /// Step down by `step_percent`
    pub fn zoom_out(self, config: &ZoomConfig) -> Self {
        if !self.in_range(config) {
            return self.clamp_to(config);
        }
        self.0
            .checked_sub(config.step_percent)
            .and_then(|next| self.set(next, config))
            .unwrap_or(self)
    }

    /// Back to the configured starting level
    pub fn reset(self, config: &ZoomConfig) -> Self {
        Self::initial(config)
    }

    /// The nearest level within the configured limits
    pub fn clamp_to(self, config: &ZoomConfig) -> Self {
        Self(self.0.clamp(config.min_percent, config.max_percent))
    }

    /// Whether the level lies within the configured limits
    pub fn in_range(self, config: &ZoomConfig) -> bool {
        (config.min_percent..=config.max_percent).contains(&self.0)
    }

    /// Whether `zoom_in` would change the level
    pub fn can_zoom_in(self, config: &ZoomConfig) -> bool {
        self.zoom_in(config) != self
    }

    /// Whether `zoom_out` would change the level
    pub fn can_zoom_out(self, config: &ZoomConfig) -> bool {
        self.zoom_out(config) != self
    }

    fn set(self, percent: u16, config: &ZoomConfig) -> Option<Self> {
        let next = Self(percent);
        next.in_range(config).then_some(next)
    }
}

impl Default for ZoomLevel {
    fn default() -> Self {
        Self::initial(&ZoomConfig::default())
    }
}
