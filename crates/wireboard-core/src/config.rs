//! Layout configuration: spacing, group floors, and drop policy.

use kurbo::Size;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Gap between a group's edges and its members, and between adjacent members.
pub const DEFAULT_PADDING: f64 = 20.0;
/// Smallest width a group may shrink to, even when empty.
pub const DEFAULT_MIN_GROUP_WIDTH: f64 = 400.0;
/// Smallest height a group may shrink to, even when empty.
pub const DEFAULT_MIN_GROUP_HEIGHT: f64 = 200.0;
/// Width assumed for an item with no usable declared width.
pub const DEFAULT_ITEM_WIDTH: f64 = 200.0;
/// Height assumed for an item with no usable declared height.
pub const DEFAULT_ITEM_HEIGHT: f64 = 150.0;
/// Fraction of a sibling's width a dropped item must cover before the
/// sibling's centre decides between "before" and "after".
pub const OVERLAP_THRESHOLD: f64 = 0.3;
/// Gaps at least this wide let a dropped item keep its drop x.
pub const WIDE_GAP: f64 = 100.0;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Padding must be finite and non-negative, got {0}")]
    InvalidPadding(f64),
    #[error("Minimum group size must be positive, got {0}x{1}")]
    InvalidMinimumSize(f64, f64),
    #[error("Default item size must be positive, got {0}x{1}")]
    InvalidDefaultItemSize(f64, f64),
    #[error("Overlap threshold must be within 0..=1, got {0}")]
    InvalidOverlapThreshold(f64),
    #[error("Wide gap must be finite and non-negative, got {0}")]
    InvalidWideGap(f64),
    #[error("Invalid layout config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parameters shared by every layout operation.
///
/// [`LayoutConfig::default`] packs cards tightly inside wide groups.
/// [`LayoutConfig::spacious`] spreads them out inside square ones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap around and between members.
    pub padding: f64,
    /// Floor for a group's derived size.
    pub min_group_size: Size,
    /// Fallback for items without usable dimensions.
    pub default_item_size: Size,
    /// Overlap fraction above which a sibling's centre decides placement.
    pub overlap_threshold: f64,
    /// Minimum gap between neighbours for the drop x to be honoured.
    pub wide_gap: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            min_group_size: Size::new(DEFAULT_MIN_GROUP_WIDTH, DEFAULT_MIN_GROUP_HEIGHT),
            default_item_size: Size::new(DEFAULT_ITEM_WIDTH, DEFAULT_ITEM_HEIGHT),
            overlap_threshold: OVERLAP_THRESHOLD,
            wide_gap: WIDE_GAP,
        }
    }
}

impl LayoutConfig {
    /// Wider spacing with a square 200x200 group floor.
    pub fn spacious() -> Self {
        Self {
            padding: 50.0,
            min_group_size: Size::new(200.0, 200.0),
            ..Self::default()
        }
    }

    /// Check that every parameter is usable by the layout functions.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(ConfigError::InvalidPadding(self.padding));
        }
        if !is_positive(self.min_group_size) {
            return Err(ConfigError::InvalidMinimumSize(
                self.min_group_size.width,
                self.min_group_size.height,
            ));
        }
        if !is_positive(self.default_item_size) {
            return Err(ConfigError::InvalidDefaultItemSize(
                self.default_item_size.width,
                self.default_item_size.height,
            ));
        }
        if !(0.0..=1.0).contains(&self.overlap_threshold) {
            return Err(ConfigError::InvalidOverlapThreshold(self.overlap_threshold));
        }
        if !self.wide_gap.is_finite() || self.wide_gap < 0.0 {
            return Err(ConfigError::InvalidWideGap(self.wide_gap));
        }
        Ok(())
    }

    /// Parse and validate a config from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

fn is_positive(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}
