//! Engine configuration and the world geometry derived from it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEPTH_THRESHOLD_RATIO, SEA_TOP_RATIO, SHIP_WIDTH};

/// Errors returned when an [`EngineConfig`] cannot describe a playable world.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Width or height is zero or negative.
    #[error("world dimensions must be positive, got {width}x{height}")]
    NonPositiveDimensions {
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// The world is narrower than the ship, leaving no legal ship position.
    #[error("world width {width} is narrower than the ship ({min})")]
    WorldTooNarrow {
        /// Requested width.
        width: i32,
        /// Smallest accepted width.
        min: i32,
    },
}

/// Parameters for [`crate::Engine::new`].
///
/// # Example
///
/// ```
/// use naval_war_core::EngineConfig;
///
/// let config = EngineConfig::new(800, 600);
/// assert!(config.validate().is_ok());
/// assert!(EngineConfig::new(0, 600).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// World width in pixels.
    pub width: i32,
    /// World height in pixels.
    pub height: i32,
}

impl EngineConfig {
    /// Creates a config for a `width` x `height` world.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Checks that the dimensions describe a playable world.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveDimensions`] if either dimension is
    /// not positive and [`ConfigError::WorldTooNarrow`] if the ship would
    /// not fit.
    #[allow(clippy::cast_possible_truncation)]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 || self.height <= 0 {
            return Err(ConfigError::NonPositiveDimensions {
                width: self.width,
                height: self.height,
            });
        }
        let min = SHIP_WIDTH as i32;
        if self.width < min {
            return Err(ConfigError::WorldTooNarrow {
                width: self.width,
                min,
            });
        }
        Ok(())
    }

    /// Validates the config and derives the world geometry.
    ///
    /// # Errors
    ///
    /// See [`EngineConfig::validate`].
    pub fn geometry(&self) -> Result<WorldGeometry, ConfigError> {
        self.validate()?;
        Ok(WorldGeometry::new(f64::from(self.width), f64::from(self.height)))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// Fixed lines of the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldGeometry {
    /// World width.
    pub width: f64,
    /// World height.
    pub height: f64,
    /// Top of the sea band, `floor(height * 0.38)`.
    pub sea_top: f64,
    /// Depth at which a sinking bomb auto-detonates.
    pub depth_threshold: f64,
}

impl WorldGeometry {
    /// Derives the sea top and depth threshold for a world.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        let sea_top = (height * SEA_TOP_RATIO).floor();
        Self {
            width,
            height,
            sea_top,
            depth_threshold: sea_top + (height - sea_top) * DEPTH_THRESHOLD_RATIO,
        }
    }
}
