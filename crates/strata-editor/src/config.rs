//! Editor configuration, validation, and error types.
//!
//! [`EditorConfig`] is the input for constructing a
//! [`GeoEditor`](crate::GeoEditor) or [`TileEditor`](crate::TileEditor).
//! [`validate()`](EditorConfig::validate) runs inside both constructors.

use std::error::Error;
use std::fmt;
use std::num::NonZeroUsize;

use strata_core::{GeoType, RunCell, LAYER_COUNT};
use strata_infer::EntranceRule;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EditorConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A history limit is zero, which would make undo impossible.
    ZeroHistoryLimit {
        /// Which limit (`"geo_history_limit"` or `"tile_history_limit"`).
        which: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroHistoryLimit { which } => write!(f, "{which} must be at least 1"),
        }
    }
}

impl Error for ConfigError {}

// ── EditorConfig ───────────────────────────────────────────────────

/// Settings shared by the geometry and tile editors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditorConfig {
    /// Maximum number of geometry history entries kept. Default: 40.
    pub geo_history_limit: usize,
    /// Maximum number of tile history entries kept. Default: 100.
    pub tile_history_limit: usize,
    /// Per-layer value for cells added by a resize. Default: solid,
    /// solid, air.
    pub layer_fill: [RunCell; LAYER_COUNT],
    /// Which path features orient a shortcut entrance. Default:
    /// [`EntranceRule::Current`].
    pub entrance_rule: EntranceRule,
}

impl Default for EditorConfig {
    fn default() -> Self {
        let solid = RunCell::new(GeoType::Solid);
        Self {
            geo_history_limit: 40,
            tile_history_limit: 100,
            layer_fill: [solid, solid, RunCell::default()],
            entrance_rule: EntranceRule::default(),
        }
    }
}

impl EditorConfig {
    /// Check structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.geo_limit()?;
        self.tile_limit()?;
        Ok(())
    }

    pub(crate) fn geo_limit(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.geo_history_limit).ok_or(ConfigError::ZeroHistoryLimit {
            which: "geo_history_limit",
        })
    }

    pub(crate) fn tile_limit(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.tile_history_limit).ok_or(ConfigError::ZeroHistoryLimit {
            which: "tile_history_limit",
        })
    }
}
