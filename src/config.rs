use enum_iterator::IntoEnumIterator;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The contents of a freshly initialized grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoEnumIterator)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConfigKind {
    /// Every cell is drawn independently: alive with p = 0.5 in discrete
    /// mode, uniform in [0, 1] in continuous mode.
    Random,
    /// A single glider placed at the grid center.
    Glider,
    /// All cells dead.
    Empty,
}

/// How cell values are interpreted and advanced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, IntoEnumIterator)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellMode {
    /// Boolean life: cells hold exactly 0 or 1 and follow Conway's rule.
    Discrete,
    /// Smoothed life: cells hold densities in [0, 1] and relax toward a
    /// neighborhood-driven target.
    Continuous,
}

/// A rejected simulation configuration.
///
/// Configuration problems are caught before any grid is built; they are not
/// recoverable mid-run.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid size must be at least 1, got {0}")]
    GridSize(usize),
    #[error("speed must be a positive, finite number of steps per second, got {0}")]
    Speed(f64),
}

/// Everything needed to set up a simulation.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Side length of the square grid.
    pub size: usize,
    /// Step rate in steps per second.
    pub speed: f64,
    /// Initial grid contents, also used for extinction recovery reseeds.
    pub kind: ConfigKind,
    /// Discrete or continuous cell interpretation.
    pub mode: CellMode,
}

impl Config {
    /// Make a validated configuration.
    pub fn new(size: usize, speed: f64, kind: ConfigKind, mode: CellMode) -> Result<Self, ConfigError> {
        let config = Self {
            size,
            speed,
            kind,
            mode,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration, rejecting values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::GridSize(self.size));
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err(ConfigError::Speed(self.speed));
        }
        Ok(())
    }

    /// Seconds between steps at the configured speed.
    #[inline]
    pub fn step_interval(&self) -> f64 {
        1.0 / self.speed
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 50,
            speed: 10.0,
            kind: ConfigKind::Random,
            mode: CellMode::Discrete,
        }
    }
}
