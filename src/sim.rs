use crate::clock::StepClock;
use crate::config::{CellMode, Config, ConfigError};
use crate::entropy::{self, LocalEntropyField, StatsSnapshot};
use crate::grid::Grid;
use crate::inject;
use crate::pattern::{self, PatternReport};
use crate::rule::{self, ConwayRule, SmoothRule};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A toroidal life simulation with entropy analytics.
///
/// Owns the live grid, the scheduler and the RNG, and publishes one set of
/// outputs per step: the grid snapshot, a [`StatsSnapshot`], the local
/// entropy field and a [`PatternReport`]. All queries are pull-based; a new
/// step makes everything previously read stale.
///
/// A step runs to completion before anything is published, and out-of-band
/// mutation (entropy injection) takes `&mut self`, so consumers never observe
/// a partially updated state.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: Config,
    grid: Grid,
    clock: StepClock,
    rng: StdRng,
    stats: StatsSnapshot,
    local_entropy: LocalEntropyField,
    patterns: PatternReport,
    hover: Option<(usize, usize)>,
    pending_reseed: bool,
}

impl Simulation {
    /// Make a simulation with an entropy-seeded RNG.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Make a simulation with a deterministic RNG for reproducible runs.
    pub fn seeded(config: Config, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, mut rng: StdRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.size, config.kind, config.mode, &mut rng);
        let stats = entropy::analyze(&grid);
        let local_entropy = entropy::local_entropy_field(&grid);
        let patterns = pattern::recognize(&grid);
        log::info!(
            "simulation initialized: {0}x{0} {1:?} cells from {2:?}",
            config.size,
            config.mode,
            config.kind,
        );
        Ok(Self {
            clock: StepClock::new(config.speed),
            config,
            grid,
            rng,
            stats,
            local_entropy,
            patterns,
            hover: None,
            pending_reseed: false,
        })
    }

    /// Feed in elapsed seconds from the driving frame loop.
    ///
    /// Performs at most one step per call, gated by the fixed-step clock.
    /// Returns whether a step occurred, i.e. whether the published outputs
    /// changed.
    pub fn advance(&mut self, delta: f64) -> bool {
        if self.clock.tick(delta) {
            self.step();
            true
        } else {
            false
        }
    }

    /// Perform one step immediately, ignoring the clock.
    ///
    /// The grid is advanced by the configured rule, then all statistics are
    /// derived from the new snapshot and published together. If the step left
    /// the grid entirely dead, that dead snapshot stays visible until the
    /// next step, which starts from a fresh grid of the configured kind
    /// instead.
    pub fn step(&mut self) {
        if self.pending_reseed {
            self.pending_reseed = false;
            self.grid = Grid::new(
                self.config.size,
                self.config.kind,
                self.config.mode,
                &mut self.rng,
            );
            log::info!("extinction recovery: reseeded from {:?}", self.config.kind);
        }
        self.grid = match self.config.mode {
            CellMode::Discrete => rule::step(&self.grid, &ConwayRule),
            CellMode::Continuous => rule::step(&self.grid, &SmoothRule),
        };
        self.stats = entropy::analyze(&self.grid);
        self.local_entropy = entropy::local_entropy_field(&self.grid);
        self.patterns = pattern::recognize(&self.grid);
        log::debug!(
            "step: alive_ratio={:.4} global_entropy={:.4} spatial_entropy={:.4}",
            self.stats.alive_ratio,
            self.stats.global_entropy,
            self.stats.spatial_entropy,
        );
        if self.grid.is_extinct() {
            self.pending_reseed = true;
        }
    }

    /// Replace the configuration, rebuilding the grid wholesale.
    ///
    /// Fails fast without touching the running simulation if the new
    /// configuration is invalid. On success the grid is reinitialized, the
    /// clock restarts from zero and all published outputs describe the fresh
    /// grid.
    pub fn reconfigure(&mut self, config: Config) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.grid = Grid::new(config.size, config.kind, config.mode, &mut self.rng);
        self.clock = StepClock::new(config.speed);
        self.stats = entropy::analyze(&self.grid);
        self.local_entropy = entropy::local_entropy_field(&self.grid);
        self.patterns = pattern::recognize(&self.grid);
        self.pending_reseed = false;
        log::info!(
            "reconfigured: {0}x{0} {1:?} cells from {2:?}",
            config.size,
            config.mode,
            config.kind,
        );
        Ok(())
    }

    /// Invert a random tenth of the grid's cells.
    ///
    /// An out-of-band command, not part of the step cadence; it mutates the
    /// live grid directly and never interleaves with a step.
    pub fn inject_entropy(&mut self) {
        inject::inject(&mut self.grid, &mut self.rng);
    }

    /// The current configuration.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current grid snapshot.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Statistics of the most recent step.
    #[inline]
    pub fn stats(&self) -> &StatsSnapshot {
        &self.stats
    }

    /// Per-cell local entropy of the most recent step, row-major.
    #[inline]
    pub fn local_entropy(&self) -> &[f64] {
        &self.local_entropy
    }

    /// Template match counts of the most recent step.
    #[inline]
    pub fn patterns(&self) -> &PatternReport {
        &self.patterns
    }

    /// Relay the cell under pointer focus from the rendering layer.
    ///
    /// The core does not use this value; it only stores it for the rendering
    /// layer's highlight logic to read back.
    pub fn set_hover(&mut self, hover: Option<(usize, usize)>) {
        self.hover = hover;
    }

    /// The relayed hover cell, if any.
    #[inline]
    pub fn hover(&self) -> Option<(usize, usize)> {
        self.hover
    }
}
