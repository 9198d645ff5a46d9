//! Entromata is a library intended to run toroidal life simulations and
//! measure the entropy of what emerges.
//!
//! The core is a pure, synchronous computation over an in-memory grid: a
//! fixed-step clock decides when a generation happens, a rule (Conway's
//! boolean rule or a smoothed continuous one) produces the next grid from an
//! immutable snapshot of the previous one, and every new grid is analyzed for
//! global/local Shannon entropy, spatial pattern diversity and fixed-template
//! motif counts. Rendering, input and persistence are external collaborators
//! that pull snapshots and issue the two commands (`advance`/`step` and
//! `inject_entropy`).
//!
//! ```
//! use entromata::{CellMode, Config, ConfigKind, Simulation};
//!
//! let config = Config::new(32, 10.0, ConfigKind::Random, CellMode::Discrete)?;
//! let mut sim = Simulation::seeded(config, 42)?;
//!
//! // The driving frame loop feeds in elapsed time; at 10 steps per second,
//! // a tenth of a second is worth exactly one generation.
//! assert!(sim.advance(0.1));
//!
//! let stats = sim.stats();
//! assert!(stats.global_entropy >= 0.0 && stats.global_entropy <= 1.0);
//! assert!(stats.pattern_complexity > 0.0);
//! assert_eq!(sim.local_entropy().len(), 32 * 32);
//! # Ok::<(), entromata::ConfigError>(())
//! ```

mod clock;
mod config;
mod entropy;
mod grid;
mod inject;
mod pattern;
mod rule;
mod sim;

pub use clock::*;
pub use config::*;
pub use entropy::*;
pub use grid::*;
pub use inject::*;
pub use pattern::*;
pub use rule::*;
pub use sim::*;
