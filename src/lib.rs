#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Hypervolume indicator for multi-objective optimization: the volume of
//! objective space dominated by a point set and bounded by a reference
//! point, plus the exclusive contribution of each point. All objectives are
//! minimized.
//!
//! # Getting Started
//!
//! ```
//! use hypervolume::prelude::*;
//!
//! let front = vec![vec![1.0, 3.0], vec![2.0, 2.0], vec![3.0, 1.0]];
//! let hv = Hypervolume::new(front).unwrap();
//! let reference = hv.nadir_point(1.0).unwrap();
//!
//! assert_eq!(reference, vec![4.0, 4.0]);
//! assert!((hv.compute(&reference).unwrap() - 6.0).abs() < 1e-12);
//! assert_eq!(hv.greatest_contributor(&reference).unwrap(), 0);
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Hypervolume`] | Validated point set; answers total, exclusive and contributor queries. |
//! | [`HvAlgorithm`](algorithm::HvAlgorithm) | Strategy computing the indicator. Pick one or let [`Hypervolume`] choose by dimension. |
//! | [`Population`](population::Population) | Anything exposing fitness vectors; its first front seeds a [`Hypervolume`]. |
//! | [`pareto`] | Dominance tests and non-dominated sorting. |
//!
//! # Algorithms
//!
//! | Algorithm | Objectives | Chosen by default for |
//! |-----------|------------|-----------------------|
//! | [`Native2d`](algorithm::Native2d) | 2 | 2 objectives |
//! | [`Beume3d`](algorithm::Beume3d) | 3 | 3 objectives |
//! | [`Wfg`](algorithm::Wfg) | any ≥ 2 | 4 or more objectives |
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) on dispatch and rejected input | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

pub mod algorithm;
mod error;
mod hypervolume;
pub mod pareto;
pub mod population;

pub use error::{Error, ErrorKind, Result};
pub use hypervolume::Hypervolume;

/// One point in objective space: one value per objective, all minimized.
pub type FitnessVector = Vec<f64>;

/// Convenient wildcard import for the most common types.
///
/// ```
/// use hypervolume::prelude::*;
/// ```
pub mod prelude {
    pub use crate::FitnessVector;
    pub use crate::algorithm::{Beume3d, HvAlgorithm, Native2d, Wfg};
    pub use crate::error::{Error, ErrorKind, Result};
    pub use crate::hypervolume::Hypervolume;
    pub use crate::population::Population;
}
