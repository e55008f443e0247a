//! flowmap-rs: Two-Phase Flow Regime Classification
//!
//! A mechanistic flow-pattern mapper for gas-liquid pipe flow. For a pipe of
//! given diameter, inclination and fluid properties, the crate classifies the
//! flow regime (stratified, annular, bubbly, dispersed bubble, elongated
//! bubble, slug, churn) at every point of a 2D grid of superficial gas and
//! liquid velocities, following the transition criteria of Taitel & Dukler
//! (1976) and Barnea (1987).
//!
//! # Architecture
//!
//! flowmap-rs is built on two core principles:
//!
//! 1. **Separation of Closures and Numerics**
//!    - Correlations define the physical closure relations (what to solve)
//!    - The grid solver provides the root-finding method (how to solve)
//!
//! 2. **Masking over Raising**
//!    - Cells where a transition equation has no physical solution carry
//!      NaN/false and are excluded by boolean masks
//!    - Only malformed configurations (mismatched shapes, bad parameters)
//!      fail fast with a descriptive error
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use flowmap_rs::physics::{Gas, Liquid, Pipe};
//! use flowmap_rs::grid::{GridConfig, VelocityGrid};
//! use flowmap_rs::regimes::classify;
//! use flowmap_rs::solver::NewtonConfig;
//!
//! # fn main() -> Result<(), String> {
//! // 1. Describe the fluids and the pipe
//! let liquid = Liquid::new(998.0, 8.9e-4, 0.9e-3, 0.073);
//! let gas = Gas::new(1.225, 1.83e-5, 0.1e-3);
//! let pipe = Pipe::new(0.051, 0.0, 1e-5);
//!
//! // 2. Build the superficial-velocity sweep
//! let grid = VelocityGrid::generate(&GridConfig::default())?;
//!
//! // 3. Classify every grid point
//! let classification = classify(&grid, &liquid, &gas, &pipe, &NewtonConfig::default())?;
//! println!("regimes: {:?}", classification.category.shape());
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: fluid, pipe and mixture value objects
//! - [`grid`]: logarithmically spaced superficial-velocity grids
//! - [`correlations`]: friction factors, non-dimensional numbers, pipe
//!   cross-section geometry
//! - [`solver`]: grid-shaped Newton-Raphson and fixed-point iteration
//! - [`regimes`]: per-regime transition predicates and the composition engine
//! - [`output`]: CSV export and categorical map rendering (optional surface)

// Core modules
pub mod correlations;
pub mod grid;
pub mod physics;
pub mod regimes;
pub mod solver;

// Optional outer surface
pub mod output;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use flowmap_rs::prelude::*;
    //! ```
    pub use crate::grid::{GridConfig, VelocityGrid};
    pub use crate::physics::{FluidProperties, Gas, Liquid, Mixture, Pipe};
    pub use crate::regimes::compose::{FlowRegime, RegimeMaps, UNCLASSIFIED};
    pub use crate::regimes::{classify, Classification};
    pub use crate::solver::NewtonConfig;
}
