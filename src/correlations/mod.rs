//! Physical closure relations
//!
//! Pure functions shared by every regime predicate:
//!
//! - [`friction`]: Darcy friction factor correlations and the combinators
//!   that stitch their validity domains together
//! - [`dimensionless`]: Reynolds number, single-phase pressure gradient,
//!   Lockhart-Martinelli parameter and the gravity parameter Y
//! - [`geometry`]: circular-segment cross-section of a partially filled
//!   pipe, and its Newton inversion from a target area
//!
//! Everything here is stateless and side-effect free. Out-of-range inputs
//! yield NaN/Inf per IEEE semantics rather than errors: the callers evaluate
//! these closures over entire velocity grids and mask the invalid cells
//! afterwards.

pub mod dimensionless;
pub mod friction;
pub mod geometry;
