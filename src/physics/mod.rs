//! Fluid, pipe and mixture value objects
//!
//! This module provides the plain data carriers that every transition
//! equation consumes:
//!
//! - **`Gas` / `Liquid`**: phase properties (density, viscosity, mass flow;
//!   the liquid additionally carries the bubble surface tension)
//! - **`Pipe`**: geometry and orientation of the conduit
//! - **`Mixture`**: the equivalent single fluid used by the coalescence and
//!   slug-holdup closures
//!
//! All of them are immutable once constructed and are passed by reference
//! into the regime predicates. Construction-time validation (positive
//! densities, sensible roughness) is the caller's responsibility; the core
//! assumes physically valid parameters.

mod fluids;
mod mixture;

pub use fluids::{FluidProperties, Gas, Liquid, Pipe};
pub use mixture::Mixture;
