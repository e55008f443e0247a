//! Grid-shaped iterative solvers
//!
//! The transition equations are implicit: each is a residual
//! `f(x; grid parameters) = 0` evaluated elementwise over the whole
//! velocity grid, with one unknown per cell (a critical liquid height, an
//! annular film holdup). This module provides the two iteration schemes
//! they need:
//!
//! - [`newton_grid`]: masked elementwise Newton-Raphson with a numerical
//!   derivative
//! - [`fixed_point`]: bounded fixed-point iteration for self-referential
//!   closures (the slug holdup feeding back into the mixture density)
//!
//! # Failure semantics
//!
//! Non-convergence of a subset of cells is **not** an error: the last
//! iterate is returned and the calling predicate's range checks decide
//! validity. Cells whose residual turns NaN (no physical solution) are
//! frozen and excluded from the convergence test, so a few divergent cells
//! never poison the rest of the grid. Only a malformed configuration is
//! reported as `Err`.

mod newton;

pub use newton::{fixed_point, newton_grid, newton_grid_bounded, NewtonConfig};
