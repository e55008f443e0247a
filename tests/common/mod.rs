//! Common utilities for integration tests

pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use test_helpers::{
    regime_fraction, small_grid, standard_pipe, water_air_at_quality,
};
