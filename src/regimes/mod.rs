//! Flow-regime transition criteria and their composition.
//!
//! Each submodule owns one regime's transition conditions and exposes a
//! `region` map on the velocity grid; [`compose`] folds the maps into a
//! single mutually-exclusive category grid. [`classify`] is the one-call
//! entry point over the whole pipeline.

pub mod annular;
pub mod bubbly;
pub mod compose;
pub mod dispersed;
pub mod intermittent;
pub mod stratified;

use ndarray::{Array2, Zip};

pub use compose::{boundary_cells, FlowRegime, RegimeMaps, UNCLASSIFIED};

use crate::correlations::geometry::fluid_area_ratio;
use crate::grid::VelocityGrid;
use crate::physics::{Gas, Liquid, Pipe};
use crate::solver::NewtonConfig;

/// The classified map together with the per-regime condition maps it was
/// folded from, for inspection and plotting overlays.
#[derive(Debug, Clone)]
pub struct Classification {
    /// Category label per grid cell, values from [`FlowRegime`].
    pub category: Array2<i8>,
    /// The raw condition maps before precedence.
    pub maps: RegimeMaps,
}

/// Classify every cell of the velocity grid.
///
/// The two maps that need an implicit solve (stratified and annular) run
/// side by side when the `parallel` feature is enabled; the closed-form
/// maps are cheap and stay sequential.
pub fn classify(
    grid: &VelocityGrid,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
    config: &NewtonConfig,
) -> Result<Classification, String> {
    config.validate()?;

    let u_gs = &grid.u_gs;
    let u_ls = &grid.u_ls;

    #[cfg(feature = "parallel")]
    let (stratified_map, annular_map) = rayon::join(
        || stratified::region(u_gs, u_ls, liquid, gas, pipe, config),
        || annular::region(u_gs, u_ls, liquid, gas, pipe, config),
    );
    #[cfg(not(feature = "parallel"))]
    let (stratified_map, annular_map) = (
        stratified::region(u_gs, u_ls, liquid, gas, pipe, config),
        annular::region(u_gs, u_ls, liquid, gas, pipe, config),
    );

    let slug_gas_holdup = intermittent::liquid_slug_gas_holdup(u_gs, u_ls, liquid, gas, pipe);

    let maps = RegimeMaps {
        dispersed_bubble: dispersed::region(u_gs, u_ls, liquid, gas, pipe),
        stratified: stratified_map?,
        annular: annular_map?,
        bubbly: bubbly::region(u_gs, u_ls, liquid, gas, pipe),
        elongated_bubble: intermittent::slug_free_of_bubbles(&slug_gas_holdup),
        churn: intermittent::slug_full_of_bubbles(&slug_gas_holdup),
    };

    let category = compose::compose(&maps)?;

    Ok(Classification { category, maps })
}

/// Cells where the superficial throughputs alone are impossible: the
/// equivalent single-phase flow areas add up past the pipe section. The
/// transition criteria still evaluate there; this map flags them for the
/// caller.
pub fn unphysical_holdup(
    grid: &VelocityGrid,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
) -> Array2<bool> {
    let liquid_ratio = fluid_area_ratio(&grid.u_ls, liquid, pipe);
    let gas_ratio = fluid_area_ratio(&grid.u_gs, gas, pipe);

    Zip::from(&liquid_ratio)
        .and(&gas_ratio)
        .map_collect(|&l, &g| l + g > 1.0)
}

// =================================================================================================
// Tests
// =================================================================================================
