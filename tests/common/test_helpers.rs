//! Helper functions for integration tests

use flowmap_rs::grid::{GridConfig, VelocityGrid};
use flowmap_rs::physics::{Gas, Liquid, Pipe};
use flowmap_rs::regimes::FlowRegime;
use ndarray::Array2;

/// Water and air at ambient conditions, with the phase mass flowrates
/// split from a total flowrate and a gas mass quality.
pub fn water_air_at_quality(total_mass_flowrate: f64, quality: f64) -> (Liquid, Gas) {
    let gas_flow = total_mass_flowrate * quality;
    let liquid_flow = total_mass_flowrate - gas_flow;

    let liquid = Liquid::new(998.0, 8.9e-4, liquid_flow, 0.073);
    let gas = Gas::new(1.225, 1.83e-5, gas_flow);
    (liquid, gas)
}

/// 51 mm pipe at the given inclination, commercial-steel roughness.
pub fn standard_pipe(inclination_degrees: f64) -> Pipe {
    Pipe::new(0.051, inclination_degrees, 1e-5)
}

/// A coarse grid over the default velocity ranges, cheap enough for
/// end-to-end runs in tests.
pub fn small_grid(datapoints: usize) -> VelocityGrid {
    let config = GridConfig {
        datapoints,
        ..GridConfig::default()
    };
    VelocityGrid::generate(&config).expect("grid config is valid")
}

/// Fraction of cells carrying the given regime label.
pub fn regime_fraction(category: &Array2<i8>, regime: FlowRegime) -> f64 {
    let total = category.len() as f64;
    let hits = category.iter().filter(|&&c| c == regime.label()).count() as f64;
    hits / total
}
