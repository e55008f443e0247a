//! Example: Barnea 1987 inclination sweep
//!
//! Reproduces the classic series of flow-pattern maps across the whole
//! range of pipe inclinations, from vertical downflow to vertical upflow,
//! for a water-air system in a 0.3 m pipe.
//!
//! ## Structure
//!
//! - One classification per inclination (9 runs)
//! - One PNG map and one CSV per inclination
//!
//! **Parameters**:
//! - Water: ρ=998 kg/m³, μ=8.9e-4 Pa·s, σ=0.073 N/m
//! - Air:   ρ=1.225 kg/m³, μ=18.3e-6 Pa·s
//! - Total mass flow 2 kg/s at gas quality 0.1
//! - Pipe: D=0.3 m, relative roughness 1e-3
//!
//! Run with:
//!
//! ```bash
//! cargo run --example inclination_sweep --release
//! ```

use std::error::Error;
use std::time::Instant;

use flowmap_rs::grid::{GridConfig, VelocityGrid};
use flowmap_rs::output::export::{export_category_csv, CsvConfig, CsvMetadata};
use flowmap_rs::output::visualization::{plot_flow_map, PlotConfig};
use flowmap_rs::physics::{Gas, Liquid, Pipe};
use flowmap_rs::regimes::{classify, FlowRegime};
use flowmap_rs::solver::NewtonConfig;

// =============================================================================
// Parameters
// =============================================================================

const TOTAL_MASS_FLOW: f64 = 2.0;
const GAS_QUALITY: f64 = 0.1;
const DIAMETER: f64 = 0.3;
const ROUGHNESS: f64 = 1e-3;

/// The inclinations of the Barnea 1987 map series, degrees from
/// horizontal.
const INCLINATIONS: [f64; 9] = [-90.0, -80.0, -30.0, -1.0, 0.0, 1.0, 30.0, 80.0, 90.0];

fn main() -> Result<(), Box<dyn Error>> {
    let liquid = Liquid::new(
        998.0,
        8.9e-4,
        TOTAL_MASS_FLOW * (1.0 - GAS_QUALITY),
        0.073,
    );
    let gas = Gas::new(1.225, 18.3e-6, TOTAL_MASS_FLOW * GAS_QUALITY);

    let grid = VelocityGrid::generate(&GridConfig::default())?;
    let solver_config = NewtonConfig::default();

    for inclination in INCLINATIONS {
        let pipe = Pipe::new(DIAMETER, inclination, ROUGHNESS);

        let start = Instant::now();
        let classification = classify(&grid, &liquid, &gas, &pipe, &solver_config)?;
        let elapsed = start.elapsed();

        // Print the regime inventory for this inclination.
        println!("inclination {:+.0} deg  ({:.2?})", inclination, elapsed);
        for regime in FlowRegime::ALL {
            let cells = classification
                .category
                .iter()
                .filter(|&&c| c == regime.label())
                .count();
            if cells > 0 {
                println!("    {:18} {:6} cells", regime.name(), cells);
            }
        }

        let tag = format!("{:+04}", inclination as i32);

        let mut plot_config = PlotConfig::default();
        plot_config.title = format!("Water-Air, D = 0.3 m, {:+.0} deg", inclination);
        plot_flow_map(
            &grid,
            &classification.category,
            &format!("flow_map_{}.png", tag),
            Some(&plot_config),
        )?;

        let metadata = CsvMetadata {
            pipe_diameter: Some(DIAMETER),
            inclination_degrees: Some(inclination),
            roughness: Some(ROUGHNESS),
            liquid_density: Some(998.0),
            gas_density: Some(1.225),
            ..Default::default()
        };
        export_category_csv(
            &grid,
            &classification.category,
            &format!("flow_map_{}.csv", tag),
            Some(&CsvConfig::default().with_metadata(metadata)),
        )?;
    }

    Ok(())
}
