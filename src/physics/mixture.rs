//! Equivalent single-fluid mixture
//!
//! The coalescence and slug-holdup closures treat the two-phase flow as one
//! equivalent fluid and feed it through single-phase friction correlations.
//! This module builds that fluid from the superficial velocities:
//!
//! - **velocity**: `u_gs + u_ls`
//! - **density**: gas-holdup-weighted blend of the phase densities
//! - **viscosity**: equal to the liquid viscosity (Owen 1986 approximation)
//!
//! The viscosity choice is deliberate and must stay: the homogeneous
//! no-slip blends overestimate shear in the bubbly mixtures these closures
//! describe, and the cited slug literature calibrates its constants against
//! the liquid value.

use ndarray::{Array2, Zip};

use super::fluids::{Gas, Liquid, Pipe};
use crate::correlations::dimensionless;

/// Margin that keeps the holdup blend away from the degenerate pure-phase
/// endpoints.
const HOLDUP_EPSILON: f64 = 1e-6;

/// Equivalent single-fluid mixture over a velocity grid.
///
/// Recomputed per call; holds no state beyond its derived grids.
#[derive(Debug, Clone)]
pub struct Mixture {
    /// Mixture velocity `u_gs + u_ls` (m/s)
    pub velocity: Array2<f64>,

    /// Holdup-weighted mixture density (kg/m³)
    pub density: Array2<f64>,

    /// Mixture dynamic viscosity (Pa·s); equals the liquid viscosity
    pub dynamic_viscosity: f64,
}

impl Mixture {
    /// Build the mixture with the default gas holdup estimate
    /// `u_gs / (u_gs + u_ls)`.
    pub fn new(u_gs: &Array2<f64>, u_ls: &Array2<f64>, liquid: &Liquid, gas: &Gas) -> Self {
        let holdup = Zip::from(u_gs)
            .and(u_ls)
            .map_collect(|&g, &l| g / (g + l));
        Self::with_gas_holdup(u_gs, u_ls, liquid, gas, &holdup)
    }

    /// Build the mixture with an externally supplied gas holdup grid.
    ///
    /// Used by the slug-holdup fixed-point iteration, which feeds its own
    /// holdup estimate back into the mixture density. Holdups are clamped
    /// into `(ε, 1−ε)`; NaN entries fall back to the superficial-velocity
    /// ratio estimate.
    pub fn with_gas_holdup(
        u_gs: &Array2<f64>,
        u_ls: &Array2<f64>,
        liquid: &Liquid,
        gas: &Gas,
        gas_holdup: &Array2<f64>,
    ) -> Self {
        let rho_l = liquid.density;
        let rho_g = gas.density;

        let density = Zip::from(gas_holdup)
            .and(u_gs)
            .and(u_ls)
            .map_collect(|&alpha, &g, &l| {
                let alpha = if alpha.is_nan() { g / (g + l) } else { alpha };
                let alpha = alpha.clamp(HOLDUP_EPSILON, 1.0 - HOLDUP_EPSILON);
                alpha * rho_g + (1.0 - alpha) * rho_l
            });

        let velocity = u_gs + u_ls;

        Self {
            velocity,
            density,
            dynamic_viscosity: liquid.dynamic_viscosity,
        }
    }

    /// Mixture Reynolds number, elementwise over the grid.
    ///
    /// Unlike the single-phase [`dimensionless::reynolds`], the density here
    /// varies per cell.
    pub fn reynolds(&self, pipe: &Pipe) -> Array2<f64> {
        let mu = self.dynamic_viscosity;
        let diameter = pipe.diameter;
        Zip::from(&self.velocity)
            .and(&self.density)
            .map_collect(|&v, &rho| dimensionless::reynolds_scalar(v, rho, diameter, mu))
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr2;

    fn water_air() -> (Liquid, Gas) {
        (
            Liquid::new(998.0, 8.9e-4, 0.9e-3, 0.073),
            Gas::new(1.225, 1.83e-5, 0.1e-3),
        )
    }

    #[test]
    fn test_mixture_velocity_is_sum_of_superficials() {
        let (liquid, gas) = water_air();
        let u_gs = arr2(&[[0.1, 1.0]]);
        let u_ls = arr2(&[[0.2, 0.5]]);

        let mix = Mixture::new(&u_gs, &u_ls, &liquid, &gas);
        assert_relative_eq!(mix.velocity[[0, 0]], 0.3, epsilon = 1e-12);
        assert_relative_eq!(mix.velocity[[0, 1]], 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_density_limits_track_the_phases() {
        let (liquid, gas) = water_air();
        let u_gs = arr2(&[[1.0]]);
        let u_ls = arr2(&[[1.0]]);

        // Holdup forced to the endpoints: the clamp keeps the blend finite
        // and the density approaches the corresponding pure phase.
        let all_liquid = Mixture::with_gas_holdup(&u_gs, &u_ls, &liquid, &gas, &arr2(&[[0.0]]));
        let all_gas = Mixture::with_gas_holdup(&u_gs, &u_ls, &liquid, &gas, &arr2(&[[1.0]]));

        assert_relative_eq!(all_liquid.density[[0, 0]], liquid.density, epsilon = 1e-2);
        assert_relative_eq!(all_gas.density[[0, 0]], gas.density, epsilon = 1e-2);
    }

    #[test]
    fn test_nan_holdup_falls_back_to_velocity_ratio() {
        let (liquid, gas) = water_air();
        let u_gs = arr2(&[[1.0]]);
        let u_ls = arr2(&[[3.0]]);

        let patched = Mixture::with_gas_holdup(&u_gs, &u_ls, &liquid, &gas, &arr2(&[[f64::NAN]]));
        let default = Mixture::new(&u_gs, &u_ls, &liquid, &gas);

        assert_relative_eq!(
            patched.density[[0, 0]],
            default.density[[0, 0]],
            epsilon = 1e-12
        );
        // 25% gas by superficial ratio
        assert_relative_eq!(
            default.density[[0, 0]],
            0.25 * gas.density + 0.75 * liquid.density,
            epsilon = 1e-3
        );
    }

    #[test]
    fn test_viscosity_equals_liquid_viscosity() {
        let (liquid, gas) = water_air();
        let u_gs = arr2(&[[5.0]]);
        let u_ls = arr2(&[[0.01]]);

        // Even in a gas-dominated cell the Owen policy keeps the liquid value.
        let mix = Mixture::new(&u_gs, &u_ls, &liquid, &gas);
        assert_relative_eq!(mix.dynamic_viscosity, liquid.dynamic_viscosity);
    }
}
