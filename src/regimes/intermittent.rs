//! Intermittent flow closures (Barnea 1987)
//!
//! Intermittent flow is what remains when no other regime claims a cell;
//! its sub-regimes are told apart by how much gas the liquid slug body
//! carries. The holdup correlation compares the turbulent breakup
//! diameter in the slug against the deformed-bubble critical size, with
//! the sign of the difference recovered after squaring so that the value
//! stays usable on both sides of zero.

use ndarray::{Array2, Zip};

use crate::correlations::friction;
use crate::physics::{Gas, Liquid, Mixture, Pipe};
use crate::regimes::dispersed::deformed_bubble_critical_size;
use crate::solver::{fixed_point, NewtonConfig};

/// Liquid holdup at the maximum bubble packing of the slug body; below it
/// the slug collapses into churn.
pub const MAX_PACKING_LIQUID_HOLDUP: f64 = 0.48;

fn holdup_from_mixture(
    mixture: &Mixture,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
) -> Array2<f64> {
    let friction_mix = mixture
        .reynolds(pipe)
        .mapv(|re| friction::niazkar_and_churchill(re, pipe.roughness));

    let critical_diam = deformed_bubble_critical_size(liquid, gas, pipe);
    let density_term = (liquid.density / liquid.bubble_surface_tension).powf(0.6);
    let diameter = pipe.diameter;

    Zip::from(&friction_mix)
        .and(&mixture.velocity)
        .map_collect(|&f, &u_m| {
            let breakup = critical_diam
                * (2.0 * f * u_m.powi(3) / diameter).powf(0.4)
                * density_term;
            let base = breakup - 0.725;
            base.signum() * 0.058 * base * base
        })
}

/// Gas holdup of the liquid slug body (Barnea 1987 eq 27), evaluated with
/// the no-slip mixture. Negative values mean the turbulence cannot even
/// sustain the smallest deformed bubble; they are kept, since the
/// sub-regime thresholds read the sign.
pub fn liquid_slug_gas_holdup(
    u_gs: &Array2<f64>,
    u_ls: &Array2<f64>,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
) -> Array2<f64> {
    let mixture = Mixture::new(u_gs, u_ls, liquid, gas);
    holdup_from_mixture(&mixture, liquid, gas, pipe)
}

/// Self-consistent slug gas holdup: the holdup changes the mixture
/// density, which changes the Reynolds number, which changes the holdup.
/// Iterated to a fixed point from the no-slip estimate; cells that never
/// settle keep their last iterate.
pub fn self_consistent_slug_gas_holdup(
    u_gs: &Array2<f64>,
    u_ls: &Array2<f64>,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
    config: &NewtonConfig,
) -> Result<Array2<f64>, String> {
    let initial = liquid_slug_gas_holdup(u_gs, u_ls, liquid, gas, pipe);

    fixed_point(&initial, config, |holdup| {
        let mixture = Mixture::with_gas_holdup(u_gs, u_ls, liquid, gas, holdup);
        holdup_from_mixture(&mixture, liquid, gas, pipe)
    })
}

/// True where the slug body carries no entrained bubbles at all: the
/// elongated-bubble sub-regime.
pub fn slug_free_of_bubbles(gas_holdup: &Array2<f64>) -> Array2<bool> {
    gas_holdup.mapv(|h| 1.0 - h >= 1.0)
}

/// True where entrained bubbles pack the slug body past the maximum and
/// it collapses: the churn sub-regime.
pub fn slug_full_of_bubbles(gas_holdup: &Array2<f64>) -> Array2<bool> {
    gas_holdup.mapv(|h| 1.0 - h <= MAX_PACKING_LIQUID_HOLDUP)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr2;

    fn water_air() -> (Liquid, Gas) {
        (
            Liquid::new(998.0, 8.9e-4, 0.9e-3, 0.073),
            Gas::new(1.225, 1.83e-5, 0.1e-3),
        )
    }

    #[test]
    fn test_holdup_sign_tracks_mixture_velocity() {
        // A crawling mixture cannot entrain bubbles (negative branch); a
        // fast one entrains plenty (positive branch).
        let (liquid, gas) = water_air();
        let pipe = Pipe::new(0.051, 0.0, 1e-5);
        let u_gs = arr2(&[[0.05, 5.0]]);
        let u_ls = arr2(&[[0.05, 5.0]]);

        let holdup = liquid_slug_gas_holdup(&u_gs, &u_ls, &liquid, &gas, &pipe);
        assert!(holdup[[0, 0]] < 0.0);
        assert!(holdup[[0, 1]] > 0.0);
    }

    #[test]
    fn test_sub_regime_thresholds() {
        let holdup = arr2(&[[-0.02, 0.0, 0.3, 0.52, 0.9]]);

        let free = slug_free_of_bubbles(&holdup);
        assert_eq!(
            free.into_raw_vec_and_offset().0,
            vec![true, true, false, false, false]
        );

        let full = slug_full_of_bubbles(&holdup);
        assert_eq!(
            full.into_raw_vec_and_offset().0,
            vec![false, false, false, true, true]
        );
    }

    #[test]
    fn test_self_consistent_holdup_stays_close_to_estimate() {
        // The density feedback is a small correction: the refined holdup
        // must stay in the same branch and within a few percent of the
        // no-slip estimate.
        let (liquid, gas) = water_air();
        let pipe = Pipe::new(0.051, 0.0, 1e-5);
        let u_gs = arr2(&[[1.0]]);
        let u_ls = arr2(&[[1.4]]);

        let estimate = liquid_slug_gas_holdup(&u_gs, &u_ls, &liquid, &gas, &pipe);
        let refined = self_consistent_slug_gas_holdup(
            &u_gs,
            &u_ls,
            &liquid,
            &gas,
            &pipe,
            &NewtonConfig::default(),
        )
        .unwrap();

        assert!(refined[[0, 0]] > 0.0);
        assert!((refined[[0, 0]] - estimate[[0, 0]]).abs() < 0.1);
    }
}
