//! Bubbly flow (Taitel et al. 1980, Barnea et al. 1985)
//!
//! Bubbly flow is a steep-pipe regime: freely rising bubbles that neither
//! pack into slugs nor cream to the upper wall. Its existence is decided
//! once per map from the fluid pair and the pipe alone:
//!
//! 1. the Taylor-bubble rise velocity must exceed the free bubble rise
//!    velocity, otherwise rising bubbles catch the Taylor bubble ahead of
//!    them and merge into it;
//! 2. the inclination must be steep enough for the turbulent lift to
//!    balance the transverse buoyancy component, otherwise bubbles cream
//!    and the regime collapses into elongated bubbles.
//!
//! Where both hold, the regime occupies the cells whose drift-flux gas
//! void fraction exceeds the packing threshold 0.25.

use ndarray::{Array2, Zip};

use crate::physics::{Gas, Liquid, Pipe};
use crate::regimes::dispersed::deformed_bubble_critical_size;

/// Turbulent lift coefficient (Barnea et al. 1985).
const LIFT_COEFFICIENT: f64 = 0.8;

/// Bubble distortion coefficient γ (Barnea et al. 1985).
const DISTORTION_COEFFICIENT: f64 = 1.1;

/// Gas void fraction above which bubbles pack into slugs
/// (Taitel et al. 1980).
pub const CRITICAL_VOID_FRACTION: f64 = 0.25;

/// Free rise velocity of a single distorted bubble, Harmathy's form as
/// used by Taitel et al. 1980.
pub fn bubble_rise_velocity(liquid: &Liquid, gas: &Gas, pipe: &Pipe) -> f64 {
    let delta_rho = liquid.density - gas.density;
    let rho_sqrd = liquid.density * liquid.density;
    1.53 * (pipe.gravity * delta_rho * liquid.bubble_surface_tension / rho_sqrd).powf(0.25)
}

/// Rise velocity of a Taylor bubble filling the pipe (Taitel et al. 1980).
pub fn taylor_bubble_velocity(liquid: &Liquid, gas: &Gas, pipe: &Pipe) -> f64 {
    let delta_rho = liquid.density - gas.density;
    0.35 * (pipe.gravity * pipe.diameter * delta_rho / liquid.density).sqrt()
}

/// Existence condition one: the Taylor bubble outruns the free bubbles.
/// Equivalent to the Taitel et al. 1980 diameter criterion
/// `D > 19·sqrt((ρ_l − ρ_g)·σ / (ρ_l²·g))`. NaN velocities (for instance
/// an equal-density pair) compare false.
pub fn taylor_velocity_exceeds(liquid: &Liquid, gas: &Gas, pipe: &Pipe) -> bool {
    taylor_bubble_velocity(liquid, gas, pipe) > bubble_rise_velocity(liquid, gas, pipe)
}

/// Existence condition two: lift on a distorted bubble balances the
/// transverse buoyancy, so bubbles stay suspended instead of creaming to
/// the upper wall (Barnea et al. 1985).
pub fn angle_prevents_bubble_migration(liquid: &Liquid, gas: &Gas, pipe: &Pipe) -> bool {
    let rise = bubble_rise_velocity(liquid, gas, pipe);
    let bubble_size = deformed_bubble_critical_size(liquid, gas, pipe);

    let lift_bound = 0.75
        * std::f64::consts::FRAC_PI_4.cos()
        * LIFT_COEFFICIENT
        * DISTORTION_COEFFICIENT.powi(2)
        * rise
        * rise
        / (pipe.gravity * bubble_size);

    pipe.inclination.cos() <= lift_bound
}

/// Drift-flux gas void fraction compared against
/// [`CRITICAL_VOID_FRACTION`].
///
/// The holdup balance `u_gs / α = u_gs + u_ls + U₀·sin β` is a quadratic
/// in α with drift `k = U₀·sin β`. The minus root is the physical one;
/// where it leaves `[0, 1]` the plus root takes over. A horizontal pipe
/// has no drift and the quadratic degenerates to the no-slip fraction.
pub fn gas_void_fraction(
    u_gs: &Array2<f64>,
    u_ls: &Array2<f64>,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
) -> Array2<bool> {
    let drift = bubble_rise_velocity(liquid, gas, pipe) * pipe.inclination.sin();

    Zip::from(u_gs).and(u_ls).map_collect(|&g, &l| {
        let void = if drift == 0.0 {
            g / (g + l)
        } else {
            let constant_term = g + drift + l;
            let mutable_term = (constant_term * constant_term - 4.0 * g * drift).sqrt();
            let minus_root = (constant_term - mutable_term) / (2.0 * drift);
            if (0.0..=1.0).contains(&minus_root) {
                minus_root
            } else {
                (constant_term + mutable_term) / (2.0 * drift)
            }
        };
        void > CRITICAL_VOID_FRACTION
    })
}

/// Combined bubbly region: all-false unless both existence conditions
/// hold, otherwise the void-fraction map.
pub fn region(
    u_gs: &Array2<f64>,
    u_ls: &Array2<f64>,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
) -> Array2<bool> {
    if taylor_velocity_exceeds(liquid, gas, pipe)
        && angle_prevents_bubble_migration(liquid, gas, pipe)
    {
        gas_void_fraction(u_gs, u_ls, liquid, gas, pipe)
    } else {
        Array2::from_elem(u_gs.raw_dim(), false)
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
    fn test_rise_velocities_water_air() {
        let (liquid, gas) = water_air();
        let pipe = Pipe::new(0.1, 90.0, 1e-5);
        // Harmathy rise velocity for water-air is about a quarter m/s and
        // does not depend on the diameter.
        assert_relative_eq!(
            bubble_rise_velocity(&liquid, &gas, &pipe),
            0.25,
            max_relative = 2e-2
        );
        assert_relative_eq!(
            taylor_bubble_velocity(&liquid, &gas, &pipe),
            0.35 * (9.81_f64 * 0.1 * 996.775 / 998.0).sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_taylor_criterion_matches_diameter_form() {
        // The velocity comparison and the 19·sqrt(...) diameter bound are
        // the same criterion; for water-air the crossover sits near 52 mm.
        let (liquid, gas) = water_air();
        let crossover =
            19.0 * ((996.775 * 0.073) / (998.0_f64.powi(2) * 9.81)).sqrt();

        let wide = Pipe::new(crossover * 1.05, 90.0, 1e-5);
        let narrow = Pipe::new(crossover * 0.95, 90.0, 1e-5);
        assert!(taylor_velocity_exceeds(&liquid, &gas, &wide));
        assert!(!taylor_velocity_exceeds(&liquid, &gas, &narrow));
    }

    #[test]
    fn test_angle_gate_admits_vertical_rejects_horizontal() {
        let (liquid, gas) = water_air();
        assert!(angle_prevents_bubble_migration(
            &liquid,
            &gas,
            &Pipe::new(0.1, 90.0, 1e-5)
        ));
        assert!(!angle_prevents_bubble_migration(
            &liquid,
            &gas,
            &Pipe::new(0.1, 0.0, 1e-5)
        ));
    }

    #[test]
    fn test_void_fraction_horizontal_is_no_slip() {
        let (liquid, gas) = water_air();
        let pipe = Pipe::new(0.1, 0.0, 1e-5);
        // No drift: void = u_gs/(u_gs + u_ls), so 1/(1+3) = 0.25 exactly
        // is not above the threshold but 1/(1+2.9) is.
        let u_gs = arr2(&[[1.0, 1.0]]);
        let u_ls = arr2(&[[3.0, 2.9]]);
        let map = gas_void_fraction(&u_gs, &u_ls, &liquid, &gas, &pipe);
        assert!(!map[[0, 0]]);
        assert!(map[[0, 1]]);
    }

    #[test]
    fn test_vertical_drift_lowers_void_fraction() {
        // Upward drift carries gas out faster, so the same throughputs
        // give a lower void fraction than the no-slip estimate.
        let (liquid, gas) = water_air();
        let pipe = Pipe::new(0.1, 90.0, 1e-5);
        let drift = bubble_rise_velocity(&liquid, &gas, &pipe);

        let g = 0.4;
        let l = 1.0;
        let constant_term = g + drift + l;
        let root = (constant_term
            - (constant_term * constant_term - 4.0 * g * drift).sqrt())
            / (2.0 * drift);
        assert!(root < g / (g + l));
        assert!(root > 0.0);
    }

    #[test]
    fn test_region_all_false_in_narrow_pipe() {
        let (liquid, gas) = water_air();
        let pipe = Pipe::new(0.025, 90.0, 1e-5);
        let u_gs = arr2(&[[0.5, 1.0]]);
        let u_ls = arr2(&[[1.0, 0.5]]);
        let map = region(&u_gs, &u_ls, &liquid, &gas, &pipe);
        assert!(!map.iter().any(|&cell| cell));
    }

    #[test]
    fn test_region_vertical_wide_pipe() {
        let (liquid, gas) = water_air();
        let pipe = Pipe::new(0.1, 90.0, 1e-5);
        let u_gs = arr2(&[[1.0, 0.05]]);
        let u_ls = arr2(&[[1.0, 2.0]]);
        let map = region(&u_gs, &u_ls, &liquid, &gas, &pipe);
        // Gas-rich cell packs past 0.25, liquid-rich cell does not.
        assert!(map[[0, 0]]);
        assert!(!map[[0, 1]]);
    }
}
