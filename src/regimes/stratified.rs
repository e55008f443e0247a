//! Stratified flow (Taitel & Dukler 1976; Barnea 1987 eq 13-14)
//!
//! Stratified flow survives where interface waves cannot grow. The check
//! runs in two steps at every grid point:
//!
//! 1. solve the Kelvin-Helmholtz **wave-growth equation** for the critical
//!    liquid level h̃꙳ at which waves become unstable;
//! 2. compare the Taitel-Dukler **momentum balance** at h̃꙳: when the
//!    balance residual is positive, the equilibrium level sits below the
//!    critical one and the interface stays smooth.
//!
//! A separate override diverts steep pipes to annular flow: where the
//! actual film velocity is high enough to tear droplets off the wavy
//! interface (`u_l² > g·D·(1−h̃꙳)·cos β / f_l`), stratification cannot
//! persist no matter what the balance says.

use ndarray::{Array2, Zip};

use crate::correlations::dimensionless::{self, reynolds_scalar};
use crate::correlations::friction;
use crate::correlations::geometry::Geometry;
use crate::physics::{Gas, Liquid, Pipe};
use crate::solver::{newton_grid, NewtonConfig};

/// Initial guess for the critical level. The residual has spurious
/// branches near the empty pipe; starting from an almost-full section
/// converges to the physical root.
const CRITICAL_HEIGHT_GUESS: f64 = 0.95;

/// Modified Froude number: gas inertia over gravity, weighted by the phase
/// density difference. NaN wherever `ρ_l ≤ ρ_g` — those cells carry no
/// stratified solution and fall out of the masks downstream.
pub fn modified_froude(u_gs: &Array2<f64>, liquid: &Liquid, gas: &Gas, pipe: &Pipe) -> Array2<f64> {
    let density_ratio = (gas.density / (liquid.density - gas.density)).sqrt();
    let gravity_scale = (pipe.diameter * pipe.gravity * pipe.inclination.cos()).sqrt();
    u_gs.mapv(|u| density_ratio * u / gravity_scale)
}

/// Residual of the wave-growth criterion,
/// `F²·(1/(1−h̃)²)·(ṽ_g²·(dÃ_l/dh̃)/Ã_g) − 1`, zero at the critical level.
///
/// The candidate heights are clamped into [0, 1] before the segment
/// geometry is evaluated, so a wandering Newton iterate cannot spread NaN.
pub fn wave_growth_residual(height: &Array2<f64>, froude: &Array2<f64>) -> Array2<f64> {
    let clamped = height.mapv(|h| h.clamp(0.0, 1.0));
    let tilde = Geometry::normalized(&clamped);

    Zip::from(&clamped)
        .and(froude)
        .and(&tilde.vel_g)
        .and(&tilde.area_g)
        .map_collect(|&h, &fr, &vel_g, &area_g| {
            // dÃ_l/dh̃ of the circular segment
            let dadh = 2.0 * ((1.0 - h) * h).sqrt();
            let lhs = (fr * fr) * (1.0 / ((1.0 - h) * (1.0 - h))) * (vel_g * vel_g) * dadh / area_g;
            lhs - 1.0
        })
}

/// Critical liquid-level fraction h̃꙳ at every grid point, from the
/// wave-growth equation.
pub fn critical_height(
    u_gs: &Array2<f64>,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
    config: &NewtonConfig,
) -> Result<Array2<f64>, String> {
    let froude = modified_froude(u_gs, liquid, gas, pipe);
    let initial = Array2::from_elem(u_gs.raw_dim(), CRITICAL_HEIGHT_GUESS);
    let height = newton_grid(&initial, config, |h| wave_growth_residual(h, &froude))?;
    // Project stray iterates back onto the physical range, then blank the
    // cells where the equation itself is undefined (ρ_l ≤ ρ_g, cos β = 0):
    // NaN heights flow into the geometry and turn every downstream
    // comparison false, which is the masking contract.
    let clamped = height.mapv(|h| h.clamp(0.0, 1.0));
    let residual = wave_growth_residual(&clamped, &froude);
    Ok(Zip::from(&clamped)
        .and(&residual)
        .map_collect(|&h, &r| if r.is_finite() { h } else { f64::NAN }))
}

/// Momentum balance at the critical level: true where the equilibrium
/// liquid level lies below h̃꙳ and the interface is stable.
///
/// The balance `gas_term − X²·liq_term − 4Y` grows monotonically with the
/// level (the gas term blows up as the film closes, the liquid term as it
/// drains), so a positive residual at h̃꙳ puts the equilibrium below it.
pub fn equilibrium_equation(
    u_gs: &Array2<f64>,
    u_ls: &Array2<f64>,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
    height_crit: &Array2<f64>,
) -> Array2<bool> {
    let tilde = Geometry::normalized(height_crit);
    let geom = Geometry::absolute(height_crit, pipe, u_gs, u_ls);

    let x_sqrd = dimensionless::lockhart_martinelli(u_gs, u_ls, liquid, gas, pipe).mapv(|x| x * x);
    let y_grav = dimensionless::y_gravity(u_gs, liquid, gas, pipe);

    let roughness = pipe.roughness;
    let friction_ls = dimensionless::reynolds(u_ls, liquid, pipe)
        .mapv(|re| friction::niazkar_and_churchill(re, roughness));
    let friction_gs = dimensionless::reynolds(u_gs, gas, pipe)
        .mapv(|re| friction::niazkar_and_churchill(re, roughness));

    let friction_l = actual_friction(&geom.vel_l, &geom.hydr_diam_l, liquid.density,
        liquid.dynamic_viscosity, roughness);
    let friction_g = actual_friction(&geom.vel_g, &geom.hydr_diam_g, gas.density,
        gas.dynamic_viscosity, roughness);

    let gas_term = (&friction_g / &friction_gs)
        * &tilde.vel_g
        * &tilde.vel_g
        * (&tilde.perim_g / &tilde.area_g
            + &tilde.perim_interface / &tilde.area_l
            + &tilde.perim_interface / &tilde.area_g);
    let liq_term =
        &x_sqrd * (&friction_l / &friction_ls) * &tilde.vel_l * &tilde.vel_l
            * (&tilde.perim_l / &tilde.area_l);

    Zip::from(&gas_term)
        .and(&liq_term)
        .and(&y_grav)
        .map_collect(|&g, &l, &y| g - l - 4.0 * y > 0.0)
}

/// Barnea 1987 eq 13-14: true where the film runs fast enough on a steep
/// incline that droplets shear off the interface and the flow turns
/// annular instead of stratified.
pub fn too_steep_for_stratified(
    u_gs: &Array2<f64>,
    u_ls: &Array2<f64>,
    liquid: &Liquid,
    pipe: &Pipe,
    height_crit: &Array2<f64>,
) -> Array2<bool> {
    let geom = Geometry::absolute(height_crit, pipe, u_gs, u_ls);

    let friction_l = actual_friction(
        &geom.vel_l,
        &geom.hydr_diam_l,
        liquid.density,
        liquid.dynamic_viscosity,
        pipe.roughness,
    );

    let scale = pipe.gravity * pipe.diameter * pipe.inclination.cos();

    Zip::from(&geom.vel_l)
        .and(height_crit)
        .and(&friction_l)
        .map_collect(|&vel_l, &h, &f_l| vel_l * vel_l > scale * (1.0 - h) / f_l)
}

/// Combined stratified region: stable momentum balance, and not diverted to
/// annular by the steep-incline override. The critical level is solved once
/// and shared by both checks.
pub fn region(
    u_gs: &Array2<f64>,
    u_ls: &Array2<f64>,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
    config: &NewtonConfig,
) -> Result<Array2<bool>, String> {
    let height_crit = critical_height(u_gs, liquid, gas, pipe, config)?;

    let equilibrium = equilibrium_equation(u_gs, u_ls, liquid, gas, pipe, &height_crit);
    let too_steep = too_steep_for_stratified(u_gs, u_ls, liquid, pipe, &height_crit);

    Ok(Zip::from(&equilibrium)
        .and(&too_steep)
        .map_collect(|&eq, &steep| eq && !steep))
}

/// Friction factor from the in-situ phase velocity and hydraulic diameter.
fn actual_friction(
    velocity: &Array2<f64>,
    hydraulic_diameter: &Array2<f64>,
    density: f64,
    viscosity: f64,
    roughness: f64,
) -> Array2<f64> {
    Zip::from(velocity)
        .and(hydraulic_diameter)
        .map_collect(|&v, &d| {
            let re = reynolds_scalar(v, density, d, viscosity);
            friction::niazkar_and_churchill(re, roughness)
        })
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
    fn test_critical_height_is_a_root_of_wave_growth() {
        let (liquid, gas) = water_air();
        let pipe = Pipe::new(0.051, 0.0, 1e-5);
        let u_gs = arr2(&[[0.5, 2.0]]);

        let height = critical_height(&u_gs, &liquid, &gas, &pipe, &NewtonConfig::default()).unwrap();
        let froude = modified_froude(&u_gs, &liquid, &gas, &pipe);
        let residual = wave_growth_residual(&height, &froude);

        for (col, &r) in residual.iter().enumerate() {
            let h = height[[0, col]];
            // Either the equation is satisfied or the cell pinned at a
            // boundary of the physical range.
            assert!(
                r.abs() < 1e-4 || h <= 1e-9 || h >= 1.0 - 1e-9,
                "residual {} at height {}",
                r,
                h
            );
        }
    }

    #[test]
    fn test_critical_height_decreases_with_gas_velocity() {
        // Faster gas destabilizes the interface at lower liquid levels.
        let (liquid, gas) = water_air();
        let pipe = Pipe::new(0.051, 0.0, 1e-5);
        let u_gs = arr2(&[[0.1, 1.0, 10.0]]);

        let height = critical_height(&u_gs, &liquid, &gas, &pipe, &NewtonConfig::default()).unwrap();
        assert!(height[[0, 0]] > height[[0, 1]]);
        assert!(height[[0, 1]] > height[[0, 2]]);
    }

    #[test]
    fn test_stratified_exists_at_low_velocities_horizontal() {
        // Classic horizontal-map corner: slow gas, slow liquid -> stratified.
        let (liquid, gas) = water_air();
        let pipe = Pipe::new(0.051, 0.0, 1e-5);
        let u_gs = arr2(&[[0.05]]);
        let u_ls = arr2(&[[0.005]]);

        let map = region(&u_gs, &u_ls, &liquid, &gas, &pipe, &NewtonConfig::default()).unwrap();
        assert!(map[[0, 0]]);
    }

    #[test]
    fn test_stratified_absent_in_vertical_pipe() {
        // β = 90°: cos β = 0 kills the Froude denominator and the gravity
        // restoring term; the stratified predicate must be false everywhere.
        let (liquid, gas) = water_air();
        let pipe = Pipe::new(0.051, 90.0, 1e-5);
        let u_gs = arr2(&[[0.05, 1.0], [10.0, 50.0]]);
        let u_ls = arr2(&[[0.005, 0.01], [0.1, 1.0]]);

        let map = region(&u_gs, &u_ls, &liquid, &gas, &pipe, &NewtonConfig::default()).unwrap();
        assert!(map.iter().all(|&cell| !cell));
    }

    #[test]
    fn test_equal_densities_mask_out_quietly() {
        // ρ_l = ρ_g leaves the Froude sqrt undefined; the predicate must
        // return false, not panic.
        let liquid = Liquid::new(998.0, 8.9e-4, 0.9e-3, 0.073);
        let gas = Gas::new(998.0, 1.83e-5, 0.1e-3);
        let pipe = Pipe::new(0.051, 0.0, 1e-5);
        let u_gs = arr2(&[[0.5]]);
        let u_ls = arr2(&[[0.05]]);

        let map = region(&u_gs, &u_ls, &liquid, &gas, &pipe, &NewtonConfig::default()).unwrap();
        assert!(!map[[0, 0]]);
    }
}
