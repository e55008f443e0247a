//! Non-dimensional numbers
//!
//! The stratified and annular transition equations are written in terms of
//! two groupings of single-phase pressure gradients (Taitel & Dukler 1976):
//!
//! - **X** (Lockhart-Martinelli): `sqrt(dpdx_liquid_alone / dpdx_gas_alone)`
//! - **Y** (gravity parameter): buoyancy along the pipe axis over the
//!   gas-alone pressure gradient
//!
//! where "alone" means the phase flowing by itself at its superficial
//! velocity, filling the whole cross section.

use ndarray::Array2;

use crate::correlations::friction;
use crate::physics::{FluidProperties, Gas, Liquid, Pipe};

/// Reynolds number of a single cell.
pub fn reynolds_scalar(velocity: f64, density: f64, diameter: f64, viscosity: f64) -> f64 {
    velocity * density * diameter / viscosity
}

/// Reynolds number of a phase flowing alone, elementwise over a velocity
/// grid.
pub fn reynolds(velocity: &Array2<f64>, fluid: &dyn FluidProperties, pipe: &Pipe) -> Array2<f64> {
    let density = fluid.density();
    let viscosity = fluid.dynamic_viscosity();
    let diameter = pipe.diameter;
    velocity.mapv(|v| reynolds_scalar(v, density, diameter, viscosity))
}

/// Frictional pressure gradient of a phase flowing alone:
/// `(4/D) · f · ρ v² / 2`, the form the transition literature uses.
/// Friction factor via [`friction::niazkar_and_churchill`].
pub fn pressure_gradient(
    velocity: &Array2<f64>,
    fluid: &dyn FluidProperties,
    pipe: &Pipe,
) -> Array2<f64> {
    let density = fluid.density();
    let viscosity = fluid.dynamic_viscosity();
    let diameter = pipe.diameter;
    let roughness = pipe.roughness;

    velocity.mapv(|v| {
        let re = reynolds_scalar(v, density, diameter, viscosity);
        let factor = friction::niazkar_and_churchill(re, roughness);
        (4.0 / diameter) * factor * density * v * v / 2.0
    })
}

/// Lockhart-Martinelli parameter X, elementwise:
/// `sqrt(dpdx_ls / dpdx_gs)`.
pub fn lockhart_martinelli(
    u_gs: &Array2<f64>,
    u_ls: &Array2<f64>,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
) -> Array2<f64> {
    let dpdx_ls = pressure_gradient(u_ls, liquid, pipe);
    let dpdx_gs = pressure_gradient(u_gs, gas, pipe);
    (dpdx_ls / dpdx_gs).mapv(f64::sqrt)
}

/// Gravity parameter Y, elementwise:
/// `(ρ_l − ρ_g) · g · sin β / dpdx_gs`.
///
/// Vanishes for a horizontal pipe and flips sign for downward inclination,
/// which is what suppresses or drives the stratified equilibrium there.
pub fn y_gravity(u_gs: &Array2<f64>, liquid: &Liquid, gas: &Gas, pipe: &Pipe) -> Array2<f64> {
    let buoyancy = (liquid.density - gas.density) * pipe.gravity * pipe.inclination.sin();
    let dpdx_gs = pressure_gradient(u_gs, gas, pipe);
    dpdx_gs.mapv(|dpdx| buoyancy / dpdx)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr2;

    fn water_air_pipe() -> (Liquid, Gas, Pipe) {
        (
            Liquid::new(998.0, 8.9e-4, 0.9e-3, 0.073),
            Gas::new(1.225, 1.83e-5, 0.1e-3),
            Pipe::new(0.051, 0.0, 1e-5),
        )
    }

    #[test]
    fn test_reynolds_definition() {
        let (liquid, _, pipe) = water_air_pipe();
        let re = reynolds(&arr2(&[[1.0]]), &liquid, &pipe);
        assert_relative_eq!(re[[0, 0]], 998.0 * 1.0 * 0.051 / 8.9e-4, epsilon = 1e-6);
    }

    #[test]
    fn test_pressure_gradient_scales_faster_than_velocity_squared() {
        // dpdx ~ f(v)·v²; f decays slower than 1/v in the turbulent range,
        // so doubling the velocity should more than triple the gradient.
        let (liquid, _, pipe) = water_air_pipe();
        let dpdx = pressure_gradient(&arr2(&[[1.0, 2.0]]), &liquid, &pipe);
        assert!(dpdx[[0, 1]] > 3.0 * dpdx[[0, 0]]);
        assert!(dpdx[[0, 1]] < 4.0 * dpdx[[0, 0]]);
    }

    #[test]
    fn test_lockhart_martinelli_positive_and_monotonic_in_u_ls() {
        let (liquid, gas, pipe) = water_air_pipe();
        let u_gs = arr2(&[[1.0, 1.0]]);
        let u_ls = arr2(&[[0.1, 1.0]]);
        let x = lockhart_martinelli(&u_gs, &u_ls, &liquid, &gas, &pipe);
        assert!(x[[0, 0]] > 0.0);
        assert!(x[[0, 1]] > x[[0, 0]]);
    }

    #[test]
    fn test_y_gravity_vanishes_horizontal_and_flips_sign() {
        let (liquid, gas, _) = water_air_pipe();
        let u_gs = arr2(&[[1.0]]);

        let horizontal = Pipe::new(0.051, 0.0, 1e-5);
        let upward = Pipe::new(0.051, 30.0, 1e-5);
        let downward = Pipe::new(0.051, -30.0, 1e-5);

        assert_relative_eq!(
            y_gravity(&u_gs, &liquid, &gas, &horizontal)[[0, 0]],
            0.0,
            epsilon = 1e-12
        );
        let up = y_gravity(&u_gs, &liquid, &gas, &upward)[[0, 0]];
        let down = y_gravity(&u_gs, &liquid, &gas, &downward)[[0, 0]];
        assert!(up > 0.0);
        assert_relative_eq!(up, -down, max_relative = 1e-10);
    }
}
