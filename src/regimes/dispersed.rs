//! Dispersed-bubble flow (Barnea 1986/1987)
//!
//! At high liquid loading the turbulence of the mixture shatters the gas
//! into bubbles too small to coalesce into slugs. Two criteria define the
//! region:
//!
//! * **void fraction**: gas fractions above 0.35 cannot stay dispersed, so
//!   the liquid must dominate the throughput;
//! * **coalescence**: the turbulent breakup diameter must stay below the
//!   smaller of the deformed-bubble and creaming (migration-to-top)
//!   critical sizes.
//!
//! The assembly splits the map at the largest gas velocity where both
//! criteria coincide: below it coalescence matters, above it the void
//! fraction alone bounds the region.

use ndarray::{Array2, Zip};

use crate::correlations::friction;
use crate::physics::{Gas, Liquid, Mixture, Pipe};

/// Gas void fractions above this cannot remain dispersed.
pub const CRITICAL_VOID_FRACTION: f64 = 0.35;

/// True where the no-slip gas void fraction stays below
/// [`CRITICAL_VOID_FRACTION`].
pub fn gas_void_fraction(u_gs: &Array2<f64>, u_ls: &Array2<f64>) -> Array2<bool> {
    let ratio = (1.0 - CRITICAL_VOID_FRACTION) / CRITICAL_VOID_FRACTION;
    Zip::from(u_gs)
        .and(u_ls)
        .map_collect(|&g, &l| l > g * ratio)
}

/// Critical size above which a bubble deforms and loses its sphericity
/// (Barnea 1987 eq 6). A single scalar for the whole map.
pub fn deformed_bubble_critical_size(liquid: &Liquid, gas: &Gas, pipe: &Pipe) -> f64 {
    let delta_rho = liquid.density - gas.density;
    2.0 * (0.4 * liquid.bubble_surface_tension / (delta_rho * pipe.gravity)).sqrt()
}

/// Critical size below which turbulence keeps a bubble from creaming to
/// the top of the pipe (Barnea 1987 eq 6). Grows without bound as the
/// pipe steepens toward vertical, where there is no top to cream to, so
/// the deformation limit always wins there.
pub fn migration_to_top_critical_size(
    u_gs: &Array2<f64>,
    u_ls: &Array2<f64>,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
) -> Array2<f64> {
    let mixture = Mixture::new(u_gs, u_ls, liquid, gas);
    let friction_mix = mixture
        .reynolds(pipe)
        .mapv(|re| friction::laminar_and_fang(re, pipe.roughness));

    let density_ratio = liquid.density / (liquid.density - gas.density);
    let gravity_normal = pipe.gravity * pipe.inclination.cos();

    Zip::from(&friction_mix)
        .and(&mixture.velocity)
        .map_collect(|&f, &u_m| 0.375 * density_ratio * f * u_m * u_m / gravity_normal)
}

/// True where turbulent breakup holds the bubbles below both critical
/// sizes, so they cannot coalesce into slugs (Barnea 1987 eq 4).
pub fn bubble_coalescence(
    u_gs: &Array2<f64>,
    u_ls: &Array2<f64>,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
) -> Array2<bool> {
    let deformed = deformed_bubble_critical_size(liquid, gas, pipe);
    let migration = migration_to_top_critical_size(u_gs, u_ls, liquid, gas, pipe);

    let mixture = Mixture::new(u_gs, u_ls, liquid, gas);
    let friction_mix = mixture
        .reynolds(pipe)
        .mapv(|re| friction::laminar_and_fang(re, pipe.roughness));

    let surface_term = (liquid.bubble_surface_tension / liquid.density).powf(0.6);
    let diameter = pipe.diameter;

    Zip::from(u_gs)
        .and(&mixture.velocity)
        .and(&friction_mix)
        .and(&migration)
        .map_collect(|&g, &u_m, &f, &d_migr| {
            let turbulent = (0.725 + 4.15 * (g / u_m).sqrt())
                * surface_term
                * ((2.0 * f / diameter) * u_m.powi(3)).powf(-0.4);
            d_migr.min(deformed) > turbulent
        })
}

/// Combined dispersed-bubble region.
///
/// Below the largest gas velocity where the void-fraction and coalescence
/// maps agree, both criteria apply; above it the void fraction alone does.
/// When the maps never agree the split degenerates and both criteria are
/// required everywhere.
pub fn region(
    u_gs: &Array2<f64>,
    u_ls: &Array2<f64>,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
) -> Array2<bool> {
    let void = gas_void_fraction(u_gs, u_ls);
    let coalescence = bubble_coalescence(u_gs, u_ls, liquid, gas, pipe);

    let maximum_u_gs = Zip::from(u_gs)
        .and(&void)
        .and(&coalescence)
        .fold(f64::NEG_INFINITY, |acc, &g, &v, &c| {
            if v && c {
                acc.max(g)
            } else {
                acc
            }
        });

    if maximum_u_gs == f64::NEG_INFINITY {
        return Zip::from(&void)
            .and(&coalescence)
            .map_collect(|&v, &c| v && c);
    }

    Zip::from(u_gs)
        .and(&void)
        .and(&coalescence)
        .map_collect(|&g, &v, &c| if g < maximum_u_gs { v && c } else { v })
}

// =================================================================================================
// Tests
// =================================================================================================
