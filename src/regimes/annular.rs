//! Annular flow (Barnea 1987 eq 15-16)
//!
//! Annular flow holds the liquid as a film on the wall with a gas core.
//! Two conditions bound it:
//!
//! 1. **film stability**: solve Barnea's eq 15 = eq 16 for the equivalent
//!    annular liquid holdup α_l; the film is stable where the gravity
//!    parameter stays below the eq-16 right-hand side evaluated at that
//!    holdup;
//! 2. **gas-core blockage**: the film collapses and bridges the core when
//!    the holdup reaches half the maximum bubble-packing analog
//!    (`α_l / 0.48 ≥ 0.5`).

use ndarray::{Array2, Zip};

use crate::correlations::dimensionless;
use crate::correlations::geometry::fluid_area_ratio;
use crate::physics::{Gas, Liquid, Pipe};
use crate::solver::{newton_grid_bounded, NewtonConfig};

/// Maximum packing fraction analog for the liquid slug (Barnea 1987).
const MAX_PACKING_HOLDUP: f64 = 0.48;

/// Bracket for the film-holdup iteration. Both balance equations blow up
/// as α → 0 and eq 16 has a pole at α = 2/3; the root lives strictly
/// between the two, and a full Newton step that jumps past either end
/// never comes back on its own.
const MIN_FILM_HOLDUP: f64 = 1e-4;
const MAX_FILM_HOLDUP: f64 = 0.66;

/// Barnea 1987 equation 15: the gravity parameter a film of holdup α_l
/// supports through its own weight and interfacial shear.
pub fn equation15(alpha_l: f64, x_sqrd: f64) -> f64 {
    let term_1 = (1.0 + 75.0 * alpha_l) / (alpha_l * (1.0 - alpha_l).powf(2.5));
    let term_2 = x_sqrd / (alpha_l * alpha_l * alpha_l);
    term_1 - term_2
}

/// Barnea 1987 equation 16: the steepest-descent instability bound on the
/// gravity parameter at holdup α_l.
pub fn equation16(alpha_l: f64, x_sqrd: f64) -> f64 {
    let numerator = 2.0 - 1.5 * alpha_l;
    let denominator = alpha_l.powi(3) * (1.0 - 1.5 * alpha_l);
    (numerator / denominator) * x_sqrd
}

/// Equivalent annular liquid holdup at every grid point, from
/// eq 15 = eq 16. Initial guess: the area ratio the liquid would occupy
/// flowing alone, projected into the bracket; the iteration is likewise
/// bracketed so thin-film cells whose first Newton step overshoots past
/// α = 0 still land on the root. Cells with no physical solution come
/// back NaN.
pub fn film_holdup(
    u_gs: &Array2<f64>,
    u_ls: &Array2<f64>,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
    config: &NewtonConfig,
) -> Result<Array2<f64>, String> {
    let x_sqrd =
        dimensionless::lockhart_martinelli(u_gs, u_ls, liquid, gas, pipe).mapv(|x| x * x);

    let initial = fluid_area_ratio(u_ls, liquid, pipe);

    newton_grid_bounded(&initial, config, MIN_FILM_HOLDUP, MAX_FILM_HOLDUP, |alpha| {
        Zip::from(alpha)
            .and(&x_sqrd)
            .map_collect(|&a, &x2| equation15(a, x2) - equation16(a, x2))
    })
}

/// Film-stability condition: true where `Y < eq16(α_l, X²)`.
pub fn liquid_stability(
    u_gs: &Array2<f64>,
    u_ls: &Array2<f64>,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
    holdup: &Array2<f64>,
) -> Array2<bool> {
    let x_sqrd =
        dimensionless::lockhart_martinelli(u_gs, u_ls, liquid, gas, pipe).mapv(|x| x * x);
    let y_grav = dimensionless::y_gravity(u_gs, liquid, gas, pipe);

    Zip::from(&y_grav)
        .and(holdup)
        .and(&x_sqrd)
        .map_collect(|&y, &alpha, &x2| y < equation16(alpha, x2))
}

/// Gas-core condition: true where the film holdup leaves the core open,
/// `α_l / 0.48 < 0.5`.
pub fn gas_core_open(holdup: &Array2<f64>) -> Array2<bool> {
    holdup.mapv(|alpha| alpha / MAX_PACKING_HOLDUP < 0.5)
}

/// Combined annular region: stable film and open core, sharing one holdup
/// solve.
pub fn region(
    u_gs: &Array2<f64>,
    u_ls: &Array2<f64>,
    liquid: &Liquid,
    gas: &Gas,
    pipe: &Pipe,
    config: &NewtonConfig,
) -> Result<Array2<bool>, String> {
    let holdup = film_holdup(u_gs, u_ls, liquid, gas, pipe, config)?;

    let stable = liquid_stability(u_gs, u_ls, liquid, gas, pipe, &holdup);
    let open = gas_core_open(&holdup);

    Ok(Zip::from(&stable)
        .and(&open)
        .map_collect(|&s, &o| s && o))
}

// =================================================================================================
// Tests
// =================================================================================================
