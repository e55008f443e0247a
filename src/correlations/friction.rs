//! Darcy friction factor correlations
//!
//! Explicit Colebrook-White approximations, each valid on its own slice of
//! the (Reynolds, roughness) plane, plus the laminar branch `64/Re`.
//!
//! No single correlation covers the whole velocity grid, so two combinators
//! stitch domains together:
//!
//! - [`niazkar_and_churchill`]: Niazkar first, Churchill where Niazkar is
//!   undefined, laminar where both fail. Used by the pressure-gradient and
//!   stratified/slug closures.
//! - [`laminar_and_fang`]: a strict partition at Re = 2300 — laminar below,
//!   Fang (2011) at and above. Used by the dispersed-bubble closures.
//!
//! All functions take a single cell; grid callers map them with
//! `Array2::mapv`. None of them raise on out-of-range input — an invalid
//! domain shows up as NaN and the combinators (or the calling predicate's
//! boolean mask) deal with it.

/// Laminar (Hagen-Poiseuille) friction factor, `64/Re`.
pub fn laminar(reynolds: f64) -> f64 {
    64.0 / reynolds
}

/// Niazkar (2019), with Churchill and laminar fallbacks where it is
/// undefined. Finite and positive for every Re > 0.
pub fn niazkar_and_churchill(reynolds: f64, roughness: f64) -> f64 {
    let factor = niazkar(reynolds, roughness);
    if factor.is_finite() {
        return factor;
    }
    let factor = churchill(reynolds, roughness);
    if factor.is_finite() {
        return factor;
    }
    laminar(reynolds)
}

/// Strict partition at the laminar-turbulent threshold: `64/Re` below
/// Re = 2300, Fang (2011) at and above it.
pub fn laminar_and_fang(reynolds: f64, roughness: f64) -> f64 {
    if reynolds < 2300.0 {
        laminar(reynolds)
    } else {
        fang(reynolds, roughness)
    }
}

/// Model: Swamee, Jain (1976).
///
/// Suitable range: 5000 < Re < 10⁸, e/D = 0.00001 – 0.5.
pub fn swamee_jain(reynolds: f64, roughness: f64) -> f64 {
    0.25 / (roughness / 3.7 + 5.74 / reynolds.powf(0.9)).log10().powi(2)
}

/// Model: Bellos, Nalbantis, Tsakiris (2018).
///
/// Suitable range: all flow regimes, free surface flow.
pub fn bellos_nalbantis_tsakiris(reynolds: f64, roughness: f64) -> f64 {
    let inv_roughness = 1.0 / roughness;
    let param_a = 1.0 / (1.0 + (reynolds / 2712.0).powf(8.4));
    let param_b = 1.0 / (1.0 + (reynolds / (150.0 * inv_roughness)).powf(1.8));
    let exponent_a = 2.0 * (param_a - 1.0) * param_b;
    let exponent_b = 2.0 * (param_a - 1.0) * (1.0 - param_b);

    (64.0 / reynolds).powf(param_a)
        * (0.75 * (reynolds / 5.37).ln()).powf(exponent_a)
        * (0.88 * (6.82 * inv_roughness).ln()).powf(exponent_b)
}

/// Model: Niazkar (2019).
///
/// Suitable range: turbulent.
pub fn niazkar(reynolds: f64, roughness: f64) -> f64 {
    let a = -2.0 * (roughness / 3.7 + 4.5547 / reynolds.powf(0.08784)).log10();
    let b = -2.0 * (roughness / 3.7 + 2.51 * a / reynolds).log10();
    let c = -2.0 * (roughness / 3.7 + 2.51 * b / reynolds).log10();
    let inv_sqrt_f = a - (b - a).powi(2) / (c - 2.0 * b + a);

    1.0 / (inv_sqrt_f * inv_sqrt_f)
}

/// Model: Churchill (1977).
///
/// Suitable range: any.
pub fn churchill(reynolds: f64, roughness: f64) -> f64 {
    let theta_1 = (-2.457 * ((7.0 / reynolds).powf(0.9) + 0.27 * roughness).ln()).powi(16);
    let theta_2 = (37530.0 / reynolds).powi(16);

    8.0 * ((8.0 / reynolds).powi(12) + (theta_1 + theta_2).powf(-1.5)).powf(1.0 / 12.0)
}

/// Model: Fang (2011).
///
/// Suitable range: Re > 2300 (turbulent and transition range only).
pub fn fang(reynolds: f64, roughness: f64) -> f64 {
    1.613
        * (0.234 * roughness.powf(1.1007) - 60.525 / reynolds.powf(1.1105)
            + 56.291 / reynolds.powf(1.0712))
        .ln()
        .powi(-2)
}

/// Model: Evangelides, Papaevangelou, Tzimopoulos (2010).
///
/// Suitable range: Re > 2300 (turbulent and transition range only).
pub fn ept(reynolds: f64, roughness: f64) -> f64 {
    (0.2479 - 0.0000947 * (7.0 - reynolds.log10()).powi(4))
        / (roughness / 3.615 + 7.366 / reynolds.powf(0.9142)).log10().powi(2)
}

/// Model: Avci, Karagoz (2009).
///
/// Suitable range: Re > 2300 (turbulent and transition range only).
pub fn avci_karagoz(reynolds: f64, roughness: f64) -> f64 {
    6.4 / (reynolds.ln()
        - (1.0 + 0.01 * reynolds * roughness * (1.0 + 10.0 * roughness.sqrt())).ln())
    .powf(2.4)
}

/// Model: Brkić (2011).
///
/// Suitable range: Re > 2300 (turbulent and transition range only).
pub fn brkic(reynolds: f64, roughness: f64) -> f64 {
    let beta = (reynolds / (1.816 * ((1.1 * reynolds) / (1.0 + 1.1 * reynolds).ln()).ln())).ln();
    (-2.0 * ((2.18 * beta) / reynolds + roughness / 3.71).log10()).powi(-2)
}

// =================================================================================================
// Tests
// =================================================================================================
