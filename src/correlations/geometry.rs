//! Circular-segment geometry of a partially filled pipe
//!
//! Stratified flow divides the circular cross section by a horizontal chord
//! at the liquid level. Every stratified-transition quantity (wetted areas,
//! perimeters, hydraulic diameters, actual phase velocities) follows from
//! the liquid-level fraction h̃ ∈ [0, 1] through the circular-segment
//! formulas, written against the substitution `v = 2h̃ − 1`.
//!
//! Two parameterizations are needed:
//!
//! - **normalized** (diameter = 1): areas as fractions of D², perimeters as
//!   fractions of D, velocities as multiples of the superficial velocity.
//!   The Taitel-Dukler wave-growth equation lives entirely in this form.
//! - **absolute**: scaled by the pipe diameter and the actual superficial
//!   velocities, for the dimensional force balances (the too-steep
//!   criterion needs m/s and m).
//!
//! The level fraction is clamped to [0, 1] before any `acos` is taken, so a
//! wandering solver iterate degrades to the nearest physical section rather
//! than spreading NaN.

use ndarray::{Array2, Zip};

use crate::physics::{FluidProperties, Pipe};
use crate::solver::{newton_grid, NewtonConfig};

/// Quarter pi, the normalized full-pipe area (circle of diameter 1).
const NORMALIZED_PIPE_AREA: f64 = std::f64::consts::FRAC_PI_4;

/// Cross-section quantities at a given liquid-level fraction.
///
/// Computed fresh for every solver iterate; stateless.
#[derive(Debug, Clone)]
pub struct Geometry {
    /// Liquid cross-section area
    pub area_l: Array2<f64>,

    /// Gas cross-section area
    pub area_g: Array2<f64>,

    /// Wetted perimeter of the liquid
    pub perim_l: Array2<f64>,

    /// Perimeter in contact with the gas
    pub perim_g: Array2<f64>,

    /// Gas-liquid interface width (chord length)
    pub perim_interface: Array2<f64>,

    /// Liquid hydraulic diameter, `4·A_l / S_l`
    pub hydr_diam_l: Array2<f64>,

    /// Gas hydraulic diameter, `4·A_g / (S_g + S_i)`
    pub hydr_diam_g: Array2<f64>,

    /// Actual (in-situ) liquid velocity
    pub vel_l: Array2<f64>,

    /// Actual (in-situ) gas velocity
    pub vel_g: Array2<f64>,
}

/// One cell of normalized segment quantities, in the order
/// (area_l, area_g, perim_l, perim_g, perim_interface).
fn segment_cell(height: f64) -> (f64, f64, f64, f64, f64) {
    let h = height.clamp(0.0, 1.0);
    let v = 2.0 * h - 1.0;
    let half_angle = v.acos();
    let chord = (1.0 - v * v).sqrt();

    let area_l = 0.25 * (std::f64::consts::PI - half_angle + v * chord);
    let area_g = 0.25 * (half_angle - v * chord);
    let perim_l = std::f64::consts::PI - half_angle;
    let perim_g = half_angle;

    (area_l, area_g, perim_l, perim_g, chord)
}

impl Geometry {
    /// Normalized quantities (diameter = 1, superficial velocities = 1).
    ///
    /// Velocities come out as the ratio of actual to superficial velocity,
    /// `(π/4) / area_fraction`.
    pub fn normalized(height: &Array2<f64>) -> Self {
        Self::build(height, 1.0)
    }

    /// Absolute quantities for a concrete pipe and superficial velocities.
    ///
    /// Areas scale with D², perimeters and hydraulic diameters with D. The
    /// actual velocities `u·(π/4)/ã` are diameter-free, so they only need
    /// the superficial velocity grids.
    pub fn absolute(
        height: &Array2<f64>,
        pipe: &Pipe,
        u_gs: &Array2<f64>,
        u_ls: &Array2<f64>,
    ) -> Self {
        let mut geometry = Self::build(height, pipe.diameter);
        geometry.vel_l = Zip::from(&geometry.vel_l)
            .and(u_ls)
            .map_collect(|&ratio, &u| ratio * u);
        geometry.vel_g = Zip::from(&geometry.vel_g)
            .and(u_gs)
            .map_collect(|&ratio, &u| ratio * u);
        geometry
    }

    fn build(height: &Array2<f64>, diameter: f64) -> Self {
        let shape = height.raw_dim();
        let mut area_l = Array2::zeros(shape);
        let mut area_g = Array2::zeros(shape);
        let mut perim_l = Array2::zeros(shape);
        let mut perim_g = Array2::zeros(shape);
        let mut perim_interface = Array2::zeros(shape);
        let mut hydr_diam_l = Array2::zeros(shape);
        let mut hydr_diam_g = Array2::zeros(shape);
        let mut vel_l = Array2::zeros(shape);
        let mut vel_g = Array2::zeros(shape);

        Zip::from(height)
            .and(&mut area_l)
            .and(&mut area_g)
            .and(&mut perim_l)
            .and(&mut perim_g)
            .and(&mut perim_interface)
            .for_each(|&h, a_l, a_g, p_l, p_g, p_i| {
                let (na_l, na_g, np_l, np_g, np_i) = segment_cell(h);
                *a_l = na_l * diameter * diameter;
                *a_g = na_g * diameter * diameter;
                *p_l = np_l * diameter;
                *p_g = np_g * diameter;
                *p_i = np_i * diameter;
            });

        Zip::from(height)
            .and(&mut hydr_diam_l)
            .and(&mut hydr_diam_g)
            .and(&mut vel_l)
            .and(&mut vel_g)
            .for_each(|&h, d_l, d_g, v_l, v_g| {
                let (na_l, na_g, np_l, np_g, np_i) = segment_cell(h);
                *d_l = diameter * 4.0 * na_l / np_l;
                *d_g = diameter * 4.0 * na_g / (np_g + np_i);
                *v_l = NORMALIZED_PIPE_AREA / na_l;
                *v_g = NORMALIZED_PIPE_AREA / na_g;
            });

        Self {
            area_l,
            area_g,
            perim_l,
            perim_g,
            perim_interface,
            hydr_diam_l,
            hydr_diam_g,
            vel_l,
            vel_g,
        }
    }
}

/// Area fraction a single phase would occupy flowing alone at its assigned
/// mass flow and the given superficial velocity:
/// `ṁ / (ρ · v · A_pipe)`, elementwise.
pub fn fluid_area_ratio(
    velocity: &Array2<f64>,
    fluid: &dyn FluidProperties,
    pipe: &Pipe,
) -> Array2<f64> {
    let mass_flowrate = fluid.mass_flowrate();
    let density = fluid.density();
    let area = pipe.area;
    velocity.mapv(|v| mass_flowrate / (density * v * area))
}

/// Invert the circular-segment area: find the liquid-level fraction h̃
/// whose segment occupies the same area fraction the phase would occupy
/// flowing alone ([`fluid_area_ratio`]).
///
/// Degenerate targets are pinned rather than iterated: an area ratio ≤ 0
/// maps to height 0 and ≥ 1 to the full pipe (h̃ = 1). The rest solve by
/// Newton iteration on the segment-area formula.
pub fn sagitta_height(
    velocity: &Array2<f64>,
    fluid: &dyn FluidProperties,
    pipe: &Pipe,
    config: &NewtonConfig,
) -> Result<Array2<f64>, String> {
    let target = fluid_area_ratio(velocity, fluid, pipe);

    // Initial guess: the target itself. For a circular segment the level
    // fraction and the area fraction never differ by more than ~0.2.
    let initial = target.mapv(|t| t.clamp(0.0, 1.0));

    let solved = newton_grid(&initial, config, |height| {
        Zip::from(height)
            .and(&target)
            .map_collect(|&h, &t| {
                let (area_l, _, _, _, _) = segment_cell(h);
                area_l / NORMALIZED_PIPE_AREA - t
            })
    })?;

    // Pin the degenerate targets and clip stray iterates.
    Ok(Zip::from(&solved)
        .and(&target)
        .map_collect(|&h, &t| {
            if t <= 0.0 {
                0.0
            } else if t >= 1.0 {
                1.0
            } else {
                h.clamp(0.0, 1.0)
            }
        }))
}

// =================================================================================================
// Tests
// =================================================================================================
