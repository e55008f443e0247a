//! Vectorized Newton-Raphson and fixed-point iteration

use ndarray::{Array2, Zip};

/// Relative perturbation for the finite-difference derivative.
const DERIVATIVE_STEP: f64 = 1e-7;

/// Iteration parameters shared by [`newton_grid`] and [`fixed_point`].
///
/// The iteration cap is the only timeout-like control in the crate: it
/// bounds the work per cell and guarantees termination regardless of how
/// stiff the residual is.
///
/// # Example
///
/// ```rust
/// use flowmap_rs::solver::NewtonConfig;
///
/// let config = NewtonConfig::default();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NewtonConfig {
    /// Convergence criterion on the per-cell update magnitude
    pub tolerance: f64,

    /// Hard cap on iterations (termination guarantee)
    pub max_iterations: usize,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_iterations: 50,
        }
    }
}

impl NewtonConfig {
    /// Reject unusable parameters before any solving begins.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.tolerance > 0.0) || !self.tolerance.is_finite() {
            return Err(format!(
                "tolerance must be strictly positive and finite, got {}",
                self.tolerance
            ));
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".to_string());
        }
        Ok(())
    }
}

/// Elementwise Newton-Raphson over a grid of initial guesses.
///
/// `residual` maps a candidate grid to the residual grid of the same shape;
/// it is expected to clamp its own input domain internally (e.g. force a
/// height fraction into `[0, 1]` before evaluating circular-segment
/// geometry) so a divergent cell cannot spread NaN beyond itself.
///
/// The derivative is a forward finite difference with a per-cell relative
/// step. Cells where the residual or the derivative is non-finite, or the
/// derivative is zero, keep their current iterate for that step; whatever
/// value they hold when the loop ends is returned as-is and left to the
/// caller's validity masks.
pub fn newton_grid<F>(
    initial: &Array2<f64>,
    config: &NewtonConfig,
    residual: F,
) -> Result<Array2<f64>, String>
where
    F: Fn(&Array2<f64>) -> Array2<f64>,
{
    newton_grid_bounded(initial, config, f64::NEG_INFINITY, f64::INFINITY, residual)
}

/// [`newton_grid`] with every iterate projected into `[lower, upper]`.
///
/// For residuals whose physical branch lives between poles (e.g. a holdup
/// fraction bracketed by a packing singularity), a full Newton step can
/// jump off the branch and never find its way back. Projecting after each
/// update keeps the iteration on the bracket so it walks back to the root
/// instead of running away. NaN iterates stay NaN through the projection.
pub fn newton_grid_bounded<F>(
    initial: &Array2<f64>,
    config: &NewtonConfig,
    lower: f64,
    upper: f64,
    residual: F,
) -> Result<Array2<f64>, String>
where
    F: Fn(&Array2<f64>) -> Array2<f64>,
{
    config.validate()?;
    if !(lower < upper) {
        return Err(format!("empty bracket: lower {} is not below upper {}", lower, upper));
    }

    let mut x = initial.mapv(|xi| xi.clamp(lower, upper));

    for _ in 0..config.max_iterations {
        let fx = residual(&x);

        let step = x.mapv(|xi| DERIVATIVE_STEP * (1.0 + xi.abs()));
        let perturbed = &x + &step;
        let fx_perturbed = residual(&perturbed);

        // Per-cell update; frozen where the local slope is unusable.
        let update = Zip::from(&fx)
            .and(&fx_perturbed)
            .and(&step)
            .map_collect(|&f, &f_h, &h| {
                let slope = (f_h - f) / h;
                let dx = f / slope;
                if dx.is_finite() {
                    dx
                } else {
                    0.0
                }
            });

        x = (&x - &update).mapv(|xi| xi.clamp(lower, upper));

        let largest_update = update
            .iter()
            .map(|dx| dx.abs())
            .fold(0.0_f64, f64::max);
        if largest_update < config.tolerance {
            break;
        }
    }

    Ok(x)
}

/// Bounded fixed-point iteration `x ← map(x)` over a grid.
///
/// Stops when the largest finite per-cell change drops below the tolerance
/// or the iteration cap is reached; the last iterate is returned either
/// way. NaN cells are ignored by the convergence test.
pub fn fixed_point<F>(
    initial: &Array2<f64>,
    config: &NewtonConfig,
    map: F,
) -> Result<Array2<f64>, String>
where
    F: Fn(&Array2<f64>) -> Array2<f64>,
{
    config.validate()?;

    let mut x = initial.clone();

    for _ in 0..config.max_iterations {
        let next = map(&x);

        let largest_change = Zip::from(&next)
            .and(&x)
            .fold(0.0_f64, |acc, &a, &b| {
                let change = (a - b).abs();
                if change.is_finite() {
                    acc.max(change)
                } else {
                    acc
                }
            });

        x = next;

        if largest_change < config.tolerance {
            break;
        }
    }

    Ok(x)
}

// =================================================================================================
// Tests
// =================================================================================================
