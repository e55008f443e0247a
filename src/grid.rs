//! Logarithmically spaced superficial-velocity grids
//!
//! A flow-pattern map sweeps several decades of superficial gas and liquid
//! velocity, so the sweep is built on a log scale. The grid is stored as two
//! same-shape 2D arrays:
//!
//! - `u_gs[[row, col]]` varies along **columns** (the x axis of a map)
//! - `u_ls[[row, col]]` varies along **rows** (the y axis of a map)
//!
//! Every regime predicate consumes the pair elementwise, so the convention
//! only matters for plotting and export — but it must stay consistent end to
//! end, which is why the two arrays live together in [`VelocityGrid`] rather
//! than travelling separately.
//!
//! All velocities are strictly positive: zero superficial velocity breaks
//! every closure that divides by velocity, so the configuration is rejected
//! up front rather than producing a grid full of NaN columns.

use ndarray::{Array1, Array2};

/// Configuration of the velocity sweep.
///
/// Replaces ambient configuration constants with an explicit struct resolved
/// at the call boundary. The defaults reproduce the customary map extent:
/// u_gs ∈ [10⁻², 10²] m/s, u_ls ∈ [10⁻³, 10¹] m/s at 300×300 points.
///
/// # Example
///
/// ```rust
/// use flowmap_rs::grid::GridConfig;
///
/// let config = GridConfig {
///     datapoints: 50,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Number of points per axis (grid is datapoints × datapoints)
    pub datapoints: usize,

    /// Smallest superficial liquid velocity (m/s)
    pub min_u_ls: f64,

    /// Largest superficial liquid velocity (m/s)
    pub max_u_ls: f64,

    /// Smallest superficial gas velocity (m/s)
    pub min_u_gs: f64,

    /// Largest superficial gas velocity (m/s)
    pub max_u_gs: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            datapoints: 300,
            min_u_ls: 1e-3,
            max_u_ls: 1e1,
            min_u_gs: 1e-2,
            max_u_gs: 1e2,
        }
    }
}

impl GridConfig {
    /// Validate the configuration before any solving begins.
    ///
    /// Zero or negative velocities are rejected here because they are a
    /// configuration mistake, not a physical edge case: the closures divide
    /// by velocity everywhere.
    pub fn validate(&self) -> Result<(), String> {
        if self.datapoints < 2 {
            return Err(format!(
                "grid needs at least 2 points per axis, got {}",
                self.datapoints
            ));
        }
        for (name, min, max) in [
            ("u_ls", self.min_u_ls, self.max_u_ls),
            ("u_gs", self.min_u_gs, self.max_u_gs),
        ] {
            if min <= 0.0 || !min.is_finite() {
                return Err(format!(
                    "minimum {} must be strictly positive and finite, got {}",
                    name, min
                ));
            }
            if max <= min || !max.is_finite() {
                return Err(format!(
                    "maximum {} must be finite and larger than the minimum, got {} <= {}",
                    name, max, min
                ));
            }
        }
        Ok(())
    }
}

/// Two same-shape grids of superficial gas and liquid velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct VelocityGrid {
    /// Superficial gas velocity (m/s); constant along rows
    pub u_gs: Array2<f64>,

    /// Superficial liquid velocity (m/s); constant along columns
    pub u_ls: Array2<f64>,
}

impl VelocityGrid {
    /// Generate the log-spaced sweep described by `config`.
    pub fn generate(config: &GridConfig) -> Result<Self, String> {
        config.validate()?;

        let n = config.datapoints;
        let u_gs_axis = geomspace(config.min_u_gs, config.max_u_gs, n);
        let u_ls_axis = geomspace(config.min_u_ls, config.max_u_ls, n);

        // Tile the axes: u_gs repeats each row, u_ls repeats each column.
        let u_gs = Array2::from_shape_fn((n, n), |(_, col)| u_gs_axis[col]);
        let u_ls = Array2::from_shape_fn((n, n), |(row, _)| u_ls_axis[row]);

        Ok(Self { u_gs, u_ls })
    }

    /// Wrap caller-supplied grids, rejecting mismatched shapes and
    /// non-positive velocities immediately.
    pub fn from_arrays(u_gs: Array2<f64>, u_ls: Array2<f64>) -> Result<Self, String> {
        if u_gs.shape() != u_ls.shape() {
            return Err(format!(
                "velocity grids must share a shape, got {:?} and {:?}",
                u_gs.shape(),
                u_ls.shape()
            ));
        }
        if u_gs.iter().chain(u_ls.iter()).any(|&v| !(v > 0.0)) {
            return Err("velocity grids must be strictly positive everywhere".to_string());
        }
        Ok(Self { u_gs, u_ls })
    }

    /// Grid shape as (rows, columns).
    pub fn shape(&self) -> (usize, usize) {
        let s = self.u_gs.shape();
        (s[0], s[1])
    }

    /// The u_gs axis (first row of the gas grid).
    pub fn u_gs_axis(&self) -> Array1<f64> {
        self.u_gs.row(0).to_owned()
    }

    /// The u_ls axis (first column of the liquid grid).
    pub fn u_ls_axis(&self) -> Array1<f64> {
        self.u_ls.column(0).to_owned()
    }
}

/// `n` points spaced evenly on a log scale between `start` and `stop`
/// inclusive.
fn geomspace(start: f64, stop: f64, n: usize) -> Array1<f64> {
    let log_start = start.ln();
    let log_stop = stop.ln();
    let step = (log_stop - log_start) / (n - 1) as f64;
    Array1::from_shape_fn(n, |i| (log_start + step * i as f64).exp())
}

// =================================================================================================
// Tests
// =================================================================================================
