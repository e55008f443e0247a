//! Flow-pattern map rendering
//!
//! This module uses the `plotters` library to render the classified map as
//! the classic log-log flow-pattern chart: superficial gas velocity on the
//! x axis, superficial liquid velocity on the y axis, one filled cell per
//! grid point coloured by regime.
//!
//! # Example
//!
//! ```rust,ignore
//! use flowmap_rs::output::visualization::{plot_flow_map, PlotConfig};
//!
//! let mut config = PlotConfig::default();
//! config.title = "Water-Air, 51 mm, Horizontal".to_string();
//! plot_flow_map(&grid, &classification.category, "map.png", Some(&config))?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use ndarray::Array2;

use crate::grid::VelocityGrid;
use crate::regimes::FlowRegime;

// =================================================================================================
// Configuration
// =================================================================================================

/// Configuration for customizing the flow-pattern map
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `regime_colors`: One colour per [`FlowRegime`] label, palette order
/// - `background`: Background color
///
/// # Example
///
/// ```rust,ignore
/// let mut config = PlotConfig::default();
/// config.title = "Vertical Upflow".to_string();
/// config.width = 1920;  // Full HD
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Flow Pattern Map")
    pub title: String,

    /// X-axis label (default: "u_gs (m/s)")
    pub xlabel: String,

    /// Y-axis label (default: "u_ls (m/s)")
    pub ylabel: String,

    /// One colour per regime, indexed by category label
    pub regime_colors: Vec<RGBColor>,

    /// Background color (default: WHITE)
    pub background: RGBColor,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Flow Pattern Map".to_string(),
            xlabel: "u_gs (m/s)".to_string(),
            ylabel: "u_ls (m/s)".to_string(),
            regime_colors: vec![
                RGBColor(31, 119, 180),  // dispersed bubble
                RGBColor(255, 127, 14),  // stratified
                RGBColor(44, 160, 44),   // annular
                RGBColor(214, 39, 40),   // bubbly
                RGBColor(148, 103, 189), // elongated bubble
                RGBColor(140, 86, 75),   // slug
                RGBColor(227, 119, 194), // churn
            ],
            background: WHITE,
        }
    }
}

impl PlotConfig {
    fn color_for(&self, label: i8) -> RGBColor {
        usize::try_from(label)
            .ok()
            .and_then(|index| self.regime_colors.get(index))
            .copied()
            .unwrap_or(BLACK)
    }
}

// =================================================================================================
// Plotting
// =================================================================================================

/// Render the classified map as a PNG flow-pattern chart.
///
/// Both axes are logarithmic, matching the grid spacing; each cell is a
/// filled rectangle spanning halfway to its neighbours. A legend names
/// every regime present on the map.
///
/// # Errors
///
/// - Shape mismatch between grid and category map
/// - Backend/file errors from plotters
pub fn plot_flow_map(
    grid: &VelocityGrid,
    category: &Array2<i8>,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if category.dim() != grid.shape() {
        return Err(format!(
            "Shape mismatch: {:?} categories versus {:?} grid",
            category.dim(),
            grid.shape()
        )
        .into());
    }

    let binding = PlotConfig::default();
    let config = config.unwrap_or(&binding);

    let u_gs_axis = grid.u_gs_axis().to_vec();
    let u_ls_axis = grid.u_ls_axis().to_vec();

    let x_min = u_gs_axis[0];
    let x_max = u_gs_axis[u_gs_axis.len() - 1];
    let y_min = u_ls_axis[0];
    let y_max = u_ls_axis[u_ls_axis.len() - 1];

    let root = BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 28))
        .margin(10)
        .x_label_area_size(48)
        .y_label_area_size(64)
        .build_cartesian_2d((x_min..x_max).log_scale(), (y_min..y_max).log_scale())?;

    chart
        .configure_mesh()
        .x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .draw()?;

    // Cell edges sit at the geometric midpoints between axis samples, so
    // the rectangles tile the map without gaps.
    let x_edges = edges(&u_gs_axis);
    let y_edges = edges(&u_ls_axis);

    let (rows, cols) = grid.shape();
    for row in 0..rows {
        for col in 0..cols {
            let color = config.color_for(category[[row, col]]);
            chart.draw_series(std::iter::once(Rectangle::new(
                [
                    (x_edges[col], y_edges[row]),
                    (x_edges[col + 1], y_edges[row + 1]),
                ],
                color.filled(),
            )))?;
        }
    }

    // Legend: one labelled dummy series per regime present on the map.
    for regime in FlowRegime::ALL {
        if !category.iter().any(|&cell| cell == regime.label()) {
            continue;
        }
        let color = config.color_for(regime.label());
        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(x_min, y_min), (x_min, y_min)],
                color.filled(),
            )))?
            .label(regime.name())
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 12, y + 6)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

/// Geometric cell edges around logarithmically spaced samples. The outer
/// edges extend by the same ratio as the inner spacing.
fn edges(axis: &[f64]) -> Vec<f64> {
    let n = axis.len();
    if n == 1 {
        return vec![axis[0] * 0.9, axis[0] * 1.1];
    }

    let mut edges = Vec::with_capacity(n + 1);
    edges.push(axis[0] * axis[0] / (axis[0] * axis[1]).sqrt());
    for i in 0..n - 1 {
        edges.push((axis[i] * axis[i + 1]).sqrt());
    }
    edges.push(axis[n - 1] * axis[n - 1] / (axis[n - 2] * axis[n - 1]).sqrt());
    edges
}

// =================================================================================================
// Tests
// =================================================================================================
