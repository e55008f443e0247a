//! CSV export functionality for classified flow-pattern maps
//!
//! This module writes the category grid to CSV (Comma-Separated Values)
//! format, compatible with Excel, Python pandas, MATLAB, and most data
//! analysis tools. Each row is one grid cell: the two superficial
//! velocities, the numeric category label and its name.
//!
//! # Quick Examples
//!
//! ## Minimal Export
//!
//! ```rust,ignore
//! use flowmap_rs::output::export::export_category_csv;
//!
//! export_category_csv(&grid, &classification.category, "map.csv", None)?;
//! ```
//!
//! **Output** (`map.csv`):
//! ```csv
//! u_gs (m/s),u_ls (m/s),category,regime
//! 0.010000,0.001000,1,stratified
//! 0.010000,0.001079,1,stratified
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use flowmap_rs::output::export::{export_category_csv, CsvConfig, CsvMetadata};
//!
//! let metadata = CsvMetadata {
//!     pipe_diameter: Some(0.051),
//!     inclination_degrees: Some(0.0),
//!     ..Default::default()
//! };
//! let config = CsvConfig::default().with_metadata(metadata);
//!
//! export_category_csv(&grid, &classification.category, "map.csv", Some(&config))?;
//! ```

use std::error::Error;
use std::fs::File;
use std::io::Write;

use ndarray::Array2;

use crate::grid::VelocityGrid;
use crate::regimes::FlowRegime;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
#[derive(Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Number of decimal places for the velocity columns (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// All fields are optional. Only non-None fields are included in the
/// header.
#[derive(Clone, Default)]
pub struct CsvMetadata {
    /// Pipe diameter (m)
    pub pipe_diameter: Option<f64>,

    /// Pipe inclination (degrees from horizontal)
    pub inclination_degrees: Option<f64>,

    /// Relative pipe roughness e/D (dimensionless)
    pub roughness: Option<f64>,

    /// Liquid density (kg/m³)
    pub liquid_density: Option<f64>,

    /// Gas density (kg/m³)
    pub gas_density: Option<f64>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

fn write_metadata_header(file: &mut File, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(file, "# Flow Pattern Map")?;

    let now = chrono::Utc::now();
    writeln!(file, "# Generated: {}", now.to_rfc3339())?;

    if let Some(diameter) = metadata.pipe_diameter {
        writeln!(file, "# Pipe Diameter: {} m", diameter)?;
    }
    if let Some(inclination) = metadata.inclination_degrees {
        writeln!(file, "# Inclination: {} deg", inclination)?;
    }
    if let Some(roughness) = metadata.roughness {
        writeln!(file, "# Relative Roughness: {}", roughness)?;
    }
    if let Some(rho_l) = metadata.liquid_density {
        writeln!(file, "# Liquid Density: {} kg/m3", rho_l)?;
    }
    if let Some(rho_g) = metadata.gas_density {
        writeln!(file, "# Gas Density: {} kg/m3", rho_g)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(file, "# {}: {}", key, value)?;
    }

    writeln!(file, "#")?;

    Ok(())
}

fn format_number(value: f64, config: &CsvConfig) -> String {
    format!("{:.prec$}", value, prec = config.precision)
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export the classified map to CSV, one row per grid cell.
///
/// # Arguments
///
/// * `grid` - The velocity grid the map was classified on
/// * `category` - Category labels from the composition
/// * `output_path` - Output file path
/// * `config` - Optional CSV configuration (uses default if None)
///
/// # Errors
///
/// - Shape mismatch between grid and category map
/// - File creation errors
pub fn export_category_csv(
    grid: &VelocityGrid,
    category: &Array2<i8>,
    output_path: &str,
    config: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    // ============================= Validation =============================

    if category.dim() != grid.shape() {
        return Err(format!(
            "Shape mismatch: {:?} categories versus {:?} grid",
            category.dim(),
            grid.shape()
        )
        .into());
    }

    // ============================= Configuration ==========================

    let binding = CsvConfig::default();
    let config = config.unwrap_or(&binding);

    // ============================= Open File ==============================

    let mut file = File::create(output_path)?;

    // ============================= Write Metadata =========================

    if config.include_metadata {
        if let Some(metadata) = &config.metadata {
            write_metadata_header(&mut file, metadata)?;
        }
    }

    // ============================= Write Header ===========================

    writeln!(
        file,
        "u_gs (m/s){}u_ls (m/s){}category{}regime",
        config.delimiter, config.delimiter, config.delimiter
    )?;

    // ============================= Write Data =============================

    let (rows, cols) = grid.shape();
    for row in 0..rows {
        for col in 0..cols {
            let label = category[[row, col]];
            let name = FlowRegime::from_label(label)
                .map(FlowRegime::name)
                .unwrap_or("unclassified");

            writeln!(
                file,
                "{}{}{}{}{}{}{}",
                format_number(grid.u_gs[[row, col]], config),
                config.delimiter,
                format_number(grid.u_ls[[row, col]], config),
                config.delimiter,
                label,
                config.delimiter,
                name
            )?;
        }
    }

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
