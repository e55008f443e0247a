//! Output module for classified flow-pattern maps
//!
//! This module provides tools to get a classified map out of the process:
//! - **Visualization**: PNG flow-pattern maps using plotters
//! - **Export**: CSV data export for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization.rs    ← Categorical map rendering
//! └── export.rs           ← Data export
//! ```
//!
//! # Quick Start
//!
//! ## Visualization
//!
//! ```rust,ignore
//! use flowmap_rs::output::{plot_flow_map, PlotConfig};
//!
//! plot_flow_map(&grid, &classification.category, "map.png", None)?;
//! ```
//!
//! ## CSV Export
//!
//! ```rust,ignore
//! use flowmap_rs::output::{export_category_csv, CsvConfig};
//!
//! export_category_csv(&grid, &classification.category, "map.csv", None)?;
//! ```
//!
//! # Design Philosophy
//!
//! The output module separates concerns:
//! - **Visualization**: For human interpretation (the classic log-log map)
//! - **Export**: For programmatic analysis (one row per grid cell)
//!
//! Both sub-modules read the plain `Array2` grids; nothing here feeds back
//! into the classification.

pub mod export;
pub mod visualization;

pub use export::{export_category_csv, CsvConfig, CsvMetadata};
pub use visualization::{plot_flow_map, PlotConfig};
