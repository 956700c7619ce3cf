//! spc-chart
//!
//! Render statistical-process-control (SPC) line charts from grouped tabular
//! data. Computes control-limit bands under one of three conventions — G
//! (Poisson counts), I (individuals/moving range), T (range based) — and
//! draws the series, limit overlays, grid, and axis labels onto a fixed-size
//! raster surface.
//!
//! ### Features
//! - Three control-limit calculators with a zero-triple fallback for
//!   too-small samples
//! - Band + linear pixel scales and layered compositing with a fixed z-order
//! - Dataset JSON loading, PNG export, and CSV export of the computed series
//!
//! ### Example
//! ```no_run
//! use spc_chart::{ChartType, Surface, render};
//!
//! let dataset = spc_chart::storage::load_dataset("chart_data.json")?;
//! let mut surface = Surface::new();
//! render(&dataset, "NO_GROUP", ChartType::G, &mut surface)?;
//! spc_chart::storage::save_png(&surface, "chart.png")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod controller;
pub mod limits;
pub mod models;
pub mod render;
pub mod scale;
pub mod storage;

pub use controller::ChartController;
pub use limits::ControlLimits;
pub use models::{ChartError, ChartType, Dataset, Series};
pub use render::{RenderOutcome, Surface, render};
