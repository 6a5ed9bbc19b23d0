//! radial-rs: declarative radial chart component core.
//!
//! This crate provides the component and data-item type system behind a
//! pie-family charting library: a constructor registry for name-driven
//! instantiation, a theming/defaults lifecycle, and per-chart data-item
//! ownership. Slice geometry and drawing backends live in lower layers and
//! are intentionally absent here.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartContext, ComponentRegistry, PieChart, Sunburst};
pub use error::{ChartError, ChartResult};
