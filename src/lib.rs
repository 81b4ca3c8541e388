//! chart-layout: geometry and animation core for bar, line and scatter charts.
//!
//! Data sets go in, backend-agnostic draw primitives and hit-test regions come
//! out. Rasterization, window lifecycle and input handling are left to the
//! host; this crate only decides where things go and how values ease in.

pub mod animation;
pub mod api;
pub mod core;
pub mod error;
pub mod model;
pub mod render;
pub mod style;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig};
pub use error::{ChartError, ChartResult};
