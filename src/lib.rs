//! boxoffice-charts: aggregation and scale-mapping core for movie charts.
//!
//! `core` holds the renderer-agnostic pieces (grouped sums, domains, linear,
//! band and temporal scales). `api` wires them into the bar, line and scatter
//! chart pipelines and produces plot-area geometry for an external renderer.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartConfig, ChartSession};
pub use error::{ChartError, ChartResult};
