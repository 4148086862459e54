//! click-chart: responsive click-trend area chart engine.
//!
//! Samples flow through time and value scales into a backend-agnostic
//! `RenderFrame`: dashed gridlines, a gradient area under a monotone curve,
//! an interactive tooltip, and time/value axes. Hosts feed container widths
//! and pointer events; renderers (Cairo, GTK, or a test double) paint frames.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

#[cfg(feature = "gtk4-adapter")]
pub mod platform_gtk;

pub use api::{ChartConfig, ChartEngine, RenderStyle};
pub use error::{ChartError, ChartResult};
