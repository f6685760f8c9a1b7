//! gantt-rs: headless timeline ("Gantt") chart engine.
//!
//! The crate owns the geometry (time and lane scales), the sublane packer,
//! the retained item scene and the pointer-driven drag/resize/zoom state
//! machine. Drawing is delegated to a [`render::Renderer`] implementation
//! supplied by the host, which receives fully materialized frames.
//!
//! All work happens synchronously on the caller's thread inside the public
//! call that triggered it; the engine never spawns or blocks.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{GanttChart, GanttChartConfig};
pub use error::{GanttError, GanttResult};
