//! # rs-viz
//!
//! Plot artifacts for rsupport and the renderer interface that hands them to
//! an external visualization runtime.
//!
//! Artifacts are plot-friendly JSON structures (parallel arrays instead of
//! nested point objects). Renderer verbosity is explicit configuration
//! ([`VizConfig`]), never process-wide state.

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Serializable plot artifacts built from series.
pub mod artifact;

/// Renderer options and diagnostic levels.
pub mod config;

/// Renderer trait and the JSON hand-off implementation.
pub mod render;

pub use artifact::{PLOT_SCHEMA_VERSION, PlotArtifact, SeriesArtifact};
pub use config::{DiagnosticLevel, Severity, StatsPosition, VizConfig};
pub use render::{JsonRenderer, Renderer, diagnose};
