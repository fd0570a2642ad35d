//! Renderer configuration.

use serde::{Deserialize, Serialize};

/// Lowest severity of renderer diagnostics that gets reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticLevel {
    /// Report everything, including informational messages.
    #[default]
    All,
    /// Suppress informational messages.
    Warning,
    /// Suppress everything short of a fatal problem.
    Fatal,
}

/// Severity of a single renderer diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Progress/informational.
    Info,
    /// Suspicious input that is still rendered.
    Warning,
    /// The artifact cannot be rendered.
    Fatal,
}

impl DiagnosticLevel {
    /// Whether a diagnostic of `severity` passes this level.
    pub fn admits(self, severity: Severity) -> bool {
        match self {
            DiagnosticLevel::All => true,
            DiagnosticLevel::Warning => severity >= Severity::Warning,
            DiagnosticLevel::Fatal => severity >= Severity::Fatal,
        }
    }
}

/// Where the statistics box goes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatsPosition {
    /// Upper right corner.
    #[default]
    Upper,
    /// Lower right corner.
    Lower,
}

/// Options passed to a [`Renderer`](crate::Renderer) with every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VizConfig {
    /// Diagnostic verbosity.
    pub diagnostics: DiagnosticLevel,
    /// Draw option string forwarded to the runtime (e.g. `"AP"`).
    pub draw_option: String,
    /// Statistics box placement.
    pub stats_position: StatsPosition,
    /// Legend box `(x1, y1, x2, y2)` in normalized coordinates; no legend if `None`.
    pub legend: Option<(f64, f64, f64, f64)>,
}

impl Default for VizConfig {
    fn default() -> Self {
        Self {
            diagnostics: DiagnosticLevel::All,
            draw_option: "AP".to_string(),
            stats_position: StatsPosition::Upper,
            legend: None,
        }
    }
}
