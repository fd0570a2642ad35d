//! The narrow interface to the visualization runtime.

use std::path::Path;

use rs_core::{Error, Result};
use serde::Serialize;

use crate::artifact::PlotArtifact;
use crate::config::{Severity, VizConfig};

/// Accepts a renderable artifact and an output target.
///
/// Drawing, styling and file formats are entirely the implementor's business.
pub trait Renderer {
    /// Render `artifact` to `target`.
    fn render(&mut self, artifact: &PlotArtifact, target: &Path) -> Result<()>;
}

/// Emit a diagnostic through `log` if `config` admits its severity.
pub fn diagnose(config: &VizConfig, severity: Severity, message: &str) {
    if !config.diagnostics.admits(severity) {
        return;
    }
    match severity {
        Severity::Info => log::info!("{message}"),
        Severity::Warning => log::warn!("{message}"),
        Severity::Fatal => log::error!("{message}"),
    }
}

#[derive(Serialize)]
struct RenderRequest<'a> {
    config: &'a VizConfig,
    artifact: &'a PlotArtifact,
}

/// Renderer that hands the artifact and its options to an external runtime as
/// a pretty-printed JSON document.
#[derive(Debug, Clone, Default)]
pub struct JsonRenderer {
    config: VizConfig,
    rendered: usize,
}

impl JsonRenderer {
    /// Renderer with the given options.
    pub fn new(config: VizConfig) -> Self {
        Self { config, rendered: 0 }
    }

    /// Options in use.
    pub fn config(&self) -> &VizConfig {
        &self.config
    }

    /// Number of artifacts written so far.
    pub fn rendered(&self) -> usize {
        self.rendered
    }
}

impl Renderer for JsonRenderer {
    fn render(&mut self, artifact: &PlotArtifact, target: &Path) -> Result<()> {
        if artifact.series.is_empty() {
            let message = format!("nothing to draw in '{}'", artifact.name);
            diagnose(&self.config, Severity::Fatal, &message);
            return Err(Error::InvalidArgument(format!("No series in plot : {}", artifact.name)));
        }
        for s in &artifact.series {
            let bad = s.non_finite_points();
            if bad > 0 {
                diagnose(
                    &self.config,
                    Severity::Warning,
                    &format!(
                        "series '{}' has {bad} non-finite points; they will not be drawn",
                        s.name
                    ),
                );
            }
        }

        let request = RenderRequest { config: &self.config, artifact };
        std::fs::write(target, serde_json::to_string_pretty(&request)?)?;
        self.rendered += 1;
        diagnose(&self.config, Severity::Info, &format!("wrote {}", target.display()));
        Ok(())
    }
}
