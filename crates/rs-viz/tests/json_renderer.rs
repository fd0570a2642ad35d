//! Integration tests: handing artifacts to the JSON renderer.

use approx::assert_relative_eq;
use rs_graph::{ErrorPoint, GraphErrors, MarkerStyle};
use rs_viz::{DiagnosticLevel, JsonRenderer, PlotArtifact, Renderer, VizConfig};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn tmp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("rsupport_viz_{}_{}_{}.json", std::process::id(), nanos, name));
    p
}

fn resonance() -> GraphErrors {
    GraphErrors::create(0, Some("res"), None, Some("f [Hz]"), Some("A [V]"), MarkerStyle::default())
        .unwrap()
        .with_points(
            (1..=8)
                .map(|i| {
                    let f = f64::from(i);
                    ErrorPoint::new(f, 1.0 / (1.0 + (f - 4.0).powi(2)), 0.05, 0.01)
                })
                .collect(),
        )
}

#[test]
fn writes_request_with_config_and_artifact() {
    let g = resonance().coarse_grain(2).unwrap();
    let artifact = PlotArtifact::from(&g);
    let out = tmp_path("request");

    let cfg = VizConfig { diagnostics: DiagnosticLevel::Warning, ..VizConfig::default() };
    let mut renderer = JsonRenderer::new(cfg);
    renderer.render(&artifact, &out).unwrap();
    assert_eq!(renderer.rendered(), 1);

    let text = std::fs::read_to_string(&out).unwrap();
    let _ = std::fs::remove_file(&out);
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(v["config"]["diagnostics"], "warning");
    assert_eq!(v["config"]["draw_option"], "AP");

    let back: PlotArtifact = serde_json::from_value(v["artifact"].clone()).unwrap();
    assert_eq!(back.series[0].x.len(), 4);
    assert_relative_eq!(back.series[0].x[0], 1.5);
    assert_eq!(back.x_title, "f [Hz]");
}

#[test]
fn empty_plot_is_rejected() {
    let empty = rs_graph::MultiSeries::<ErrorPoint>::new("nothing", "");
    let artifact = PlotArtifact::from(&empty);
    let out = tmp_path("empty");
    let mut renderer = JsonRenderer::default();
    assert!(renderer.render(&artifact, &out).is_err());
    assert!(!out.exists());
    assert_eq!(renderer.rendered(), 0);
}
