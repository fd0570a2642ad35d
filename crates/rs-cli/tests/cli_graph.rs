use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_rsupport"))
}

fn tmp_path(name: &str) -> PathBuf {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("rsupport_cli_{}_{}_{}.json", std::process::id(), nanos, name));
    p
}

fn run(args: &[&str]) -> Output {
    Command::new(bin_path())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to run {:?} {:?}: {}", bin_path(), args, e))
}

fn write_fixture(name: &str, value: serde_json::Value) -> PathBuf {
    let p = tmp_path(name);
    std::fs::write(&p, serde_json::to_string(&value).unwrap()).unwrap();
    p
}

fn stdout_json(out: &Output) -> serde_json::Value {
    assert!(
        out.status.success(),
        "command failed, stderr={}",
        String::from_utf8_lossy(&out.stderr)
    );
    serde_json::from_slice(&out.stdout).expect("stdout should be valid JSON")
}

fn plain_series(name: &str, xs: &[f64], ys: &[f64]) -> serde_json::Value {
    let points: Vec<_> =
        xs.iter().zip(ys).map(|(x, y)| serde_json::json!({"x": x, "y": y})).collect();
    serde_json::json!({
        "name": name, "title": name, "x_title": "t [s]", "y_title": "v", "points": points
    })
}

fn error_series(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name, "title": name, "x_title": "f", "y_title": "A",
        "points": [
            {"x": 1.0, "y": 2.0, "ex": 0.1, "ey": 0.3},
            {"x": 2.0, "y": 4.0, "ex": 0.1, "ey": 0.3},
            {"x": 3.0, "y": 6.0, "ex": 0.1, "ey": 0.5},
            {"x": 4.0, "y": 8.0, "ex": 0.1, "ey": 0.5}
        ]
    })
}

fn column(v: &serde_json::Value, key: &str) -> Vec<f64> {
    v["points"].as_array().unwrap().iter().map(|p| p[key].as_f64().unwrap()).collect()
}

#[test]
fn sort_orders_points_by_x() {
    let input = write_fixture("sort", plain_series("g", &[3.0, 1.0, 2.0], &[30.0, 10.0, 20.0]));
    let v = stdout_json(&run(&["graph", "sort", "--input", input.to_str().unwrap()]));
    let _ = std::fs::remove_file(&input);
    assert_eq!(column(&v, "x"), vec![1.0, 2.0, 3.0]);
    assert_eq!(column(&v, "y"), vec![10.0, 20.0, 30.0]);
}

#[test]
fn invert_x_rejects_non_positive_x() {
    let input = write_fixture("invert_bad", plain_series("g", &[0.0, 1.0], &[1.0, 1.0]));
    let out = run(&["graph", "invert-x", "--input", input.to_str().unwrap()]);
    let _ = std::fs::remove_file(&input);
    assert!(!out.status.success(), "invert-x with x=0 should fail");
}

#[test]
fn coarse_grain_with_errors_writes_output_file() {
    let input = write_fixture("coarse_in", error_series("res"));
    let output = tmp_path("coarse_out");
    let out = run(&[
        "graph",
        "coarse-grain",
        "--step",
        "2",
        "--input",
        input.to_str().unwrap(),
        "--output",
        output.to_str().unwrap(),
    ]);
    assert!(out.status.success(), "stderr={}", String::from_utf8_lossy(&out.stderr));

    let text = std::fs::read_to_string(&output).unwrap();
    let _ = std::fs::remove_file(&input);
    let _ = std::fs::remove_file(&output);
    let v: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(column(&v, "x"), vec![1.5, 3.5]);
    assert_eq!(column(&v, "y"), vec![3.0, 7.0]);
    // sqrt((0.3^2 + 0.3^2) / 2 / 1)
    assert!((column(&v, "ey")[0] - 0.3).abs() < 1e-12);
}

#[test]
fn coarse_grain_rejects_zero_step() {
    let input = write_fixture("coarse_zero", plain_series("g", &[1.0, 2.0], &[1.0, 2.0]));
    let out = run(&["graph", "coarse-grain", "--step", "0", "--input", input.to_str().unwrap()]);
    let _ = std::fs::remove_file(&input);
    assert!(!out.status.success());
}

#[test]
fn push_appends_other_series() {
    let a = write_fixture("push_a", plain_series("a", &[1.0, 2.0], &[1.0, 2.0]));
    let b = write_fixture("push_b", plain_series("b", &[3.0], &[3.0]));
    let v = stdout_json(&run(&[
        "graph",
        "push",
        "--other",
        b.to_str().unwrap(),
        "--input",
        a.to_str().unwrap(),
    ]));
    let _ = std::fs::remove_file(&a);
    let _ = std::fs::remove_file(&b);
    assert_eq!(v["name"], "a");
    assert_eq!(column(&v, "x"), vec![1.0, 2.0, 3.0]);
}

#[test]
fn push_rejects_mixed_kinds() {
    let a = write_fixture("mixed_a", plain_series("a", &[1.0], &[1.0]));
    let b = write_fixture("mixed_b", error_series("b"));
    let out = run(&[
        "graph",
        "push",
        "--other",
        b.to_str().unwrap(),
        "--input",
        a.to_str().unwrap(),
    ]);
    let _ = std::fs::remove_file(&a);
    let _ = std::fs::remove_file(&b);
    assert!(!out.status.success());
}

#[test]
fn error_y_extracts_errors() {
    let input = write_fixture("error_y", error_series("res"));
    let v = stdout_json(&run(&["graph", "error-y", "--input", input.to_str().unwrap()]));
    let _ = std::fs::remove_file(&input);
    assert_eq!(v["name"], "res_ey");
    assert_eq!(v["y_title"], "A error");
    assert_eq!(column(&v, "y"), vec![0.3, 0.3, 0.5, 0.5]);
}

#[test]
fn error_y_requires_errors() {
    let input = write_fixture("error_y_plain", plain_series("g", &[1.0], &[1.0]));
    let out = run(&["graph", "error-y", "--input", input.to_str().unwrap()]);
    let _ = std::fs::remove_file(&input);
    assert!(!out.status.success());
}
