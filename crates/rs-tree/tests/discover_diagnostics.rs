//! Integration tests: diagnostics emitted while discovering a schema.

use std::sync::Mutex;

use rs_core::Scalar;
use rs_tree::{ColumnStore, LeafType, MemTree};

struct Capture {
    records: Mutex<Vec<(log::Level, String)>>,
}

impl log::Log for Capture {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::Level::Warn
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata())
            && let Ok(mut records) = self.records.lock()
        {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture { records: Mutex::new(Vec::new()) };

fn warnings() -> Vec<String> {
    // Only one test in this binary installs the logger; a second install is a no-op.
    let _ = log::set_logger(&CAPTURE);
    log::set_max_level(log::LevelFilter::Warn);
    CAPTURE
        .records
        .lock()
        .unwrap()
        .iter()
        .filter(|(level, _)| *level == log::Level::Warn)
        .map(|(_, msg)| msg.clone())
        .collect()
}

#[test]
fn skipped_columns_are_reported_with_their_type() {
    let _ = warnings();
    let tree = MemTree::new("events")
        .with_column("pt", LeafType::F64, vec![Scalar::Double(1.0)])
        .unwrap()
        .with_column("eta", LeafType::F32, vec![Scalar::Double(0.5)])
        .unwrap()
        .with_column("nhit", LeafType::U32, vec![Scalar::Int(7)])
        .unwrap();

    let store = ColumnStore::discover(tree);
    assert_eq!(store.column_names(), vec!["pt"]);

    let warned = warnings();
    assert!(warned.iter().any(|m| m.contains("eta") && m.contains("f32")), "{warned:?}");
    assert!(warned.iter().any(|m| m.contains("nhit") && m.contains("u32")), "{warned:?}");
    assert!(!warned.iter().any(|m| m.contains("pt ")), "{warned:?}");
}
