//! JSON has no NaN: `serde_json` writes a non-finite `f64` as `null`. The
//! helper here reads that `null` back as `NaN`, so transformed series and
//! trees survive a write/read cycle.

use serde::{Deserialize, Deserializer};

/// Deserialize an `f64`, reading `null` as `NaN`.
///
/// Use as `#[serde(deserialize_with = "rs_core::nan::f64_or_null")]`.
pub fn f64_or_null<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}
