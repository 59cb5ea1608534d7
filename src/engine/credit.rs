//! Credit metadata for course entries
//!
//! Catalog entries carry credits as a `{ "Min": n, "Max": n }` object under
//! `Credit`/`credit`, or under some other key containing "credit". Anything
//! else falls back to the configured default.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Inclusive credit range for one course.
///
/// Bounds are JSON numbers, so fractional credits (a 0.5 credit lab) are
/// representable. Both bounds are always finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditRange {
    pub min: f64,
    pub max: f64,
}

impl Eq for CreditRange {}

impl CreditRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Parse a `{ "Min": n, "Max": n }` object. Returns `None` for any other
    /// shape, including non-numeric bounds and inverted ranges.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        let min = object.get("Min")?.as_f64()?;
        let max = object.get("Max")?.as_f64()?;
        Self::new(min, max).validated()
    }

    /// `Some(self)` if both bounds are finite and `min <= max`
    pub fn validated(self) -> Option<Self> {
        (self.min.is_finite() && self.max.is_finite() && self.min <= self.max).then_some(self)
    }
}

impl Default for CreditRange {
    fn default() -> Self {
        Self { min: 3.0, max: 3.0 }
    }
}

/// Whole numbers print without a fraction: `3.0` shows as "3"
fn write_bound(f: &mut fmt::Formatter<'_>, bound: f64) -> fmt::Result {
    if bound.fract() == 0.0 && bound.abs() < 1e15 {
        write!(f, "{}", bound as i64)
    } else {
        write!(f, "{}", bound)
    }
}

impl fmt::Display for CreditRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_bound(f, self.min)?;
        if self.min != self.max {
            write!(f, "-")?;
            write_bound(f, self.max)?;
        }
        Ok(())
    }
}

/// Where a row's credit range came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CreditSource {
    /// `Credit` or `credit` field
    Explicit,
    /// First other field whose name contains "credit"
    Inferred { key: String },
    /// No usable field; the configured default applies
    Default,
}

/// Credit range as declared on a catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredCredit {
    pub range: CreditRange,
    pub source: CreditSource,
}

const EXPLICIT_KEYS: [&str; 2] = ["Credit", "credit"];

/// Find the credit range declared by an entry's fields.
///
/// `Credit` then `credit` are tried first. Otherwise the first key in
/// document order whose lowercase form contains "credit" and whose value is a
/// well-formed range is used.
pub fn find_declared_credit(fields: &Map<String, Value>) -> Option<DeclaredCredit> {
    for key in EXPLICIT_KEYS {
        if let Some(range) = fields.get(key).and_then(CreditRange::from_value) {
            return Some(DeclaredCredit {
                range,
                source: CreditSource::Explicit,
            });
        }
    }

    fields
        .iter()
        .filter(|(key, _)| !EXPLICIT_KEYS.contains(&key.as_str()))
        .filter(|(key, _)| key.to_lowercase().contains("credit"))
        .find_map(|(key, value)| {
            CreditRange::from_value(value).map(|range| DeclaredCredit {
                range,
                source: CreditSource::Inferred { key: key.clone() },
            })
        })
}

/// Pick the range to display for an entry
pub fn resolve_credit(
    declared: Option<&DeclaredCredit>,
    default: CreditRange,
) -> (CreditRange, CreditSource) {
    match declared {
        Some(declared) => (declared.range, declared.source.clone()),
        None => (default, CreditSource::Default),
    }
}
