//! Canonical values and generic scalar coercion.
//!
//! The extraction library hands us a loosely structured JSON bag: strings,
//! numbers, arrays, nested group objects, the occasional `{latitude,
//! longitude}` pair. This module owns the two value types that cross the
//! pipeline boundary:
//!
//! - [`RawMetadata`] — the extractor's output, read-only, shape dictated by
//!   that dependency's versioned contract.
//! - [`CanonicalValue`] — a display-ready scalar stored in the flat
//!   canonical mapping produced by [`crate::normalize::normalize`].
//!
//! Canonical values stay typed (numbers remain numbers) so field formatters
//! downstream can recover physical quantities — GPS coordinates and
//! log-encoded exposure values in particular must not be stringified before
//! the formatter sees them.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// The raw tag mapping as produced by the metadata-extraction dependency.
///
/// Keys are library-defined tag names; values may be scalars, arrays, or
/// nested group objects (`gps`, `ifd0`, `exif`, `ifd1`). Not owned by this
/// crate — treat as an external contract.
pub type RawMetadata = serde_json::Map<String, Value>;

/// Flat mapping from canonical field name to display-ready value.
///
/// Built once per request by the normalizer and discarded afterwards.
/// Invariant: every key present came from a non-null raw value.
pub type CanonicalMetadata = BTreeMap<String, CanonicalValue>;

/// A display-ready scalar in the canonical mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CanonicalValue {
    Text(String),
    Number(f64),
    GeoLink(GeoLink),
}

/// A GPS coordinate pair rendered as display text plus a map link.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoLink {
    /// Rounded display form, e.g. `"37.42200, -122.08400"`.
    pub text: String,
    /// Map URL built from the full-precision coordinates.
    pub url: String,
}

impl CanonicalValue {
    /// Numeric view of this value, parsing numeric text if needed.
    ///
    /// NaN and infinities are treated as absent — they only arise from
    /// malformed input and no formatter can render them.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CanonicalValue::Number(n) => Some(*n).filter(|n| n.is_finite()),
            CanonicalValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            CanonicalValue::GeoLink(_) => None,
        }
    }

    /// Text view of this value, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CanonicalValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CanonicalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanonicalValue::Text(s) => f.write_str(s),
            CanonicalValue::Number(n) => write!(f, "{n}"),
            CanonicalValue::GeoLink(geo) => f.write_str(&geo.text),
        }
    }
}

/// Generic scalar coercion for any field without a specialized formatter.
///
/// - strings pass through unchanged (this covers extractor-formatted dates,
///   which field-specific date formatters re-parse downstream)
/// - numbers render in decimal form
/// - arrays render as comma-joined elements
/// - an object carrying `latitude`/`longitude` renders as a 6-decimal pair
/// - any other object renders as its JSON text
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(items) => items
            .iter()
            .map(format_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(map) => match (number_field(map, "latitude"), number_field(map, "longitude")) {
            (Some(lat), Some(lon)) => format!("{lat:.6}, {lon:.6}"),
            _ => value.to_string(),
        },
        Value::Null => String::new(),
    }
}

/// Read a named numeric field out of a JSON object.
pub(crate) fn number_field(map: &serde_json::Map<String, Value>, key: &str) -> Option<f64> {
    map.get(key).and_then(Value::as_f64).filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // =========================================================================
    // format_value() tests
    // =========================================================================

    #[test]
    fn string_passes_through() {
        assert_eq!(format_value(&json!("Canon EOS R5")), "Canon EOS R5");
    }

    #[test]
    fn number_renders_decimal() {
        assert_eq!(format_value(&json!(400)), "400");
        assert_eq!(format_value(&json!(2.8)), "2.8");
    }

    #[test]
    fn array_joins_with_commas() {
        assert_eq!(format_value(&json!([100, 200])), "100, 200");
        assert_eq!(format_value(&json!(["a", "b", "c"])), "a, b, c");
    }

    #[test]
    fn coordinate_object_renders_six_decimals() {
        let value = json!({"latitude": 37.422, "longitude": -122.084});
        assert_eq!(format_value(&value), "37.422000, -122.084000");
    }

    #[test]
    fn other_object_renders_as_json() {
        let value = json!({"fired": true, "mode": "on"});
        let rendered = format_value(&value);
        assert!(rendered.contains("\"fired\":true"));
    }

    #[test]
    fn partial_coordinate_object_falls_back_to_json() {
        // latitude without longitude is not a coordinate pair
        let value = json!({"latitude": 37.422});
        assert!(format_value(&value).contains("latitude"));
    }

    // =========================================================================
    // CanonicalValue tests
    // =========================================================================

    #[test]
    fn as_f64_parses_numeric_text() {
        assert_eq!(CanonicalValue::Text("2.8".into()).as_f64(), Some(2.8));
        assert_eq!(CanonicalValue::Text(" 400 ".into()).as_f64(), Some(400.0));
        assert_eq!(CanonicalValue::Text("n/a".into()).as_f64(), None);
    }

    #[test]
    fn as_f64_rejects_non_finite() {
        assert_eq!(CanonicalValue::Number(f64::NAN).as_f64(), None);
        assert_eq!(CanonicalValue::Number(f64::INFINITY).as_f64(), None);
    }

    #[test]
    fn display_renders_geolink_text() {
        let value = CanonicalValue::GeoLink(GeoLink {
            text: "37.42200, -122.08400".into(),
            url: "https://www.google.com/maps?q=37.422,-122.084".into(),
        });
        assert_eq!(value.to_string(), "37.42200, -122.08400");
    }

    #[test]
    fn display_renders_whole_numbers_without_fraction() {
        assert_eq!(CanonicalValue::Number(400.0).to_string(), "400");
        assert_eq!(CanonicalValue::Number(1.8).to_string(), "1.8");
    }
}
