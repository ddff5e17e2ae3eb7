//! Metadata Normalizer — raw tag bag in, flat canonical mapping out.
//!
//! The extraction library nests related tags under group objects (`gps`,
//! `ifd0`, `exif`, `ifd1`) and mixes them with loose top-level tags. The
//! normalizer flattens all of that into one [`CanonicalMetadata`] mapping
//! with deterministic collision behavior, so the formatters and report
//! composers never have to know where a tag originally lived.
//!
//! Rules:
//!
//! - Bookkeeping keys (`errors`, `_raw`) are dropped.
//! - A GPS group with numeric `latitude`/`longitude` emits `GPSLatitude` /
//!   `GPSLongitude` as *numbers* — downstream GPS formatters re-parse them,
//!   so pre-formatting here would lose precision. Every other non-null GPS
//!   sub-key becomes `GPS<CapitalizedKey>` with a formatted scalar value.
//! - IFD/EXIF groups flatten each non-null key under its own name. Groups
//!   are processed in the fixed order ifd0 → exif → ifd1; when two groups
//!   carry the same tag the last one wins, every time.
//! - All other top-level non-null keys pass through scalar coercion.
//! - No input shape is an error. Unknown or null fields simply produce no
//!   canonical key.

use crate::value::{CanonicalMetadata, CanonicalValue, RawMetadata, format_value, number_field};
use serde_json::Value;

/// The nested groups the extraction contract can emit.
///
/// Dispatching on an enum (rather than scattering string comparisons)
/// keeps the per-group rules in one match and makes the flatten order
/// explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind {
    Gps,
    Ifd0,
    Exif,
    Ifd1,
}

impl GroupKind {
    /// Classify a raw top-level key, if it names a known group.
    pub fn from_key(key: &str) -> Option<GroupKind> {
        match key {
            "gps" => Some(GroupKind::Gps),
            "ifd0" => Some(GroupKind::Ifd0),
            "exif" => Some(GroupKind::Exif),
            "ifd1" => Some(GroupKind::Ifd1),
            _ => None,
        }
    }

    /// The raw top-level key this group lives under.
    pub fn key(self) -> &'static str {
        match self {
            GroupKind::Gps => "gps",
            GroupKind::Ifd0 => "ifd0",
            GroupKind::Exif => "exif",
            GroupKind::Ifd1 => "ifd1",
        }
    }
}

/// Extractor bookkeeping that must never reach the canonical mapping.
const DROPPED_KEYS: &[&str] = &["errors", "_raw"];

/// Fixed flatten order for IFD-style groups. Collisions between groups
/// resolve last-wins, so this order is part of the output contract.
const IFD_FLATTEN_ORDER: &[GroupKind] = &[GroupKind::Ifd0, GroupKind::Exif, GroupKind::Ifd1];

/// Flatten a raw tag mapping into the canonical form.
///
/// Total over all input shapes: never panics, never errors. Keys whose raw
/// value is null never appear in the output.
pub fn normalize(raw: &RawMetadata) -> CanonicalMetadata {
    let mut canonical = CanonicalMetadata::new();

    // Loose top-level tags first, so group tags override them on collision.
    for (key, value) in raw {
        if value.is_null() || DROPPED_KEYS.contains(&key.as_str()) {
            continue;
        }
        if GroupKind::from_key(key).is_some() && value.is_object() {
            continue;
        }
        canonical.insert(key.clone(), canonical_scalar(value));
    }

    for kind in IFD_FLATTEN_ORDER {
        if let Some(Value::Object(group)) = raw.get(kind.key()) {
            flatten_ifd(group, &mut canonical);
        }
    }

    if let Some(Value::Object(group)) = raw.get(GroupKind::Gps.key()) {
        flatten_gps(group, &mut canonical);
    }

    canonical
}

/// Coerce one raw scalar into its canonical form.
///
/// Strings and finite numbers keep their type (re-normalizing an
/// already-flat mapping must leave them unchanged); everything else goes
/// through the generic display coercion.
fn canonical_scalar(value: &Value) -> CanonicalValue {
    match value {
        Value::String(s) => CanonicalValue::Text(s.clone()),
        Value::Number(n) => match n.as_f64().filter(|n| n.is_finite()) {
            Some(n) => CanonicalValue::Number(n),
            None => CanonicalValue::Text(n.to_string()),
        },
        other => CanonicalValue::Text(format_value(other)),
    }
}

fn flatten_ifd(group: &RawMetadata, canonical: &mut CanonicalMetadata) {
    for (key, value) in group {
        if !value.is_null() {
            canonical.insert(key.clone(), canonical_scalar(value));
        }
    }
}

fn flatten_gps(group: &RawMetadata, canonical: &mut CanonicalMetadata) {
    let coordinates = (
        number_field(group, "latitude"),
        number_field(group, "longitude"),
    );
    if let (Some(lat), Some(lon)) = coordinates {
        canonical.insert("GPSLatitude".into(), CanonicalValue::Number(lat));
        canonical.insert("GPSLongitude".into(), CanonicalValue::Number(lon));
    }

    for (key, value) in group {
        if key == "latitude" || key == "longitude" || value.is_null() {
            continue;
        }
        let name = format!("GPS{}", capitalize(key));
        canonical.insert(name, CanonicalValue::Text(format_value(value)));
    }
}

/// Uppercase the first character, leave the rest alone.
fn capitalize(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
