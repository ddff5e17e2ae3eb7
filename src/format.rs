//! Field-specific formatters: raw canonical values in, display strings out.
//!
//! Every formatter is total — absent or malformed input yields `None` (or a
//! verbatim passthrough for fields where showing raw text beats showing
//! nothing), never a panic. Formatters come in two layers:
//!
//! - value-level functions that turn one [`CanonicalValue`] into display
//!   text (aperture recovery, lookup tables, timestamp rendering);
//! - mapping-level selectors that know which canonical field names feed a
//!   semantic field, including fallback chains (ISO lives under half a
//!   dozen names depending on the camera vendor).
//!
//! Numeric EXIF quirk worth knowing: some exposure tags are stored as a
//! base-2 logarithm of the physical quantity. `ApertureValue` in (0, 1)
//! and any negative `ShutterSpeedValue` are recovered exponentially before
//! display; plain `FNumber`/`ExposureTime` are used as-is.

use crate::value::{CanonicalMetadata, CanonicalValue, GeoLink};
use chrono::{DateTime, NaiveDateTime};
use serde_json::Value;

// =============================================================================
// Lookup tables
// =============================================================================

/// EXIF ExposureProgram tag values.
const EXPOSURE_PROGRAMS: &[(u32, &str)] = &[
    (0, "Not defined"),
    (1, "Manual"),
    (2, "Program"),
    (3, "Aperture priority"),
    (4, "Shutter priority"),
    (5, "Creative program"),
    (6, "Action program"),
    (7, "Portrait"),
    (8, "Landscape"),
    (9, "Bulb"),
];

/// EXIF MeteringMode tag values.
const METERING_MODES: &[(u32, &str)] = &[
    (0, "Unknown"),
    (1, "Average"),
    (2, "Center-weighted average"),
    (3, "Spot"),
    (4, "Multi-spot"),
    (5, "Pattern"),
    (6, "Partial"),
    (255, "Other"),
];

/// Field names that can carry the ISO rating, in lookup order.
const ISO_FIELDS: &[&str] = &[
    "ISO",
    "ISOSpeedRatings",
    "PhotographicSensitivity",
    "ISOSpeed",
    "RecommendedExposureIndex",
    "StandardOutputSensitivity",
];

/// Capture-time fields, most specific first.
const TIMESTAMP_FIELDS: &[&str] = &["DateTimeOriginal", "CreateDate", "DateTime", "ModifyDate"];

const WIDTH_FIELDS: &[&str] = &["ExifImageWidth", "ImageWidth", "PixelXDimension"];
const HEIGHT_FIELDS: &[&str] = &["ExifImageHeight", "ImageHeight", "PixelYDimension"];

fn lookup(table: &'static [(u32, &'static str)], code: u32) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == code).map(|(_, v)| *v)
}

/// First present field from a fallback chain.
fn field<'a>(meta: &'a CanonicalMetadata, names: &[&str]) -> Option<&'a CanonicalValue> {
    names.iter().find_map(|name| meta.get(*name))
}

// =============================================================================
// Value-level formatters
// =============================================================================

/// Render an f-number, recovering `ApertureValue`-style log encoding.
///
/// Values in (0, 1) store log2 of the f-number; anything else is the
/// f-number itself. Non-numeric text passes through verbatim.
pub fn format_aperture(value: &CanonicalValue) -> Option<String> {
    let Some(n) = value.as_f64() else {
        return value.as_str().map(str::to_string);
    };
    if n <= 0.0 {
        return None;
    }
    let f_number = if n < 1.0 { 2f64.powf(n) } else { n };
    Some(format!("f/{f_number:.1}"))
}

/// Render an exposure time, recovering `ShutterSpeedValue`-style encoding.
///
/// Negative input is log2 of the reciprocal exposure time (`-3` means 8
/// seconds). Times of a second or more render as `{:.1}s`, shorter times
/// as the familiar `1/{denominator}` form.
pub fn format_shutter_speed(value: &CanonicalValue) -> Option<String> {
    let Some(n) = value.as_f64() else {
        return value.as_str().map(str::to_string);
    };
    let seconds = if n < 0.0 { 2f64.powf(-n) } else { n };
    if seconds <= 0.0 {
        return None;
    }
    if seconds >= 1.0 {
        Some(format!("{seconds:.1}s"))
    } else {
        Some(format!("1/{}", (1.0 / seconds).round() as i64))
    }
}

/// Render a focal length rounded to whole millimeters.
pub fn format_focal_length(value: &CanonicalValue) -> Option<String> {
    match value.as_f64() {
        Some(n) if n > 0.0 => Some(format!("{}mm", n.round() as i64)),
        Some(_) => None,
        None => value.as_str().map(str::to_string),
    }
}

/// Render exposure compensation as signed EV, e.g. `+0.3 EV` / `-1.0 EV`.
pub fn format_exposure_compensation(value: &CanonicalValue) -> Option<String> {
    value.as_f64().map(|ev| format!("{ev:+.1} EV"))
}

/// Name an ExposureProgram code; unknown codes stringify as-is.
pub fn format_exposure_program(value: &CanonicalValue) -> Option<String> {
    format_coded(value, EXPOSURE_PROGRAMS)
}

/// Name a MeteringMode code; unknown codes stringify as-is.
pub fn format_metering_mode(value: &CanonicalValue) -> Option<String> {
    format_coded(value, METERING_MODES)
}

fn format_coded(value: &CanonicalValue, table: &'static [(u32, &'static str)]) -> Option<String> {
    match value.as_f64() {
        Some(n) if n >= 0.0 && n.fract() == 0.0 => Some(
            lookup(table, n as u32)
                .map(str::to_string)
                .unwrap_or_else(|| CanonicalValue::Number(n).to_string()),
        ),
        Some(n) => Some(CanonicalValue::Number(n).to_string()),
        None => value.as_str().map(str::to_string),
    }
}

/// White balance: extractor-provided text passes through, numeric 0 is
/// Auto, anything else Manual.
pub fn format_white_balance(value: &CanonicalValue) -> Option<String> {
    match value {
        CanonicalValue::Text(s) if s.parse::<f64>().is_err() => Some(s.clone()),
        _ => value
            .as_f64()
            .map(|n| if n == 0.0 { "Auto" } else { "Manual" }.to_string()),
    }
}

/// Flash state.
///
/// Extractors emit three shapes: a structured `{fired, mode}` object
/// (which the normalizer stored as JSON text), a bare numeric flag, or
/// pre-translated text. All three are handled; text falls through
/// verbatim.
pub fn format_flash(value: &CanonicalValue) -> Option<String> {
    if let Some(n) = value.as_f64() {
        return Some(if n == 0.0 { "Not fired" } else { "Fired" }.to_string());
    }
    let text = value.as_str()?;
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text) {
        if let Some(fired) = map.get("fired").and_then(Value::as_bool) {
            let state = if fired { "Fired" } else { "Not fired" };
            return Some(match map.get("mode").and_then(Value::as_str) {
                Some(mode) => format!("{state} ({mode})"),
                None => state.to_string(),
            });
        }
    }
    Some(text.to_string())
}

/// Image stabilization: `"on"`/`"1"` text or numeric 1 means On.
pub fn format_stabilization(value: &CanonicalValue) -> Option<String> {
    let on = match value {
        CanonicalValue::Text(s) => s.eq_ignore_ascii_case("on") || s.trim() == "1",
        CanonicalValue::Number(n) => *n == 1.0,
        CanonicalValue::GeoLink(_) => return None,
    };
    Some(if on { "On" } else { "Off" }.to_string())
}

/// HDR flag: codes 1–3 (vendor variants of "HDR was applied") mean On.
pub fn format_hdr(value: &CanonicalValue) -> Option<String> {
    let on = match value {
        CanonicalValue::Text(s) => {
            s.eq_ignore_ascii_case("on") || matches!(s.trim(), "1" | "2" | "3")
        }
        CanonicalValue::Number(n) => matches!(*n as i64, 1..=3) && n.fract() == 0.0,
        CanonicalValue::GeoLink(_) => return None,
    };
    Some(if on { "On" } else { "Off" }.to_string())
}

// =============================================================================
// Timestamps
// =============================================================================

/// Parse the timestamp shapes extractors emit.
///
/// EXIF proper uses colon-separated dates (`2024:03:14 15:09:26`); some
/// extractors revive them into RFC 3339 text instead.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    const FORMATS: &[&str] = &[
        "%Y:%m:%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

fn render_timestamp(value: &CanonicalValue, fmt: &str) -> Option<String> {
    match value {
        // Unparseable text is returned verbatim, never dropped.
        CanonicalValue::Text(s) => Some(match parse_timestamp(s) {
            Some(dt) => dt.format(fmt).to_string(),
            None => s.clone(),
        }),
        CanonicalValue::Number(_) => Some(value.to_string()),
        CanonicalValue::GeoLink(_) => None,
    }
}

/// Short summary form: `DD.MM.YYYY HH:MM`.
pub fn format_timestamp_short(value: &CanonicalValue) -> Option<String> {
    render_timestamp(value, "%d.%m.%Y %H:%M")
}

/// Detailed-report form: `YYYY-MM-DD HH:MM:SS`.
pub fn format_timestamp_full(value: &CanonicalValue) -> Option<String> {
    render_timestamp(value, "%Y-%m-%d %H:%M:%S")
}

/// Caption form: `YYYY-MM-DD HH:MM`.
pub fn format_timestamp_compact(value: &CanonicalValue) -> Option<String> {
    render_timestamp(value, "%Y-%m-%d %H:%M")
}

// =============================================================================
// Mapping-level selectors
// =============================================================================

/// Camera display name from make and model.
///
/// Many vendors repeat the make inside the model tag ("Canon" / "Canon
/// EOS R5"); in that case the model alone is the full name.
pub fn camera_name(meta: &CanonicalMetadata) -> Option<String> {
    let make = meta.get("Make").map(|v| v.to_string());
    let model = meta.get("Model").map(|v| v.to_string());
    let make = make.as_deref().map(str::trim).filter(|s| !s.is_empty());
    let model = model.as_deref().map(str::trim).filter(|s| !s.is_empty());
    match (make, model) {
        (Some(make), Some(model)) => {
            if model.to_lowercase().starts_with(&make.to_lowercase()) {
                Some(model.to_string())
            } else {
                Some(format!("{make} {model}"))
            }
        }
        (None, Some(model)) => Some(model.to_string()),
        (Some(make), None) => Some(make.to_string()),
        (None, None) => None,
    }
}

/// Lens display name.
pub fn lens_name(meta: &CanonicalMetadata) -> Option<String> {
    field(meta, &["LensModel", "Lens", "LensInfo"])
        .map(|v| v.to_string())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Aperture, preferring the direct f-number over the log-encoded tag.
pub fn aperture(meta: &CanonicalMetadata) -> Option<String> {
    field(meta, &["FNumber", "ApertureValue"]).and_then(format_aperture)
}

/// Exposure time, preferring the direct tag over the log-encoded one.
pub fn shutter_speed(meta: &CanonicalMetadata) -> Option<String> {
    field(meta, &["ExposureTime", "ShutterSpeedValue"]).and_then(format_shutter_speed)
}

pub fn focal_length(meta: &CanonicalMetadata) -> Option<String> {
    meta.get("FocalLength").and_then(format_focal_length)
}

pub fn focal_length_35mm(meta: &CanonicalMetadata) -> Option<String> {
    field(meta, &["FocalLengthIn35mmFormat", "FocalLengthIn35mmFilm"])
        .and_then(format_focal_length)
}

pub fn exposure_compensation(meta: &CanonicalMetadata) -> Option<String> {
    field(meta, &["ExposureCompensation", "ExposureBiasValue"])
        .and_then(format_exposure_compensation)
}

/// ISO rating: first non-null of the vendor-dependent field chain.
pub fn iso(meta: &CanonicalMetadata) -> Option<String> {
    field(meta, ISO_FIELDS)
        .map(|v| v.to_string())
        .filter(|s| !s.is_empty())
}

pub fn capture_time_short(meta: &CanonicalMetadata) -> Option<String> {
    field(meta, TIMESTAMP_FIELDS).and_then(format_timestamp_short)
}

pub fn capture_time_full(meta: &CanonicalMetadata) -> Option<String> {
    field(meta, TIMESTAMP_FIELDS).and_then(format_timestamp_full)
}

pub fn capture_time_compact(meta: &CanonicalMetadata) -> Option<String> {
    field(meta, TIMESTAMP_FIELDS).and_then(format_timestamp_compact)
}

/// Numeric GPS coordinates, if the canonical mapping carries both.
pub fn coordinates(meta: &CanonicalMetadata) -> Option<(f64, f64)> {
    let lat = meta.get("GPSLatitude")?.as_f64()?;
    let lon = meta.get("GPSLongitude")?.as_f64()?;
    Some((lat, lon))
}

/// GPS display record: 5-decimal text plus a full-precision map link.
pub fn gps_link(meta: &CanonicalMetadata) -> Option<GeoLink> {
    let (lat, lon) = coordinates(meta)?;
    Some(GeoLink {
        text: format!("{lat:.5}, {lon:.5}"),
        url: format!("https://www.google.com/maps?q={lat},{lon}"),
    })
}

/// Caption-form GPS pair at 4 decimals.
pub fn gps_compact(meta: &CanonicalMetadata) -> Option<String> {
    coordinates(meta).map(|(lat, lon)| format!("{lat:.4}, {lon:.4}"))
}

/// Pixel dimensions as `{width} × {height}`.
pub fn dimensions(meta: &CanonicalMetadata) -> Option<String> {
    let width = field(meta, WIDTH_FIELDS)?.as_f64()?;
    let height = field(meta, HEIGHT_FIELDS)?.as_f64()?;
    Some(format!(
        "{} × {}",
        width.round() as i64,
        height.round() as i64
    ))
}

/// Video frame rate in frames per second.
pub fn frame_rate(meta: &CanonicalMetadata) -> Option<String> {
    field(meta, &["VideoFrameRate", "FrameRate"])
        .and_then(CanonicalValue::as_f64)
        .filter(|n| *n > 0.0)
        .map(|n| format!("{} fps", CanonicalValue::Number(n)))
}

pub fn exposure_program(meta: &CanonicalMetadata) -> Option<String> {
    meta.get("ExposureProgram").and_then(format_exposure_program)
}

pub fn metering_mode(meta: &CanonicalMetadata) -> Option<String> {
    meta.get("MeteringMode").and_then(format_metering_mode)
}

pub fn white_balance(meta: &CanonicalMetadata) -> Option<String> {
    meta.get("WhiteBalance").and_then(format_white_balance)
}

pub fn flash(meta: &CanonicalMetadata) -> Option<String> {
    meta.get("Flash").and_then(format_flash)
}

pub fn stabilization(meta: &CanonicalMetadata) -> Option<String> {
    field(meta, &["ImageStabilization", "Stabilization"]).and_then(format_stabilization)
}

pub fn hdr(meta: &CanonicalMetadata) -> Option<String> {
    meta.get("HDR").and_then(format_hdr)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(n: f64) -> CanonicalValue {
        CanonicalValue::Number(n)
    }

    fn text(s: &str) -> CanonicalValue {
        CanonicalValue::Text(s.into())
    }

    fn meta(pairs: &[(&str, CanonicalValue)]) -> CanonicalMetadata {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    // =========================================================================
    // Aperture
    // =========================================================================

    #[test]
    fn aperture_direct_f_number() {
        assert_eq!(format_aperture(&num(2.8)), Some("f/2.8".into()));
        assert_eq!(format_aperture(&num(11.0)), Some("f/11.0".into()));
    }

    #[test]
    fn aperture_recovers_log_encoding() {
        // log-encoded 0.5 → f/1.4
        assert_eq!(format_aperture(&num(0.5)), Some("f/1.4".into()));
    }

    #[test]
    fn aperture_rejects_nonpositive() {
        assert_eq!(format_aperture(&num(0.0)), None);
        assert_eq!(format_aperture(&num(-2.0)), None);
    }

    #[test]
    fn aperture_passes_unparseable_text_through() {
        assert_eq!(format_aperture(&text("f/2.8")), Some("f/2.8".into()));
    }

    #[test]
    fn aperture_prefers_f_number_over_aperture_value() {
        let m = meta(&[("FNumber", num(4.0)), ("ApertureValue", num(0.5))]);
        assert_eq!(aperture(&m), Some("f/4.0".into()));
    }

    // =========================================================================
    // Shutter speed
    // =========================================================================

    #[test]
    fn shutter_recovers_log_encoding() {
        // -3 → 2^3 = 8 seconds
        assert_eq!(format_shutter_speed(&num(-3.0)), Some("8.0s".into()));
    }

    #[test]
    fn shutter_renders_fast_times_as_fraction() {
        assert_eq!(format_shutter_speed(&num(0.01)), Some("1/100".into()));
        assert_eq!(format_shutter_speed(&num(0.0005)), Some("1/2000".into()));
    }

    #[test]
    fn shutter_renders_slow_times_in_seconds() {
        assert_eq!(format_shutter_speed(&num(1.0)), Some("1.0s".into()));
        assert_eq!(format_shutter_speed(&num(2.5)), Some("2.5s".into()));
    }

    #[test]
    fn shutter_rejects_zero() {
        assert_eq!(format_shutter_speed(&num(0.0)), None);
    }

    // =========================================================================
    // Focal length / exposure compensation
    // =========================================================================

    #[test]
    fn focal_length_rounds_to_whole_mm() {
        assert_eq!(format_focal_length(&num(23.7)), Some("24mm".into()));
        assert_eq!(format_focal_length(&num(50.0)), Some("50mm".into()));
    }

    #[test]
    fn exposure_compensation_is_signed() {
        assert_eq!(format_exposure_compensation(&num(0.3)), Some("+0.3 EV".into()));
        assert_eq!(format_exposure_compensation(&num(-1.0)), Some("-1.0 EV".into()));
        assert_eq!(format_exposure_compensation(&num(0.0)), Some("+0.0 EV".into()));
    }

    // =========================================================================
    // Coded fields
    // =========================================================================

    #[test]
    fn exposure_program_lookup() {
        assert_eq!(format_exposure_program(&num(3.0)), Some("Aperture priority".into()));
        assert_eq!(format_exposure_program(&num(1.0)), Some("Manual".into()));
    }

    #[test]
    fn exposure_program_unknown_code_stringifies() {
        assert_eq!(format_exposure_program(&num(42.0)), Some("42".into()));
    }

    #[test]
    fn metering_mode_lookup() {
        assert_eq!(format_metering_mode(&num(5.0)), Some("Pattern".into()));
        assert_eq!(format_metering_mode(&num(255.0)), Some("Other".into()));
    }

    #[test]
    fn white_balance_numeric_and_text() {
        assert_eq!(format_white_balance(&num(0.0)), Some("Auto".into()));
        assert_eq!(format_white_balance(&num(1.0)), Some("Manual".into()));
        assert_eq!(format_white_balance(&text("Daylight")), Some("Daylight".into()));
    }

    // =========================================================================
    // Flash / stabilization / HDR
    // =========================================================================

    #[test]
    fn flash_numeric_flag() {
        assert_eq!(format_flash(&num(0.0)), Some("Not fired".into()));
        assert_eq!(format_flash(&num(9.0)), Some("Fired".into()));
    }

    #[test]
    fn flash_structured_object_text() {
        let value = text(r#"{"fired":true,"mode":"auto"}"#);
        assert_eq!(format_flash(&value), Some("Fired (auto)".into()));

        let value = text(r#"{"fired":false,"mode":"off"}"#);
        assert_eq!(format_flash(&value), Some("Not fired (off)".into()));
    }

    #[test]
    fn flash_object_without_mode() {
        assert_eq!(format_flash(&text(r#"{"fired":true}"#)), Some("Fired".into()));
    }

    #[test]
    fn flash_plain_text_passes_through() {
        assert_eq!(
            format_flash(&text("Flash did not fire")),
            Some("Flash did not fire".into())
        );
    }

    #[test]
    fn stabilization_on_off() {
        assert_eq!(format_stabilization(&text("on")), Some("On".into()));
        assert_eq!(format_stabilization(&text("1")), Some("On".into()));
        assert_eq!(format_stabilization(&num(1.0)), Some("On".into()));
        assert_eq!(format_stabilization(&num(0.0)), Some("Off".into()));
        assert_eq!(format_stabilization(&text("none")), Some("Off".into()));
    }

    #[test]
    fn hdr_codes() {
        assert_eq!(format_hdr(&num(1.0)), Some("On".into()));
        assert_eq!(format_hdr(&num(3.0)), Some("On".into()));
        assert_eq!(format_hdr(&num(0.0)), Some("Off".into()));
        assert_eq!(format_hdr(&num(4.0)), Some("Off".into()));
    }

    // =========================================================================
    // Timestamps
    // =========================================================================

    #[test]
    fn timestamp_exif_colon_form() {
        let value = text("2024:03:14 15:09:26");
        assert_eq!(format_timestamp_short(&value), Some("14.03.2024 15:09".into()));
        assert_eq!(format_timestamp_full(&value), Some("2024-03-14 15:09:26".into()));
        assert_eq!(format_timestamp_compact(&value), Some("2024-03-14 15:09".into()));
    }

    #[test]
    fn timestamp_rfc3339() {
        let value = text("2024-03-14T15:09:26+02:00");
        assert_eq!(format_timestamp_full(&value), Some("2024-03-14 15:09:26".into()));
    }

    #[test]
    fn unparseable_timestamp_returned_verbatim() {
        assert_eq!(format_timestamp_short(&text("not-a-date")), Some("not-a-date".into()));
        assert_eq!(format_timestamp_full(&text("not-a-date")), Some("not-a-date".into()));
    }

    #[test]
    fn capture_time_prefers_original() {
        let m = meta(&[
            ("DateTime", text("2024:01:01 00:00:00")),
            ("DateTimeOriginal", text("2024:03:14 15:09:26")),
        ]);
        assert_eq!(capture_time_full(&m), Some("2024-03-14 15:09:26".into()));
    }

    // =========================================================================
    // Camera / lens names
    // =========================================================================

    #[test]
    fn camera_name_dedups_repeated_make() {
        let m = meta(&[("Make", text("Canon")), ("Model", text("Canon EOS R5"))]);
        assert_eq!(camera_name(&m), Some("Canon EOS R5".into()));
    }

    #[test]
    fn camera_name_concatenates_distinct_make() {
        let m = meta(&[("Make", text("Canon")), ("Model", text("EOS R5"))]);
        assert_eq!(camera_name(&m), Some("Canon EOS R5".into()));
    }

    #[test]
    fn camera_name_dedup_is_case_insensitive() {
        let m = meta(&[("Make", text("NIKON")), ("Model", text("Nikon Z6"))]);
        assert_eq!(camera_name(&m), Some("Nikon Z6".into()));
    }

    #[test]
    fn camera_name_single_source() {
        assert_eq!(
            camera_name(&meta(&[("Model", text("EOS R5"))])),
            Some("EOS R5".into())
        );
        assert_eq!(
            camera_name(&meta(&[("Make", text("Canon"))])),
            Some("Canon".into())
        );
        assert_eq!(camera_name(&meta(&[])), None);
    }

    // =========================================================================
    // GPS
    // =========================================================================

    #[test]
    fn gps_link_five_decimals_and_full_precision_url() {
        let m = meta(&[
            ("GPSLatitude", num(37.422)),
            ("GPSLongitude", num(-122.084)),
        ]);
        let link = gps_link(&m).unwrap();
        assert_eq!(link.text, "37.42200, -122.08400");
        assert!(link.url.contains("37.422"));
        assert!(link.url.contains("-122.084"));
    }

    #[test]
    fn gps_compact_four_decimals() {
        let m = meta(&[
            ("GPSLatitude", num(37.422)),
            ("GPSLongitude", num(-122.084)),
        ]);
        assert_eq!(gps_compact(&m), Some("37.4220, -122.0840".into()));
    }

    #[test]
    fn gps_requires_both_coordinates() {
        assert_eq!(gps_link(&meta(&[("GPSLatitude", num(37.422))])), None);
    }

    // =========================================================================
    // ISO chain / dimensions / frame rate
    // =========================================================================

    #[test]
    fn iso_chain_picks_first_present() {
        let m = meta(&[
            ("ISOSpeedRatings", num(200.0)),
            ("PhotographicSensitivity", num(400.0)),
        ]);
        assert_eq!(iso(&m), Some("200".into()));
    }

    #[test]
    fn iso_preferred_name_wins() {
        let m = meta(&[("ISO", num(100.0)), ("ISOSpeedRatings", num(200.0))]);
        assert_eq!(iso(&m), Some("100".into()));
    }

    #[test]
    fn dimensions_from_fallback_chains() {
        let m = meta(&[
            ("ExifImageWidth", num(8192.0)),
            ("ExifImageHeight", num(5464.0)),
        ]);
        assert_eq!(dimensions(&m), Some("8192 × 5464".into()));
    }

    #[test]
    fn frame_rate_renders_fps() {
        let m = meta(&[("VideoFrameRate", num(29.97))]);
        assert_eq!(frame_rate(&m), Some("29.97 fps".into()));
    }
}
