//! Report composers: canonical mapping in, display strings out.
//!
//! Three renderings share the same field selectors from [`crate::format`]:
//!
//! - [`compact_caption`] — a short labeled summary suitable for a social
//!   caption or a hover tooltip's one-glance view.
//! - [`full_report`] — the detailed labeled report: identity block, blank
//!   line, technical-details header, technical block.
//! - [`sectioned_fields`] — the structured presentation model a tooltip
//!   renderer consumes: `(section, label, value)` with empty sections
//!   suppressed.
//!
//! All three are deterministic: field order is fixed here, never inherited
//! from the canonical mapping's iteration order, and identical input yields
//! byte-identical output. Absent fields produce no line; when nothing at
//! all is available the composers return empty output rather than filler.

use crate::format;
use crate::locale::Labels;
use crate::value::CanonicalMetadata;
use serde::Serialize;

/// Display section a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Main,
    Technical,
    GpsCopyright,
    Video,
}

/// One labeled line of the presentation model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayField {
    pub label: String,
    pub value: String,
}

/// A section together with its non-empty fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionFields {
    pub section: Section,
    pub fields: Vec<DisplayField>,
}

/// Separator between the parts of the caption's settings line.
const SETTINGS_SEPARATOR: &str = " · ";

/// Verbatim passthrough of a canonical field's display form.
fn passthrough(meta: &CanonicalMetadata, key: &str) -> Option<String> {
    meta.get(key)
        .map(|v| v.to_string())
        .filter(|s| !s.is_empty())
}

fn push_field(fields: &mut Vec<DisplayField>, labels: &Labels, key: &str, value: Option<String>) {
    if let Some(value) = value {
        fields.push(DisplayField {
            label: labels.get(key).to_string(),
            value,
        });
    }
}

/// The caption's single settings line: focal · aperture · shutter · ISO.
fn settings_line(meta: &CanonicalMetadata) -> Option<String> {
    let parts: Vec<String> = [
        format::focal_length(meta),
        format::aperture(meta),
        format::shutter_speed(meta),
        format::iso(meta).map(|iso| format!("ISO {iso}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(SETTINGS_SEPARATOR))
    }
}

/// Compose the compact caption.
///
/// Camera, lens, settings, location, date — each line `label: value`,
/// absent lines omitted, joined with newlines. Empty string when no field
/// is available.
pub fn compact_caption(meta: &CanonicalMetadata, labels: &Labels) -> String {
    let mut fields = Vec::new();
    push_field(&mut fields, labels, "labelCamera", format::camera_name(meta));
    push_field(&mut fields, labels, "labelLens", format::lens_name(meta));
    push_field(&mut fields, labels, "labelSettings", settings_line(meta));
    push_field(&mut fields, labels, "labelLocation", format::gps_compact(meta));
    push_field(&mut fields, labels, "labelDate", format::capture_time_compact(meta));
    fields
        .iter()
        .map(|f| format!("{}: {}", f.label, f.value))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Identity block of the full report: who/what/when, no exposure data.
fn identity_fields(meta: &CanonicalMetadata, labels: &Labels) -> Vec<DisplayField> {
    let mut fields = Vec::new();
    push_field(&mut fields, labels, "labelCamera", format::camera_name(meta));
    push_field(&mut fields, labels, "labelLens", format::lens_name(meta));
    push_field(&mut fields, labels, "labelDate", format::capture_time_full(meta));
    push_field(&mut fields, labels, "labelSoftware", passthrough(meta, "Software"));
    push_field(&mut fields, labels, "labelArtist", passthrough(meta, "Artist"));
    push_field(&mut fields, labels, "labelCopyright", passthrough(meta, "Copyright"));
    fields
}

/// Technical block of the full report, in fixed order.
fn technical_fields(meta: &CanonicalMetadata, labels: &Labels) -> Vec<DisplayField> {
    let gps = format::gps_link(meta);
    let mut fields = Vec::new();
    push_field(&mut fields, labels, "labelDimensions", format::dimensions(meta));
    push_field(&mut fields, labels, "labelOrientation", passthrough(meta, "Orientation"));
    push_field(&mut fields, labels, "labelColorSpace", passthrough(meta, "ColorSpace"));
    push_field(&mut fields, labels, "labelCompression", passthrough(meta, "Compression"));
    push_field(&mut fields, labels, "labelFocalLength", format::focal_length(meta));
    push_field(&mut fields, labels, "labelFocalLength35", format::focal_length_35mm(meta));
    push_field(&mut fields, labels, "labelAperture", format::aperture(meta));
    push_field(&mut fields, labels, "labelShutter", format::shutter_speed(meta));
    push_field(&mut fields, labels, "labelIso", format::iso(meta));
    push_field(&mut fields, labels, "labelExposureComp", format::exposure_compensation(meta));
    push_field(&mut fields, labels, "labelExposureProgram", format::exposure_program(meta));
    push_field(&mut fields, labels, "labelMetering", format::metering_mode(meta));
    push_field(&mut fields, labels, "labelWhiteBalance", format::white_balance(meta));
    push_field(&mut fields, labels, "labelFlash", format::flash(meta));
    push_field(&mut fields, labels, "labelStabilization", format::stabilization(meta));
    push_field(&mut fields, labels, "labelHdr", format::hdr(meta));
    push_field(&mut fields, labels, "labelLocation", gps.as_ref().map(|g| g.text.clone()));
    push_field(&mut fields, labels, "labelMapLink", gps.map(|g| g.url));
    push_field(&mut fields, labels, "labelAltitude", passthrough(meta, "GPSAltitude"));
    push_field(&mut fields, labels, "labelFrameRate", format::frame_rate(meta));
    fields
}

/// Compose the full labeled report.
///
/// Identity block, then — only when any technical field is present — a
/// blank line, the localized technical header, and the technical block.
pub fn full_report(meta: &CanonicalMetadata, labels: &Labels) -> String {
    let mut lines: Vec<String> = identity_fields(meta, labels)
        .iter()
        .map(|f| format!("{}: {}", f.label, f.value))
        .collect();

    let technical = technical_fields(meta, labels);
    if !technical.is_empty() {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(labels.get("headerTechnical").to_string());
        lines.extend(technical.iter().map(|f| format!("{}: {}", f.label, f.value)));
    }

    lines.join("\n")
}

/// The sectioned presentation model for tooltip rendering.
///
/// Sections appear in fixed order (Main, Technical, GPS/Copyright, Video);
/// a section with zero fields is omitted entirely.
pub fn sectioned_fields(meta: &CanonicalMetadata, labels: &Labels) -> Vec<SectionFields> {
    let mut main = Vec::new();
    push_field(&mut main, labels, "labelCamera", format::camera_name(meta));
    push_field(&mut main, labels, "labelLens", format::lens_name(meta));
    push_field(&mut main, labels, "labelDate", format::capture_time_short(meta));
    push_field(&mut main, labels, "labelFocalLength", format::focal_length(meta));
    push_field(&mut main, labels, "labelFocalLength35", format::focal_length_35mm(meta));
    push_field(&mut main, labels, "labelAperture", format::aperture(meta));
    push_field(&mut main, labels, "labelShutter", format::shutter_speed(meta));
    push_field(&mut main, labels, "labelIso", format::iso(meta));
    push_field(&mut main, labels, "labelExposureComp", format::exposure_compensation(meta));

    let mut technical = Vec::new();
    push_field(&mut technical, labels, "labelDimensions", format::dimensions(meta));
    push_field(&mut technical, labels, "labelOrientation", passthrough(meta, "Orientation"));
    push_field(&mut technical, labels, "labelColorSpace", passthrough(meta, "ColorSpace"));
    push_field(&mut technical, labels, "labelCompression", passthrough(meta, "Compression"));
    push_field(&mut technical, labels, "labelExposureProgram", format::exposure_program(meta));
    push_field(&mut technical, labels, "labelMetering", format::metering_mode(meta));
    push_field(&mut technical, labels, "labelWhiteBalance", format::white_balance(meta));
    push_field(&mut technical, labels, "labelFlash", format::flash(meta));
    push_field(&mut technical, labels, "labelStabilization", format::stabilization(meta));
    push_field(&mut technical, labels, "labelHdr", format::hdr(meta));
    push_field(&mut technical, labels, "labelSoftware", passthrough(meta, "Software"));

    let gps = format::gps_link(meta);
    let mut gps_copyright = Vec::new();
    push_field(&mut gps_copyright, labels, "labelLocation", gps.as_ref().map(|g| g.text.clone()));
    push_field(&mut gps_copyright, labels, "labelMapLink", gps.map(|g| g.url));
    push_field(&mut gps_copyright, labels, "labelAltitude", passthrough(meta, "GPSAltitude"));
    push_field(&mut gps_copyright, labels, "labelArtist", passthrough(meta, "Artist"));
    push_field(&mut gps_copyright, labels, "labelCopyright", passthrough(meta, "Copyright"));

    let mut video = Vec::new();
    push_field(&mut video, labels, "labelFrameRate", format::frame_rate(meta));

    [
        (Section::Main, main),
        (Section::Technical, technical),
        (Section::GpsCopyright, gps_copyright),
        (Section::Video, video),
    ]
    .into_iter()
    .filter(|(_, fields)| !fields.is_empty())
    .map(|(section, fields)| SectionFields { section, fields })
    .collect()
}
