//! Localized label lookup.
//!
//! Every user-facing label in the reports is resolved by key through
//! [`Labels`], never hardcoded at the use site. The built-in table supplies
//! English defaults; a browser-extension-style `messages.json` file
//! (`{"key": {"message": "..."}}`) can override any subset of them. Keys
//! with no override and no default resolve to the key itself, so a missing
//! translation degrades to something debuggable rather than an error.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// English defaults for every label key the composers use.
///
/// The first six keys mirror the strings the surrounding extension UI
/// looks up; they ride along here so one locale file covers the whole
/// product.
const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("contextMenuName", "View EXIF data"),
    ("exifDataTitle", "EXIF data"),
    ("noExifData", "No EXIF data found"),
    ("infoNoExifFound", "No metadata found in this image"),
    ("errorLoadingImage", "Could not load image"),
    ("errorAccessingImage", "Could not access image data"),
    ("labelCamera", "Camera"),
    ("labelLens", "Lens"),
    ("labelSettings", "Settings"),
    ("labelLocation", "Location"),
    ("labelMapLink", "Map"),
    ("labelDate", "Date"),
    ("headerTechnical", "Technical Details"),
    ("labelDimensions", "Dimensions"),
    ("labelOrientation", "Orientation"),
    ("labelColorSpace", "Color Space"),
    ("labelCompression", "Compression"),
    ("labelFocalLength", "Focal Length"),
    ("labelFocalLength35", "Focal Length (35mm)"),
    ("labelAperture", "Aperture"),
    ("labelShutter", "Shutter Speed"),
    ("labelIso", "ISO"),
    ("labelExposureComp", "Exposure Compensation"),
    ("labelExposureProgram", "Exposure Program"),
    ("labelMetering", "Metering Mode"),
    ("labelWhiteBalance", "White Balance"),
    ("labelFlash", "Flash"),
    ("labelStabilization", "Image Stabilization"),
    ("labelHdr", "HDR"),
    ("labelSoftware", "Software"),
    ("labelArtist", "Artist"),
    ("labelCopyright", "Copyright"),
    ("labelAltitude", "Altitude"),
    ("labelFrameRate", "Frame Rate"),
];

/// One entry in a `messages.json` locale file.
#[derive(Deserialize)]
struct LocaleMessage {
    message: String,
}

#[derive(Debug, Error)]
pub enum LocaleError {
    #[error("failed to read locale file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid locale file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Label provider: locale-file overrides on top of built-in defaults.
#[derive(Debug, Default, Clone)]
pub struct Labels {
    overrides: HashMap<String, String>,
}

impl Labels {
    /// Built-in English labels only.
    pub fn builtin() -> Labels {
        Labels::default()
    }

    /// Parse a `messages.json` document. Empty messages are ignored.
    pub fn from_json_str(json: &str) -> Result<Labels, LocaleError> {
        let messages: HashMap<String, LocaleMessage> = serde_json::from_str(json)?;
        let overrides = messages
            .into_iter()
            .map(|(key, entry)| (key, entry.message.trim().to_string()))
            .filter(|(_, message)| !message.is_empty())
            .collect();
        Ok(Labels { overrides })
    }

    /// Load a `messages.json` locale file from disk.
    pub fn from_file(path: &Path) -> Result<Labels, LocaleError> {
        let json = std::fs::read_to_string(path).map_err(|source| LocaleError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Labels::from_json_str(&json)
    }

    /// Resolve a label key: override → default → the key itself.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(label) = self.overrides.get(key) {
            return label;
        }
        DEFAULT_LABELS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, label)| *label)
            .unwrap_or(key)
    }
}
