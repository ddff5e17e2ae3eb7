//! # EXIF Glance
//!
//! Turn the raw, loosely structured tag bag an image-metadata extractor
//! produces into normalized fields and human-readable reports. This crate
//! is the logic core of an image-tooltip product: the extractor (which
//! parses image bytes) and the presentation layer (which draws tooltips)
//! live elsewhere; everything between them lives here.
//!
//! # Architecture: A Three-Step Pipeline
//!
//! ```text
//! 1. Normalize   raw tag mapping → flat canonical mapping
//! 2. Format      canonical field → display string (per semantic field)
//! 3. Compose     canonical mapping → caption / full report / sections
//! ```
//!
//! Each step is a pure function over plain data. That buys three things:
//!
//! - **Debuggability**: the canonical mapping is inspectable JSON — run
//!   `exif-glance normalize` on a tag dump and read exactly what the
//!   composers will see.
//! - **Testability**: every formatter is exercised with literal values, no
//!   image files or extractor in the loop.
//! - **Safety under garbage**: no input shape is an error. Malformed
//!   fields vanish or degrade to verbatim text; the pipeline itself never
//!   fails, so the caller has nothing to recover from.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`value`] | Canonical value types and generic scalar coercion |
//! | [`normalize`] | Flattens the extractor's grouped tag bag into the canonical mapping |
//! | [`format`] | Per-field formatters: aperture, shutter, GPS, timestamps, lookup tables |
//! | [`report`] | The compact caption, the full report, and the sectioned tooltip model |
//! | [`locale`] | Label lookup with `messages.json` overrides |
//!
//! # Design Decisions
//!
//! ## The Raw Boundary Is JSON
//!
//! The extraction dependency emits a JSON-shaped mapping: tag names to
//! scalars, arrays, and nested group objects (`gps`, `ifd0`, `exif`,
//! `ifd1`). We take `serde_json::Map` as-is rather than inventing a
//! parallel input type — the shape is that dependency's versioned
//! contract, and mirroring it one-to-one means a new extractor field flows
//! through without a code change here.
//!
//! ## Numbers Stay Numbers Until Display
//!
//! The canonical mapping keeps numeric tags numeric. GPS coordinates and
//! log-encoded exposure values must reach their formatters at full
//! precision; stringifying early would force fragile re-parsing and lose
//! the idempotence of normalization.
//!
//! ## Labels Are Injected
//!
//! Composers never hardcode user-facing label text. Every label resolves
//! by key through [`locale::Labels`], which layers an optional
//! browser-style `messages.json` file over built-in English defaults —
//! the same lookup discipline the surrounding extension uses for its UI
//! strings.
//!
//! ## Fixed Field Order
//!
//! Both report composers emit fields in an order fixed in code, not
//! inherited from map iteration. Identical canonical input yields
//! byte-identical output, which keeps snapshot tests honest and tooltip
//! layouts stable.

pub mod format;
pub mod locale;
pub mod normalize;
pub mod report;
pub mod value;

pub use locale::Labels;
pub use normalize::normalize;
pub use report::{compact_caption, full_report, sectioned_fields};
pub use value::{CanonicalMetadata, CanonicalValue, RawMetadata};
