use clap::{Parser, Subcommand};
use exif_glance::{Labels, normalize, report, value::RawMetadata};
use std::io::Read;
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "exif-glance")]
#[command(about = "Turn raw image metadata into human-readable reports")]
#[command(long_about = "\
Turn raw image metadata into human-readable reports

Input is a JSON tag mapping as produced by an image-metadata extractor
(exifr-style): loose top-level tags plus optional nested groups (gps,
ifd0, exif, ifd1). This tool never reads image bytes itself — dump the
extractor's output to a file (or pipe it in with '-') and pick a
rendering:

  exif-glance caption tags.json      # short social-caption summary
  exif-glance report tags.json       # full labeled report
  exif-glance fields tags.json       # sectioned tooltip model as JSON
  exif-glance normalize tags.json    # flattened canonical mapping

Labels come from built-in English defaults; pass --locale to override
any of them with a browser-extension-style messages.json:

  { \"labelCamera\": { \"message\": \"Камера\" }, ... }

Malformed or missing fields are never fatal: they are omitted from the
output or passed through verbatim, matching the tooltip's 'show what we
can' behavior.")]
#[command(version = version_string())]
struct Cli {
    /// messages.json file overriding the built-in English labels
    #[arg(long, global = true)]
    locale: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the compact caption (camera, lens, settings, location, date)
    Caption { input: PathBuf },
    /// Print the full labeled report
    Report { input: PathBuf },
    /// Print the sectioned display fields as JSON
    Fields { input: PathBuf },
    /// Print the flattened canonical mapping as JSON
    Normalize { input: PathBuf },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let labels = match &cli.locale {
        Some(path) => Labels::from_file(path)?,
        None => Labels::builtin(),
    };

    match cli.command {
        Command::Caption { input } => {
            let canonical = normalize(&read_raw(&input)?);
            let caption = report::compact_caption(&canonical, &labels);
            if caption.is_empty() {
                println!("{}", labels.get("infoNoExifFound"));
            } else {
                println!("{caption}");
            }
        }
        Command::Report { input } => {
            let canonical = normalize(&read_raw(&input)?);
            let rendered = report::full_report(&canonical, &labels);
            if rendered.is_empty() {
                println!("{}", labels.get("infoNoExifFound"));
            } else {
                println!("{rendered}");
            }
        }
        Command::Fields { input } => {
            let canonical = normalize(&read_raw(&input)?);
            let sections = report::sectioned_fields(&canonical, &labels);
            println!("{}", serde_json::to_string_pretty(&sections)?);
        }
        Command::Normalize { input } => {
            let canonical = normalize(&read_raw(&input)?);
            println!("{}", serde_json::to_string_pretty(&canonical)?);
        }
    }

    Ok(())
}

/// Read a raw tag mapping from a JSON file, or stdin when the path is `-`.
fn read_raw(path: &Path) -> Result<RawMetadata, Box<dyn std::error::Error>> {
    let json = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    let value: serde_json::Value = serde_json::from_str(&json)?;
    match value {
        serde_json::Value::Object(map) => Ok(map),
        _ => Err(format!("{}: expected a JSON object of tag names to values", path.display()).into()),
    }
}
