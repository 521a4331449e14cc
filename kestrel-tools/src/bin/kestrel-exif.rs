use std::io::BufReader;
use std::path::{Path, PathBuf};

use clap::Parser;
use kestrel_exif::makernote::Registry;
use kestrel_exif::{Exif, Materialize};
use tracing_subscriber::prelude::*;

/// Print the Exif fields of JPEG and TIFF files
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Images to read
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Print one JSON object per image
    #[arg(long)]
    json: bool,

    /// Convert values only when they are printed
    #[arg(long)]
    lazy: bool,

    /// Skip decoding vendor maker notes
    #[arg(long)]
    no_makernote: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::builder().from_env_lossy())
        .with(tracing_subscriber::fmt::Layer::default().compact())
        .init();

    let registry = if args.no_makernote {
        Registry::empty()
    } else {
        Registry::default()
    };

    let mode = if args.lazy {
        Materialize::Lazy
    } else {
        Materialize::Eager
    };

    let mut failed = false;
    for path in &args.files {
        if let Err(err) = print_file(path, &args, &registry, mode) {
            tracing::error!("Failed to read '{}': {err}", path.display());
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
}

fn print_file(
    path: &Path,
    args: &Args,
    registry: &Registry,
    mode: Materialize,
) -> kestrel_exif::Result<()> {
    let file = std::fs::File::open(path)?;
    let exif = Exif::decode_with(BufReader::new(file), registry, mode)?;
    tracing::debug!("Decoded {} fields from '{}'", exif.len(), path.display());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&exif)?);
    } else {
        println!("---- Image '{}' ----", path.display());
        for line in exif.to_string().lines() {
            println!("    {line}");
        }
    }

    Ok(())
}
