//! qrblueprint - print a Factorio blueprint string that draws a QR code in game
//!
//! # Usage
//!
//! ```bash
//! # Lamps, error correction M
//! qrblueprint https://factorio.com
//!
//! # Concrete tiles from a QR code already rendered to an image, 29 modules per side
//! qrblueprint --image qr.png --modules 29 --item concrete
//! ```

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use qrblueprint::{
    encode, reader::PixelSampler, BlueprintBuilder, ECLevel, ItemKind, PlacementConfig,
};

/// Turn text into a QR code blueprint for Factorio
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Text to encode
    #[arg(value_name = "TEXT", required_unless_present = "image")]
    text: Option<String>,

    /// Error correction level: L, M, Q or H
    #[arg(short, long, default_value = "M")]
    ec_level: ECLevel,

    /// Item placed on dark modules: small-lamp, transport-belt, concrete or landfill
    #[arg(short, long, default_value = "small-lamp")]
    item: ItemKind,

    /// Spacing multiplier between entities, ignored for tiles
    #[arg(short, long, default_value_t = 1.0)]
    scale: f64,

    /// Read the modules from a rendered QR code instead of generating one
    #[arg(long, value_name = "PATH", conflicts_with = "text")]
    image: Option<PathBuf>,

    /// Modules per side of the QR code in --image. Estimated from the pixel count if unset
    #[arg(long, value_name = "N", requires = "image")]
    modules: Option<usize>,

    /// Print the module grid to stderr
    #[arg(short, long)]
    preview: bool,

    /// Print grid size and item count to stderr
    #[arg(long)]
    stats: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let (matrix, blueprint) = match (&cli.image, &cli.text) {
        (Some(path), _) => {
            let img = image::open(path)
                .with_context(|| format!("Failed to open image: {}", path.display()))?
                .to_rgb8();
            info!("Sampling {}", path.display());

            let mut sampler = PixelSampler::new();
            if let Some(n) = cli.modules {
                sampler.module_count(n);
            }
            let matrix = sampler.sample(&img);
            let config = PlacementConfig::new(cli.item, cli.scale)?;
            let blueprint = encode(&matrix, &config);
            if blueprint.is_empty() {
                bail!("Failed to encode blueprint");
            }
            (matrix, blueprint)
        }
        (None, Some(text)) => {
            let qr = BlueprintBuilder::new(text)
                .ec_level(cli.ec_level)
                .item(cli.item)
                .scale(cli.scale)
                .build()
                .context("Failed to generate blueprint")?;
            (qr.matrix().clone(), qr.into_string())
        }
        (None, None) => bail!("Please enter a URL or text to encode"),
    };

    if cli.preview {
        eprintln!("{}", matrix.to_str());
    }
    if cli.stats {
        let unit = if cli.item.is_tile() { "tiles" } else { "entities" };
        eprintln!("Size: {0}x{0}, {1}: {2}", matrix.side(), unit, matrix.count_dark());
    }

    println!("{blueprint}");
    Ok(())
}
