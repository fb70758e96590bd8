//! # huffsteg Binary Entry Point
//!
//! ## Usage
//!
//! ```bash
//! huffsteg hide --image cover.png --text secret.txt --output stego.png
//! huffsteg reveal --image stego.png --codebook stego.codebook.json
//! huffsteg capacity --image cover.png
//! ```
//!
//! `hide` writes the stego PNG plus a JSON codebook next to it; `reveal`
//! needs that codebook back.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use std::fs;
use std::path::{Path, PathBuf};

use huffsteg::common::config::StegConfig;
use huffsteg::common::logging::{init_logger, parse_level};
use huffsteg::common::paths::{validate_path, PathKind};
use huffsteg::processing::storage::{load_codebook, load_grid, save_codebook, save_grid};
use huffsteg::{hide_message, payload_capacity, reveal_message};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Log at debug level regardless of configuration
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hide a text file inside a PNG image
    Hide {
        /// Cover image (PNG)
        #[arg(short, long)]
        image: String,
        /// Message to hide (.txt)
        #[arg(short, long)]
        text: String,
        /// Where to write the stego image (PNG)
        #[arg(short, long)]
        output: String,
        /// Where to write the codebook (defaults next to the output image)
        #[arg(long)]
        codebook: Option<PathBuf>,
    },
    /// Recover a hidden message using its codebook
    Reveal {
        /// Stego image (PNG)
        #[arg(short, long)]
        image: String,
        /// Codebook written by `hide`
        #[arg(long)]
        codebook: PathBuf,
        /// Write the message to this .txt file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print how many payload bits an image can carry
    Capacity {
        #[arg(short, long)]
        image: String,
    },
}

/// `<dir>/<stem>.<extension>` for the output image.
fn default_codebook_path(output: &Path, extension: &str) -> PathBuf {
    let stem = output
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    output.with_file_name(format!("{}.{}", stem, extension))
}

fn hide(
    config: &StegConfig,
    image: &str,
    text: &str,
    output: &str,
    codebook_path: Option<PathBuf>,
) -> Result<()> {
    let image = validate_path(image, PathKind::Image, true)?;
    let text_path = validate_path(text, PathKind::Text, true)?;
    let output = validate_path(output, PathKind::Image, false)?;

    let message = fs::read_to_string(&text_path)
        .with_context(|| format!("reading message {}", text_path.display()))?;
    let cover = load_grid(&image)?;

    let (stego, codebook) = hide_message(&cover, &message)?;
    save_grid(&stego, &output)?;

    let codebook_path = codebook_path
        .unwrap_or_else(|| default_codebook_path(&output, &config.codebook.extension));
    save_codebook(&codebook, &codebook_path)?;

    info!("✅ Hidden message written to {}", output.display());
    info!("📖 Codebook written to {}", codebook_path.display());
    Ok(())
}

fn reveal(image: &str, codebook: &Path, output: Option<String>) -> Result<()> {
    let image = validate_path(image, PathKind::Image, true)?;
    let codebook = load_codebook(codebook)?;
    let grid = load_grid(&image)?;

    let message = reveal_message(&grid, &codebook)?;

    match output {
        Some(path) => {
            let path = validate_path(&path, PathKind::Text, false)?;
            fs::write(&path, &message)
                .with_context(|| format!("writing message {}", path.display()))?;
            info!("✅ Message written to {}", path.display());
        }
        None => println!("{}", message),
    }
    Ok(())
}

fn capacity(image: &str) -> Result<()> {
    let image = validate_path(image, PathKind::Image, true)?;
    let grid = load_grid(&image)?;
    println!(
        "{}x{} image: {} payload bits",
        grid.width(),
        grid.height(),
        payload_capacity(&grid)
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = StegConfig::from_optional_file(args.config.as_deref())?;
    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        parse_level(&config.logging.level)
    };
    init_logger(level);

    match args.command {
        Command::Hide {
            image,
            text,
            output,
            codebook,
        } => hide(&config, &image, &text, &output, codebook),
        Command::Reveal {
            image,
            codebook,
            output,
        } => reveal(&image, &codebook, output),
        Command::Capacity { image } => capacity(&image),
    }
}
