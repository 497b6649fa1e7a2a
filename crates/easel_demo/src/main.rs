//! Easel demo runner
//!
//! Opens a window and runs one of the bundled sketches.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use easel_app::SketchConfig;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod sketches;

use sketches::{Bounce, Gallery, Typewriter};

#[derive(Parser)]
#[command(name = "easel-demo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Easel demo sketches", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// TOML sketch configuration
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Window title
    #[arg(long, global = true)]
    title: Option<String>,

    /// Window width in pixels
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Window height in pixels
    #[arg(long, global = true)]
    height: Option<u32>,

    /// Frame rate cap (0 for uncapped)
    #[arg(long, global = true)]
    fps: Option<u32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// A square bouncing off the window edges
    Bounce,

    /// Type into the window
    Text {
        /// Font file; the system sans-serif font when omitted
        #[arg(short, long)]
        font: Option<PathBuf>,

        /// Point size
        #[arg(short, long, default_value = "24")]
        size: f32,
    },

    /// Show an image under the mouse
    Image {
        /// Image file (PNG, JPEG, GIF or BMP)
        path: PathBuf,
    },
}

impl Cli {
    /// Config file first, then command-line overrides
    fn sketch_config(&self, default_title: &str) -> Result<SketchConfig> {
        let mut config = match &self.config {
            Some(path) => SketchConfig::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?,
            None => SketchConfig::new(default_title),
        };
        if let Some(title) = &self.title {
            config.title = title.clone();
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(fps) = self.fps {
            config.target_fps = fps;
        }
        Ok(config)
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let status = match &cli.command {
        Commands::Bounce => {
            let config = cli.sketch_config("Bounce")?;
            info!("Running bounce ({}x{})", config.width, config.height);
            easel_app::run(config, Bounce::default())
        }
        Commands::Text { font, size } => {
            let config = cli.sketch_config("Text")?;
            info!("Running text demo");
            easel_app::run(config, Typewriter::new(font.clone(), *size))
        }
        Commands::Image { path } => {
            let config = cli.sketch_config("Image")?;
            info!("Running image demo with {}", path.display());
            easel_app::run(config, Gallery::new(path.clone()))
        }
    };

    if !status.is_success() {
        tracing::error!("Sketch ended with {:?} (exit code {})", status, status.code());
    }
    Ok(status.into())
}
