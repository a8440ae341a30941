use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber;

use framereel::{config::Config, reel::ReelEngine};

#[derive(Parser)]
#[command(
    name = "framereel",
    version,
    about = "Assemble numbered image frames into a video and a looped GIF",
    long_about = "Framereel walks a list of index ranges over numbered PNG frames, skips any that are missing (with a warning), and encodes the rest into an H.264 video and an infinitely looped GIF at one frame rate."
)]
struct Cli {
    /// Directory containing the numbered frame images
    frames_dir: PathBuf,

    /// Filename prefix of the frames (<prefix>_NNNN.png)
    #[arg(short, long)]
    prefix: Option<String>,

    /// Frame rate for both outputs
    #[arg(short, long)]
    fps: Option<u32>,

    /// Output video file path
    #[arg(long)]
    video: Option<PathBuf>,

    /// Output GIF file path
    #[arg(long)]
    gif: Option<PathBuf>,

    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting framereel v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = match cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(&config_path)?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };

    // Individual flags override the configuration file
    if let Some(prefix) = cli.prefix {
        config.sequence.template.prefix = prefix;
    }
    if let Some(fps) = cli.fps {
        config.encode.params.fps = fps;
    }
    if let Some(video) = cli.video {
        config.encode.video_output = video;
    }
    if let Some(gif) = cli.gif {
        config.encode.gif_output = gif;
    }

    config.validate()?;

    // Create and run the assembly engine
    let engine = ReelEngine::new(config);

    match engine.assemble(&cli.frames_dir).await? {
        Some(summary) => {
            info!(
                "Done: {} frames -> {} ({:.1}s) and {}",
                summary.frames_used, summary.video.path, summary.video.duration, summary.gif.path
            );
        }
        None => {
            info!("No frames found in {:?}; nothing was encoded", cli.frames_dir);
        }
    }

    Ok(())
}
