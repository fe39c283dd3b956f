//! voxmetric CLI - Quality scoring for spoken-audio recordings

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use voxmetric::{Config, QualityAnalyzer, Result};

#[derive(Parser)]
#[command(
    name = "voxmetric",
    about = "Objective quality scoring for spoken-audio recordings",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a recording and print a JSON quality report
    Analyze {
        /// Path to audio file (WAV)
        #[arg(short, long)]
        audio: PathBuf,

        /// Reference text for accuracy scoring
        #[arg(short, long)]
        text: Option<String>,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Path to the ASR model
        #[arg(short, long)]
        model: Option<PathBuf>,
    },

    /// Generate default configuration file
    InitConfig {
        /// Output path for config file
        #[arg(short, long, default_value = "voxmetric.yaml")]
        output: PathBuf,
    },

    /// Show information about the analyzer
    Info,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr; the report is the only stdout output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            audio,
            text,
            config,
            model,
        } => {
            let mut cfg = if let Some(config_path) = config {
                Config::load(config_path)?
            } else {
                Config::default()
            };

            if let Some(model_path) = model {
                cfg.asr.model_path = model_path;
            }

            let analyzer = QualityAnalyzer::new(cfg)?;
            let report = analyzer.analyze(&audio, text.as_deref())?;

            println!("{}", serde_json::to_string(&report)?);
        }

        Commands::InitConfig { output } => {
            let config = Config::default();
            config.save(&output)?;
            log::info!("Configuration saved to {}", output.display());
        }

        Commands::Info => {
            println!("voxmetric - Spoken-audio quality scoring");
            println!("=========================================");
            println!("Version: {}", voxmetric::VERSION);
            println!();
            println!("Metrics:");
            println!("  clarity - SNR proxy + spectral contrast");
            println!("  emotion - pitch variation + energy dynamics");
            println!("  wer     - word-set accuracy against a reference text");
            println!();
            println!("Analysis rate: {} Hz", voxmetric::SAMPLE_RATE);
            println!("ASR rate:      {} Hz", voxmetric::ASR_SAMPLE_RATE);
            println!("FFT size:      {}", voxmetric::N_FFT);
            println!("Hop length:    {}", voxmetric::HOP_LENGTH);
        }
    }

    Ok(())
}
