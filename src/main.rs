#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod platform;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context;
use bizcard_core::{CardConfig, LoggingBuilder};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Page configuration, set once from the command line before launch
static CARD_CONFIG: OnceLock<CardConfig> = OnceLock::new();

/// Get the page configuration (loaded from `--config` or the defaults).
pub fn card_config() -> CardConfig {
    CARD_CONFIG.get().cloned().unwrap_or_default()
}

/// Digital business card
#[derive(Parser, Debug)]
#[command(name = "bizcard-desktop")]
#[command(about = "Digital business card with call, chat and contact actions")]
struct Args {
    /// JSON file overriding the business details and widget settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log filter directive (overrides RUST_LOG)
    #[arg(long)]
    log: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 480.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut logging = LoggingBuilder::new().with_verbosity(args.verbose);
    if let Some(filter) = &args.log {
        logging = logging.with_filter(filter.clone());
    }
    logging.init().context("failed to initialize logging")?;

    let config = match &args.config {
        Some(path) => CardConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => CardConfig::default(),
    };
    config.validate().context("invalid card configuration")?;

    let title = config.business.business_name.clone();
    let _ = CARD_CONFIG.set(config);

    tracing::info!("Starting '{}' ({}x{})", title, args.width, args.height);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
