#![allow(non_snake_case)]

mod app;
mod bridge;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::Theme;

use crate::context::LaunchConfig;

/// Global launch configuration, set from command line
static LAUNCH_CONFIG: OnceLock<LaunchConfig> = OnceLock::new();

/// Get the launch configuration (set from command line or default)
pub fn get_launch_config() -> LaunchConfig {
    LAUNCH_CONFIG.get().cloned().unwrap_or_else(|| LaunchConfig {
        data_dir: default_data_dir(),
        ..LaunchConfig::default()
    })
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio")
}

/// Portfolio - personal developer portfolio
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal mobile developer portfolio")]
struct Args {
    /// Data directory for the theme preference
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON project catalog to show instead of the built-in one
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Start in this theme (light or dark) without saving it
    #[arg(short, long)]
    theme: Option<Theme>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() {
    let args = Args::parse();

    setup_logging(args.verbose);

    let data_dir = args.data_dir.unwrap_or_else(default_data_dir);

    tracing::info!("Starting portfolio with data dir: {:?}", data_dir);
    tracing::info!("Hello, fellow developer! Looking for a mobile developer? Get in touch.");

    let _ = LAUNCH_CONFIG.set(LaunchConfig {
        data_dir,
        catalog_path: args.catalog,
        theme_override: args.theme,
    });

    let window_width = 1280.0;
    let window_height = 860.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Portfolio")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
