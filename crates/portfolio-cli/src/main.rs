//! Portfolio CLI
//!
//! Thin wrapper around portfolio-core for inspecting the catalog and the
//! stored theme preference without opening the desktop app.
//!
//! ## Usage
//!
//! ```bash
//! # List every project
//! portfolio list
//!
//! # Only Android projects
//! portfolio list --platform android
//!
//! # Show one project as the modal would
//! portfolio show fursah
//!
//! # Check a catalog file before shipping it
//! portfolio validate ./projects.json
//!
//! # Inspect or change the saved theme
//! portfolio theme get
//! portfolio theme set light
//! portfolio theme clear
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portfolio_core::{
    Catalog, Filter, ModalController, Platform, PreferenceStore, Theme, ThemeStore,
};

/// Portfolio - project catalog and preferences
#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version = "0.1.0")]
#[command(about = "Inspect the portfolio project catalog and theme preference")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory holding preferences.redb
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Catalog file to read instead of the built-in projects
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List projects
    List {
        /// Only projects for this platform (ios, android, cross-platform)
        #[arg(short, long)]
        platform: Option<Platform>,
    },

    /// Show one project in full
    Show {
        /// Project id
        id: String,

        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load and validate a catalog file
    Validate {
        /// Path to the catalog JSON
        file: PathBuf,
    },

    /// Stored theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Print the stored theme, if any
    Get,
    /// Store a theme (light or dark)
    Set { theme: Theme },
    /// Forget the stored theme
    Clear,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("portfolio")
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display())),
        None => Catalog::builtin().context("Built-in catalog is invalid"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);

    match cli.command {
        Commands::List { platform } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;
            let filter = platform.map(Filter::Platform).unwrap_or_default();
            let records: Vec<_> = catalog.iter().filter(|r| filter.matches(r)).collect();

            if records.is_empty() {
                println!("No projects found.");
            } else {
                println!("Projects ({}):", records.len());
                println!();
                for record in records {
                    println!("  {:<16} {:<15} {}", record.id, record.platform, record.title);
                }
            }
        }

        Commands::Show { id, json } => {
            let catalog = load_catalog(cli.catalog.as_deref())?;

            if json {
                let record = catalog
                    .lookup(&id)
                    .with_context(|| format!("Project not found: {}", id))?;
                println!("{}", serde_json::to_string_pretty(record)?);
                return Ok(());
            }

            let mut modal = ModalController::new(catalog);
            if !modal.open(&id) {
                anyhow::bail!("Project not found: {}", id);
            }
            let view = modal
                .view()
                .with_context(|| format!("Project not found: {}", id))?;

            println!("{}", view.title);
            println!("  ID: {}", view.project_id);
            println!("  Category: {}", view.category);
            println!();
            println!("{}", view.description);
            println!();
            println!("Tech: {}", view.tech.join(", "));
            if !view.features.is_empty() {
                println!();
                println!("Key Features:");
                for (i, feature) in view.features.iter().enumerate() {
                    println!("  {}. {}", i + 1, feature);
                }
            }
            println!();
            println!("Images ({}):", view.thumbnails.len());
            for thumb in &view.thumbnails {
                println!("  {}", thumb.src);
            }
            match &view.app_link {
                Some(link) => println!("App link: {}", link),
                None => println!("App link: (none)"),
            }
        }

        Commands::Validate { file } => {
            let catalog = Catalog::load(&file)
                .with_context(|| format!("Invalid catalog {}", file.display()))?;
            let images: usize = catalog.iter().map(|r| r.images.len()).sum();
            println!("Catalog OK: {}", file.display());
            println!("  Projects: {}", catalog.len());
            println!("  Images: {}", images);
            let platforms: Vec<String> =
                catalog.platforms().iter().map(|p| p.to_string()).collect();
            println!("  Platforms: {}", platforms.join(", "));
        }

        Commands::Theme { action } => {
            let store = PreferenceStore::open_in(&data_dir).with_context(|| {
                format!("Failed to open preferences in {}", data_dir.display())
            })?;

            match action {
                ThemeAction::Get => match store.load()? {
                    Some(theme) => println!("Theme: {}", theme),
                    None => println!("Theme: (not set, follows system)"),
                },
                ThemeAction::Set { theme } => {
                    store.save(theme)?;
                    tracing::info!(theme = %theme, "Theme preference saved");
                    println!("Theme set to {}", theme);
                }
                ThemeAction::Clear => {
                    store.clear()?;
                    println!("Theme preference cleared.");
                }
            }
        }
    }

    Ok(())
}
