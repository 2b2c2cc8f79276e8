#![allow(non_snake_case)]

mod app;
mod bridge;
pub mod context;
mod pages;
mod runtime;
mod theme;
mod view;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use lumen_core::logging::LoggingBuilder;
use lumen_core::PageConfig;

/// Global page configuration, resolved once at startup
static PAGE_CONFIG: OnceLock<PageConfig> = OnceLock::new();

/// Get the page configuration (loaded from file or default)
pub fn get_page_config() -> PageConfig {
    PAGE_CONFIG.get().cloned().unwrap_or_default()
}

/// Lumen - animated intro page
#[derive(Parser, Debug)]
#[command(name = "lumen-desktop")]
#[command(about = "Lumen - animated intro page with cycling color themes")]
struct Args {
    /// JSON page config (defaults to <config dir>/lumen/config.json when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write JSONL logs under this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Write logs only to the JSONL file
    #[arg(short, long, requires = "log_dir")]
    quiet: bool,

    /// Log filter directives, e.g. "lumen=debug"
    #[arg(long)]
    log_filter: Option<String>,

    /// Override the typed title
    #[arg(short, long)]
    title: Option<String>,

    /// Disable the particle background
    #[arg(long)]
    no_particles: bool,
}

/// Default config location, only if the file exists.
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("lumen").join("config.json"))
        .filter(|path| path.is_file())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<PageConfig> {
    match path {
        Some(path) => PageConfig::load(path)
            .with_context(|| format!("Failed to load page config from {}", path.display())),
        None => Ok(PageConfig::default()),
    }
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!(panic = %info, "Panic");
        default_hook(info);
    }));
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let session = format!("pid{}", std::process::id());
    let mut logging = LoggingBuilder::new(session);
    if let Some(dir) = &args.log_dir {
        logging = logging.with_log_dir(dir);
    }
    if args.quiet {
        logging = logging.no_console();
    }
    if let Some(filter) = &args.log_filter {
        logging = logging.with_filter(filter);
    }
    let log_path = logging.init().context("Failed to initialize logging")?;
    install_panic_hook();

    let config_path = args.config.clone().or_else(default_config_path);
    let mut config = load_config(config_path.as_deref())?;
    if let Some(title) = args.title {
        config.copy.title = title;
    }
    if args.no_particles {
        config.particles.count = 0;
    }
    config.validate().context("Invalid page config")?;

    tracing::info!(
        config = ?config_path,
        log = ?log_path,
        themes = config.palette.len(),
        "Starting Lumen"
    );

    let title = config.copy.title.clone();
    let _ = PAGE_CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1024.0, 720.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
