//! `tickwork`: an animated analog clock whose gear train can be inspected
//! layer by layer.

mod app;
mod config;
mod keys;
mod layout;
mod theme;
mod transform;
mod views;

use anyhow::{Context, Result};
use clap::Parser;

use tickwork_engine::logging::init_logging;
use tickwork_engine::text::{FontId, FontSystem};
use tickwork_engine::window::Runtime;
use tickwork_mech::LocalWallClock;
use tickwork_tips::TipTask;

use app::StudioApp;
use config::{Cli, StudioConfig};

const FONT_CANDIDATES: [&str; 7] = [
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

fn main() {
    let config = match StudioConfig::from_cli(Cli::parse()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("tickwork: {e:#}");
            std::process::exit(2);
        }
    };
    init_logging(config.logging());
    config.log_notices();

    if let Err(e) = run(config) {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(config: StudioConfig) -> Result<()> {
    let (fonts, font) = load_fonts(&config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("tickwork-tips")
        .enable_all()
        .build()
        .context("failed to start the tip runtime")?;

    let source = config.tips.build().context("failed to set up the tip source")?;
    log::info!("tips from {}", source.name());
    let tips = TipTask::new(runtime.handle().clone(), source);

    let app = StudioApp::new(&config, tips, fonts, font, Box::new(LocalWallClock));
    Runtime::run(config.runtime(), config.gpu(), app)?;

    runtime.shutdown_background();
    Ok(())
}

/// Loads the configured font or the first system font found. Without one
/// the UI still runs; text is simply not drawn.
fn load_fonts(config: &StudioConfig) -> (FontSystem, FontId) {
    let mut fonts = FontSystem::new();
    let loaded = match &config.font {
        Some(path) => fonts.load_font_file(path),
        None => fonts.load_first(FONT_CANDIDATES),
    };
    match loaded {
        Ok(id) => (fonts, id),
        Err(e) => {
            log::warn!("{e}; text will not be drawn (pass --font to pick one)");
            (fonts, FontId::from_index(0))
        }
    }
}
