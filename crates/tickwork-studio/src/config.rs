use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Parser;
use winit::dpi::LogicalSize;

use tickwork_engine::device::GpuInit;
use tickwork_engine::logging::LoggingConfig;
use tickwork_engine::window::RuntimeConfig;
use tickwork_mech::state::{MAX_SPEED, MIN_SPEED};
use tickwork_mech::PERIOD_SECS;
use tickwork_tips::{GeminiSource, OfflineSource, TipSource, DEFAULT_MODEL};

/// Command line of the `tickwork` binary.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "tickwork",
    version,
    about = "Animated analog clock with an X-ray view of its gear train"
)]
pub struct Cli {
    /// Window title
    #[arg(long, default_value = "Tickwork: X-ray Clock")]
    pub title: String,

    /// Initial window width in logical pixels
    #[arg(long, default_value_t = 1200.0)]
    pub width: f64,

    /// Initial window height in logical pixels
    #[arg(long, default_value_t = 820.0)]
    pub height: f64,

    /// Simulation tick period in milliseconds
    #[arg(long, value_name = "MS", default_value_t = 100)]
    pub tick_ms: u64,

    /// Initial speed multiplier (1-100)
    #[arg(long, default_value_t = 1)]
    pub speed: u32,

    /// Start with the gear train visible
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub xray: bool,

    /// Start at this many seconds past 12 o'clock instead of the wall clock
    #[arg(long, value_name = "SECONDS")]
    pub start_at: Option<f64>,

    /// Answer tip questions from the built-in notes, no network
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub offline: bool,

    /// Generative Language model used for tips
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// API key for the tip service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Font file to use instead of the system search list
    #[arg(long, value_name = "PATH")]
    pub font: Option<PathBuf>,

    /// Log filter, env_logger syntax (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,

    /// Render without waiting for vblank
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub no_vsync: bool,
}

/// Which tip backend to build.
#[derive(Debug, Clone, PartialEq)]
pub enum TipBackend {
    Offline,
    Gemini { api_key: String, model: String },
}

impl TipBackend {
    pub fn build(&self) -> Result<Arc<dyn TipSource>> {
        Ok(match self {
            TipBackend::Offline => Arc::new(OfflineSource),
            TipBackend::Gemini { api_key, model } => {
                Arc::new(GeminiSource::new(api_key.clone(), model.clone())?)
            }
        })
    }
}

/// Validated settings for one studio session.
#[derive(Debug, Clone)]
pub struct StudioConfig {
    pub title: String,
    pub size: LogicalSize<f64>,
    pub tick_period: Duration,
    pub speed: u32,
    pub xray: bool,
    pub start_at: Option<f64>,
    pub tips: TipBackend,
    pub font: Option<PathBuf>,
    pub log_filter: Option<String>,
    pub vsync: bool,
    /// Messages raised while resolving the command line. Kept until the
    /// logger exists; see [`StudioConfig::log_notices`].
    pub notices: Vec<(log::Level, String)>,
}

impl StudioConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        if cli.tick_ms == 0 {
            bail!("--tick-ms must be at least 1");
        }
        if !(cli.width > 0.0 && cli.height > 0.0) {
            bail!("window size must be positive, got {}x{}", cli.width, cli.height);
        }
        if let Some(t) = cli.start_at {
            if !(0.0..PERIOD_SECS).contains(&t) {
                bail!("--start-at must be in [0, {PERIOD_SECS}), got {t}");
            }
        }

        let mut notices = Vec::new();
        let speed = cli.speed.clamp(MIN_SPEED, MAX_SPEED);
        if speed != cli.speed {
            notices.push((log::Level::Warn, format!("speed {} out of range, using {speed}", cli.speed)));
        }

        let tips = match cli.api_key.filter(|k| !k.trim().is_empty()) {
            Some(api_key) if !cli.offline => TipBackend::Gemini { api_key, model: cli.model },
            Some(_) => TipBackend::Offline,
            None => {
                if !cli.offline {
                    notices.push((
                        log::Level::Info,
                        "no API key configured; tips come from the offline notes".to_owned(),
                    ));
                }
                TipBackend::Offline
            }
        };

        Ok(Self {
            title: cli.title,
            size: LogicalSize::new(cli.width, cli.height),
            tick_period: Duration::from_millis(cli.tick_ms),
            speed,
            xray: cli.xray,
            start_at: cli.start_at,
            tips,
            font: cli.font,
            log_filter: cli.log,
            vsync: !cli.no_vsync,
            notices,
        })
    }

    /// Emits the notices gathered by [`StudioConfig::from_cli`]. Call once
    /// the logger is installed.
    pub fn log_notices(&self) {
        for (level, text) in &self.notices {
            log::log!(*level, "{text}");
        }
    }

    pub fn runtime(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: self.size,
            ..RuntimeConfig::default()
        }
    }

    pub fn gpu(&self) -> GpuInit {
        let mode = if self.vsync { wgpu::PresentMode::AutoVsync } else { wgpu::PresentMode::AutoNoVsync };
        GpuInit::default().present_mode(mode)
    }

    pub fn logging(&self) -> LoggingConfig {
        match &self.log_filter {
            Some(filter) => LoggingConfig::with_filter(filter.clone()),
            None => LoggingConfig::default(),
        }
    }
}
