//! Roster Desk - desktop client for employee roster management.

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;
use roster_desk as app;

use app::config::{AppConfig, ConfigLoadResult};
use app::ui::App;

/// Desktop client for employee roster management.
#[derive(Parser)]
#[command(name = "roster-desk")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.dev);

    tracing::info!("Roster Desk starting...");

    // Determine config path based on mode
    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        AppConfig::default_path()
    };
    tracing::info!("Config path: {:?}", config_path);

    let config = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            config
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, writing defaults to {:?}", config_path);
            let config = AppConfig::default();
            if let Err(e) = config.save(&config_path) {
                tracing::warn!("Failed to write default config: {}", e);
            }
            config
        }
        ConfigLoadResult::Invalid(e) => {
            anyhow::bail!("Invalid config at {:?}: {}", config_path, e);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Roster Desk")
            .with_inner_size([900.0, 650.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    // Create tokio runtime for async operations
    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");

    eframe::run_native(
        "Roster Desk",
        options,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(App::new(config, rt)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {e}"))?;

    Ok(())
}

/// Set up tracing with console output in dev mode, or a rolling daily file
/// in the platform-local data directory otherwise.
///
/// The returned guard must be held for the lifetime of the process so
/// buffered log lines are flushed.
fn init_logging(dev: bool) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    if dev {
        tracing_subscriber::fmt().with_env_filter(filter).init();
        return None;
    }

    let log_dir = directories::ProjectDirs::from("", "", "roster-desk").map(|dirs| dirs.data_local_dir().join("logs"));

    match log_dir {
        Some(dir) if std::fs::create_dir_all(&dir).is_ok() => {
            let appender = tracing_appender::rolling::daily(dir, "roster-desk.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(writer)
                .with_ansi(false)
                .init();
            Some(guard)
        }
        _ => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
            None
        }
    }
}
