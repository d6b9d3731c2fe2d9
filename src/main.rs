mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use clap::Parser;
use eframe::egui;

use app::ParticleStatsApp;
use data::loader::{self, STATS_DIR};
use state::AppState;

/// Boxplot viewer for per-particle simulation statistics.
///
/// Loads `psr-<RUN_ID>.txt`, `pfm-<RUN_ID>.txt` and `vel-<RUN_ID>.txt`
/// from the simulation build's stats directory and shows one boxplot
/// per attribute.
#[derive(Parser, Debug)]
#[command(name = "particle-stats", version, about)]
struct Cli {
    /// Run identifier, substituted into the three stats file names.
    run_id: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // A run that fails to load aborts here, before any window is shown.
    let run = loader::load_run(Path::new(STATS_DIR), &cli.run_id)
        .with_context(|| format!("loading run '{}'", cli.run_id))?;

    let mut app_state = AppState::default();
    app_state.set_run(run);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1350.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Particle Stats – Boxplot Viewer",
        options,
        Box::new(|_cc| Ok(Box::new(ParticleStatsApp::new(app_state)))),
    )
    .map_err(|e| anyhow::anyhow!("running viewer: {e}"))
}
