use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::data::loader;
use crate::data::model::{Attribute, AttributeSeries};
use crate::data::stats::BoxStats;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – per-attribute summaries
// ---------------------------------------------------------------------------

/// Render the left summary panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Summary");
    ui.separator();

    let Some(run) = &state.run else {
        ui.label("No run loaded.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            for attribute in Attribute::ALL {
                let series = run.series_for(attribute);
                let header = format!("{}  ({})", attribute.title(), series.values.len());

                egui::CollapsingHeader::new(RichText::new(header).strong())
                    .id_salt(attribute.prefix())
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| match state.stats_for(attribute) {
                        Some(stats) => summary_rows(ui, series, stats),
                        None => {
                            ui.label("empty series");
                        }
                    });
            }
        });
}

fn summary_rows(ui: &mut Ui, series: &AttributeSeries, stats: &BoxStats) {
    let min = series.values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = series.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    ui.monospace(format!("min      {min:.4}"));
    ui.monospace(format!("q1       {:.4}", stats.q1));
    ui.monospace(format!("median   {:.4}", stats.median));
    ui.monospace(format!("q3       {:.4}", stats.q3));
    ui.monospace(format!("max      {max:.4}"));
    ui.monospace(format!("outliers {}", stats.outliers.len()));
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(run) = &state.run {
            ui.label(format!(
                "run {}, {} samples",
                run.run_id,
                run.total_samples()
            ));
        }

        ui.separator();

        if ui
            .selectable_label(state.show_outliers, "Show Outliers")
            .clicked()
        {
            state.show_outliers = !state.show_outliers;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Pick any one file of a run's triple; the sibling files are loaded from
/// the same directory. A failing load keeps the current run on screen.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open particle stats")
        .add_filter("Stats files", &["txt"])
        .pick_file();

    let Some(path) = file else { return };

    let loaded = loader::run_from_file(&path)
        .and_then(|(dir, run_id)| loader::load_run(&dir, &run_id));

    match loaded {
        Ok(run) => {
            log::info!("loaded run {} ({} samples)", run.run_id, run.total_samples());
            state.set_run(run);
        }
        Err(e) => {
            log::error!("failed to load run: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}
