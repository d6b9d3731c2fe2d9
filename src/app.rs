use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ParticleStatsApp {
    pub state: AppState,
}

impl ParticleStatsApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ParticleStatsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: summaries ----
        egui::SidePanel::left("summary_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: boxplot panes ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::stats_panes(ui, &self.state);
        });
    }
}
