use eframe::egui::{Stroke, Ui};
use egui_plot::{BoxElem, BoxPlot, BoxSpread, MarkerShape, Plot, PlotPoints, Points};

use crate::color;
use crate::data::model::Attribute;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Boxplot panes (central panel)
// ---------------------------------------------------------------------------

/// X position of the single box inside each pane.
const BOX_POS: f64 = 1.0;

/// Render the three boxplot panes side by side, in fixed pane order.
pub fn stats_panes(ui: &mut Ui, state: &AppState) {
    if state.run.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a stats file to view a run  (File → Open…)");
        });
        return;
    }

    ui.columns(3, |columns| {
        for (pane, attribute) in columns.iter_mut().zip(Attribute::ALL) {
            attribute_pane(pane, state, attribute);
        }
    });
}

fn attribute_pane(ui: &mut Ui, state: &AppState, attribute: Attribute) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(attribute.title());
    });

    let Some(stats) = state.stats_for(attribute) else {
        // Empty series: no box, the other panes are unaffected.
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label("no data");
        });
        return;
    };

    let stroke_color = color::attribute_color(attribute);
    let spread = BoxSpread::new(
        stats.whisker_low,
        stats.q1,
        stats.median,
        stats.q3,
        stats.whisker_high,
    );
    let elem = BoxElem::new(BOX_POS, spread)
        .name(attribute.title())
        .box_width(0.5)
        .whisker_width(0.25)
        .stroke(Stroke::new(1.5, stroke_color))
        .fill(color::attribute_fill(attribute));

    Plot::new(attribute.prefix())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show_axes([false, true])
        .show_grid([false, true])
        .include_x(0.0)
        .include_x(2.0)
        .show(ui, |plot_ui| {
            plot_ui.box_plot(BoxPlot::new(vec![elem]).name(attribute.title()));

            if state.show_outliers && !stats.outliers.is_empty() {
                let points: PlotPoints = stats
                    .outliers
                    .iter()
                    .map(|&v| [BOX_POS, v])
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .name("outliers")
                        .color(stroke_color)
                        .shape(MarkerShape::Circle)
                        .radius(2.5),
                );
            }
        });
}
