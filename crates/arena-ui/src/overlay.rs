//! 比分面板和操作说明

use crate::state::OverlayState;

/// 渲染叠加层；说明的显隐由 [`OverlayState::toggle_legend`] 控制
pub fn show_overlay(ctx: &egui::Context, state: &OverlayState) {
    egui::Area::new(egui::Id::new("score_panel"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.label(egui::RichText::new(&state.score).size(28.0).strong());
                ui.label(format!("View: {}", state.view_name));
                ui.label(state.orbit_label());
            });
        });

    if !state.show_legend {
        return;
    }

    egui::Area::new(egui::Id::new("controls_legend"))
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(12.0, -12.0))
        .interactable(false)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.strong("Controls");
                egui::Grid::new("controls_grid")
                    .num_columns(2)
                    .spacing([12.0, 2.0])
                    .show(ui, |ui| {
                        for (key, description) in OverlayState::legend_entries() {
                            ui.monospace(key);
                            ui.label(description);
                            ui.end_row();
                        }
                    });
            });
        });
}
