// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Small widgets shared by the workflow pages.

use crate::models::status::SubmissionState;

/// A framed drop target that doubles as a click-to-choose button.
/// Returns true when clicked.
pub fn dropzone(ui: &mut egui::Ui, label: &str) -> bool {
    let desired = egui::vec2(ui.available_width(), 90.0);
    let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click());

    let visuals = ui.style().interact(&response);
    ui.painter().rect(
        rect,
        6.0,
        ui.visuals().extreme_bg_color,
        egui::Stroke::new(1.0, visuals.fg_stroke.color),
    );
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(14.0),
        visuals.text_color(),
    );

    response.clicked()
}

/// Spinner while busy, then the last status message (nothing if empty).
pub fn status_line(ui: &mut egui::Ui, state: &SubmissionState) {
    ui.horizontal(|ui| {
        if state.busy {
            ui.spinner();
        }
        if !state.message.is_empty() {
            ui.label(egui::RichText::new(&state.message).italics());
        }
    });
}
