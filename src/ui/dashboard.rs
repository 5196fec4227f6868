// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Landing page with one card per workflow.

use crate::app::Page;

fn card(ui: &mut egui::Ui, title: &str, blurb: &str) -> bool {
    let response = egui::Frame::group(ui.style())
        .inner_margin(16.0)
        .show(ui, |ui| {
            ui.set_width(280.0);
            ui.label(egui::RichText::new(title).heading());
            ui.add_space(4.0);
            ui.label(egui::RichText::new(blurb).weak());
        })
        .response;

    response.interact(egui::Sense::click()).clicked()
}

/// Display the dashboard. Returns the page to navigate to, if any.
pub fn show(ui: &mut egui::Ui) -> Option<Page> {
    let mut target = None;

    ui.add_space(24.0);
    ui.horizontal(|ui| {
        if card(
            ui,
            "Upload & Rename",
            "Drag & drop or pick files, enter a base name, and download the renamed set.",
        ) {
            target = Some(Page::Rename);
        }

        ui.add_space(16.0);

        if card(
            ui,
            "Video/Audio Modifier",
            "Pair videos with replacement audio tracks and download the merged results.",
        ) {
            target = Some(Page::AvTools);
        }
    });

    target
}
