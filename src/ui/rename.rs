// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Upload & Rename page.
//!
//! Dropzone, queued file list, base name input, and the submit control.
//! The page only mutates the workflow's scalar fields directly; file
//! picking, clearing, and submission are returned as actions so the app
//! can open dialogs and spawn the upload thread.

use crate::ui::widgets;
use crate::workflows::rename::RenameWorkflow;

/// Result of page interaction.
pub enum RenameAction {
    None,
    PickFiles,
    Clear,
    Submit,
}

/// Display the rename page.
pub fn show(ui: &mut egui::Ui, workflow: &mut RenameWorkflow) -> RenameAction {
    let mut action = RenameAction::None;

    if widgets::dropzone(ui, "Drag & drop files here, or click to choose") {
        action = RenameAction::PickFiles;
    }

    if !workflow.files.is_empty() {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(format!("{} file(s) selected", workflow.files.len()));
            if ui.small_button("Clear").clicked() {
                action = RenameAction::Clear;
            }
        });

        egui::ScrollArea::vertical()
            .max_height(160.0)
            .show(ui, |ui| {
                for file in workflow.files.iter() {
                    ui.label(&file.name);
                }
            });
    }

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.label("Base name for sequential rename:");
        ui.add(
            egui::TextEdit::singleline(&mut workflow.base_name)
                .hint_text("e.g., \"sudo\" or \"sudo1\""),
        );
    });
    ui.checkbox(&mut workflow.keep_extension, "Keep file extensions");

    ui.add_space(8.0);
    let label = if workflow.status.busy { "Working…" } else { "Start" };
    if ui
        .add_enabled(!workflow.status.busy, egui::Button::new(label))
        .clicked()
    {
        action = RenameAction::Submit;
    }

    widgets::status_line(ui, &workflow.status);

    action
}
