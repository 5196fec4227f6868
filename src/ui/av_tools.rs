// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Video/Audio Modifier page.
//!
//! Two drop targets - one per collection - plus the merge submit control.
//! Dropped files arrive through the app's drag-and-drop routing; clicking
//! a zone opens the matching picker.

use crate::ui::widgets;
use crate::workflows::merge::{MergeSlot, MergeWorkflow};

/// Result of page interaction.
pub enum MergeAction {
    None,
    Pick(MergeSlot),
    Clear,
    Submit,
}

/// Display the audio replacement page.
pub fn show(ui: &mut egui::Ui, workflow: &mut MergeWorkflow) -> MergeAction {
    let mut action = MergeAction::None;

    if widgets::dropzone(ui, "Drop video files (mp4) here, or click to choose") {
        action = MergeAction::Pick(MergeSlot::Videos);
    }
    ui.add_space(8.0);
    if widgets::dropzone(ui, "Drop audio files (mp3, wav) here, or click to choose") {
        action = MergeAction::Pick(MergeSlot::Audios);
    }

    if !workflow.videos.is_empty() || !workflow.audios.is_empty() {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(format!(
                "{} video(s), {} audio(s)",
                workflow.videos.len(),
                workflow.audios.len()
            ));
            if ui.small_button("Clear").clicked() {
                action = MergeAction::Clear;
            }
        });
    }

    ui.add_space(8.0);
    let label = if workflow.status.busy {
        "Working…"
    } else {
        "Start Merge"
    };
    if ui
        .add_enabled(!workflow.status.busy, egui::Button::new(label))
        .clicked()
    {
        action = MergeAction::Submit;
    }

    widgets::status_line(ui, &workflow.status);

    action
}
