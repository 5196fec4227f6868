// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! Owns both workflow states and coordinates between the UI pages, the
//! HTTP client, and the background upload threads. One upload may be in
//! flight per workflow; its result arrives over an mpsc channel polled
//! each frame.

use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;

use crate::io::download::PathSink;
use crate::models::upload::{FileKind, UploadedFile};
use crate::net::client::HttpClient;
use crate::ui::av_tools::{self, MergeAction};
use crate::ui::dashboard;
use crate::ui::rename::{self, RenameAction};
use crate::workflows::merge::{MergeSlot, MergeWorkflow};
use crate::workflows::rename::RenameWorkflow;
use crate::workflows::{run_submission, PreparedSubmission, GENERIC_FAILURE};

/// Currently displayed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Rename,
    AvTools,
}

/// Main application state.
pub struct FileToolsApp {
    /// Currently displayed page
    page: Page,

    /// Rename workflow state
    rename: RenameWorkflow,

    /// Audio replacement workflow state
    merge: MergeWorkflow,

    /// Receiver for an in-flight rename upload
    rename_job: Option<Receiver<Result<String, String>>>,

    /// Receiver for an in-flight merge upload
    merge_job: Option<Receiver<Result<String, String>>>,

    /// Shared HTTP transport
    client: Arc<HttpClient>,
}

impl Default for FileToolsApp {
    fn default() -> Self {
        Self::new()
    }
}

impl FileToolsApp {
    /// Create a new File Tools application instance.
    pub fn new() -> Self {
        Self {
            page: Page::Dashboard,
            rename: RenameWorkflow::new(),
            merge: MergeWorkflow::new(),
            rename_job: None,
            merge_job: None,
            client: Arc::new(HttpClient::from_env()),
        }
    }

    fn to_uploads(paths: Vec<PathBuf>) -> Vec<UploadedFile> {
        paths
            .into_iter()
            .filter_map(UploadedFile::from_path)
            .collect()
    }

    /// Ask where to save the archive, pre-filled with the workflow's
    /// download name. Must run on the UI thread: rfd's synchronous
    /// dialogs are main-thread-only on some platforms.
    fn prompt_save_path(file_name: &str) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .set_file_name(file_name)
            .add_filter("Zip archive", &["zip"])
            .save_file()
    }

    /// Run a prepared submission on a worker thread, writing the archive
    /// to the already-chosen target, and hand back the channel its
    /// outcome will arrive on.
    fn spawn_job(
        client: Arc<HttpClient>,
        job: PreparedSubmission,
        target: PathBuf,
    ) -> Receiver<Result<String, String>> {
        let (sender, receiver) = channel();
        std::thread::spawn(move || {
            let outcome = run_submission(job, client.as_ref(), &PathSink::new(target));
            let _ = sender.send(outcome);
        });
        receiver
    }

    fn start_rename(&mut self) {
        if let Some(job) = self.rename.begin_submit() {
            match Self::prompt_save_path(&job.download_name) {
                Some(target) => {
                    self.rename_job = Some(Self::spawn_job(Arc::clone(&self.client), job, target));
                }
                None => self.rename.complete(Err("Download cancelled.".to_string())),
            }
        }
    }

    fn start_merge(&mut self) {
        if let Some(job) = self.merge.begin_submit() {
            match Self::prompt_save_path(&job.download_name) {
                Some(target) => {
                    self.merge_job = Some(Self::spawn_job(Arc::clone(&self.client), job, target));
                }
                None => self.merge.complete(Err("Download cancelled.".to_string())),
            }
        }
    }

    /// Take the outcome of a finished upload, if there is one. A
    /// disconnected channel means the worker died without reporting; the
    /// job is cleared and surfaced as a generic failure so the workflow
    /// never stays busy.
    fn drain_job(
        job: &mut Option<Receiver<Result<String, String>>>,
    ) -> Option<Result<String, String>> {
        let receiver = job.as_ref()?;
        match receiver.try_recv() {
            Ok(outcome) => {
                *job = None;
                Some(outcome)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                log::error!("Upload worker exited without reporting an outcome");
                *job = None;
                Some(Err(GENERIC_FAILURE.to_string()))
            }
        }
    }

    /// Check for completed uploads.
    fn poll_jobs(&mut self) {
        if let Some(outcome) = Self::drain_job(&mut self.rename_job) {
            self.rename.complete(outcome);
        }
        if let Some(outcome) = Self::drain_job(&mut self.merge_job) {
            self.merge.complete(outcome);
        }
    }

    /// Route files dropped onto the window to the active page. Drops and
    /// picker selections funnel into the same workflow add entry points.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        let incoming: Vec<UploadedFile> = dropped
            .into_iter()
            .filter_map(|f| f.path)
            .filter_map(UploadedFile::from_path)
            .collect();

        match self.page {
            Page::Rename => {
                log::info!("Adding {} dropped file(s) to rename queue", incoming.len());
                self.rename.add_files(incoming);
            }
            Page::AvTools => self.route_merge_drop(incoming),
            Page::Dashboard => {}
        }
    }

    /// egui reports drops per-window, not per-widget, so the merge page
    /// sorts dropped files into the two collections by kind.
    fn route_merge_drop(&mut self, incoming: Vec<UploadedFile>) {
        let mut videos = Vec::new();
        let mut audios = Vec::new();
        let mut skipped = 0usize;

        for file in incoming {
            match file.kind {
                FileKind::Video => videos.push(file),
                FileKind::Audio => audios.push(file),
                FileKind::Generic => skipped += 1,
            }
        }

        self.merge.add_files(MergeSlot::Videos, videos);
        self.merge.add_files(MergeSlot::Audios, audios);

        if skipped > 0 {
            log::warn!("Skipped {} dropped file(s) of unknown kind", skipped);
            if !self.merge.status.busy {
                self.merge.status.report(format!(
                    "Skipped {} file(s) that are neither video nor audio.",
                    skipped
                ));
            }
        }
    }

    fn pick_rename_files(&mut self) {
        if let Some(paths) = rfd::FileDialog::new().pick_files() {
            self.rename.add_files(Self::to_uploads(paths));
        }
    }

    fn pick_merge_files(&mut self, slot: MergeSlot) {
        let (label, extensions) = match slot {
            MergeSlot::Videos => ("Videos", FileKind::VIDEO_EXTENSIONS),
            MergeSlot::Audios => ("Audios", FileKind::AUDIO_EXTENSIONS),
        };
        if let Some(paths) = rfd::FileDialog::new()
            .add_filter(label, extensions)
            .pick_files()
        {
            self.merge.add_files(slot, Self::to_uploads(paths));
        }
    }
}

impl eframe::App for FileToolsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_jobs();
        self.handle_dropped_files(ctx);

        // Keep polling while an upload is in flight
        if self.rename_job.is_some() || self.merge_job.is_some() {
            ctx.request_repaint();
        }

        // Top navigation bar
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("File Tools").strong());
                ui.separator();

                let pages = [
                    (Page::Dashboard, "Dashboard"),
                    (Page::Rename, "Upload & Rename"),
                    (Page::AvTools, "Video/Audio Modifier"),
                ];
                for (page, label) in pages {
                    if ui.selectable_label(self.page == page, label).clicked() {
                        self.page = page;
                    }
                }
            });
        });

        // Active page
        let mut nav_target = None;
        let mut rename_action = RenameAction::None;
        let mut merge_action = MergeAction::None;

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Dashboard => nav_target = dashboard::show(ui),
            Page::Rename => rename_action = rename::show(ui, &mut self.rename),
            Page::AvTools => merge_action = av_tools::show(ui, &mut self.merge),
        });

        if let Some(page) = nav_target {
            self.page = page;
        }

        match rename_action {
            RenameAction::PickFiles => self.pick_rename_files(),
            RenameAction::Clear => self.rename.clear(),
            RenameAction::Submit => self.start_rename(),
            RenameAction::None => {}
        }

        match merge_action {
            MergeAction::Pick(slot) => self.pick_merge_files(slot),
            MergeAction::Clear => self.merge.clear(),
            MergeAction::Submit => self.start_merge(),
            MergeAction::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dead_worker_resets_busy_state() {
        let mut app = FileToolsApp::new();
        app.rename.status.start("Renaming…");
        let (sender, receiver) = channel::<Result<String, String>>();
        app.rename_job = Some(receiver);
        drop(sender);

        app.poll_jobs();

        assert!(app.rename_job.is_none());
        assert!(!app.rename.status.busy);
        assert_eq!(app.rename.status.message, GENERIC_FAILURE);
    }

    #[test]
    fn test_pending_worker_stays_busy() {
        let mut app = FileToolsApp::new();
        app.merge.status.start("Processing…");
        let (sender, receiver) = channel::<Result<String, String>>();
        app.merge_job = Some(receiver);

        app.poll_jobs();

        assert!(app.merge_job.is_some());
        assert!(app.merge.status.busy);
        drop(sender);
    }

    #[test]
    fn test_finished_worker_outcome_is_applied() {
        let mut app = FileToolsApp::new();
        app.merge.status.start("Processing…");
        let (sender, receiver) = channel();
        app.merge_job = Some(receiver);
        sender.send(Ok("Done! Download started.".to_string())).unwrap();

        app.poll_jobs();

        assert!(app.merge_job.is_none());
        assert!(!app.merge.status.busy);
        assert_eq!(app.merge.status.message, "Done! Download started.");
    }
}
