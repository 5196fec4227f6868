// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Bulk audio replacement workflow.
//!
//! Collects two parallel sequences - videos and audios - and asks the
//! service to replace each video's audio track with the audio at the same
//! position. The pairing is carried purely by multipart part order: all
//! `videos` parts are sent first, then all `audios` parts, each in
//! collection order. The server contract for that pairing is external and
//! not re-verified here.

use crate::io::download::DownloadSink;
use crate::models::status::SubmissionState;
use crate::models::upload::{FileCollection, UploadedFile};
use crate::net::{FileTransfer, FormPart, SubmitRequest};

use super::{run_submission, PreparedSubmission};

const BUSY_MESSAGE: &str = "Processing…";
const SUCCESS_MESSAGE: &str = "Done! Download started.";
const DOWNLOAD_NAME: &str = "merged_videos.zip";

/// Which of the merge workflow's two collections a file belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeSlot {
    Videos,
    Audios,
}

/// State for the merge workflow: the paired collections and submission
/// state. No extra scalar parameters.
#[derive(Default)]
pub struct MergeWorkflow {
    pub videos: FileCollection,
    pub audios: FileCollection,
    pub status: SubmissionState,
}

impl MergeWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single entry point for both drag-and-drop and the file pickers.
    pub fn add_files(&mut self, slot: MergeSlot, incoming: Vec<UploadedFile>) {
        match slot {
            MergeSlot::Videos => self.videos.add(incoming),
            MergeSlot::Audios => self.audios.add(incoming),
        }
    }

    /// Empty both collections together.
    pub fn clear(&mut self) {
        self.videos.clear();
        self.audios.clear();
    }

    fn validate(&self) -> Result<(), &'static str> {
        if self.videos.is_empty() || self.audios.is_empty() {
            return Err("Please upload both videos and audios.");
        }
        if self.videos.len() != self.audios.len() {
            return Err("Number of videos and audios must match.");
        }
        Ok(())
    }

    /// Gate and assemble a submission; see
    /// [`RenameWorkflow::begin_submit`](super::rename::RenameWorkflow::begin_submit).
    pub fn begin_submit(&mut self) -> Option<PreparedSubmission> {
        if self.status.busy {
            return None;
        }
        if let Err(message) = self.validate() {
            self.status.report(message);
            return None;
        }

        self.status.start(BUSY_MESSAGE);

        let mut parts = Vec::with_capacity(self.videos.len() + self.audios.len());
        for video in self.videos.iter() {
            parts.push(FormPart::File {
                field: "videos",
                file_name: video.name.clone(),
                source: video.path.clone(),
            });
        }
        for audio in self.audios.iter() {
            parts.push(FormPart::File {
                field: "audios",
                file_name: audio.name.clone(),
                source: audio.path.clone(),
            });
        }

        log::info!(
            "Submitting {} video/audio pair(s) for audio replacement",
            self.videos.len()
        );

        Some(PreparedSubmission {
            request: SubmitRequest {
                endpoint: "/api/replace-audio",
                parts,
            },
            download_name: DOWNLOAD_NAME.to_string(),
            success_message: SUCCESS_MESSAGE.to_string(),
        })
    }

    /// Record the outcome of an in-flight submission.
    pub fn complete(&mut self, outcome: Result<String, String>) {
        match outcome {
            Ok(message) => {
                log::info!("Audio replacement finished");
                self.status.finish(message);
            }
            Err(message) => {
                log::error!("Audio replacement failed: {}", message);
                self.status.finish(message);
            }
        }
    }

    /// Synchronous submit; the UI uses `begin_submit` plus a worker
    /// thread instead.
    pub fn submit(&mut self, client: &dyn FileTransfer, sink: &dyn DownloadSink) {
        if let Some(job) = self.begin_submit() {
            let outcome = run_submission(job, client, sink);
            self.complete(outcome);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::workflows::testing::{StubSink, StubTransfer};

    fn file(name: &str) -> UploadedFile {
        UploadedFile::from_path(PathBuf::from(format!("/tmp/{}", name))).unwrap()
    }

    fn workflow(videos: &[&str], audios: &[&str]) -> MergeWorkflow {
        let mut wf = MergeWorkflow::new();
        wf.add_files(MergeSlot::Videos, videos.iter().map(|n| file(n)).collect());
        wf.add_files(MergeSlot::Audios, audios.iter().map(|n| file(n)).collect());
        wf
    }

    #[test]
    fn test_missing_collection_never_submits() {
        for (videos, audios) in [(vec!["v1.mp4"], vec![]), (vec![], vec!["a1.mp3"])] {
            let mut wf = workflow(&videos, &audios);
            let client = StubTransfer::ok(b"zip");
            let sink = StubSink::default();

            wf.submit(&client, &sink);

            assert_eq!(client.request_count(), 0);
            assert_eq!(wf.status.message, "Please upload both videos and audios.");
        }
    }

    #[test]
    fn test_count_mismatch_never_submits() {
        let mut wf = workflow(&["v1.mp4", "v2.mp4"], &["a1.mp3", "a2.mp3", "a3.mp3"]);
        let client = StubTransfer::ok(b"zip");
        let sink = StubSink::default();

        wf.submit(&client, &sink);

        assert_eq!(client.request_count(), 0);
        assert_eq!(wf.status.message, "Number of videos and audios must match.");
    }

    #[test]
    fn test_part_order_carries_pairing() {
        let mut wf = workflow(&["v1.mp4", "v2.mp4"], &["a1.mp3", "a2.mp3"]);
        let client = StubTransfer::ok(b"zip");
        let sink = StubSink::default();

        wf.submit(&client, &sink);

        let requests = client.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].endpoint, "/api/replace-audio");

        let fields: Vec<(&str, &str)> = requests[0]
            .parts
            .iter()
            .map(|p| match p {
                FormPart::File {
                    field, file_name, ..
                } => (*field, file_name.as_str()),
                FormPart::Text { field, value } => (*field, value.as_str()),
            })
            .collect();
        assert_eq!(
            fields,
            [
                ("videos", "v1.mp4"),
                ("videos", "v2.mp4"),
                ("audios", "a1.mp3"),
                ("audios", "a2.mp3"),
            ]
        );

        let saved = sink.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].1, "merged_videos.zip");
        assert_eq!(wf.status.message, SUCCESS_MESSAGE);
        assert!(!wf.status.busy);
    }

    #[test]
    fn test_server_error_surfaces_without_download() {
        let mut wf = workflow(&["v1.mp4", "v2.mp4"], &["a1.mp3", "a2.mp3"]);
        let client = StubTransfer::err("disk full");
        let sink = StubSink::default();

        wf.submit(&client, &sink);

        assert_eq!(wf.status.message, "disk full");
        assert!(sink.saved.borrow().is_empty());
        assert!(!wf.status.busy);
    }

    #[test]
    fn test_submit_while_busy_is_noop() {
        let mut wf = workflow(&["v1.mp4"], &["a1.mp3"]);
        assert!(wf.begin_submit().is_some());

        let client = StubTransfer::ok(b"zip");
        let sink = StubSink::default();
        wf.submit(&client, &sink);

        assert_eq!(client.request_count(), 0);
        assert!(wf.status.busy);
    }

    #[test]
    fn test_clear_empties_both_collections() {
        let mut wf = workflow(&["v1.mp4"], &["a1.mp3", "a2.mp3"]);
        wf.clear();
        assert!(wf.videos.is_empty());
        assert!(wf.audios.is_empty());
        // Idempotent
        wf.clear();
        assert!(wf.videos.is_empty());
    }
}
