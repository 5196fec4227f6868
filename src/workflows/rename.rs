// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Batch rename workflow.
//!
//! Collects files, takes a base name, and asks the service to return a
//! zip of the files renamed to `{base}{n}` in upload order.

use crate::io::download::DownloadSink;
use crate::models::status::SubmissionState;
use crate::models::upload::{FileCollection, UploadedFile};
use crate::net::{FileTransfer, FormPart, SubmitRequest};

use super::{run_submission, PreparedSubmission};

const BUSY_MESSAGE: &str = "Renaming…";
const SUCCESS_MESSAGE: &str = "Done! Your download should start automatically.";

/// State for the rename workflow: one file collection plus its scalar
/// parameters and submission state.
pub struct RenameWorkflow {
    pub files: FileCollection,
    pub base_name: String,
    pub keep_extension: bool,
    pub status: SubmissionState,
}

impl Default for RenameWorkflow {
    fn default() -> Self {
        Self {
            files: FileCollection::new(),
            base_name: String::new(),
            keep_extension: true,
            status: SubmissionState::default(),
        }
    }
}

impl RenameWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single entry point for both drag-and-drop and the file picker.
    pub fn add_files(&mut self, incoming: Vec<UploadedFile>) {
        self.files.add(incoming);
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }

    /// First failing precondition wins; later checks are skipped.
    fn validate(&self) -> Result<(), &'static str> {
        if self.files.is_empty() {
            return Err("Please add some files first.");
        }
        if self.base_name.trim().is_empty() {
            return Err("Please enter a base name.");
        }
        Ok(())
    }

    /// Archive name for the save dialog: each run of whitespace in the
    /// base name becomes a single underscore, including runs at the
    /// edges.
    pub fn download_name(&self) -> String {
        let mut squashed = String::with_capacity(self.base_name.len());
        let mut in_run = false;
        for c in self.base_name.chars() {
            if c.is_whitespace() {
                if !in_run {
                    squashed.push('_');
                }
                in_run = true;
            } else {
                squashed.push(c);
                in_run = false;
            }
        }
        format!("{}_renamed.zip", squashed)
    }

    /// Gate and assemble a submission.
    ///
    /// Returns `None` while busy (repeat submits are no-ops) or when
    /// validation fails (the failure message is reported). Otherwise
    /// enters busy state and returns the prepared request.
    pub fn begin_submit(&mut self) -> Option<PreparedSubmission> {
        if self.status.busy {
            return None;
        }
        if let Err(message) = self.validate() {
            self.status.report(message);
            return None;
        }

        self.status.start(BUSY_MESSAGE);

        let mut parts = Vec::with_capacity(self.files.len() + 2);
        for file in self.files.iter() {
            parts.push(FormPart::File {
                field: "files",
                file_name: file.name.clone(),
                source: file.path.clone(),
            });
        }
        parts.push(FormPart::Text {
            field: "baseName",
            value: self.base_name.clone(),
        });
        parts.push(FormPart::Text {
            field: "keepExtension",
            value: if self.keep_extension { "true" } else { "false" }.to_string(),
        });

        log::info!("Submitting {} file(s) for rename", self.files.len());

        Some(PreparedSubmission {
            request: SubmitRequest {
                endpoint: "/api/rename",
                parts,
            },
            download_name: self.download_name(),
            success_message: SUCCESS_MESSAGE.to_string(),
        })
    }

    /// Record the outcome of an in-flight submission.
    pub fn complete(&mut self, outcome: Result<String, String>) {
        match outcome {
            Ok(message) => {
                log::info!("Rename finished");
                self.status.finish(message);
            }
            Err(message) => {
                log::error!("Rename failed: {}", message);
                self.status.finish(message);
            }
        }
    }

    /// Synchronous submit: validate, run, and record in one call. The UI
    /// runs the middle step on a worker thread instead; tests and
    /// headless callers use this directly.
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

    fn workflow_with_files(names: &[&str]) -> RenameWorkflow {
        let mut workflow = RenameWorkflow::new();
        let files = names
            .iter()
            .map(|n| UploadedFile::from_path(PathBuf::from(format!("/tmp/{}", n))).unwrap())
            .collect();
        workflow.add_files(files);
        workflow
    }

    #[test]
    fn test_empty_collection_never_submits() {
        let mut workflow = RenameWorkflow::new();
        workflow.base_name = "sudo".to_string();
        let client = StubTransfer::ok(b"zip");
        let sink = StubSink::default();

        workflow.submit(&client, &sink);

        assert_eq!(client.request_count(), 0);
        assert_eq!(workflow.status.message, "Please add some files first.");
        assert!(!workflow.status.busy);
    }

    #[test]
    fn test_blank_base_name_never_submits() {
        let mut workflow = workflow_with_files(&["a.txt"]);
        workflow.base_name = "   ".to_string();
        let client = StubTransfer::ok(b"zip");
        let sink = StubSink::default();

        workflow.submit(&client, &sink);

        assert_eq!(client.request_count(), 0);
        assert_eq!(workflow.status.message, "Please enter a base name.");
    }

    #[test]
    fn test_successful_submission_round_trip() {
        let mut workflow = workflow_with_files(&["one.txt", "two.txt", "three.txt"]);
        workflow.base_name = "sudo".to_string();
        let client = StubTransfer::ok(b"archive bytes");
        let sink = StubSink::default();

        workflow.submit(&client, &sink);

        let requests = client.requests.borrow();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.endpoint, "/api/rename");

        let file_parts: Vec<_> = request
            .parts
            .iter()
            .filter(|p| matches!(p, FormPart::File { field, .. } if *field == "files"))
            .collect();
        assert_eq!(file_parts.len(), 3);

        assert!(request.parts.contains(&FormPart::Text {
            field: "baseName",
            value: "sudo".to_string(),
        }));
        assert!(request.parts.contains(&FormPart::Text {
            field: "keepExtension",
            value: "true".to_string(),
        }));

        let saved = sink.saved.borrow();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].0, b"archive bytes");
        assert_eq!(saved[0].1, "sudo_renamed.zip");

        assert_eq!(workflow.status.message, SUCCESS_MESSAGE);
        assert!(!workflow.status.busy);
    }

    #[test]
    fn test_keep_extension_false_is_sent_as_text() {
        let mut workflow = workflow_with_files(&["a.txt"]);
        workflow.base_name = "clip".to_string();
        workflow.keep_extension = false;
        let client = StubTransfer::ok(b"zip");
        let sink = StubSink::default();

        workflow.submit(&client, &sink);

        assert!(client.requests.borrow()[0].parts.contains(&FormPart::Text {
            field: "keepExtension",
            value: "false".to_string(),
        }));
    }

    #[test]
    fn test_server_error_message_reaches_status() {
        let mut workflow = workflow_with_files(&["a.txt"]);
        workflow.base_name = "sudo".to_string();
        let client = StubTransfer::err("disk full");
        let sink = StubSink::default();

        workflow.submit(&client, &sink);

        assert_eq!(workflow.status.message, "disk full");
        assert!(sink.saved.borrow().is_empty());
        assert!(!workflow.status.busy);
    }

    #[test]
    fn test_second_submit_while_busy_is_noop() {
        let mut workflow = workflow_with_files(&["a.txt"]);
        workflow.base_name = "sudo".to_string();

        // First submit is prepared but still in flight
        let job = workflow.begin_submit();
        assert!(job.is_some());
        assert!(workflow.status.busy);

        let client = StubTransfer::ok(b"zip");
        let sink = StubSink::default();
        workflow.submit(&client, &sink);

        assert_eq!(client.request_count(), 0);
    }

    #[test]
    fn test_download_name_collapses_whitespace() {
        let mut workflow = RenameWorkflow::new();
        workflow.base_name = "my  holiday files".to_string();
        assert_eq!(workflow.download_name(), "my_holiday_files_renamed.zip");
    }

    #[test]
    fn test_download_name_keeps_edge_whitespace_runs() {
        let mut workflow = RenameWorkflow::new();
        workflow.base_name = " sudo ".to_string();
        assert_eq!(workflow.download_name(), "_sudo__renamed.zip");
    }

    #[test]
    fn test_clear_empties_collection() {
        let mut workflow = workflow_with_files(&["a.txt", "b.txt"]);
        workflow.clear();
        assert!(workflow.files.is_empty());
    }
}
