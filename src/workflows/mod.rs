// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Workflow controllers for the two user-facing tasks.
//!
//! Both workflows share the same shape: accumulate files into ordered
//! collections, validate preconditions, assemble one multipart request,
//! and resolve the response into a saved archive or an error message.
//! The network and save steps run behind injected capabilities
//! ([`FileTransfer`], [`DownloadSink`]) so the controllers are testable
//! without a rendering environment.

pub mod merge;
pub mod rename;

use crate::io::download::DownloadSink;
use crate::net::{FileTransfer, SubmitRequest};

/// Fallback message for failures that carry no text of their own.
pub(crate) const GENERIC_FAILURE: &str = "Something went wrong.";

/// A validated submission ready to run on a worker thread: the request,
/// the name to save the archive under, and the message to show on success.
#[derive(Debug, Clone)]
pub struct PreparedSubmission {
    pub request: SubmitRequest,
    pub download_name: String,
    pub success_message: String,
}

/// Execute a prepared submission end to end.
///
/// Never panics and never lets an error escape: every failure path is
/// folded into the `Err` message that becomes the status line.
pub fn run_submission(
    job: PreparedSubmission,
    client: &dyn FileTransfer,
    sink: &dyn DownloadSink,
) -> Result<String, String> {
    let to_message = |e: anyhow::Error| {
        let text = e.to_string();
        if text.is_empty() {
            GENERIC_FAILURE.to_string()
        } else {
            text
        }
    };

    let archive = client.submit(&job.request).map_err(to_message)?;
    sink.save(&archive, &job.download_name).map_err(to_message)?;
    Ok(job.success_message)
}
