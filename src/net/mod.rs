// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Networking: the transport seam and the HTTP client behind it.

pub mod client;

use std::path::PathBuf;

use anyhow::Result;

/// One part of an outbound multipart form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormPart {
    /// A binary file part. Contents are read from `source` at send time.
    File {
        field: &'static str,
        file_name: String,
        source: PathBuf,
    },
    /// A plain text field.
    Text { field: &'static str, value: String },
}

/// A fully assembled submission: target endpoint plus multipart parts,
/// in transmission order. Part order is meaningful - the server pairs
/// repeated parts positionally.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitRequest {
    pub endpoint: &'static str,
    pub parts: Vec<FormPart>,
}

/// Transport capability injected into the workflows.
///
/// The production implementation is [`client::HttpClient`]; tests
/// substitute a recording stub so no network is involved.
pub trait FileTransfer {
    /// POST the request as a multipart body and return the raw response
    /// body (a zip archive) on success. Errors carry the user-facing
    /// message extracted from the server or synthesized from the status.
    fn submit(&self, request: &SubmitRequest) -> Result<Vec<u8>>;
}
