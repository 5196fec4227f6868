// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Blocking HTTP client for the file processing service.
//!
//! One multipart POST per submission: no retry, no timeout, no streaming.
//! Success bodies are zip archives returned whole; failure bodies are JSON
//! objects that optionally carry an `error` message.

use anyhow::Result;
use reqwest::blocking::multipart;
use serde::Deserialize;

use super::{FileTransfer, FormPart, SubmitRequest};

/// Environment variable overriding the service base URL.
const API_BASE_ENV: &str = "FILE_TOOLS_API_BASE";

/// Default base URL when no configuration is supplied.
const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Error body returned by the service on non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Build the user-facing message for a failed response.
fn server_error_message(status: u16, body: &str) -> String {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    parsed
        .error
        .unwrap_or_else(|| format!("Server error ({})", status))
}

/// HTTP transport for the remote service.
pub struct HttpClient {
    base_url: String,
    inner: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            inner: reqwest::blocking::Client::new(),
        }
    }

    /// Read the base URL from the environment, falling back to loopback.
    pub fn from_env() -> Self {
        let base = std::env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        log::info!("Using API base {}", base);
        Self::new(base)
    }

    fn build_form(parts: &[FormPart]) -> Result<multipart::Form> {
        let mut form = multipart::Form::new();
        for part in parts {
            form = match part {
                FormPart::File {
                    field,
                    file_name,
                    source,
                } => {
                    let file = multipart::Part::file(source)?.file_name(file_name.clone());
                    form.part(*field, file)
                }
                FormPart::Text { field, value } => form.text(*field, value.clone()),
            };
        }
        Ok(form)
    }
}

impl FileTransfer for HttpClient {
    fn submit(&self, request: &SubmitRequest) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, request.endpoint);
        log::info!("POST {} ({} parts)", url, request.parts.len());

        let form = Self::build_form(&request.parts)?;
        let response = self.inner.post(&url).multipart(form).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = server_error_message(status.as_u16(), &body);
            log::warn!("Request to {} failed: {}", url, message);
            anyhow::bail!(message);
        }

        let bytes = response.bytes()?;
        log::info!("Received {} byte archive from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
