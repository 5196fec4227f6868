// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Saving response archives to disk.
//!
//! The download step is modeled as an injected capability so the
//! orchestration logic can be tested with a recording stub instead of
//! real filesystem writes. The save-as dialog itself is not part of the
//! sink: it must run on the UI thread, so the app prompts for the target
//! path before the upload starts and hands the worker a [`PathSink`].

use std::path::{Path, PathBuf};

use anyhow::Result;

/// Capability for delivering a downloaded archive to the user.
pub trait DownloadSink {
    fn save(&self, data: &[u8], file_name: &str) -> Result<()>;
}

/// Partially written file that is deleted unless kept.
///
/// The archive is staged next to its final location and only renamed into
/// place once fully written, so an interrupted save never leaves a
/// half-written zip behind.
struct StagedFile {
    path: PathBuf,
    keep: bool,
}

impl StagedFile {
    fn new(path: PathBuf) -> Self {
        Self { path, keep: false }
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.keep {
            let _ = std::fs::remove_file(&self.path);
        }
    }
}

/// Write `data` to `target` through a staged `.part` file.
pub fn write_archive(target: &Path, data: &[u8]) -> Result<()> {
    let mut staging_name = target
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "download".into());
    staging_name.push(".part");
    let staging_path = target.with_file_name(staging_name);

    let mut staged = StagedFile::new(staging_path);
    std::fs::write(&staged.path, data)?;
    std::fs::rename(&staged.path, target)?;
    staged.keep = true;

    log::info!("Saved {} bytes to {}", data.len(), target.display());
    Ok(())
}

/// Sink bound to a save location the user already chose. The suggested
/// file name is ignored; the target path wins.
pub struct PathSink {
    target: PathBuf,
}

impl PathSink {
    pub fn new(target: PathBuf) -> Self {
        Self { target }
    }
}

impl DownloadSink for PathSink {
    fn save(&self, data: &[u8], _file_name: &str) -> Result<()> {
        write_archive(&self.target, data)
    }
}
