// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Uploaded file handles and ordered file collections.
//!
//! This module defines the core data structures for files the user has
//! queued for upload. Files are kept as handles (name, kind, path) and
//! their contents are only read when the request is transmitted.

use std::path::{Path, PathBuf};

/// Broad media category of an uploaded file, derived from its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Video,
    Audio,
    Generic,
}

impl FileKind {
    /// Extensions offered in the video picker and matched on drop.
    pub const VIDEO_EXTENSIONS: &'static [&'static str] =
        &["mp4", "mov", "mkv", "avi", "webm", "m4v"];

    /// Extensions offered in the audio picker and matched on drop.
    pub const AUDIO_EXTENSIONS: &'static [&'static str] =
        &["mp3", "wav", "m4a", "aac", "flac", "ogg"];

    /// Classify a file path by its extension.
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some(e) if Self::VIDEO_EXTENSIONS.contains(&e) => FileKind::Video,
            Some(e) if Self::AUDIO_EXTENSIONS.contains(&e) => FileKind::Audio,
            _ => FileKind::Generic,
        }
    }
}

/// A user-supplied file queued for upload.
///
/// Immutable once added; identity within a collection is positional, so
/// duplicate names are allowed.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub kind: FileKind,
    pub path: PathBuf,
}

impl UploadedFile {
    /// Build a handle from a filesystem path. Returns `None` for paths
    /// without a representable file name (e.g. a bare root).
    pub fn from_path(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy().to_string();
        let kind = FileKind::from_path(&path);
        Some(Self { name, kind, path })
    }
}

/// An ordered, append-only sequence of uploaded files.
///
/// Insertion order is preserved and is semantically meaningful: the server
/// numbers renamed files and pairs videos with audios by position.
#[derive(Debug, Clone, Default)]
pub struct FileCollection {
    files: Vec<UploadedFile>,
}

impl FileCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append incoming files, in the order presented. No deduplication,
    /// no type or size validation.
    pub fn add(&mut self, incoming: impl IntoIterator<Item = UploadedFile>) {
        self.files.extend(incoming);
    }

    /// Empty the collection. Idempotent.
    pub fn clear(&mut self) {
        self.files.clear();
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, UploadedFile> {
        self.files.iter()
    }
}
