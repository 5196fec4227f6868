// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! File Tools - desktop client for the file processing service.
//!
//! A cross-platform desktop application for batch-renaming uploaded files
//! into sequentially numbered sets and for pairing video/audio files for
//! server-side audio replacement. All actual file manipulation happens on
//! the remote service; this client collects files, validates preconditions,
//! and handles the upload/download round-trip.

mod app;
mod io;
mod models;
mod net;
mod ui;
mod workflows;

use anyhow::Result;
use app::FileToolsApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("File Tools"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "File Tools",
        options,
        Box::new(|_cc| Ok(Box::new(FileToolsApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
