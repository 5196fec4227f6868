// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI pages for the File Tools application.

pub mod av_tools;
pub mod dashboard;
pub mod rename;
pub mod widgets;
