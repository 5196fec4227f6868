// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model for uploads and submission state.

pub mod status;
pub mod upload;
