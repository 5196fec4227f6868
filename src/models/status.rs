// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Submission state shared by both workflows.

/// Busy flag plus the last status message shown to the user.
///
/// `busy` gates repeated submissions: while an upload is in flight the
/// trigger control is disabled and further submit calls are no-ops.
#[derive(Debug, Clone, Default)]
pub struct SubmissionState {
    pub busy: bool,
    pub message: String,
}

impl SubmissionState {
    /// Update the message without entering busy state (validation failures).
    pub fn report(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    /// Enter busy state with an in-progress message.
    pub fn start(&mut self, message: impl Into<String>) {
        self.busy = true;
        self.message = message.into();
    }

    /// Leave busy state with the outcome message (success or error).
    pub fn finish(&mut self, message: impl Into<String>) {
        self.busy = false;
        self.message = message.into();
    }
}
