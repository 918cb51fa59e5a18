//! Session configuration.
//!
//! The box layout is fixed by the rules of the game (see
//! `boxes::STANDARD_LAYOUT`); configuration only covers what a session
//! records and reports about itself.

use serde::{Deserialize, Serialize};

/// Per-session settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Keep a `TurnRecord` for every turn played.
    pub record_history: bool,

    /// Emit the final "Scores: ..." status line when the session finishes.
    pub report_status: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            record_history: true,
            report_status: true,
        }
    }
}

impl SessionConfig {
    /// Create the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable turn history.
    #[must_use]
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Enable or disable the final status line.
    #[must_use]
    pub fn with_status_report(mut self, report: bool) -> Self {
        self.report_status = report;
        self
    }
}
