//! Browser dialog handling (alert, confirm, prompt, beforeunload).
//!
//! Suites that drive destructive bulk commands install an accept-all policy
//! up front so the confirm dialog never blocks the run.

use serde::{Deserialize, Serialize};

/// Type of browser dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DialogType {
    /// Alert dialog (OK button only)
    Alert,
    /// Confirm dialog (OK/Cancel buttons)
    Confirm,
    /// Prompt dialog (text input + OK/Cancel)
    Prompt,
    /// Before unload dialog (Leave/Stay buttons)
    BeforeUnload,
}

impl std::fmt::Display for DialogType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Alert => write!(f, "alert"),
            Self::Confirm => write!(f, "confirm"),
            Self::Prompt => write!(f, "prompt"),
            Self::BeforeUnload => write!(f, "beforeunload"),
        }
    }
}

/// What the tab does with dialogs the page raises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DialogPolicy {
    /// Leave dialogs alone; a blocking dialog will stall its wait
    #[default]
    Ignore,
    /// Accept every dialog as it opens
    AcceptAll,
    /// Dismiss every dialog as it opens
    DismissAll,
}

impl DialogPolicy {
    /// True if the policy answers dialogs without the script's involvement.
    #[must_use]
    pub const fn is_automatic(&self) -> bool {
        !matches!(self, Self::Ignore)
    }
}
