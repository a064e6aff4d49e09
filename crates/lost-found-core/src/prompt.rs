//! Prompt Seam
//!
//! Blocking, modal user prompts as seen from the controller.

/// User-facing confirmation and notification
pub trait Prompter {
    /// Ask a yes/no question; returns true when the user accepts
    fn confirm(&self, message: &str) -> bool;

    /// Show a notification the user has to dismiss
    fn alert(&self, message: &str);
}
