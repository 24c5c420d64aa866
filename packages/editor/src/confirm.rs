//! Confirmation prompts for destructive actions.
//!
//! Every operation that can lose data asks through [`Confirm`] first. A
//! declined prompt leaves all state untouched.

use inkspire_content::EntityKind;

/// A question put to the user before a destructive action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    DeleteEntity { kind: EntityKind },
    RemoveImage,
    SaveChanges,
    DiscardChanges,
    LogoutWithUnsavedChanges,
    ResetToDefault,
}

impl Prompt {
    pub fn message(&self) -> String {
        match self {
            Prompt::DeleteEntity { kind } => format!(
                "Are you sure you want to delete this {}? This action will be staged until you save all changes.",
                kind
            ),
            Prompt::RemoveImage => {
                "Are you sure you want to remove this image? This will be replaced by a placeholder.".to_string()
            }
            Prompt::SaveChanges => {
                "Are you sure you want to save all changes? This will overwrite the live data.".to_string()
            }
            Prompt::DiscardChanges => {
                "Are you sure you want to discard all changes made in this session?".to_string()
            }
            Prompt::LogoutWithUnsavedChanges => {
                "You have unsaved changes. Are you sure you want to log out and discard them?".to_string()
            }
            Prompt::ResetToDefault => {
                "Are you sure you want to reset all site and product data to their defaults? This cannot be undone.".to_string()
            }
        }
    }
}

/// Source of user confirmation
pub trait Confirm {
    fn confirm(&mut self, prompt: &Prompt) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&Prompt) -> bool,
{
    fn confirm(&mut self, prompt: &Prompt) -> bool {
        self(prompt)
    }
}

/// Accepts every prompt
#[derive(Debug, Default, Clone, Copy)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &Prompt) -> bool {
        true
    }
}

/// Declines every prompt
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverConfirm;

impl Confirm for NeverConfirm {
    fn confirm(&mut self, _prompt: &Prompt) -> bool {
        false
    }
}
