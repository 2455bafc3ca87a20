//! Application view state
//!
//! Wizard data lives in `momtest_core::Wizard`; these structs only hold what
//! the GUI needs on top of it.

use momtest_core::FieldKey;

use crate::navigation::Route;

/// Header chrome state
#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    pub mobile_menu_open: bool,
}

impl HeaderState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Called whenever a link is chosen; the mobile menu never outlives a click.
    pub fn on_navigate(&mut self) {
        self.mobile_menu_open = false;
    }
}

/// Validate page state that is not part of the wizard itself
#[derive(Debug, Clone, Default)]
pub struct ValidateUiState {
    /// Fields flagged by the last blocked Next/Submit
    pub flagged: Vec<FieldKey>,
    pub last_error: Option<String>,
    pub last_info: Option<String>,
}

impl ValidateUiState {
    pub fn flag_missing(&mut self, missing: Vec<FieldKey>) {
        self.flagged = missing;
    }

    /// A flag stays visible only while its field is still empty.
    pub fn is_flagged(&self, key: FieldKey, value: &str) -> bool {
        value.is_empty() && self.flagged.contains(&key)
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_info = None;
        self.last_error = Some(message.into());
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.last_error = None;
        self.last_info = Some(message.into());
    }

    /// Cleared on every accepted step change.
    pub fn reset_notices(&mut self) {
        self.flagged.clear();
        self.last_error = None;
        self.last_info = None;
    }
}

/// Action requested by a rendered component, applied after the frame's UI pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    None,
    Navigate(Route),
}
