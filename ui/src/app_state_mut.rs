//! Defines the mutable, reactive state for the application's UI.

use dioxus::prelude::*;

use crate::consent::CookiePreferences;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// Everything here lives in memory only and is gone on reload.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Whether the cookie preferences dialog is open.
    pub cookie_modal_open: Signal<bool>,
    /// The visitor's consent choices for this session.
    pub cookie_preferences: Signal<CookiePreferences>,
}
