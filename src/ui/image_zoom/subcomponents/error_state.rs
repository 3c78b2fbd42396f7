// SPDX-License-Identifier: MPL-2.0
//! Error display state sub-component.

use crate::error::Error;
use crate::i18n::fluent::I18n;

/// i18n key of the default fallback message.
pub const DEFAULT_ERROR_KEY: &str = "image-zoom-error-default";

/// Fallback shown in place of the image when loading fails.
#[derive(Debug, Clone)]
pub struct State {
    /// The load failure.
    error: Error,
    /// Caller-supplied fallback text, replacing the default message.
    custom_text: Option<String>,
    /// Whether to show the technical details.
    show_details: bool,
}

/// Messages for the error state sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toggle visibility of technical details.
    ToggleDetails,
}

impl State {
    #[must_use]
    pub fn new(error: Error, custom_text: Option<String>) -> Self {
        Self {
            error,
            custom_text,
            show_details: false,
        }
    }

    /// Handle an error state message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::ToggleDetails => self.show_details = !self.show_details,
        }
    }

    /// The fallback message: caller text if provided, localized default otherwise.
    #[must_use]
    pub fn friendly_text(&self, i18n: &I18n) -> String {
        self.custom_text
            .clone()
            .unwrap_or_else(|| i18n.tr(DEFAULT_ERROR_KEY))
    }

    /// Localized explanation followed by the raw error.
    #[must_use]
    pub fn details(&self, i18n: &I18n) -> String {
        format!("{} ({})", i18n.tr(self.error.i18n_key()), self.error)
    }

    #[must_use]
    pub fn error(&self) -> &Error {
        &self.error
    }

    #[must_use]
    pub fn show_details(&self) -> bool {
        self.show_details
    }
}
