//! Transient user-facing notifications.

use common::product_listing::FetchOutcome;
use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub struct Notifications {
    pub message: Signal<Option<String>>,
}

impl Notifications {
    pub fn new() -> Self {
        Self {
            message: Signal::new(None),
        }
    }

    pub fn show(&self, text: impl Into<String>) {
        let mut message = self.message;
        message.set(Some(text.into()));
    }

    pub fn dismiss(&self) {
        let mut message = self.message;
        message.set(None);
    }

    /// Only failures are worth telling the user about.
    pub fn report(&self, outcome: &FetchOutcome) {
        if let FetchOutcome::Failed(text) = outcome {
            self.show(text.clone());
        }
    }
}
