use leptos::prelude::*;
use serde_json::Value;

use super::controller::{ModalBody, ModalController};

/// Login dialog.
pub struct Login {
    body: ModalBody,
    pub login_name: RwSignal<String>,
}

impl Login {
    pub fn new() -> Self {
        Self {
            body: ModalBody::new(),
            login_name: RwSignal::new(String::new()),
        }
    }
}

impl Default for Login {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalController for Login {
    fn body(&self) -> &ModalBody {
        &self.body
    }

    /// Prefills the login field from the model, if the caller passed one.
    fn on_show(&self) {
        let name = self.body.model.with_untracked(|model| {
            model
                .as_ref()
                .and_then(|m| m.get("login"))
                .and_then(Value::as_str)
                .map(str::to_string)
        });
        self.login_name.set(name.unwrap_or_default());
    }
}
