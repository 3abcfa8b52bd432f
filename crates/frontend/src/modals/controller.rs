use std::sync::Arc;

use contracts::shared::modal::PanelDescriptor;
use leptos::prelude::*;
use serde_json::Value;

use crate::shared::modal_host::ModalHost;

/// State every content controller carries.
///
/// Controllers are registry singletons reused across opens, so this state
/// outlives a single dialog.
#[derive(Clone, Copy)]
pub struct ModalBody {
    pub model: RwSignal<Option<Value>>,
    /// The host this controller was last shown in.
    pub modal: RwSignal<Option<ModalHost>>,
    /// Inline notice shown above the body. Cleared on every open.
    pub flash_message: RwSignal<Option<String>>,
}

impl ModalBody {
    pub fn new() -> Self {
        Self {
            model: RwSignal::new(None),
            modal: RwSignal::new(None),
            flash_message: RwSignal::new(None),
        }
    }

    pub fn flash(&self, message: impl Into<String>) {
        self.flash_message.set(Some(message.into()));
    }

    /// Changes the title of the host after the dialog is open.
    pub fn set_title(&self, title: impl Into<String>) {
        if let Some(host) = self.modal.get_untracked() {
            host.title.set(Some(title.into()));
        }
    }
}

impl Default for ModalBody {
    fn default() -> Self {
        Self::new()
    }
}

/// Behaviour specific to one kind of dialog.
///
/// Capabilities beyond [`ModalController::body`] are optional; the default
/// implementations mean "not provided".
pub trait ModalController: Send + Sync + 'static {
    fn body(&self) -> &ModalBody;

    /// Runs once per open, after the host state is fully configured.
    fn on_show(&self) {}

    /// Handler for tab switches, bound to this controller.
    fn panel_selector(self: Arc<Self>) -> Option<Callback<PanelDescriptor>> {
        None
    }
}
