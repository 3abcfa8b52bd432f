use std::sync::Arc;

use contracts::shared::modal::PanelDescriptor;
use leptos::prelude::*;

use super::controller::{ModalBody, ModalController};

/// Admin dialog for editing a category, split into tabs.
pub struct EditCategory {
    body: ModalBody,
    /// Tab the form is showing.
    pub active_tab: RwSignal<Option<String>>,
    /// Number of tab switches since the dialog was last shown.
    pub switches: RwSignal<u32>,
}

impl EditCategory {
    pub fn new() -> Self {
        Self {
            body: ModalBody::new(),
            active_tab: RwSignal::new(None),
            switches: RwSignal::new(0),
        }
    }

    fn select_tab(&self, panel: PanelDescriptor) {
        log::debug!("edit-category: tab '{}'", panel.id);
        self.active_tab.set(Some(panel.id));
        self.switches.update(|n| *n += 1);
    }
}

impl Default for EditCategory {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalController for EditCategory {
    fn body(&self) -> &ModalBody {
        &self.body
    }

    fn on_show(&self) {
        let selected = self
            .body
            .modal
            .get_untracked()
            .and_then(|host| host.selected_panel.get_untracked());
        self.active_tab.set(selected.map(|p| p.id));
        self.switches.set(0);
    }

    fn panel_selector(self: Arc<Self>) -> Option<Callback<PanelDescriptor>> {
        Some(Callback::new(move |panel: PanelDescriptor| self.select_tab(panel)))
    }
}
