use contracts::shared::modal::PanelDescriptor;
use leptos::prelude::*;

/// Observable state of the one modal dialog the app shows.
///
/// There is exactly one `ModalHost` per app (provided from the app root).
/// Opening a modal overwrites it in place, so two dialogs are never
/// configured at once.
#[derive(Clone, Copy)]
pub struct ModalHost {
    pub modal_class: RwSignal<String>,
    /// Registry name of the active content controller.
    pub name: RwSignal<String>,
    pub title: RwSignal<Option<String>>,
    pub title_aria_element_id: RwSignal<Option<String>>,
    pub panels: RwSignal<Vec<PanelDescriptor>>,
    /// Always an element of `panels`, `None` iff `panels` is empty.
    pub selected_panel: RwSignal<Option<PanelDescriptor>>,
    pub on_select_panel: RwSignal<Option<Callback<PanelDescriptor>>>,
}

/// Plain copy of the host state, for logging and assertions.
#[derive(Clone, Debug, PartialEq)]
pub struct ModalHostSnapshot {
    pub modal_class: String,
    pub name: String,
    pub title: Option<String>,
    pub title_aria_element_id: Option<String>,
    pub panels: Vec<PanelDescriptor>,
    pub selected_panel: Option<PanelDescriptor>,
    pub has_panel_handler: bool,
}

impl ModalHost {
    pub fn new() -> Self {
        Self {
            modal_class: RwSignal::new(String::new()),
            name: RwSignal::new(String::new()),
            title: RwSignal::new(None),
            title_aria_element_id: RwSignal::new(None),
            panels: RwSignal::new(Vec::new()),
            selected_panel: RwSignal::new(None),
            on_select_panel: RwSignal::new(None),
        }
    }

    /// Replaces the tab list and selects its first tab.
    pub fn set_panels(&self, panels: Vec<PanelDescriptor>) {
        let first = panels.first().cloned();
        self.panels.set(panels);
        self.selected_panel.set(first);
    }

    /// Drops all tabs. The selection handler is kept.
    pub fn clear_panels(&self) {
        self.panels.set(Vec::new());
        self.selected_panel.set(None);
    }

    pub fn has_tabs(&self) -> bool {
        self.panels.with(|p| !p.is_empty())
    }

    /// Switches to `panel` and notifies the content controller.
    ///
    /// Returns `false` when the panel is not one of the current tabs.
    pub fn select_panel(&self, panel: PanelDescriptor) -> bool {
        let known = self.panels.with_untracked(|p| p.contains(&panel));
        if !known {
            log::warn!("select_panel: '{}' is not a tab of '{}'", panel.id, self.name.get_untracked());
            return false;
        }
        self.selected_panel.set(Some(panel.clone()));
        if let Some(handler) = self.on_select_panel.get_untracked() {
            handler.run(panel);
        }
        true
    }

    pub fn snapshot(&self) -> ModalHostSnapshot {
        ModalHostSnapshot {
            modal_class: self.modal_class.get_untracked(),
            name: self.name.get_untracked(),
            title: self.title.get_untracked(),
            title_aria_element_id: self.title_aria_element_id.get_untracked(),
            panels: self.panels.get_untracked(),
            selected_panel: self.selected_panel.get_untracked(),
            has_panel_handler: self.on_select_panel.with_untracked(|h| h.is_some()),
        }
    }
}

impl Default for ModalHost {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn tabs() -> Vec<PanelDescriptor> {
        vec![
            PanelDescriptor::new("general", "General"),
            PanelDescriptor::new("security", "Security"),
        ]
    }

    #[test]
    fn test_set_panels_selects_first() {
        let host = ModalHost::new();
        host.set_panels(tabs());
        assert!(host.has_tabs());
        assert_eq!(
            host.selected_panel.get_untracked(),
            Some(PanelDescriptor::new("general", "General"))
        );

        host.clear_panels();
        assert!(!host.has_tabs());
        assert_eq!(host.selected_panel.get_untracked(), None);
    }

    #[test]
    fn test_select_panel_runs_handler() {
        let host = ModalHost::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        host.on_select_panel.set(Some(Callback::new(move |p: PanelDescriptor| {
            sink.lock().unwrap().push(p.id);
        })));
        host.set_panels(tabs());

        assert!(host.select_panel(PanelDescriptor::new("security", "Security")));
        assert_eq!(
            host.selected_panel.get_untracked().map(|p| p.id),
            Some("security".to_string())
        );
        assert_eq!(*seen.lock().unwrap(), vec!["security".to_string()]);
    }

    #[test]
    fn test_select_unknown_panel_is_ignored() {
        let host = ModalHost::new();
        host.set_panels(tabs());

        assert!(!host.select_panel(PanelDescriptor::new("billing", "Billing")));
        assert_eq!(
            host.selected_panel.get_untracked().map(|p| p.id),
            Some("general".to_string())
        );
    }
}
