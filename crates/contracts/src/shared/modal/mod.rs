//! DTOs describing how a modal dialog is opened.
//!
//! The bag mirrors what a UI event handler passes to the modal controller.
//! Everything is optional; empty strings are treated by the controller the
//! same way as missing values.

use serde::{Deserialize, Serialize};

/// One tab of a multi-tab dialog.
///
/// The controller never looks inside a descriptor: it only keeps the order
/// and picks the first one as the default selection.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PanelDescriptor {
    pub id: String,
    pub title: String,
}

impl PanelDescriptor {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Options for opening a modal.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct OpenOptions {
    /// Explicit css class for the modal surface.
    pub modal_class: Option<String>,
    /// Look the controller up under `modals/` and the template under
    /// `admin/templates/`.
    pub admin: bool,
    pub template_name: Option<String>,
    pub add_modal_body_view: bool,
    /// Translation key. Wins over `title_translated`.
    pub title: Option<String>,
    pub title_translated: Option<String>,
    pub title_aria_element_id: Option<String>,
    pub panels: Option<Vec<PanelDescriptor>>,
    pub model: Option<serde_json::Value>,
}

impl OpenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn modal_class(mut self, class: impl Into<String>) -> Self {
        self.modal_class = Some(class.into());
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn template_name(mut self, name: impl Into<String>) -> Self {
        self.template_name = Some(name.into());
        self
    }

    pub fn add_modal_body_view(mut self, add: bool) -> Self {
        self.add_modal_body_view = add;
        self
    }

    pub fn title(mut self, key: impl Into<String>) -> Self {
        self.title = Some(key.into());
        self
    }

    pub fn title_translated(mut self, title: impl Into<String>) -> Self {
        self.title_translated = Some(title.into());
        self
    }

    pub fn title_aria_element_id(mut self, id: impl Into<String>) -> Self {
        self.title_aria_element_id = Some(id.into());
        self
    }

    pub fn panels(mut self, panels: Vec<PanelDescriptor>) -> Self {
        self.panels = Some(panels);
        self
    }

    pub fn model(mut self, model: serde_json::Value) -> Self {
        self.model = Some(model);
        self
    }
}
