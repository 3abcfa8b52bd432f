use serde::Deserialize;

use crate::shared::error::ModalError;

/// Names the modal controller uses when talking to the registry and to the
/// page composition service.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ModalConfig {
    pub modal: ModalNames,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ModalNames {
    /// Controller used when no controller is registered under the modal name.
    pub fallback_controller: String,
    /// Layout slot and outlet the body template is rendered into.
    pub slot: String,
    pub outlet: String,
    /// View requested when `add_modal_body_view` is set.
    pub body_view: String,
    pub class_suffix: String,
    pub tabs_class: String,
    pub template_prefix: String,
    pub admin_namespace: String,
    pub admin_template_prefix: String,
}

/// Default configuration, in the format accepted by [`ModalConfig::from_toml`].
pub const DEFAULT_CONFIG: &str = r#"
[modal]
fallback_controller = "basic-modal-body"
slot = "modal"
outlet = "modalBody"
body_view = "modal-body"
class_suffix = "-modal"
tabs_class = "has-tabs"
template_prefix = "modal"
admin_namespace = "modals"
admin_template_prefix = "admin/templates"
"#;

impl ModalConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ModalError> {
        Ok(toml::from_str(contents)?)
    }

    /// Parses `overrides` if given, falling back to the embedded defaults
    /// when the override is missing or malformed.
    pub fn load(overrides: Option<&str>) -> Self {
        if let Some(contents) = overrides {
            match Self::from_toml(contents) {
                Ok(config) => return config,
                Err(err) => log::warn!("Ignoring modal config override: {}", err),
            }
        }
        Self::default()
    }
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            modal: ModalNames {
                fallback_controller: "basic-modal-body".into(),
                slot: "modal".into(),
                outlet: "modalBody".into(),
                body_view: "modal-body".into(),
                class_suffix: "-modal".into(),
                tabs_class: "has-tabs".into(),
                template_prefix: "modal".into(),
                admin_namespace: "modals".into(),
                admin_template_prefix: "admin/templates".into(),
            },
        }
    }
}
