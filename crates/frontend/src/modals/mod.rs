pub mod basic_modal_body;
pub mod controller;
pub mod edit_category;
pub mod login;
pub mod registry;
pub mod templates;

use std::sync::Arc;

use crate::shared::config::ModalConfig;
use basic_modal_body::BasicModalBody;
use edit_category::EditCategory;
use login::Login;
use registry::ControllerRegistry;

pub use controller::{ModalBody, ModalController};

/// Registry with every dialog controller of the forum.
pub fn forum_registry(config: &ModalConfig) -> ControllerRegistry {
    let names = &config.modal;
    let registry = ControllerRegistry::new();
    registry.register(names.fallback_controller.clone(), || {
        Arc::new(BasicModalBody::new()) as Arc<dyn ModalController>
    });
    registry.register("login", || Arc::new(Login::new()) as Arc<dyn ModalController>);
    registry.register(format!("{}/edit-category", names.admin_namespace), || {
        Arc::new(EditCategory::new()) as Arc<dyn ModalController>
    });
    registry
}
