//! Opening and closing of the app's single modal dialog.

use std::sync::Arc;

use contracts::shared::modal::OpenOptions;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::modals::registry::ControllerRegistry;
use crate::modals::ModalController;
use crate::shared::config::ModalConfig;
use crate::shared::error::ModalError;
use crate::shared::i18n::Translator;
use crate::shared::modal_host::ModalHost;
use crate::shared::modal_outlet::{PageComposer, RenderArgs};
use crate::shared::string_utils::{dasherize, non_empty};

/// Centralized control of the modal dialog.
///
/// Modals behave like singletons: there is one host, and opening a modal
/// reconfigures it for the new dialog, discarding whatever was shown before.
#[derive(Clone)]
pub struct ModalService {
    host: ModalHost,
    registry: ControllerRegistry,
    composer: Arc<dyn PageComposer>,
    translator: Arc<dyn Translator>,
    config: Arc<ModalConfig>,
}

impl ModalService {
    pub fn new(
        host: ModalHost,
        registry: ControllerRegistry,
        composer: Arc<dyn PageComposer>,
        translator: Arc<dyn Translator>,
        config: ModalConfig,
    ) -> Self {
        Self {
            host,
            registry,
            composer,
            translator,
            config: Arc::new(config),
        }
    }

    pub fn host(&self) -> ModalHost {
        self.host
    }

    pub fn registry(&self) -> ControllerRegistry {
        self.registry
    }

    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    /// Shows the modal `name` and returns its content controller.
    ///
    /// Returns `Ok(None)` without touching anything while the app is shutting
    /// down. A name without a registered controller gets the generic body.
    ///
    /// Options left out keep some of the previous dialog's state: the title
    /// aria id, the panel selection handler and the controller's model.
    pub fn show(
        &self,
        name: &str,
        opts: OpenOptions,
    ) -> Result<Option<Arc<dyn ModalController>>, ModalError> {
        if self.registry.is_tearing_down() {
            log::warn!("show_modal('{}') skipped: app is shutting down", name);
            return Ok(None);
        }

        let names = &self.config.modal;
        let host = self.host;

        let modal_class = match non_empty(&opts.modal_class) {
            Some(class) => class.to_string(),
            None => format!("{}{}", dasherize(name).to_lowercase(), names.class_suffix),
        };
        host.modal_class.set(modal_class.clone());

        let controller_name = if opts.admin {
            format!("{}/{}", names.admin_namespace, name)
        } else {
            name.to_string()
        };
        host.name.set(controller_name.clone());

        let template_name = match non_empty(&opts.template_name) {
            Some(template) => template.to_string(),
            None => dasherize(name),
        };

        let (controller, render_target) = match self.registry.lookup(&controller_name) {
            Some(controller) => (controller, controller_name),
            None => {
                let fallback = &names.fallback_controller;
                log::debug!("no controller '{}', using '{}'", controller_name, fallback);
                let controller = self
                    .registry
                    .lookup(fallback)
                    .ok_or_else(|| ModalError::MissingFallback(fallback.clone()))?;
                (controller, fallback.clone())
            }
        };

        let render_args = RenderArgs {
            into: names.slot.clone(),
            outlet: names.outlet.clone(),
            controller: render_target,
            view: opts.add_modal_body_view.then(|| names.body_view.clone()),
        };

        let modal_name = format!("{}/{}", names.template_prefix, template_name);
        let full_name = if opts.admin {
            format!("{}/{}", names.admin_template_prefix, modal_name)
        } else {
            modal_name
        };
        self.composer.render(&full_name, render_args);

        let title = match non_empty(&opts.title) {
            Some(key) => Some(self.translator.t(key)),
            None => non_empty(&opts.title_translated).map(str::to_string),
        };
        host.title.set(title);

        if let Some(id) = non_empty(&opts.title_aria_element_id) {
            host.title_aria_element_id.set(Some(id.to_string()));
        }

        match opts.panels.filter(|panels| !panels.is_empty()) {
            Some(panels) => {
                host.set_panels(panels);
                if let Some(handler) = controller.clone().panel_selector() {
                    host.on_select_panel.set(Some(handler));
                }
                host.modal_class
                    .set(format!("{} {}", modal_class, names.tabs_class));
            }
            None => host.clear_panels(),
        }

        let body = controller.body();
        body.modal.set(Some(host));
        if let Some(model) = opts.model.filter(|model| !model.is_null()) {
            body.model.set(Some(model));
        }

        controller.on_show();
        body.flash_message.set(None);

        log::debug!("modal '{}' shown ({})", name, full_name);
        Ok(Some(controller))
    }

    /// Removes the dialog body. Host state stays as it was.
    pub fn close(&self) {
        let names = &self.config.modal;
        self.composer.disconnect_outlet(&names.slot, &names.outlet);
    }

    /// Closes on the next tick, for use inside DOM event handlers that are
    /// dropped together with the dialog.
    pub fn close_deferred(&self) {
        let svc = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.close();
        });
    }

    pub fn is_open(&self) -> bool {
        let names = &self.config.modal;
        self.composer.is_connected(&names.slot, &names.outlet)
    }
}
