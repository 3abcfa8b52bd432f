//! Page composition for the modal region.
//!
//! The modal controller asks for a template to be rendered into a named
//! layout slot and outlet. [`OutletComposer`] records the latest request per
//! outlet and [`ModalOutlet`] turns the request for the modal body into a view.

use std::collections::HashMap;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;

use crate::layout::ModalService;
use crate::modals::templates::render_modal_template;
use crate::shared::modal_frame::ModalFrame;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderArgs {
    /// Layout slot, e.g. `modal`.
    pub into: String,
    /// Outlet inside the slot, e.g. `modalBody`.
    pub outlet: String,
    /// Registry name of the controller backing the template.
    pub controller: String,
    /// Extra wrapper view around the template.
    pub view: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderRequest {
    pub template: String,
    pub args: RenderArgs,
}

/// Renders named templates into layout outlets.
pub trait PageComposer: Send + Sync {
    fn render(&self, template: &str, args: RenderArgs);

    fn disconnect_outlet(&self, into: &str, outlet: &str);

    fn is_connected(&self, into: &str, outlet: &str) -> bool;
}

#[derive(Clone, Copy)]
pub struct OutletComposer {
    rendered: RwSignal<HashMap<(String, String), RenderRequest>>,
}

impl OutletComposer {
    pub fn new() -> Self {
        Self {
            rendered: RwSignal::new(HashMap::new()),
        }
    }

    /// Current request for an outlet. Tracked, so views re-render on change.
    pub fn rendered_in(&self, into: &str, outlet: &str) -> Option<RenderRequest> {
        self.rendered
            .with(|r| r.get(&(into.to_string(), outlet.to_string())).cloned())
    }
}

impl Default for OutletComposer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageComposer for OutletComposer {
    fn render(&self, template: &str, args: RenderArgs) {
        log::debug!("render '{}' into {}/{}", template, args.into, args.outlet);
        let key = (args.into.clone(), args.outlet.clone());
        let request = RenderRequest {
            template: template.to_string(),
            args,
        };
        self.rendered.update(|r| {
            r.insert(key, request);
        });
    }

    fn disconnect_outlet(&self, into: &str, outlet: &str) {
        self.rendered.update(|r| {
            r.remove(&(into.to_string(), outlet.to_string()));
        });
    }

    fn is_connected(&self, into: &str, outlet: &str) -> bool {
        self.rendered
            .with_untracked(|r| r.contains_key(&(into.to_string(), outlet.to_string())))
    }
}

/// Renders the modal body outlet. Must be mounted exactly once, at the app root.
#[component]
pub fn ModalOutlet() -> impl IntoView {
    let svc = use_context::<ModalService>()
        .expect("ModalService not provided in context (provide it in app root)");
    let composer = use_context::<OutletComposer>()
        .expect("OutletComposer not provided in context (provide it in app root)");

    // Escape closes the dialog.
    Effect::new({
        let svc = svc.clone();
        move |_| {
            let svc = svc.clone();
            let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
                if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                    if keyboard_event.key() == "Escape" && svc.is_open() {
                        svc.close_deferred();
                    }
                }
            }) as Box<dyn FnMut(_)>);

            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
                // ModalOutlet is mounted once for the whole app lifetime; keep closure alive.
                closure.forget();
            }
        }
    });

    let (slot, outlet) = {
        let names = &svc.config().modal;
        (names.slot.clone(), names.outlet.clone())
    };

    view! {
        {move || {
            let request = composer.rendered_in(&slot, &outlet)?;
            let controller = svc.registry().lookup(&request.args.controller)?;
            let body = controller.body();
            let on_close = {
                let svc = svc.clone();
                Callback::new(move |_: ()| svc.close_deferred())
            };
            let content = render_modal_template(&request.template, controller.clone());
            let content = if request.args.view.is_some() {
                view! { <div class="modal-body">{content}</div> }.into_any()
            } else {
                content
            };
            let flash = body.flash_message;

            Some(view! {
                <ModalFrame host=svc.host() on_close=on_close>
                    {move || flash.get().map(|msg| view! {
                        <div class="alert alert-error">{msg}</div>
                    })}
                    {content}
                </ModalFrame>
            })
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(controller: &str) -> RenderArgs {
        RenderArgs {
            into: "modal".into(),
            outlet: "modalBody".into(),
            controller: controller.into(),
            view: None,
        }
    }

    #[test]
    fn test_render_replaces_previous_request() {
        let composer = OutletComposer::new();
        composer.render("modal/flag-reason", args("basic-modal-body"));
        composer.render("modal/login", args("login"));

        let current = composer.rendered_in("modal", "modalBody").unwrap();
        assert_eq!(current.template, "modal/login");
        assert_eq!(current.args.controller, "login");
    }

    #[test]
    fn test_disconnect_outlet() {
        let composer = OutletComposer::new();
        composer.render("modal/login", args("login"));
        assert!(composer.is_connected("modal", "modalBody"));

        composer.disconnect_outlet("modal", "modalBody");
        assert!(!composer.is_connected("modal", "modalBody"));
        assert_eq!(composer.rendered_in("modal", "modalBody"), None);
    }
}
