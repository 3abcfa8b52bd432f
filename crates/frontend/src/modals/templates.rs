//! Template registry - maps a composed template path to the view of the
//! dialog body.

use std::sync::Arc;

use leptos::prelude::*;
use serde_json::Value;

use super::controller::ModalController;

/// Renders the body of a modal template.
///
/// Unknown templates get a generic body showing the model.
pub fn render_modal_template(template: &str, controller: Arc<dyn ModalController>) -> AnyView {
    let body = *controller.body();

    match template {
        "modal/login" => {
            let login = move || model_field(body.model.get().as_ref(), "login");
            view! {
                <form class="login-form">
                    <label for="login-account-name">"Username or email"</label>
                    <input id="login-account-name" type="text" prop:value=login />
                    <label for="login-account-password">"Password"</label>
                    <input id="login-account-password" type="password" />
                </form>
            }
            .into_any()
        }

        "modal/flag-reason" => view! {
            <div class="flag-reason">
                <textarea class="flag-message" placeholder="Let us know specifically what you are concerned about"></textarea>
            </div>
        }
        .into_any(),

        "admin/templates/modal/edit-category" => {
            let selected = move || {
                body.modal
                    .get()
                    .and_then(|host| host.selected_panel.get())
                    .map(|p| p.id)
                    .unwrap_or_default()
            };
            let name = move || model_field(body.model.get().as_ref(), "name");
            view! {
                <div class=move || format!("edit-category-tab edit-category-tab-{}", selected())>
                    <h4>{name}</h4>
                </div>
            }
            .into_any()
        }

        _ => {
            log::debug!("no dedicated view for template '{}'", template);
            let dump = move || {
                body.model
                    .get()
                    .map(|m| serde_json::to_string_pretty(&m).unwrap_or_default())
                    .unwrap_or_default()
            };
            view! {
                <div class="modal-body-generic">
                    <pre>{dump}</pre>
                </div>
            }
            .into_any()
        }
    }
}

fn model_field(model: Option<&Value>, field: &str) -> String {
    model
        .and_then(|m| m.get(field))
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
