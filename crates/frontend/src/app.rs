use std::sync::Arc;

use contracts::shared::modal::{OpenOptions, PanelDescriptor};
use leptos::prelude::*;
use serde_json::json;

use crate::layout::ModalService;
use crate::modals::forum_registry;
use crate::shared::config::ModalConfig;
use crate::shared::i18n::MessageCatalog;
use crate::shared::modal_host::ModalHost;
use crate::shared::modal_outlet::{ModalOutlet, OutletComposer};

const MESSAGES: &str = r#"{
    "category": {
        "edit_title": "Edit Category",
        "tabs": { "general": "General", "security": "Security", "settings": "Settings" }
    },
    "login": {
        "title": "Log In",
        "omniauth_error": {
            "generic": "Sorry, there was an error authorizing your account with %{strategy}."
        }
    },
    "flagging": { "title": "Thanks for helping to keep our community civil!" }
}"#;

#[component]
pub fn App() -> impl IntoView {
    let config = ModalConfig::load(None);
    let registry = forum_registry(&config);
    let catalog = MessageCatalog::from_json(MESSAGES).unwrap_or_else(|err| {
        log::error!("Failed to load messages: {}", err);
        MessageCatalog::new()
    });

    let composer = OutletComposer::new();
    let modal = ModalService::new(
        ModalHost::new(),
        registry,
        Arc::new(composer),
        Arc::new(catalog),
        config,
    );

    provide_context(composer);
    provide_context(modal);

    // No dialog may open once the app is being unmounted.
    on_cleanup(move || registry.destroy());

    view! {
        <ForumToolbar />
        <ModalOutlet />
    }
}

#[component]
fn ForumToolbar() -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");

    let open = move |name: &'static str, opts: OpenOptions| {
        if let Err(err) = modal.show(name, opts) {
            log::error!("Failed to open modal '{}': {}", name, err);
        }
    };

    let open_login = {
        let open = open.clone();
        move |_| open("login", OpenOptions::new().title("login.title"))
    };
    let open_flag = {
        let open = open.clone();
        move |_| {
            open(
                "flag-reason",
                OpenOptions::new()
                    .title("flagging.title")
                    .add_modal_body_view(true),
            )
        }
    };
    let open_edit_category = move |_| {
        open(
            "edit-category",
            OpenOptions::new()
                .admin(true)
                .title("category.edit_title")
                .title_aria_element_id("edit-category-title")
                .panels(vec![
                    PanelDescriptor::new("general", "General"),
                    PanelDescriptor::new("security", "Security"),
                    PanelDescriptor::new("settings", "Settings"),
                ])
                .model(json!({ "id": 4, "name": "Staff" })),
        )
    };

    view! {
        <div class="forum-toolbar">
            <button class="button" on:click=open_login>"Log In"</button>
            <button class="button" on:click=open_flag>"Flag"</button>
            <button class="button" on:click=open_edit_category>"Edit Category"</button>
        </div>
    }
}
