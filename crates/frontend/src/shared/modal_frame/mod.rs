use leptos::ev;
use leptos::prelude::*;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use crate::shared::modal_host::ModalHost;

/// Modal frame container (overlay + surface + header + tab bar).
///
/// Everything it shows comes from [`ModalHost`], so the frame follows the
/// host when a content controller retitles the dialog or switches tabs.
#[component]
pub fn ModalFrame(
    host: ModalHost,
    /// Called when the modal should close (overlay click, close button).
    on_close: Callback<()>,
    /// Close when clicking on the overlay (default: true).
    #[prop(optional)]
    close_on_overlay: Option<bool>,
    /// z-index for overlay stacking (default: 1000).
    #[prop(optional)]
    z_index: Option<i32>,
    children: Children,
) -> impl IntoView {
    let close_on_overlay = close_on_overlay.unwrap_or(true);
    let z_index = z_index.unwrap_or(1000);
    let overlay_mouse_down = RwSignal::new(false);

    let is_direct_overlay_event = |ev: &ev::MouseEvent| -> bool {
        match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        }
    };

    // Close only if both press and release happened on the overlay itself,
    // so selecting text inside the modal and releasing outside keeps it open.
    let handle_overlay_mouse_down = move |ev: ev::MouseEvent| {
        overlay_mouse_down.set(is_direct_overlay_event(&ev));
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let should_close =
            close_on_overlay && overlay_mouse_down.get() && is_direct_overlay_event(&ev);
        overlay_mouse_down.set(false);
        if should_close {
            // Next tick: the overlay is removed while its own click is dispatched.
            spawn_local(async move {
                TimeoutFuture::new(0).await;
                on_close.run(());
            });
        }
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| on_close.run(());

    view! {
        <div
            class="modal-overlay"
            style=format!("z-index: {z_index};")
            on:mousedown=handle_overlay_mouse_down
            on:click=handle_overlay_click
        >
            <div
                class=move || format!("modal {}", host.modal_class.get())
                role="dialog"
                aria-labelledby=move || host.title_aria_element_id.get()
                on:click=stop_propagation
            >
                <div class="modal-header">
                    {move || host.title.get().map(|title| view! {
                        <h3 class="modal-title" id=move || host.title_aria_element_id.get()>
                            {title}
                        </h3>
                    })}
                    <button class="button button--icon modal-close" on:click=handle_close>
                        "×"
                    </button>
                </div>
                <Show when=move || host.has_tabs()>
                    <ModalTabs host=host />
                </Show>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn ModalTabs(host: ModalHost) -> impl IntoView {
    view! {
        <ul class="modal-tabs">
            <For
                each=move || host.panels.get()
                key=|panel| panel.id.clone()
                children=move |panel| {
                    let id = panel.id.clone();
                    let is_selected = move || {
                        host.selected_panel.with(|p| p.as_ref().is_some_and(|p| p.id == id))
                    };
                    let title = panel.title.clone();
                    view! {
                        <li
                            class=move || if is_selected() { "modal-tab is-active" } else { "modal-tab" }
                            on:click=move |_| {
                                host.select_panel(panel.clone());
                            }
                        >
                            {title}
                        </li>
                    }
                }
            />
        </ul>
    }
}
