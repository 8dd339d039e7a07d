//! Detail overlay.
//!
//! Closes on Escape, on a click outside the panel, or via the close button.
//! Page scrolling is locked while open and restored to its previous value
//! when the modal unmounts.

use leptos::ev;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::utils::dom::{lock_body_scroll, unlock_body_scroll};

stylance::import_crate_style!(css, "src/components/common/common.module.css");

#[component]
pub fn Modal(
    /// Heading shown in the panel header
    #[prop(into)]
    title: String,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let previous_overflow = lock_body_scroll();

    let keydown = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    on_cleanup(move || {
        keydown.remove();
        if let Some(previous) = previous_overflow {
            unlock_body_scroll(&previous);
        }
    });

    view! {
        <div class=css::overlay on:click=move |_| on_close.run(()) role="presentation">
            <div
                class=css::modal
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <header class=css::modalHeader>
                    <h2 class=css::modalTitle>{title}</h2>
                    <button
                        class=css::iconButton
                        on:click=move |_| on_close.run(())
                        aria-label="Close"
                        title="Close (Esc)"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>
                <div class=css::modalBody>{children()}</div>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, KeyboardEvent, KeyboardEventInit};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> HtmlElement {
        let el = document()
            .create_element("div")
            .unwrap()
            .unchecked_into::<HtmlElement>();
        document().body().unwrap().append_child(&el).unwrap();
        el
    }

    fn overflow() -> String {
        document()
            .body()
            .unwrap()
            .style()
            .get_property_value("overflow")
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn test_escape_closes_and_unmount_restores_scroll() {
        document()
            .body()
            .unwrap()
            .style()
            .set_property("overflow", "scroll")
            .unwrap();

        let closed = RwSignal::new(false);
        let handle = mount_to(container(), move || {
            view! {
                <Modal title="Exam Schedule" on_close=Callback::new(move |_| closed.set(true))>
                    <p>"Room 4"</p>
                </Modal>
            }
        });
        assert_eq!(overflow(), "hidden");

        let init = KeyboardEventInit::new();
        init.set_key("Enter");
        let enter = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        window().dispatch_event(&enter).unwrap();
        assert!(!closed.get_untracked());

        init.set_key("Escape");
        let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        window().dispatch_event(&escape).unwrap();
        assert!(closed.get_untracked());

        drop(handle);
        assert_eq!(overflow(), "scroll");
    }
}
