//! Category and search controls.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/common/common.module.css");

/// One button per category; the active one is highlighted.
#[component]
pub fn CategoryTabs(
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] active: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class=css::tabs role="tablist">
            <For
                each=move || options.get()
                key=|option| option.clone()
                children=move |option| {
                    let value = option.clone();
                    let is_active = Signal::derive({
                        let option = option.clone();
                        move || active.with(|a| *a == option)
                    });
                    view! {
                        <button
                            role="tab"
                            class=move || {
                                if is_active.get() {
                                    format!("{} {}", css::tab, css::tabActive)
                                } else {
                                    css::tab.to_string()
                                }
                            }
                            aria-selected=move || is_active.get().to_string()
                            on:click=move |_| on_change.run(value.clone())
                        >
                            {option}
                        </button>
                    }
                }
            />
        </div>
    }
}

/// Drop-down variant of [`CategoryTabs`] for long category lists.
#[component]
pub fn CategorySelect(
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] active: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional)] label: &'static str,
) -> impl IntoView {
    view! {
        <label class=css::select>
            <span class=css::srOnly>{label}</span>
            <select
                prop:value=move || active.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|option| {
                            let selected = active.with(|a| *a == option);
                            let value = option.clone();
                            view! {
                                <option value=value selected=selected>
                                    {option}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

/// Text input bound to a search query.
#[component]
pub fn SearchBox(
    #[prop(into)] query: Signal<String>,
    on_input: Callback<String>,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class=css::search>
            <span class=css::searchIcon><Icon icon=ic::SEARCH /></span>
            <input
                type="search"
                placeholder=placeholder
                aria-label=placeholder
                prop:value=move || query.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || query.with(|q| !q.is_empty())>
                <button
                    class=css::iconButton
                    on:click=move |_| on_input.run(String::new())
                    aria-label="Clear search"
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </Show>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use leptos::mount::mount_to;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_select_renders_each_category() {
        let el = document()
            .create_element("div")
            .unwrap()
            .unchecked_into::<HtmlElement>();
        document().body().unwrap().append_child(&el).unwrap();

        let _handle = mount_to(el.clone(), move || {
            view! {
                <CategorySelect
                    options=Signal::derive(|| vec!["All".to_string(), "Exams".to_string()])
                    active=Signal::derive(|| "Exams".to_string())
                    on_change=Callback::new(|_: String| {})
                />
            }
        });

        let html = el.inner_html();
        assert!(html.contains(r#"value="All""#));
        assert!(html.contains(r#"value="Exams""#));
        assert!(html.contains("Exams</option>"));
    }
}
