//! Site header with navigation.
//!
//! Desktop shows the links inline; narrow viewports collapse them behind a
//! menu button.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::MOBILE_BREAKPOINT;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn Header(route: Memo<AppRoute>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let short_name = ctx.config.with_value(|c| c.site.short_name.clone());

    let is_mobile = use_media_query(MOBILE_BREAKPOINT);
    let (menu_open, set_menu_open) = signal(false);

    // Close the menu after navigating
    Effect::new(move |_| {
        route.track();
        set_menu_open.set(false);
    });

    let show_links = move || !is_mobile.get() || menu_open.get();

    view! {
        <header class=css::header>
            <div class=css::headerInner>
                <a class=css::brand href=AppRoute::Home.to_hash()>
                    <span class=css::brandIcon><Icon icon=ic::SCHOOL /></span>
                    <span>{short_name}</span>
                </a>

                <Show when=move || is_mobile.get()>
                    <button
                        class=css::menuButton
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu_open.get().to_string()
                    >
                        {move || {
                            let icon = if menu_open.get() { ic::CLOSE } else { ic::MENU };
                            view! { <Icon icon=icon /> }
                        }}
                    </button>
                </Show>

                <Show when=show_links>
                    <nav class=move || {
                        if is_mobile.get() {
                            format!("{} {}", css::nav, css::navMobile)
                        } else {
                            css::nav.to_string()
                        }
                    }>
                        {AppRoute::NAV
                            .iter()
                            .map(|&target| {
                                let class = move || {
                                    if route.get() == target {
                                        format!("{} {}", css::navLink, css::navLinkActive)
                                    } else {
                                        css::navLink.to_string()
                                    }
                                };
                                view! {
                                    <a class=class href=target.to_hash()>
                                        {target.nav_label()}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </nav>
                </Show>
            </div>
        </header>
    }
}
