//! Placeholders for listings that are loading, failed or empty.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/common/common.module.css");

#[component]
pub fn Loading(noun: &'static str) -> impl IntoView {
    view! {
        <div class=css::status role="status" aria-live="polite">
            <span class=css::spinner><Icon icon=ic::LOADER /></span>
            <p>{format!("Loading {}...", noun)}</p>
        </div>
    }
}

/// Error message with a retry button.
#[component]
pub fn LoadFailed(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class=format!("{} {}", css::status, css::statusError) role="alert">
            <span class=css::statusIcon><Icon icon=ic::ALERT /></span>
            <p>{message}</p>
            <button class=css::retryButton on:click=move |_| on_retry.run(())>
                <Icon icon=ic::REFRESH />
                "Try again"
            </button>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class=css::status>
            <span class=css::statusIcon><Icon icon=ic::FOLDER /></span>
            <p>{message}</p>
        </div>
    }
}
