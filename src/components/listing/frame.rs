//! Page scaffold shared by the listing pages.

use leptos::prelude::*;

use super::hook::ListingData;
use crate::components::common::{EmptyState, LoadFailed, Loading};

stylance::import_crate_style!(css, "src/components/listing/listing.module.css");

/// Title banner plus the loading, failed and empty states.
///
/// `children` renders only once records are loaded; it is responsible for
/// the "nothing matches the filters" case itself.
#[component]
pub fn ListingFrame(
    data: ListingData,
    title: &'static str,
    lead: &'static str,
    children: ChildrenFn,
) -> impl IntoView {
    let noun = data.kind.noun();

    view! {
        <section class=css::page>
            <header class=css::pageHeader>
                <h1 class=css::pageTitle>{title}</h1>
                <p class=css::pageLead>{lead}</p>
            </header>
            {move || {
                if data.is_loading() {
                    view! { <Loading noun=noun /> }.into_any()
                } else if let Some(message) = data.error() {
                    view! { <LoadFailed message=message on_retry=data.reload /> }.into_any()
                } else if data.items.with(Vec::is_empty) {
                    view! { <EmptyState message=format!("No {} available yet.", noun) /> }
                        .into_any()
                } else {
                    children().into_any()
                }
            }}
        </section>
    }
}

/// Shown when filters exclude every loaded record.
#[component]
pub fn NoMatches(data: ListingData) -> impl IntoView {
    view! {
        <Show when=move || data.visible.with(Vec::is_empty)>
            <EmptyState message=format!("No {} match your filters.", data.kind.noun()) />
        </Show>
    }
}
