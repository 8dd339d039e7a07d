use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class=css::notFound>
            <h1>"404"</h1>
            <p>"The page you are looking for does not exist or has been moved."</p>
            <a class=css::homeLink href=AppRoute::Home.to_hash()>
                <Icon icon=ic::ARROW_LEFT />
                "Back to Home"
            </a>
        </section>
    }
}
