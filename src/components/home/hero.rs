use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/home/home.module.css");

/// Full-width banner with the school name and primary actions.
#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (name, tagline) = ctx
        .config
        .with_value(|c| (c.site.name.clone(), c.site.tagline.clone()));

    view! {
        <section class=css::hero>
            <div class=css::heroOverlay></div>
            <div class=css::heroContent>
                <h1 class=css::heroTitle>{name}</h1>
                <p class=css::heroTagline>
                    {tagline}
                    ". Join our community where excellence in education meets a nurturing environment for growth and discovery."
                </p>
                <div class=css::heroActions>
                    <a class=css::primaryButton href=AppRoute::About.to_hash()>
                        "About Us"
                        <Icon icon=ic::CHEVRON_RIGHT />
                    </a>
                    <a class=css::secondaryButton href=AppRoute::NoticeBoard.to_hash()>
                        "Latest Notices"
                    </a>
                </div>
            </div>
        </section>
    }
}
