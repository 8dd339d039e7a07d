use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::home::Stats;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/pages/pages.module.css");

const MISSION: &str = "To provide a transformative educational experience that nurtures \
    intellectual curiosity, fosters personal growth, and empowers students to become ethical, \
    engaged citizens who contribute positively to society.";

const VISION: &str = "To be a leading educational institution recognized for academic \
    excellence, innovative teaching and whole-child development, where each student discovers \
    their unique potential.";

const CORE_VALUES: &[(&str, &str, IconData)] = &[
    (
        "Excellence",
        "We pursue the highest standards in all areas of education and school life.",
        ic::STAR,
    ),
    (
        "Integrity",
        "We act with honesty, ethics, and responsibility in all our interactions.",
        ic::HEART,
    ),
    (
        "Respect",
        "We value every individual and celebrate diversity in our community.",
        ic::USERS,
    ),
    (
        "Innovation",
        "We embrace creativity and adaptability in teaching and learning.",
        ic::LIGHTBULB,
    ),
];

/// Mission, vision, values and counters.
#[component]
pub fn AboutPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let (name, established) = ctx
        .config
        .with_value(|c| (c.site.name.clone(), c.site.established));

    view! {
        <section class=css::banner>
            <h1>{format!("About {}", name)}</h1>
            <p>{format!("A tradition of excellence in education since {}.", established)}</p>
        </section>

        <section class=css::twoColumn>
            <article class=css::panel>
                <span class=css::panelIcon><Icon icon=ic::TARGET /></span>
                <h2>"Our Mission"</h2>
                <p>{MISSION}</p>
            </article>
            <article class=css::panel>
                <span class=css::panelIcon><Icon icon=ic::EYE /></span>
                <h2>"Our Vision"</h2>
                <p>{VISION}</p>
            </article>
        </section>

        <section class=css::values>
            <h2>"Our Core Values"</h2>
            <div class=css::valueGrid>
                {CORE_VALUES
                    .iter()
                    .map(|(title, text, icon)| view! {
                        <div class=css::value>
                            <span class=css::panelIcon><Icon icon=*icon /></span>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
        </section>

        <Stats />
    }
}
