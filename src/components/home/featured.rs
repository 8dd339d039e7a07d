use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/home/home.module.css");

struct Feature {
    title: &'static str,
    description: &'static str,
    icon: IconData,
    link_text: &'static str,
    route: AppRoute,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Notice Board",
        description: "Don't miss out on our exciting events, workshops, seminars, and extracurricular activities happening on campus.",
        icon: ic::CALENDAR,
        link_text: "Notice Board",
        route: AppRoute::NoticeBoard,
    },
    Feature {
        title: "Campus Gallery",
        description: "Take a visual tour of our modern facilities, vibrant campus life, and the inspiring learning environment.",
        icon: ic::FILE_IMAGE,
        link_text: "View Gallery",
        route: AppRoute::Gallery,
    },
    Feature {
        title: "Faculty & Staff",
        description: "Meet our dedicated educators and administrative team committed to student success and excellence.",
        icon: ic::USERS,
        link_text: "Meet Our Team",
        route: AppRoute::Faculty,
    },
    Feature {
        title: "Achievements",
        description: "Celebrate the accomplishments of our students in academics, sports, and cultural activities.",
        icon: ic::TROPHY,
        link_text: "See Achievements",
        route: AppRoute::Achievements,
    },
];

/// Cards linking to the main sections of the site.
#[component]
pub fn FeaturedGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let heading = ctx
        .config
        .with_value(|c| format!("Discover {}", c.site.name));

    view! {
        <section class=css::section>
            <div class=css::sectionHeader>
                <h2 class=css::sectionTitle>{heading}</h2>
                <p class=css::sectionLead>
                    "Explore everything our school has to offer through these featured sections."
                </p>
            </div>
            <div class=css::featuredGrid>
                {FEATURES
                    .iter()
                    .map(|feature| view! {
                        <article class=css::featuredCard>
                            <span class=css::featuredIcon><Icon icon=feature.icon /></span>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                            <a class=css::featuredLink href=feature.route.to_hash()>
                                {feature.link_text}
                                <Icon icon=ic::CHEVRON_RIGHT />
                            </a>
                        </article>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
