//! Landing page.

mod featured;
mod hero;
mod stats;

use leptos::prelude::*;

use featured::FeaturedGrid;
use hero::Hero;
pub use stats::Stats;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Hero />
        <FeaturedGrid />
        <Stats />
    }
}
