//! Achievements and activities.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::card::{CoverImage, DateLabel};
use super::frame::{ListingFrame, NoMatches};
use super::hook::use_listing;
use crate::components::common::{CategoryTabs, Modal};
use crate::components::icons as ic;
use crate::config::display::DESCRIPTION_PREVIEW_LEN;
use crate::core::ListingKind;
use crate::models::ParsedItem;
use crate::utils::truncate;

stylance::import_crate_style!(css, "src/components/listing/listing.module.css");

#[component]
pub fn AchievementsPage() -> impl IntoView {
    let data = use_listing(ListingKind::Achievements);

    let active = Signal::derive(move || data.display.with(|d| d.category.clone()));
    let on_category = Callback::new(move |category| data.set_category(category));

    view! {
        <ListingFrame
            data=data
            title="Achievements & Activities"
            lead="Celebrating our students in academics, sports and culture."
        >
            <CategoryTabs options=data.categories active=active on_change=on_category />
            <div class=css::cardGrid>
                <For
                    each=move || data.visible.get()
                    key=|item| item.id.clone()
                    children=move |item: ParsedItem| {
                        let id = item.id.clone();
                        let cover = item.cover().map(|m| m.url.clone()).unwrap_or_default();
                        let preview = truncate(&item.description, DESCRIPTION_PREVIEW_LEN);
                        view! {
                            <article class=css::card>
                                <CoverImage src=cover alt=item.title.clone() />
                                <div class=css::cardBody>
                                    <div class=css::cardMeta>
                                        <span class=css::badge>
                                            <Icon icon=ic::TROPHY />
                                            {item.category.clone()}
                                        </span>
                                        <DateLabel date=item.date.clone() />
                                    </div>
                                    <h3 class=css::cardTitle>{item.title.clone()}</h3>
                                    <p class=css::cardText>{preview}</p>
                                    <button
                                        class=css::linkButton
                                        on:click=move |_| data.select(id.clone())
                                    >
                                        "Read more"
                                        <Icon icon=ic::CHEVRON_RIGHT />
                                    </button>
                                </div>
                            </article>
                        }
                    }
                />
            </div>
            <NoMatches data=data />
        </ListingFrame>

        {move || {
            data.selected
                .get()
                .map(|item| {
                    let cover = item.cover().map(|m| m.url.clone()).unwrap_or_default();
                    view! {
                        <Modal title=item.title.clone() on_close=Callback::new(move |_| data.close())>
                            <CoverImage src=cover alt=item.title.clone() full=true />
                            <div class=css::cardMeta>
                                <span class=css::badge>{item.category.clone()}</span>
                                <DateLabel date=item.date.clone() />
                            </div>
                            <p class=css::prose>{item.description.clone()}</p>
                        </Modal>
                    }
                })
        }}
    }
}
