//! Photo gallery.

use leptos::prelude::*;

use super::card::CoverImage;
use super::frame::{ListingFrame, NoMatches};
use super::hook::use_listing;
use crate::components::common::{CategoryTabs, Modal};
use crate::core::ListingKind;
use crate::models::ParsedItem;

stylance::import_crate_style!(css, "src/components/listing/listing.module.css");

#[component]
pub fn GalleryPage() -> impl IntoView {
    let data = use_listing(ListingKind::Gallery);

    let active = Signal::derive(move || data.display.with(|d| d.category.clone()));
    let on_category = Callback::new(move |category| data.set_category(category));

    view! {
        <ListingFrame
            data=data
            title="Campus Gallery"
            lead="Moments from school life, events and celebrations."
        >
            <CategoryTabs options=data.categories active=active on_change=on_category />
            <div class=css::galleryGrid>
                <For
                    each=move || data.visible.get()
                    key=|item| item.id.clone()
                    children=move |item: ParsedItem| {
                        let id = item.id.clone();
                        let src = item.cover().map(|m| m.url.clone()).unwrap_or_default();
                        view! {
                            <button
                                class=css::galleryTile
                                on:click=move |_| data.select(id.clone())
                                title=item.title.clone()
                            >
                                <CoverImage src=src alt=item.title.clone() />
                                <span class=css::galleryCaption>{item.category.clone()}</span>
                            </button>
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
                    let src = item.cover().map(|m| m.url.clone()).unwrap_or_default();
                    view! {
                        <Modal title=item.title.clone() on_close=Callback::new(move |_| data.close())>
                            <CoverImage src=src alt=item.title.clone() full=true />
                            <p class=css::muted>{item.category.clone()}</p>
                        </Modal>
                    }
                })
        }}
    }
}
