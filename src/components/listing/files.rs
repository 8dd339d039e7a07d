//! Downloadable uploads.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::card::{AttachmentList, DateLabel};
use super::frame::{ListingFrame, NoMatches};
use super::hook::use_listing;
use crate::components::common::Modal;
use crate::components::icons as ic;
use crate::config::display::DESCRIPTION_PREVIEW_LEN;
use crate::core::ListingKind;
use crate::models::ParsedItem;
use crate::utils::truncate;

stylance::import_crate_style!(css, "src/components/listing/listing.module.css");

#[component]
pub fn FilesPage() -> impl IntoView {
    let data = use_listing(ListingKind::Files);

    view! {
        <ListingFrame
            data=data
            title="Files & Uploads"
            lead="Forms, circulars, results and other documents."
        >
            <div class=css::list>
                <For
                    each=move || data.visible.get()
                    key=|item| item.id.clone()
                    children=move |item: ParsedItem| {
                        let id = item.id.clone();
                        let preview = truncate(&item.description, DESCRIPTION_PREVIEW_LEN);
                        let has_preview = !preview.is_empty();
                        let count = match item.media.len() {
                            1 => "1 file".to_string(),
                            n => format!("{} files", n),
                        };
                        view! {
                            <article class=css::card>
                                <div class=css::cardBody>
                                    <div class=css::cardMeta>
                                        <DateLabel date=item.date.clone() />
                                        <span class=css::meta>
                                            <Icon icon=ic::FOLDER />
                                            {count}
                                        </span>
                                    </div>
                                    <h3 class=css::cardTitle>
                                        <button
                                            class=css::titleButton
                                            on:click=move |_| data.select(id.clone())
                                        >
                                            {item.title.clone()}
                                        </button>
                                    </h3>
                                    <Show when=move || has_preview>
                                        <p class=css::cardText>{preview.clone()}</p>
                                    </Show>
                                    <AttachmentList media=item.media.clone() />
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
                .map(|item| view! {
                    <Modal title=item.title.clone() on_close=Callback::new(move |_| data.close())>
                        <div class=css::cardMeta>
                            <DateLabel date=item.date.clone() />
                        </div>
                        <p class=css::prose>{item.description.clone()}</p>
                        <AttachmentList media=item.media.clone() />
                    </Modal>
                })
        }}
    }
}
