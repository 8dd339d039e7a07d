//! Notice board.
//!
//! Pinned notices are listed in their own section above the rest. Search,
//! category and refresh apply to both sections.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::card::{AttachmentList, DateLabel};
use super::frame::{ListingFrame, NoMatches};
use super::hook::{ListingData, use_listing};
use crate::components::common::{CategorySelect, Modal, SearchBox};
use crate::components::icons as ic;
use crate::config::display::DESCRIPTION_PREVIEW_LEN;
use crate::core::ListingKind;
use crate::models::ParsedItem;
use crate::utils::truncate;

stylance::import_crate_style!(css, "src/components/listing/listing.module.css");

#[component]
pub fn NoticeBoardPage() -> impl IntoView {
    let data = use_listing(ListingKind::Notices);

    let active = Signal::derive(move || data.display.with(|d| d.category.clone()));
    let query = Signal::derive(move || data.display.with(|d| d.query.clone()));
    let on_category = Callback::new(move |category| data.set_category(category));
    let on_query = Callback::new(move |text| data.set_query(text));

    let pinned = Memo::new(move |_| {
        data.visible
            .with(|items| items.iter().filter(|i| i.pinned).cloned().collect::<Vec<_>>())
    });
    let others = Memo::new(move |_| {
        data.visible
            .with(|items| items.iter().filter(|i| !i.pinned).cloned().collect::<Vec<_>>())
    });

    view! {
        <ListingFrame
            data=data
            title="Notice Board"
            lead="Announcements, exam schedules and upcoming events."
        >
            <div class=css::toolbar>
                <SearchBox query=query on_input=on_query placeholder="Search notices" />
                <CategorySelect
                    options=data.categories
                    active=active
                    on_change=on_category
                    label="Category"
                />
                <button
                    class=css::refreshButton
                    on:click=move |_| data.reload.run(())
                    disabled=move || data.is_loading()
                >
                    <Icon icon=ic::REFRESH />
                    "Refresh"
                </button>
            </div>

            <Show when=move || pinned.with(|p| !p.is_empty())>
                <NoticeSection data=data title="Pinned Notices" items=pinned />
            </Show>
            <Show when=move || others.with(|o| !o.is_empty())>
                <NoticeSection data=data title="All Notices" items=others />
            </Show>
            <NoMatches data=data />
        </ListingFrame>

        {move || {
            data.selected
                .get()
                .map(|item| {
                    let has_media = !item.media.is_empty();
                    view! {
                        <Modal title=item.title.clone() on_close=Callback::new(move |_| data.close())>
                            <div class=css::cardMeta>
                                <span class=css::badge>{item.category.clone()}</span>
                                <DateLabel date=item.date.clone() />
                            </div>
                            <p class=css::prose>{item.description.clone()}</p>
                            <Show when=move || has_media>
                                <AttachmentList media=item.media.clone() />
                            </Show>
                        </Modal>
                    }
                })
        }}
    }
}

#[component]
fn NoticeSection(data: ListingData, title: &'static str, items: Memo<Vec<ParsedItem>>) -> impl IntoView {
    view! {
        <section class=css::noticeSection>
            <h2 class=css::sectionTitle>{title}</h2>
            <div class=css::list>
                <For
                    each=move || items.get()
                    key=|item| item.id.clone()
                    children=move |item: ParsedItem| view! { <NoticeCard data=data item=item /> }
                />
            </div>
        </section>
    }
}

#[component]
fn NoticeCard(data: ListingData, item: ParsedItem) -> impl IntoView {
    let id = item.id.clone();
    let preview = truncate(&item.description, DESCRIPTION_PREVIEW_LEN);
    let class = if item.pinned {
        format!("{} {}", css::card, css::cardPinned)
    } else {
        css::card.to_string()
    };

    view! {
        <article class=class>
            <div class=css::cardBody>
                <div class=css::cardMeta>
                    {item.pinned.then(|| view! {
                        <span class=css::pinned><Icon icon=ic::PIN />"Pinned"</span>
                    })}
                    <span class=css::badge>
                        <Icon icon=ic::BELL />
                        {item.category.clone()}
                    </span>
                    <DateLabel date=item.date.clone() />
                </div>
                <h3 class=css::cardTitle>{item.title.clone()}</h3>
                <p class=css::cardText>{preview}</p>
                <button class=css::linkButton on:click=move |_| data.select(id.clone())>
                    "Read more"
                    <Icon icon=ic::CHEVRON_RIGHT />
                </button>
            </div>
        </article>
    }
}
