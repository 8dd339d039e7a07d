//! Building blocks of listing cards.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{ItemDate, MediaRef};
use crate::utils::{download_file, format_optional_size};

stylance::import_crate_style!(css, "src/components/listing/listing.module.css");

/// Image with a placeholder when it fails to load.
#[component]
pub fn CoverImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional)] full: bool,
) -> impl IntoView {
    let (broken, set_broken) = signal(false);
    let class = if full { css::imageFull } else { css::image };

    view! {
        <Show
            when=move || !broken.get()
            fallback=move || view! {
                <div class=format!("{} {}", class, css::imageBroken) aria-label="Image unavailable">
                    <Icon icon=ic::FILE_IMAGE />
                </div>
            }
        >
            <img
                class=class
                src=src.clone()
                alt=alt.clone()
                loading="lazy"
                on:error=move |_| set_broken.set(true)
            />
        </Show>
    }
}

/// Calendar icon and date; undated records say so.
#[component]
pub fn DateLabel(date: ItemDate) -> impl IntoView {
    let text = if date.raw.is_empty() {
        "Undated".to_string()
    } else {
        date.display_long()
    };

    view! {
        <span class=css::meta>
            <Icon icon=ic::CALENDAR />
            <time datetime=date.parsed.map(|d| d.to_string())>{text}</time>
        </span>
    }
}

/// Attachment rows with type icon, size and download action.
#[component]
pub fn AttachmentList(media: Vec<MediaRef>) -> impl IntoView {
    if media.is_empty() {
        return view! { <p class=css::muted>"No attachments."</p> }.into_any();
    }

    view! {
        <ul class=css::attachments>
            {media
                .into_iter()
                .map(|file| {
                    let MediaRef { name, url, kind, size_bytes, .. } = file;
                    let label = format!("Download {}", name);
                    let on_download = {
                        let (url, name) = (url.clone(), name.clone());
                        move |_| {
                            let (url, name) = (url.clone(), name.clone());
                            spawn_local(async move { download_file(&url, &name).await });
                        }
                    };
                    view! {
                        <li class=css::attachment>
                            <span class=css::attachmentIcon><Icon icon=ic::file_icon(kind) /></span>
                            <a class=css::attachmentName href=url target="_blank" rel="noopener">
                                {name}
                            </a>
                            <span class=css::muted>{format_optional_size(size_bytes)}</span>
                            <button
                                class=css::downloadButton
                                on:click=on_download
                                aria-label=label.clone()
                                title=label
                            >
                                <Icon icon=ic::DOWNLOAD />
                                "Download"
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
