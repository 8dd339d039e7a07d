//! Application router component.
//!
//! Handles URL-based routing with hash history so the site works from any
//! static host. Uses native hashchange events instead of leptos_router.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: the page is derived from `#/path`
//! - **Layout never re-renders on navigation**: header and footer stay mounted
//! - **hashchange events**: Browser back/forward buttons work automatically

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::home::HomePage;
use crate::components::layout::{Footer, Header};
use crate::components::listing::{AchievementsPage, FilesPage, GalleryPage, NoticeBoardPage};
use crate::components::pages::{AboutPage, FacultyPage, NotFoundPage};
use crate::models::AppRoute;
use crate::utils::dom::{scroll_to_top, set_document_title};

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Sets up hash-based routing with the following structure:
/// - `#/` → Home
/// - `#/<page>` → one of the site pages
/// - anything else → not-found page
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    // Title and scroll position follow the page
    Effect::new(move |_| {
        let current = route_memo.get();
        let title = ctx.config.with_value(|c| c.page_title(current.page_title()));
        set_document_title(&title);
        scroll_to_top();
        log::debug!("navigated to {:?}", current);
    });

    view! {
        <div class=css::layout>
            <Header route=route_memo />
            <main class=css::main>
                {move || match route_memo.get() {
                    AppRoute::Home => view! { <HomePage /> }.into_any(),
                    AppRoute::About => view! { <AboutPage /> }.into_any(),
                    AppRoute::Gallery => view! { <GalleryPage /> }.into_any(),
                    AppRoute::NoticeBoard => view! { <NoticeBoardPage /> }.into_any(),
                    AppRoute::Faculty => view! { <FacultyPage /> }.into_any(),
                    AppRoute::Achievements => view! { <AchievementsPage /> }.into_any(),
                    AppRoute::Files => view! { <FilesPage /> }.into_any(),
                    AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
