//! Shared listing state hook.
//!
//! Owns the load lifecycle of one listing page: starts the pipeline on
//! mount, aborts in-flight requests when the page unmounts or a reload
//! supersedes them, and derives the filtered view from [`DisplayState`].

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::AbortController;

use crate::app::AppContext;
use crate::core::{
    DisplayState, HttpSource, ListingKind, LoadGuard, LoadState, category_options, load_listing,
};
use crate::models::ParsedItem;

/// All signals a listing page renders from.
#[derive(Clone, Copy)]
pub struct ListingData {
    pub kind: ListingKind,
    /// Load lifecycle
    pub state: RwSignal<LoadState<Vec<ParsedItem>>>,
    /// Loaded records in listing order (empty until loaded)
    pub items: Memo<Vec<ParsedItem>>,
    /// `"All"` plus the categories present in `items`
    pub categories: Memo<Vec<String>>,
    /// Category, search text and modal selection
    pub display: RwSignal<DisplayState>,
    /// Records passing the current filters
    pub visible: Memo<Vec<ParsedItem>>,
    /// Record shown in the modal
    pub selected: Memo<Option<ParsedItem>>,
    /// Start a fresh load (retry / refresh)
    pub reload: Callback<()>,
}

impl ListingData {
    pub fn is_loading(&self) -> bool {
        self.state.with(|s| matches!(s, LoadState::Idle | LoadState::Loading))
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }

    pub fn set_category(&self, category: String) {
        self.display.update(|d| d.category = category);
    }

    pub fn set_query(&self, query: String) {
        self.display.update(|d| d.query = query);
    }

    pub fn select(&self, id: String) {
        self.display.update(|d| d.select(id));
    }

    pub fn close(&self) {
        self.display.update(DisplayState::close);
    }
}

/// Hook that loads `kind` and exposes its view state.
///
/// Call once per page component.
pub fn use_listing(kind: ListingKind) -> ListingData {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let state = RwSignal::new(LoadState::Idle);
    let display = RwSignal::new(DisplayState::default());

    // Controller of the load in flight, if any
    let controller = StoredValue::new_local(None::<AbortController>);
    // Late results of a superseded load are ignored
    let guard = StoredValue::new(LoadGuard::default());

    let abort_pending = move || {
        if let Some(previous) = controller.try_update_value(Option::take).flatten() {
            previous.abort();
        }
    };

    let reload = Callback::new(move |_: ()| {
        abort_pending();

        let abort = AbortController::new().ok();
        let signal = abort.as_ref().map(AbortController::signal);
        controller.set_value(abort);

        let Some(ticket) = guard.try_update_value(LoadGuard::begin) else {
            return;
        };
        state.update(LoadState::start);

        let host = ctx.config.with_value(|c| c.content.clone());
        spawn_local(async move {
            let mut source = HttpSource::new(host);
            if let Some(signal) = signal {
                source = source.with_abort(signal);
            }
            let result = load_listing(&source, kind).await;

            if guard.try_with_value(|g| g.is_current(ticket)) != Some(true) {
                log::debug!("discarding stale {} result", kind.noun());
                return;
            }
            state.try_update(|s| s.finish(result));
        });
    });

    reload.run(());
    on_cleanup(abort_pending);

    let items = Memo::new(move |_| state.with(|s| s.loaded().cloned().unwrap_or_default()));
    let categories = Memo::new(move |_| items.with(|items| category_options(items)));

    // A finished reload may drop the active category
    Effect::new(move |_| {
        state.with(|s| display.maybe_update(|d| d.reconcile_loaded(s)));
    });

    let visible = Memo::new(move |_| {
        display.with(|d| items.with(|items| d.visible(items, kind.sort_order())))
    });
    let selected = Memo::new(move |_| {
        display.with(|d| items.with(|items| d.selected_in(items).cloned()))
    });

    ListingData {
        kind,
        state,
        items,
        categories,
        display,
        visible,
        selected,
        reload,
    }
}
