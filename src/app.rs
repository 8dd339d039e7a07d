//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] shared with every
//! page.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::config::{SiteConfig, load_faculty};
use crate::core::error::ConfigError;
use crate::models::FacultyMember;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`. Both values are decoded once at startup
/// and never change.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Site details, content host and counters.
    pub config: StoredValue<SiteConfig>,
    /// Faculty and staff directory.
    pub faculty: StoredValue<Vec<FacultyMember>>,
}

impl AppContext {
    /// Decode the embedded configuration and apply its log level.
    pub fn load() -> Result<Self, ConfigError> {
        let config = SiteConfig::load()?;
        let faculty = load_faculty()?;

        log::set_max_level(config.log.level_filter());
        log::info!(
            "{} (content: {}/{}@{}, {} faculty entries)",
            config.site.short_name,
            config.content.owner,
            config.content.repo,
            config.content.branch,
            faculty.len()
        );

        Ok(Self {
            config: StoredValue::new(config),
            faculty: StoredValue::new(faculty),
        })
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Decodes the configuration and provides the global AppContext
/// - Wraps the app in an ErrorBoundary so a broken config shows a message
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 2rem;
                    background: #f8fafc;
                    color: #1e293b;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #b91c1c; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #64748b; margin-bottom: 2rem;">
                            "The site could not start. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #ffffff;
                            border: 1px solid #e2e8f0;
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #475569;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #b91c1c;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #1d4ed8;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 6px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {|| {
                AppContext::load()
                    .inspect_err(|e| log::error!("configuration error: {}", e))
                    .map(|ctx| {
                        provide_context(ctx);
                        view! { <AppRouter /> }
                    })
            }}
        </ErrorBoundary>
    }
}
