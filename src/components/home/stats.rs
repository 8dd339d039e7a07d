//! Animated stat counters.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{StatCounter, counter};

stylance::import_crate_style!(css, "src/components/home/home.module.css");

/// Counter value `elapsed_ms` into the animation, eased out cubically.
fn counter_value(target: u32, elapsed_ms: u32, duration_ms: u32) -> u32 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let t = f64::from(elapsed_ms) / f64::from(duration_ms);
    let eased = 1.0 - (1.0 - t).powi(3);
    (f64::from(target) * eased).round() as u32
}

/// Row of counters from the site configuration.
#[component]
pub fn Stats() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let stats = ctx.config.with_value(|c| c.stats.clone());

    view! {
        <section class=css::stats>
            {stats
                .into_iter()
                .map(|stat| view! { <AnimatedCounter stat=stat /> })
                .collect_view()}
        </section>
    }
}

#[component]
fn AnimatedCounter(stat: StatCounter) -> impl IntoView {
    let value = RwSignal::new(0u32);
    let target = stat.value;

    spawn_local(async move {
        let mut elapsed = 0;
        while elapsed < counter::DURATION_MS {
            TimeoutFuture::new(counter::FRAME_MS).await;
            elapsed += counter::FRAME_MS;
            // Stop once the counter has been unmounted
            if value
                .try_set(counter_value(target, elapsed, counter::DURATION_MS))
                .is_some()
            {
                break;
            }
        }
    });

    let suffix = stat.suffix.clone();

    view! {
        <div class=css::stat>
            <span class=css::statIcon><Icon icon=ic::stat_icon(stat.icon) /></span>
            <span class=css::statValue>{move || format!("{}{}", value.get(), suffix)}</span>
            <span class=css::statLabel>{stat.label}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_value_eases_out() {
        assert_eq!(counter_value(100, 0, 2000), 0);
        assert_eq!(counter_value(100, 2000, 2000), 100);
        assert_eq!(counter_value(100, 5000, 2000), 100);
        // Halfway through time is 87.5% of the way there
        assert_eq!(counter_value(100, 1000, 2000), 88);
        assert_eq!(counter_value(63, 0, 0), 63);
    }

    #[test]
    fn test_counter_value_is_monotonic() {
        let values: Vec<u32> = (0..=2000)
            .step_by(16)
            .map(|ms| counter_value(175, ms, 2000))
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }
}
