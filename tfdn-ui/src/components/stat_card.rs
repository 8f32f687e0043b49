//! Stat Card Component
//!
//! Impact statistic whose number counts up from zero when the card mounts.

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::api::types::Stat;
use crate::theme::{format_thousands, COUNTER_DURATION_MS, COUNTER_STAGGER_MS};

/// Roughly one frame at 60 Hz
const FRAME_MS: u32 = 16;

/// Cubic ease-out: fast start, gentle landing
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Value shown `elapsed_ms` into a count-up from `start` to `end`
pub fn count_up_value(start: u64, end: u64, elapsed_ms: f64, duration_ms: f64) -> u64 {
    if duration_ms <= 0.0 {
        return end;
    }
    let eased = ease_out_cubic(elapsed_ms / duration_ms);
    let value = start as f64 + (end as f64 - start as f64) * eased;
    value.round().max(0.0) as u64
}

fn icon_for(name: &str) -> &'static str {
    match name {
        "school" => "🎓",
        "public" => "🌍",
        "people" => "👥",
        "trending_up" => "📈",
        _ => "⭐",
    }
}

/// Step the animation until done or until the card is gone
fn animate(shown: RwSignal<u64>, end: u64, started_at: f64) {
    let elapsed = js_sys::Date::now() - started_at;
    let value = count_up_value(0, end, elapsed, COUNTER_DURATION_MS);

    // Signal disposed: the card unmounted
    if shown.try_set(value).is_some() {
        return;
    }

    if elapsed < COUNTER_DURATION_MS {
        Timeout::new(FRAME_MS, move || animate(shown, end, started_at)).forget();
    }
}

#[component]
pub fn StatCard(
    stat: Stat,
    /// Position in the row, staggers the start
    #[prop(default = 0)]
    index: usize,
) -> impl IntoView {
    let shown = create_rw_signal(0u64);
    let end = stat.value;
    let delay = COUNTER_STAGGER_MS * index as u32;

    Timeout::new(delay, move || animate(shown, end, js_sys::Date::now())).forget();

    let suffix = stat.suffix.clone();

    view! {
        <div class="bg-white rounded-xl shadow-md hover:shadow-xl transition-shadow p-6 text-center h-full">
            <div class="text-4xl mb-3">{icon_for(&stat.icon)}</div>
            <div class="text-4xl font-bold mb-1 bg-gradient-to-br from-primary-900 to-primary-500 bg-clip-text text-transparent">
                {move || format!("{}{}", format_thousands(shown.get()), suffix)}
            </div>
            <div class="text-gray-600 font-medium">{stat.label}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(-0.5), 0.0);
        assert_eq!(ease_out_cubic(3.0), 1.0);
        assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_ease_out_is_monotonic() {
        let mut last = 0.0;
        for step in 0..=100 {
            let eased = ease_out_cubic(step as f64 / 100.0);
            assert!(eased >= last);
            last = eased;
        }
    }

    #[test]
    fn test_count_up_value() {
        assert_eq!(count_up_value(0, 5000, 0.0, 2000.0), 0);
        assert_eq!(count_up_value(0, 5000, 1000.0, 2000.0), 4375);
        assert_eq!(count_up_value(0, 5000, 2000.0, 2000.0), 5000);
        assert_eq!(count_up_value(0, 5000, 9000.0, 2000.0), 5000);
        assert_eq!(count_up_value(0, 78, 50.0, 0.0), 78);
    }

    #[test]
    fn test_icon_fallback() {
        assert_eq!(icon_for("school"), "🎓");
        assert_eq!(icon_for("rocket"), "⭐");
    }
}
