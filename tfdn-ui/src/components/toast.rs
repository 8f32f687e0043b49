//! Toast Notifications
//!
//! Form confirmations and sign-in failures, bottom right. Colors come from
//! the site theme so toasts match the score badges and buttons.

use leptos::*;

use crate::state::GlobalState;
use crate::theme::{use_theme, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✓",
            ToastKind::Error => "!",
        }
    }

    /// Background color taken from the theme
    pub fn background(self, theme: &Theme) -> &'static str {
        match self {
            ToastKind::Success => theme.success.main,
            ToastKind::Error => theme.error,
        }
    }
}

/// Renders whichever messages the global state currently holds
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2 max-w-sm" role="status" aria-live="polite">
            {move || state.success.get().map(|message| view! {
                <ToastItem message=message kind=ToastKind::Success on_close=move |_| state.success.set(None) />
            })}
            {move || state.error.get().map(|message| view! {
                <ToastItem message=message kind=ToastKind::Error on_close=move |_| state.error.set(None) />
            })}
        </div>
    }
}

#[component]
fn ToastItem(
    message: String,
    kind: ToastKind,
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let theme = use_theme();

    view! {
        <div
            class="flex items-start gap-3 text-white px-4 py-3 rounded-lg shadow-lg"
            style=format!("background-color: {}", kind.background(&theme))
        >
            <span class="font-bold">{kind.icon()}</span>
            <span class="text-sm flex-1">{message}</span>
            <button
                on:click=move |_| on_close.call(())
                class="text-white/80 hover:text-white text-sm"
                aria-label="Dismiss"
            >
                "✕"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_colors_follow_theme() {
        let theme = Theme::default();
        assert_eq!(ToastKind::Success.background(&theme), theme.success.main);
        assert_eq!(ToastKind::Error.background(&theme), crate::theme::ERROR);
    }
}
