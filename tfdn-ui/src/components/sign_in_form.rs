//! Sign-In Form Component
//!
//! Email/password sign-in with a sign-up toggle, plus anonymous sign-in.

use leptos::*;

use crate::state::auth::{AuthState, SignInFlow};
use crate::state::global::GlobalState;
use crate::theme::MIN_PASSWORD_LEN;

#[component]
pub fn SignInForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let auth = use_context::<AuthState>().expect("AuthState not found");

    let (flow, set_flow) = create_signal(SignInFlow::SignIn);
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let flow = flow.get();
        let email = email.get();
        let password = password.get();

        if password_too_short(flow, &password) {
            state.show_error(&format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LEN
            ));
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            if let Err(message) = auth.sign_in(flow, &email, &password).await {
                state.show_error(message);
            }
            set_submitting.set(false);
        });
    };

    let on_anonymous = move |_| {
        spawn_local(async move {
            if let Err(e) = auth.sign_in_anonymous().await {
                web_sys::console::error_1(&format!("Anonymous sign-in failed: {}", e).into());
                state.show_error("Could not sign in anonymously");
            }
        });
    };

    view! {
        <div class="w-full">
            <form on:submit=on_submit class="flex flex-col space-y-4">
                <input
                    type="email"
                    name="email"
                    placeholder="Email"
                    required
                    class="px-4 py-3 rounded-lg border border-gray-300 focus:border-primary-900 focus:outline-none"
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    prop:value=move || email.get()
                />
                <input
                    type="password"
                    name="password"
                    placeholder="Password"
                    required
                    class="px-4 py-3 rounded-lg border border-gray-300 focus:border-primary-900 focus:outline-none"
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                    prop:value=move || password.get()
                />
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="py-3 rounded-lg bg-secondary-600 hover:bg-secondary-700 text-white font-medium disabled:opacity-50"
                >
                    {move || flow.get().label()}
                </button>
                <p class="text-sm text-center text-gray-600">
                    {move || match flow.get() {
                        SignInFlow::SignIn => "Don't have an account? ",
                        SignInFlow::SignUp => "Already have an account? ",
                    }}
                    <button
                        type="button"
                        class="text-primary-900 font-semibold hover:underline"
                        on:click=move |_| set_flow.update(|f| *f = f.toggled())
                    >
                        {move || flow.get().toggled().label()}
                    </button>
                </p>
            </form>

            <div class="flex items-center my-4">
                <div class="flex-1 border-t border-gray-300" />
                <span class="px-3 text-sm text-gray-500">"OR"</span>
                <div class="flex-1 border-t border-gray-300" />
            </div>

            <button
                on:click=on_anonymous
                class="w-full py-3 rounded-lg border border-primary-900 text-primary-900 hover:bg-primary-50"
            >
                "Sign In Anonymously"
            </button>
        </div>
    }
}

/// Sign-up passwords need at least `MIN_PASSWORD_LEN` characters
fn password_too_short(flow: SignInFlow, password: &str) -> bool {
    flow == SignInFlow::SignUp && password.chars().count() < MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_length_counts_characters() {
        // 7 characters, 14 bytes
        assert!(password_too_short(SignInFlow::SignUp, "ééééééé"));
        // 8 characters
        assert!(!password_too_short(SignInFlow::SignUp, "éééééééé"));
        assert!(!password_too_short(SignInFlow::SignIn, "short"));
    }
}
