//! Footer Component
//!
//! Site links, contact details, social links and the newsletter signup.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::state::global::GlobalState;
use crate::theme::{CONTACT_INFO, SOCIAL_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-primary-900 text-white mt-16">
            <div class="container mx-auto px-4 py-12 grid md:grid-cols-4 gap-8">
                <div>
                    <h3 class="text-xl font-bold mb-3">"TFDN Impact Hub"</h3>
                    <p class="text-primary-100 text-sm mb-4">
                        "Transforming lives through education, career development, and social innovation across Africa."
                    </p>
                    <div class="flex space-x-3">
                        {SOCIAL_LINKS.iter().map(|(name, url)| view! {
                            <a
                                href=url.to_string()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-sm text-primary-100 hover:text-white"
                            >
                                {*name}
                            </a>
                        }).collect_view()}
                    </div>
                </div>

                <div>
                    <h4 class="font-semibold mb-3">"Programs"</h4>
                    <ul class="space-y-2 text-sm text-primary-100">
                        <li><A href="/pillars/education" class="hover:text-white">"Education"</A></li>
                        <li><A href="/pillars/career" class="hover:text-white">"Career Development"</A></li>
                        <li><A href="/pillars/social" class="hover:text-white">"Social Innovation"</A></li>
                        <li><A href="/pillars/research" class="hover:text-white">"Research & AI"</A></li>
                    </ul>
                </div>

                <div>
                    <h4 class="font-semibold mb-3">"Resources"</h4>
                    <ul class="space-y-2 text-sm text-primary-100">
                        <li><A href="/research" class="hover:text-white">"Research Reports"</A></li>
                        <li><A href="/ai-career" class="hover:text-white">"Career Assessment"</A></li>
                        <li><A href="/framework" class="hover:text-white">"Strategic Framework"</A></li>
                        <li><A href="/partners" class="hover:text-white">"Partners"</A></li>
                    </ul>
                </div>

                <div>
                    <h4 class="font-semibold mb-3">"Contact"</h4>
                    <p class="text-sm text-primary-100">{format!("Email: {}", CONTACT_INFO.email)}</p>
                    <p class="text-sm text-primary-100">{format!("Phone: {}", CONTACT_INFO.phone)}</p>
                    <p class="text-sm text-primary-100 mb-4">{CONTACT_INFO.address}</p>
                    <NewsletterForm />
                </div>
            </div>

            <div class="border-t border-primary-800 py-4 text-center text-sm text-primary-100">
                "© 2024 Taji Fanisi Development Network. All rights reserved."
            </div>
        </footer>
    }
}

#[component]
fn NewsletterForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (email, set_email) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let address = email.get();

        spawn_local(async move {
            set_submitting.set(true);
            match api::subscribe_newsletter(&address).await {
                Ok(ack) => {
                    state.show_success(&ack.message);
                    set_email.set(String::new());
                }
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="flex space-x-2">
            <input
                type="email"
                required
                placeholder="Your email"
                class="flex-1 px-3 py-2 rounded-lg text-gray-900 text-sm"
                on:input=move |ev| set_email.set(event_target_value(&ev))
                prop:value=move || email.get()
            />
            <button
                type="submit"
                disabled=move || submitting.get()
                class="px-3 py-2 rounded-lg bg-secondary-600 hover:bg-secondary-700 text-sm font-medium disabled:opacity-50"
            >
                "Subscribe"
            </button>
        </form>
    }
}
