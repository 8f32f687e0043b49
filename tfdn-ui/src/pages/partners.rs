//! Partners Page

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::types::{ContactForm, Partner};
use crate::components::{InlineLoading, Loading};
use crate::state::{log_load_error, GlobalState};

#[component]
pub fn Partners() -> impl IntoView {
    let partners = create_rw_signal(Vec::<Partner>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_partners().await {
                Ok(data) => partners.set(data),
                Err(e) => log_load_error("partners", &e),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="space-y-12">
            <section class="text-center">
                <h1 class="text-4xl font-bold text-primary-900 mb-4">"Our Partners"</h1>
                <p class="text-lg text-gray-600 max-w-3xl mx-auto">
                    "Working together with leading organizations to create sustainable impact across Africa."
                </p>
            </section>

            {move || {
                if loading.get() {
                    view! { <Loading /> }.into_view()
                } else {
                    view! {
                        <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">
                            {partners.get().into_iter().map(|partner| view! {
                                <PartnerCard partner=partner />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}

            <section class="rounded-2xl bg-gradient-to-br from-primary-900 to-primary-500 text-white p-10 text-center">
                <h2 class="text-3xl font-bold mb-4">"Partner With Us"</h2>
                <p class="text-primary-100 max-w-2xl mx-auto mb-6">
                    "We are always looking for strategic partners who share our vision. \
                     Together, we can create lasting impact at scale."
                </p>
                <A
                    href="/get-involved"
                    class="inline-block px-8 py-3 bg-white text-primary-900 rounded-lg font-semibold hover:bg-gray-100"
                >
                    "Become a Partner"
                </A>
            </section>

            <PartnerInquiry />
        </div>
    }
}

/// Prefix the organization, when given, so it survives the plain contact payload
fn compose_inquiry(organization: &str, message: &str) -> String {
    let organization = organization.trim();
    if organization.is_empty() {
        message.trim().to_string()
    } else {
        format!("[{}] {}", organization, message.trim())
    }
}

/// Partnership inquiry, sent through the contact endpoint
#[component]
fn PartnerInquiry() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (organization, set_organization) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = ContactForm {
            name: name.get(),
            email: email.get(),
            message: compose_inquiry(&organization.get(), &message.get()),
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::submit_contact(&form).await {
                Ok(ack) => {
                    state.show_success(&ack.message);
                    for setter in [set_name, set_email, set_organization, set_message] {
                        setter.set(String::new());
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Contact submission failed: {}", e).into());
                    state.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    let input_class = "w-full px-4 py-3 rounded-lg border border-gray-300 focus:border-primary-900 focus:outline-none";

    view! {
        <section class="bg-white rounded-xl shadow-md p-8 max-w-3xl mx-auto">
            <h2 class="text-2xl font-bold text-primary-900 mb-2">"Start a Conversation"</h2>
            <p class="text-gray-600 mb-6">"Tell us about your organization and how you would like to work together."</p>

            <form on:submit=on_submit class="grid md:grid-cols-2 gap-4">
                <input
                    type="text"
                    placeholder="Full Name"
                    required
                    class=input_class
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                    prop:value=move || name.get()
                />
                <input
                    type="email"
                    placeholder="Email"
                    required
                    class=input_class
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                    prop:value=move || email.get()
                />
                <input
                    type="text"
                    placeholder="Organization"
                    class=format!("{} md:col-span-2", input_class)
                    on:input=move |ev| set_organization.set(event_target_value(&ev))
                    prop:value=move || organization.get()
                />
                <textarea
                    rows="4"
                    placeholder="How would you like to partner with TFDN?"
                    required
                    class=format!("{} md:col-span-2", input_class)
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                    prop:value=move || message.get()
                />
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="md:col-span-2 py-3 rounded-lg bg-primary-900 hover:bg-primary-800 text-white \
                           font-semibold disabled:opacity-50 flex items-center justify-center space-x-2"
                >
                    <Show when=move || submitting.get()>
                        <InlineLoading />
                    </Show>
                    <span>"Send Message"</span>
                </button>
            </form>
        </section>
    }
}

#[component]
fn PartnerCard(partner: Partner) -> impl IntoView {
    let initial = partner.name.chars().next().unwrap_or('?').to_string();

    view! {
        <div class="bg-white rounded-xl shadow-md hover:shadow-xl transition-shadow p-6 text-center">
            <div class="w-20 h-20 mx-auto mb-4 rounded-full bg-primary-50 flex items-center justify-center overflow-hidden">
                {if partner.logo_url.is_empty() {
                    view! { <span class="text-2xl font-bold text-primary-900">{initial}</span> }.into_view()
                } else {
                    view! {
                        <img
                            src=partner.logo_url.clone()
                            alt=format!("{} logo", partner.name)
                            class="w-full h-full object-contain p-2"
                        />
                    }.into_view()
                }}
            </div>
            <h3 class="text-lg font-semibold mb-2">{partner.name}</h3>
            <p class="text-gray-600 text-sm">{partner.description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_inquiry() {
        assert_eq!(compose_inquiry("", " Hello there "), "Hello there");
        assert_eq!(compose_inquiry("  Acme Ltd ", "Let's talk"), "[Acme Ltd] Let's talk");
    }
}
