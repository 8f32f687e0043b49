//! Get Involved Page
//!
//! Volunteer roles and the volunteer application form.

use leptos::*;

use crate::api;
use crate::api::types::{VolunteerForm, VolunteerRole};
use crate::components::InlineLoading;
use crate::state::log_load_error;

/// Interest values accepted by the server, with their labels
pub const INTEREST_OPTIONS: [(&str, &str); 5] = [
    ("education", "Education & Leadership"),
    ("career", "Career Development"),
    ("social", "Social Innovation"),
    ("research", "Research & AI"),
    ("general", "General Support"),
];

/// Blank optional fields are left out of the submission
pub fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[component]
pub fn GetInvolved() -> impl IntoView {
    let roles = create_rw_signal(Vec::<VolunteerRole>::new());

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_volunteer_roles().await {
                Ok(data) => roles.set(data),
                Err(e) => log_load_error("volunteer roles", &e),
            }
        });
    });

    view! {
        <div class="space-y-12">
            <section class="text-center">
                <h1 class="text-4xl font-bold text-primary-900 mb-4">"Get Involved"</h1>
                <p class="text-lg text-gray-600 max-w-3xl mx-auto">
                    "Join our mission to transform lives across Africa through education, career development, \
                     and social innovation."
                </p>
            </section>

            <section>
                <h2 class="text-2xl font-bold text-primary-900 mb-6">"Volunteer Opportunities"</h2>
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6">
                    {move || roles.get().into_iter().map(|role| view! {
                        <div
                            class="bg-white rounded-xl shadow-md hover:shadow-xl hover:-translate-y-1 transition-all p-6 border-t-4"
                            style=format!("border-top-color: {}", role.color)
                        >
                            <h3 class="text-lg font-semibold mb-2">{role.title}</h3>
                            <p class="text-gray-600 text-sm">{role.description}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>

            <VolunteerApplication />
        </div>
    }
}

#[component]
fn VolunteerApplication() -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (phone, set_phone) = create_signal(String::new());
    let (interest, set_interest) = create_signal(String::new());
    let (skills, set_skills) = create_signal(String::new());
    let (message, set_message) = create_signal(String::new());

    let (submitting, set_submitting) = create_signal(false);
    // (success, text)
    let (result, set_result) = create_signal(None::<(bool, String)>);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let form = VolunteerForm {
            name: name.get(),
            email: email.get(),
            phone: optional(phone.get()),
            interest: interest.get(),
            skills: optional(skills.get()),
            message: message.get(),
        };

        set_submitting.set(true);
        spawn_local(async move {
            match api::submit_volunteer(&form).await {
                Ok(ack) => {
                    set_result.set(Some((true, ack.message)));
                    for setter in [set_name, set_email, set_phone, set_interest, set_skills, set_message] {
                        setter.set(String::new());
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Volunteer submission failed: {}", e).into());
                    set_result.set(Some((false, format!("Error submitting form. {}", e))));
                }
            }
            set_submitting.set(false);
        });
    };

    let input_class = "w-full px-4 py-3 rounded-lg border border-gray-300 focus:border-primary-900 focus:outline-none";

    view! {
        <section class="bg-white rounded-xl shadow-md p-8 max-w-3xl mx-auto">
            <h2 class="text-2xl font-bold text-primary-900 mb-6">"Volunteer Application"</h2>

            {move || result.get().map(|(ok, text)| {
                let class = if ok {
                    "mb-6 p-4 rounded-lg bg-green-50 border border-green-200 text-green-800"
                } else {
                    "mb-6 p-4 rounded-lg bg-red-50 border border-red-200 text-red-800"
                };
                view! { <div class=class>{text}</div> }
            })}

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
                    type="tel"
                    placeholder="Phone Number"
                    class=input_class
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                    prop:value=move || phone.get()
                />
                <select
                    required
                    class=input_class
                    on:change=move |ev| set_interest.set(event_target_value(&ev))
                    prop:value=move || interest.get()
                >
                    <option value="" disabled selected>"Area of Interest"</option>
                    {INTEREST_OPTIONS.iter().map(|(value, label)| view! {
                        <option value=value.to_string()>{*label}</option>
                    }).collect_view()}
                </select>
                <textarea
                    rows="3"
                    placeholder="Tell us about your relevant skills and experience..."
                    class=format!("{} md:col-span-2", input_class)
                    on:input=move |ev| set_skills.set(event_target_value(&ev))
                    prop:value=move || skills.get()
                />
                <textarea
                    rows="4"
                    placeholder="Why do you want to volunteer with TFDN?"
                    required
                    class=format!("{} md:col-span-2", input_class)
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                    prop:value=move || message.get()
                />
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="md:col-span-2 py-3 rounded-lg bg-secondary-600 hover:bg-secondary-700 text-white \
                           font-semibold disabled:opacity-50 flex items-center justify-center space-x-2"
                >
                    <Show when=move || submitting.get()>
                        <InlineLoading />
                    </Show>
                    <span>"Submit Application"</span>
                </button>
            </form>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_blank_is_none() {
        assert_eq!(optional(String::new()), None);
        assert_eq!(optional("   ".to_string()), None);
        assert_eq!(optional(" +254 700 ".to_string()), Some("+254 700".to_string()));
    }

    #[test]
    fn test_interest_values() {
        let values: Vec<&str> = INTEREST_OPTIONS.iter().map(|(v, _)| *v).collect();
        assert_eq!(values, vec!["education", "career", "social", "research", "general"]);
    }
}
