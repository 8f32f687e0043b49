//! Header Component
//!
//! Sticky top bar with the TFDN brand, the page links, and a slide-in drawer
//! on small screens.

use leptos::*;
use leptos_router::*;

use crate::state::auth::AuthState;
use crate::theme::NAV_ITEMS;

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");
    let (drawer_open, set_drawer_open) = create_signal(false);

    view! {
        <header class="sticky top-0 z-40 bg-white/95 backdrop-blur shadow-sm">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <img
                            src="/images/zoomed-rg.png"
                            alt="Taji Fanisi Development Network Logo"
                            class="w-10 h-10 rounded-full"
                        />
                        <span class="text-xl font-bold text-primary-900">"TFDN"</span>
                    </A>

                    // Desktop links
                    <nav class="hidden md:flex items-center space-x-1">
                        {NAV_ITEMS.iter().map(|item| view! {
                            <NavLink href=item.path label=item.label />
                        }).collect_view()}
                        <SignOutButton />
                    </nav>

                    <button
                        class="md:hidden p-2 rounded-lg text-gray-700 hover:bg-gray-100"
                        aria-label="open drawer"
                        on:click=move |_| set_drawer_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                </div>
            </div>

            // Mobile drawer
            <Show when=move || drawer_open.get()>
                <div
                    class="fixed inset-0 bg-black/40 md:hidden"
                    on:click=move |_| set_drawer_open.set(false)
                />
                <aside class="fixed top-0 right-0 h-full w-64 bg-white shadow-xl p-4 md:hidden">
                    <div class="flex items-center justify-between mb-6">
                        <div class="flex items-center space-x-2">
                            <img
                                src="/images/zoomed-rg.png"
                                alt="Taji Fanisi Development Network Logo"
                                class="w-8 h-8 rounded-full"
                            />
                            <span class="text-lg font-bold text-primary-900">"TFDN"</span>
                        </div>
                        <button
                            class="p-2 text-gray-600 hover:text-gray-900"
                            on:click=move |_| set_drawer_open.set(false)
                        >
                            "✕"
                        </button>
                    </div>
                    <ul class="space-y-1">
                        {NAV_ITEMS.iter().map(|item| view! {
                            <li on:click=move |_| set_drawer_open.set(false)>
                                <A
                                    href=item.path
                                    exact=true
                                    class="block px-4 py-2 rounded-lg text-gray-700 hover:bg-gray-100"
                                    active_class="bg-primary-50 text-primary-900 font-semibold"
                                >
                                    {item.label}
                                </A>
                            </li>
                        }).collect_view()}
                    </ul>
                    <Show when=move || auth.authenticated.get()>
                        <div class="mt-6">
                            <SignOutButton />
                        </div>
                    </Show>
                </aside>
            </Show>
        </header>
    }
}

#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            exact=true
            class="px-4 py-2 rounded-lg text-gray-700 hover:text-primary-900 hover:bg-gray-100 transition-colors"
            active_class="text-primary-900 font-semibold bg-primary-50"
        >
            {label}
        </A>
    }
}

/// Only rendered for a signed-in session
#[component]
pub fn SignOutButton() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    let on_click = move |_| {
        spawn_local(async move {
            auth.sign_out().await;
        });
    };

    view! {
        <Show when=move || auth.authenticated.get()>
            <button
                on:click=on_click
                class="ml-2 px-4 py-2 rounded-lg border border-secondary-600 text-secondary-600 \
                       hover:bg-secondary-50 transition-colors"
            >
                "Sign Out"
            </button>
        </Show>
    }
}
