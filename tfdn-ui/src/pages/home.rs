//! Home Page
//!
//! Hero, then either the sign-in card or the impact stats and stories.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::api::types::{ImpactStory, Stat};
use crate::components::{CardSkeleton, Loading, SignInForm, StatCard};
use crate::state::{log_load_error, AuthState};

/// Stories featured on the home page
const FEATURED_STORIES: usize = 3;

#[component]
pub fn Home() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    view! {
        <div class="space-y-16">
            <Hero />

            {move || {
                if auth.checking.get() {
                    view! { <Loading /> }.into_view()
                } else if auth.authenticated.get() {
                    view! { <ImpactSections /> }.into_view()
                } else {
                    view! {
                        <section class="max-w-md mx-auto bg-white rounded-xl shadow-md p-8">
                            <h2 class="text-2xl font-bold text-primary-900 text-center mb-6">
                                "Join the TFDN Community"
                            </h2>
                            <SignInForm />
                        </section>
                    }.into_view()
                }
            }}
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let auth = use_context::<AuthState>().expect("AuthState not found");

    view! {
        <section class="rounded-2xl bg-gradient-to-br from-primary-900 to-primary-500 text-white px-8 py-16 text-center">
            <h1 class="text-4xl md:text-5xl font-bold mb-4">
                "Transforming Africa Through"
                <br />
                <span class="text-secondary-400">"Innovation & Impact"</span>
            </h1>
            <p class="text-lg md:text-xl text-primary-100 max-w-3xl mx-auto mb-8">
                "The Taji Fanisi Development Network connects education, career development, \
                 and social innovation to create lasting change across Africa."
            </p>

            {move || {
                if auth.authenticated.get() {
                    view! {
                        <div class="flex flex-col sm:flex-row justify-center gap-4">
                            <A
                                href="/framework"
                                class="px-8 py-3 bg-white text-primary-900 rounded-lg font-semibold hover:bg-gray-100"
                            >
                                "Explore Framework"
                            </A>
                            <A
                                href="/ai-career"
                                class="px-8 py-3 bg-secondary-600 text-white rounded-lg font-semibold hover:bg-secondary-700"
                            >
                                "Try AI Career Demo"
                            </A>
                        </div>
                    }.into_view()
                } else {
                    view! {
                        <p class="text-primary-100 italic">"Sign in to explore our platform"</p>
                    }.into_view()
                }
            }}
        </section>
    }
}

/// Stats and stories, loaded once the session is known to be signed in
#[component]
fn ImpactSections() -> impl IntoView {
    let stats = create_rw_signal(Vec::<Stat>::new());
    let stories = create_rw_signal(Vec::<ImpactStory>::new());
    let (loading, set_loading) = create_signal(true);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_stats().await {
                Ok(data) => stats.set(data),
                Err(e) => log_load_error("stats", &e),
            }
            match api::fetch_stories(FEATURED_STORIES).await {
                Ok(data) => stories.set(data),
                Err(e) => log_load_error("impact stories", &e),
            }
            set_loading.set(false);
        });
    });

    view! {
        <section>
            <h2 class="text-3xl font-bold text-primary-900 text-center mb-8">"Our Impact"</h2>
            {move || {
                if loading.get() {
                    view! { <CardSkeleton count=4 /> }.into_view()
                } else {
                    view! {
                        <div class="grid grid-cols-2 md:grid-cols-4 gap-6">
                            {stats.get().into_iter().enumerate().map(|(index, stat)| view! {
                                <StatCard stat=stat index=index />
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </section>

        <section>
            <h2 class="text-3xl font-bold text-primary-900 text-center mb-8">"Stories of Impact"</h2>
            <div class="grid md:grid-cols-3 gap-6">
                {move || stories.get().into_iter().map(|story| view! {
                    <StoryCard story=story />
                }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn StoryCard(story: ImpactStory) -> impl IntoView {
    let initial = story.name.chars().next().unwrap_or('?');

    view! {
        <div class="bg-white rounded-xl shadow-md p-6 h-full flex flex-col">
            <p class="text-gray-700 italic flex-1 mb-6">{format!("\"{}\"", story.quote)}</p>
            <div class="flex items-center space-x-3">
                {match story.image {
                    Some(src) => view! {
                        <img src=src alt=story.name.clone() class="w-12 h-12 rounded-full object-cover" />
                    }.into_view(),
                    None => view! {
                        <div class="w-12 h-12 rounded-full bg-primary-900 text-white flex items-center justify-center font-bold">
                            {initial.to_string()}
                        </div>
                    }.into_view(),
                }}
                <div>
                    <div class="font-semibold">{story.name}</div>
                    <div class="text-sm text-gray-500">{story.role}</div>
                </div>
            </div>
        </div>
    }
}
