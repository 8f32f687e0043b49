//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{ErrorFallback, Footer, Header, Toast};
use crate::pages::{AiCareer, Framework, GetInvolved, Home, Partners, PillarDetail, Research};
use crate::state::{provide_auth_state, provide_global_state};
use crate::theme::provide_theme;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_theme();
    provide_global_state();
    provide_auth_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900 flex flex-col">
                <Header />

                <main class="flex-1 container mx-auto px-4 py-8">
                    <ErrorBoundary fallback=|errors| view! { <ErrorFallback errors=errors /> }>
                        <Routes>
                            <Route path="/" view=Home />
                            <Route path="/framework" view=Framework />
                            <Route path="/ai-career" view=AiCareer />
                            <Route path="/research" view=Research />
                            <Route path="/partners" view=Partners />
                            <Route path="/get-involved" view=GetInvolved />
                            <Route path="/pillars/:id" view=PillarDetail />
                            <Route path="/*any" view=NotFound />
                        </Routes>
                    </ErrorBoundary>
                </main>

                <Footer />

                <Toast />
            </div>
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-7xl font-bold text-primary-900 mb-4">"404"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-600 mb-6">"The page you're looking for doesn't exist or has been moved."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-900 hover:bg-primary-800 text-white rounded-lg font-medium transition-colors"
            >
                "Go Home"
            </A>
        </div>
    }
}
