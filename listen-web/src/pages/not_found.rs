//! Router fallback

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::VectorArrow;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen p-8" style="display: flex; justify-content: center; align-items: center;">
            <div class="card" style="max-width: 500px; text-align: center;">
                <p class="text-2xl font-bold mb-4">"404 - Page Not Found"</p>
                <p style="margin-bottom: 24px;">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn" style="display: inline-flex; align-items: center; gap: 8px;">
                        "Go to Home"
                        <VectorArrow/>
                    </span>
                </A>
            </div>
        </div>
    }
}
