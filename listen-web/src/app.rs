//! Listen preview root component

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::{HomePage, NotFound};
use crate::state::mobile::provide_mobile_context;
use crate::state::price_feed::provide_price_feed_context;

#[component]
pub fn App() -> impl IntoView {
    provide_mobile_context();
    provide_price_feed_context();

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound/> }>
                <Route path=path!("/") view=HomePage/>
            </Routes>
        </Router>
    }
}
