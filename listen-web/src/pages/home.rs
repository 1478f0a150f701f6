//! Home Page

use leptos::prelude::*;

use crate::components::PriceUpdates;

pub const HOME_TITLE: &str = "Listen Data Service";

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen p-8">
            <h1 class="text-2xl font-bold mb-4">{HOME_TITLE}</h1>
            <PriceUpdates/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::price_feed::PriceFeedContext;

    fn render(frames: &[&str]) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let feed = PriceFeedContext::new();
            for frame in frames {
                feed.ingest_frame(frame).unwrap();
            }
            provide_context(feed);
            view! { <HomePage/> }.to_html()
        })
    }

    const FRAME: &str = r#"{"name":"Bonk","pubkey":"mintA","price":1.0,"timestamp":1700000000}"#;

    #[test]
    fn test_single_heading() {
        for frames in [&[][..], &[FRAME][..]] {
            let html = render(frames);
            assert_eq!(html.matches("<h1").count(), 1);
            assert!(html.contains(HOME_TITLE));
        }
    }

    #[test]
    fn test_single_price_widget() {
        for frames in [&[][..], &[FRAME, FRAME][..]] {
            let html = render(frames);
            assert_eq!(html.matches(r#"class="price-updates""#).count(), 1);
        }
    }

    #[test]
    fn test_rerender_is_identical() {
        assert_eq!(render(&[]), render(&[]));
        assert_eq!(render(&[FRAME]), render(&[FRAME]));
    }
}
