//! Live price table

use leptos::prelude::*;
use shared::utils::truncate_address;

use crate::state::price_feed::{use_price_feed_context, PriceRow};
use crate::utils::format::{format_market_cap, format_price, format_time};

pub const EMPTY_FEED_TEXT: &str = "Waiting for price updates...";

fn token_label(row: &PriceRow) -> String {
    if row.update.name.trim().is_empty() {
        truncate_address(&row.update.pubkey)
    } else {
        row.update.name.clone()
    }
}

#[component]
pub fn PriceUpdates() -> impl IntoView {
    let feed = use_price_feed_context();

    view! {
        <div class="price-updates">
            {move || {
                if feed.is_empty() {
                    view! {
                        <p class="price-updates-empty">{EMPTY_FEED_TEXT}</p>
                    }.into_any()
                } else {
                    view! {
                        <table class="price-updates-table">
                            <thead>
                                <tr>
                                    <th>"Token"</th>
                                    <th>"Price"</th>
                                    <th>"Market Cap"</th>
                                    <th>"Side"</th>
                                    <th>"Time"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {feed.rows().into_iter().map(|row| {
                                    let label = token_label(&row);
                                    view! {
                                        <tr class="price-update-row" title=row.update.pubkey.clone()>
                                            <td>{label}</td>
                                            <td class=row.direction.css_class()>
                                                {format_price(row.update.price)}" "{row.direction.arrow()}
                                            </td>
                                            <td>{format_market_cap(row.update.market_cap)}</td>
                                            <td>{row.update.side()}</td>
                                            <td>{format_time(&row.update)}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::price_feed::PriceFeedContext;

    fn render_with(frames: &[&str]) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let feed = PriceFeedContext::new();
            for frame in frames {
                feed.ingest_frame(frame).unwrap();
            }
            provide_context(feed);
            view! { <PriceUpdates/> }.to_html()
        })
    }

    #[test]
    fn test_empty_feed() {
        let html = render_with(&[]);
        assert!(html.contains(EMPTY_FEED_TEXT));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn test_rows_render_newest_first() {
        let html = render_with(&[
            r#"{"name":"Bonk","pubkey":"DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263","price":0.000021,"market_cap":1400000000.0,"timestamp":1700000000,"is_buy":true}"#,
            r#"{"name":"","pubkey":"So11111111111111111111111111111111111111112","price":142.5,"market_cap":950000.0,"timestamp":1700000001}"#,
        ]);

        assert!(!html.contains(EMPTY_FEED_TEXT));
        assert_eq!(html.matches(r#"class="price-update-row""#).count(), 2);

        let sol = html.find("So11...1112").unwrap();
        let bonk = html.find("Bonk").unwrap();
        assert!(sol < bonk);

        assert!(html.contains("$142.50"));
        assert!(html.contains("$950.00K"));
        assert!(html.contains("$0.00002100"));
        assert!(html.contains("$1.40B"));
        assert!(html.contains("Sell"));
        assert!(html.contains("22:13:20"));
    }

    #[test]
    fn test_widget_has_no_heading() {
        let html = render_with(&[
            r#"{"name":"Bonk","pubkey":"mintA","price":1.0,"timestamp":1700000000}"#,
        ]);
        assert!(!html.contains("<h1"));
        assert!(!html.contains("<h2"));
    }
}
