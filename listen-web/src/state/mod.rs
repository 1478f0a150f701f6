//! Reactive state shared through Leptos context

pub mod mobile;
pub mod price_feed;
