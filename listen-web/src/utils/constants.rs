//! Application constants

// Viewport breakpoints (CSS pixels, exclusive upper bounds)
pub const VERY_SMALL_SCREEN_MAX_WIDTH: f64 = 400.0;
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

/// Query parameter that pins the viewport class, e.g. `?viewport=very-small`
pub const VIEWPORT_QUERY_PARAM: &str = "viewport";

// Price feed
pub const MAX_PRICE_UPDATES: usize = 50;
pub const PRICE_EPSILON: f64 = 1e-12;
