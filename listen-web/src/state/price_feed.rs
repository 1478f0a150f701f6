//! Price feed state
//!
//! [`PriceBook`] keeps the most recent price ticks, newest first, and tags
//! each one with its movement against the previous tick of the same mint.
//! [`PriceFeedContext`] wraps it in a signal for the price table.
//!
//! The feed does not open any connection itself. Whatever transport the host
//! page uses hands each JSON text frame to [`PriceFeedContext::ingest_frame`].

use std::collections::VecDeque;

use leptos::prelude::*;
use shared::dto::price::PriceUpdate;

use crate::error::{Error, Result};
use crate::utils::constants::{MAX_PRICE_UPDATES, PRICE_EPSILON};

/// Price change direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDirection {
    Up,
    Down,
    Neutral,
}

impl PriceDirection {
    pub fn from_change(old_price: f64, new_price: f64) -> Self {
        let tolerance = PRICE_EPSILON * old_price.abs().max(f64::MIN_POSITIVE);
        if (new_price - old_price).abs() <= tolerance {
            PriceDirection::Neutral
        } else if new_price > old_price {
            PriceDirection::Up
        } else {
            PriceDirection::Down
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            PriceDirection::Up => "↑",
            PriceDirection::Down => "↓",
            PriceDirection::Neutral => "→",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            PriceDirection::Up => "price-up",
            PriceDirection::Down => "price-down",
            PriceDirection::Neutral => "price-neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub update: PriceUpdate,
    pub direction: PriceDirection,
}

/// Bounded list of recent price ticks, newest first
#[derive(Debug, Clone)]
pub struct PriceBook {
    rows: VecDeque<PriceRow>,
    capacity: usize,
}

impl Default for PriceBook {
    fn default() -> Self {
        Self::with_capacity(MAX_PRICE_UPDATES)
    }
}

impl PriceBook {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            rows: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert `update` at the front and evict the oldest rows past capacity.
    ///
    /// The direction is measured against the newest retained row for the
    /// same mint; a mint with no retained row is `Neutral`.
    pub fn push(&mut self, update: PriceUpdate) -> PriceDirection {
        let direction = self
            .rows
            .iter()
            .find(|row| row.update.pubkey == update.pubkey)
            .map(|row| PriceDirection::from_change(row.update.price, update.price))
            .unwrap_or(PriceDirection::Neutral);

        self.rows.push_front(PriceRow { update, direction });
        self.rows.truncate(self.capacity);
        direction
    }

    pub fn rows(&self) -> impl Iterator<Item = &PriceRow> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}

/// Reject ticks the table cannot display sensibly
pub fn validate_update(update: PriceUpdate) -> Result<PriceUpdate> {
    if update.pubkey.trim().is_empty() {
        return Err(Error::MissingMint);
    }
    if !update.price.is_finite() || update.price < 0.0 {
        return Err(Error::InvalidPrice {
            mint: update.pubkey,
            price: update.price,
        });
    }
    if !update.market_cap.is_finite() {
        return Err(Error::InvalidMarketCap { mint: update.pubkey });
    }
    Ok(update)
}

/// Decode and validate one JSON text frame
pub fn parse_frame(frame: &str) -> Result<PriceUpdate> {
    let update: PriceUpdate = serde_json::from_str(frame)?;
    validate_update(update)
}

/// Global price feed context
#[derive(Clone, Copy)]
pub struct PriceFeedContext {
    book: RwSignal<PriceBook>,
}

impl Default for PriceFeedContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PriceFeedContext {
    pub fn new() -> Self {
        Self {
            book: RwSignal::new(PriceBook::default()),
        }
    }

    /// Parse a JSON frame and add it to the book.
    ///
    /// Rejected frames leave the book untouched.
    pub fn ingest_frame(&self, frame: &str) -> Result<PriceDirection> {
        match parse_frame(frame) {
            Ok(update) => Ok(self.insert(update)),
            Err(e) => {
                log::warn!("Dropping price frame: {}", e);
                Err(e)
            }
        }
    }

    /// Add an already decoded update to the book
    pub fn push(&self, update: PriceUpdate) -> Result<PriceDirection> {
        validate_update(update).map(|update| self.insert(update))
    }

    fn insert(&self, update: PriceUpdate) -> PriceDirection {
        log::debug!("Price update {} @ {}", update.pubkey, update.price);
        let mut direction = PriceDirection::Neutral;
        self.book.update(|book| direction = book.push(update));
        direction
    }

    pub fn rows(&self) -> Vec<PriceRow> {
        self.book.with(|book| book.rows().cloned().collect())
    }

    pub fn is_empty(&self) -> bool {
        self.book.with(|book| book.is_empty())
    }

    pub fn len(&self) -> usize {
        self.book.with(|book| book.len())
    }

    pub fn clear(&self) {
        self.book.update(|book| book.clear());
    }
}

pub fn provide_price_feed_context() -> PriceFeedContext {
    let context = PriceFeedContext::new();
    provide_context(context);
    context
}

pub fn use_price_feed_context() -> PriceFeedContext {
    expect_context::<PriceFeedContext>()
}
