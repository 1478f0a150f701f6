//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged between the Listen data service and its clients.
//!
//! ## Module Organization
//!
//! - [`price`] - Price ticks produced for every indexed swap
//!
//! ## Example Frame
//!
//! ```text
//! {
//!   "name": "Bonk",
//!   "pubkey": "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263",
//!   "price": 0.000021,
//!   "market_cap": 1400000000.0,
//!   "timestamp": 1700000000,
//!   "slot": 245000000,
//!   "swap_amount": 12.5,
//!   "owner": "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL",
//!   "signature": "5h6x...",
//!   "multi_hop": false,
//!   "is_buy": true,
//!   "is_pump": false
//! }
//! ```

pub mod price;

pub use price::*;
