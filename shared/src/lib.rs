//! # Shared Data Transfer Objects Library
//!
//! Types and helpers shared between the Listen data service and the browser
//! front-end. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects carried over the price stream
//!   - **[`dto::price`]**: Price ticks emitted by the indexer
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Shorten mint/wallet addresses for display
//!   - **[`utils::truncate_address`]**: Shorten with the default 4/4 split
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** in Rust and in JSON
//! - Unknown fields are ignored on deserialization, so producers may add
//!   fields without breaking older front-ends
//!
//! ## Usage in Frontend
//!
//! ```rust
//! use shared::dto::price::PriceUpdate;
//! use shared::utils::truncate_address;
//!
//! let frame = r#"{
//!     "name": "Bonk", "pubkey": "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263",
//!     "price": 0.000021, "market_cap": 1400000000.0, "timestamp": 1700000000,
//!     "slot": 1, "swap_amount": 12.5, "owner": "", "signature": "",
//!     "multi_hop": false, "is_buy": true, "is_pump": false
//! }"#;
//!
//! let update: PriceUpdate = serde_json::from_str(frame).unwrap();
//! assert_eq!(truncate_address(&update.pubkey), "DezX...B263");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
