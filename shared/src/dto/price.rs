//! # Price Data Transfer Objects
//!
//! One [`PriceUpdate`] is emitted per indexed swap and fanned out to
//! subscribers as a JSON text frame.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single price tick for a token mint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceUpdate {
    /// Token name from on-chain metadata, empty when unknown
    #[serde(default)]
    pub name: String,
    /// Token mint address
    pub pubkey: String,
    /// Price in USD
    pub price: f64,
    /// Fully diluted market cap in USD
    #[serde(default)]
    pub market_cap: f64,
    /// Unix timestamp (seconds)
    pub timestamp: u64,
    #[serde(default)]
    pub slot: u64,
    /// Swap size in USD
    #[serde(default)]
    pub swap_amount: f64,
    #[serde(default)]
    pub owner: String,
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub multi_hop: bool,
    #[serde(default)]
    pub is_buy: bool,
    #[serde(default)]
    pub is_pump: bool,
}

impl PriceUpdate {
    /// Timestamp as a UTC datetime, `None` when out of chrono's range
    pub fn time(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.timestamp)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Buy/sell label for the swap that produced this tick
    pub fn side(&self) -> &'static str {
        if self.is_buy {
            "Buy"
        } else {
            "Sell"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: &str = r#"{
        "name": "Bonk",
        "pubkey": "DezXAZ8z7PnrnRJjz3wXBoRgixCa6xjnB7YaB1pPB263",
        "price": 0.000021,
        "market_cap": 1400000000.0,
        "timestamp": 1700000000,
        "slot": 245000000,
        "swap_amount": 12.5,
        "owner": "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL",
        "signature": "5h6x",
        "multi_hop": false,
        "is_buy": true,
        "is_pump": false,
        "extra_field": 42
    }"#;

    #[test]
    fn test_deserialize_full_frame() {
        let update: PriceUpdate = serde_json::from_str(FRAME).unwrap();
        assert_eq!(update.name, "Bonk");
        assert_eq!(update.slot, 245000000);
        assert!(update.is_buy);
        assert_eq!(update.side(), "Buy");
    }

    #[test]
    fn test_deserialize_minimal_frame() {
        let update: PriceUpdate =
            serde_json::from_str(r#"{"pubkey":"abc","price":1.5,"timestamp":0}"#).unwrap();
        assert!(update.name.is_empty());
        assert_eq!(update.market_cap, 0.0);
        assert_eq!(update.side(), "Sell");
    }

    #[test]
    fn test_time() {
        let update: PriceUpdate = serde_json::from_str(FRAME).unwrap();
        let time = update.time().unwrap();
        assert_eq!(time.format("%H:%M:%S").to_string(), "22:13:20");
    }
}
