//! Error type for the preview front-end

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed price frame: {0}")]
    MalformedFrame(#[from] serde_json::Error),

    #[error("price update is missing its mint address")]
    MissingMint,

    #[error("invalid price {price} for mint {mint}")]
    InvalidPrice { mint: String, price: f64 },

    #[error("invalid market cap for mint {mint}")]
    InvalidMarketCap { mint: String },

    #[error("unknown viewport class `{0}` (expected very-small, mobile or desktop)")]
    UnknownViewport(String),
}
