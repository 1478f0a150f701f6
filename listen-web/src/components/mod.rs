//! UI Components

pub mod price_updates;
pub mod vector_arrow;

pub use price_updates::PriceUpdates;
pub use vector_arrow::VectorArrow;
