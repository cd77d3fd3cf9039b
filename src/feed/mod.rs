//! Remote source of health/recipe items.

mod client;
mod error;
mod item;

pub use client::{FeedClient, DEFAULT_ENDPOINT, MAX_ITEMS};
pub use error::FeedError;
pub use item::HealthItem;
