//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary for zero-cost access,
//! and the [`WordCatalog`] built from them.

mod catalog;
mod embedded;
pub mod loader;

pub use catalog::{CatalogError, WordCatalog};
pub use embedded::{
    ALLOWED, ALLOWED_COUNT, EASY, EASY_COUNT, HARD, HARD_COUNT, MEDIUM, MEDIUM_COUNT,
};
