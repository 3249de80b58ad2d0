//! Domain models for the recipe catalog.
//!
//! This module contains the core domain types: ingredients, tiers, recipes,
//! the catalog that stores them, and presentation configuration.

mod catalog;
pub use catalog::Catalog;

mod config;
pub use config::Config;

/// The error taxonomy shared by every fallible operation.
pub mod error;
pub use error::Error;

mod ingredient;
pub use ingredient::Ingredient;

/// Recipe aggregate.
pub mod recipe;
pub use recipe::Recipe;

mod tier;
pub use tier::Tier;
