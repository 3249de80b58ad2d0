//! In-memory recipe catalog
//!
//! Recipes are built from ingredients, then handed to a [`Catalog`] which
//! keeps them in insertion order and indexes them by id.

pub mod domain;
pub use domain::{Catalog, Config, Error, Ingredient, Recipe, Tier};

/// Building catalogs from seed files and the built-in sample.
pub mod seed;
pub use seed::LoadError;
