//! Construction of catalogs from seed files.
//!
//! A seed file is a read-only TOML description of a set of recipes. Every
//! recipe goes through [`Recipe::with_ingredients`] and [`Catalog::add`], so a
//! seed file is subject to exactly the same validation as recipes built in
//! code. Nothing in this module ever writes a catalog back to disk.

use std::{fs, io, path::Path};

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::{Catalog, Error, Ingredient, Recipe, Tier};

/// Errors that can occur when loading a catalog from a seed file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The seed file was not found.
    #[error("seed file not found")]
    NotFound,
    /// An I/O error occurred.
    #[error("failed to read seed file")]
    Io(#[from] io::Error),
    /// The TOML could not be parsed, or an ingredient in it was invalid.
    #[error("failed to parse seed file")]
    Toml(#[from] toml::de::Error),
    /// A recipe was invalid, or its id was already taken.
    #[error("invalid recipe in seed file")]
    Catalog(#[from] Error),
}

#[derive(Debug, Deserialize)]
#[serde(tag = "_version")]
enum SeedFile {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        recipes: Vec<SeedRecipe>,
    },
}

#[derive(Debug, Deserialize)]
struct SeedRecipe {
    id: String,
    title: String,
    #[serde(default)]
    tier: Tier,
    #[serde(default)]
    ingredients: Vec<Ingredient>,
}

impl TryFrom<SeedRecipe> for Recipe {
    type Error = Error;

    fn try_from(seed: SeedRecipe) -> Result<Self, Self::Error> {
        let SeedRecipe {
            id,
            title,
            tier,
            ingredients,
        } = seed;
        Self::with_ingredients(id, title, tier, ingredients)
    }
}

/// Reads a catalog from the seed file at `path`.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be read, if it is not
/// a valid seed file, or if any recipe in it is invalid or reuses an id.
#[instrument(level = "debug")]
pub fn load(path: &Path) -> Result<Catalog, LoadError> {
    let content = fs::read_to_string(path).map_err(|io_error| match io_error.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound,
        _ => LoadError::Io(io_error),
    })?;
    parse(&content)
}

/// Builds a catalog from the contents of a seed file.
///
/// Recipes are added in the order they appear in the file.
///
/// # Errors
///
/// Returns an error if the content is not a valid seed file, or if any recipe
/// in it is invalid or reuses an id.
pub fn parse(content: &str) -> Result<Catalog, LoadError> {
    let SeedFile::V1 { recipes } = toml::from_str::<SeedFile>(content)?;

    let mut catalog = Catalog::with_capacity(recipes.len());
    for seed in recipes {
        catalog.add(Recipe::try_from(seed)?)?;
    }

    debug!(recipes = catalog.len(), "loaded seed catalog");
    Ok(catalog)
}

/// The built-in sample catalog: bread, cake, apple pie and mushroom stew.
///
/// # Panics
///
/// Panics if the embedded sample fails to parse. It is a fixed string covered
/// by this module's tests, so this does not happen in practice.
#[must_use]
pub fn sample() -> Catalog {
    parse(SAMPLE).expect("built-in sample is valid")
}

const SAMPLE: &str = r#"
_version = "1"

[[recipes]]
id = "bread_001"
title = "Bread"
tier = "basic"
ingredients = [
    { code = "Wheat", quantity = 3 },
    { code = "Water", quantity = 1 },
    { code = "Yeast", quantity = 1 },
]

[[recipes]]
id = "cake_001"
title = "Cake"
tier = "advanced"
ingredients = [
    { code = "Flour", quantity = 2 },
    { code = "Eggs", quantity = 3 },
    { code = "Sugar", quantity = 2 },
    { code = "Butter", quantity = 1 },
    { code = "Milk", quantity = 1 },
]

[[recipes]]
id = "pie_001"
title = "Apple Pie"
tier = "basic"
ingredients = [
    { code = "Flour", quantity = 2 },
    { code = "Apples", quantity = 4 },
    { code = "Sugar", quantity = 1 },
    { code = "Butter", quantity = 1 },
]

[[recipes]]
id = "stew_001"
title = "Mushroom Stew"
tier = "basic"
ingredients = [
    { code = "Mushrooms", quantity = 5 },
    { code = "Potatoes", quantity = 2 },
    { code = "Carrots", quantity = 2 },
    { code = "Onion", quantity = 1 },
    { code = "Water", quantity = 2 },
]
"#;
