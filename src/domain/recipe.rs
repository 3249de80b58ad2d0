use std::fmt;

use non_empty_string::NonEmptyString;

use crate::domain::{
    error::{non_blank, Error},
    Ingredient, Tier,
};

/// A recipe is a titled, tiered list of ingredients.
///
/// The id, title and tier are fixed when the recipe is created. The only way
/// to change a recipe afterwards is to append ingredients to it. A recipe
/// knows nothing about any [`Catalog`](crate::Catalog) it may be stored in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    id: NonEmptyString,
    title: NonEmptyString,
    tier: Tier,
    ingredients: Vec<Ingredient>,
}

impl Recipe {
    /// Construct a new [`Recipe`] with no ingredients.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `id` or `title` is empty or only
    /// whitespace.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        tier: Tier,
    ) -> Result<Self, Error> {
        let id = non_blank(id.into(), "Recipe ID")?;
        let title = non_blank(title.into(), "Recipe title")?;

        Ok(Self {
            id,
            title,
            tier,
            ingredients: Vec::new(),
        })
    }

    /// Construct a new [`Recipe`] and append the given ingredients in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `id` or `title` is empty or only
    /// whitespace. The ingredients are not consumed in that case.
    pub fn with_ingredients(
        id: impl Into<String>,
        title: impl Into<String>,
        tier: Tier,
        ingredients: impl IntoIterator<Item = Ingredient>,
    ) -> Result<Self, Error> {
        let mut recipe = Self::new(id, title, tier)?;
        for ingredient in ingredients {
            recipe.append_ingredient(ingredient);
        }
        Ok(recipe)
    }

    /// Append an ingredient to the end of the ingredient list.
    ///
    /// Ingredients with a code already present are kept as separate entries.
    pub fn append_ingredient(&mut self, ingredient: Ingredient) {
        self.ingredients.push(ingredient);
    }

    /// The unique identifier of this recipe.
    #[must_use]
    pub fn id(&self) -> &str {
        self.id.as_str()
    }

    /// The human-readable title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// The craft tier.
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    /// The ingredients, in the order they were added.
    #[must_use]
    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}
