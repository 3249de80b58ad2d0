//! An ordered, keyed, in-memory collection of recipes.
//!
//! The [`Catalog`] knows nothing about where recipes come from or how they
//! are displayed. It stores recipes contiguously in insertion order, and keeps
//! an index from recipe id to position for constant-time keyed lookup.

use std::collections::{hash_map::Entry, HashMap};

use tracing::{debug, instrument};

use crate::domain::{error::Error, Recipe, Tier};

/// An in-memory, insertion-ordered collection of uniquely identified recipes.
///
/// Recipes are stored in two views:
/// - the recipes themselves, in insertion order (`Vec<Recipe>`)
/// - an index from recipe id to position in that vector
///
/// Every mutation updates both views before returning, so the two always
/// describe the same set of recipes. Positions are only stable between
/// mutations: removing a recipe shifts every later recipe down by one.
///
/// The catalog performs no internal synchronisation. Embedders that share it
/// between threads must serialise every operation behind a single lock.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// The recipes, stored contiguously in catalog order.
    recipes: Vec<Recipe>,

    /// An index from recipe id to position in `recipes`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty catalog with pre-allocated capacity for the given
    /// number of recipes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            recipes: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Adds a recipe to the end of the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if a recipe with the same id is already
    /// present. The catalog is left unchanged in that case.
    #[instrument(level = "trace", skip(self, recipe), fields(id = %recipe.id()))]
    pub fn add(&mut self, recipe: Recipe) -> Result<(), Error> {
        match self.index.entry(recipe.id().to_owned()) {
            Entry::Occupied(entry) => {
                debug!(position = *entry.get(), "rejected duplicate recipe id");
                Err(Error::DuplicateKey(entry.key().clone()))
            }
            Entry::Vacant(entry) => {
                entry.insert(self.recipes.len());
                self.recipes.push(recipe);
                debug!(len = self.recipes.len(), "added recipe");
                Ok(())
            }
        }
    }

    /// The number of recipes in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Returns `true` if the catalog holds no recipes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Retrieves the recipe at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not less than
    /// [`len`](Self::len).
    pub fn get(&self, index: usize) -> Result<&Recipe, Error> {
        self.recipes.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.recipes.len(),
        })
    }

    /// Retrieves a recipe by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no recipe has that id. Stored ids are
    /// never blank, so an empty id is always a miss.
    pub fn get_by_id(&self, id: &str) -> Result<&Recipe, Error> {
        self.index
            .get(id)
            .map(|&position| &self.recipes[position])
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }

    /// Returns `true` if a recipe with this id is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The current position of the recipe with this id, if present.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Removes the recipe at the given position.
    ///
    /// Returns `true` if a recipe was removed, or `false` (leaving the catalog
    /// unchanged) if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> bool {
        self.take(index).is_some()
    }

    /// Removes the recipe with the given id.
    ///
    /// Returns `true` if a recipe was removed, or `false` if `id` is blank or
    /// not present.
    pub fn remove_by_id(&mut self, id: &str) -> bool {
        self.take_by_id(id).is_some()
    }

    /// Removes the recipe at the given position and returns it.
    ///
    /// Every recipe after `index` moves down one position; the relative order
    /// of the remaining recipes is unchanged.
    #[instrument(level = "trace", skip(self))]
    pub fn take(&mut self, index: usize) -> Option<Recipe> {
        if index >= self.recipes.len() {
            debug!(len = self.recipes.len(), "position out of bounds");
            return None;
        }

        let recipe = self.recipes.remove(index);
        self.index.remove(recipe.id());

        // Re-point the index entries of every recipe that shifted down.
        for (offset, shifted) in self.recipes[index..].iter().enumerate() {
            if let Some(position) = self.index.get_mut(shifted.id()) {
                *position = index + offset;
            }
        }

        debug!(id = recipe.id(), len = self.recipes.len(), "removed recipe");
        Some(recipe)
    }

    /// Removes the recipe with the given id and returns it.
    #[instrument(level = "trace", skip(self))]
    pub fn take_by_id(&mut self, id: &str) -> Option<Recipe> {
        let position = self.position(id)?;
        self.take(position)
    }

    /// Iterates over the recipes whose tier is at least `min_tier`, in catalog
    /// order.
    ///
    /// The iterator is lazy: recipes are tested as they are reached. It
    /// borrows the catalog, so the catalog cannot be modified while it is in
    /// use. Collect the ids first if you need to mutate based on the results.
    pub fn enumerate_by_tier(&self, min_tier: Tier) -> impl Iterator<Item = &Recipe> + '_ {
        self.recipes
            .iter()
            .filter(move |recipe| recipe.tier() >= min_tier)
    }

    /// Iterates over every recipe in catalog order.
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.recipes.iter()
    }

    /// Iterates over the recipe ids in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.recipes.iter().map(Recipe::id)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Recipe>> for Catalog {
    type Error = Error;

    /// Builds a catalog from recipes in the given order.
    ///
    /// Fails with [`Error::DuplicateKey`] on the first repeated id.
    fn try_from(recipes: Vec<Recipe>) -> Result<Self, Self::Error> {
        let mut catalog = Self::with_capacity(recipes.len());
        for recipe in recipes {
            catalog.add(recipe)?;
        }
        Ok(catalog)
    }
}
