use std::{fmt, num::NonZeroU32};

use non_empty_string::NonEmptyString;
use serde::{Deserialize, Serialize};

use crate::domain::error::{non_blank, Error};

/// A quantity of a single ingredient, identified by its code.
///
/// Ingredients are plain values: two ingredients with the same code and
/// quantity are equal, and a recipe may list the same code more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIngredient", into = "RawIngredient")]
pub struct Ingredient {
    code: NonEmptyString,
    quantity: NonZeroU32,
}

impl Ingredient {
    /// Creates a new ingredient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `code` is empty or only
    /// whitespace, or if `quantity` is less than one (or does not fit in a
    /// `u32`).
    pub fn new(code: impl Into<String>, quantity: i64) -> Result<Self, Error> {
        let code = non_blank(code.into(), "Ingredient code")?;
        let quantity = u32::try_from(quantity)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| Error::invalid(format!("Quantity must be at least 1, got {quantity}")))?;

        Ok(Self { code, quantity })
    }

    /// The ingredient code, e.g. `Wheat`.
    #[must_use]
    pub fn code(&self) -> &str {
        self.code.as_str()
    }

    /// How many units of the ingredient are required.
    #[must_use]
    pub const fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}×{}", self.code, self.quantity)
    }
}

/// Unvalidated form of an [`Ingredient`], as found in seed files.
#[derive(Debug, Serialize, Deserialize)]
struct RawIngredient {
    code: String,
    quantity: i64,
}

impl TryFrom<RawIngredient> for Ingredient {
    type Error = Error;

    fn try_from(raw: RawIngredient) -> Result<Self, Self::Error> {
        Self::new(raw.code, raw.quantity)
    }
}

impl From<Ingredient> for RawIngredient {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            code: ingredient.code.into_inner(),
            quantity: i64::from(ingredient.quantity.get()),
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test]
    fn valid_ingredient() {
        let ingredient = Ingredient::new("Wheat", 3).unwrap();
        assert_eq!(ingredient.code(), "Wheat");
        assert_eq!(ingredient.quantity().get(), 3);
    }

    #[test_case(0; "zero")]
    #[test_case(-1; "negative")]
    #[test_case(i64::from(u32::MAX) + 1; "too large")]
    fn invalid_quantity(quantity: i64) {
        let error = Ingredient::new("Wheat", quantity).unwrap_err();
        assert!(matches!(error, Error::InvalidArgument(_)));
    }

    #[test_case(""; "empty")]
    #[test_case("  "; "whitespace")]
    fn invalid_code(code: &str) {
        let error = Ingredient::new(code, 1).unwrap_err();
        assert_eq!(
            error,
            Error::InvalidArgument("Ingredient code cannot be empty".to_string())
        );
    }

    #[test]
    fn display_uses_multiplication_sign() {
        let ingredient = Ingredient::new("Eggs", 3).unwrap();
        assert_eq!(ingredient.to_string(), "Eggs×3");
    }

    #[test]
    fn equality_is_by_value() {
        assert_eq!(
            Ingredient::new("Flour", 2).unwrap(),
            Ingredient::new("Flour", 2).unwrap()
        );
        assert_ne!(
            Ingredient::new("Flour", 2).unwrap(),
            Ingredient::new("Flour", 1).unwrap()
        );
    }

    #[test]
    fn deserialization_validates() {
        #[derive(Deserialize)]
        struct Wrapper {
            ingredient: Ingredient,
        }

        let ok: Wrapper = toml::from_str("ingredient = { code = \"Milk\", quantity = 1 }").unwrap();
        assert_eq!(ok.ingredient, Ingredient::new("Milk", 1).unwrap());

        let err = toml::from_str::<Wrapper>("ingredient = { code = \"Milk\", quantity = 0 }");
        assert!(err.is_err());
    }
}
