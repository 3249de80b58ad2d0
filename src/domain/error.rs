/// Errors raised by ingredient and recipe construction and by catalog
/// operations.
///
/// Every failure is reported to the immediate caller of the operation that
/// detected it. A failed catalog mutation leaves the catalog unchanged.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// Malformed or missing input, such as a blank string or a zero quantity.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A recipe with this id is already in the catalog.
    #[error("recipe with id '{0}' already exists")]
    DuplicateKey(String),

    /// No recipe with this id is in the catalog.
    #[error("recipe with id '{0}' not found")]
    NotFound(String),

    /// The position is past the end of the catalog.
    #[error("index {index} out of range for catalog of {len} recipes")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of recipes in the catalog at the time of the request.
        len: usize,
    },
}

impl Error {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Returns the input as a [`NonEmptyString`] if it contains anything other
/// than whitespace.
///
/// [`NonEmptyString`]: non_empty_string::NonEmptyString
pub(crate) fn non_blank(
    value: String,
    what: &str,
) -> Result<non_empty_string::NonEmptyString, Error> {
    if value.trim().is_empty() {
        return Err(Error::invalid(format!("{what} cannot be empty")));
    }
    non_empty_string::NonEmptyString::new(value)
        .map_err(|_| Error::invalid(format!("{what} cannot be empty")))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(""; "empty")]
    #[test_case("   "; "spaces")]
    #[test_case("\t\n"; "tab and newline")]
    fn blank_strings_are_rejected(value: &str) {
        let error = non_blank(value.to_string(), "Recipe ID").unwrap_err();
        assert_eq!(
            error,
            Error::InvalidArgument("Recipe ID cannot be empty".to_string())
        );
    }

    #[test]
    fn surrounding_whitespace_is_kept() {
        let value = non_blank(" Wheat ".to_string(), "Ingredient code").unwrap();
        assert_eq!(value.as_str(), " Wheat ");
    }

    #[test]
    fn index_out_of_range_message() {
        let error = Error::IndexOutOfRange { index: 3, len: 3 };
        assert_eq!(
            error.to_string(),
            "index 3 out of range for catalog of 3 recipes"
        );
    }
}
