//! Error types for Bookly.

use rust_decimal::Decimal;

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised while building catalog items.
///
/// Filtering never fails; these only guard the item invariants at load time.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("Rating {value} is outside 0.0..=5.0")]
    RatingOutOfRange { value: f32 },

    #[error("Price {value} is negative")]
    NegativePrice { value: Decimal },

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

/// Errors from a preferences store.
///
/// Never fatal: the onboarding manager reports them to the user and still
/// completes the flow.
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    #[error("Failed to save preferences: {reason}")]
    SaveFailed { reason: String },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_errors_convert_into_top_level() {
        let err: Error = CatalogError::UnknownLanguage("klingon".into()).into();
        assert!(matches!(err, Error::Catalog(CatalogError::UnknownLanguage(_))));
        assert_eq!(err.to_string(), "Catalog error: Unknown language: klingon");
    }
}
