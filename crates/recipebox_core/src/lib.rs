//! Core domain logic for RecipeBox.
//! This crate is the single source of truth for recipe invariants and owns
//! the persisted catalog.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::candidate::{split_ingredients, NewRecipe, RecipeCandidate};
pub use model::recipe::{Recipe, RecipeId, RecipeValidationError};
pub use service::recipe_service::RecipeService;
pub use store::{JsonFileRecipeStore, RecipeStore, StoreError, StoreResult, DEFAULT_DATA_FILE};

/// Minimal health-check API.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
