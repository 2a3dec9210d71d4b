//! Recipe use-case service.
//!
//! # Responsibility
//! - Provide list/add/search entry points for server and CLI callers.
//! - Delegate persistence to store implementations.
//!
//! # Invariants
//! - Service APIs never bypass store validation/persistence contracts.
//! - Search is a read-side projection and never writes.

use crate::model::candidate::RecipeCandidate;
use crate::model::recipe::Recipe;
use crate::store::{RecipeStore, StoreResult};
use log::{info, warn};

/// Use-case service wrapper for recipe catalog operations.
pub struct RecipeService<S: RecipeStore> {
    store: S,
}

impl<S: RecipeStore> RecipeService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrows the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns the full catalog in insertion order.
    pub fn list_recipes(&self) -> Vec<Recipe> {
        self.store.list()
    }

    /// Validates and appends one recipe.
    ///
    /// Returns store-level validation or storage errors unchanged.
    pub fn add_recipe(&self, candidate: &RecipeCandidate) -> StoreResult<Recipe> {
        match self.store.append(candidate) {
            Ok(recipe) => {
                info!(
                    "event=recipe_append module=service status=ok id={} ingredients={}",
                    recipe.id,
                    recipe.ingredients.len()
                );
                Ok(recipe)
            }
            Err(err) if err.is_validation() => {
                info!(
                    "event=recipe_append module=service status=rejected reason={}",
                    err
                );
                Err(err)
            }
            Err(err) => {
                warn!(
                    "event=recipe_append module=service status=error error_code=storage_failed"
                );
                Err(err)
            }
        }
    }

    /// Returns recipes whose title, ingredients or instructions contain
    /// `query`, ignoring case. A blank query returns the full catalog.
    pub fn search_recipes(&self, query: &str) -> Vec<Recipe> {
        self.store
            .list()
            .into_iter()
            .filter(|recipe| recipe.matches(query))
            .collect()
    }
}
