//! Write-side recipe input.
//!
//! # Responsibility
//! - Carry loosely-typed submitted fields until they are validated.
//! - Normalize title, ingredients and instructions into a [`NewRecipe`].
//!
//! # Invariants
//! - A `NewRecipe` is only produced by [`RecipeCandidate::validate`].
//! - `NewRecipe::title` is trimmed and non-empty.

use crate::model::recipe::{Recipe, RecipeId, RecipeValidationError};
use serde_json::Value;

/// Submitted recipe fields before validation.
///
/// Each field keeps the raw JSON shape so that validation, not
/// deserialization, decides which inputs are acceptable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeCandidate {
    pub title: Option<Value>,
    pub ingredients: Option<Value>,
    pub instructions: Option<Value>,
}

/// Validated, normalized recipe input waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl RecipeCandidate {
    /// Builds a candidate from plain text fields.
    ///
    /// `ingredients` goes through the comma-separated path.
    pub fn from_text(
        title: impl Into<String>,
        ingredients: Option<String>,
        instructions: Option<String>,
    ) -> Self {
        Self {
            title: Some(Value::String(title.into())),
            ingredients: ingredients.map(Value::String),
            instructions: instructions.map(Value::String),
        }
    }

    /// Validates and normalizes the candidate.
    ///
    /// # Errors
    /// - `TitleRequired` when title is missing, not a string, or blank.
    /// - `InvalidIngredients` when ingredients is neither a string nor a
    ///   list of strings.
    /// - `InvalidInstructions` when instructions is present but not a string.
    pub fn validate(&self) -> Result<NewRecipe, RecipeValidationError> {
        let title = match self.title.as_ref() {
            Some(Value::String(value)) if !value.trim().is_empty() => value.trim().to_string(),
            _ => return Err(RecipeValidationError::TitleRequired),
        };

        Ok(NewRecipe {
            title,
            ingredients: normalize_ingredients(self.ingredients.as_ref())?,
            instructions: normalize_instructions(self.instructions.as_ref())?,
        })
    }
}

impl From<Value> for RecipeCandidate {
    /// Non-object bodies carry no fields and fail validation on title.
    fn from(value: Value) -> Self {
        let Value::Object(mut fields) = value else {
            return Self::default();
        };
        Self {
            title: fields.remove("title"),
            ingredients: fields.remove("ingredients"),
            instructions: fields.remove("instructions"),
        }
    }
}

impl NewRecipe {
    /// Attaches an id, producing the persisted record.
    pub fn into_recipe(self, id: RecipeId) -> Recipe {
        Recipe {
            id,
            title: self.title,
            ingredients: self.ingredients,
            instructions: self.instructions,
        }
    }
}

/// Splits a comma-separated ingredient blob.
///
/// Pieces are trimmed and empty pieces dropped.
pub fn split_ingredients(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

fn normalize_ingredients(value: Option<&Value>) -> Result<Vec<String>, RecipeValidationError> {
    match value {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::String(text)) => Ok(split_ingredients(text)),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => Ok(text.clone()),
                _ => Err(RecipeValidationError::InvalidIngredients),
            })
            .collect(),
        Some(_) => Err(RecipeValidationError::InvalidIngredients),
    }
}

fn normalize_instructions(value: Option<&Value>) -> Result<String, RecipeValidationError> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.trim().to_string()),
        Some(_) => Err(RecipeValidationError::InvalidInstructions),
    }
}
