//! Recipe domain model.
//!
//! # Responsibility
//! - Define the canonical persisted recipe record.
//! - Own the record-level invariants checked on every read and write.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes.
//! - `title` is never blank for a persisted recipe.
//! - `ingredients` keeps the submitted order.
//!
//! # See also
//! - `model::candidate` for the write-side input shape.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque recipe identifier.
///
/// Any string loaded from disk is accepted, so ids written by older
/// deployments (plain millisecond timestamps) stay valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl RecipeId {
    /// Generates a fresh time-ordered identifier.
    pub fn generate() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RecipeId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl Display for RecipeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validation failures for recipe input and persisted records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeValidationError {
    /// Title missing, not text, or blank after trimming.
    TitleRequired,
    /// Ingredients neither a list of strings nor a comma-separated string.
    InvalidIngredients,
    /// Instructions present but not text.
    InvalidInstructions,
}

impl Display for RecipeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TitleRequired => write!(f, "title required"),
            Self::InvalidIngredients => write!(f, "invalid ingredients"),
            Self::InvalidInstructions => write!(f, "invalid instructions"),
        }
    }
}

impl Error for RecipeValidationError {}

/// Canonical persisted recipe record.
///
/// Deserialization goes through [`Recipe::validate`], so a collection file
/// holding a blank-titled record fails to decode as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecipeWire")]
pub struct Recipe {
    pub id: RecipeId,
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

#[derive(Deserialize)]
struct RecipeWire {
    id: RecipeId,
    title: String,
    #[serde(default)]
    ingredients: Vec<String>,
    #[serde(default)]
    instructions: String,
}

impl TryFrom<RecipeWire> for Recipe {
    type Error = RecipeValidationError;

    fn try_from(value: RecipeWire) -> Result<Self, Self::Error> {
        let recipe = Self {
            id: value.id,
            title: value.title,
            ingredients: value.ingredients,
            instructions: value.instructions,
        };
        recipe.validate()?;
        Ok(recipe)
    }
}

impl Recipe {
    /// Checks record-level invariants.
    ///
    /// # Errors
    /// - `TitleRequired` when `title` is blank.
    pub fn validate(&self) -> Result<(), RecipeValidationError> {
        if self.title.trim().is_empty() {
            return Err(RecipeValidationError::TitleRequired);
        }
        Ok(())
    }

    /// Case-insensitive substring match over title, ingredients and
    /// instructions. A blank query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }

        self.title.to_lowercase().contains(&needle)
            || self
                .ingredients
                .iter()
                .any(|item| item.to_lowercase().contains(&needle))
            || self.instructions.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::{Recipe, RecipeId};

    fn sample() -> Recipe {
        Recipe {
            id: RecipeId::from("r1"),
            title: "Tomato Soup".to_string(),
            ingredients: vec!["Tomatoes".to_string(), "Basil".to_string()],
            instructions: "Simmer gently".to_string(),
        }
    }

    #[test]
    fn generated_ids_differ() {
        assert_ne!(RecipeId::generate(), RecipeId::generate());
    }

    #[test]
    fn matches_checks_every_text_field_case_insensitively() {
        let recipe = sample();
        assert!(recipe.matches("soup"));
        assert!(recipe.matches("BASIL"));
        assert!(recipe.matches("simmer"));
        assert!(recipe.matches("   "));
        assert!(!recipe.matches("chocolate"));
    }
}
