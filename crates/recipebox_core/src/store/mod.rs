//! Recipe store contracts and persistence implementations.
//!
//! # Responsibility
//! - Own the persisted recipe collection exclusively.
//! - Expose list/append as the only access paths.
//!
//! # Invariants
//! - Append paths must validate the candidate before any I/O.
//! - `list` masks storage failures with an empty collection.
//! - `append` refuses to overwrite a collection it cannot read or decode.
//! - Write failures are surfaced and leave the previous state intact.

mod json_file;

pub use json_file::{JsonFileRecipeStore, DEFAULT_DATA_FILE};

use crate::model::candidate::RecipeCandidate;
use crate::model::recipe::{Recipe, RecipeValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for append operations.
#[derive(Debug)]
pub enum StoreError {
    /// Candidate rejected before touching storage.
    Validation(RecipeValidationError),
    /// Filesystem failure while reading or persisting the collection.
    Io(std::io::Error),
    /// Existing collection file could not be decoded; it is left untouched.
    Malformed(serde_json::Error),
    /// Collection could not be encoded.
    Encode(serde_json::Error),
}

impl StoreError {
    /// Whether the failure was caused by caller input.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Io(err) => write!(f, "recipe storage I/O failed: {err}"),
            Self::Malformed(err) => write!(f, "recipe storage holds malformed content: {err}"),
            Self::Encode(err) => write!(f, "recipe storage encoding failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

impl From<RecipeValidationError> for StoreError {
    fn from(value: RecipeValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Store interface for the recipe collection.
pub trait RecipeStore {
    /// Returns the full collection in insertion order.
    ///
    /// Never fails: unreadable or malformed storage reads as empty.
    fn list(&self) -> Vec<Recipe>;

    /// Validates the candidate, assigns an id and persists it at the end of
    /// the collection.
    ///
    /// Fails without writing when an existing collection cannot be read or
    /// decoded.
    fn append(&self, candidate: &RecipeCandidate) -> StoreResult<Recipe>;
}
