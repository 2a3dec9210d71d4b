//! Recipe domain model.
//!
//! # Responsibility
//! - Define the persisted `Recipe` record and its identifier.
//! - Define the write-side candidate and its normalization rules.
//!
//! # Invariants
//! - Every persisted recipe has a non-blank title and a stable `RecipeId`.
//! - Candidates become records only through validation.

pub mod candidate;
pub mod recipe;
