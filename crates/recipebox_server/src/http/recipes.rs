//! Recipe catalog handlers.

use super::error::ApiError;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use recipebox_core::{Recipe, RecipeCandidate};
use serde_json::Value;
use std::sync::Arc;

/// GET /api/recipes
///
/// Returns the full catalog in insertion order.
pub async fn list_recipes(State(state): State<AppState>) -> Result<Json<Vec<Recipe>>, ApiError> {
    let service = Arc::clone(&state.service);
    let recipes = tokio::task::spawn_blocking(move || service.list_recipes()).await?;
    Ok(Json(recipes))
}

/// POST /api/recipes
///
/// Returns:
/// - 201 Created with the stored recipe
/// - 400 Bad Request on invalid JSON or failed validation
/// - 500 Internal Server Error if the catalog cannot be written
///
/// A body sent without a JSON content type carries no fields, so it fails
/// validation on the title rather than as invalid JSON.
pub async fn create_recipe(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Recipe>), ApiError> {
    let body = match body {
        Ok(Json(body)) => body,
        Err(JsonRejection::MissingJsonContentType(_)) => Value::Null,
        Err(rejection) => return Err(ApiError::InvalidBody(rejection)),
    };
    let candidate = RecipeCandidate::from(body);

    let service = Arc::clone(&state.service);
    let recipe = tokio::task::spawn_blocking(move || service.add_recipe(&candidate)).await??;
    Ok((StatusCode::CREATED, Json(recipe)))
}
