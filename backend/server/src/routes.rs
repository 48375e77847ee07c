use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use bank::recipes::Recipe;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{error::AppError, search::query, state::AppState};

pub const RECIPES_PATH: &str = "/api/v1/recipes";

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

pub async fn recipes_handler(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let Query(params) = params.map_err(|rejection| {
        warn!("Rejected query string: {rejection}");

        AppError::InvalidRequest(rejection.body_text())
    })?;

    let recipes: Vec<Recipe> = query(&state.catalog, params.search.as_deref())
        .into_iter()
        .cloned()
        .collect();

    debug!(
        "Search {:?} matched {} of {} recipes",
        params.search,
        recipes.len(),
        state.catalog.len()
    );

    Ok(Json(recipes))
}
