use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use axum::routing::get;
use axum::Router;
use catalog_core::{Category, CategoryRequest, Failure};
use catalog_store::{CategoryStore, StoreError};
use http::StatusCode;

use crate::extract::ValidatedJson;
use crate::normalize::Raised;

/// Store handle shared by all category handlers
pub type SharedStore = Arc<dyn CategoryStore>;

/// Category resource routes
pub fn router(store: SharedStore) -> Router {
    Router::new()
        .route("/api/v1/categories", get(find_all).post(save))
        .route("/api/v1/categories/{id}", get(find_by_id))
        .with_state(store)
}

async fn find_all(State(store): State<SharedStore>) -> Result<Json<Vec<Category>>, Raised> {
    let categories = store.find_all().await.map_err(internal)?;
    Ok(Json(categories))
}

async fn find_by_id(State(store): State<SharedStore>, Path(id): Path<String>) -> Result<Json<Category>, Raised> {
    let category = store.find_by_id(&id).await.map_err(internal)?;

    category
        .map(Json)
        .ok_or_else(|| Raised(Failure::invalid_request(format!("Category not found with this id: {id}"))))
}

async fn save(
    State(store): State<SharedStore>,
    ValidatedJson(request): ValidatedJson<CategoryRequest>,
) -> Result<(StatusCode, Json<Category>), Raised> {
    let category = store.save(request).await.map_err(internal)?;
    Ok((StatusCode::CREATED, Json(category)))
}

fn internal(error: StoreError) -> Raised {
    Raised(Failure::internal(error.to_string()))
}
