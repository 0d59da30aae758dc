use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use uuid::Uuid;

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{FavoriteIn, FavoriteOut};
use crate::services::FavoriteService;

fn favorite_service(state: &AppState) -> FavoriteService {
    FavoriteService::new(state.favorites.clone(), state.assets.clone())
}

/// Handler for GET /favorites
pub async fn list_favorites(State(state): State<AppState>) -> ApiResult<Json<Vec<FavoriteOut>>> {
    let favorites = favorite_service(&state).list().await?;

    Ok(Json(
        favorites
            .into_iter()
            .map(|(favorite, asset)| FavoriteOut::from_parts(favorite, asset))
            .collect(),
    ))
}

/// Handler for POST /favorites
pub async fn create_favorite(
    State(state): State<AppState>,
    Json(payload): Json<FavoriteIn>,
) -> ApiResult<Json<FavoriteOut>> {
    let (favorite, asset) = favorite_service(&state).create(&payload.asset_id).await?;
    Ok(Json(FavoriteOut::from_parts(favorite, asset)))
}

/// Handler for GET /favorites/{favorite_id}
pub async fn get_favorite(
    State(state): State<AppState>,
    Path(favorite_id): Path<Uuid>,
) -> ApiResult<Json<FavoriteOut>> {
    let (favorite, asset) = favorite_service(&state).get(favorite_id).await?;
    Ok(Json(FavoriteOut::from_parts(favorite, asset)))
}

/// Handler for PUT /favorites/{favorite_id}
pub async fn update_favorite(
    State(state): State<AppState>,
    Path(favorite_id): Path<Uuid>,
    Json(payload): Json<FavoriteIn>,
) -> ApiResult<Json<FavoriteOut>> {
    let (favorite, asset) = favorite_service(&state)
        .update(favorite_id, &payload.asset_id)
        .await?;
    Ok(Json(FavoriteOut::from_parts(favorite, asset)))
}

/// Handler for DELETE /favorites/{favorite_id}
pub async fn delete_favorite(
    State(state): State<AppState>,
    Path(favorite_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    favorite_service(&state).delete(favorite_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
