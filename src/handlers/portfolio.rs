use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::handlers::AppState;
use crate::models::{PortfolioItemCreateIn, PortfolioItemOut, PortfolioItemUpdateIn};
use crate::services::PortfolioService;

fn portfolio_service(state: &AppState) -> PortfolioService {
    PortfolioService::new(state.portfolio.clone(), state.assets.clone())
}

/// Convert a JSON number into a scale-8 decimal
fn to_decimal(value: f64) -> ApiResult<Decimal> {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp(8))
        .ok_or_else(|| ApiError::InvalidRequest(format!("value out of range: {value}")))
}

/// Handler for GET /portfolio
pub async fn list_portfolio(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PortfolioItemOut>>> {
    let items = portfolio_service(&state).list().await?;

    Ok(Json(
        items
            .into_iter()
            .map(|(item, asset)| PortfolioItemOut::from_parts(item, asset))
            .collect(),
    ))
}

/// Handler for POST /portfolio
pub async fn create_portfolio_item(
    State(state): State<AppState>,
    Json(payload): Json<PortfolioItemCreateIn>,
) -> ApiResult<Json<PortfolioItemOut>> {
    let quantity = to_decimal(payload.quantity)?;
    let avg_price = to_decimal(payload.avg_price)?;

    let (item, asset) = portfolio_service(&state)
        .create(&payload.asset_id, quantity, avg_price)
        .await?;
    Ok(Json(PortfolioItemOut::from_parts(item, asset)))
}

/// Handler for GET /portfolio/{portfolio_item_id}
pub async fn get_portfolio_item(
    State(state): State<AppState>,
    Path(portfolio_item_id): Path<Uuid>,
) -> ApiResult<Json<PortfolioItemOut>> {
    let (item, asset) = portfolio_service(&state).get(portfolio_item_id).await?;
    Ok(Json(PortfolioItemOut::from_parts(item, asset)))
}

/// Handler for PUT /portfolio/{portfolio_item_id}
pub async fn update_portfolio_item(
    State(state): State<AppState>,
    Path(portfolio_item_id): Path<Uuid>,
    Json(payload): Json<PortfolioItemUpdateIn>,
) -> ApiResult<Json<PortfolioItemOut>> {
    let quantity = payload.quantity.map(to_decimal).transpose()?;
    let avg_price = payload.avg_price.map(to_decimal).transpose()?;

    let (item, asset) = portfolio_service(&state)
        .update(portfolio_item_id, quantity, avg_price)
        .await?;
    Ok(Json(PortfolioItemOut::from_parts(item, asset)))
}

/// Handler for DELETE /portfolio/{portfolio_item_id}
pub async fn delete_portfolio_item(
    State(state): State<AppState>,
    Path(portfolio_item_id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    portfolio_service(&state).delete(portfolio_item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
