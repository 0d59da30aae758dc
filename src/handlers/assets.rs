use axum::{
    extract::{Path, Query, State},
    response::Json,
};

use crate::error::ApiResult;
use crate::handlers::AppState;
use crate::models::{AssetListOut, AssetOut, ListAssetsQuery};
use crate::services::AssetService;

/// Coerce the requested page to at least 1
fn clamp_page(page: i64) -> u64 {
    page.max(1) as u64
}

/// Clamp the requested page size into [1, 100]
fn clamp_page_size(page_size: i64) -> u64 {
    page_size.clamp(1, 100) as u64
}

/// Offset of the first row on the requested page; saturates rather than
/// overflowing for absurdly large page numbers
fn page_offset(page: u64, page_size: u64) -> u64 {
    (page - 1).saturating_mul(page_size)
}

/// Whether rows remain beyond the requested page
fn has_more(offset: u64, page_size: u64, total: u64) -> bool {
    offset.saturating_add(page_size) < total
}

/// Handler for GET /assets
pub async fn list_assets(
    State(state): State<AppState>,
    Query(params): Query<ListAssetsQuery>,
) -> ApiResult<Json<AssetListOut>> {
    let service = AssetService::new(state.assets.clone());

    let page = clamp_page(params.page);
    let page_size = clamp_page_size(params.page_size);
    let offset = page_offset(page, page_size);

    let (assets, total) = service.list(&params.search, page_size, offset).await?;

    Ok(Json(AssetListOut {
        data: assets.into_iter().map(AssetOut::from).collect(),
        page,
        page_size,
        total,
        has_more: has_more(offset, page_size, total),
    }))
}

/// Handler for GET /assets/{asset_id}
pub async fn get_asset(
    State(state): State<AppState>,
    Path(asset_id): Path<String>,
) -> ApiResult<Json<AssetOut>> {
    let service = AssetService::new(state.assets.clone());

    let asset = service.get(&asset_id).await?;
    Ok(Json(asset.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_is_coerced_to_at_least_one() {
        assert_eq!(clamp_page(0), 1);
        assert_eq!(clamp_page(-1), 1);
        assert_eq!(clamp_page(1), 1);
        assert_eq!(clamp_page(7), 7);
    }

    #[test]
    fn page_size_is_clamped_into_range() {
        assert_eq!(clamp_page_size(0), 1);
        assert_eq!(clamp_page_size(-5), 1);
        assert_eq!(clamp_page_size(20), 20);
        assert_eq!(clamp_page_size(100), 100);
        assert_eq!(clamp_page_size(200), 100);
    }

    #[test]
    fn page_offset_saturates_for_huge_pages() {
        assert_eq!(page_offset(1, 20), 0);
        assert_eq!(page_offset(3, 10), 20);
        assert_eq!(page_offset(clamp_page(i64::MAX), 100), u64::MAX);
    }

    #[test]
    fn has_more_tracks_remaining_rows() {
        // 25 rows paged by 10: pages 1 and 2 have more, page 3 does not
        assert!(has_more(0, 10, 25));
        assert!(has_more(10, 10, 25));
        assert!(!has_more(20, 10, 25));

        // Exact fit
        assert!(!has_more(10, 10, 20));

        // Empty catalog
        assert!(!has_more(0, 20, 0));
    }
}
