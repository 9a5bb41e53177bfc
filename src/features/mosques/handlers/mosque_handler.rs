use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppQuery;
use crate::features::mosques::dtos::{
    DonationResponseDto, ListMosquesQuery, MosqueWithDonationsDto,
};
use crate::features::mosques::services::{MosqueFilter, MosqueService};
use crate::shared::types::{ApiResponse, Meta};

/// List or search mosques
///
/// Filters combine with AND. Omitted filters, empty values and the
/// "all cities" / "all sizes" sentinels match everything.
#[utoipa::path(
    get,
    path = "/api/mosques",
    params(ListMosquesQuery),
    responses(
        (status = 200, description = "Mosques with their donation campaigns", body = ApiResponse<Vec<MosqueWithDonationsDto>>),
        (status = 400, description = "Invalid query string")
    ),
    tag = "mosques"
)]
pub async fn list_mosques(
    State(service): State<Arc<MosqueService>>,
    AppQuery(query): AppQuery<ListMosquesQuery>,
) -> Result<Json<ApiResponse<Vec<MosqueWithDonationsDto>>>> {
    let filter = MosqueFilter::from_query(&query);
    let mosques = service.search(&filter).await;
    let meta = Meta::total(mosques.len());

    Ok(Json(ApiResponse::success(Some(mosques), None, Some(meta))))
}

/// Get mosque by ID
#[utoipa::path(
    get,
    path = "/api/mosques/{id}",
    params(
        ("id" = String, Path, description = "Mosque ID")
    ),
    responses(
        (status = 200, description = "Mosque found", body = ApiResponse<MosqueWithDonationsDto>),
        (status = 404, description = "Mosque not found")
    ),
    tag = "mosques"
)]
pub async fn get_mosque(
    State(service): State<Arc<MosqueService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<MosqueWithDonationsDto>>> {
    let mosque = service.get_by_id(&id).await?;
    Ok(Json(ApiResponse::success(Some(mosque), None, None)))
}

/// List donation campaigns of a mosque
///
/// Returns an empty list for unknown mosque ids.
#[utoipa::path(
    get,
    path = "/api/mosques/{id}/donations",
    params(
        ("id" = String, Path, description = "Mosque ID")
    ),
    responses(
        (status = 200, description = "Donation campaigns", body = ApiResponse<Vec<DonationResponseDto>>),
    ),
    tag = "mosques"
)]
pub async fn list_mosque_donations(
    State(service): State<Arc<MosqueService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Vec<DonationResponseDto>>>> {
    let donations = service.list_donations(&id).await;
    let meta = Meta::total(donations.len());

    Ok(Json(ApiResponse::success(Some(donations), None, Some(meta))))
}
