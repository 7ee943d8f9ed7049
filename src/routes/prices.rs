use axum::{Json, extract::State};

use crate::{
    error::AppResult,
    services::price_service::{self, ComparePricesRequest, ComparePricesResponse},
    state::AppState,
};

// Bare JSON body, not the ApiResponse envelope: the response shape is
// part of the storefront's existing wire contract.
#[utoipa::path(
    post,
    path = "/api/compare-prices",
    request_body = ComparePricesRequest,
    responses(
        (status = 200, description = "Estimated prices on amazon, flipkart and blinkit", body = ComparePricesResponse),
        (status = 400, description = "Product name and base price are required"),
        (status = 500, description = "Delegate misconfigured or its output unparseable"),
    ),
    tag = "Prices"
)]
pub async fn compare_prices(
    State(state): State<AppState>,
    Json(payload): Json<ComparePricesRequest>,
) -> AppResult<Json<ComparePricesResponse>> {
    let response = price_service::compare_prices(&state, payload).await?;
    Ok(Json(response))
}
