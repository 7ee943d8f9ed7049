use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::WishlistItem,
    response::{ApiResponse, Meta},
    state::AppState,
};

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddToWishlistRequest {
    pub product_id: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WishlistList {
    pub items: Vec<WishlistItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WishlistMembership {
    pub in_wishlist: bool,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wishlist).post(add_to_wishlist))
        .route(
            "/{product_id}",
            get(wishlist_membership).delete(remove_from_wishlist),
        )
}

#[utoipa::path(
    get,
    path = "/api/wishlist",
    responses(
        (status = 200, description = "List wishlist items", body = ApiResponse<WishlistList>)
    ),
    tag = "Wishlist"
)]
pub async fn list_wishlist(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<WishlistList>>> {
    let data = WishlistList {
        items: state.store.wishlist(),
    };
    Ok(Json(ApiResponse::success("OK", data, None)))
}

#[utoipa::path(
    post,
    path = "/api/wishlist",
    request_body = AddToWishlistRequest,
    responses(
        (status = 200, description = "Added to wishlist (idempotent)", body = ApiResponse<WishlistItem>),
        (status = 400, description = "Bad Request"),
    ),
    tag = "Wishlist"
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    Json(payload): Json<AddToWishlistRequest>,
) -> AppResult<Json<ApiResponse<WishlistItem>>> {
    let product = match state.catalog.get(&payload.product_id) {
        Some(p) => p,
        None => return Err(AppError::BadRequest("product not found".to_string())),
    };

    // Duplicate adds return the first-added entry unchanged.
    let item = state.store.add_to_wishlist(WishlistItem {
        id: product.id.clone(),
        name: product.name.clone(),
        price: product.price,
        image: product.image.clone(),
        rating: product.rating,
        reviews: product.reviews,
        stock: product.stock,
    });

    Ok(Json(ApiResponse::success(
        "Added to wishlist",
        item,
        Some(Meta::empty()),
    )))
}

#[utoipa::path(
    get,
    path = "/api/wishlist/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Wishlist membership", body = ApiResponse<WishlistMembership>),
    ),
    tag = "Wishlist"
)]
pub async fn wishlist_membership(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<Json<ApiResponse<WishlistMembership>>> {
    let data = WishlistMembership {
        in_wishlist: state.store.is_in_wishlist(&product_id),
    };
    Ok(Json(ApiResponse::success("OK", data, None)))
}

#[utoipa::path(
    delete,
    path = "/api/wishlist/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Removed from wishlist", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Wishlist item not found"),
    ),
    tag = "Wishlist"
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    if !state.store.remove_from_wishlist(&product_id) {
        return Err(AppError::NotFound);
    }

    Ok(Json(ApiResponse::success(
        "Removed from wishlist",
        serde_json::json!({}),
        Some(Meta::empty()),
    )))
}
