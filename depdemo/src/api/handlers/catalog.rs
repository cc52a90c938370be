//! Listing endpoints sharing the pagination extractors.
//!
//! All three fabricate their listings in memory; the pagination window is
//! the only thing that varies across requests.

use axum::{Json, extract::Query};

use crate::api::models::listings::{ItemsResponse, ListEntry, ProductsResponse, UsersResponse, WindowParams};
use crate::api::models::pagination::{Pagination, ProductPagination};

#[utoipa::path(
    get,
    path = "/items/",
    tag = "listings",
    summary = "List items",
    description = "Get a fabricated list of items sized by the pagination window",
    params(Pagination),
    responses(
        (status = 200, description = "Items for the requested window", body = ItemsResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn read_items(Query(pagination): Query<Pagination>) -> Json<ItemsResponse> {
    let (skip, limit) = pagination.window();
    Json(ItemsResponse {
        message: "Listing items".to_string(),
        params: WindowParams { skip, limit },
        items: ListEntry::fabricate("Item", skip, limit),
    })
}

#[utoipa::path(
    get,
    path = "/users/",
    tag = "listings",
    summary = "List users",
    description = "Get a fabricated list of users, reusing the same pagination contract as /items/",
    params(Pagination),
    responses(
        (status = 200, description = "Users for the requested window", body = UsersResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn read_users(Query(pagination): Query<Pagination>) -> Json<UsersResponse> {
    let (skip, limit) = pagination.window();
    Json(UsersResponse {
        message: "Listing users".to_string(),
        params: WindowParams { skip, limit },
        users: ListEntry::fabricate("User", skip, limit),
    })
}

#[utoipa::path(
    get,
    path = "/products/",
    tag = "listings",
    summary = "List products",
    description = "Get a fabricated list of products; the product window has a tighter ceiling (max 100)",
    params(ProductPagination),
    responses(
        (status = 200, description = "Products for the requested window", body = ProductsResponse),
    )
)]
#[tracing::instrument(skip_all)]
pub async fn read_products(Query(pagination): Query<ProductPagination>) -> Json<ProductsResponse> {
    let (skip, limit) = pagination.window();
    Json(ProductsResponse {
        message: "Listing products".to_string(),
        skip,
        limit,
        products: ListEntry::fabricate("Product", skip, limit),
    })
}
