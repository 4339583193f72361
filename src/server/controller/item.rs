use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::item::{CreateCommentDto, CreateItemDto, ItemDto, UpdateItemDto},
    server::{
        controller::PageQuery, error::AppError, middleware::identity::SharerId,
        service::item::ItemService, state::AppState,
    },
};

#[derive(Deserialize)]
pub struct SearchQuery {
    pub text: Option<String>,
    #[serde(default)]
    pub from: u64,
    #[serde(default = "default_search_size")]
    pub size: u64,
}

fn default_search_size() -> u64 {
    10
}

/// POST /items - Create an item owned by the calling user
pub async fn create(
    State(state): State<AppState>,
    SharerId(owner_id): SharerId,
    Json(dto): Json<CreateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemService::new(&state.db).add(owner_id, dto).await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// PATCH /items/{item_id} - Owner-only partial update
///
/// Fields are tri-state: absent fields stay untouched, explicit null or
/// blank text is rejected, and `available` must parse as boolean text.
pub async fn update(
    State(state): State<AppState>,
    SharerId(owner_id): SharerId,
    Path(item_id): Path<i32>,
    Json(dto): Json<UpdateItemDto>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemService::new(&state.db)
        .update(owner_id, item_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// GET /items/{item_id} - Fetch one item
///
/// The response carries the item's comments; when the caller is the owner
/// it also carries the last and next APPROVED bookings.
pub async fn get_by_id(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let item = ItemService::new(&state.db).get_by_id(item_id, user_id).await?;

    Ok((StatusCode::OK, Json(item)))
}

/// GET /items?from=&size= - The calling user's items
pub async fn get_all(
    State(state): State<AppState>,
    SharerId(owner_id): SharerId,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let items = ItemService::new(&state.db)
        .get_all_for_owner(owner_id, query.from, query.size)
        .await?;

    Ok((StatusCode::OK, Json(items)))
}

/// GET /items/search?text=&from=&size= - Search available items
pub async fn search(
    State(state): State<AppState>,
    SharerId(_user_id): SharerId,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, AppError> {
    let items = ItemService::new(&state.db)
        .search(query.text.as_deref(), query.from, query.size)
        .await?;

    let dtos: Vec<ItemDto> = items.into_iter().map(|item| item.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// DELETE /items/{item_id} - Delete an item, owner only
pub async fn delete(
    State(state): State<AppState>,
    SharerId(owner_id): SharerId,
    Path(item_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ItemService::new(&state.db).delete(owner_id, item_id).await?;

    Ok(StatusCode::OK)
}

/// POST /items/{item_id}/comment - Comment on an item after a completed
/// booking
pub async fn add_comment(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(item_id): Path<i32>,
    Json(dto): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let comment = ItemService::new(&state.db)
        .add_comment(user_id, item_id, dto)
        .await?;

    Ok((StatusCode::OK, Json(comment)))
}
