use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::request::CreateItemRequestDto,
    server::{
        controller::PageQuery, error::AppError, middleware::identity::SharerId,
        service::request::ItemRequestService, state::AppState,
    },
};

/// POST /requests - Create an item request for the calling user
pub async fn create(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Json(dto): Json<CreateItemRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let request = ItemRequestService::new(&state.db).add(user_id, dto).await?;

    Ok((StatusCode::OK, Json(request)))
}

/// GET /requests?from=&size= - The calling user's own requests
pub async fn get_own(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let requests = ItemRequestService::new(&state.db)
        .get_own(user_id, query.from, query.size)
        .await?;

    Ok((StatusCode::OK, Json(requests)))
}

/// GET /requests/all?from=&size= - Other users' requests
pub async fn get_others(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let requests = ItemRequestService::new(&state.db)
        .get_others(user_id, query.from, query.size)
        .await?;

    Ok((StatusCode::OK, Json(requests)))
}

/// GET /requests/{request_id} - Fetch one request with its derived items
pub async fn get_by_id(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(request_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let request = ItemRequestService::new(&state.db)
        .get_by_id(user_id, request_id)
        .await?;

    Ok((StatusCode::OK, Json(request)))
}
