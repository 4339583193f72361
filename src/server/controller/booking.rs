use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::booking::CreateBookingDto,
    server::{
        error::AppError, middleware::identity::SharerId, service::booking::BookingService,
        state::AppState,
    },
};

#[derive(Deserialize)]
pub struct ApproveQuery {
    pub approved: bool,
}

#[derive(Deserialize)]
pub struct BookerListQuery {
    pub state: Option<String>,
    #[serde(default)]
    pub from: u64,
    #[serde(default = "default_booker_size")]
    pub size: u64,
}

fn default_booker_size() -> u64 {
    30
}

#[derive(Deserialize)]
pub struct OwnerListQuery {
    pub state: Option<String>,
    #[serde(default)]
    pub from: u64,
    #[serde(default = "default_owner_size")]
    pub size: u64,
}

fn default_owner_size() -> u64 {
    20
}

/// POST /bookings - Create a booking for the calling user
///
/// # Returns
/// - `200 OK`: The created booking in WAITING status
/// - `400 Bad Request`: Invalid interval or unavailable item
/// - `404 Not Found`: Missing user or item, or caller owns the item
pub async fn create(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Json(dto): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db).create(user_id, dto).await?;

    Ok((StatusCode::OK, Json(booking)))
}

/// PATCH /bookings/{booking_id}?approved= - Owner decision on a booking
///
/// # Returns
/// - `200 OK`: The booking with its new status
/// - `400 Bad Request`: Booking is no longer WAITING
/// - `403 Forbidden`: Caller is the booker
/// - `404 Not Found`: Missing booking or unrelated caller
pub async fn approve(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(booking_id): Path<i32>,
    Query(query): Query<ApproveQuery>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .approve(booking_id, user_id, query.approved)
        .await?;

    Ok((StatusCode::OK, Json(booking)))
}

/// GET /bookings/{booking_id} - Fetch one booking, booker or owner only
pub async fn get_by_id(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let booking = BookingService::new(&state.db)
        .get_by_id(booking_id, user_id)
        .await?;

    Ok((StatusCode::OK, Json(booking)))
}

/// GET /bookings?state=&from=&size= - The calling user's bookings
pub async fn list_for_booker(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(query): Query<BookerListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = BookingService::new(&state.db)
        .list_for_booker(user_id, query.state.as_deref(), query.from, query.size)
        .await?;

    Ok((StatusCode::OK, Json(bookings)))
}

/// GET /bookings/owner?state=&from=&size= - Bookings of the caller's items
pub async fn list_for_owner(
    State(state): State<AppState>,
    SharerId(user_id): SharerId,
    Query(query): Query<OwnerListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let bookings = BookingService::new(&state.db)
        .list_for_owner(user_id, query.state.as_deref(), query.from, query.size)
        .await?;

    Ok((StatusCode::OK, Json(bookings)))
}
