use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::server::{
    controller::{booking, item, request, user},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(booking::create).get(booking::list_for_booker))
        .route("/bookings/owner", get(booking::list_for_owner))
        .route(
            "/bookings/{booking_id}",
            patch(booking::approve).get(booking::get_by_id),
        )
        .route("/items", post(item::create).get(item::get_all))
        .route("/items/search", get(item::search))
        .route(
            "/items/{item_id}",
            patch(item::update).get(item::get_by_id).delete(item::delete),
        )
        .route("/items/{item_id}/comment", post(item::add_comment))
        .route("/requests", post(request::create).get(request::get_own))
        .route("/requests/all", get(request::get_others))
        .route("/requests/{request_id}", get(request::get_by_id))
        .route(
            "/users",
            post(user::create).put(user::update).get(user::get_all),
        )
        .route(
            "/users/{user_id}",
            get(user::get_by_id)
                .patch(user::update_partial)
                .delete(user::delete),
        )
        .layer(CorsLayer::permissive())
}
