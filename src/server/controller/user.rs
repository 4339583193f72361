use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        error::AppError, model::user::CreateUserParams, service::user::UserService,
        state::AppState,
    },
};

/// POST /users - Create a user
pub async fn create(
    State(state): State<AppState>,
    Json(dto): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .add(CreateUserParams {
            name: dto.name,
            email: dto.email,
        })
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PUT /users - Update the user identified by the body's id
pub async fn update(
    State(state): State<AppState>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_id = dto
        .id
        .ok_or_else(|| AppError::BadRequest("User id must be provided".to_string()))?;

    let user = UserService::new(&state.db)
        .update(user_id, dto.name, dto.email)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// PATCH /users/{user_id} - Partial update of a user
pub async fn update_partial(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(dto): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .update(user_id, dto.name, dto.email)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /users/{user_id} - Fetch one user
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(user_id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// GET /users - List all users
pub async fn get_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).get_all().await?;

    let dtos: Vec<UserDto> = users.into_iter().map(|user| user.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// DELETE /users/{user_id} - Delete a user
pub async fn delete(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(user_id).await?;

    Ok(StatusCode::OK)
}
