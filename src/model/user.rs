use serde::{Deserialize, Serialize};

/// User as it appears on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
}

/// Body of `PUT /users` (id carried in the body) and `PATCH /users/{id}`.
///
/// Only non-blank fields are applied; blank or missing fields leave the
/// stored value untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub email: Option<String>,
}
