use crate::model::user::UserDto;

/// Application user with display name and email.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl User {
    /// Converts an entity model to a user domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Parameters for creating a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
}

/// Parameters for a partial user update.
///
/// `None` fields leave the stored value untouched.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub name: Option<String>,
    pub email: Option<String>,
}
