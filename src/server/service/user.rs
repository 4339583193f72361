use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, UpdateUserParams, User},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new user.
    ///
    /// Email uniqueness is enforced by the store; a collision surfaces as a
    /// database error.
    pub async fn add(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user = UserRepository::new(self.db).create(params).await?;

        Ok(user)
    }

    /// Applies a partial update to a user.
    ///
    /// Blank values are treated as absent and leave the stored field
    /// untouched.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn update(
        &self,
        user_id: i32,
        name: Option<String>,
        email: Option<String>,
    ) -> Result<User, AppError> {
        let params = UpdateUserParams {
            name: name.filter(|value| !value.trim().is_empty()),
            email: email.filter(|value| !value.trim().is_empty()),
        };

        UserRepository::new(self.db)
            .update(user_id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", user_id)))
    }

    /// Gets a user by id.
    pub async fn get_by_id(&self, user_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", user_id)))
    }

    /// Gets all users.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).get_all().await?;

        Ok(users)
    }

    /// Deletes a user by id.
    pub async fn delete(&self, user_id: i32) -> Result<(), AppError> {
        let repo = UserRepository::new(self.db);

        if !repo.exists_by_id(user_id).await? {
            return Err(AppError::NotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        repo.delete(user_id).await?;

        Ok(())
    }
}
