//! Item request factory for creating test request entities.

use crate::factory::helpers::next_id;
use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test item requests with customizable fields.
pub struct ItemRequestFactory<'a> {
    db: &'a DatabaseConnection,
    requester_id: i32,
    description: String,
    created: NaiveDateTime,
}

impl<'a> ItemRequestFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, requester_id: i32) -> Self {
        Self {
            db,
            requester_id,
            description: format!("Request {}", next_id()),
            created: Utc::now().naive_utc(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn created(mut self, created: NaiveDateTime) -> Self {
        self.created = created;
        self
    }

    /// Builds and inserts the item request entity into the database.
    pub async fn build(self) -> Result<entity::item_request::Model, DbErr> {
        entity::item_request::ActiveModel {
            description: ActiveValue::Set(self.description),
            requester_id: ActiveValue::Set(self.requester_id),
            created: ActiveValue::Set(self.created),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an item request with default values.
pub async fn create_item_request(
    db: &DatabaseConnection,
    requester_id: i32,
) -> Result<entity::item_request::Model, DbErr> {
    ItemRequestFactory::new(db, requester_id).build().await
}
