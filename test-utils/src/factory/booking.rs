//! Booking factory for creating test booking entities.

use chrono::{Duration, NaiveDateTime, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// Defaults:
/// - start: one hour from now
/// - end: two hours from now
/// - status: `Waiting`
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    item_id: i32,
    booker_id: i32,
    start: NaiveDateTime,
    end: NaiveDateTime,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, item_id: i32, booker_id: i32) -> Self {
        let now = Utc::now().naive_utc();
        Self {
            db,
            item_id,
            booker_id,
            start: now + Duration::hours(1),
            end: now + Duration::hours(2),
            status: BookingStatus::Waiting,
        }
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = start;
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = end;
        self
    }

    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the booking entity into the database.
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            start_time: ActiveValue::Set(self.start),
            end_time: ActiveValue::Set(self.end),
            item_id: ActiveValue::Set(self.item_id),
            booker_id: ActiveValue::Set(self.booker_id),
            status: ActiveValue::Set(self.status),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a WAITING booking with default values.
///
/// Shorthand for `BookingFactory::new(db, item_id, booker_id).build().await`.
pub async fn create_booking(
    db: &DatabaseConnection,
    item_id: i32,
    booker_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, item_id, booker_id).build().await
}
