//! Booking data repository for database operations.
//!
//! Listing queries translate the state filter into SQL predicates and join
//! through the item table when selecting by owner.

use chrono::NaiveDateTime;
use entity::booking::BookingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::booking::{Booking, BookingState, CreateBookingParams};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new booking in WAITING status.
    ///
    /// Preconditions (existing booker, existing available item, valid
    /// interval) are checked by the service layer.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The created booking
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            start_time: ActiveValue::Set(params.start),
            end_time: ActiveValue::Set(params.end),
            item_id: ActiveValue::Set(params.item_id),
            booker_id: ActiveValue::Set(params.booker_id),
            status: ActiveValue::Set(BookingStatus::Waiting),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    /// Finds a booking by id.
    pub async fn find_by_id(&self, booking_id: i32) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(booking_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Sets the status of a booking.
    ///
    /// This is the sole write path for the status column.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The updated booking
    /// - `Err(DbErr)` - Database error, or the booking vanished since the
    ///   caller's check
    pub async fn set_status(
        &self,
        booking_id: i32,
        status: BookingStatus,
    ) -> Result<Booking, DbErr> {
        let booking = entity::prelude::Booking::find_by_id(booking_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Booking {} not found",
                booking_id
            )))?;

        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.status = ActiveValue::Set(status);

        let updated = active_model.update(self.db).await?;

        Ok(Booking::from_entity(updated))
    }

    /// Gets a page of a booker's bookings matching the state filter,
    /// ordered by start time descending.
    ///
    /// # Arguments
    /// - `booker_id` - Booking user id
    /// - `state` - Listing state filter
    /// - `now` - Instant the time-based filters are evaluated against
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of bookings per page
    pub async fn find_all_by_booker(
        &self,
        booker_id: i32,
        state: BookingState,
        now: NaiveDateTime,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::BookerId.eq(booker_id))
            .filter(Self::state_condition(state, now))
            .order_by_desc(entity::booking::Column::StartTime)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Gets a page of the bookings of all items owned by a user, matching
    /// the state filter and ordered by start time descending.
    ///
    /// Joins through the item table to select on the owner column.
    pub async fn find_all_by_owner(
        &self,
        owner_id: i32,
        state: BookingState,
        now: NaiveDateTime,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .join(JoinType::InnerJoin, entity::booking::Relation::Item.def())
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .filter(Self::state_condition(state, now))
            .order_by_desc(entity::booking::Column::StartTime)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Finds any booking proving the user completed a lending of the item:
    /// status APPROVED and end time in the past.
    ///
    /// Existence of one qualifying booking suffices; no ordering guarantee.
    pub async fn find_completed(
        &self,
        item_id: i32,
        booker_id: i32,
        now: NaiveDateTime,
    ) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.eq(item_id))
            .filter(entity::booking::Column::BookerId.eq(booker_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Approved))
            .filter(entity::booking::Column::EndTime.lt(now))
            .one(self.db)
            .await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Gets all APPROVED bookings of a single item.
    pub async fn find_approved_by_item(&self, item_id: i32) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::ItemId.eq(item_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Approved))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Gets all APPROVED bookings of all items owned by a user.
    pub async fn find_approved_by_owner(&self, owner_id: i32) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .join(JoinType::InnerJoin, entity::booking::Relation::Item.def())
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Approved))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Translates a state filter into SQL predicates.
    ///
    /// Time-based filters use strict inequalities, so bookings at an exact
    /// boundary instant fall outside CURRENT, PAST, and FUTURE alike.
    fn state_condition(state: BookingState, now: NaiveDateTime) -> Condition {
        match state {
            BookingState::All => Condition::all(),
            BookingState::Current => Condition::all()
                .add(entity::booking::Column::StartTime.lt(now))
                .add(entity::booking::Column::EndTime.gt(now)),
            BookingState::Past => {
                Condition::all().add(entity::booking::Column::EndTime.lt(now))
            }
            BookingState::Future => {
                Condition::all().add(entity::booking::Column::StartTime.gt(now))
            }
            BookingState::Waiting => Condition::all()
                .add(entity::booking::Column::Status.eq(BookingStatus::Waiting)),
            BookingState::Rejected => Condition::all()
                .add(entity::booking::Column::Status.eq(BookingStatus::Rejected)),
        }
    }
}
