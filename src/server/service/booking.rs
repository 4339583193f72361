//! Booking life-cycle and listing logic.
//!
//! Authorization follows an information-hiding rule: a caller with no
//! relation to a booking receives NotFound rather than a permission error,
//! so the booking's existence is not disclosed. Forbidden is reserved for
//! the one caller the system does know about, the booker attempting to
//! decide their own booking.

use chrono::Utc;
use entity::booking::BookingStatus;
use sea_orm::DatabaseConnection;

use crate::{
    model::booking::{BookingDto, CreateBookingDto},
    server::{
        data::{booking::BookingRepository, item::ItemRepository, user::UserRepository},
        error::AppError,
        model::{
            booking::{status_label, Booking, BookingState, CreateBookingParams},
            item::Item,
            user::User,
        },
        util::page::page_index,
    },
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a booking in WAITING status.
    ///
    /// Preconditions, in order: the booker exists; the item exists; the
    /// booker is not the item's owner; the interval is valid (`end`
    /// strictly after `start`); the item is available. Availability is
    /// checked at creation time only and never re-checked afterwards.
    ///
    /// # Returns
    /// - `Ok(BookingDto)` - The persisted booking with item and booker
    /// - `Err(AppError::NotFound)` - Missing booker or item, or the booker
    ///   owns the item
    /// - `Err(AppError::BadRequest)` - Invalid interval or unavailable item
    pub async fn create(
        &self,
        booker_id: i32,
        dto: CreateBookingDto,
    ) -> Result<BookingDto, AppError> {
        let booker = UserRepository::new(self.db)
            .find_by_id(booker_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", booker_id)))?;

        let item = ItemRepository::new(self.db)
            .find_by_id(dto.item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", dto.item_id)))?;

        if item.owner_id == booker_id {
            return Err(AppError::NotFound(format!(
                "Booker cannot be the owner of item {}",
                item.id
            )));
        }

        if dto.end <= dto.start {
            return Err(AppError::BadRequest(format!(
                "Wrong booking time start = {} and end = {}",
                dto.start, dto.end
            )));
        }

        if !item.available {
            return Err(AppError::BadRequest(format!(
                "Item with id {} is not available",
                item.id
            )));
        }

        let booking = BookingRepository::new(self.db)
            .create(CreateBookingParams {
                item_id: dto.item_id,
                booker_id,
                start: dto.start,
                end: dto.end,
            })
            .await?;

        tracing::info!(
            "User {} booked item {} as booking {}",
            booker_id,
            item.id,
            booking.id
        );

        Ok(Self::to_dto(booking, item, booker))
    }

    /// Decides a WAITING booking.
    ///
    /// Only the item's owner may decide. The status moves exactly once:
    /// re-deciding an already APPROVED or REJECTED booking is rejected.
    ///
    /// # Arguments
    /// - `booking_id` - Booking to decide
    /// - `user_id` - Acting user
    /// - `approved` - true to approve, false to reject
    ///
    /// # Returns
    /// - `Ok(BookingDto)` - The booking with its new status
    /// - `Err(AppError::NotFound)` - Missing booking, or a caller with no
    ///   relation to it
    /// - `Err(AppError::Forbidden)` - The booker deciding their own booking
    /// - `Err(AppError::BadRequest)` - The booking is no longer WAITING
    pub async fn approve(
        &self,
        booking_id: i32,
        user_id: i32,
        approved: bool,
    ) -> Result<BookingDto, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo.find_by_id(booking_id).await?.ok_or_else(|| {
            AppError::NotFound(format!("Booking with id {} not found", booking_id))
        })?;

        let (item, booker) = self.booking_parties(&booking).await?;

        if user_id != item.owner_id {
            if user_id == booking.booker_id {
                return Err(AppError::Forbidden(format!(
                    "Booker cannot decide booking {}",
                    booking_id
                )));
            }
            // Unrelated caller: do not disclose the booking.
            return Err(AppError::NotFound(format!(
                "Booking with id {} not found",
                booking_id
            )));
        }

        if booking.status != BookingStatus::Waiting {
            return Err(AppError::BadRequest(format!(
                "Booking with id {} already has status {}",
                booking_id,
                status_label(&booking.status)
            )));
        }

        let status = if approved {
            BookingStatus::Approved
        } else {
            BookingStatus::Rejected
        };

        let updated = repo.set_status(booking_id, status).await?;

        tracing::info!(
            "Owner {} moved booking {} to {}",
            user_id,
            booking_id,
            status_label(&updated.status)
        );

        Ok(Self::to_dto(updated, item, booker))
    }

    /// Gets a booking visible to the caller.
    ///
    /// Only the booker and the item's owner may fetch a booking; anyone
    /// else receives NotFound.
    pub async fn get_by_id(&self, booking_id: i32, user_id: i32) -> Result<BookingDto, AppError> {
        let booking = BookingRepository::new(self.db)
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Booking with id {} not found", booking_id))
            })?;

        let (item, booker) = self.booking_parties(&booking).await?;

        if user_id != booking.booker_id && user_id != item.owner_id {
            return Err(AppError::NotFound(format!(
                "Booking with id {} not found",
                booking_id
            )));
        }

        Ok(Self::to_dto(booking, item, booker))
    }

    /// Lists the caller's own bookings, newest start first.
    ///
    /// # Arguments
    /// - `booker_id` - Booking user
    /// - `state_text` - Raw `state` query parameter
    /// - `from` / `size` - Offset/limit pair; `from` must be a multiple of
    ///   `size`
    pub async fn list_for_booker(
        &self,
        booker_id: i32,
        state_text: Option<&str>,
        from: u64,
        size: u64,
    ) -> Result<Vec<BookingDto>, AppError> {
        if !UserRepository::new(self.db).exists_by_id(booker_id).await? {
            return Err(AppError::NotFound(format!(
                "User with id {} not found",
                booker_id
            )));
        }

        let state = BookingState::from_query(state_text)?;
        let now = Utc::now().naive_utc();

        let bookings = BookingRepository::new(self.db)
            .find_all_by_booker(booker_id, state, now, page_index(from, size), size)
            .await?;

        self.to_dtos(bookings).await
    }

    /// Lists the bookings of every item the caller owns, newest start
    /// first.
    pub async fn list_for_owner(
        &self,
        owner_id: i32,
        state_text: Option<&str>,
        from: u64,
        size: u64,
    ) -> Result<Vec<BookingDto>, AppError> {
        if !UserRepository::new(self.db).exists_by_id(owner_id).await? {
            return Err(AppError::NotFound(format!(
                "User with id {} not found",
                owner_id
            )));
        }

        let state = BookingState::from_query(state_text)?;
        let now = Utc::now().naive_utc();

        let bookings = BookingRepository::new(self.db)
            .find_all_by_owner(owner_id, state, now, page_index(from, size), size)
            .await?;

        self.to_dtos(bookings).await
    }

    /// Resolves the item and booker of a booking.
    ///
    /// A booking that survives its item or booker indicates malformed
    /// stored data and surfaces as an internal error.
    async fn booking_parties(&self, booking: &Booking) -> Result<(Item, User), AppError> {
        let item = ItemRepository::new(self.db)
            .find_by_id(booking.item_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Booking {} references missing item {}",
                    booking.id, booking.item_id
                ))
            })?;

        let booker = UserRepository::new(self.db)
            .find_by_id(booking.booker_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Booking {} references missing booker {}",
                    booking.id, booking.booker_id
                ))
            })?;

        Ok((item, booker))
    }

    async fn to_dtos(&self, bookings: Vec<Booking>) -> Result<Vec<BookingDto>, AppError> {
        let mut dtos = Vec::with_capacity(bookings.len());

        for booking in bookings {
            let (item, booker) = self.booking_parties(&booking).await?;
            dtos.push(Self::to_dto(booking, item, booker));
        }

        Ok(dtos)
    }

    fn to_dto(booking: Booking, item: Item, booker: User) -> BookingDto {
        BookingDto {
            id: booking.id,
            start: booking.start,
            end: booking.end,
            item: item.into_dto(),
            booker: booker.into_dto(),
            status: status_label(&booking.status).to_string(),
        }
    }
}
