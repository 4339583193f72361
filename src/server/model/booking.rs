//! Booking domain model, status helpers, and the listing state filter.

use chrono::NaiveDateTime;
use entity::booking::BookingStatus;

use crate::server::error::AppError;

/// Reservation of an item by a user for a time interval.
///
/// Status starts as WAITING and is moved exactly once by the item's owner to
/// APPROVED or REJECTED; both are terminal.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub item_id: i32,
    pub booker_id: i32,
    pub status: BookingStatus,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            start: entity.start_time,
            end: entity.end_time,
            item_id: entity.item_id,
            booker_id: entity.booker_id,
            status: entity.status,
        }
    }
}

/// Wire label of a booking status.
pub fn status_label(status: &BookingStatus) -> &'static str {
    match status {
        BookingStatus::Waiting => "WAITING",
        BookingStatus::Approved => "APPROVED",
        BookingStatus::Rejected => "REJECTED",
    }
}

/// Parameters for creating a new booking.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub item_id: i32,
    pub booker_id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Named predicate narrowing a booking listing.
///
/// Time-based filters are evaluated against a single `now` captured per
/// request; boundary instants are excluded by strict inequalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingState {
    All,
    Current,
    Past,
    Future,
    Waiting,
    Rejected,
}

impl BookingState {
    /// Parses the `state` query parameter.
    ///
    /// Matches the six names case-insensitively; blank or absent text
    /// defaults to `All`.
    ///
    /// # Returns
    /// - `Ok(BookingState)` - Recognized or defaulted filter
    /// - `Err(AppError::BadRequest)` - Unrecognized filter text
    pub fn from_query(text: Option<&str>) -> Result<Self, AppError> {
        let text = match text {
            None => return Ok(Self::All),
            Some(text) if text.trim().is_empty() => return Ok(Self::All),
            Some(text) => text.trim(),
        };

        match text.to_ascii_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "CURRENT" => Ok(Self::Current),
            "PAST" => Ok(Self::Past),
            "FUTURE" => Ok(Self::Future),
            "WAITING" => Ok(Self::Waiting),
            "REJECTED" => Ok(Self::Rejected),
            _ => Err(AppError::BadRequest(format!("Unknown state: {}", text))),
        }
    }
}
