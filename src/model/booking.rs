use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{item::ItemDto, user::UserDto};

/// Body of `POST /bookings`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub item_id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Booking as it appears on the wire, with the booked item and the booker
/// embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingDto {
    pub id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub item: ItemDto,
    pub booker: UserDto,
    pub status: String,
}

/// Abbreviated booking embedded in an item's owner view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortBookingDto {
    pub id: i32,
    pub booker_id: i32,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}
