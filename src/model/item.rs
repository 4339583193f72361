use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::{api::double_option, booking::ShortBookingDto};

/// Item as it appears on the wire.
///
/// `lastBooking` and `nextBooking` are populated only when the requesting
/// user is the item's owner; they are omitted from the JSON otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_booking: Option<ShortBookingDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_booking: Option<ShortBookingDto>,
    #[serde(default)]
    pub comments: Vec<CommentDto>,
}

/// Body of `POST /items`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i32>,
}

/// Body of `PATCH /items/{id}`.
///
/// Each field is tri-state: absent (leave unchanged), explicit null, or a
/// value. Explicit null and blank strings are rejected for `name` and
/// `description`; `available` arrives as text and must parse as a boolean.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDto {
    #[serde(default, deserialize_with = "double_option")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub available: Option<Option<String>>,
}

/// Comment as it appears on the wire, enriched with the author's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub id: i32,
    pub text: String,
    pub author_name: String,
    pub created: NaiveDateTime,
}

/// Body of `POST /items/{id}/comment`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentDto {
    pub text: String,
}
