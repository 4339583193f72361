use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::item::ItemDto;

/// Body of `POST /requests`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequestDto {
    pub description: String,
}

/// Item request as it appears on the wire.
///
/// `items` is derived by reverse lookup: every catalogued item whose
/// request reference points at this request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemRequestDto {
    pub id: i32,
    pub description: String,
    pub created: NaiveDateTime,
    #[serde(default)]
    pub items: Vec<ItemDto>,
}
