use chrono::NaiveDateTime;

/// Request for an item not yet catalogued.
///
/// Items answering the request are not stored inline; they are derived by
/// reverse lookup on the item's request reference.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRequest {
    pub id: i32,
    pub description: String,
    pub requester_id: i32,
    pub created: NaiveDateTime,
}

impl ItemRequest {
    pub fn from_entity(entity: entity::item_request::Model) -> Self {
        Self {
            id: entity.id,
            description: entity.description,
            requester_id: entity.requester_id,
            created: entity.created,
        }
    }
}

/// Parameters for creating a new item request.
#[derive(Debug, Clone)]
pub struct CreateItemRequestParams {
    pub requester_id: i32,
    pub description: String,
    pub created: NaiveDateTime,
}
