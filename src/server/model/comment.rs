use chrono::NaiveDateTime;

/// Post-booking comment left on an item.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub text: String,
    pub item_id: i32,
    pub author_id: i32,
    pub created: NaiveDateTime,
}

impl Comment {
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            text: entity.text,
            item_id: entity.item_id,
            author_id: entity.author_id,
            created: entity.created,
        }
    }
}

/// Parameters for creating a new comment.
///
/// `created` is server-assigned at eligibility-check time.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub item_id: i32,
    pub author_id: i32,
    pub text: String,
    pub created: NaiveDateTime,
}
