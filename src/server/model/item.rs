use crate::model::item::ItemDto;

/// Catalogued item offered for lending.
///
/// `available` gates bookability; `request_id` records the item request that
/// prompted the item's creation, when there was one.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub owner_id: i32,
    pub request_id: Option<i32>,
}

impl Item {
    /// Converts an entity model to an item domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::item::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            available: entity.available,
            owner_id: entity.owner_id,
            request_id: entity.request_id,
        }
    }

    /// Converts the item to its plain wire form, without booking or comment
    /// enrichment.
    pub fn into_dto(self) -> ItemDto {
        ItemDto {
            id: self.id,
            name: self.name,
            description: self.description,
            available: self.available,
            request_id: self.request_id,
            last_booking: None,
            next_booking: None,
            comments: Vec::new(),
        }
    }
}

/// Parameters for creating a new item.
#[derive(Debug, Clone)]
pub struct CreateItemParams {
    pub owner_id: i32,
    pub name: String,
    pub description: String,
    pub available: bool,
    pub request_id: Option<i32>,
}

/// Validated partial update of an item.
///
/// Produced by the service layer from the tri-state wire patch; `None`
/// fields leave the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub available: Option<bool>,
}
