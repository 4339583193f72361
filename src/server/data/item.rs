//! Item data repository for database operations.

use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    ExprTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::item::{CreateItemParams, Item, ItemPatch};

pub struct ItemRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new item.
    ///
    /// # Arguments
    /// - `params` - Item creation parameters, including the owning user and
    ///   the optional originating request
    ///
    /// # Returns
    /// - `Ok(Item)` - The created item
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateItemParams) -> Result<Item, DbErr> {
        let entity = entity::item::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            available: ActiveValue::Set(params.available),
            owner_id: ActiveValue::Set(params.owner_id),
            request_id: ActiveValue::Set(params.request_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Item::from_entity(entity))
    }

    /// Finds an item by id.
    pub async fn find_by_id(&self, item_id: i32) -> Result<Option<Item>, DbErr> {
        let entity = entity::prelude::Item::find_by_id(item_id).one(self.db).await?;

        Ok(entity.map(Item::from_entity))
    }

    /// Applies a validated partial update to an item.
    ///
    /// Ownership has already been checked by the caller; only `Some` fields
    /// of the patch are written.
    ///
    /// # Returns
    /// - `Ok(Item)` - The updated item
    /// - `Err(DbErr)` - Database error, or the item vanished since the check
    pub async fn update(&self, item_id: i32, patch: ItemPatch) -> Result<Item, DbErr> {
        let item = entity::prelude::Item::find_by_id(item_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Item {} not found", item_id)))?;

        let mut active_model: entity::item::ActiveModel = item.into();

        if let Some(name) = patch.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = patch.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(available) = patch.available {
            active_model.available = ActiveValue::Set(available);
        }

        let updated = active_model.update(self.db).await?;

        Ok(Item::from_entity(updated))
    }

    /// Gets a page of the items owned by a user, ordered by id.
    ///
    /// # Arguments
    /// - `owner_id` - Owning user id
    /// - `page` - Page number (0-indexed)
    /// - `per_page` - Number of items per page
    pub async fn find_all_by_owner(
        &self,
        owner_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<Item>, DbErr> {
        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::item::Column::Id)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Searches available items by case-insensitive substring match against
    /// name or description.
    ///
    /// Only items with `available = true` are returned. Blank text is
    /// short-circuited in the service layer and never reaches this query.
    pub async fn search_available(
        &self,
        text: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<Item>, DbErr> {
        let pattern = format!("%{}%", text.to_lowercase());

        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::Available.eq(true))
            .filter(
                Condition::any()
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::item::Column::Name)))
                            .like(pattern.clone()),
                    )
                    .add(
                        Expr::expr(Func::lower(Expr::col(entity::item::Column::Description)))
                            .like(pattern),
                    ),
            )
            .order_by_asc(entity::item::Column::Id)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Gets all items created in answer to a single request.
    pub async fn find_all_by_request_id(&self, request_id: i32) -> Result<Vec<Item>, DbErr> {
        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::RequestId.eq(request_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Gets all items created in answer to any of the given requests.
    ///
    /// Returns early with an empty vector for an empty id list.
    pub async fn find_all_by_request_ids(&self, request_ids: &[i32]) -> Result<Vec<Item>, DbErr> {
        if request_ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Item::find()
            .filter(entity::item::Column::RequestId.is_in(request_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Item::from_entity).collect())
    }

    /// Deletes an item by id.
    pub async fn delete(&self, item_id: i32) -> Result<(), DbErr> {
        entity::prelude::Item::delete_by_id(item_id)
            .exec(self.db)
            .await?;
        Ok(())
    }
}
