//! Item request data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::request::{CreateItemRequestParams, ItemRequest};

pub struct ItemRequestRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRequestRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new item request.
    pub async fn create(&self, params: CreateItemRequestParams) -> Result<ItemRequest, DbErr> {
        let entity = entity::item_request::ActiveModel {
            description: ActiveValue::Set(params.description),
            requester_id: ActiveValue::Set(params.requester_id),
            created: ActiveValue::Set(params.created),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ItemRequest::from_entity(entity))
    }

    /// Finds an item request by id.
    pub async fn find_by_id(&self, request_id: i32) -> Result<Option<ItemRequest>, DbErr> {
        let entity = entity::prelude::ItemRequest::find_by_id(request_id)
            .one(self.db)
            .await?;

        Ok(entity.map(ItemRequest::from_entity))
    }

    /// Gets a page of a user's own requests, newest first.
    pub async fn find_all_by_requester(
        &self,
        requester_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<ItemRequest>, DbErr> {
        let entities = entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequesterId.eq(requester_id))
            .order_by_desc(entity::item_request::Column::Created)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        Ok(entities.into_iter().map(ItemRequest::from_entity).collect())
    }

    /// Gets a page of every other user's requests, newest first.
    pub async fn find_all_excluding_requester(
        &self,
        user_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<ItemRequest>, DbErr> {
        let entities = entity::prelude::ItemRequest::find()
            .filter(entity::item_request::Column::RequesterId.ne(user_id))
            .order_by_desc(entity::item_request::Column::Created)
            .paginate(self.db, per_page)
            .fetch_page(page)
            .await?;

        Ok(entities.into_iter().map(ItemRequest::from_entity).collect())
    }
}
