//! Item request board logic.
//!
//! Requests carry no inline item list; the items answering a request are
//! derived by reverse lookup on the item's request reference, batched per
//! listing.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::{
    model::{
        item::ItemDto,
        request::{CreateItemRequestDto, ItemRequestDto},
    },
    server::{
        data::{item::ItemRepository, request::ItemRequestRepository, user::UserRepository},
        error::AppError,
        model::request::{CreateItemRequestParams, ItemRequest},
        util::page::page_index,
    },
};

pub struct ItemRequestService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemRequestService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an item request with a server-assigned creation timestamp.
    pub async fn add(
        &self,
        user_id: i32,
        dto: CreateItemRequestDto,
    ) -> Result<ItemRequestDto, AppError> {
        if !UserRepository::new(self.db).exists_by_id(user_id).await? {
            return Err(AppError::NotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        if dto.description.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Request description must not be blank".to_string(),
            ));
        }

        let request = ItemRequestRepository::new(self.db)
            .create(CreateItemRequestParams {
                requester_id: user_id,
                description: dto.description,
                created: Utc::now().naive_utc(),
            })
            .await?;

        Ok(Self::to_dto(request, Vec::new()))
    }

    /// Gets a page of the caller's own requests, newest first, with their
    /// derived items.
    pub async fn get_own(
        &self,
        user_id: i32,
        from: u64,
        size: u64,
    ) -> Result<Vec<ItemRequestDto>, AppError> {
        if !UserRepository::new(self.db).exists_by_id(user_id).await? {
            return Err(AppError::NotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        let requests = ItemRequestRepository::new(self.db)
            .find_all_by_requester(user_id, page_index(from, size), size)
            .await?;

        self.attach_items(requests).await
    }

    /// Gets a page of other users' requests, newest first, with their
    /// derived items.
    pub async fn get_others(
        &self,
        user_id: i32,
        from: u64,
        size: u64,
    ) -> Result<Vec<ItemRequestDto>, AppError> {
        if !UserRepository::new(self.db).exists_by_id(user_id).await? {
            return Err(AppError::NotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        let requests = ItemRequestRepository::new(self.db)
            .find_all_excluding_requester(user_id, page_index(from, size), size)
            .await?;

        self.attach_items(requests).await
    }

    /// Gets a single request with its derived items.
    ///
    /// Any existing user may fetch any request.
    pub async fn get_by_id(
        &self,
        user_id: i32,
        request_id: i32,
    ) -> Result<ItemRequestDto, AppError> {
        if !UserRepository::new(self.db).exists_by_id(user_id).await? {
            return Err(AppError::NotFound(format!(
                "User with id {} not found",
                user_id
            )));
        }

        let request = ItemRequestRepository::new(self.db)
            .find_by_id(request_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Request with id {} not found", request_id))
            })?;

        let items = ItemRepository::new(self.db)
            .find_all_by_request_id(request_id)
            .await?
            .into_iter()
            .map(|item| item.into_dto())
            .collect();

        Ok(Self::to_dto(request, items))
    }

    /// Resolves the items answering each request with one batched query.
    async fn attach_items(
        &self,
        requests: Vec<ItemRequest>,
    ) -> Result<Vec<ItemRequestDto>, AppError> {
        let request_ids: Vec<i32> = requests.iter().map(|request| request.id).collect();

        let items = ItemRepository::new(self.db)
            .find_all_by_request_ids(&request_ids)
            .await?;

        let mut items_by_request: HashMap<i32, Vec<ItemDto>> = HashMap::new();
        for item in items {
            if let Some(request_id) = item.request_id {
                items_by_request
                    .entry(request_id)
                    .or_default()
                    .push(item.into_dto());
            }
        }

        Ok(requests
            .into_iter()
            .map(|request| {
                let items = items_by_request.remove(&request.id).unwrap_or_default();
                Self::to_dto(request, items)
            })
            .collect())
    }

    fn to_dto(request: ItemRequest, items: Vec<ItemDto>) -> ItemRequestDto {
        ItemRequestDto {
            id: request.id,
            description: request.description,
            created: request.created,
            items,
        }
    }
}
