//! Item catalogue logic: creation, owner-only mutation, search, the owner
//! view enrichment, and comment eligibility.

use chrono::{NaiveDateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        booking::ShortBookingDto,
        item::{CommentDto, CreateCommentDto, CreateItemDto, ItemDto, UpdateItemDto},
    },
    server::{
        data::{
            booking::BookingRepository, comment::CommentRepository, item::ItemRepository,
            request::ItemRequestRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            booking::Booking,
            comment::{Comment, CreateCommentParams},
            item::{CreateItemParams, Item, ItemPatch},
            user::User,
        },
        util::page::page_index,
    },
};

pub struct ItemService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ItemService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new item for an owner.
    ///
    /// When the body references an originating request, that request must
    /// exist and the item records it.
    pub async fn add(&self, owner_id: i32, dto: CreateItemDto) -> Result<Item, AppError> {
        if !UserRepository::new(self.db).exists_by_id(owner_id).await? {
            return Err(AppError::NotFound(format!(
                "User with id {} not found",
                owner_id
            )));
        }

        if let Some(request_id) = dto.request_id {
            ItemRequestRepository::new(self.db)
                .find_by_id(request_id)
                .await?
                .ok_or_else(|| {
                    AppError::NotFound(format!("Request with id {} not found", request_id))
                })?;
        }

        let item = ItemRepository::new(self.db)
            .create(CreateItemParams {
                owner_id,
                name: dto.name,
                description: dto.description,
                available: dto.available,
                request_id: dto.request_id,
            })
            .await?;

        Ok(item)
    }

    /// Applies an owner's partial update to an item.
    ///
    /// Only the owner may mutate an item; any other caller receives
    /// NotFound. Patch fields are validated before anything is written.
    pub async fn update(
        &self,
        owner_id: i32,
        item_id: i32,
        dto: UpdateItemDto,
    ) -> Result<Item, AppError> {
        if !UserRepository::new(self.db).exists_by_id(owner_id).await? {
            return Err(AppError::NotFound(format!(
                "User with id {} not found",
                owner_id
            )));
        }

        let repo = ItemRepository::new(self.db);

        let item = repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", item_id)))?;

        Self::check_owner(owner_id, &item)?;

        let patch = Self::validate_patch(dto)?;

        tracing::info!("Owner {} updated item {}", owner_id, item_id);

        let updated = repo.update(item_id, patch).await?;

        Ok(updated)
    }

    /// Gets an item with its comments, and with last/next booking when the
    /// requester is the owner.
    ///
    /// The last booking is the latest APPROVED booking started before now;
    /// the next is the earliest APPROVED booking starting after now.
    pub async fn get_by_id(&self, item_id: i32, user_id: i32) -> Result<ItemDto, AppError> {
        let item = ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", item_id)))?;

        let comments = CommentRepository::new(self.db)
            .find_all_by_item_with_authors(item_id)
            .await?;

        let is_owner = item.owner_id == user_id;
        let mut dto = item.into_dto();
        dto.comments = comments.into_iter().map(Self::comment_to_dto).collect();

        if is_owner {
            let bookings = BookingRepository::new(self.db)
                .find_approved_by_item(item_id)
                .await?;
            let now = Utc::now().naive_utc();
            let (last, next) = Self::last_and_next(&bookings, item_id, now);
            dto.last_booking = last;
            dto.next_booking = next;
        }

        Ok(dto)
    }

    /// Gets a page of the caller's items, each enriched with its comments
    /// and last/next APPROVED bookings.
    pub async fn get_all_for_owner(
        &self,
        owner_id: i32,
        from: u64,
        size: u64,
    ) -> Result<Vec<ItemDto>, AppError> {
        if !UserRepository::new(self.db).exists_by_id(owner_id).await? {
            return Err(AppError::NotFound(format!(
                "User with id {} not found",
                owner_id
            )));
        }

        let items = ItemRepository::new(self.db)
            .find_all_by_owner(owner_id, page_index(from, size), size)
            .await?;

        let item_ids: Vec<i32> = items.iter().map(|item| item.id).collect();

        let bookings = BookingRepository::new(self.db)
            .find_approved_by_owner(owner_id)
            .await?;
        let comments = CommentRepository::new(self.db)
            .find_all_by_items_with_authors(&item_ids)
            .await?;

        let now = Utc::now().naive_utc();

        let dtos = items
            .into_iter()
            .map(|item| {
                let item_id = item.id;
                let mut dto = item.into_dto();
                let (last, next) = Self::last_and_next(&bookings, item_id, now);
                dto.last_booking = last;
                dto.next_booking = next;
                dto.comments = comments
                    .iter()
                    .filter(|(comment, _)| comment.item_id == item_id)
                    .cloned()
                    .map(Self::comment_to_dto)
                    .collect();
                dto
            })
            .collect();

        Ok(dtos)
    }

    /// Searches available items by text.
    ///
    /// Blank or absent text short-circuits to an empty result without
    /// querying the store.
    pub async fn search(
        &self,
        text: Option<&str>,
        from: u64,
        size: u64,
    ) -> Result<Vec<Item>, AppError> {
        let text = match text {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Ok(Vec::new()),
        };

        let items = ItemRepository::new(self.db)
            .search_available(text, page_index(from, size), size)
            .await?;

        Ok(items)
    }

    /// Deletes an item; owner only.
    pub async fn delete(&self, owner_id: i32, item_id: i32) -> Result<(), AppError> {
        if !UserRepository::new(self.db).exists_by_id(owner_id).await? {
            return Err(AppError::NotFound(format!(
                "User with id {} not found",
                owner_id
            )));
        }

        let repo = ItemRepository::new(self.db);

        let item = repo
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", item_id)))?;

        Self::check_owner(owner_id, &item)?;

        repo.delete(item_id).await?;

        Ok(())
    }

    /// Adds a comment to an item.
    ///
    /// The author must have at least one APPROVED booking of the item whose
    /// end time is already in the past. The creation timestamp is
    /// server-assigned.
    ///
    /// # Returns
    /// - `Ok(CommentDto)` - The persisted comment with the author's name
    /// - `Err(AppError::NotFound)` - Missing user or item
    /// - `Err(AppError::BadRequest)` - Blank text, or no qualifying booking
    pub async fn add_comment(
        &self,
        user_id: i32,
        item_id: i32,
        dto: CreateCommentDto,
    ) -> Result<CommentDto, AppError> {
        let author = UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id {} not found", user_id)))?;

        ItemRepository::new(self.db)
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Item with id {} not found", item_id)))?;

        if dto.text.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Comment text must not be blank".to_string(),
            ));
        }

        let now = Utc::now().naive_utc();

        BookingRepository::new(self.db)
            .find_completed(item_id, user_id, now)
            .await?
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "User with id {} has no completed booking of item {}",
                    user_id, item_id
                ))
            })?;

        let comment = CommentRepository::new(self.db)
            .create(CreateCommentParams {
                item_id,
                author_id: user_id,
                text: dto.text,
                created: now,
            })
            .await?;

        Ok(Self::comment_to_dto((comment, Some(author))))
    }

    fn check_owner(owner_id: i32, item: &Item) -> Result<(), AppError> {
        if item.owner_id != owner_id {
            return Err(AppError::NotFound(format!(
                "User with id {} is not the owner of item {}",
                owner_id, item.id
            )));
        }
        Ok(())
    }

    /// Validates the tri-state wire patch into a typed patch.
    ///
    /// Explicit null or blank text is rejected for name and description;
    /// availability must be the text `true` or `false`, case-insensitive.
    fn validate_patch(dto: UpdateItemDto) -> Result<ItemPatch, AppError> {
        let mut patch = ItemPatch::default();

        if let Some(name) = dto.name {
            patch.name = Some(
                name.filter(|value| !value.trim().is_empty())
                    .ok_or_else(|| {
                        AppError::BadRequest("Item name must not be blank".to_string())
                    })?,
            );
        }

        if let Some(description) = dto.description {
            patch.description = Some(
                description
                    .filter(|value| !value.trim().is_empty())
                    .ok_or_else(|| {
                        AppError::BadRequest("Item description must not be blank".to_string())
                    })?,
            );
        }

        if let Some(available) = dto.available {
            let text = available.ok_or_else(|| {
                AppError::BadRequest("Item availability must not be null".to_string())
            })?;
            patch.available = Some(match text.trim().to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => {
                    return Err(AppError::BadRequest(format!(
                        "Invalid boolean value: {}",
                        text
                    )))
                }
            });
        }

        Ok(patch)
    }

    /// Picks the most recent started and the next upcoming APPROVED booking
    /// of an item.
    fn last_and_next(
        bookings: &[Booking],
        item_id: i32,
        now: NaiveDateTime,
    ) -> (Option<ShortBookingDto>, Option<ShortBookingDto>) {
        let last = bookings
            .iter()
            .filter(|booking| booking.item_id == item_id && booking.start < now)
            .max_by_key(|booking| booking.start)
            .map(Self::short_dto);

        let next = bookings
            .iter()
            .filter(|booking| booking.item_id == item_id && booking.start > now)
            .min_by_key(|booking| booking.start)
            .map(Self::short_dto);

        (last, next)
    }

    fn short_dto(booking: &Booking) -> ShortBookingDto {
        ShortBookingDto {
            id: booking.id,
            booker_id: booking.booker_id,
            start: booking.start,
            end: booking.end,
        }
    }

    fn comment_to_dto((comment, author): (Comment, Option<User>)) -> CommentDto {
        CommentDto {
            id: comment.id,
            text: comment.text,
            author_name: author.map(|user| user.name).unwrap_or_default(),
            created: comment.created,
        }
    }
}
