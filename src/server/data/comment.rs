//! Comment data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::{
    comment::{Comment, CreateCommentParams},
    user::User,
};

pub struct CommentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new comment.
    ///
    /// Eligibility (a completed APPROVED booking of the item by the author)
    /// is checked by the service layer before this insert.
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, DbErr> {
        let entity = entity::comment::ActiveModel {
            text: ActiveValue::Set(params.text),
            item_id: ActiveValue::Set(params.item_id),
            author_id: ActiveValue::Set(params.author_id),
            created: ActiveValue::Set(params.created),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Comment::from_entity(entity))
    }

    /// Gets all comments on an item with their authors, ordered by creation
    /// time ascending.
    ///
    /// The author is `None` only when the user row has been deleted out
    /// from under the comment.
    pub async fn find_all_by_item_with_authors(
        &self,
        item_id: i32,
    ) -> Result<Vec<(Comment, Option<User>)>, DbErr> {
        let rows = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ItemId.eq(item_id))
            .order_by_asc(entity::comment::Column::Created)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| {
                (Comment::from_entity(comment), author.map(User::from_entity))
            })
            .collect())
    }

    /// Gets all comments on any of the given items with their authors,
    /// ordered by creation time ascending.
    ///
    /// Returns early with an empty vector for an empty id list.
    pub async fn find_all_by_items_with_authors(
        &self,
        item_ids: &[i32],
    ) -> Result<Vec<(Comment, Option<User>)>, DbErr> {
        if item_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Comment::find()
            .filter(entity::comment::Column::ItemId.is_in(item_ids.to_vec()))
            .order_by_asc(entity::comment::Column::Created)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(comment, author)| {
                (Comment::from_entity(comment), author.map(User::from_entity))
            })
            .collect())
    }
}
