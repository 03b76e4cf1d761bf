use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::dto::reviews::{NewReview, UpdateReviewRequest};
use crate::entity::reviews::{
    ActiveModel as ReviewActive, Column as ReviewCol, Entity as Reviews, Model as ReviewModel,
};

use super::RepoError;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<ReviewModel>, RepoError>;
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<ReviewModel>, RepoError>;
    async fn create(&self, payload: NewReview) -> Result<ReviewModel, RepoError>;
    async fn update_by_id(&self, id: i64, payload: UpdateReviewRequest) -> Result<(), RepoError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), RepoError>;
}

pub struct SeaOrmReviewRepository {
    conn: DatabaseConnection,
}

impl SeaOrmReviewRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ReviewRepository for SeaOrmReviewRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<ReviewModel>, RepoError> {
        tracing::debug!(id, "reviews.find_by_id");
        Reviews::find_by_id(id)
            .filter(ReviewCol::DeletedAt.is_null())
            .one(&self.conn)
            .await
            .map_err(|err| RepoError::wrap("Error finding review by id", err))
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<ReviewModel>, RepoError> {
        tracing::debug!(user_id, "reviews.find_by_user_id");
        Reviews::find()
            .filter(ReviewCol::UserId.eq(user_id))
            .filter(ReviewCol::DeletedAt.is_null())
            .all(&self.conn)
            .await
            .map_err(|err| RepoError::wrap("Error finding reviews by user id", err))
    }

    async fn create(&self, payload: NewReview) -> Result<ReviewModel, RepoError> {
        tracing::debug!(user_id = payload.user_id, "reviews.create");
        ReviewActive {
            id: NotSet,
            user_id: Set(payload.user_id),
            rating: Set(payload.rating),
            created_at: NotSet,
            deleted_at: NotSet,
        }
        .insert(&self.conn)
        .await
        .map_err(|err| RepoError::wrap("Error creating review", err))
    }

    async fn update_by_id(&self, id: i64, payload: UpdateReviewRequest) -> Result<(), RepoError> {
        tracing::debug!(id, "reviews.update_by_id");
        let Some(rating) = payload.rating else {
            return Ok(());
        };

        let review = ReviewActive {
            id: Set(id),
            rating: Set(rating),
            ..Default::default()
        };

        review
            .update(&self.conn)
            .await
            .map(|_| ())
            .map_err(|err| RepoError::wrap("Error updating review by id", err))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepoError> {
        tracing::debug!(id, "reviews.delete_by_id");
        let review = ReviewActive {
            id: Set(id),
            deleted_at: Set(Some(Utc::now().into())),
            ..Default::default()
        };

        review
            .update(&self.conn)
            .await
            .map(|_| ())
            .map_err(|err| RepoError::wrap("Error deleting review by id", err))
    }
}
