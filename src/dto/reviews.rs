use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReviewRequest {
    pub user_id: i64,
    #[validate(range(min = 0, max = 10))]
    pub rating: i32,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateReviewRequest {
    #[validate(range(min = 0, max = 10))]
    pub rating: Option<i32>,
}

/// Insert payload built by the review service once the owning user has been
/// resolved; the raw request never reaches the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReview {
    pub user_id: i64,
    pub rating: i32,
}
