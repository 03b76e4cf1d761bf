use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
};
use validator::Validate;

use crate::{
    dto::reviews::{CreateReviewRequest, UpdateReviewRequest},
    error::{AppError, AppResult},
    models::Review,
    response::ApiResponse,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_review))
        .route("/{id}", get(find_by_id))
        .route("/user/{id}", get(find_by_user_id))
        .route("/{id}", patch(update_by_id))
        .route("/{id}", delete(delete_by_id))
}

#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Owning user not found"),
    ),
    tag = "Reviews"
)]
pub async fn create_review(
    State(state): State<AppState>,
    Json(payload): Json<CreateReviewRequest>,
) -> AppResult<StatusCode> {
    payload
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    state.reviews.create_review(payload).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/api/reviews/{id}",
    params(("id" = i64, Path, description = "Review id")),
    responses(
        (status = 200, description = "Get review", body = ApiResponse<Review>),
        (status = 404, description = "Review not found"),
    ),
    tag = "Reviews"
)]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Review>>> {
    let review = state.reviews.find_by_id(id).await?;
    Ok(Json(ApiResponse::new(Review::from(review))))
}

#[utoipa::path(
    get,
    path = "/api/reviews/user/{id}",
    params(("id" = i64, Path, description = "Owning user id")),
    responses(
        (status = 200, description = "Reviews of a user", body = ApiResponse<Vec<Review>>),
    ),
    tag = "Reviews"
)]
pub async fn find_by_user_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<Vec<Review>>>> {
    let reviews = state.reviews.find_by_user_id(id).await?;
    let reviews = reviews.into_iter().map(Review::from).collect();
    Ok(Json(ApiResponse::new(reviews)))
}

#[utoipa::path(
    patch,
    path = "/api/reviews/{id}",
    params(("id" = i64, Path, description = "Review id")),
    request_body = UpdateReviewRequest,
    responses(
        (status = 204, description = "Review updated"),
        (status = 404, description = "Review not found"),
    ),
    tag = "Reviews"
)]
pub async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateReviewRequest>,
) -> AppResult<StatusCode> {
    payload
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    state.reviews.update_by_id(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/reviews/{id}",
    params(("id" = i64, Path, description = "Review id")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 404, description = "Review not found"),
    ),
    tag = "Reviews"
)]
pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.reviews.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
