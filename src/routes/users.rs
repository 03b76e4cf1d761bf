use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
};
use validator::{Validate, ValidateEmail};

use crate::{
    dto::users::{CreateUserRequest, UpdateUserRequest},
    error::{AppError, AppResult},
    models::User,
    response::ApiResponse,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/{id}", get(find_by_id))
        .route("/email/{email}", get(find_by_email))
        .route("/{id}", patch(update_by_id))
        .route("/{id}", delete(delete_by_id))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Invalid payload"),
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<StatusCode> {
    payload
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    state.users.create_user(payload).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "Get user", body = ApiResponse<User>),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn find_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<User>>> {
    let user = state.users.find_by_id(id).await?;
    Ok(Json(ApiResponse::new(User::from(user))))
}

#[utoipa::path(
    get,
    path = "/api/users/email/{email}",
    params(("email" = String, Path, description = "User email")),
    responses(
        (status = 200, description = "Get user by email", body = ApiResponse<Option<User>>),
        (status = 400, description = "Invalid email"),
    ),
    tag = "Users"
)]
pub async fn find_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> AppResult<Json<ApiResponse<Option<User>>>> {
    let email = email.trim().to_string();
    if !email.validate_email() {
        return Err(AppError::BadRequest(
            "A valid email address must be provided".into(),
        ));
    }
    let user = state.users.find_by_email(&email).await?;
    Ok(Json(ApiResponse::new(user.map(User::from))))
}

#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 204, description = "User updated"),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn update_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<StatusCode> {
    payload
        .validate()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    state.users.update_by_id(id, payload).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found"),
    ),
    tag = "Users"
)]
pub async fn delete_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.users.delete_by_id(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
