use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        orders::{CreateOrderRequest, UpdateOrderRequest},
        reviews::{CreateReviewRequest, UpdateReviewRequest},
        users::{CreateUserRequest, UpdateUserRequest},
    },
    error::ErrorBody,
    models::{Order, OrderStatus, Review, User},
    response::ApiResponse,
    routes::{health, orders, reviews, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::create_user,
        users::find_by_id,
        users::find_by_email,
        users::update_by_id,
        users::delete_by_id,
        orders::create_order,
        orders::find_by_id,
        orders::find_by_user_id,
        orders::update_by_id,
        orders::delete_by_id,
        reviews::create_review,
        reviews::find_by_id,
        reviews::find_by_user_id,
        reviews::update_by_id,
        reviews::delete_by_id,
    ),
    components(
        schemas(
            User,
            Order,
            OrderStatus,
            Review,
            CreateUserRequest,
            UpdateUserRequest,
            CreateOrderRequest,
            UpdateOrderRequest,
            CreateReviewRequest,
            UpdateReviewRequest,
            ErrorBody,
            health::HealthData,
            ApiResponse<User>,
            ApiResponse<Order>,
            ApiResponse<Review>,
            ApiResponse<ErrorBody>,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Reviews", description = "Review endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
