use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::repositories::{SeaOrmOrderRepository, SeaOrmReviewRepository, SeaOrmUserRepository};
use crate::services::{OrderService, ReviewService, UserService};

/// Shared handles for the request pipeline. Collaborators are injected
/// explicitly; nothing here is default-constructed.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserService>,
    pub orders: Arc<OrderService>,
    pub reviews: Arc<ReviewService>,
}

impl AppState {
    pub fn new(
        users: Arc<UserService>,
        orders: Arc<OrderService>,
        reviews: Arc<ReviewService>,
    ) -> Self {
        Self {
            users,
            orders,
            reviews,
        }
    }

    /// Wire the production services on top of an established connection.
    pub fn from_conn(conn: DatabaseConnection) -> Self {
        let users = Arc::new(UserService::new(Arc::new(SeaOrmUserRepository::new(
            conn.clone(),
        ))));
        let orders = Arc::new(OrderService::new(Arc::new(SeaOrmOrderRepository::new(
            conn.clone(),
        ))));
        let reviews = Arc::new(ReviewService::new(
            Arc::new(SeaOrmReviewRepository::new(conn)),
            users.clone(),
        ));
        Self::new(users, orders, reviews)
    }
}
