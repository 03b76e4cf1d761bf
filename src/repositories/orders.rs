use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::dto::orders::{CreateOrderRequest, UpdateOrderRequest};
use crate::entity::orders::{
    ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel,
    OrderStatus,
};

use super::RepoError;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<OrderModel>, RepoError>;
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<OrderModel>, RepoError>;
    async fn create(&self, payload: CreateOrderRequest) -> Result<OrderModel, RepoError>;
    async fn update_by_id(&self, id: i64, payload: UpdateOrderRequest) -> Result<(), RepoError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), RepoError>;
}

pub struct SeaOrmOrderRepository {
    conn: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<OrderModel>, RepoError> {
        tracing::debug!(id, "orders.find_by_id");
        Orders::find_by_id(id)
            .filter(OrderCol::DeletedAt.is_null())
            .one(&self.conn)
            .await
            .map_err(|err| RepoError::wrap("Error finding order by id", err))
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<OrderModel>, RepoError> {
        tracing::debug!(user_id, "orders.find_by_user_id");
        Orders::find()
            .filter(OrderCol::UserId.eq(user_id))
            .filter(OrderCol::DeletedAt.is_null())
            .all(&self.conn)
            .await
            .map_err(|err| RepoError::wrap("Error finding orders by user id", err))
    }

    async fn create(&self, payload: CreateOrderRequest) -> Result<OrderModel, RepoError> {
        tracing::debug!(user_id = payload.user_id, "orders.create");
        OrderActive {
            id: NotSet,
            user_id: Set(payload.user_id),
            sub_total: Set(payload.sub_total),
            taxes: Set(payload.taxes),
            shipping: Set(payload.shipping),
            grand_total: Set(payload.grand_total),
            item_count: Set(payload.item_count),
            status: Set(OrderStatus::Pending),
            placed_at: NotSet,
            created_at: NotSet,
            deleted_at: NotSet,
        }
        .insert(&self.conn)
        .await
        .map_err(|err| RepoError::wrap("Error creating order", err))
    }

    async fn update_by_id(&self, id: i64, payload: UpdateOrderRequest) -> Result<(), RepoError> {
        tracing::debug!(id, "orders.update_by_id");
        if payload.sub_total.is_none()
            && payload.taxes.is_none()
            && payload.shipping.is_none()
            && payload.grand_total.is_none()
            && payload.item_count.is_none()
            && payload.status.is_none()
        {
            return Ok(());
        }

        let mut order = OrderActive {
            id: Set(id),
            ..Default::default()
        };
        if let Some(sub_total) = payload.sub_total {
            order.sub_total = Set(sub_total);
        }
        if let Some(taxes) = payload.taxes {
            order.taxes = Set(taxes);
        }
        if let Some(shipping) = payload.shipping {
            order.shipping = Set(shipping);
        }
        if let Some(grand_total) = payload.grand_total {
            order.grand_total = Set(grand_total);
        }
        if let Some(item_count) = payload.item_count {
            order.item_count = Set(item_count);
        }
        if let Some(status) = payload.status {
            order.status = Set(status);
        }

        order
            .update(&self.conn)
            .await
            .map(|_| ())
            .map_err(|err| RepoError::wrap("Error updating order by id", err))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepoError> {
        tracing::debug!(id, "orders.delete_by_id");
        let order = OrderActive {
            id: Set(id),
            deleted_at: Set(Some(Utc::now().into())),
            ..Default::default()
        };

        order
            .update(&self.conn)
            .await
            .map(|_| ())
            .map_err(|err| RepoError::wrap("Error deleting order by id", err))
    }
}
