use std::sync::Arc;

use crate::dto::orders::{CreateOrderRequest, UpdateOrderRequest};
use crate::entity::orders::Model as OrderModel;
use crate::error::{AppError, AppResult, translate_error};
use crate::repositories::OrderRepository;

const COMPONENT: &str = "OrderService";

pub struct OrderService {
    repo: Arc<dyn OrderRepository>,
}

impl OrderService {
    pub fn new(repo: Arc<dyn OrderRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_order(&self, payload: CreateOrderRequest) -> AppResult<()> {
        self.repo
            .create(payload)
            .await
            .map(|_| ())
            .map_err(|err| translate_error(COMPONENT, err.into()))
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<OrderModel> {
        let result: anyhow::Result<OrderModel> = async {
            let order = self.repo.find_by_id(id).await?;
            order.ok_or_else(|| {
                anyhow::Error::new(AppError::NotFound(format!(
                    "Order with id {id} was not found"
                )))
            })
        }
        .await;

        result.map_err(|err| translate_error(COMPONENT, err))
    }

    /// An empty result is not an error; a user without orders is fine.
    pub async fn find_by_user_id(&self, user_id: i64) -> AppResult<Vec<OrderModel>> {
        self.repo
            .find_by_user_id(user_id)
            .await
            .map_err(|err| translate_error(COMPONENT, err.into()))
    }

    pub async fn update_by_id(&self, id: i64, payload: UpdateOrderRequest) -> AppResult<()> {
        self.find_by_id(id).await?;
        self.repo
            .update_by_id(id, payload)
            .await
            .map_err(|err| translate_error(COMPONENT, err.into()))
    }

    pub async fn delete_by_id(&self, id: i64) -> AppResult<()> {
        self.find_by_id(id).await?;
        self.repo
            .delete_by_id(id)
            .await
            .map_err(|err| translate_error(COMPONENT, err.into()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::entity::orders::OrderStatus;
    use crate::repositories::RepoError;

    pub(crate) fn dummy_order(id: i64, user_id: i64) -> OrderModel {
        OrderModel {
            id,
            user_id,
            sub_total: 90.0,
            taxes: 7.5,
            shipping: 2.5,
            grand_total: 100.0,
            item_count: 3,
            status: OrderStatus::Pending,
            placed_at: Utc::now().fixed_offset(),
            created_at: Utc::now().fixed_offset(),
            deleted_at: None,
        }
    }

    #[derive(Default)]
    pub(crate) struct MockOrderRepository {
        pub order: Option<OrderModel>,
        pub create_calls: AtomicUsize,
        pub update_calls: AtomicUsize,
        pub delete_calls: AtomicUsize,
    }

    #[async_trait]
    impl OrderRepository for MockOrderRepository {
        async fn find_by_id(&self, _id: i64) -> Result<Option<OrderModel>, RepoError> {
            Ok(self.order.clone())
        }

        async fn find_by_user_id(&self, _user_id: i64) -> Result<Vec<OrderModel>, RepoError> {
            Ok(self.order.clone().into_iter().collect())
        }

        async fn create(&self, payload: CreateOrderRequest) -> Result<OrderModel, RepoError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            Ok(dummy_order(1, payload.user_id))
        }

        async fn update_by_id(
            &self,
            _id: i64,
            _payload: UpdateOrderRequest,
        ) -> Result<(), RepoError> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn delete_by_id(&self, _id: i64) -> Result<(), RepoError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[tokio::test]
    async fn update_of_a_missing_order_skips_the_gateway() {
        let repo = Arc::new(MockOrderRepository::default());
        let service = OrderService::new(repo.clone());

        let err = service
            .update_by_id(
                999,
                UpdateOrderRequest {
                    status: Some(OrderStatus::Cancelled),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Order with id 999 was not found");
        assert_eq!(repo.update_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn delete_of_a_missing_order_skips_the_gateway() {
        let repo = Arc::new(MockOrderRepository::default());
        let service = OrderService::new(repo.clone());

        let err = service.delete_by_id(999).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(repo.delete_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn a_user_without_orders_gets_an_empty_list() {
        let service = OrderService::new(Arc::new(MockOrderRepository::default()));

        let orders = service.find_by_user_id(5).await.unwrap();
        assert!(orders.is_empty());
    }

    #[tokio::test]
    async fn delete_runs_after_the_existence_check_passes() {
        let repo = Arc::new(MockOrderRepository {
            order: Some(dummy_order(3, 1)),
            ..Default::default()
        });
        let service = OrderService::new(repo.clone());

        service.delete_by_id(3).await.unwrap();

        assert_eq!(repo.delete_calls.load(Ordering::SeqCst), 1);
    }
}
