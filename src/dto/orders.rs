use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::entity::orders::OrderStatus;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    pub user_id: i64,
    #[validate(range(min = 0.0))]
    pub sub_total: f64,
    #[validate(range(min = 0.0))]
    pub taxes: f64,
    #[validate(range(min = 0.0))]
    pub shipping: f64,
    #[validate(range(min = 0.0))]
    pub grand_total: f64,
    #[validate(range(min = 0))]
    pub item_count: i32,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderRequest {
    #[validate(range(min = 0.0))]
    pub sub_total: Option<f64>,
    #[validate(range(min = 0.0))]
    pub taxes: Option<f64>,
    #[validate(range(min = 0.0))]
    pub shipping: Option<f64>,
    #[validate(range(min = 0.0))]
    pub grand_total: Option<f64>,
    #[validate(range(min = 0))]
    pub item_count: Option<i32>,
    pub status: Option<OrderStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_amounts() {
        let payload = CreateOrderRequest {
            user_id: 1,
            sub_total: -1.0,
            taxes: 0.0,
            shipping: 0.0,
            grand_total: 0.0,
            item_count: 0,
        };
        assert!(payload.validate().is_err());

        let payload = UpdateOrderRequest {
            item_count: Some(-2),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn parses_the_spaced_status_spelling() {
        let payload: UpdateOrderRequest =
            serde_json::from_str(r#"{ "status": "Out For Delivery" }"#).unwrap();
        assert_eq!(payload.status, Some(OrderStatus::OutForDelivery));
    }
}
