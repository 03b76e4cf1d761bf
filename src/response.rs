use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for every JSON body the API produces, success and failure alike.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
