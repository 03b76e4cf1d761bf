use sea_orm::DbErr;
use thiserror::Error;

pub mod orders;
pub mod reviews;
pub mod users;

pub use orders::{OrderRepository, SeaOrmOrderRepository};
pub use reviews::{ReviewRepository, SeaOrmReviewRepository};
pub use users::{SeaOrmUserRepository, UserRepository};

/// Storage fault surfaced by a gateway, already stamped with an
/// operation-specific message. Carries no kind: the error translator treats
/// it as an unexpected failure.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RepoError {
    pub message: String,
}

impl RepoError {
    pub(crate) fn wrap(context: &str, err: DbErr) -> Self {
        Self {
            message: format!("{context}: {err}"),
        }
    }
}
