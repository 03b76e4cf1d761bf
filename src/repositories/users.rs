use async_trait::async_trait;
use chrono::Utc;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use crate::dto::users::{CreateUserRequest, UpdateUserRequest};
use crate::entity::users::{ActiveModel as UserActive, Column as UserCol, Entity as Users, Model as UserModel};

use super::RepoError;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserModel>, RepoError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepoError>;
    async fn create(&self, payload: CreateUserRequest) -> Result<UserModel, RepoError>;
    async fn update_by_id(&self, id: i64, payload: UpdateUserRequest) -> Result<(), RepoError>;
    async fn delete_by_id(&self, id: i64) -> Result<(), RepoError>;
}

pub struct SeaOrmUserRepository {
    conn: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<UserModel>, RepoError> {
        tracing::debug!(id, "users.find_by_id");
        Users::find_by_id(id)
            .filter(UserCol::DeletedAt.is_null())
            .one(&self.conn)
            .await
            .map_err(|err| RepoError::wrap("Error finding user by id", err))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserModel>, RepoError> {
        tracing::debug!(email, "users.find_by_email");
        Users::find()
            .filter(UserCol::Email.eq(email))
            .filter(UserCol::DeletedAt.is_null())
            .one(&self.conn)
            .await
            .map_err(|err| RepoError::wrap("Error finding user by email", err))
    }

    async fn create(&self, payload: CreateUserRequest) -> Result<UserModel, RepoError> {
        tracing::debug!("users.create");
        // A duplicate email trips the unique constraint and surfaces wrapped.
        UserActive {
            id: NotSet,
            name: Set(payload.name),
            email: Set(payload.email),
            password: Set(payload.password),
            created_at: NotSet,
            deleted_at: NotSet,
        }
        .insert(&self.conn)
        .await
        .map_err(|err| RepoError::wrap("Error creating user", err))
    }

    async fn update_by_id(&self, id: i64, payload: UpdateUserRequest) -> Result<(), RepoError> {
        tracing::debug!(id, "users.update_by_id");
        if payload.name.is_none() && payload.email.is_none() && payload.password.is_none() {
            return Ok(());
        }

        let mut user = UserActive {
            id: Set(id),
            ..Default::default()
        };
        if let Some(name) = payload.name {
            user.name = Set(name);
        }
        if let Some(email) = payload.email {
            user.email = Set(email);
        }
        if let Some(password) = payload.password {
            user.password = Set(password);
        }

        user.update(&self.conn)
            .await
            .map(|_| ())
            .map_err(|err| RepoError::wrap("Error updating user by id", err))
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), RepoError> {
        tracing::debug!(id, "users.delete_by_id");
        let user = UserActive {
            id: Set(id),
            deleted_at: Set(Some(Utc::now().into())),
            ..Default::default()
        };

        user.update(&self.conn)
            .await
            .map(|_| ())
            .map_err(|err| RepoError::wrap("Error deleting user by id", err))
    }
}
