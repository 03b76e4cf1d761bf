use std::sync::Arc;

use crate::dto::users::{CreateUserRequest, UpdateUserRequest};
use crate::entity::users::Model as UserModel;
use crate::error::{AppError, AppResult, translate_error};
use crate::repositories::UserRepository;

const COMPONENT: &str = "UserService";

pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_user(&self, payload: CreateUserRequest) -> AppResult<()> {
        self.repo
            .create(payload)
            .await
            .map(|_| ())
            .map_err(|err| translate_error(COMPONENT, err.into()))
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<UserModel> {
        let result: anyhow::Result<UserModel> = async {
            let user = self.repo.find_by_id(id).await?;
            user.ok_or_else(|| {
                anyhow::Error::new(AppError::NotFound(format!(
                    "User with id {id} was not found"
                )))
            })
        }
        .await;

        result.map_err(|err| translate_error(COMPONENT, err))
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<UserModel>> {
        self.repo
            .find_by_email(email)
            .await
            .map_err(|err| translate_error(COMPONENT, err.into()))
    }

    pub async fn update_by_id(&self, id: i64, payload: UpdateUserRequest) -> AppResult<()> {
        // The existence check must succeed before the mutating call is issued.
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
    use crate::repositories::RepoError;

    pub(crate) fn dummy_user(id: i64) -> UserModel {
        UserModel {
            id,
            name: "John Doe".into(),
            email: "john@example.com".into(),
            password: "Secret1!".into(),
            created_at: Utc::now().fixed_offset(),
            deleted_at: None,
        }
    }

    #[derive(Default)]
    pub(crate) struct MockUserRepository {
        pub user: Option<UserModel>,
        pub create_error: Option<String>,
        pub create_calls: AtomicUsize,
        pub update_calls: AtomicUsize,
        pub delete_calls: AtomicUsize,
    }

    #[async_trait]
    impl UserRepository for MockUserRepository {
        async fn find_by_id(&self, _id: i64) -> Result<Option<UserModel>, RepoError> {
            Ok(self.user.clone())
        }

        async fn find_by_email(&self, _email: &str) -> Result<Option<UserModel>, RepoError> {
            Ok(self.user.clone())
        }

        async fn create(&self, _payload: CreateUserRequest) -> Result<UserModel, RepoError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            match &self.create_error {
                Some(message) => Err(RepoError {
                    message: message.clone(),
                }),
                None => Ok(dummy_user(1)),
            }
        }

        async fn update_by_id(
            &self,
            _id: i64,
            _payload: UpdateUserRequest,
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
    async fn missing_user_yields_not_found_on_every_read() {
        let service = UserService::new(Arc::new(MockUserRepository::default()));

        for _ in 0..2 {
            let err = service.find_by_id(42).await.unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));
            assert_eq!(err.to_string(), "User with id 42 was not found");
        }
    }

    #[tokio::test]
    async fn update_never_reaches_the_gateway_when_user_is_missing() {
        let repo = Arc::new(MockUserRepository::default());
        let service = UserService::new(repo.clone());

        let err = service
            .update_by_id(42, UpdateUserRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(repo.update_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn delete_never_reaches_the_gateway_when_user_is_missing() {
        let repo = Arc::new(MockUserRepository::default());
        let service = UserService::new(repo.clone());

        let err = service.delete_by_id(42).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(repo.delete_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn update_runs_after_the_existence_check_passes() {
        let repo = Arc::new(MockUserRepository {
            user: Some(dummy_user(7)),
            ..Default::default()
        });
        let service = UserService::new(repo.clone());

        service
            .update_by_id(
                7,
                UpdateUserRequest {
                    name: Some("Jane Doe".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(repo.update_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn storage_fault_on_create_surfaces_as_internal() {
        let repo = Arc::new(MockUserRepository {
            create_error: Some(
                "Error creating user: duplicate key value violates unique constraint \"users_email_key\""
                    .into(),
            ),
            ..Default::default()
        });
        let service = UserService::new(repo.clone());

        let err = service
            .create_user(CreateUserRequest {
                name: "John Doe".into(),
                email: "john@example.com".into(),
                password: "Secret1!".into(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
        assert!(err.to_string().contains("duplicate key"));
    }

    #[tokio::test]
    async fn find_by_email_passes_the_absent_case_through() {
        let service = UserService::new(Arc::new(MockUserRepository::default()));

        let found = service.find_by_email("nobody@example.com").await.unwrap();
        assert!(found.is_none());
    }
}
