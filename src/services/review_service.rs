use std::sync::Arc;

use crate::dto::reviews::{CreateReviewRequest, NewReview, UpdateReviewRequest};
use crate::entity::reviews::Model as ReviewModel;
use crate::error::{AppError, AppResult, translate_error};
use crate::repositories::ReviewRepository;
use crate::services::UserService;

const COMPONENT: &str = "ReviewService";

pub struct ReviewService {
    repo: Arc<dyn ReviewRepository>,
    users: Arc<UserService>,
}

impl ReviewService {
    pub fn new(repo: Arc<dyn ReviewRepository>, users: Arc<UserService>) -> Self {
        Self { repo, users }
    }

    /// A review cannot exist without its owning user, so the user is resolved
    /// first and the insert only runs once that lookup succeeds.
    pub async fn create_review(&self, payload: CreateReviewRequest) -> AppResult<()> {
        let user = self.users.find_by_id(payload.user_id).await?;
        self.repo
            .create(NewReview {
                user_id: user.id,
                rating: payload.rating,
            })
            .await
            .map(|_| ())
            .map_err(|err| translate_error(COMPONENT, err.into()))
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<ReviewModel> {
        let result: anyhow::Result<ReviewModel> = async {
            let review = self.repo.find_by_id(id).await?;
            review.ok_or_else(|| {
                anyhow::Error::new(AppError::NotFound(format!(
                    "Review with id {id} was not found"
                )))
            })
        }
        .await;

        result.map_err(|err| translate_error(COMPONENT, err))
    }

    pub async fn find_by_user_id(&self, user_id: i64) -> AppResult<Vec<ReviewModel>> {
        self.repo
            .find_by_user_id(user_id)
            .await
            .map_err(|err| translate_error(COMPONENT, err.into()))
    }

    pub async fn update_by_id(&self, id: i64, payload: UpdateReviewRequest) -> AppResult<()> {
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
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;

    use super::*;
    use crate::repositories::RepoError;
    use crate::services::user_service::tests::{MockUserRepository, dummy_user};

    pub(crate) fn dummy_review(id: i64, user_id: i64) -> ReviewModel {
        ReviewModel {
            id,
            user_id,
            rating: 8,
            created_at: Utc::now().fixed_offset(),
            deleted_at: None,
        }
    }

    #[derive(Default)]
    pub(crate) struct MockReviewRepository {
        pub review: Option<ReviewModel>,
        pub created: Mutex<Option<NewReview>>,
        pub create_calls: AtomicUsize,
        pub update_calls: AtomicUsize,
        pub delete_calls: AtomicUsize,
    }

    #[async_trait]
    impl ReviewRepository for MockReviewRepository {
        async fn find_by_id(&self, _id: i64) -> Result<Option<ReviewModel>, RepoError> {
            Ok(self.review.clone())
        }

        async fn find_by_user_id(&self, _user_id: i64) -> Result<Vec<ReviewModel>, RepoError> {
            Ok(self.review.clone().into_iter().collect())
        }

        async fn create(&self, payload: NewReview) -> Result<ReviewModel, RepoError> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            let review = dummy_review(1, payload.user_id);
            *self.created.lock().unwrap() = Some(payload);
            Ok(review)
        }

        async fn update_by_id(
            &self,
            _id: i64,
            _payload: UpdateReviewRequest,
        ) -> Result<(), RepoError> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        async fn delete_by_id(&self, _id: i64) -> Result<(), RepoError> {
            self.delete_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn service_with(
        review_repo: Arc<MockReviewRepository>,
        user_repo: MockUserRepository,
    ) -> ReviewService {
        let users = Arc::new(UserService::new(Arc::new(user_repo)));
        ReviewService::new(review_repo, users)
    }

    #[tokio::test]
    async fn creating_a_review_for_a_missing_user_fails_before_the_insert() {
        let review_repo = Arc::new(MockReviewRepository::default());
        let service = service_with(review_repo.clone(), MockUserRepository::default());

        let err = service
            .create_review(CreateReviewRequest {
                user_id: 7,
                rating: 8,
            })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "User with id 7 was not found");
        assert_eq!(review_repo.create_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn creating_a_review_attaches_the_resolved_user() {
        let review_repo = Arc::new(MockReviewRepository::default());
        let user_repo = MockUserRepository {
            user: Some(dummy_user(7)),
            ..Default::default()
        };
        let service = service_with(review_repo.clone(), user_repo);

        service
            .create_review(CreateReviewRequest {
                user_id: 7,
                rating: 8,
            })
            .await
            .unwrap();

        assert_eq!(review_repo.create_calls.load(Ordering::SeqCst), 1);
        let created = review_repo.created.lock().unwrap().clone();
        assert_eq!(
            created,
            Some(NewReview {
                user_id: 7,
                rating: 8
            })
        );
    }

    #[tokio::test]
    async fn update_of_a_missing_review_skips_the_gateway() {
        let review_repo = Arc::new(MockReviewRepository::default());
        let service = service_with(review_repo.clone(), MockUserRepository::default());

        let err = service
            .update_by_id(11, UpdateReviewRequest { rating: Some(9) })
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Review with id 11 was not found");
        assert_eq!(review_repo.update_calls.load(Ordering::SeqCst), 0);
    }
}
