use skillcheck_core::types::DbId;
use skillcheck_core::validation::validate_input;
use skillcheck_db::models::review::{CreateReview, Review, UpdateReview};
use skillcheck_db::store::ReviewStore;

use super::not_found;
use crate::error::AppResult;

const ENTITY: &str = "Review";

/// Free-standing user feedback; unrelated to the assessment workflow.
pub struct ReviewService<'a, S> {
    store: &'a S,
}

impl<'a, S: ReviewStore> ReviewService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub async fn list_all(&self) -> AppResult<Vec<Review>> {
        Ok(self.store.list_reviews().await?)
    }

    pub async fn get(&self, id: DbId) -> AppResult<Review> {
        self.store
            .find_review(id)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))
    }

    pub async fn list_by_user(&self, user_id: DbId) -> AppResult<Vec<Review>> {
        Ok(self.store.list_reviews_by_user(user_id).await?)
    }

    pub async fn create(&self, input: CreateReview) -> AppResult<Review> {
        validate_input(&input)?;
        let review = self.store.insert_review(&input).await?;
        tracing::info!(review_id = review.review_id, user_id = review.user_id, "Review created");
        Ok(review)
    }

    pub async fn update(&self, id: DbId, input: UpdateReview) -> AppResult<Review> {
        validate_input(&input)?;
        let review = self
            .store
            .update_review(id, &input)
            .await?
            .ok_or_else(|| not_found(ENTITY, id))?;
        tracing::info!(review_id = id, "Review updated");
        Ok(review)
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !self.store.delete_review(id).await? {
            return Err(not_found(ENTITY, id));
        }
        tracing::info!(review_id = id, "Review deleted");
        Ok(())
    }
}
