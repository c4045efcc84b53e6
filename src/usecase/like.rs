use std::sync::Arc;

use crate::error::ApiResult;
use crate::models::Like;
use crate::repository::LikeRepository;

#[derive(Clone)]
pub struct LikeUseCase {
    repository: Arc<dyn LikeRepository>,
}

impl LikeUseCase {
    pub fn new(repository: Arc<dyn LikeRepository>) -> Self {
        Self { repository }
    }

    pub async fn fetch_is_liked(&self, post_id: i64) -> ApiResult<bool> {
        self.repository.fetch_is_liked(post_id).await
    }

    pub async fn like(&self, post_id: i64) -> ApiResult<()> {
        self.repository.like(post_id).await
    }

    pub async fn unlike(&self, post_id: i64) -> ApiResult<()> {
        self.repository.unlike(post_id).await
    }

    pub async fn fetch_like_count(&self, post_id: i64) -> ApiResult<i64> {
        self.repository.fetch_like_count(post_id).await
    }

    pub async fn fetch_user_likes(&self, user_id: i64) -> ApiResult<Vec<Like>> {
        self.repository.fetch_user_likes(user_id).await
    }
}
