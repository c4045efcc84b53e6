use async_trait::async_trait;

use crate::api::{ApiClient, LikeApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{Like, LikeDto};

#[async_trait]
pub trait LikeRepository: Send + Sync {
    /// Whether the current user likes the post.
    ///
    /// Fails with `EmptyResult` when the server does not report a status.
    async fn fetch_is_liked(&self, post_id: i64) -> ApiResult<bool>;

    async fn like(&self, post_id: i64) -> ApiResult<()>;

    async fn unlike(&self, post_id: i64) -> ApiResult<()>;

    /// Number of likes, `0` when the server sends nothing.
    async fn fetch_like_count(&self, post_id: i64) -> ApiResult<i64>;

    async fn fetch_user_likes(&self, user_id: i64) -> ApiResult<Vec<Like>>;
}

#[derive(Debug, Clone)]
pub struct HttpLikeRepository {
    api: ApiClient,
}

impl HttpLikeRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl LikeRepository for HttpLikeRepository {
    async fn fetch_is_liked(&self, post_id: i64) -> ApiResult<bool> {
        let call = LikeApi::IsLiked { post_id };
        let operation = call.operation();
        let dto: LikeDto = self.api.fetch_required(&call.endpoint(), operation).await?;
        dto.is_liked.ok_or(ApiError::EmptyResult {
            operation,
            message: Some("Like status not found".to_string()),
        })
    }

    async fn like(&self, post_id: i64) -> ApiResult<()> {
        self.api.execute(&LikeApi::Like { post_id }.endpoint()).await
    }

    async fn unlike(&self, post_id: i64) -> ApiResult<()> {
        self.api
            .execute(&LikeApi::Unlike { post_id }.endpoint())
            .await
    }

    async fn fetch_like_count(&self, post_id: i64) -> ApiResult<i64> {
        let call = LikeApi::Count { post_id };
        let count: Option<i64> = self.api.fetch(&call.endpoint(), call.operation()).await?;
        Ok(count.unwrap_or(0))
    }

    async fn fetch_user_likes(&self, user_id: i64) -> ApiResult<Vec<Like>> {
        let call = LikeApi::UserLikes { user_id };
        let dtos: Option<Vec<LikeDto>> =
            self.api.fetch(&call.endpoint(), call.operation()).await?;
        Ok(dtos.unwrap_or_default().into_iter().map(Like::from).collect())
    }
}
