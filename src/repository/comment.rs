use async_trait::async_trait;

use crate::api::{ApiClient, CommentApi};
use crate::error::ApiResult;
use crate::models::{Comment, CommentDto, NewComment};

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(&self, comment: NewComment) -> ApiResult<()>;

    /// Comments of a post; absent data is an empty list.
    async fn get_comments(&self, post_id: i64) -> ApiResult<Vec<Comment>>;

    async fn update_comment(&self, comment_id: i64, content: &str) -> ApiResult<()>;

    async fn delete_comment(&self, comment_id: i64) -> ApiResult<()>;
}

#[derive(Debug, Clone)]
pub struct HttpCommentRepository {
    api: ApiClient,
}

impl HttpCommentRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}

#[async_trait]
impl CommentRepository for HttpCommentRepository {
    async fn create_comment(&self, comment: NewComment) -> ApiResult<()> {
        self.api
            .execute(&CommentApi::Create(comment).endpoint())
            .await
    }

    async fn get_comments(&self, post_id: i64) -> ApiResult<Vec<Comment>> {
        let call = CommentApi::List { post_id };
        let dtos: Option<Vec<CommentDto>> =
            self.api.fetch(&call.endpoint(), call.operation()).await?;
        Ok(dtos
            .unwrap_or_default()
            .into_iter()
            .map(Comment::from)
            .collect())
    }

    async fn update_comment(&self, comment_id: i64, content: &str) -> ApiResult<()> {
        let call = CommentApi::Update {
            comment_id,
            content: content.to_string(),
        };
        self.api.execute(&call.endpoint()).await
    }

    async fn delete_comment(&self, comment_id: i64) -> ApiResult<()> {
        self.api
            .execute(&CommentApi::Delete { comment_id }.endpoint())
            .await
    }
}
