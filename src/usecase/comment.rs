use std::sync::Arc;

use crate::error::ApiResult;
use crate::models::{Comment, NewComment};
use crate::repository::CommentRepository;

#[derive(Clone)]
pub struct CommentUseCase {
    repository: Arc<dyn CommentRepository>,
}

impl CommentUseCase {
    pub fn new(repository: Arc<dyn CommentRepository>) -> Self {
        Self { repository }
    }

    pub async fn create_comment(&self, comment: NewComment) -> ApiResult<()> {
        self.repository.create_comment(comment).await
    }

    pub async fn get_comments(&self, post_id: i64) -> ApiResult<Vec<Comment>> {
        self.repository.get_comments(post_id).await
    }

    pub async fn update_comment(&self, comment_id: i64, content: &str) -> ApiResult<()> {
        self.repository.update_comment(comment_id, content).await
    }

    pub async fn delete_comment(&self, comment_id: i64) -> ApiResult<()> {
        self.repository.delete_comment(comment_id).await
    }
}
