//! `/comments` endpoints.

use serde_json::json;

use super::Endpoint;
use crate::models::NewComment;

#[derive(Debug, Clone, PartialEq)]
pub enum CommentApi {
    Create(NewComment),
    List { post_id: i64 },
    Update { comment_id: i64, content: String },
    Delete { comment_id: i64 },
}

impl CommentApi {
    pub fn operation(&self) -> &'static str {
        match self {
            CommentApi::Create(_) => "createComment",
            CommentApi::List { .. } => "getComments",
            CommentApi::Update { .. } => "updateComment",
            CommentApi::Delete { .. } => "deleteComment",
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            CommentApi::Create(comment) => Endpoint::post("/comments").json(json!(comment)),
            CommentApi::List { post_id } => Endpoint::get(format!("/comments/{}", post_id)),
            CommentApi::Update {
                comment_id,
                content,
            } => Endpoint::put(format!("/comments/{}", comment_id))
                .json(json!({ "content": content })),
            CommentApi::Delete { comment_id } => {
                Endpoint::delete(format!("/comments/{}", comment_id))
            }
        }
    }
}
