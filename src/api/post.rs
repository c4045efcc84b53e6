//! `/posts` endpoints.

use serde_json::json;

use super::Endpoint;
use crate::models::NewPost;

#[derive(Debug, Clone, PartialEq)]
pub enum PostApi {
    Create(NewPost),
    Update {
        post_id: i64,
        title: String,
        content: String,
    },
    Complete {
        post_id: i64,
    },
    Detail {
        post_id: i64,
    },
    Delete {
        post_id: i64,
    },
    Random,
    My,
    Liked {
        page_size: u32,
    },
    Ing {
        page_size: u32,
        last_post_id: Option<i64>,
    },
    Done {
        page_size: u32,
        last_post_id: Option<i64>,
    },
    Commented,
}

impl PostApi {
    /// Name used in logs and errors.
    pub fn operation(&self) -> &'static str {
        match self {
            PostApi::Create(_) => "createPost",
            PostApi::Update { .. } => "updatePost",
            PostApi::Complete { .. } => "updatePostState",
            PostApi::Detail { .. } => "getPostDetail",
            PostApi::Delete { .. } => "deletePost",
            PostApi::Random => "getRandomPosts",
            PostApi::My => "getMyPosts",
            PostApi::Liked { .. } => "getLikedPosts",
            PostApi::Ing { .. } => "getIngPosts",
            PostApi::Done { .. } => "getDonePosts",
            PostApi::Commented => "getCommentedPosts",
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            PostApi::Create(post) => Endpoint::post("/posts").json(json!(post)),
            PostApi::Update {
                post_id,
                title,
                content,
            } => Endpoint::patch(format!("/posts/{}", post_id))
                .json(json!({ "title": title, "content": content })),
            PostApi::Complete { post_id } => Endpoint::patch(format!("/posts/{}/complete", post_id)),
            PostApi::Detail { post_id } => Endpoint::get(format!("/posts/{}", post_id)),
            PostApi::Delete { post_id } => Endpoint::delete(format!("/posts/{}", post_id)),
            PostApi::Random => Endpoint::get("/posts/random"),
            PostApi::My => Endpoint::get("/posts/my"),
            PostApi::Liked { page_size } => {
                Endpoint::get("/posts/liked").query("pageSize", page_size)
            }
            PostApi::Ing {
                page_size,
                last_post_id,
            } => scroll("/posts/ing/infinite-scroll", *page_size, *last_post_id),
            PostApi::Done {
                page_size,
                last_post_id,
            } => scroll("/posts/done/infinite-scroll", *page_size, *last_post_id),
            PostApi::Commented => Endpoint::get("/posts/commented"),
        }
    }
}

/// Cursor page: the first page omits `lastPostId`.
fn scroll(path: &str, page_size: u32, last_post_id: Option<i64>) -> Endpoint {
    let endpoint = Endpoint::get(path).query("pageSize", page_size);
    match last_post_id {
        Some(cursor) => endpoint.query("lastPostId", cursor),
        None => endpoint,
    }
}
