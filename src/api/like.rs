//! `/like` endpoints.

use super::Endpoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeApi {
    IsLiked { post_id: i64 },
    Like { post_id: i64 },
    Unlike { post_id: i64 },
    Count { post_id: i64 },
    UserLikes { user_id: i64 },
}

impl LikeApi {
    pub fn operation(&self) -> &'static str {
        match self {
            LikeApi::IsLiked { .. } => "fetchIsLiked",
            LikeApi::Like { .. } => "like",
            LikeApi::Unlike { .. } => "unlike",
            LikeApi::Count { .. } => "fetchLikeCount",
            LikeApi::UserLikes { .. } => "fetchUserLikes",
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            LikeApi::IsLiked { post_id } => Endpoint::get(format!("/like/posts/{}", post_id)),
            LikeApi::Like { post_id } => Endpoint::post(format!("/like/posts/{}", post_id)),
            LikeApi::Unlike { post_id } => Endpoint::delete(format!("/like/posts/{}", post_id)),
            LikeApi::Count { post_id } => Endpoint::get(format!("/like/count/{}", post_id)),
            LikeApi::UserLikes { user_id } => Endpoint::get(format!("/like/users/{}", user_id)),
        }
    }
}
