//! Domain entities and the wire payloads they are decoded from.
//!
//! DTOs mirror the backend JSON (camelCase, numeric ids); entities are what
//! the rest of the crate works with (string ids, optional partial fields).

pub mod comment;
pub mod envelope;
pub mod like;
pub mod music;
pub mod post;
pub mod user;

pub use comment::{Comment, CommentDto, NewComment};
pub use envelope::{ApiErrorBody, ApiResponse};
pub use like::{Like, LikeDto};
pub use music::{Music, MusicDto};
pub use post::{
    parse_post_id, CommentedPostDto, CompletionType, LikedPostDto, MyPostsDto, NewPost, Post,
    PostDetail, PostDetailDto, PostDto, RandomPostDto, ScrollPostDto,
};
pub use user::{UserData, UserDto};
