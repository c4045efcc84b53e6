//! One repository per backend resource.
//!
//! Repositories are the only layer that performs network I/O and payload
//! decoding. Absent `data` follows one rule per operation kind:
//!
//! | Operation kind | Absent `data` |
//! |----------------|---------------|
//! | list           | empty `Vec`   |
//! | single entity  | [`ApiError::EmptyResult`](crate::error::ApiError::EmptyResult) |
//! | count          | `0`           |

mod comment;
mod like;
mod music;
mod post;
mod user;

pub use comment::{CommentRepository, HttpCommentRepository};
pub use like::{HttpLikeRepository, LikeRepository};
pub use music::{HttpMusicRepository, MusicRepository};
pub use post::{HttpPostRepository, PostRepository};
pub use user::{HttpUserRepository, UserRepository};
