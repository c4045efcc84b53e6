//! Thin orchestration over the repositories.
//!
//! Everything here delegates unchanged except [`ShareUseCase`], which
//! normalizes a story without music into the same call shape, and
//! [`LoginUseCase`], which runs the login in the background and never
//! reports failure to its caller.

mod comment;
mod like;
mod login;
mod music_search;
mod share;

pub use comment::CommentUseCase;
pub use like::LikeUseCase;
pub use login::LoginUseCase;
pub use music_search::MusicSearchUseCase;
pub use share::{ShareRequest, ShareUseCase};
