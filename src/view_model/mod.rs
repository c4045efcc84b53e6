//! Stateful orchestrators consumed by a presentation layer.
//!
//! Each view-model publishes its state through a `tokio::sync::watch`
//! channel: `state()` returns a snapshot, `subscribe()` a receiver that
//! wakes on every change. Actions are `async` methods guarded per
//! operation family; a call made while its guard is set returns at once.

mod feed;
mod paging;
mod post_detail;
mod search;
mod share;

pub use feed::{FeedState, FeedTab, FeedViewModel, PREFETCH_THRESHOLD};
pub use paging::{ListStatus, LoadTicket, PagedList, PostList};
pub use post_detail::{PostDetailState, PostDetailViewModel};
pub use search::{MusicSearchState, MusicSearchViewModel};
pub use share::{
    ShareState, ShareViewModel, DEFAULT_COMMENT_LIMIT, EMPTY_STORY_MESSAGE, EMPTY_TITLE_MESSAGE,
    MAX_STORY_CHARACTERS,
};
