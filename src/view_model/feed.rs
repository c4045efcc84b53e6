//! Feed lists: Ing/Done cursor pages plus my, liked and commented posts.
//!
//! State lives in a `watch` channel. Every mutation happens inside a single
//! `send_modify`/`send_if_modified` closure, so the in-flight guards, the
//! list contents and the generation checks are always updated together.
//!
//! The view-model listens on the [`PostEventBus`] from a background task
//! that only holds a weak reference, so dropping the view-model stops the
//! listener and turns late results into no-ops.

use std::collections::HashSet;
use std::sync::{Arc, Weak};

use futures::future::join_all;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::paging::{ListStatus, PagedList, PostList};
use crate::error::ApiResult;
use crate::events::{PostEventBus, PostUpdateAction, PostUpdateEvent};
use crate::models::Post;
use crate::repository::PostRepository;

/// Cards left in the Ing stack before the next page is prefetched.
pub const PREFETCH_THRESHOLD: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FeedTab {
    #[default]
    Ing,
    Done,
}

/// Published feed state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedState {
    pub selected_tab: FeedTab,
    pub ing: PagedList,
    pub done: PagedList,
    pub my_posts: PostList,
    pub liked_posts: PostList,
    pub commented_posts: PostList,
    /// Post currently on top of the Ing card stack.
    pub current_card_post_id: Option<String>,
    pub error_message: Option<String>,
    deleted_ids: HashSet<String>,
}

impl FeedState {
    pub fn list(&self, tab: FeedTab) -> &PagedList {
        match tab {
            FeedTab::Ing => &self.ing,
            FeedTab::Done => &self.done,
        }
    }

    /// Whether a deletion of `post_id` was announced on the bus.
    pub fn is_deleted(&self, post_id: &str) -> bool {
        self.deleted_ids.contains(post_id)
    }

    fn remove_everywhere(&mut self, post_id: &str) -> bool {
        // Non-short-circuiting so every list is visited.
        self.ing.remove(post_id) | self.done.remove(post_id) | self.my_posts.remove(post_id)
    }
}

/// Feed view-model. Must be created inside a Tokio runtime.
pub struct FeedViewModel {
    inner: Arc<FeedInner>,
    listener: JoinHandle<()>,
}

struct FeedInner {
    posts: Arc<dyn PostRepository>,
    state: watch::Sender<FeedState>,
    page_size: u32,
}

impl FeedViewModel {
    pub fn new(posts: Arc<dyn PostRepository>, bus: &PostEventBus, page_size: u32) -> Self {
        let (state, _) = watch::channel(FeedState::default());
        let inner = Arc::new(FeedInner {
            posts,
            state,
            page_size,
        });
        let listener = spawn_listener(Arc::downgrade(&inner), bus.subscribe());
        Self { inner, listener }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FeedState {
        self.inner.state.borrow().clone()
    }

    /// Observe state changes.
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.inner.state.subscribe()
    }

    /// Load the next Ing page. Dropped while a load is in flight or after
    /// the end of the list.
    pub async fn load_ing_posts(&self) {
        self.inner.load_page(FeedTab::Ing).await;
    }

    /// Load the next Done page, same guard as [`Self::load_ing_posts`].
    pub async fn load_done_posts(&self) {
        self.inner.load_page(FeedTab::Done).await;
    }

    /// Load the next page of the selected tab.
    pub async fn load_more(&self) {
        let tab = self.inner.state.borrow().selected_tab;
        self.inner.load_page(tab).await;
    }

    /// Clear both paginated lists and reload the selected tab.
    pub async fn refresh(&self) {
        self.inner.refresh().await;
    }

    /// Switch tabs, loading the first page if the tab was never loaded.
    pub async fn select_tab(&self, tab: FeedTab) {
        let mut needs_load = false;
        self.inner.state.send_if_modified(|s| {
            needs_load = s.list(tab).status() == ListStatus::Idle;
            let changed = s.selected_tab != tab;
            s.selected_tab = tab;
            changed
        });
        if needs_load {
            self.inner.load_page(tab).await;
        }
    }

    pub fn set_current_card(&self, post_id: impl Into<String>) {
        let post_id = post_id.into();
        self.inner.state.send_if_modified(|s| {
            if s.current_card_post_id.as_deref() == Some(post_id.as_str()) {
                return false;
            }
            s.current_card_post_id = Some(post_id);
            true
        });
    }

    /// Advance the Ing stack by one card, prefetching the next page when
    /// the card being left is among the last [`PREFETCH_THRESHOLD`].
    pub async fn swipe_to_next_card(&self) {
        let mut should_prefetch = false;
        self.inner.state.send_if_modified(|s| {
            let Some(current) = s.current_card_post_id.as_deref() else {
                return false;
            };
            let Some(index) = s
                .ing
                .items()
                .iter()
                .position(|p| p.post_id.as_deref() == Some(current))
            else {
                return false;
            };

            should_prefetch = index + PREFETCH_THRESHOLD >= s.ing.len();
            match s.ing.items().get(index + 1).and_then(|p| p.post_id.clone()) {
                Some(next) => {
                    s.current_card_post_id = Some(next);
                    true
                }
                None => false,
            }
        });

        if should_prefetch {
            self.inner.load_page(FeedTab::Ing).await;
        }
    }

    pub async fn load_my_posts(&self) {
        self.inner.load_my_posts(false).await;
    }

    /// Load liked posts, completing each partial entry from its detail.
    pub async fn load_liked_posts(&self) {
        self.inner.load_liked_posts().await;
    }

    pub async fn load_commented_posts(&self) {
        self.inner.load_commented_posts().await;
    }
}

impl Drop for FeedViewModel {
    fn drop(&mut self) {
        self.listener.abort();
    }
}

impl FeedInner {
    async fn load_page(&self, tab: FeedTab) {
        let mut ticket = None;
        self.state.send_if_modified(|s| {
            ticket = match tab {
                FeedTab::Ing => s.ing.begin_load(),
                FeedTab::Done => s.done.begin_load(),
            };
            if ticket.is_some() {
                s.error_message = None;
            }
            ticket.is_some()
        });
        let Some(ticket) = ticket else {
            debug!(?tab, "Page load skipped");
            return;
        };

        let result = match tab {
            FeedTab::Ing => self.posts.get_ing_posts(self.page_size, ticket.cursor).await,
            FeedTab::Done => {
                self.posts
                    .get_done_posts(self.page_size, ticket.cursor)
                    .await
            }
        };

        self.state.send_if_modified(|s| {
            let list = match tab {
                FeedTab::Ing => &mut s.ing,
                FeedTab::Done => &mut s.done,
            };
            let applied = match result {
                Ok(page) => {
                    let count = page.len();
                    let applied = list.finish_page(ticket, page, &s.deleted_ids);
                    if applied {
                        debug!(?tab, count, cursor = ?list.cursor(), "Page merged");
                    }
                    applied
                }
                Err(e) => {
                    let applied = list.fail(ticket);
                    if applied {
                        warn!(?tab, error = %e, "Page load failed");
                        s.error_message = Some(e.user_message());
                    }
                    applied
                }
            };
            if !applied {
                debug!(?tab, "Discarding page from superseded load");
            }
            applied
        });
    }

    async fn refresh(&self) {
        let mut tab = FeedTab::Ing;
        self.state.send_modify(|s| {
            s.ing.reset();
            s.done.reset();
            s.current_card_post_id = None;
            s.error_message = None;
            tab = s.selected_tab;
        });
        self.load_page(tab).await;
    }

    async fn load_my_posts(&self, force: bool) {
        let mut generation = None;
        self.state.send_if_modified(|s| {
            generation = if force {
                Some(s.my_posts.begin_reload())
            } else {
                let started = s.my_posts.begin_load();
                if started.is_some() {
                    s.error_message = None;
                }
                started
            };
            generation.is_some()
        });
        let Some(generation) = generation else {
            return;
        };

        let result = self.posts.get_my_posts().await;
        self.state.send_if_modified(|s| {
            apply_list(&mut s.my_posts, &mut s.error_message, generation, result)
        });
    }

    async fn load_liked_posts(&self) {
        let Some(generation) = self.begin_plain_load(|s| &mut s.liked_posts) else {
            return;
        };

        let result = match self.posts.get_liked_posts().await {
            Ok(posts) => Ok(self.enrich(posts).await),
            Err(e) => Err(e),
        };
        self.state.send_if_modified(|s| {
            apply_list(&mut s.liked_posts, &mut s.error_message, generation, result)
        });
    }

    async fn load_commented_posts(&self) {
        let Some(generation) = self.begin_plain_load(|s| &mut s.commented_posts) else {
            return;
        };

        let result = self.posts.get_commented_posts().await;
        self.state.send_if_modified(|s| {
            apply_list(
                &mut s.commented_posts,
                &mut s.error_message,
                generation,
                result,
            )
        });
    }

    fn begin_plain_load(&self, list: impl FnOnce(&mut FeedState) -> &mut PostList) -> Option<u64> {
        let mut generation = None;
        self.state.send_if_modified(|s| {
            generation = list(s).begin_load();
            if generation.is_some() {
                s.error_message = None;
            }
            generation.is_some()
        });
        generation
    }

    /// Replace each partial post with its detail, keeping the partial
    /// record when the detail cannot be fetched.
    async fn enrich(&self, posts: Vec<Post>) -> Vec<Post> {
        let repository = &self.posts;
        join_all(posts.into_iter().map(|post| async move {
            let Some(post_id) = post.numeric_id() else {
                return post;
            };
            match repository.get_post_detail(post_id).await {
                Ok(detail) => detail.to_post(),
                Err(e) => {
                    debug!(post_id, error = %e, "Keeping partial liked post");
                    post
                }
            }
        }))
        .await
    }

    async fn handle_event(&self, event: PostUpdateEvent) {
        info!(post_id = %event.post_id, action = %event.action, "Applying post update");
        self.state.send_if_modified(|s| {
            if event.action == PostUpdateAction::Deleted {
                s.deleted_ids.insert(event.post_id.clone());
            }
            s.remove_everywhere(&event.post_id)
        });

        match event.action {
            PostUpdateAction::Completed => {
                // Completion moves the post between tabs, so cursors are stale.
                tokio::join!(self.refresh(), self.load_my_posts(true));
            }
            PostUpdateAction::Deleted => {
                self.load_my_posts(true).await;
            }
        }
    }

    async fn resync(&self) {
        tokio::join!(self.refresh(), self.load_my_posts(true));
    }
}

fn apply_list(
    list: &mut PostList,
    error_message: &mut Option<String>,
    generation: u64,
    result: ApiResult<Vec<Post>>,
) -> bool {
    match result {
        Ok(items) => list.finish(generation, items),
        Err(e) => {
            let applied = list.fail(generation);
            if applied {
                warn!(error = %e, "List load failed");
                *error_message = Some(e.user_message());
            }
            applied
        }
    }
}

fn spawn_listener(
    inner: Weak<FeedInner>,
    mut events: broadcast::Receiver<PostUpdateEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    let Some(inner) = inner.upgrade() else {
                        break;
                    };
                    inner.handle_event(event).await;
                }
                Err(RecvError::Lagged(missed)) => {
                    warn!(missed, "Post update listener lagged, reloading all lists");
                    let Some(inner) = inner.upgrade() else {
                        break;
                    };
                    inner.resync().await;
                }
                Err(RecvError::Closed) => break,
            }
        }
        debug!("Post update listener stopped");
    })
}
