//! Single-post screen: detail, like toggle, comments and post management.

use std::collections::HashSet;
use std::sync::Arc;

use tokio::sync::{watch, Mutex};
use tracing::{debug, warn};

use crate::events::{PostEventBus, PostUpdateEvent};
use crate::models::{parse_post_id, Music, NewComment, PostDetail};
use crate::repository::PostRepository;
use crate::usecase::{CommentUseCase, LikeUseCase};

/// Published detail state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostDetailState {
    pub post_detail: Option<PostDetail>,
    pub is_loading: bool,
    pub is_updating_like: bool,
    /// Shared by edit, complete and delete.
    pub is_managing_post: bool,
    pub is_my_post: bool,
    /// Set once the post was deleted; the screen should close.
    pub did_delete: bool,
    /// Song attached to the comment being written.
    pub selected_music: Option<Music>,
}

impl PostDetailState {
    /// `"song - artist"`, or just the song when the artist is empty.
    pub fn selected_music_display_text(&self) -> Option<String> {
        let music = self.selected_music.as_ref()?;
        if music.artist_name.is_empty() {
            Some(music.song_name.clone())
        } else {
            Some(format!("{} - {}", music.song_name, music.artist_name))
        }
    }
}

/// Detail view-model for one post.
///
/// Every action is guarded: a call made while the same kind of action is
/// in flight returns immediately without doing anything. State only
/// changes after the server confirmed the action.
pub struct PostDetailViewModel {
    post_id: String,
    posts: Arc<dyn PostRepository>,
    comments: CommentUseCase,
    likes: LikeUseCase,
    bus: PostEventBus,
    state: watch::Sender<PostDetailState>,
    /// Ids of the current user's posts, fetched once.
    my_post_ids: Mutex<Option<HashSet<String>>>,
}

impl PostDetailViewModel {
    pub fn new(
        post_id: impl Into<String>,
        posts: Arc<dyn PostRepository>,
        comments: CommentUseCase,
        likes: LikeUseCase,
        bus: PostEventBus,
    ) -> Self {
        let (state, _) = watch::channel(PostDetailState::default());
        Self {
            post_id: post_id.into(),
            posts,
            comments,
            likes,
            bus,
            state,
            my_post_ids: Mutex::new(None),
        }
    }

    pub fn post_id(&self) -> &str {
        &self.post_id
    }

    pub fn state(&self) -> PostDetailState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<PostDetailState> {
        self.state.subscribe()
    }

    fn numeric_id(&self) -> Option<i64> {
        let id = parse_post_id(&self.post_id);
        if id.is_none() {
            debug!(post_id = %self.post_id, "Post has no numeric id, ignoring action");
        }
        id
    }

    /// Set a guard flag. Returns `false` if it was already set.
    fn acquire(&self, flag: impl FnOnce(&mut PostDetailState) -> &mut bool) -> bool {
        self.state.send_if_modified(|s| {
            let flag = flag(s);
            if *flag {
                return false;
            }
            *flag = true;
            true
        })
    }

    pub async fn load_detail(&self) {
        let Some(post_id) = self.numeric_id() else {
            return;
        };
        if !self.acquire(|s| &mut s.is_loading) {
            return;
        }

        match self.posts.get_post_detail(post_id).await {
            Ok(detail) => {
                let detail_id = detail.post_id.clone();
                self.state.send_modify(|s| s.post_detail = Some(detail));
                let is_mine = self.check_if_my_post(&detail_id).await;
                self.state.send_modify(|s| {
                    s.is_my_post = is_mine;
                    s.is_loading = false;
                });
            }
            Err(e) => {
                warn!(post_id, error = %e, "Failed to load post detail");
                self.state.send_modify(|s| s.is_loading = false);
            }
        }
    }

    /// Membership in the current user's posts. The list is fetched on first
    /// use and kept for the lifetime of the view-model; a failed fetch is
    /// retried next time.
    async fn check_if_my_post(&self, post_id: &str) -> bool {
        let mut cache = self.my_post_ids.lock().await;
        if let Some(ids) = cache.as_ref() {
            return ids.contains(post_id);
        }

        match self.posts.get_my_posts().await {
            Ok(posts) => {
                let ids: HashSet<String> = posts.into_iter().filter_map(|p| p.post_id).collect();
                let is_mine = ids.contains(post_id);
                *cache = Some(ids);
                is_mine
            }
            Err(e) => {
                warn!(error = %e, "Failed to load my posts");
                false
            }
        }
    }

    /// Like or unlike depending on the cached state. The cached flag flips
    /// only when the server accepted the call.
    pub async fn toggle_like(&self) {
        let Some(post_id) = self.numeric_id() else {
            return;
        };
        let mut was_liked = None;
        self.state.send_if_modified(|s| {
            if s.is_updating_like {
                return false;
            }
            let Some(detail) = s.post_detail.as_ref() else {
                return false;
            };
            was_liked = Some(detail.is_liked);
            s.is_updating_like = true;
            true
        });
        let Some(was_liked) = was_liked else {
            return;
        };

        let result = if was_liked {
            self.likes.unlike(post_id).await
        } else {
            self.likes.like(post_id).await
        };

        self.state.send_modify(|s| {
            match result {
                Ok(()) => {
                    if let Some(detail) = s.post_detail.as_mut() {
                        *detail = detail.with_liked(!was_liked);
                    }
                }
                Err(e) => warn!(post_id, error = %e, "Failed to toggle like"),
            }
            s.is_updating_like = false;
        });
    }

    pub fn select_music(&self, music: Music) {
        self.state.send_modify(|s| s.selected_music = Some(music));
    }

    pub fn clear_selected_music(&self) {
        self.state.send_if_modified(|s| s.selected_music.take().is_some());
    }

    pub fn selected_music_display_text(&self) -> Option<String> {
        self.state.borrow().selected_music_display_text()
    }

    /// Post a comment, attaching the selected song or else the post's own.
    ///
    /// On success the detail is reloaded and the selection cleared. On
    /// failure nothing changes so the user can retry. Returns whether the
    /// comment was accepted.
    pub async fn create_comment(&self, content: &str) -> bool {
        let Some(post_id) = self.numeric_id() else {
            return false;
        };
        let comment = {
            let s = self.state.borrow();
            let selected = s.selected_music.as_ref();
            let detail = s.post_detail.as_ref();
            NewComment {
                content: content.to_string(),
                album_name: selected.map(|m| m.album_name.clone()).unwrap_or_default(),
                song_name: selected
                    .map(|m| m.song_name.clone())
                    .or_else(|| detail.map(|d| d.song_name.clone()))
                    .unwrap_or_default(),
                artist_name: selected
                    .map(|m| m.artist_name.clone())
                    .or_else(|| detail.map(|d| d.artist_name.clone()))
                    .unwrap_or_default(),
                artwork_url: selected
                    .map(|m| m.artwork_url.clone())
                    .or_else(|| detail.map(|d| d.artwork_url.clone()))
                    .unwrap_or_default(),
                apple_music_url: selected
                    .map(|m| m.preview_music_url.clone())
                    .or_else(|| detail.map(|d| d.apple_music_url.clone()))
                    .unwrap_or_default(),
                post_id,
            }
        };

        match self.comments.create_comment(comment).await {
            Ok(()) => {
                self.load_detail().await;
                self.clear_selected_music();
                true
            }
            Err(e) => {
                warn!(post_id, error = %e, "Failed to create comment");
                false
            }
        }
    }

    /// Close the post, reload it and announce the completion.
    pub async fn mark_completed(&self) {
        let Some(post_id) = self.numeric_id() else {
            return;
        };
        if !self.acquire(|s| &mut s.is_managing_post) {
            return;
        }

        match self.posts.update_post_state(post_id).await {
            Ok(()) => {
                self.load_detail().await;
                self.bus
                    .publish(PostUpdateEvent::completed(self.post_id.clone()));
            }
            Err(e) => warn!(post_id, error = %e, "Failed to mark post completed"),
        }

        self.state.send_modify(|s| s.is_managing_post = false);
    }

    /// Delete the post and announce the deletion.
    pub async fn delete_post(&self) {
        let Some(post_id) = self.numeric_id() else {
            return;
        };
        if !self.acquire(|s| &mut s.is_managing_post) {
            return;
        }

        match self.posts.delete_post(post_id).await {
            Ok(()) => {
                let detail_id = self
                    .state
                    .borrow()
                    .post_detail
                    .as_ref()
                    .map(|d| d.post_id.clone());
                if let Some(detail_id) = detail_id {
                    if let Some(ids) = self.my_post_ids.lock().await.as_mut() {
                        ids.remove(&detail_id);
                    }
                }
                self.state.send_modify(|s| {
                    s.is_my_post = false;
                    s.did_delete = true;
                    s.is_managing_post = false;
                });
                self.bus.publish(PostUpdateEvent::deleted(self.post_id.clone()));
            }
            Err(e) => {
                warn!(post_id, error = %e, "Failed to delete post");
                self.state.send_modify(|s| s.is_managing_post = false);
            }
        }
    }

    /// Edit title and content. Returns `false` when busy or rejected so the
    /// caller can keep the edit form open.
    pub async fn update_post(&self, title: &str, content: &str) -> bool {
        let Some(post_id) = self.numeric_id() else {
            return false;
        };
        if !self.acquire(|s| &mut s.is_managing_post) {
            return false;
        }

        let updated = match self.posts.update_post(post_id, title, content).await {
            Ok(()) => {
                self.load_detail().await;
                true
            }
            Err(e) => {
                warn!(post_id, error = %e, "Failed to update post");
                false
            }
        };

        self.state.send_modify(|s| s.is_managing_post = false);
        updated
    }
}
