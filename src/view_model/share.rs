//! Story composer.

use tokio::sync::watch;
use tracing::{info, warn};

use crate::models::{CompletionType, Music};
use crate::usecase::{ShareRequest, ShareUseCase};

/// Longest story accepted by the composer, in characters.
pub const MAX_STORY_CHARACTERS: usize = 200;

/// Comment limit offered for automatic completion.
pub const DEFAULT_COMMENT_LIMIT: u32 = 20;

pub const EMPTY_TITLE_MESSAGE: &str = "Please enter a title for your story.";
pub const EMPTY_STORY_MESSAGE: &str = "Please write your story.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareState {
    pub title: String,
    pub description: String,
    pub story: String,
    pub selected_music: Option<Music>,
    pub completion_type: CompletionType,
    pub comment_limit: u32,
    pub is_sharing: bool,
    pub error_message: Option<String>,
    pub did_share_successfully: bool,
}

impl Default for ShareState {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            story: String::new(),
            selected_music: None,
            completion_type: CompletionType::default(),
            comment_limit: DEFAULT_COMMENT_LIMIT,
            is_sharing: false,
            error_message: None,
            did_share_successfully: false,
        }
    }
}

pub struct ShareViewModel {
    share: ShareUseCase,
    state: watch::Sender<ShareState>,
}

impl ShareViewModel {
    pub fn new(share: ShareUseCase) -> Self {
        let (state, _) = watch::channel(ShareState::default());
        Self { share, state }
    }

    pub fn state(&self) -> ShareState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<ShareState> {
        self.state.subscribe()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        let title = title.into();
        self.state.send_modify(|s| s.title = title);
    }

    pub fn set_description(&self, description: impl Into<String>) {
        let description = description.into();
        self.state.send_modify(|s| s.description = description);
    }

    /// Set the story, cut to [`MAX_STORY_CHARACTERS`].
    pub fn set_story(&self, story: &str) {
        let story: String = story.chars().take(MAX_STORY_CHARACTERS).collect();
        self.state.send_modify(|s| s.story = story);
    }

    pub fn select_music(&self, music: Music) {
        self.state.send_modify(|s| s.selected_music = Some(music));
    }

    pub fn clear_music(&self) {
        self.state
            .send_if_modified(|s| s.selected_music.take().is_some());
    }

    /// Store completion settings and share right away.
    pub async fn confirm_settings(&self, completion_type: CompletionType, limit: u32) -> bool {
        self.state.send_modify(|s| {
            s.completion_type = completion_type;
            s.comment_limit = limit;
        });
        self.share_story().await
    }

    /// Reset the success flag once the confirmation was shown.
    pub fn close_complete_view(&self) {
        self.state
            .send_if_modified(|s| std::mem::replace(&mut s.did_share_successfully, false));
    }

    /// Validate and create the post. Returns whether it was created.
    pub async fn share_story(&self) -> bool {
        let mut request = None;
        self.state.send_if_modified(|s| {
            if s.is_sharing {
                return false;
            }
            if s.title.is_empty() {
                s.error_message = Some(EMPTY_TITLE_MESSAGE.to_string());
                return true;
            }
            if s.story.is_empty() {
                s.error_message = Some(EMPTY_STORY_MESSAGE.to_string());
                return true;
            }

            let base = ShareRequest {
                title: s.title.clone(),
                description: s.description.clone(),
                story: s.story.clone(),
                completion_type: s.completion_type,
                comment_count_limit: if s.completion_type.requires_comment_limit() {
                    s.comment_limit
                } else {
                    0
                },
                ..ShareRequest::default()
            };
            request = Some(match s.selected_music.as_ref() {
                Some(music) => base.with_music(music),
                None => base,
            });
            s.error_message = None;
            s.is_sharing = true;
            true
        });
        let Some(request) = request else {
            return false;
        };

        let result = self.share.share_story(request).await;
        let shared = result.is_ok();
        self.state.send_modify(|s| {
            match result {
                Ok(()) => {
                    info!("Story shared");
                    s.did_share_successfully = true;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to share story");
                    s.error_message = Some(e.user_message());
                }
            }
            s.is_sharing = false;
        });
        shared
    }
}
