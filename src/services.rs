//! Dependency container.
//!
//! Builds every repository and use case once from a [`ClientConfig`] and
//! the two injection seams, and hands out view-models that share one
//! [`PostEventBus`].

use std::sync::Arc;

use crate::adapters::{FileTokenStore, ReqwestHttpClient};
use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::events::PostEventBus;
use crate::repository::{
    CommentRepository, HttpCommentRepository, HttpLikeRepository, HttpMusicRepository,
    HttpPostRepository, HttpUserRepository, LikeRepository, MusicRepository, PostRepository,
    UserRepository,
};
use crate::traits::{HttpClient, TokenStore, TokenStoreError};
use crate::usecase::{CommentUseCase, LikeUseCase, LoginUseCase, MusicSearchUseCase, ShareUseCase};
use crate::view_model::{FeedViewModel, MusicSearchViewModel, PostDetailViewModel, ShareViewModel};

#[derive(Clone)]
pub struct Services {
    config: ClientConfig,
    bus: PostEventBus,
    pub posts: Arc<dyn PostRepository>,
    pub comments: Arc<dyn CommentRepository>,
    pub likes: Arc<dyn LikeRepository>,
    pub music: Arc<dyn MusicRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Services {
    pub fn new(
        config: ClientConfig,
        http: Arc<dyn HttpClient>,
        token_store: Arc<dyn TokenStore>,
    ) -> Self {
        let api = ApiClient::new(http, token_store, config.base_url());
        Self {
            bus: PostEventBus::new(config.event_capacity),
            posts: Arc::new(HttpPostRepository::new(api.clone(), config.liked_page_size)),
            comments: Arc::new(HttpCommentRepository::new(api.clone())),
            likes: Arc::new(HttpLikeRepository::new(api.clone())),
            music: Arc::new(HttpMusicRepository::new(api.clone(), config.search_limit)),
            users: Arc::new(HttpUserRepository::new(api)),
            config,
        }
    }

    /// Production wiring: reqwest plus the preferences-file token store.
    pub fn production(config: ClientConfig) -> Result<Self, TokenStoreError> {
        let token_store = match &config.token_path {
            Some(path) => FileTokenStore::with_path(path),
            None => FileTokenStore::new()?,
        };
        Ok(Self::new(
            config,
            Arc::new(ReqwestHttpClient::new()),
            Arc::new(token_store),
        ))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn event_bus(&self) -> &PostEventBus {
        &self.bus
    }

    pub fn comment_use_case(&self) -> CommentUseCase {
        CommentUseCase::new(Arc::clone(&self.comments))
    }

    pub fn like_use_case(&self) -> LikeUseCase {
        LikeUseCase::new(Arc::clone(&self.likes))
    }

    pub fn share_use_case(&self) -> ShareUseCase {
        ShareUseCase::new(Arc::clone(&self.posts))
    }

    pub fn music_search_use_case(&self) -> MusicSearchUseCase {
        MusicSearchUseCase::new(Arc::clone(&self.music))
    }

    pub fn login_use_case(&self) -> LoginUseCase {
        LoginUseCase::new(Arc::clone(&self.users))
    }

    /// Must be called inside a Tokio runtime.
    pub fn feed_view_model(&self) -> FeedViewModel {
        FeedViewModel::new(Arc::clone(&self.posts), &self.bus, self.config.page_size)
    }

    pub fn post_detail_view_model(&self, post_id: impl Into<String>) -> PostDetailViewModel {
        PostDetailViewModel::new(
            post_id,
            Arc::clone(&self.posts),
            self.comment_use_case(),
            self.like_use_case(),
            self.bus.clone(),
        )
    }

    pub fn share_view_model(&self) -> ShareViewModel {
        ShareViewModel::new(self.share_use_case())
    }

    pub fn music_search_view_model(&self) -> MusicSearchViewModel {
        MusicSearchViewModel::new(self.music_search_use_case())
    }
}
