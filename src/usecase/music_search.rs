use std::sync::Arc;

use crate::error::ApiResult;
use crate::models::Music;
use crate::repository::MusicRepository;

#[derive(Clone)]
pub struct MusicSearchUseCase {
    repository: Arc<dyn MusicRepository>,
}

impl MusicSearchUseCase {
    pub fn new(repository: Arc<dyn MusicRepository>) -> Self {
        Self { repository }
    }

    pub async fn search_music(&self, query: &str) -> ApiResult<Vec<Music>> {
        self.repository.search_music(query).await
    }
}
