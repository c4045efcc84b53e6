use async_trait::async_trait;
use tracing::debug;

use crate::api::{ApiClient, MusicApi};
use crate::error::ApiResult;
use crate::models::{Music, MusicDto};

#[async_trait]
pub trait MusicRepository: Send + Sync {
    /// Song search. A payload that fails to decode is an error, never an
    /// empty result.
    async fn search_music(&self, query: &str) -> ApiResult<Vec<Music>>;
}

#[derive(Debug, Clone)]
pub struct HttpMusicRepository {
    api: ApiClient,
    limit: u32,
}

impl HttpMusicRepository {
    pub fn new(api: ApiClient, limit: u32) -> Self {
        Self { api, limit }
    }
}

#[async_trait]
impl MusicRepository for HttpMusicRepository {
    async fn search_music(&self, query: &str) -> ApiResult<Vec<Music>> {
        let call = MusicApi::Search {
            term: query.to_string(),
            limit: self.limit,
        };
        let dtos: Option<Vec<MusicDto>> =
            self.api.fetch(&call.endpoint(), call.operation()).await?;
        let results: Vec<Music> = dtos
            .unwrap_or_default()
            .into_iter()
            .map(Music::from)
            .collect();
        debug!(query, count = results.len(), "Music search finished");
        Ok(results)
    }
}
