use std::sync::Arc;

use crate::error::ApiResult;
use crate::models::{CompletionType, Music, NewPost};
use crate::repository::PostRepository;

/// Input of a story share. Music fields are `None` when no song is attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    /// Free-text description, sent as the album name when no song is attached.
    pub description: String,
    pub story: String,
    pub music_title: Option<String>,
    pub music_artist: Option<String>,
    pub music_album_name: Option<String>,
    pub music_artwork_url: Option<String>,
    pub music_preview_url: Option<String>,
    pub completion_type: CompletionType,
    pub comment_count_limit: u32,
}

impl ShareRequest {
    /// Attach every field of `music`.
    pub fn with_music(mut self, music: &Music) -> Self {
        self.music_title = Some(music.song_name.clone());
        self.music_artist = Some(music.artist_name.clone());
        self.music_album_name = Some(music.album_name.clone());
        self.music_artwork_url = Some(music.artwork_url.clone());
        self.music_preview_url = Some(music.preview_music_url.clone());
        self
    }

    /// Post body with absent music fields filled in.
    pub fn into_new_post(self) -> NewPost {
        NewPost {
            title: self.title,
            content: self.story,
            album_name: self.music_album_name.unwrap_or(self.description),
            song_name: self.music_title.unwrap_or_default(),
            artist_name: self.music_artist.unwrap_or_default(),
            artwork_url: self.music_artwork_url.unwrap_or_default(),
            apple_music_url: self.music_preview_url.unwrap_or_default(),
            completion_type: self.completion_type,
            comment_count_limit: self.comment_count_limit,
        }
    }
}

#[derive(Clone)]
pub struct ShareUseCase {
    repository: Arc<dyn PostRepository>,
}

impl ShareUseCase {
    pub fn new(repository: Arc<dyn PostRepository>) -> Self {
        Self { repository }
    }

    pub async fn share_story(&self, request: ShareRequest) -> ApiResult<()> {
        self.repository.create_post(request.into_new_post()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_without_music_uses_description_as_album() {
        let post = ShareRequest {
            title: "T".to_string(),
            description: "D".to_string(),
            story: "S".to_string(),
            ..ShareRequest::default()
        }
        .into_new_post();

        assert_eq!(post.title, "T");
        assert_eq!(post.content, "S");
        assert_eq!(post.album_name, "D");
        assert_eq!(post.song_name, "");
        assert_eq!(post.artist_name, "");
        assert_eq!(post.artwork_url, "");
        assert_eq!(post.apple_music_url, "");
    }

    #[test]
    fn test_attached_music_wins_over_description() {
        let music = Music {
            album_name: "Kind of Blue".to_string(),
            song_name: "So What".to_string(),
            artist_name: "Miles Davis".to_string(),
            artwork_url: "https://art".to_string(),
            preview_music_url: "https://preview".to_string(),
        };
        let post = ShareRequest {
            title: "T".to_string(),
            description: "D".to_string(),
            story: "S".to_string(),
            ..ShareRequest::default()
        }
        .with_music(&music)
        .into_new_post();

        assert_eq!(post.album_name, "Kind of Blue");
        assert_eq!(post.song_name, "So What");
        assert_eq!(post.apple_music_url, "https://preview");
    }
}
