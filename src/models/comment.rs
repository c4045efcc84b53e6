//! Comments, optionally carrying an attached song.

use serde::{Deserialize, Serialize};

/// A comment on a post.
///
/// Music fields are absent when no song was attached.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Comment {
    pub comment_id: Option<String>,
    pub post_id: Option<String>,
    pub user_id: Option<String>,
    pub content: Option<String>,
    pub created_at: Option<String>,
    pub album_name: Option<String>,
    pub song_name: Option<String>,
    pub artist_name: Option<String>,
    pub artwork_url: Option<String>,
    pub apple_music_url: Option<String>,
    pub modified_at: Option<String>,
    pub is_deleted: Option<bool>,
}

impl Comment {
    /// Whether a song is attached to this comment.
    pub fn has_music(&self) -> bool {
        self.song_name.as_deref().is_some_and(|name| !name.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDto {
    pub comment_id: Option<i64>,
    pub post_id: Option<i64>,
    pub user_id: Option<i64>,
    pub content: Option<String>,
    pub created_at: Option<String>,
    pub album_name: Option<String>,
    pub song_name: Option<String>,
    pub artist_name: Option<String>,
    pub artwork_url: Option<String>,
    pub apple_music_url: Option<String>,
    pub modified_at: Option<String>,
    pub is_deleted: Option<bool>,
}

impl From<CommentDto> for Comment {
    fn from(dto: CommentDto) -> Self {
        Comment {
            comment_id: dto.comment_id.map(|id| id.to_string()),
            post_id: dto.post_id.map(|id| id.to_string()),
            user_id: dto.user_id.map(|id| id.to_string()),
            content: dto.content,
            created_at: dto.created_at,
            album_name: dto.album_name,
            song_name: dto.song_name,
            artist_name: dto.artist_name,
            artwork_url: dto.artwork_url,
            apple_music_url: dto.apple_music_url,
            modified_at: dto.modified_at,
            is_deleted: dto.is_deleted,
        }
    }
}

/// Body of `POST /comments`.
///
/// Every music field is sent, as an empty string when nothing applies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    pub album_name: String,
    pub song_name: String,
    pub artist_name: String,
    pub artwork_url: String,
    pub apple_music_url: String,
    pub post_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_ids_become_strings() {
        let dto: CommentDto = serde_json::from_str(
            r#"{"commentId":9,"postId":3,"userId":12,"content":"nice","isDeleted":false}"#,
        )
        .unwrap();
        let comment = Comment::from(dto);
        assert_eq!(comment.comment_id.as_deref(), Some("9"));
        assert_eq!(comment.post_id.as_deref(), Some("3"));
        assert_eq!(comment.user_id.as_deref(), Some("12"));
        assert!(!comment.has_music());
    }

    #[test]
    fn test_new_comment_serializes_camel_case() {
        let body = NewComment {
            content: "hi".to_string(),
            post_id: 4,
            ..NewComment::default()
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["postId"], 4);
        assert_eq!(value["albumName"], "");
        assert_eq!(value["appleMusicUrl"], "");
    }
}
