//! Post entities and the wire projections they are mapped from.
//!
//! Each list endpoint returns its own partial projection of a post, so
//! [`Post`] keeps every field optional. [`PostDetail`] is the full record.

use serde::{Deserialize, Serialize};

use super::comment::{Comment, CommentDto};

/// A post as shown in lists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Post {
    pub post_id: Option<String>,
    pub writer_id: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub song_name: Option<String>,
    pub artist_name: Option<String>,
    pub artwork_url: Option<String>,
    pub apple_music_url: Option<String>,
    pub created_at: Option<String>,
    pub is_completed: Option<bool>,
}

impl Post {
    /// Numeric id used on the wire, if this post can be addressed at all.
    ///
    /// Posts without an id can be listed but never opened, edited or deleted.
    pub fn numeric_id(&self) -> Option<i64> {
        self.post_id.as_deref().and_then(parse_post_id)
    }
}

/// Parse an entity post id into its wire form.
pub fn parse_post_id(post_id: &str) -> Option<i64> {
    post_id.trim().parse().ok()
}

/// The authoritative single-post view.
#[derive(Debug, Clone, PartialEq)]
pub struct PostDetail {
    pub post_id: String,
    pub title: String,
    pub content: String,
    pub song_name: String,
    pub artist_name: String,
    pub artwork_url: String,
    pub apple_music_url: String,
    pub created_at: String,
    pub is_liked: bool,
    pub comments: Option<Vec<Comment>>,
}

impl PostDetail {
    /// Copy of this detail with `is_liked` replaced.
    pub fn with_liked(&self, is_liked: bool) -> Self {
        Self {
            is_liked,
            ..self.clone()
        }
    }

    /// Project the detail down to a list entry.
    ///
    /// The detail carries no writer or completion state, so those stay empty.
    pub fn to_post(&self) -> Post {
        Post {
            post_id: Some(self.post_id.clone()),
            writer_id: None,
            title: Some(self.title.clone()),
            content: Some(self.content.clone()),
            song_name: Some(self.song_name.clone()),
            artist_name: Some(self.artist_name.clone()),
            artwork_url: Some(self.artwork_url.clone()),
            apple_music_url: Some(self.apple_music_url.clone()),
            created_at: Some(self.created_at.clone()),
            is_completed: None,
        }
    }
}

/// How a post closes for new comments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum CompletionType {
    /// Closes by itself once the comment limit is reached.
    #[serde(rename = "AUTO_COMPLETION")]
    Auto,
    /// Closed by the author.
    #[default]
    #[serde(rename = "MANUAL_COMPLETION")]
    Manual,
}

impl CompletionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionType::Auto => "AUTO_COMPLETION",
            CompletionType::Manual => "MANUAL_COMPLETION",
        }
    }

    /// Only automatic completion sends a comment limit; manual sends 0.
    pub fn requires_comment_limit(&self) -> bool {
        matches!(self, CompletionType::Auto)
    }
}

/// Body of `POST /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub album_name: String,
    pub song_name: String,
    pub artist_name: String,
    pub artwork_url: String,
    pub apple_music_url: String,
    pub completion_type: CompletionType,
    pub comment_count_limit: u32,
}

/// Full post projection used by `/posts/my`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub post_id: Option<i64>,
    pub writer_id: Option<i64>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub song_name: Option<String>,
    pub artist_name: Option<String>,
    pub artwork_url: Option<String>,
    pub apple_music_url: Option<String>,
    pub created_at: Option<String>,
    pub is_completed: Option<bool>,
}

impl From<PostDto> for Post {
    fn from(dto: PostDto) -> Self {
        Post {
            post_id: dto.post_id.map(|id| id.to_string()),
            writer_id: dto.writer_id.map(|id| id.to_string()),
            title: dto.title,
            content: dto.content,
            song_name: dto.song_name,
            artist_name: dto.artist_name,
            artwork_url: dto.artwork_url,
            apple_music_url: dto.apple_music_url,
            created_at: dto.created_at,
            is_completed: dto.is_completed,
        }
    }
}

/// `/posts/my` payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MyPostsDto {
    pub post_count: Option<i64>,
    pub get_my_post_responses: Option<Vec<PostDto>>,
}

impl MyPostsDto {
    pub fn into_posts(self) -> Vec<Post> {
        self.get_my_post_responses
            .unwrap_or_default()
            .into_iter()
            .map(Post::from)
            .collect()
    }
}

/// Element of the Ing/Done cursor-paginated feeds.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollPostDto {
    pub post_id: i64,
    pub title: String,
    pub content: String,
    pub song_name: Option<String>,
    pub artist_name: Option<String>,
    pub artwork_url: Option<String>,
    pub apple_music_url: Option<String>,
    pub created_at: String,
    pub is_completed: bool,
}

impl From<ScrollPostDto> for Post {
    fn from(dto: ScrollPostDto) -> Self {
        Post {
            post_id: Some(dto.post_id.to_string()),
            writer_id: None,
            title: Some(dto.title),
            content: Some(dto.content),
            song_name: dto.song_name,
            artist_name: dto.artist_name,
            artwork_url: dto.artwork_url,
            apple_music_url: dto.apple_music_url,
            created_at: Some(dto.created_at),
            is_completed: Some(dto.is_completed),
        }
    }
}

/// `/posts/random` payload, a single post.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomPostDto {
    pub post_id: i64,
    pub writer_id: Option<i64>,
    pub title: String,
    pub content: String,
}

impl From<RandomPostDto> for Post {
    fn from(dto: RandomPostDto) -> Self {
        Post {
            post_id: Some(dto.post_id.to_string()),
            writer_id: dto.writer_id.map(|id| id.to_string()),
            title: Some(dto.title),
            content: Some(dto.content),
            ..Post::default()
        }
    }
}

/// Element of `/posts/commented`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentedPostDto {
    pub post_id: i64,
    pub artwork_url: String,
    pub title: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<CommentedPostDto> for Post {
    fn from(dto: CommentedPostDto) -> Self {
        Post {
            post_id: Some(dto.post_id.to_string()),
            title: Some(dto.title),
            artwork_url: Some(dto.artwork_url),
            created_at: Some(dto.created_at),
            ..Post::default()
        }
    }
}

/// Element of `/posts/liked`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikedPostDto {
    pub post_id: i64,
    pub artwork_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub song_name: Option<String>,
    pub artist_name: Option<String>,
    pub apple_music_url: Option<String>,
}

impl From<LikedPostDto> for Post {
    fn from(dto: LikedPostDto) -> Self {
        Post {
            post_id: Some(dto.post_id.to_string()),
            writer_id: None,
            title: dto.title,
            content: dto.content,
            song_name: dto.song_name,
            artist_name: dto.artist_name,
            artwork_url: dto.artwork_url,
            apple_music_url: dto.apple_music_url,
            created_at: dto.created_at,
            is_completed: None,
        }
    }
}

/// `/posts/{id}` payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDetailDto {
    pub post_id: i64,
    pub title: String,
    pub content: String,
    pub song_name: String,
    pub artist_name: String,
    pub artwork_url: String,
    pub apple_music_url: String,
    pub created_at: String,
    pub is_liked: bool,
    #[serde(default)]
    pub comments: Vec<CommentDto>,
}

impl From<PostDetailDto> for PostDetail {
    fn from(dto: PostDetailDto) -> Self {
        PostDetail {
            post_id: dto.post_id.to_string(),
            title: dto.title,
            content: dto.content,
            song_name: dto.song_name,
            artist_name: dto.artist_name,
            artwork_url: dto.artwork_url,
            apple_music_url: dto.apple_music_url,
            created_at: dto.created_at,
            is_liked: dto.is_liked,
            comments: Some(dto.comments.into_iter().map(Comment::from).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_post_maps_numeric_id_to_string() {
        let dto: ScrollPostDto = serde_json::from_str(
            r#"{"postId":42,"title":"t","content":"c","createdAt":"2025-12-01","isCompleted":false}"#,
        )
        .unwrap();
        let post = Post::from(dto);
        assert_eq!(post.post_id.as_deref(), Some("42"));
        assert_eq!(post.numeric_id(), Some(42));
        assert_eq!(post.is_completed, Some(false));
        assert!(post.song_name.is_none());
    }

    #[test]
    fn test_my_posts_without_list_is_empty() {
        let dto: MyPostsDto = serde_json::from_str(r#"{"postCount":0}"#).unwrap();
        assert!(dto.into_posts().is_empty());
    }

    #[test]
    fn test_post_without_id_is_not_addressable() {
        let post = Post {
            title: Some("orphan".to_string()),
            ..Post::default()
        };
        assert_eq!(post.numeric_id(), None);

        let post = Post {
            post_id: Some("abc".to_string()),
            ..Post::default()
        };
        assert_eq!(post.numeric_id(), None);
    }

    #[test]
    fn test_detail_decodes_comments_and_projects_to_post() {
        let dto: PostDetailDto = serde_json::from_str(
            r#"{
                "postId": 5, "title": "T", "content": "C", "songName": "S",
                "artistName": "A", "artworkUrl": "art", "appleMusicUrl": "am",
                "createdAt": "now", "isLiked": true,
                "comments": [{"commentId": 1, "postId": 5, "content": "hi"}]
            }"#,
        )
        .unwrap();
        let detail = PostDetail::from(dto);
        assert!(detail.is_liked);
        assert_eq!(detail.comments.as_ref().map(Vec::len), Some(1));

        let post = detail.to_post();
        assert_eq!(post.post_id.as_deref(), Some("5"));
        assert_eq!(post.song_name.as_deref(), Some("S"));
        assert!(post.writer_id.is_none());
        assert!(post.is_completed.is_none());
    }

    #[test]
    fn test_new_post_wire_shape() {
        let body = NewPost {
            title: "T".to_string(),
            content: "S".to_string(),
            album_name: "D".to_string(),
            song_name: String::new(),
            artist_name: String::new(),
            artwork_url: String::new(),
            apple_music_url: String::new(),
            completion_type: CompletionType::Manual,
            comment_count_limit: 0,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["albumName"], "D");
        assert_eq!(value["completionType"], "MANUAL_COMPLETION");
        assert_eq!(value["commentCountLimit"], 0);
        assert_eq!(value["appleMusicUrl"], "");
    }

    #[test]
    fn test_with_liked_keeps_other_fields() {
        let detail = PostDetail {
            post_id: "1".to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            song_name: String::new(),
            artist_name: String::new(),
            artwork_url: String::new(),
            apple_music_url: String::new(),
            created_at: String::new(),
            is_liked: false,
            comments: None,
        };
        let liked = detail.with_liked(true);
        assert!(liked.is_liked);
        assert_eq!(liked.title, "t");
    }
}
