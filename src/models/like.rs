//! Per-user like status.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Like {
    pub post_id: String,
    pub user_id: Option<String>,
    pub is_liked: Option<bool>,
}

/// The like endpoints already send ids as strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeDto {
    pub post_id: String,
    pub user_id: Option<String>,
    pub is_liked: Option<bool>,
}

impl From<LikeDto> for Like {
    fn from(dto: LikeDto) -> Self {
        Like {
            post_id: dto.post_id,
            user_id: dto.user_id,
            is_liked: dto.is_liked,
        }
    }
}
