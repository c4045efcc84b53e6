//! Login results.

use serde::Deserialize;

/// Credentials issued by a login call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserData {
    pub access_token: String,
    pub token_type: String,
    pub role: String,
    pub is_registered: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub access_token: String,
    pub token_type: String,
    pub role: String,
    pub is_registered: bool,
}

impl From<UserDto> for UserData {
    fn from(dto: UserDto) -> Self {
        UserData {
            access_token: dto.access_token,
            token_type: dto.token_type,
            role: dto.role,
            is_registered: dto.is_registered,
        }
    }
}
