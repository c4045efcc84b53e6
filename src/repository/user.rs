use async_trait::async_trait;
use tracing::{info, warn};

use crate::api::{ApiClient, UserApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{UserData, UserDto};

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Guest login bound to `device_id`.
    ///
    /// On success the access token is persisted before this returns. On
    /// failure the previously stored token is left untouched.
    async fn login(&self, device_id: &str) -> ApiResult<UserData>;

    /// Login with an identity-provider token, same persistence rule.
    async fn login_with_provider(&self, id_token: &str, provider: &str) -> ApiResult<UserData>;

    /// Not implemented by the backend yet; does nothing.
    fn fetch_profile(&self) {}
}

#[derive(Debug, Clone)]
pub struct HttpUserRepository {
    api: ApiClient,
}

impl HttpUserRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    async fn authenticate(&self, call: UserApi) -> ApiResult<UserData> {
        let operation = call.operation();
        let result = async {
            let dto: UserDto = self.api.fetch_required(&call.endpoint(), operation).await?;
            let user = UserData::from(dto);
            self.api.token_store().set(&user.access_token).await?;
            Ok::<UserData, ApiError>(user)
        }
        .await;

        match &result {
            Ok(user) => info!(
                operation,
                role = %user.role,
                registered = user.is_registered,
                "Login succeeded, access token stored"
            ),
            Err(e) => warn!(operation, error = %e, code = e.error_code(), "Login failed"),
        }
        result
    }
}

#[async_trait]
impl UserRepository for HttpUserRepository {
    async fn login(&self, device_id: &str) -> ApiResult<UserData> {
        self.authenticate(UserApi::GuestLogin {
            device_id: device_id.to_string(),
        })
        .await
    }

    async fn login_with_provider(&self, id_token: &str, provider: &str) -> ApiResult<UserData> {
        self.authenticate(UserApi::Login {
            id_token: id_token.to_string(),
            provider: provider.to_string(),
        })
        .await
    }
}
