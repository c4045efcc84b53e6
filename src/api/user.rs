//! `/user` login endpoints. Neither carries a token.

use serde_json::json;

use super::Endpoint;

/// Provider tag for device-bound anonymous accounts.
pub const GUEST_PROVIDER: &str = "GUEST";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserApi {
    GuestLogin { device_id: String },
    Login { id_token: String, provider: String },
}

impl UserApi {
    pub fn operation(&self) -> &'static str {
        match self {
            UserApi::GuestLogin { .. } => "guestLogin",
            UserApi::Login { .. } => "login",
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            UserApi::GuestLogin { device_id } => Endpoint::post("/user/guest")
                .json(json!({ "deviceId": device_id, "provider": GUEST_PROVIDER }))
                .public(),
            UserApi::Login { id_token, provider } => Endpoint::post("/user/login")
                .json(json!({ "idToken": id_token, "provider": provider }))
                .public(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_login_body() {
        let endpoint = UserApi::GuestLogin {
            device_id: "device-1".to_string(),
        }
        .endpoint();
        assert_eq!(endpoint.path, "/user/guest");
        assert!(!endpoint.authorized);
        assert_eq!(
            endpoint.body,
            Some(json!({"deviceId": "device-1", "provider": "GUEST"}))
        );
    }
}
