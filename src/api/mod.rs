//! Endpoint catalogue and the authenticated client that executes it.
//!
//! Each resource has an enum describing its calls (`PostApi`, `CommentApi`,
//! ...). An enum value turns into an [`Endpoint`]: method, path, query and
//! JSON body, plus whether the bearer token must be attached.

pub mod client;
pub mod comment;
pub mod like;
pub mod music;
pub mod post;
pub mod user;

use std::fmt;

pub use client::ApiClient;
pub use comment::CommentApi;
pub use like::LikeApi;
pub use music::MusicApi;
pub use post::PostApi;
pub use user::UserApi;

/// HTTP verbs used by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single backend call, ready to be sent by [`ApiClient`].
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoint {
    pub method: Method,
    /// Path relative to the base URL, starting with `/`.
    pub path: String,
    /// Query parameters in the order they are sent.
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
    /// Attach `Authorization: Bearer <token>` when a token is stored.
    pub authorized: bool,
}

impl Endpoint {
    /// Create an authorized endpoint with no query or body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            authorized: true,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Append a query parameter.
    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// Set the JSON body.
    pub fn json(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Send without the bearer token.
    pub fn public(mut self) -> Self {
        self.authorized = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_defaults_to_authorized() {
        let endpoint = Endpoint::get("/posts/random");
        assert_eq!(endpoint.method, Method::Get);
        assert!(endpoint.authorized);
        assert!(endpoint.query.is_empty());
        assert!(endpoint.body.is_none());
    }

    #[test]
    fn test_builder_keeps_query_order() {
        let endpoint = Endpoint::get("/posts/ing/infinite-scroll")
            .query("pageSize", 20)
            .query("lastPostId", 7);
        assert_eq!(
            endpoint.query,
            vec![("pageSize", "20".to_string()), ("lastPostId", "7".to_string())]
        );
    }

    #[test]
    fn test_public_and_json() {
        let endpoint = Endpoint::post("/user/guest")
            .json(json!({"deviceId": "d"}))
            .public();
        assert!(!endpoint.authorized);
        assert_eq!(endpoint.body, Some(json!({"deviceId": "d"})));
        assert_eq!(endpoint.method.to_string(), "POST");
    }
}
