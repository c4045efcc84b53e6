//! Apple Music search proxy.

use super::Endpoint;

/// Only song results are requested.
pub const SEARCH_TYPES: &str = "songs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MusicApi {
    Search { term: String, limit: u32 },
}

impl MusicApi {
    pub fn operation(&self) -> &'static str {
        match self {
            MusicApi::Search { .. } => "searchMusic",
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            MusicApi::Search { term, limit } => Endpoint::get("/apple-music/search")
                .query("term", term)
                .query("types", SEARCH_TYPES)
                .query("limit", limit)
                .public(),
        }
    }
}
