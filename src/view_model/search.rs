//! Music search used to attach songs to stories and comments.

use std::collections::HashSet;

use tokio::sync::watch;
use tracing::warn;

use crate::models::Music;
use crate::usecase::MusicSearchUseCase;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MusicSearchState {
    pub query: String,
    /// Unique songs in the order the server returned them.
    pub results: Vec<Music>,
    pub is_searching: bool,
}

pub struct MusicSearchViewModel {
    search: MusicSearchUseCase,
    state: watch::Sender<MusicSearchState>,
}

impl MusicSearchViewModel {
    pub fn new(search: MusicSearchUseCase) -> Self {
        let (state, _) = watch::channel(MusicSearchState::default());
        Self { search, state }
    }

    pub fn state(&self) -> MusicSearchState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<MusicSearchState> {
        self.state.subscribe()
    }

    /// Search for `query`. Blank queries and calls made while a search is
    /// running are ignored; a failed search keeps the previous results.
    pub async fn search(&self, query: &str) {
        let query = query.trim();
        if query.is_empty() {
            return;
        }
        let started = self.state.send_if_modified(|s| {
            if s.is_searching {
                return false;
            }
            s.query = query.to_string();
            s.is_searching = true;
            true
        });
        if !started {
            return;
        }

        let result = self.search.search_music(query).await;
        self.state.send_modify(|s| {
            match result {
                Ok(found) => s.results = unique(found),
                Err(e) => warn!(query, error = %e, "Music search failed"),
            }
            s.is_searching = false;
        });
    }
}

fn unique(songs: Vec<Music>) -> Vec<Music> {
    let mut seen = HashSet::new();
    songs
        .into_iter()
        .filter(|music| seen.insert(music.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(name: &str, artwork: &str) -> Music {
        Music {
            album_name: "Album".to_string(),
            song_name: name.to_string(),
            artist_name: "Artist".to_string(),
            artwork_url: artwork.to_string(),
            preview_music_url: String::new(),
        }
    }

    #[test]
    fn test_unique_keeps_first_occurrence() {
        let songs = vec![song("a", "1"), song("b", "1"), song("a", "2")];
        let result = unique(songs);
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].song_name, "a");
        assert_eq!(result[0].artwork_url, "1");
        assert_eq!(result[1].song_name, "b");
    }
}
