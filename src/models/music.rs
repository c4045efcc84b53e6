//! Songs returned by the music search.

use std::hash::{Hash, Hasher};

use serde::Deserialize;

/// A searchable song.
///
/// Two values are the same song when song, artist and album match; artwork
/// and preview URLs are ignored by `PartialEq` and `Hash`.
#[derive(Debug, Clone)]
pub struct Music {
    pub album_name: String,
    pub song_name: String,
    pub artist_name: String,
    pub artwork_url: String,
    pub preview_music_url: String,
}

impl Music {
    /// Stable composite key.
    pub fn id(&self) -> String {
        format!("{}-{}-{}", self.song_name, self.artist_name, self.album_name)
    }
}

impl PartialEq for Music {
    fn eq(&self, other: &Self) -> bool {
        self.song_name == other.song_name
            && self.artist_name == other.artist_name
            && self.album_name == other.album_name
    }
}

impl Eq for Music {}

impl Hash for Music {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.song_name.hash(state);
        self.artist_name.hash(state);
        self.album_name.hash(state);
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicDto {
    pub album_name: String,
    pub song_name: String,
    pub artist_name: String,
    pub artwork_url: String,
    pub preview_music_url: String,
}

impl From<MusicDto> for Music {
    fn from(dto: MusicDto) -> Self {
        Music {
            album_name: dto.album_name,
            song_name: dto.song_name,
            artist_name: dto.artist_name,
            artwork_url: dto.artwork_url,
            preview_music_url: dto.preview_music_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    fn song(artwork: &str) -> Music {
        Music {
            album_name: "Album".to_string(),
            song_name: "Song".to_string(),
            artist_name: "Artist".to_string(),
            artwork_url: artwork.to_string(),
            preview_music_url: format!("{}/preview", artwork),
        }
    }

    fn hash_of(music: &Music) -> u64 {
        let mut hasher = DefaultHasher::new();
        music.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_identity_ignores_artwork_and_preview() {
        let a = song("https://a");
        let b = song("https://b");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let set: HashSet<Music> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_different_album_is_different_song() {
        let a = song("x");
        let mut b = song("x");
        b.album_name = "Live".to_string();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_format() {
        assert_eq!(song("x").id(), "Song-Artist-Album");
    }
}
