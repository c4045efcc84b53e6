//! List bookkeeping for the feed: in-flight guards, cursors and staleness.
//!
//! Every list carries a generation number. Starting a load hands out the
//! current generation; a refresh or forced reload bumps it, so results of
//! loads started before that point are dropped on arrival without touching
//! the list.

use std::collections::HashSet;

use crate::models::Post;

/// Load state of a single list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListStatus {
    #[default]
    Idle,
    Loading,
    Loaded {
        has_more: bool,
    },
    LoadedEmpty,
    Error,
}

/// Issued by [`PagedList::begin_load`]; required to apply the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
    /// Cursor to send with the request, `None` for the first page.
    pub cursor: Option<i64>,
}

/// A cursor-paginated list of posts.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList {
    items: Vec<Post>,
    cursor: Option<i64>,
    has_more: bool,
    status: ListStatus,
    generation: u64,
}

impl Default for PagedList {
    fn default() -> Self {
        Self::new()
    }
}

impl PagedList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
            has_more: true,
            status: ListStatus::Idle,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[Post] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id of the last element of the most recent non-empty page.
    pub fn cursor(&self) -> Option<i64> {
        self.cursor
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    pub fn contains(&self, post_id: &str) -> bool {
        self.items
            .iter()
            .any(|p| p.post_id.as_deref() == Some(post_id))
    }

    /// Start loading the next page.
    ///
    /// Returns `None`, and changes nothing, while a load is in flight or
    /// after the end of the list was reached.
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.is_loading() || !self.has_more {
            return None;
        }
        self.status = ListStatus::Loading;
        Some(LoadTicket {
            generation: self.generation,
            cursor: self.cursor,
        })
    }

    /// Merge a fetched page. Returns `false` if the ticket is stale.
    ///
    /// The cursor comes from the last element of the raw page. Posts without
    /// an id, posts already listed, repeats within the page and ids in
    /// `excluded` are skipped; order of first appearance is kept.
    pub fn finish_page(
        &mut self,
        ticket: LoadTicket,
        page: Vec<Post>,
        excluded: &HashSet<String>,
    ) -> bool {
        if ticket.generation != self.generation {
            return false;
        }

        if page.is_empty() {
            self.has_more = false;
        } else {
            if let Some(cursor) = page.last().and_then(Post::numeric_id) {
                self.cursor = Some(cursor);
            }

            let mut seen: HashSet<String> =
                self.items.iter().filter_map(|p| p.post_id.clone()).collect();
            for post in page {
                let Some(id) = post.post_id.as_deref() else {
                    continue;
                };
                if excluded.contains(id) || !seen.insert(id.to_string()) {
                    continue;
                }
                self.items.push(post);
            }
        }

        self.status = if self.items.is_empty() && !self.has_more {
            ListStatus::LoadedEmpty
        } else {
            ListStatus::Loaded {
                has_more: self.has_more,
            }
        };
        true
    }

    /// Record a failed load. Items, cursor and `has_more` are kept so the
    /// same page can be retried.
    pub fn fail(&mut self, ticket: LoadTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.status = ListStatus::Error;
        true
    }

    /// Forget everything and invalidate loads in flight.
    pub fn reset(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.items.clear();
        self.cursor = None;
        self.has_more = true;
        self.status = ListStatus::Idle;
    }

    /// Drop `post_id` locally. Returns whether anything was removed.
    pub fn remove(&mut self, post_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.post_id.as_deref() != Some(post_id));
        self.items.len() != before
    }
}

/// A list fetched in one request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostList {
    items: Vec<Post>,
    status: ListStatus,
    generation: u64,
}

impl PostList {
    pub fn items(&self) -> &[Post] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn status(&self) -> ListStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ListStatus::Loading
    }

    pub fn contains(&self, post_id: &str) -> bool {
        self.items
            .iter()
            .any(|p| p.post_id.as_deref() == Some(post_id))
    }

    /// Start a load unless one is already in flight.
    pub fn begin_load(&mut self) -> Option<u64> {
        if self.is_loading() {
            return None;
        }
        self.status = ListStatus::Loading;
        Some(self.generation)
    }

    /// Start a load that supersedes any load in flight.
    pub fn begin_reload(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.status = ListStatus::Loading;
        self.generation
    }

    /// Replace the contents. Returns `false` if superseded.
    pub fn finish(&mut self, generation: u64, items: Vec<Post>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.items = items;
        self.status = if self.items.is_empty() {
            ListStatus::LoadedEmpty
        } else {
            ListStatus::Loaded { has_more: false }
        };
        true
    }

    pub fn fail(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.status = ListStatus::Error;
        true
    }

    pub fn remove(&mut self, post_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|p| p.post_id.as_deref() != Some(post_id));
        self.items.len() != before
    }
}
