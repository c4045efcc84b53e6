//! Post mutation notifications shared across view-models.
//!
//! A detail screen that completes or deletes a post publishes a
//! [`PostUpdateEvent`]; every list holder subscribed to the same
//! [`PostEventBus`] receives it in publish order and drops or reloads its
//! cached copies.

use std::fmt;

use tokio::sync::broadcast;
use tracing::debug;

/// Default channel capacity.
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// What happened to the post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PostUpdateAction {
    Completed,
    Deleted,
}

impl PostUpdateAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostUpdateAction::Completed => "completed",
            PostUpdateAction::Deleted => "deleted",
        }
    }
}

impl fmt::Display for PostUpdateAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A `{postId, action}` notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostUpdateEvent {
    pub post_id: String,
    pub action: PostUpdateAction,
}

impl PostUpdateEvent {
    pub fn completed(post_id: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
            action: PostUpdateAction::Completed,
        }
    }

    pub fn deleted(post_id: impl Into<String>) -> Self {
        Self {
            post_id: post_id.into(),
            action: PostUpdateAction::Deleted,
        }
    }
}

/// Fire-and-forget broadcast channel for [`PostUpdateEvent`]s.
///
/// Cloning shares the channel. Subscribers only see events published after
/// they subscribed; a subscriber that falls more than `capacity` events
/// behind gets `RecvError::Lagged` and must resynchronize.
#[derive(Debug, Clone)]
pub struct PostEventBus {
    sender: broadcast::Sender<PostUpdateEvent>,
}

impl PostEventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event, returning how many subscribers will see it.
    ///
    /// Publishing with no subscribers is not an error.
    pub fn publish(&self, event: PostUpdateEvent) -> usize {
        debug!(post_id = %event.post_id, action = %event.action, "Publishing post update");
        self.sender.send(event).unwrap_or(0)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<PostUpdateEvent> {
        self.sender.subscribe()
    }

    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for PostEventBus {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::RecvError;

    #[tokio::test]
    async fn test_publish_without_subscribers() {
        let bus = PostEventBus::default();
        assert_eq!(bus.publish(PostUpdateEvent::deleted("1")), 0);
    }

    #[tokio::test]
    async fn test_every_subscriber_sees_events_in_order() {
        let bus = PostEventBus::new(8);
        let mut first = bus.subscribe();
        let mut second = bus.clone().subscribe();

        assert_eq!(bus.publish(PostUpdateEvent::completed("1")), 2);
        bus.publish(PostUpdateEvent::deleted("2"));

        for rx in [&mut first, &mut second] {
            assert_eq!(rx.recv().await.unwrap(), PostUpdateEvent::completed("1"));
            assert_eq!(rx.recv().await.unwrap(), PostUpdateEvent::deleted("2"));
        }
    }

    #[tokio::test]
    async fn test_slow_subscriber_lags() {
        let bus = PostEventBus::new(2);
        let mut rx = bus.subscribe();
        for id in 0..5 {
            bus.publish(PostUpdateEvent::deleted(id.to_string()));
        }

        assert!(matches!(rx.recv().await, Err(RecvError::Lagged(3))));
        assert_eq!(rx.recv().await.unwrap(), PostUpdateEvent::deleted("3"));
    }

    #[test]
    fn test_action_display() {
        assert_eq!(PostUpdateAction::Completed.to_string(), "completed");
        assert_eq!(PostUpdateAction::Deleted.as_str(), "deleted");
    }
}
