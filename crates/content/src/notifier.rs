//! In-page change notification.
//!
//! A [`ChangeNotifier`] is a typed broadcast: every subscription alive at
//! publish time receives the change exactly once, and dropped subscriptions
//! receive nothing. Publishing never blocks and never fails.

use showroom_core::{ProductData, ThemeSettings};
use tokio::sync::broadcast;

use crate::error::Lagged;

const CHANNEL_CAPACITY: usize = 64;

/// A committed record change, carrying the new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentChange {
    Theme(ThemeSettings),
    Product(Box<ProductData>),
}

impl ContentChange {
    /// Storage key of the changed record.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Theme(_) => crate::keys::THEME,
            Self::Product(_) => crate::keys::PRODUCT,
        }
    }
}

/// Publish/subscribe channel for record changes within one page.
#[derive(Debug, Clone)]
pub struct ChangeNotifier {
    sender: broadcast::Sender<ContentChange>,
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeNotifier {
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    /// Publish a change to every current subscriber.
    pub fn publish(&self, change: ContentChange) {
        let key = change.key();
        match self.sender.send(change) {
            Ok(receivers) => tracing::debug!(key, receivers, "Change published"),
            Err(_) => tracing::debug!(key, "Change published with no subscribers"),
        }
    }

    /// Register a subscriber. Only changes published after this call are seen.
    #[must_use]
    pub fn subscribe(&self) -> Subscription {
        Subscription {
            rx: self.sender.subscribe(),
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// A live subscription. Dropping it unregisters.
#[derive(Debug)]
pub struct Subscription {
    rx: broadcast::Receiver<ContentChange>,
}

impl Subscription {
    /// Take the next pending change without waiting.
    ///
    /// Yields `Err(Lagged)` once after changes were dropped for this
    /// subscriber; later calls continue with the oldest change still held.
    pub fn try_next(&mut self) -> Option<Result<ContentChange, Lagged>> {
        match self.rx.try_recv() {
            Ok(change) => Some(Ok(change)),
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Change subscriber lagged, changes dropped");
                Some(Err(Lagged { skipped }))
            }
            Err(_) => None,
        }
    }

    /// Wait for the next change. Returns `None` once the notifier is gone.
    pub async fn next(&mut self) -> Option<Result<ContentChange, Lagged>> {
        match self.rx.recv().await {
            Ok(change) => Some(Ok(change)),
            Err(broadcast::error::RecvError::Lagged(skipped)) => {
                tracing::warn!(skipped, "Change subscriber lagged, changes dropped");
                Some(Err(Lagged { skipped }))
            }
            Err(broadcast::error::RecvError::Closed) => None,
        }
    }
}
