//! Change notification for the currently displayed summary.
//!
//! A [`SummaryFeed`] holds the latest summary and a set of subscribers. Each
//! [`refresh`](SummaryFeed::refresh) replaces the held summary wholesale and
//! notifies every subscriber once. Subscribers run synchronously, on the caller's
//! task, against a snapshot of the subscriber list taken before dispatch.
//!
//! Only the most recent selection is ever published: a refresh that completes
//! after a newer refresh (or [`publish`](SummaryFeed::publish)) has started
//! returns its result to the caller but leaves the feed untouched.

use log::{debug, warn};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::{PlayerId, PlayerSummary};
use crate::db::repository::SummaryRepository;

use super::summary::{fetch_player_summary, SummaryError};

/// Handle returned by [`SummaryFeed::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What subscribers are told after a refresh.
#[derive(Debug, Clone)]
pub enum SummaryEvent {
    /// A new summary replaced the previous one.
    Loaded {
        player_id: PlayerId,
        summary: Arc<PlayerSummary>,
    },
    /// The fetch failed; nothing is held any more.
    Unavailable { player_id: PlayerId, reason: String },
}

type Subscriber = Arc<dyn Fn(&SummaryEvent) + Send + Sync>;

/// Holds the current summary and notifies subscribers when it changes.
#[derive(Clone)]
pub struct SummaryFeed {
    current: Arc<RwLock<Option<(PlayerId, Arc<PlayerSummary>)>>>,
    subscribers: Arc<RwLock<HashMap<SubscriptionId, Subscriber>>>,
    /// Bumped by every refresh and publish; a refresh only publishes if it
    /// still holds the latest value when its fetch completes.
    generation: Arc<AtomicU64>,
}

impl SummaryFeed {
    pub fn new() -> Self {
        Self {
            current: Arc::new(RwLock::new(None)),
            subscribers: Arc::new(RwLock::new(HashMap::new())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Register a callback invoked after every refresh.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&SummaryEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscribers.write().insert(id, Arc::new(callback));
        debug!("Subscriber {} registered", id);
        id
    }

    /// Returns `false` if the subscription was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.subscribers.write().remove(&id).is_some();
        if removed {
            debug!("Subscriber {} removed", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// The summary delivered by the last successful refresh.
    pub fn current(&self) -> Option<Arc<PlayerSummary>> {
        self.current
            .read()
            .as_ref()
            .map(|(_, summary)| Arc::clone(summary))
    }

    pub fn current_player(&self) -> Option<PlayerId> {
        self.current.read().as_ref().map(|(id, _)| *id)
    }

    /// Fetch `player_id` and publish the outcome.
    ///
    /// On failure the held summary is dropped, subscribers receive
    /// [`SummaryEvent::Unavailable`] and the error is returned.
    ///
    /// If another refresh or publish started while this fetch was in flight,
    /// the outcome is returned as is and neither the held summary nor the
    /// subscribers see it.
    pub async fn refresh<R>(
        &self,
        repo: &R,
        player_id: PlayerId,
    ) -> Result<Arc<PlayerSummary>, SummaryError>
    where
        R: SummaryRepository + ?Sized,
    {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let outcome = fetch_player_summary(repo, player_id).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            debug!(
                "Discarding summary for player {}: superseded by a newer selection",
                player_id
            );
            return outcome.map(Arc::new);
        }

        match outcome {
            Ok(summary) => Ok(self.publish(player_id, summary)),
            Err(e) => {
                warn!("Summary for player {} unavailable: {}", player_id, e);
                *self.current.write() = None;
                self.notify(&SummaryEvent::Unavailable {
                    player_id,
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Replace the held summary and notify subscribers.
    pub fn publish(&self, player_id: PlayerId, summary: PlayerSummary) -> Arc<PlayerSummary> {
        self.generation.fetch_add(1, Ordering::SeqCst);
        let summary = Arc::new(summary);
        *self.current.write() = Some((player_id, Arc::clone(&summary)));
        self.notify(&SummaryEvent::Loaded {
            player_id,
            summary: Arc::clone(&summary),
        });
        summary
    }

    fn notify(&self, event: &SummaryEvent) {
        // Callbacks may subscribe or unsubscribe while being notified.
        let subscribers: Vec<Subscriber> = self.subscribers.read().values().cloned().collect();
        for subscriber in subscribers {
            subscriber(event);
        }
    }
}

impl Default for SummaryFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "summary_feed_tests.rs"]
mod summary_feed_tests;
