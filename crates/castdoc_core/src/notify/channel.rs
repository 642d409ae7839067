//! Observable channel with an identity-tracked subscriber registry.
//!
//! # Responsibility
//! - Maintain the ordered subscriber registry (add/remove/broadcast).
//! - Hold the latest uploaded payload behind a pure query.
//!
//! # Invariants
//! - Registration is idempotent per `SubscriberId`; duplicates are no-ops.
//! - Registry entries are `Weak`; the channel never owns subscribers.
//! - Registry mutation requires `&mut self` while notification holds
//!   `&self`, so mutating the registry mid-broadcast cannot compile.

use crate::notify::subscriber::{Subscribe, SubscriberId};
use log::{debug, info};
use std::sync::{Arc, Weak};

struct Registration {
    id: SubscriberId,
    handle: Weak<dyn Subscribe>,
}

/// Broadcast channel holding subscribers and the latest uploaded video.
pub struct Channel {
    name: String,
    latest_video: Option<String>,
    registrations: Vec<Registration>,
}

impl Channel {
    /// Creates a channel with no subscribers and no uploads.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            latest_video: None,
            registrations: Vec::new(),
        }
    }

    /// Returns the channel name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the latest uploaded video title, if any.
    ///
    /// Pure query; presentation of the payload is the caller's concern.
    pub fn latest_video(&self) -> Option<&str> {
        self.latest_video.as_deref()
    }

    /// Returns the number of live registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.registrations
            .iter()
            .filter(|registration| Weak::strong_count(&registration.handle) > 0)
            .count()
    }

    /// Returns whether a live registration exists for `id`.
    pub fn is_subscribed(&self, id: SubscriberId) -> bool {
        self.registrations
            .iter()
            .any(|registration| {
                registration.id == id && Weak::strong_count(&registration.handle) > 0
            })
    }

    /// Registers a subscriber at the end of the broadcast order.
    ///
    /// A subscriber whose `id` is already registered is not re-added; the
    /// call is a silent no-op and broadcast order is unchanged.
    pub fn subscribe(&mut self, subscriber: &Arc<dyn Subscribe>) {
        let id = subscriber.id();
        if self.registrations.iter().any(|existing| existing.id == id) {
            debug!(
                "event=subscribe module=notify channel={} subscriber={id} status=duplicate",
                self.name
            );
            return;
        }

        self.registrations.push(Registration {
            id,
            handle: Arc::downgrade(subscriber),
        });
        info!(
            "event=subscribe module=notify channel={} subscriber={id} subscribers={}",
            self.name,
            self.registrations.len()
        );
    }

    /// Removes the registration matching `id`.
    ///
    /// An unknown `id` is a silent no-op; no error is signaled.
    pub fn unsubscribe(&mut self, id: SubscriberId) {
        let before = self.registrations.len();
        if let Some(position) = self
            .registrations
            .iter()
            .position(|registration| registration.id == id)
        {
            self.registrations.remove(position);
        }

        if self.registrations.len() < before {
            info!(
                "event=unsubscribe module=notify channel={} subscriber={id} subscribers={}",
                self.name,
                self.registrations.len()
            );
        } else {
            debug!(
                "event=unsubscribe module=notify channel={} subscriber={id} status=absent",
                self.name
            );
        }
    }

    /// Sets the latest payload and broadcasts to current subscribers.
    ///
    /// This is the sole trigger path for notification. Registrations whose
    /// owner dropped the subscriber are pruned before the broadcast.
    pub fn upload_video(&mut self, title: impl Into<String>) {
        self.latest_video = Some(title.into());
        self.registrations
            .retain(|registration| Weak::strong_count(&registration.handle) > 0);

        info!(
            "event=video_upload module=notify channel={} subscribers={} title_chars={}",
            self.name,
            self.registrations.len(),
            self.latest_video
                .as_deref()
                .map_or(0, |title| title.chars().count())
        );

        self.notify_subscribers();
    }

    /// Invokes the broadcast callback on every live subscriber in
    /// registration order.
    ///
    /// The registry is snapshotted first; entries that stopped upgrading
    /// are skipped.
    pub fn notify_subscribers(&self) {
        let snapshot: Vec<Arc<dyn Subscribe>> = self
            .registrations
            .iter()
            .filter_map(|registration| registration.handle.upgrade())
            .collect();

        for subscriber in snapshot {
            subscriber.on_upload(self);
        }
    }
}
