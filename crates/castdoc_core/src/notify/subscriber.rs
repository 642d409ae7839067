//! Subscriber contract and built-in console subscriber.

use crate::notify::channel::Channel;
use log::debug;
use uuid::Uuid;

/// Stable identifier used for subscriber identity comparison.
pub type SubscriberId = Uuid;

/// Observer seam for channel broadcasts.
///
/// Implementations read channel state only through the channel's public
/// queries; they never mutate it.
pub trait Subscribe {
    /// Returns the stable identity used by subscribe/unsubscribe matching.
    fn id(&self) -> SubscriberId;

    /// Returns a human-readable subscriber name.
    fn name(&self) -> &str;

    /// Broadcast callback, invoked once per upload while registered.
    fn on_upload(&self, channel: &Channel);
}

/// Subscriber that announces each broadcast on stdout.
///
/// Demo-oriented: the line format is illustrative, not a contract.
/// Implement [`Subscribe`] directly for anything beyond console output.
pub struct ConsoleSubscriber {
    id: SubscriberId,
    name: String,
}

impl ConsoleSubscriber {
    /// Creates a console subscriber with a generated stable identity.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

impl Subscribe for ConsoleSubscriber {
    fn id(&self) -> SubscriberId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn on_upload(&self, channel: &Channel) {
        debug!(
            "event=subscriber_update module=notify subscriber={} channel={}",
            self.id,
            channel.name()
        );
        match channel.latest_video() {
            Some(title) => println!(
                "Subscriber: {} received update from channel {}. Check out the latest video: {title}",
                self.name,
                channel.name()
            ),
            None => println!(
                "Subscriber: {} received update from channel {}. No video uploaded yet.",
                self.name,
                channel.name()
            ),
        }
    }
}
