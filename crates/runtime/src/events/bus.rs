//! Topic-based event bus implementation.

use std::collections::HashMap;

use fight_core::{EventCategory, MatchEvent, MatchSnapshot};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Announcements, round and match results, pause state
    Match,
    /// Attacks, hits, combos, jumps and stage hazards
    Combat,
    /// Per-tick presentation snapshots
    Frame,
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    Match(MatchEvent),
    Combat(MatchEvent),
    Frame(Box<MatchSnapshot>),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Match(_) => Topic::Match,
            Event::Combat(_) => Topic::Combat,
            Event::Frame(_) => Topic::Frame,
        }
    }

    /// The wrapped match event, if this is not a frame.
    pub fn match_event(&self) -> Option<&MatchEvent> {
        match self {
            Event::Match(event) | Event::Combat(event) => Some(event),
            Event::Frame(_) => None,
        }
    }
}

impl From<MatchEvent> for Event {
    fn from(event: MatchEvent) -> Self {
        match event.category() {
            EventCategory::Match => Event::Match(event),
            EventCategory::Combat => Event::Combat(event),
        }
    }
}

impl From<MatchSnapshot> for Event {
    fn from(snapshot: MatchSnapshot) -> Self {
        Event::Frame(Box::new(snapshot))
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. Every topic channel is created up front and
/// never removed, so lookups cannot miss.
#[derive(Clone)]
pub struct EventBus {
    match_tx: broadcast::Sender<Event>,
    combat_tx: broadcast::Sender<Event>,
    frame_tx: broadcast::Sender<Event>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            match_tx: broadcast::channel(capacity).0,
            combat_tx: broadcast::channel(capacity).0,
            frame_tx: broadcast::channel(capacity).0,
        }
    }

    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Match => &self.match_tx,
            Topic::Combat => &self.combat_tx,
            Topic::Frame => &self.frame_tx,
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: impl Into<Event>) {
        let event = event.into();
        let topic = event.topic();

        if self.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<Event>> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fight_core::Side;

    #[tokio::test]
    async fn events_reach_only_their_topic() {
        let bus = EventBus::with_capacity(8);
        let mut receivers = bus.subscribe_multiple(&[Topic::Match, Topic::Combat]);

        bus.publish(MatchEvent::Jumped { side: Side::Player1 });
        bus.publish(MatchEvent::Paused);

        let combat = receivers.get_mut(&Topic::Combat).unwrap();
        assert!(matches!(
            combat.recv().await.unwrap(),
            Event::Combat(MatchEvent::Jumped { .. })
        ));
        assert!(combat.try_recv().is_err());

        let matches = receivers.get_mut(&Topic::Match).unwrap();
        assert!(matches!(
            matches.recv().await.unwrap(),
            Event::Match(MatchEvent::Paused)
        ));
    }

    #[test]
    fn publishing_without_subscribers_is_fine() {
        let bus = EventBus::new();
        bus.publish(MatchEvent::Resumed);
    }

    #[test]
    fn events_serialize_with_their_topic() {
        let event = Event::from(MatchEvent::RoundAnnounced { round: 2 });
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"Match":{"RoundAnnounced":{"round":2}}}"#);
    }
}
