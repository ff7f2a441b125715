//! Topic-keyed publish/subscribe message bus
//!
//! Every panel factory receives a [`Channel`] handle in its configuration.
//! Panels that talk to siblings publish and subscribe through it; purely
//! structural panels carry the handle without touching it.
//!
//! Delivery is synchronous: `publish` pushes onto unbounded senders and
//! returns before any subscriber runs, which matches the single-threaded
//! cooperative model the console UI executes under.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::trace;

use crate::error::{BusError, Result};

/// A message delivered to bus subscribers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusMessage {
    /// Topic the message was published under
    pub topic: String,
    /// Arbitrary JSON payload
    pub data: Value,
}

type SubscriberMap = HashMap<String, Vec<mpsc::UnboundedSender<BusMessage>>>;

/// Cheaply cloneable handle to the console message bus
///
/// Clones share one subscriber registry, so a message published through any
/// clone reaches subscribers registered through any other.
#[derive(Debug, Clone, Default)]
pub struct Channel {
    topics: Arc<RwLock<SubscriberMap>>,
}

impl Channel {
    /// Create a bus with no subscribers
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber for a topic
    ///
    /// Dropping the returned receiver unsubscribes; the dead sender is pruned
    /// on the next publish to that topic.
    pub fn subscribe(&self, topic: impl Into<String>) -> mpsc::UnboundedReceiver<BusMessage> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.topics.write().entry(topic.into()).or_default().push(tx);
        rx
    }

    /// Publish a payload to all live subscribers of a topic
    ///
    /// Returns the number of subscribers the message reached.
    pub fn publish(&self, topic: &str, data: Value) -> usize {
        let mut topics = self.topics.write();
        let Some(subscribers) = topics.get_mut(topic) else {
            return 0;
        };

        let mut delivered = 0;
        subscribers.retain(|tx| {
            let message = BusMessage {
                topic: topic.to_string(),
                data: data.clone(),
            };
            match tx.send(message) {
                Ok(()) => {
                    delivered += 1;
                    true
                }
                Err(_) => false,
            }
        });
        // drop drained topics so the registry doesn't grow keys forever
        if subscribers.is_empty() {
            topics.remove(topic);
        }
        trace!(topic, delivered, "published bus message");
        delivered
    }

    /// Number of topics that currently hold registered subscribers
    pub fn topic_count(&self) -> usize {
        self.topics.read().len()
    }

    /// Serialize a payload and publish it, requiring at least one subscriber
    pub fn send<T: Serialize>(&self, topic: &str, payload: &T) -> Result<usize> {
        let data = serde_json::to_value(payload)?;
        match self.publish(topic, data) {
            0 => Err(BusError::NoSubscribers(topic.to_string()).into()),
            n => Ok(n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_publish_reaches_subscriber() {
        let channel = Channel::new();
        let mut rx = channel.subscribe("app.deployed");

        let delivered = channel.publish("app.deployed", json!({"name": "demo"}));
        assert_eq!(delivered, 1);

        let message = rx.try_recv().unwrap();
        assert_eq!(message.topic, "app.deployed");
        assert_eq!(message.data["name"], "demo");
    }

    #[test]
    fn test_topics_are_isolated() {
        let channel = Channel::new();
        let mut rx = channel.subscribe("a");

        assert_eq!(channel.publish("b", json!(1)), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscribers_are_pruned() {
        let channel = Channel::new();
        let rx = channel.subscribe("a");
        let mut live = channel.subscribe("a");
        drop(rx);

        assert_eq!(channel.publish("a", json!(null)), 1);
        assert!(live.try_recv().is_ok());
    }

    #[test]
    fn test_drained_topics_leave_the_registry() {
        let channel = Channel::new();
        let rx = channel.subscribe("a");
        let other = channel.subscribe("b");
        assert_eq!(channel.topic_count(), 2);

        drop(rx);
        assert_eq!(channel.publish("a", json!(null)), 0);
        assert_eq!(channel.topic_count(), 1);

        drop(other);
        assert_eq!(channel.publish("b", json!(null)), 0);
        assert_eq!(channel.topic_count(), 0);
    }

    #[test]
    fn test_clones_share_registry() {
        let channel = Channel::new();
        let mut rx = channel.subscribe("a");

        let clone = channel.clone();
        assert_eq!(clone.publish("a", json!("hi")), 1);
        assert_eq!(rx.try_recv().unwrap().data, json!("hi"));
    }

    #[test]
    fn test_send_requires_subscriber() {
        let channel = Channel::new();
        let err = channel.send("quiet", &"payload").unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Bus(BusError::NoSubscribers(_))
        ));

        let mut rx = channel.subscribe("quiet");
        assert_eq!(channel.send("quiet", &"payload").unwrap(), 1);
        assert_eq!(rx.try_recv().unwrap().data, json!("payload"));
    }
}
