//! In-process typed publish/subscribe channel.
//!
//! One bus instance per message type plays the role of a named channel:
//! publishing delivers a clone of the message to every live subscriber in the
//! session. Subscriptions are scoped resources; dropping the
//! [`Subscription`] handle unsubscribes, and subscribers whose handle is gone
//! are pruned on the next publish.

use std::sync::mpsc::{Receiver, Sender, TryIter, channel};
use std::sync::{Arc, Mutex, Weak};

struct BusInner<T> {
    next_id: u64,
    subscribers: Vec<(u64, Sender<T>)>,
}

/// Typed broadcast channel shared by publishers and subscribers.
pub struct MessageBus<T> {
    inner: Arc<Mutex<BusInner<T>>>,
}

impl<T> Clone for MessageBus<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Clone> Default for MessageBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> MessageBus<T> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(BusInner {
                next_id: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Delivers `message` to every live subscriber. Fire-and-forget: there is
    /// no acknowledgement and no delivery outside the current session.
    pub fn publish(&self, message: T) {
        let mut inner = match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        inner
            .subscribers
            .retain(|(_, sender)| sender.send(message.clone()).is_ok());
    }

    /// Registers a new subscriber and returns its scoped handle.
    pub fn subscribe(&self) -> Subscription<T> {
        let (sender, receiver) = channel();
        let mut inner = match self.inner.lock() {
            Ok(inner) => inner,
            Err(poisoned) => poisoned.into_inner(),
        };
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, sender));
        Subscription {
            id,
            receiver,
            bus: Arc::downgrade(&self.inner),
        }
    }

    /// Number of currently-registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        match self.inner.lock() {
            Ok(inner) => inner.subscribers.len(),
            Err(poisoned) => poisoned.into_inner().subscribers.len(),
        }
    }
}

/// Scoped subscriber handle. Messages published while the handle is alive are
/// buffered until drained with [`Subscription::try_iter`]; dropping the handle
/// releases the registration.
pub struct Subscription<T> {
    id: u64,
    receiver: Receiver<T>,
    bus: Weak<Mutex<BusInner<T>>>,
}

impl<T> Subscription<T> {
    /// Drains the messages received since the last call, without blocking.
    pub fn try_iter(&self) -> TryIter<'_, T> {
        self.receiver.try_iter()
    }
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(inner) = self.bus.upgrade() {
            let mut inner = match inner.lock() {
                Ok(inner) => inner,
                Err(poisoned) => poisoned.into_inner(),
            };
            inner.subscribers.retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::messages::ContactAdded;

    #[test]
    fn delivers_to_all_live_subscribers() {
        let bus = MessageBus::new();
        let first = bus.subscribe();
        let second = bus.subscribe();

        bus.publish(ContactAdded {
            contact_created: true,
        });

        assert_eq!(first.try_iter().count(), 1);
        assert_eq!(second.try_iter().count(), 1);
    }

    #[test]
    fn drop_unsubscribes() {
        let bus: MessageBus<ContactAdded> = MessageBus::new();
        let sub = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);

        drop(sub);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn publish_before_subscribe_is_not_delivered() {
        let bus = MessageBus::new();
        bus.publish(ContactAdded {
            contact_created: true,
        });

        let sub = bus.subscribe();
        assert_eq!(sub.try_iter().count(), 0);
    }

    #[test]
    fn messages_buffer_until_drained() {
        let bus = MessageBus::new();
        let sub = bus.subscribe();

        bus.publish(ContactAdded {
            contact_created: true,
        });
        bus.publish(ContactAdded {
            contact_created: false,
        });

        let seen: Vec<ContactAdded> = sub.try_iter().collect();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].contact_created);
        assert!(!seen[1].contact_created);
    }
}
