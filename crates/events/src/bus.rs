//! In-process alert bus backed by a `tokio::sync::broadcast` channel.
//!
//! [`EventBus`] fans out every [`AlertEvent`] produced by the proximity
//! evaluator to any number of subscribers (persistence, logging, future
//! push channels). It is designed to be shared via `Arc<EventBus>`.

use safepath_core::geofence::AlertEvent;
use tokio::sync::broadcast;

/// Default buffer capacity for the broadcast channel.
const DEFAULT_CAPACITY: usize = 1024;

/// In-process fan-out bus for zone alerts.
///
/// # Usage
///
/// ```rust
/// use safepath_core::geofence::{AlertEvent, AlertKind, PositionSample};
/// use safepath_events::EventBus;
///
/// let bus = EventBus::default();
/// let mut rx = bus.subscribe();
///
/// let sample = PositionSample::new(19.045, 72.85, 0);
/// bus.publish(AlertEvent { zone_id: "a".into(), kind: AlertKind::Enter, at: 0, sample });
/// ```
pub struct EventBus {
    sender: broadcast::Sender<AlertEvent>,
}

impl EventBus {
    /// Create a bus with a specific channel capacity.
    ///
    /// When the buffer is full, the oldest un-consumed alerts are dropped
    /// and slow receivers will observe a `RecvError::Lagged`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an alert to all current subscribers.
    ///
    /// If there are no active subscribers the alert is silently dropped.
    pub fn publish(&self, event: AlertEvent) {
        // A SendError only means there are zero receivers.
        let _ = self.sender.send(event);
    }

    /// Subscribe to all alerts published on this bus.
    pub fn subscribe(&self) -> broadcast::Receiver<AlertEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use safepath_core::geofence::{AlertKind, PositionSample};

    use super::*;

    fn alert(zone_id: &str, kind: AlertKind) -> AlertEvent {
        AlertEvent {
            zone_id: zone_id.to_string(),
            kind,
            at: 42,
            sample: PositionSample::new(19.045, 72.85, 42),
        }
    }

    #[tokio::test]
    async fn publish_and_receive_single_subscriber() {
        let bus = EventBus::default();
        let mut rx = bus.subscribe();

        bus.publish(alert("danger-1", AlertKind::Enter));

        let received = rx.recv().await.expect("should receive the alert");
        assert_eq!(received.zone_id, "danger-1");
        assert_eq!(received.kind, AlertKind::Enter);
        assert_eq!(received.at, 42);
    }

    #[tokio::test]
    async fn multiple_subscribers_receive_same_alert() {
        let bus = EventBus::default();
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.publish(alert("z", AlertKind::Exit));

        assert_eq!(rx1.recv().await.unwrap().kind, AlertKind::Exit);
        assert_eq!(rx2.recv().await.unwrap().kind, AlertKind::Exit);
    }

    #[test]
    fn publish_with_no_subscribers_does_not_panic() {
        let bus = EventBus::default();
        bus.publish(alert("orphan", AlertKind::Enter));
    }

    #[tokio::test]
    async fn dropping_bus_closes_receivers() {
        let bus = EventBus::new(4);
        let mut rx = bus.subscribe();
        drop(bus);
        assert!(matches!(
            rx.recv().await,
            Err(broadcast::error::RecvError::Closed)
        ));
    }
}
