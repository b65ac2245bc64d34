//! Event bus for broadcasting relay events.
//!
//! Built on a tokio broadcast channel so any number of observers can follow
//! submission outcomes without participating in the relay's control flow.
//! Publishing never blocks and never fails the submission: if nobody is
//! listening, events are simply dropped.

use relay_types::RelayEvent;
use tokio::sync::broadcast;

/// Broadcast channel for relay events.
#[derive(Clone)]
pub struct EventBus {
	sender: broadcast::Sender<RelayEvent>,
}

impl EventBus {
	/// Creates a new event bus with the given channel capacity.
	pub fn new(capacity: usize) -> Self {
		let (sender, _) = broadcast::channel(capacity);
		Self { sender }
	}

	/// Subscribes to all future relay events.
	pub fn subscribe(&self) -> broadcast::Receiver<RelayEvent> {
		self.sender.subscribe()
	}

	/// Publishes an event to all current subscribers.
	pub fn publish(&self, event: RelayEvent) {
		// A send error only means there are no subscribers right now.
		let _ = self.sender.send(event);
	}
}
