// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::ViewEvent;
use log;

/// The sending half of a view's event channel.
///
/// Sinks are cheap to clone and are handed to hosts so they can report guest
/// activity. A sink whose view has gone away simply drops events; the host is
/// not expected to care.
#[derive(Debug, Clone)]
pub struct EventSink {
    sender: flume::Sender<ViewEvent>,
}

impl EventSink {
    /// Sends an event, logging if the owning view has disconnected.
    pub fn send(&self, event: ViewEvent) {
        log::trace!("Reporting view event: {event:?}");

        if let Err(e) = self.sender.send(event) {
            log::debug!("Dropping view event, receiver disconnected: {e}");
        }
    }
}

/// The receiving side of a view's event channel.
///
/// Each view owns exactly one bus and drains it cooperatively; hosts hold
/// [`EventSink`] clones minted from it. The channel is unbounded, so a host
/// never blocks on a slow view.
#[derive(Debug)]
pub struct ViewEventBus {
    sender: flume::Sender<ViewEvent>,
    receiver: flume::Receiver<ViewEvent>,
}

impl ViewEventBus {
    /// Creates a new bus with an empty, unbounded channel.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self { sender, receiver }
    }

    /// Mints a sink a host can report events through.
    #[must_use]
    pub fn sink(&self) -> EventSink {
        EventSink {
            sender: self.sender.clone(),
        }
    }

    /// Drains every event currently queued, in arrival order.
    ///
    /// Never blocks; an empty bus yields an empty iterator.
    pub fn drain(&self) -> impl Iterator<Item = ViewEvent> + '_ {
        self.receiver.try_iter()
    }

    /// Returns `true` if no events are waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl Default for ViewEventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guest::GuestId;

    fn commit(guest: GuestId, url: &str) -> ViewEvent {
        ViewEvent::LoadCommit {
            guest,
            url: url.to_string(),
        }
    }

    #[test]
    fn drain_preserves_arrival_order() {
        let bus = ViewEventBus::new();
        let sink = bus.sink();
        let guest = GuestId::new();

        sink.send(commit(guest, "guest://a/one"));
        sink.send(commit(guest, "guest://a/two"));
        sink.send(ViewEvent::GuestDestroyed { guest });

        let drained: Vec<_> = bus.drain().collect();
        assert_eq!(drained.len(), 3);
        assert_eq!(drained[0], commit(guest, "guest://a/one"));
        assert_eq!(drained[1], commit(guest, "guest://a/two"));
        assert_eq!(drained[2], ViewEvent::GuestDestroyed { guest });
        assert!(bus.is_empty());
    }

    #[test]
    fn drain_on_empty_bus_yields_nothing() {
        let bus = ViewEventBus::new();
        assert_eq!(bus.drain().count(), 0);
    }

    #[test]
    fn send_after_bus_drop_does_not_panic() {
        let bus = ViewEventBus::new();
        let sink = bus.sink();
        let guest = GuestId::new();
        drop(bus);

        // The event is logged and dropped; nothing to assert beyond survival.
        sink.send(commit(guest, "guest://a/one"));
    }

    #[test]
    fn sinks_are_independent_clones() {
        let bus = ViewEventBus::new();
        let sink1 = bus.sink();
        let sink2 = sink1.clone();
        let guest = GuestId::new();

        sink1.send(commit(guest, "guest://a/one"));
        sink2.send(commit(guest, "guest://a/two"));

        assert_eq!(bus.drain().count(), 2);
    }
}
