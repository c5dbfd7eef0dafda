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

//! The ordered single-flight load queue.
//!
//! Load requests are kept strictly in arrival order and at most one is ever
//! being serviced. The bookkeeping lives here; the actual servicing (backend
//! calls, context updates) is driven by the view.

use crate::error::LoadError;
use oriel_core::OwnerId;
use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::sync::oneshot;

/// What a successful load did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The target's owner differed from the view's, so a fresh guest was
    /// created (tearing down the previous one if present) and the target
    /// committed into it.
    GuestCreated {
        /// The owner the new guest is scoped to.
        owner: OwnerId,
    },
    /// The target committed into the already-attached guest.
    Loaded,
}

impl fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadOutcome::GuestCreated { owner } => {
                write!(f, "successful load: new guest created for '{owner}'")
            }
            LoadOutcome::Loaded => write!(f, "successful load"),
        }
    }
}

/// How a serviced request resolves: exactly one of these per request.
pub(crate) type LoadReply = Result<LoadOutcome, LoadError>;

/// One queued load: the target and the channel its resolution goes out on.
///
/// A request is owned exclusively by the queue until dispatched, and consumed
/// when resolved. The sender is one-shot, so exactly-once resolution is
/// structural, not a convention.
pub(crate) struct LoadRequest {
    pub(crate) target: String,
    reply: oneshot::Sender<LoadReply>,
}

impl LoadRequest {
    /// Consumes the request, delivering its resolution.
    ///
    /// The caller may have dropped its ticket; that is not an error, the
    /// request was still serviced (there is no cancellation).
    pub(crate) fn resolve(self, reply: LoadReply) {
        if self.reply.send(reply).is_err() {
            log::debug!(
                "Load resolution for '{}' discarded, ticket was dropped",
                self.target
            );
        }
    }
}

impl fmt::Debug for LoadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadRequest")
            .field("target", &self.target)
            .finish()
    }
}

/// The promise-like handle returned by [`GuestView::submit`](crate::GuestView::submit).
///
/// Awaiting the ticket yields the request's resolution. Each ticket resolves
/// exactly once; dropping it does not cancel the load.
#[derive(Debug)]
pub struct LoadTicket {
    rx: oneshot::Receiver<LoadReply>,
}

impl Future for LoadTicket {
    type Output = LoadReply;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx).map(|received| match received {
            Ok(reply) => reply,
            // The queue (and its view) went away before servicing us.
            Err(_) => Err(LoadError::ViewClosed),
        })
    }
}

/// FIFO queue of pending loads plus the single-flight slot.
///
/// Invariant: `in_flight` is `Some` exactly while a load is outstanding, and
/// [`begin_next`](Self::begin_next) refuses to dispatch while it is occupied.
#[derive(Debug, Default)]
pub(crate) struct LoadQueue {
    waiting: VecDeque<LoadRequest>,
    in_flight: Option<String>,
    driving: bool,
}

impl LoadQueue {
    /// Appends a request and returns the ticket that will carry its resolution.
    pub(crate) fn enqueue(&mut self, target: String) -> LoadTicket {
        let (tx, rx) = oneshot::channel();
        self.waiting.push_back(LoadRequest { target, reply: tx });
        LoadTicket { rx }
    }

    /// Dequeues the head request and marks it in flight.
    ///
    /// Returns `None` when the queue is empty or a load is already
    /// outstanding — the caller never has to re-check the invariant.
    pub(crate) fn begin_next(&mut self) -> Option<LoadRequest> {
        if self.in_flight.is_some() {
            return None;
        }
        let request = self.waiting.pop_front()?;
        self.in_flight = Some(request.target.clone());
        Some(request)
    }

    /// Clears the single-flight slot after a request resolved.
    pub(crate) fn finish(&mut self) {
        self.in_flight = None;
    }

    /// Marks the service loop as running. Returns `false` if one already is.
    pub(crate) fn start_driving(&mut self) -> bool {
        if self.driving {
            return false;
        }
        self.driving = true;
        true
    }

    /// Marks the service loop as stopped.
    pub(crate) fn stop_driving(&mut self) {
        self.driving = false;
    }

    /// The target currently being serviced, if any.
    pub(crate) fn in_flight(&self) -> Option<&str> {
        self.in_flight.as_deref()
    }

    /// Number of requests waiting behind the in-flight one.
    pub(crate) fn depth(&self) -> usize {
        self.waiting.len()
    }

    /// `true` when nothing is waiting and nothing is in flight.
    pub(crate) fn is_idle(&self) -> bool {
        self.waiting.is_empty() && self.in_flight.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_is_fifo() {
        let mut queue = LoadQueue::default();
        let _a = queue.enqueue("guest://x/a".to_string());
        let _b = queue.enqueue("guest://x/b".to_string());

        let first = queue.begin_next().unwrap();
        assert_eq!(first.target, "guest://x/a");
        queue.finish();

        let second = queue.begin_next().unwrap();
        assert_eq!(second.target, "guest://x/b");
    }

    #[test]
    fn no_second_dispatch_while_in_flight() {
        let mut queue = LoadQueue::default();
        let _a = queue.enqueue("guest://x/a".to_string());
        let _b = queue.enqueue("guest://x/b".to_string());

        let first = queue.begin_next().unwrap();
        assert_eq!(queue.in_flight(), Some(first.target.as_str()));
        assert!(queue.begin_next().is_none());

        queue.finish();
        assert!(queue.begin_next().is_some());
    }

    #[test]
    fn idle_reflects_both_slots() {
        let mut queue = LoadQueue::default();
        assert!(queue.is_idle());

        let _t = queue.enqueue("guest://x/a".to_string());
        assert!(!queue.is_idle());

        let request = queue.begin_next().unwrap();
        assert!(!queue.is_idle());
        assert_eq!(queue.depth(), 0);

        request.resolve(Ok(LoadOutcome::Loaded));
        queue.finish();
        assert!(queue.is_idle());
    }

    #[test]
    fn driving_flag_is_exclusive() {
        let mut queue = LoadQueue::default();
        assert!(queue.start_driving());
        assert!(!queue.start_driving());
        queue.stop_driving();
        assert!(queue.start_driving());
    }

    #[tokio::test]
    async fn dropped_queue_resolves_ticket_as_closed() {
        let mut queue = LoadQueue::default();
        let ticket = queue.enqueue("guest://x/a".to_string());
        drop(queue);

        assert_eq!(ticket.await, Err(LoadError::ViewClosed));
    }

    #[tokio::test]
    async fn resolution_reaches_the_ticket() {
        let mut queue = LoadQueue::default();
        let ticket = queue.enqueue("guest://x/a".to_string());

        let request = queue.begin_next().unwrap();
        request.resolve(Ok(LoadOutcome::Loaded));

        assert_eq!(ticket.await, Ok(LoadOutcome::Loaded));
    }

    #[test]
    fn outcome_messages_are_human_readable() {
        let created = LoadOutcome::GuestCreated {
            owner: OwnerId::new("calendar"),
        };
        assert_eq!(
            created.to_string(),
            "successful load: new guest created for 'calendar'"
        );
        assert_eq!(LoadOutcome::Loaded.to_string(), "successful load");
    }
}
