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

//! The [`GuestView`] container: submission surface, service loop, and the
//! event/detach paths that keep the view's context honest.

use crate::context::ViewContext;
use crate::error::LoadError;
use crate::queue::{LoadOutcome, LoadQueue, LoadReply, LoadTicket};
use oriel_core::event::{EventSink, ViewEvent, ViewEventBus};
use oriel_core::{GuestBackend, GuestHandle, GuestParams, OwnerId, ViewInstanceId};
use std::sync::{Arc, Mutex, MutexGuard};

/// A container that embeds owner-scoped guest content through a backend.
///
/// All loads go through [`submit`](Self::submit) and are serviced strictly in
/// submission order, one at a time. The view is cheap to clone; clones share
/// the same queue, context, and guest.
///
/// Submitting requires a running tokio runtime: the service loop is a spawned
/// task that lives only while there is work queued.
pub struct GuestView<B: GuestBackend> {
    shared: Arc<Shared<B>>,
}

struct Shared<B> {
    instance: ViewInstanceId,
    backend: B,
    state: Mutex<ViewState>,
    events: ViewEventBus,
}

#[derive(Default)]
struct ViewState {
    queue: LoadQueue,
    context: ViewContext,
    guest: Option<GuestHandle>,
}

impl<B: GuestBackend> Clone for GuestView<B> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<B: GuestBackend> GuestView<B> {
    /// Creates a detached view over `backend`, with an empty context.
    pub fn new(instance: ViewInstanceId, backend: B) -> Self {
        Self {
            shared: Arc::new(Shared {
                instance,
                backend,
                state: Mutex::new(ViewState::default()),
                events: ViewEventBus::new(),
            }),
        }
    }

    /// Requests a load of `target`.
    ///
    /// The request is appended to the view's queue and serviced after
    /// everything submitted before it, never concurrently with another load.
    /// The returned ticket resolves exactly once, with the outcome or with
    /// one of the [`LoadError`] reasons; dropping the ticket does not cancel
    /// the request.
    pub fn submit(&self, target: impl Into<String>) -> LoadTicket {
        let target = target.into();
        log::debug!("{}: queueing load of '{target}'", self.shared.instance);

        let (ticket, start_loop) = {
            let mut state = Self::lock(&self.shared);
            let ticket = state.queue.enqueue(target);
            (ticket, state.queue.start_driving())
        };

        if start_loop {
            let shared = Arc::clone(&self.shared);
            tokio::spawn(async move {
                Self::drive(shared).await;
            });
        }

        ticket
    }

    /// Applies every event the host has reported since the last call.
    ///
    /// Commits from the attached guest update the context's target (content
    /// can navigate on its own; the queue is not involved). Events for a
    /// guest this view no longer owns are ignored.
    pub fn process_events(&self) {
        for event in self.shared.events.drain() {
            let mut state = Self::lock(&self.shared);
            let current = state.guest.as_ref().map(GuestHandle::id);
            match event {
                ViewEvent::LoadCommit { guest, url } => {
                    if current == Some(guest) {
                        log::trace!("{}: guest committed '{url}'", self.shared.instance);
                        state.context.commit_target(url);
                    } else {
                        log::debug!(
                            "{}: ignoring commit from stale guest {guest}",
                            self.shared.instance
                        );
                    }
                }
                ViewEvent::GuestDestroyed { guest } => {
                    if current == Some(guest) {
                        log::info!(
                            "{}: guest {guest} destroyed host-side, resetting",
                            self.shared.instance
                        );
                        state.guest = None;
                        state.context.reset();
                    }
                }
            }
        }
    }

    /// Detaches the view: destroys the attached guest and resets the context.
    ///
    /// Queued loads are not cancelled; any serviced afterwards see an empty
    /// context and recreate a guest.
    pub async fn detach(&self) {
        let previous = {
            let mut state = Self::lock(&self.shared);
            state.guest.take()
        };

        if let Some(guest) = previous {
            log::debug!(
                "{}: detaching, destroying guest {}",
                self.shared.instance,
                guest.id()
            );
            self.shared.backend.destroy_guest(guest).await;
        }

        Self::lock(&self.shared).context.reset();
    }

    /// This view's instance identifier.
    #[must_use]
    pub fn instance(&self) -> ViewInstanceId {
        self.shared.instance
    }

    /// Mints a sink the host can report [`ViewEvent`]s through.
    #[must_use]
    pub fn event_sink(&self) -> EventSink {
        self.shared.events.sink()
    }

    /// A snapshot of the view's context (owner + committed target).
    #[must_use]
    pub fn context(&self) -> ViewContext {
        Self::lock(&self.shared).context.clone()
    }

    /// The owner the current guest is scoped to, if any.
    #[must_use]
    pub fn current_owner(&self) -> Option<OwnerId> {
        Self::lock(&self.shared).context.owner().cloned()
    }

    /// The target that last committed, if any.
    #[must_use]
    pub fn current_target(&self) -> Option<String> {
        Self::lock(&self.shared)
            .context
            .target()
            .map(str::to_string)
    }

    /// `true` while a live guest is attached.
    #[must_use]
    pub fn has_guest(&self) -> bool {
        Self::lock(&self.shared).guest.is_some()
    }

    /// Number of requests waiting behind the one in flight.
    #[must_use]
    pub fn queue_depth(&self) -> usize {
        Self::lock(&self.shared).queue.depth()
    }

    /// `true` when nothing is queued and nothing is in flight.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        Self::lock(&self.shared).queue.is_idle()
    }

    fn lock(shared: &Shared<B>) -> MutexGuard<'_, ViewState> {
        shared.state.lock().expect("view state lock poisoned")
    }

    /// The service loop: runs while the queue has work, then exits.
    ///
    /// Only one loop exists per view (guarded by the queue's driving flag),
    /// so the context is never mutated by two loads at once.
    async fn drive(shared: Arc<Shared<B>>) {
        loop {
            let request = {
                let mut state = Self::lock(&shared);
                match state.queue.begin_next() {
                    Some(request) => request,
                    None => {
                        state.queue.stop_driving();
                        return;
                    }
                }
            };

            let target = request.target.clone();
            log::debug!("{}: servicing load of '{target}'", shared.instance);

            let reply = Self::service(&shared, &target).await;
            if let Err(e) = &reply {
                log::warn!("{}: load of '{target}' rejected: {e}", shared.instance);
            }

            // Resolve before freeing the single-flight slot so no observer
            // ever sees the next dispatch begin ahead of this resolution.
            request.resolve(reply);
            Self::lock(&shared).queue.finish();
        }
    }

    /// Services one load to resolution. The state lock is never held across
    /// an await; only this (single) invocation mutates the context.
    async fn service(shared: &Shared<B>, target: &str) -> LoadReply {
        let Some(owner) = shared.backend.validate(target).await else {
            return Err(LoadError::InvalidTarget {
                target: target.to_string(),
            });
        };

        let same_owner = Self::lock(shared).context.is_current_owner(&owner);

        if same_owner {
            // The owner can match while no guest is attached: a previous
            // creation failed and left the context degraded. The load then
            // fails the same way a dead session would.
            let Some(guest) = Self::lock(shared).guest.clone() else {
                return Err(LoadError::LoadFailed {
                    target: target.to_string(),
                });
            };

            if shared.backend.load_into(&guest, target).await {
                Self::lock(shared).context.commit_target(target.to_string());
                Ok(LoadOutcome::Loaded)
            } else {
                Err(LoadError::LoadFailed {
                    target: target.to_string(),
                })
            }
        } else {
            // Ownership switch: tear down the old guest, then rebuild. The
            // context takes the new owner before creation completes; a failed
            // creation leaves it there, degraded, on purpose.
            let previous = Self::lock(shared).guest.take();
            if let Some(guest) = previous {
                log::debug!(
                    "{}: owner switch to '{owner}', destroying guest {}",
                    shared.instance,
                    guest.id()
                );
                shared.backend.destroy_guest(guest).await;
            }

            Self::lock(shared).context.switch_owner(owner.clone());

            let params = GuestParams {
                owner: owner.clone(),
                target: target.to_string(),
                instance: shared.instance,
            };

            match shared.backend.create_guest(params).await {
                Ok(handle) => {
                    let mut state = Self::lock(shared);
                    state.guest = Some(handle);
                    state.context.commit_target(target.to_string());
                    Ok(LoadOutcome::GuestCreated { owner })
                }
                Err(e) => Err(LoadError::CreationFailed {
                    target: target.to_string(),
                    details: e.to_string(),
                }),
            }
        }
    }
}
