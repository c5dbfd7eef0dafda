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

use super::OwnerRegistry;
use async_trait::async_trait;
use oriel_core::event::{EventSink, ViewEvent};
use oriel_core::{GuestBackend, GuestError, GuestHandle, GuestId, GuestParams, OwnerId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// The scheme every local target starts with: `guest://<owner>/<page>`.
pub const TARGET_SCHEME: &str = "guest://";

/// Splits a target into its owner and page, or `None` if malformed.
fn parse_target(target: &str) -> Option<(OwnerId, &str)> {
    let rest = target.strip_prefix(TARGET_SCHEME)?;
    let (owner, page) = rest.split_once('/')?;
    if owner.is_empty() || page.is_empty() {
        return None;
    }
    Some((OwnerId::new(owner), page))
}

/// One live guest session: who it belongs to and what it is showing.
#[derive(Debug)]
struct GuestSession {
    owner: OwnerId,
    current: String,
}

/// An in-process host serving guests for registry-declared owners.
///
/// Sessions are plain in-memory records; "loading" a page means updating the
/// record and reporting a commit through the wired [`EventSink`]. The host is
/// cheap to clone and clones share the registry and session table, so the
/// same instance can back a view and still be inspected by the embedder.
#[derive(Debug)]
pub struct LocalGuestHost {
    inner: Arc<HostInner>,
}

#[derive(Debug)]
struct HostInner {
    registry: OwnerRegistry,
    sessions: Mutex<HashMap<GuestId, GuestSession>>,
    sink: Mutex<Option<EventSink>>,
}

impl Clone for LocalGuestHost {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl LocalGuestHost {
    /// Creates a host over `registry` with no sessions and no event sink.
    #[must_use]
    pub fn new(registry: OwnerRegistry) -> Self {
        Self {
            inner: Arc::new(HostInner {
                registry,
                sessions: Mutex::new(HashMap::new()),
                sink: Mutex::new(None),
            }),
        }
    }

    /// Wires the host to a view's event bus.
    ///
    /// Until a sink is set, guest activity is not reported anywhere; commits
    /// initiated through the queue are still visible to the view via its own
    /// bookkeeping.
    pub fn set_event_sink(&self, sink: EventSink) {
        *self
            .inner
            .sink
            .lock()
            .expect("event sink lock poisoned") = Some(sink);
    }

    /// Number of live guest sessions.
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.sessions().len()
    }

    /// Ids of the live sessions, in no particular order.
    #[must_use]
    pub fn session_ids(&self) -> Vec<GuestId> {
        self.sessions().keys().copied().collect()
    }

    fn sessions(&self) -> std::sync::MutexGuard<'_, HashMap<GuestId, GuestSession>> {
        self.inner
            .sessions
            .lock()
            .expect("session table lock poisoned")
    }

    fn emit(&self, event: ViewEvent) {
        if let Some(sink) = &*self.inner.sink.lock().expect("event sink lock poisoned") {
            sink.send(event);
        }
    }
}

#[async_trait]
impl GuestBackend for LocalGuestHost {
    async fn validate(&self, target: &str) -> Option<OwnerId> {
        let (owner, page) = parse_target(target)?;

        let Some(manifest) = self.inner.registry.get(&owner) else {
            log::debug!("Rejecting '{target}': owner '{owner}' is not installed");
            return None;
        };
        if !manifest.declares_page(page) {
            log::debug!("Rejecting '{target}': page '{page}' is not declared");
            return None;
        }

        Some(owner)
    }

    async fn create_guest(&self, params: GuestParams) -> Result<GuestHandle, GuestError> {
        let Some(manifest) = self.inner.registry.get(&params.owner) else {
            return Err(GuestError::CreationFailed {
                owner: params.owner,
                details: "owner is not installed".to_string(),
            });
        };
        if !manifest.embeddable {
            return Err(GuestError::NotEmbeddable {
                owner: params.owner,
            });
        }

        let id = GuestId::new();
        self.sessions().insert(
            id,
            GuestSession {
                owner: params.owner.clone(),
                current: params.target.clone(),
            },
        );
        log::info!(
            "Created guest {id} for owner '{}' ({})",
            params.owner,
            params.instance
        );

        self.emit(ViewEvent::LoadCommit {
            guest: id,
            url: params.target,
        });
        Ok(GuestHandle::new(id, params.owner))
    }

    async fn load_into(&self, guest: &GuestHandle, target: &str) -> bool {
        let Some((owner, _page)) = parse_target(target) else {
            log::warn!("Load of malformed target '{target}' refused");
            return false;
        };

        {
            let mut sessions = self.sessions();
            let Some(session) = sessions.get_mut(&guest.id()) else {
                log::warn!("Load into unknown guest {} refused", guest.id());
                return false;
            };
            if session.owner != owner {
                log::warn!(
                    "Load of '{target}' refused: guest {} belongs to '{}'",
                    guest.id(),
                    session.owner
                );
                return false;
            }
            session.current = target.to_string();
        }

        self.emit(ViewEvent::LoadCommit {
            guest: guest.id(),
            url: target.to_string(),
        });
        true
    }

    async fn destroy_guest(&self, guest: GuestHandle) {
        let removed = self.sessions().remove(&guest.id());
        match removed {
            Some(session) => {
                log::info!(
                    "Destroyed guest {} (owner '{}')",
                    guest.id(),
                    session.owner
                );
                self.emit(ViewEvent::GuestDestroyed { guest: guest.id() });
            }
            None => log::debug!("Destroy of unknown guest {} ignored", guest.id()),
        }
    }
}
