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

use super::{GuestError, GuestId, GuestParams, OwnerId};
use async_trait::async_trait;

/// An opaque, cloneable handle to a live guest session.
///
/// Handles are minted by [`GuestBackend::create_guest`] and passed back into
/// the backend for loads and teardown. A handle does not keep the session
/// alive; once the session is destroyed, loads through the handle report
/// failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestHandle {
    id: GuestId,
    owner: OwnerId,
}

impl GuestHandle {
    /// Creates a handle for a freshly created session.
    ///
    /// Called by backend implementations; views only ever receive handles.
    pub fn new(id: GuestId, owner: OwnerId) -> Self {
        Self { id, owner }
    }

    /// The session identity this handle refers to.
    #[must_use]
    pub fn id(&self) -> GuestId {
        self.id
    }

    /// The owner the session is scoped to.
    #[must_use]
    pub fn owner(&self) -> &OwnerId {
        &self.owner
    }
}

/// The contract a host must provide for views to embed guest content.
///
/// This trait abstracts the four calls a view container needs: resolving a
/// target to its owner, creating a guest session, loading into an existing
/// session, and tearing a session down. All of them may involve real I/O or
/// IPC in an embedder, so the primary methods are asynchronous.
///
/// A concrete in-process implementation lives in `oriel-infra`; embedders
/// supply their own against whatever embedding machinery they run on.
#[async_trait]
pub trait GuestBackend: Send + Sync + 'static {
    /// Resolves a target to the owner it belongs to.
    ///
    /// Returns `None` when the target is not loadable at all (malformed, or
    /// naming an owner the host does not know). A `Some` result carries the
    /// owner the view should scope the session to; it makes no promise that a
    /// later load will succeed.
    async fn validate(&self, target: &str) -> Option<OwnerId>;

    /// Creates a fresh guest session.
    ///
    /// The session starts out loading `params.target`. Creation can fail;
    /// callers must treat the view as degraded afterwards (see the view
    /// crate's context documentation) and recover with a fresh load.
    async fn create_guest(&self, params: GuestParams) -> Result<GuestHandle, GuestError>;

    /// Loads a target into an existing session.
    ///
    /// Returns the host's reported success flag. `false` covers every failure
    /// mode the host can observe — unknown session, owner mismatch, or a
    /// target the session refuses — without distinguishing them.
    async fn load_into(&self, guest: &GuestHandle, target: &str) -> bool;

    /// Destroys a guest session.
    ///
    /// Destroying an already-gone session is a no-op; views call this
    /// unconditionally when switching owners or detaching.
    async fn destroy_guest(&self, guest: GuestHandle);
}
