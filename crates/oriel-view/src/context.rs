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

use oriel_core::OwnerId;

/// The mutable "what is currently showing" state of a view.
///
/// The context tracks two things: the owner the attached guest is scoped to,
/// and the target that last committed. The target is only ever written after
/// a load is confirmed successful (or a commit event arrives from the host),
/// never speculatively.
///
/// The owner follows a different rule: it switches as soon as the view
/// decides to change owners, *before* guest creation completes. If creation
/// then fails, the context is left pointing at the new owner with no guest
/// attached and no target — a degraded state in which same-owner loads keep
/// failing until a load naming a different owner rebuilds the guest. That
/// asymmetry is deliberate and callers must account for it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewContext {
    owner: Option<OwnerId>,
    target: Option<String>,
}

impl ViewContext {
    /// Creates an empty context: no owner, nothing loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The owner the current guest (or failed guest attempt) is scoped to.
    #[must_use]
    pub fn owner(&self) -> Option<&OwnerId> {
        self.owner.as_ref()
    }

    /// The target that last committed, if any.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Returns `true` if `owner` matches the context's current owner.
    ///
    /// An empty context matches nothing, so the first load always takes the
    /// owner-switch path.
    #[must_use]
    pub fn is_current_owner(&self, owner: &OwnerId) -> bool {
        self.owner.as_ref() == Some(owner)
    }

    /// Switches ownership to `owner` and forgets the stale target.
    ///
    /// Called when the view tears down one guest to build another; the old
    /// target belongs to the old owner and must not survive the switch.
    pub(crate) fn switch_owner(&mut self, owner: OwnerId) {
        self.owner = Some(owner);
        self.target = None;
    }

    /// Records `target` as committed.
    pub(crate) fn commit_target(&mut self, target: String) {
        self.target = Some(target);
    }

    /// Resets the context to empty (view detached, guest gone).
    pub(crate) fn reset(&mut self) {
        self.owner = None;
        self.target = None;
    }
}
