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

//! Events hosts report back to view containers, and the channel carrying them.

mod bus;

pub use bus::*;

use crate::guest::GuestId;

/// A notification from a host about something that happened inside a guest.
///
/// Events flow one way, host to view. They are how a view learns about
/// navigations it did not initiate: content inside the guest can move on its
/// own, and the view's notion of "what is currently loaded" has to follow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// A navigation committed inside the guest session.
    LoadCommit {
        /// The session the commit happened in.
        guest: GuestId,
        /// The target that is now showing.
        url: String,
    },
    /// The guest session is gone (crashed or torn down host-side).
    GuestDestroyed {
        /// The session that no longer exists.
        guest: GuestId,
    },
}
