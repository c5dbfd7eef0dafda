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

use super::{OwnerId, ViewInstanceId};
use serde::{Deserialize, Serialize};

/// Creation parameters a view hands to its host when a fresh guest is needed.
///
/// This is the complete description of the session being requested: which
/// owner the guest belongs to, the first target it should load, and the view
/// instance asking for it. Hosts that run out of process can serialize it
/// as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestParams {
    /// The owner the new guest session is scoped to.
    pub owner: OwnerId,

    /// The target the guest should load once created.
    pub target: String,

    /// The view instance requesting the guest.
    pub instance: ViewInstanceId,
}
