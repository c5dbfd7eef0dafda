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

//! Defines the error types hosts report for guest session operations.

use super::{GuestId, OwnerId};
use std::fmt;

/// An error reported by a host while managing a guest session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuestError {
    /// The owner exists but does not permit being embedded.
    NotEmbeddable {
        /// The owner that refused embedding.
        owner: OwnerId,
    },
    /// The host could not bring up a session for the owner.
    CreationFailed {
        /// The owner the session was requested for.
        owner: OwnerId,
        /// Host-specific failure detail.
        details: String,
    },
    /// The referenced session does not exist (destroyed, or never created).
    SessionNotFound {
        /// The id the caller presented.
        id: GuestId,
    },
}

impl fmt::Display for GuestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuestError::NotEmbeddable { owner } => {
                write!(f, "Owner '{owner}' does not permit embedding")
            }
            GuestError::CreationFailed { owner, details } => {
                write!(f, "Guest creation failed for owner '{owner}': {details}")
            }
            GuestError::SessionNotFound { id } => {
                write!(f, "No guest session found for id {id}")
            }
        }
    }
}

impl std::error::Error for GuestError {}
