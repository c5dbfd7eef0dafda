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

use thiserror::Error;

/// Why a load request was rejected.
///
/// Every submitted request resolves with exactly one of these or with a
/// [`LoadOutcome`](crate::LoadOutcome); none of them is fatal to the view —
/// the queue always moves on to the next request. There is no retry; a caller
/// wishing to retry resubmits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The target failed validation. No guest was touched.
    #[error("failed to load: target is not valid")]
    InvalidTarget {
        /// The target that was rejected.
        target: String,
    },

    /// A fresh guest was needed but could not be created.
    ///
    /// The view's context already points at the new owner when this is
    /// returned; the view is degraded until a load naming a different owner
    /// succeeds. See [`ViewContext`](crate::ViewContext).
    #[error("failed to load: guest creation failed")]
    CreationFailed {
        /// The target whose load triggered the creation.
        target: String,
        /// What the host reported.
        details: String,
    },

    /// The host reported the load into the existing guest as failed.
    ///
    /// The context's current target is left unchanged (stale).
    #[error("failed to load")]
    LoadFailed {
        /// The target that failed to load.
        target: String,
    },

    /// The view was dropped before this request was serviced.
    #[error("failed to load: view closed")]
    ViewClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_target_display() {
        let err = LoadError::InvalidTarget {
            target: "nonsense".to_string(),
        };
        assert_eq!(format!("{err}"), "failed to load: target is not valid");
    }

    #[test]
    fn creation_failed_display() {
        let err = LoadError::CreationFailed {
            target: "guest://a/page".to_string(),
            details: "no capacity".to_string(),
        };
        assert_eq!(format!("{err}"), "failed to load: guest creation failed");
    }

    #[test]
    fn load_failed_display() {
        let err = LoadError::LoadFailed {
            target: "guest://a/page".to_string(),
        };
        assert_eq!(format!("{err}"), "failed to load");
    }
}
