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

//! Concrete in-process implementations of the `oriel-core` contracts.
//!
//! The [`local`] module provides [`LocalGuestHost`], a host that serves
//! guest sessions for owners declared in an [`OwnerRegistry`]. It is the
//! reference collaborator for `oriel-view` and the one used by this
//! workspace's tests; embedders with real isolation machinery implement
//! `GuestBackend` themselves.

pub mod local;

pub use local::{LocalGuestHost, OwnerManifest, OwnerRegistry, RegistryError};
