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

//! A local, registry-backed guest host.
//!
//! Owners are declared up front in an [`OwnerRegistry`] (typically parsed
//! from a JSON manifest list); [`LocalGuestHost`] then answers the four
//! backend calls against that registry, keeping guest sessions as in-memory
//! records.

mod host;
mod registry;

pub use host::*;
pub use registry::*;
