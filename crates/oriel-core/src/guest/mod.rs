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

//! Provides the foundational traits and primitive types for Oriel's guest system.
//!
//! This module defines the "common language" for all guest-related operations.
//! It contains the core contracts that host implementations fulfil and that
//! view containers consume, but it has no knowledge of how guests are actually
//! embedded or where their content comes from.
//!
//! The key components are:
//! - The [`GuestBackend`] trait: the four calls every host must provide.
//! - Stable identifiers used to reference owners, guests, and view instances.
//! - [`GuestParams`], the creation parameters a view hands to its host.
//!
//! Higher-level crates build the actual view container and concrete hosts on
//! top of these primitives.

mod backend;
mod error;
mod id;
mod params;

pub use backend::*;
pub use error::*;
pub use id::*;
pub use params::*;
