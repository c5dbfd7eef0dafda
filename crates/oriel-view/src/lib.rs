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

//! The guest-view container.
//!
//! [`GuestView`] embeds owner-scoped content through a [`GuestBackend`] and
//! serializes every load request through an ordered single-flight queue: at
//! most one load is in flight at a time, requests are serviced strictly in
//! submission order, and each one resolves exactly once through its
//! [`LoadTicket`].

#![warn(missing_docs)]

mod context;
mod error;
mod queue;
mod view;

pub use context::ViewContext;
pub use error::LoadError;
pub use queue::{LoadOutcome, LoadTicket};
pub use view::GuestView;

pub use oriel_core::GuestBackend;
