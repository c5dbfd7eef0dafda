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
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

fn default_embeddable() -> bool {
    true
}

/// The declaration of one installed owner: what it is called, whether it may
/// be embedded, and which pages it exposes to views.
///
/// This is the "identity card" the host consults for every validation and
/// creation decision. JSON is the on-disk form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerManifest {
    /// The stable identifier targets name this owner by.
    pub id: OwnerId,

    /// Human-readable name, for logs and tooling.
    pub name: String,

    /// Whether views may embed this owner's pages at all.
    #[serde(default = "default_embeddable")]
    pub embeddable: bool,

    /// The pages views may load. An empty list declares nothing.
    #[serde(default)]
    pub pages: Vec<String>,
}

impl OwnerManifest {
    /// Returns `true` if `page` is declared by this manifest.
    #[must_use]
    pub fn declares_page(&self, page: &str) -> bool {
        self.pages.iter().any(|declared| declared == page)
    }
}

/// An error raised while building an [`OwnerRegistry`].
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The manifest list was not valid JSON (or not the expected shape).
    #[error("failed to parse owner manifests: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two manifests declared the same owner id.
    #[error("duplicate owner manifest for '{id}'")]
    DuplicateOwner {
        /// The id that appeared more than once.
        id: OwnerId,
    },
}

/// The set of owners this host knows about, indexed for O(1) lookups.
///
/// The registry is immutable once built; installing or removing owners means
/// building a new registry and a new host around it.
#[derive(Debug, Clone, Default)]
pub struct OwnerRegistry {
    owners: HashMap<OwnerId, OwnerManifest>,
}

impl OwnerRegistry {
    /// Creates an empty registry (no owner validates).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a list of manifests.
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateOwner`] if two manifests share an id.
    pub fn from_manifests(
        manifests: impl IntoIterator<Item = OwnerManifest>,
    ) -> Result<Self, RegistryError> {
        let mut owners = HashMap::new();
        for manifest in manifests {
            let id = manifest.id.clone();
            if owners.insert(id.clone(), manifest).is_some() {
                return Err(RegistryError::DuplicateOwner { id });
            }
        }
        log::debug!("Owner registry built with {} owner(s)", owners.len());
        Ok(Self { owners })
    }

    /// Builds a registry from a JSON array of manifests.
    ///
    /// # Errors
    /// Returns a parse error for malformed JSON, or a duplicate error as in
    /// [`from_manifests`](Self::from_manifests).
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let manifests: Vec<OwnerManifest> = serde_json::from_str(json)?;
        Self::from_manifests(manifests)
    }

    /// Looks up the manifest for `owner`.
    #[must_use]
    pub fn get(&self, owner: &OwnerId) -> Option<&OwnerManifest> {
        self.owners.get(owner)
    }

    /// Returns `true` if `owner` is declared.
    #[must_use]
    pub fn contains(&self, owner: &OwnerId) -> bool {
        self.owners.contains_key(owner)
    }

    /// Number of declared owners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Returns `true` if no owners are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}
