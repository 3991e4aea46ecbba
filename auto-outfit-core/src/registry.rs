//! The host's global outfit-policy registry.
//!
//! Policies are kept in insertion order. Lookup is by exact,
//! case-sensitive label; when several policies share a label the last one
//! in registry order wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an outfit policy within the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OutfitId(pub u32);

impl fmt::Display for OutfitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "outfit#{}", self.0)
    }
}

/// A named, reusable clothing filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitPolicy {
    /// Registry identifier.
    pub id: OutfitId,
    /// Display label, e.g. `"Slave"`.
    pub label: String,
}

/// Ordered collection of every outfit policy in the current game.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitDatabase {
    outfits: Vec<OutfitPolicy>,
    next_id: u32,
}

impl OutfitDatabase {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from labels, assigning ids in order.
    #[must_use]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut db = Self::new();
        for label in labels {
            db.add(label);
        }
        db
    }

    /// Append a policy and return its id.
    pub fn add(&mut self, label: impl Into<String>) -> OutfitId {
        let id = OutfitId(self.next_id);
        self.next_id += 1;
        self.outfits.push(OutfitPolicy {
            id,
            label: label.into(),
        });
        id
    }

    /// All policies in registry order.
    #[must_use]
    pub fn all(&self) -> &[OutfitPolicy] {
        &self.outfits
    }

    /// Look up a policy by id.
    #[must_use]
    pub fn get(&self, id: OutfitId) -> Option<&OutfitPolicy> {
        self.outfits.iter().find(|o| o.id == id)
    }

    /// Find a policy whose label equals `label` exactly.
    ///
    /// Scans the whole registry; the last match in registry order wins.
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<&OutfitPolicy> {
        self.outfits.iter().filter(|o| o.label == label).last()
    }

    /// Number of policies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.outfits.len()
    }

    /// Whether the registry holds no policies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outfits.is_empty()
    }
}
