//! Save-data glue for the processed set.
//!
//! The host owns the save file; this module only defines the record that
//! goes into it and how that record is encoded. The record holds a single
//! field, `enslavedPawns`, an ordered list of nullable pawn references:
//!
//! ```json
//! { "enslavedPawns": ["6f1c…", null, "a02e…"] }
//! ```
//!
//! Saves written before this system existed have no such field and decode
//! to an empty list.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AutoOutfitError, Result};
use crate::processed::ProcessedSet;
use crate::types::PawnId;

/// Key under which the processed set is stored in the save.
pub const SAVE_KEY: &str = "enslavedPawns";

/// Encoding used for the record inside the host's save stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveFormat {
    /// Self-describing JSON (`serde_json`).
    #[default]
    Json,
    /// Compact binary (`bincode`).
    Bincode,
    /// MessagePack (`rmp-serde`).
    MessagePack,
}

/// Resolves a saved pawn reference against the live world.
///
/// Implemented for any `Fn(PawnId) -> bool`.
pub trait PawnResolver {
    /// Whether `pawn` still refers to an existing pawn.
    fn resolve(&self, pawn: PawnId) -> bool;
}

impl<F> PawnResolver for F
where
    F: Fn(PawnId) -> bool,
{
    fn resolve(&self, pawn: PawnId) -> bool {
        self(pawn)
    }
}

/// The per-save record holding the processed set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnslavedPawnsRecord {
    /// Ordered, nullable references. Null marks a reference the host could
    /// not write or read back.
    #[serde(rename = "enslavedPawns", default)]
    pub enslaved_pawns: Vec<Option<PawnId>>,
}

impl EnslavedPawnsRecord {
    /// Build a record from a processed-set snapshot.
    #[must_use]
    pub fn from_snapshot(snapshot: &[PawnId]) -> Self {
        Self {
            enslaved_pawns: snapshot.iter().copied().map(Some).collect(),
        }
    }

    /// Build a record directly from a processed set.
    #[must_use]
    pub fn from_set(set: &ProcessedSet) -> Self {
        Self::from_snapshot(&set.snapshot())
    }

    /// Number of stored references, nulls included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.enslaved_pawns.len()
    }

    /// Whether the record holds no references.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.enslaved_pawns.is_empty()
    }

    /// Rebuild `set` from this record, dropping null and unresolvable
    /// references. Returns the number of entries dropped.
    pub fn restore_into<R>(&self, set: &mut ProcessedSet, resolver: &R) -> usize
    where
        R: PawnResolver + ?Sized,
    {
        set.repopulate(self.enslaved_pawns.iter().copied(), |id| {
            resolver.resolve(id)
        })
    }

    /// Encode the record.
    ///
    /// # Errors
    ///
    /// Returns [`AutoOutfitError::Serialization`] if encoding fails.
    pub fn encode(&self, format: SaveFormat) -> Result<Vec<u8>> {
        let start = Instant::now();
        let bytes = match format {
            SaveFormat::Json => {
                serde_json::to_vec(self).map_err(|e| AutoOutfitError::Serialization(e.to_string()))?
            }
            SaveFormat::Bincode => {
                bincode::serialize(self).map_err(|e| AutoOutfitError::Serialization(e.to_string()))?
            }
            SaveFormat::MessagePack => rmp_serde::to_vec_named(self)
                .map_err(|e| AutoOutfitError::Serialization(e.to_string()))?,
        };

        debug!(
            ?format,
            refs = self.len(),
            bytes = bytes.len(),
            elapsed_us = start.elapsed().as_micros(),
            "Encoded enslaved pawns record"
        );
        Ok(bytes)
    }

    /// Decode a record previously produced by [`Self::encode`].
    ///
    /// An empty buffer decodes to an empty record, matching a save that
    /// predates this system.
    ///
    /// # Errors
    ///
    /// Returns [`AutoOutfitError::Serialization`] if decoding fails.
    pub fn decode(bytes: &[u8], format: SaveFormat) -> Result<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }

        let record: Self = match format {
            SaveFormat::Json => serde_json::from_slice(bytes)
                .map_err(|e| AutoOutfitError::Serialization(e.to_string()))?,
            SaveFormat::Bincode => bincode::deserialize(bytes)
                .map_err(|e| AutoOutfitError::Serialization(e.to_string()))?,
            SaveFormat::MessagePack => rmp_serde::from_slice(bytes)
                .map_err(|e| AutoOutfitError::Serialization(e.to_string()))?,
        };

        debug!(?format, refs = record.len(), "Decoded enslaved pawns record");
        Ok(record)
    }
}
