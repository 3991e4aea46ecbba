//! # Auto-Outfit Core Library
//!
//! Game-agnostic logic for automatically giving enslaved pawns the
//! `"Slave"` outfit policy exactly once.
//!
//! - [`Pawn`] — the seam through which a host exposes its characters
//! - [`OutfitDatabase`] — the host's ordered registry of outfit policies
//! - [`ProcessedSet`] — pawns already handled this session
//! - [`apply_slave_outfit_if_needed`] — the idempotent assignment
//! - [`EnslavedPawnsRecord`] — the `enslavedPawns` save field
//!
//! Everything here is synchronous and meant to run on the host's main
//! simulation thread.

#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assignment;
pub mod config;
pub mod error;
pub mod persistence;
pub mod processed;
pub mod registry;
pub mod types;

pub use assignment::{AssignmentOutcome, apply_slave_outfit_if_needed};
pub use config::AutoOutfitConfig;
pub use error::AutoOutfitError;
pub use persistence::{EnslavedPawnsRecord, PawnResolver, SaveFormat};
pub use processed::ProcessedSet;
pub use registry::{OutfitDatabase, OutfitId, OutfitPolicy};
pub use types::*;

/// Label of the outfit policy assigned by default.
pub const DEFAULT_POLICY_LABEL: &str = "Slave";
