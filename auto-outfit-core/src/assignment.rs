//! Slave outfit assignment.
//!
//! [`apply_slave_outfit_if_needed`] is the single operation both host
//! triggers funnel into. It is idempotent per pawn: the processed set gates
//! every call after the first.

use std::fmt;

use tracing::{debug, warn};

use crate::config::AssignmentConfig;
use crate::processed::ProcessedSet;
use crate::registry::{OutfitDatabase, OutfitId};
use crate::types::{GuestStatus, Pawn};

/// What a call to [`apply_slave_outfit_if_needed`] did.
///
/// None of these are errors; the skip variants are the silent no-ops the
/// host never needs to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOutcome {
    /// Auto-assignment is switched off.
    Disabled,
    /// The pawn's status is not `Slave`.
    NotSlave,
    /// The pawn kind has no outfit slot.
    NoOutfitSupport,
    /// The pawn was handled earlier in this session.
    AlreadyProcessed,
    /// The policy was assigned and the pawn marked processed.
    Assigned(OutfitId),
    /// No policy carries the configured label. The pawn is marked processed
    /// unless `retry_on_miss` is set.
    NoMatchingPolicy {
        /// Whether the pawn was added to the processed set anyway.
        marked: bool,
    },
}

impl AssignmentOutcome {
    /// Whether the pawn's outfit slot was written.
    #[must_use]
    pub fn assigned(self) -> bool {
        matches!(self, Self::Assigned(_))
    }

    /// Whether this call added the pawn to the processed set.
    #[must_use]
    pub fn marked(self) -> bool {
        matches!(
            self,
            Self::Assigned(_) | Self::NoMatchingPolicy { marked: true }
        )
    }
}

impl fmt::Display for AssignmentOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("disabled"),
            Self::NotSlave => f.write_str("not a slave"),
            Self::NoOutfitSupport => f.write_str("no outfit support"),
            Self::AlreadyProcessed => f.write_str("already processed"),
            Self::Assigned(id) => write!(f, "assigned {id}"),
            Self::NoMatchingPolicy { marked } => {
                write!(f, "no matching policy (marked: {marked})")
            }
        }
    }
}

/// Assign the configured slave outfit policy to `pawn` if it qualifies.
///
/// Preconditions, checked in order and short-circuiting:
/// 1. status is [`GuestStatus::Slave`]
/// 2. the pawn has an outfit slot
/// 3. the pawn is not yet in `processed`
///
/// On a label match the last matching policy in registry order is
/// assigned. The pawn is marked processed whether or not a policy matched,
/// unless `config.retry_on_miss` is set and nothing matched.
pub fn apply_slave_outfit_if_needed<P>(
    pawn: &mut P,
    database: &OutfitDatabase,
    processed: &mut ProcessedSet,
    config: &AssignmentConfig,
) -> AssignmentOutcome
where
    P: Pawn + ?Sized,
{
    let id = pawn.id();

    if pawn.guest_status() != Some(GuestStatus::Slave) {
        return AssignmentOutcome::NotSlave;
    }
    if pawn.outfits().is_none() {
        debug!(pawn = %id, "Slave has no outfit slot, skipping");
        return AssignmentOutcome::NoOutfitSupport;
    }
    if processed.contains(id) {
        return AssignmentOutcome::AlreadyProcessed;
    }

    let matched = database.find_by_label(&config.policy_label).map(|o| o.id);

    let outcome = match (matched, pawn.outfits_mut()) {
        (Some(outfit), Some(tracker)) => {
            tracker.current = Some(outfit);
            AssignmentOutcome::Assigned(outfit)
        }
        _ => {
            warn!(
                pawn = %id,
                label = %config.policy_label,
                policies = database.len(),
                "No outfit policy with this label"
            );
            AssignmentOutcome::NoMatchingPolicy {
                marked: !config.retry_on_miss,
            }
        }
    };

    if outcome.marked() {
        processed.insert(id);
    }

    debug!(pawn = %id, %outcome, "Slave outfit check");
    outcome
}
