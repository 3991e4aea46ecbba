//! Host events the auto-outfit system reacts to.
//!
//! The host raises these from its own lifecycle: world setup, pawn spawn,
//! interaction resolution and the save/load phases.

use serde::{Deserialize, Serialize};

use auto_outfit_core::PawnId;

/// Kind of a resolved pawn-to-pawn interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractionKind {
    /// Warden attempted to enslave a prisoner.
    EnslaveAttempt,
    /// Warden attempted to recruit a prisoner.
    RecruitAttempt,
    /// Small talk and other social interactions.
    Chitchat,
    /// Any other interaction, by def name.
    Other(u32),
}

/// A host lifecycle event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// A world was created or a save started loading. Always precedes every
    /// other event of the session.
    WorldCreated,

    /// A pawn finished its spawn setup.
    PawnSpawned {
        pawn: PawnId,
    },

    /// An interaction between two pawns resolved.
    InteractionCompleted {
        kind: InteractionKind,
        initiator: PawnId,
        recipient: PawnId,
    },

    /// The host is writing a save.
    SaveBegin,

    /// The host finished loading and resolving references. `data` is the
    /// component's save field, `None` if the save predates it.
    LoadComplete {
        data: Option<Vec<u8>>,
    },
}

impl HostEvent {
    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::WorldCreated => "world_created",
            Self::PawnSpawned { .. } => "pawn_spawned",
            Self::InteractionCompleted { .. } => "interaction_completed",
            Self::SaveBegin => "save_begin",
            Self::LoadComplete { .. } => "load_complete",
        }
    }

    /// The pawn whose outfit this event may change, if any.
    #[must_use]
    pub fn subject(&self) -> Option<PawnId> {
        match self {
            Self::PawnSpawned { pawn } => Some(*pawn),
            Self::InteractionCompleted { recipient, .. } => Some(*recipient),
            Self::WorldCreated | Self::SaveBegin | Self::LoadComplete { .. } => None,
        }
    }
}
