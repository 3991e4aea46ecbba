//! Core type definitions: pawn identity, legal status, factions, races and
//! the [`Pawn`] seam through which the host exposes its characters.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::registry::OutfitId;

// ---------------------------------------------------------------------------
// Identity Types
// ---------------------------------------------------------------------------

/// Stable reference to a pawn, as the host's save format identifies it.
///
/// Membership in the processed set is keyed on this, so two pawns with
/// identical fields are still distinct if their ids differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PawnId(pub Uuid);

impl PawnId {
    /// Create a new random pawn ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PawnId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PawnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a faction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactionId(pub u32);

// ---------------------------------------------------------------------------
// Pawn attributes
// ---------------------------------------------------------------------------

/// A pawn's guest/legal standing. Free colonists carry no guest status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuestStatus {
    /// Visitor hosted by the colony.
    Guest,
    /// Held captive.
    Prisoner,
    /// Enslaved by the colony.
    Slave,
}

impl fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Guest => "guest",
            Self::Prisoner => "prisoner",
            Self::Slave => "slave",
        };
        f.write_str(s)
    }
}

/// Reference to the faction a pawn belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactionRef {
    /// Faction identifier.
    pub id: FactionId,
    /// Whether this is the player's own faction.
    pub is_player: bool,
}

impl FactionRef {
    /// The player faction.
    #[must_use]
    pub const fn player(id: FactionId) -> Self {
        Self { id, is_player: true }
    }

    /// Any non-player faction.
    #[must_use]
    pub const fn other(id: FactionId) -> Self {
        Self {
            id,
            is_player: false,
        }
    }
}

/// Species/race descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceProps {
    /// Humanlike races wear apparel and use outfit policies.
    pub humanlike: bool,
}

/// Per-pawn outfit-policy slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OutfitTracker {
    /// The currently assigned policy, if any.
    pub current: Option<OutfitId>,
}

// ---------------------------------------------------------------------------
// Pawn seam
// ---------------------------------------------------------------------------

/// Read/write view of a host-owned pawn.
///
/// Implemented by the host for its own pawn type. This crate reads the
/// status fields and writes only the outfit slot; it never creates or
/// destroys pawns.
pub trait Pawn {
    /// The pawn's stable reference.
    fn id(&self) -> PawnId;

    /// Current guest/legal status (`None` for free colonists).
    fn guest_status(&self) -> Option<GuestStatus>;

    /// Faction membership, if any.
    fn faction(&self) -> Option<&FactionRef>;

    /// Race descriptor, if the pawn has a def.
    fn race(&self) -> Option<&RaceProps>;

    /// Outfit slot. `None` for pawn kinds without outfit support.
    fn outfits(&self) -> Option<&OutfitTracker>;

    /// Mutable outfit slot.
    fn outfits_mut(&mut self) -> Option<&mut OutfitTracker>;

    /// Whether the pawn is a humanlike member of the player faction.
    fn is_player_humanlike(&self) -> bool {
        self.faction().is_some_and(|f| f.is_player) && self.race().is_some_and(|r| r.humanlike)
    }
}

/// Plain-data pawn, for hosts that mirror their entities into a struct and
/// for tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PawnRecord {
    /// Stable reference.
    pub id: PawnId,
    /// Guest/legal status.
    pub guest_status: Option<GuestStatus>,
    /// Faction membership.
    pub faction: Option<FactionRef>,
    /// Race descriptor.
    pub race: Option<RaceProps>,
    /// Outfit slot (`None` = no outfit support).
    pub outfits: Option<OutfitTracker>,
}

impl PawnRecord {
    /// A humanlike player-faction colonist with an empty outfit slot.
    #[must_use]
    pub fn colonist(faction: FactionId) -> Self {
        Self {
            id: PawnId::new(),
            guest_status: None,
            faction: Some(FactionRef::player(faction)),
            race: Some(RaceProps { humanlike: true }),
            outfits: Some(OutfitTracker::default()),
        }
    }

    /// Builder: set the guest status.
    #[must_use]
    pub fn with_status(mut self, status: GuestStatus) -> Self {
        self.guest_status = Some(status);
        self
    }

    /// Builder: drop outfit support (animals, mechanoids, ...).
    #[must_use]
    pub fn without_outfits(mut self) -> Self {
        self.outfits = None;
        self
    }

    /// The currently assigned outfit policy.
    #[must_use]
    pub fn current_outfit(&self) -> Option<OutfitId> {
        self.outfits.and_then(|o| o.current)
    }
}

impl Pawn for PawnRecord {
    fn id(&self) -> PawnId {
        self.id
    }

    fn guest_status(&self) -> Option<GuestStatus> {
        self.guest_status
    }

    fn faction(&self) -> Option<&FactionRef> {
        self.faction.as_ref()
    }

    fn race(&self) -> Option<&RaceProps> {
        self.race.as_ref()
    }

    fn outfits(&self) -> Option<&OutfitTracker> {
        self.outfits.as_ref()
    }

    fn outfits_mut(&mut self) -> Option<&mut OutfitTracker> {
        self.outfits.as_mut()
    }
}
