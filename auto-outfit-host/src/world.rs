//! In-memory [`HostWorld`] backed by [`PawnRecord`]s.
//!
//! Suitable for hosts that mirror their pawns into plain structs, and for
//! driving the dispatcher in tests.

use std::collections::HashMap;

use auto_outfit_core::{OutfitDatabase, PawnId, PawnRecord};

use crate::systems::HostWorld;

/// A map of live pawns plus the outfit registry.
#[derive(Debug, Clone, Default)]
pub struct SimpleWorld {
    pawns: HashMap<PawnId, PawnRecord>,
    outfits: OutfitDatabase,
}

impl SimpleWorld {
    /// Create a world with the given outfit registry and no pawns.
    #[must_use]
    pub fn new(outfits: OutfitDatabase) -> Self {
        Self {
            pawns: HashMap::new(),
            outfits,
        }
    }

    /// Add a pawn and return its id.
    pub fn spawn(&mut self, pawn: PawnRecord) -> PawnId {
        let id = pawn.id;
        self.pawns.insert(id, pawn);
        id
    }

    /// Remove a pawn (death, departure). Its references stop resolving.
    pub fn despawn(&mut self, id: PawnId) -> Option<PawnRecord> {
        self.pawns.remove(&id)
    }

    /// Look up a live pawn.
    #[must_use]
    pub fn pawn(&self, id: PawnId) -> Option<&PawnRecord> {
        self.pawns.get(&id)
    }

    /// Look up a live pawn mutably.
    pub fn pawn_mut(&mut self, id: PawnId) -> Option<&mut PawnRecord> {
        self.pawns.get_mut(&id)
    }

    /// The outfit registry.
    #[must_use]
    pub fn outfits(&self) -> &OutfitDatabase {
        &self.outfits
    }

    /// The outfit registry, for adding or removing policies.
    pub fn outfits_mut(&mut self) -> &mut OutfitDatabase {
        &mut self.outfits
    }
}

impl HostWorld for SimpleWorld {
    type Pawn = PawnRecord;

    fn pawn_with_outfits(&mut self, id: PawnId) -> Option<(&mut PawnRecord, &OutfitDatabase)> {
        let Self { pawns, outfits } = self;
        pawns.get_mut(&id).map(|pawn| (pawn, &*outfits))
    }

    fn is_live(&self, id: PawnId) -> bool {
        self.pawns.contains_key(&id)
    }
}
