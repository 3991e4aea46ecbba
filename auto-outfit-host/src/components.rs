//! The per-save session component.
//!
//! The host constructs one [`EnslavementSession`] per world and drives it
//! through the [`WorldComponent`] lifecycle. The session owns the processed
//! set, so nothing leaks from one save into the next.

use tracing::{debug, info, warn};

use auto_outfit_core::persistence::SAVE_KEY;
use auto_outfit_core::{
    AssignmentOutcome, AutoOutfitConfig, EnslavedPawnsRecord, OutfitDatabase, Pawn,
    PawnResolver, ProcessedSet, apply_slave_outfit_if_needed,
};

/// Per-save extensible state, as the host's save framework drives it.
pub trait WorldComponent {
    /// Key of the component's field in the save.
    fn save_key(&self) -> &'static str;

    /// A world was created or a save started loading.
    fn on_world_created_or_loaded(&mut self);

    /// Produce the bytes to store under [`Self::save_key`].
    ///
    /// # Errors
    /// Returns an error if the state cannot be encoded.
    fn on_save_begin(&mut self) -> auto_outfit_core::error::Result<Vec<u8>>;

    /// Restore state once the host has resolved cross-references.
    ///
    /// # Errors
    /// Returns an error if `data` cannot be decoded. The component is left
    /// empty in that case.
    fn on_load_complete(
        &mut self,
        data: Option<&[u8]>,
        resolver: &dyn PawnResolver,
    ) -> auto_outfit_core::error::Result<LoadSummary>;
}

/// Result of restoring the processed set from a save.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Entries restored into the processed set.
    pub restored: usize,
    /// Null or unresolvable entries dropped.
    pub dropped: usize,
}

/// Counters for diagnostics, reset with the session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Pawns that received the slave outfit.
    pub assigned: u64,
    /// Slaves for which no policy matched.
    pub misses: u64,
    /// Calls that were skipped by a precondition.
    pub skipped: u64,
    /// Saves written.
    pub saves: u64,
    /// Loads completed.
    pub loads: u64,
}

impl SessionStats {
    fn record(&mut self, outcome: AssignmentOutcome) {
        match outcome {
            AssignmentOutcome::Assigned(_) => self.assigned += 1,
            AssignmentOutcome::NoMatchingPolicy { .. } => self.misses += 1,
            AssignmentOutcome::Disabled
            | AssignmentOutcome::NotSlave
            | AssignmentOutcome::NoOutfitSupport
            | AssignmentOutcome::AlreadyProcessed => self.skipped += 1,
        }
    }
}

/// Session state: configuration plus the pawns already handled.
#[derive(Debug, Clone, Default)]
pub struct EnslavementSession {
    config: AutoOutfitConfig,
    processed: ProcessedSet,
    stats: SessionStats,
}

impl EnslavementSession {
    /// Create a session with the given configuration.
    #[must_use]
    pub fn new(config: AutoOutfitConfig) -> Self {
        Self {
            config,
            processed: ProcessedSet::new(),
            stats: SessionStats::default(),
        }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &AutoOutfitConfig {
        &self.config
    }

    /// Pawns already handled this session.
    #[must_use]
    pub fn processed(&self) -> &ProcessedSet {
        &self.processed
    }

    /// Diagnostic counters.
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Run the slave outfit assignment for `pawn` against this session.
    pub fn apply<P>(&mut self, pawn: &mut P, database: &OutfitDatabase) -> AssignmentOutcome
    where
        P: Pawn + ?Sized,
    {
        let outcome = if self.config.general.enabled {
            apply_slave_outfit_if_needed(
                pawn,
                database,
                &mut self.processed,
                &self.config.assignment,
            )
        } else {
            AssignmentOutcome::Disabled
        };
        self.stats.record(outcome);
        outcome
    }
}

impl WorldComponent for EnslavementSession {
    fn save_key(&self) -> &'static str {
        SAVE_KEY
    }

    fn on_world_created_or_loaded(&mut self) {
        if !self.processed.is_empty() {
            debug!(stale = self.processed.len(), "Dropping processed set from previous world");
        }
        self.processed.clear();
        self.stats = SessionStats::default();
        info!("Enslavement session started");
    }

    fn on_save_begin(&mut self) -> auto_outfit_core::error::Result<Vec<u8>> {
        let record = EnslavedPawnsRecord::from_set(&self.processed);
        let bytes = record.encode(self.config.persistence.format)?;
        self.stats.saves += 1;
        info!(pawns = record.len(), bytes = bytes.len(), "Saved enslaved pawns");
        Ok(bytes)
    }

    fn on_load_complete(
        &mut self,
        data: Option<&[u8]>,
        resolver: &dyn PawnResolver,
    ) -> auto_outfit_core::error::Result<LoadSummary> {
        self.processed.clear();

        let record = match data {
            Some(bytes) => EnslavedPawnsRecord::decode(bytes, self.config.persistence.format)
                .inspect_err(|e| warn!(error = %e, "Unreadable enslaved pawns record"))?,
            None => {
                debug!("Save has no enslaved pawns record");
                EnslavedPawnsRecord::default()
            }
        };

        let dropped = record.restore_into(&mut self.processed, resolver);
        let summary = LoadSummary {
            restored: self.processed.len(),
            dropped,
        };
        self.stats.loads += 1;
        info!(
            restored = summary.restored,
            dropped = summary.dropped,
            "Loaded enslaved pawns"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use auto_outfit_core::{FactionId, GuestStatus, PawnId, PawnRecord, SaveFormat};

    fn slave() -> PawnRecord {
        PawnRecord::colonist(FactionId(0)).with_status(GuestStatus::Slave)
    }

    #[test]
    fn world_created_clears_everything() {
        let db = OutfitDatabase::from_labels(["Slave"]);
        let mut session = EnslavementSession::default();
        session.apply(&mut slave(), &db);
        session.apply(&mut slave(), &db);
        assert_eq!(session.processed().len(), 2);

        session.on_world_created_or_loaded();
        assert!(session.processed().is_empty());
        assert_eq!(session.stats(), SessionStats::default());
    }

    #[test]
    fn disabled_session_never_assigns() {
        let db = OutfitDatabase::from_labels(["Slave"]);
        let mut config = AutoOutfitConfig::default();
        config.general.enabled = false;
        let mut session = EnslavementSession::new(config);
        let mut pawn = slave();

        assert_eq!(session.apply(&mut pawn, &db), AssignmentOutcome::Disabled);
        assert_eq!(pawn.current_outfit(), None);
        assert!(session.processed().is_empty());
    }

    #[test]
    fn stats_track_outcomes() {
        let db = OutfitDatabase::from_labels(["Slave"]);
        let mut session = EnslavementSession::default();
        let mut pawn = slave();
        session.apply(&mut pawn, &db);
        session.apply(&mut pawn, &db);
        session.apply(&mut slave(), &OutfitDatabase::new());

        let stats = session.stats();
        assert_eq!(stats.assigned, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(stats.misses, 1);
    }

    #[test]
    fn save_then_load_restores_set() {
        let db = OutfitDatabase::from_labels(["Slave"]);
        let mut config = AutoOutfitConfig::default();
        config.persistence.format = SaveFormat::MessagePack;
        let mut session = EnslavementSession::new(config.clone());
        let mut pawns: Vec<_> = (0..3).map(|_| slave()).collect();
        for pawn in &mut pawns {
            session.apply(pawn, &db);
        }
        let bytes = session.on_save_begin().unwrap();

        let mut loaded = EnslavementSession::new(config);
        loaded.on_world_created_or_loaded();
        let summary = loaded
            .on_load_complete(Some(&bytes), &|_: PawnId| true)
            .unwrap();

        assert_eq!(summary, LoadSummary { restored: 3, dropped: 0 });
        assert_eq!(loaded.processed(), session.processed());
        assert_eq!(loaded.stats().loads, 1);
    }

    #[test]
    fn missing_record_loads_empty() {
        let mut session = EnslavementSession::default();
        let summary = session.on_load_complete(None, &|_: PawnId| true).unwrap();
        assert_eq!(summary, LoadSummary::default());
        assert!(session.processed().is_empty());
    }

    #[test]
    fn corrupt_record_errors_and_leaves_set_empty() {
        let db = OutfitDatabase::from_labels(["Slave"]);
        let mut session = EnslavementSession::default();
        session.apply(&mut slave(), &db);

        let result = session.on_load_complete(Some(b"\x00garbage"), &|_: PawnId| true);
        assert!(result.is_err());
        assert!(session.processed().is_empty());
    }

    #[test]
    fn save_key_matches_field_name() {
        assert_eq!(EnslavementSession::default().save_key(), "enslavedPawns");
    }
}
