//! Property-based tests for the assignment and processed-set invariants.
//!
//! Uses `proptest` to check idempotence, the status gate, registry lookup
//! and save/load behavior under random registries and pawn populations.

use std::collections::HashSet;

use proptest::prelude::*;

use auto_outfit_core::config::AssignmentConfig;
use auto_outfit_core::{
    AssignmentOutcome, EnslavedPawnsRecord, FactionId, GuestStatus, OutfitDatabase, PawnId,
    PawnRecord, ProcessedSet, SaveFormat, apply_slave_outfit_if_needed,
};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

fn arb_labels() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(
        prop::sample::select(vec!["Slave", "Colonist", "Prisoner", "slave", "Anything"]),
        0..8,
    )
}

fn arb_non_slave_status() -> impl Strategy<Value = Option<GuestStatus>> {
    prop::sample::select(vec![None, Some(GuestStatus::Guest), Some(GuestStatus::Prisoner)])
}

fn arb_format() -> impl Strategy<Value = SaveFormat> {
    prop::sample::select(vec![SaveFormat::Json, SaveFormat::Bincode, SaveFormat::MessagePack])
}

fn slave() -> PawnRecord {
    PawnRecord::colonist(FactionId(0)).with_status(GuestStatus::Slave)
}

// ---------------------------------------------------------------------------
// Property: repeated calls change the outfit at most once
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn assignment_is_idempotent(labels in arb_labels(), calls in 2..6usize) {
        let db = OutfitDatabase::from_labels(labels);
        let mut set = ProcessedSet::new();
        let mut pawn = slave();
        let config = AssignmentConfig::default();

        let first = apply_slave_outfit_if_needed(&mut pawn, &db, &mut set, &config);
        let after_first = pawn.current_outfit();

        for _ in 1..calls {
            let outcome = apply_slave_outfit_if_needed(&mut pawn, &db, &mut set, &config);
            prop_assert_eq!(outcome, AssignmentOutcome::AlreadyProcessed);
            prop_assert_eq!(pawn.current_outfit(), after_first);
        }

        prop_assert!(first.marked());
        prop_assert_eq!(set.len(), 1);
        prop_assert!(set.contains(pawn.id));
    }
}

// ---------------------------------------------------------------------------
// Property: only slaves are ever touched
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn non_slaves_never_change(labels in arb_labels(), status in arb_non_slave_status()) {
        let db = OutfitDatabase::from_labels(labels);
        let mut set = ProcessedSet::new();
        let mut pawn = PawnRecord::colonist(FactionId(0));
        pawn.guest_status = status;

        let outcome =
            apply_slave_outfit_if_needed(&mut pawn, &db, &mut set, &AssignmentConfig::default());

        prop_assert_eq!(outcome, AssignmentOutcome::NotSlave);
        prop_assert_eq!(pawn.current_outfit(), None);
        prop_assert!(set.is_empty());
    }
}

// ---------------------------------------------------------------------------
// Property: assignment picks the last exact label match, or none
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn lookup_matches_last_exact_label(labels in arb_labels()) {
        let db = OutfitDatabase::from_labels(labels.clone());
        let mut set = ProcessedSet::new();
        let mut pawn = slave();

        apply_slave_outfit_if_needed(&mut pawn, &db, &mut set, &AssignmentConfig::default());

        let expected = labels
            .iter()
            .rposition(|l| *l == "Slave")
            .map(|i| db.all()[i].id);
        prop_assert_eq!(pawn.current_outfit(), expected);
        prop_assert!(set.contains(pawn.id));
    }
}

// ---------------------------------------------------------------------------
// Property: save/load round-trip preserves the set
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn save_load_round_trip(count in 0..20usize, format in arb_format()) {
        let set: ProcessedSet = (0..count).map(|_| PawnId::new()).collect();

        let bytes = EnslavedPawnsRecord::from_set(&set).encode(format).unwrap();
        let record = EnslavedPawnsRecord::decode(&bytes, format).unwrap();

        let mut restored = ProcessedSet::new();
        restored.insert(PawnId::new());
        let dropped = record.restore_into(&mut restored, &|_: PawnId| true);

        prop_assert_eq!(dropped, 0);
        prop_assert_eq!(restored, set);
    }
}

// ---------------------------------------------------------------------------
// Property: load keeps exactly the resolvable references
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn load_keeps_only_live_refs(mask in prop::collection::vec(0..3u8, 0..24)) {
        // 0 = live pawn, 1 = deleted pawn, 2 = null reference
        let mut refs = Vec::new();
        let mut live = HashSet::new();
        for kind in &mask {
            match kind {
                0 => {
                    let id = PawnId::new();
                    live.insert(id);
                    refs.push(Some(id));
                }
                1 => refs.push(Some(PawnId::new())),
                _ => refs.push(None),
            }
        }

        let record = EnslavedPawnsRecord { enslaved_pawns: refs };
        let mut set = ProcessedSet::new();
        let dropped = record.restore_into(&mut set, &|id: PawnId| live.contains(&id));

        prop_assert_eq!(set.len(), live.len());
        prop_assert_eq!(dropped, mask.len() - live.len());
        prop_assert!(set.iter().all(|id| live.contains(&id)));
    }
}
