//! Integration hooks for the host's spawn and interaction systems.
//!
//! Both hooks funnel into [`EnslavementSession::apply`]. They return `None`
//! when the trigger itself does not apply (wrong pawn kind, wrong
//! interaction, hook switched off) and the assignment outcome otherwise.

use tracing::debug;

use auto_outfit_core::{AssignmentOutcome, GuestStatus, OutfitDatabase, Pawn};

use crate::components::EnslavementSession;
use crate::events::InteractionKind;

/// Called after a pawn finishes spawning into the world.
///
/// Covers slaves that exist from world generation: only humanlike pawns of
/// the player faction are considered.
pub fn on_pawn_spawned<P>(
    session: &mut EnslavementSession,
    pawn: &mut P,
    database: &OutfitDatabase,
) -> Option<AssignmentOutcome>
where
    P: Pawn + ?Sized,
{
    if !session.config().hooks.on_spawn || !pawn.is_player_humanlike() {
        return None;
    }
    Some(session.apply(pawn, database))
}

/// Called after an interaction between two pawns resolves.
///
/// Only a successful enslave attempt, one that left the recipient a
/// slave, triggers the assignment.
pub fn on_interaction<P>(
    session: &mut EnslavementSession,
    kind: InteractionKind,
    recipient: &mut P,
    database: &OutfitDatabase,
) -> Option<AssignmentOutcome>
where
    P: Pawn + ?Sized,
{
    if kind != InteractionKind::EnslaveAttempt || !session.config().hooks.on_enslave {
        return None;
    }
    if recipient.guest_status() != Some(GuestStatus::Slave) {
        debug!(pawn = %recipient.id(), "Enslave attempt did not succeed");
        return None;
    }
    Some(session.apply(recipient, database))
}

#[cfg(test)]
mod tests {
    use super::*;
    use auto_outfit_core::{AutoOutfitConfig, FactionId, FactionRef, PawnRecord, RaceProps};

    fn db() -> OutfitDatabase {
        OutfitDatabase::from_labels(["Colonist", "Slave", "Prisoner"])
    }

    fn slave() -> PawnRecord {
        PawnRecord::colonist(FactionId(0)).with_status(GuestStatus::Slave)
    }

    #[test]
    fn spawn_assigns_player_humanlike_slave() {
        let db = db();
        let mut session = EnslavementSession::default();
        let mut pawn = slave();
        let outcome = on_pawn_spawned(&mut session, &mut pawn, &db);
        assert_eq!(outcome, Some(AssignmentOutcome::Assigned(db.all()[1].id)));
    }

    #[test]
    fn spawn_ignores_foreign_and_non_humanlike() {
        let db = db();
        let mut session = EnslavementSession::default();

        let mut foreign = slave();
        foreign.faction = Some(FactionRef::other(FactionId(3)));
        assert_eq!(on_pawn_spawned(&mut session, &mut foreign, &db), None);

        let mut animal = slave();
        animal.race = Some(RaceProps { humanlike: false });
        assert_eq!(on_pawn_spawned(&mut session, &mut animal, &db), None);

        assert!(session.processed().is_empty());
    }

    #[test]
    fn spawn_of_free_colonist_is_not_slave() {
        let mut session = EnslavementSession::default();
        let mut pawn = PawnRecord::colonist(FactionId(0));
        assert_eq!(
            on_pawn_spawned(&mut session, &mut pawn, &db()),
            Some(AssignmentOutcome::NotSlave)
        );
    }

    #[test]
    fn enslave_success_assigns() {
        let db = db();
        let mut session = EnslavementSession::default();
        // Freshly enslaved prisoners need not belong to the player faction.
        let mut recipient = slave();
        recipient.faction = Some(FactionRef::other(FactionId(9)));

        let outcome =
            on_interaction(&mut session, InteractionKind::EnslaveAttempt, &mut recipient, &db);
        assert!(outcome.is_some_and(AssignmentOutcome::assigned));
    }

    #[test]
    fn failed_enslave_attempt_is_ignored() {
        let mut session = EnslavementSession::default();
        let mut recipient = PawnRecord::colonist(FactionId(0)).with_status(GuestStatus::Prisoner);
        let outcome =
            on_interaction(&mut session, InteractionKind::EnslaveAttempt, &mut recipient, &db());
        assert_eq!(outcome, None);
        assert!(session.processed().is_empty());
    }

    #[test]
    fn other_interactions_are_ignored() {
        let mut session = EnslavementSession::default();
        let mut recipient = slave();
        for kind in [
            InteractionKind::Chitchat,
            InteractionKind::RecruitAttempt,
            InteractionKind::Other(42),
        ] {
            assert_eq!(on_interaction(&mut session, kind, &mut recipient, &db()), None);
        }
        assert_eq!(recipient.current_outfit(), None);
    }

    #[test]
    fn hook_toggles() {
        let mut config = AutoOutfitConfig::default();
        config.hooks.on_spawn = false;
        config.hooks.on_enslave = false;
        let mut session = EnslavementSession::new(config);
        let mut pawn = slave();

        assert_eq!(on_pawn_spawned(&mut session, &mut pawn, &db()), None);
        assert_eq!(
            on_interaction(&mut session, InteractionKind::EnslaveAttempt, &mut pawn, &db()),
            None
        );
    }
}
