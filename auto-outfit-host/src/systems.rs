//! Event dispatch: routes [`HostEvent`]s to the session and hooks.
//!
//! The host implements [`HostWorld`] over its own entity storage and calls
//! [`dispatch`] from its main simulation thread for every event the mod
//! subscribed to.

use tracing::{debug, trace};

use auto_outfit_core::{AssignmentOutcome, OutfitDatabase, Pawn, PawnId};

use crate::components::{EnslavementSession, LoadSummary, WorldComponent};
use crate::events::HostEvent;
use crate::hooks;

/// Host-side access the dispatcher needs.
pub trait HostWorld {
    /// The host's pawn type.
    type Pawn: Pawn;

    /// Borrow a live pawn mutably together with the outfit registry.
    fn pawn_with_outfits(&mut self, id: PawnId) -> Option<(&mut Self::Pawn, &OutfitDatabase)>;

    /// Whether `id` still refers to an existing pawn.
    fn is_live(&self, id: PawnId) -> bool;
}

/// What handling an event produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResponse {
    /// Nothing for the host to act on.
    None,
    /// A hook ran the assignment.
    Assignment(AssignmentOutcome),
    /// Bytes to store under the component's save key.
    SaveData(Vec<u8>),
    /// The processed set was restored.
    Loaded(LoadSummary),
}

/// Handle one host event.
///
/// # Errors
/// Returns an error only if save data cannot be encoded or decoded.
pub fn dispatch<W>(
    session: &mut EnslavementSession,
    world: &mut W,
    event: HostEvent,
) -> auto_outfit_core::error::Result<EventResponse>
where
    W: HostWorld + ?Sized,
{
    trace!(event = event.name(), "Dispatching host event");

    let response = match event {
        HostEvent::WorldCreated => {
            session.on_world_created_or_loaded();
            EventResponse::None
        }
        HostEvent::PawnSpawned { pawn } => match world.pawn_with_outfits(pawn) {
            Some((pawn, database)) => hooks::on_pawn_spawned(session, pawn, database)
                .map_or(EventResponse::None, EventResponse::Assignment),
            None => {
                debug!(%pawn, "Spawned pawn not found");
                EventResponse::None
            }
        },
        HostEvent::InteractionCompleted {
            kind,
            initiator,
            recipient,
        } => match world.pawn_with_outfits(recipient) {
            Some((pawn, database)) => {
                trace!(%initiator, %recipient, ?kind, "Interaction resolved");
                hooks::on_interaction(session, kind, pawn, database)
                    .map_or(EventResponse::None, EventResponse::Assignment)
            }
            None => {
                debug!(%recipient, "Interaction recipient not found");
                EventResponse::None
            }
        },
        HostEvent::SaveBegin => EventResponse::SaveData(session.on_save_begin()?),
        HostEvent::LoadComplete { data } => {
            let resolver = |id: PawnId| world.is_live(id);
            EventResponse::Loaded(session.on_load_complete(data.as_deref(), &resolver)?)
        }
    };

    Ok(response)
}
