//! Registration with the host's extension points.
//!
//! Instead of patching host methods, the mod asks the host to call it back
//! at two well-defined points and to carry its session component in every
//! save.

use tracing::info;

use auto_outfit_core::AutoOutfitConfig;
use auto_outfit_core::persistence::SAVE_KEY;

use crate::components::EnslavementSession;

/// Host callback points the mod can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtensionPoint {
    /// After a pawn finishes spawn setup.
    PostSpawn,
    /// After a pawn-to-pawn interaction resolves.
    PostInteraction,
}

/// What the host must offer for the mod to register itself.
pub trait ExtensionHost {
    /// Route events at `point` to the mod identified by `mod_id`.
    fn subscribe(&mut self, mod_id: &'static str, point: ExtensionPoint);

    /// Include a per-save component stored under `save_key`.
    fn register_world_component(&mut self, mod_id: &'static str, save_key: &'static str);
}

/// The mod's entry point.
#[derive(Debug, Clone, Default)]
pub struct AutoOutfitMod {
    config: AutoOutfitConfig,
}

impl AutoOutfitMod {
    /// Unique mod identifier.
    pub const MOD_ID: &'static str = "auto_outfit.slave_outfit";

    /// Create the mod with the given configuration.
    #[must_use]
    pub fn new(config: AutoOutfitConfig) -> Self {
        Self { config }
    }

    /// Extension points this configuration needs.
    #[must_use]
    pub fn extension_points(&self) -> Vec<ExtensionPoint> {
        let mut points = Vec::with_capacity(2);
        if self.config.hooks.on_spawn {
            points.push(ExtensionPoint::PostSpawn);
        }
        if self.config.hooks.on_enslave {
            points.push(ExtensionPoint::PostInteraction);
        }
        points
    }

    /// Register callbacks and the session component. Called once at
    /// process startup.
    pub fn register<H>(&self, host: &mut H)
    where
        H: ExtensionHost + ?Sized,
    {
        for point in self.extension_points() {
            host.subscribe(Self::MOD_ID, point);
        }
        host.register_world_component(Self::MOD_ID, SAVE_KEY);
        info!(mod_id = Self::MOD_ID, "Auto-outfit registered");
    }

    /// Construct the session component for a new or loading world.
    #[must_use]
    pub fn new_session(&self) -> EnslavementSession {
        EnslavementSession::new(self.config.clone())
    }
}
