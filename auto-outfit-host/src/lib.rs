//! # auto-outfit-host — Host Integration for Auto-Outfit
//!
//! This crate connects the game-agnostic `auto-outfit-core` library to a
//! host game's lifecycle.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │                Host game                 │
//! │  spawn ─┐   interaction ─┐   save/load ─┐ │
//! │  ┌──────▼────────────────▼─────────────▼┐ │
//! │  │          auto-outfit-host            │ │
//! │  │  ┌─────────┐  ┌───────────────────┐  │ │
//! │  │  │  Hooks  │  │ Session component │  │ │
//! │  │  └────┬────┘  └─────────┬─────────┘  │ │
//! │  │       ▼                 ▼            │ │
//! │  │    ┌───────────────────────────┐     │ │
//! │  │    │     auto-outfit-core      │     │ │
//! │  │    └───────────────────────────┘     │ │
//! │  └──────────────────────────────────────┘ │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `registration` — subscribing to host extension points
//! - `components` — the per-save session component and its lifecycle
//! - `events` — host events the mod reacts to
//! - `hooks` — spawn and interaction entry points
//! - `systems` — event dispatch over a [`systems::HostWorld`]
//! - `world` — an in-memory `HostWorld`
//! - `logging` — tracing subscriber bootstrap

pub mod components;
pub mod events;
pub mod hooks;
pub mod logging;
pub mod registration;
pub mod systems;
pub mod world;

pub use components::{EnslavementSession, LoadSummary, SessionStats, WorldComponent};
pub use events::{HostEvent, InteractionKind};
pub use registration::{AutoOutfitMod, ExtensionHost, ExtensionPoint};
pub use systems::{EventResponse, HostWorld, dispatch};
pub use world::SimpleWorld;
