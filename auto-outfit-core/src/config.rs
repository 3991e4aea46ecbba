//! Configuration for the auto-outfit system.
//!
//! Maps directly to `auto_outfit.toml`. Every section is optional; a
//! missing file section falls back to defaults that reproduce the
//! long-standing behavior (exact `"Slave"` label, no retry on miss).

use serde::{Deserialize, Serialize};

use crate::persistence::SaveFormat;

/// Top-level configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoOutfitConfig {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Outfit lookup and marking rules.
    #[serde(default)]
    pub assignment: AssignmentConfig,
    /// Save-data settings.
    #[serde(default)]
    pub persistence: PersistenceConfig,
    /// Which host triggers are active.
    #[serde(default)]
    pub hooks: HooksConfig,
}

impl AutoOutfitConfig {
    /// Load configuration from a TOML string.
    ///
    /// # Errors
    /// Returns `AutoOutfitError::Config` if the TOML is invalid.
    pub fn from_toml(toml_str: &str) -> crate::error::Result<Self> {
        toml::from_str(toml_str).map_err(|e| crate::AutoOutfitError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }
}

// ---------------------------------------------------------------------------
// Sub-configs
// ---------------------------------------------------------------------------

/// General system settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Whether auto-assignment is enabled at all.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Log level: trace, debug, info, warn, error.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text.
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_level: default_log_level(),
            json_logs: false,
        }
    }
}

/// Outfit lookup and processed-set marking rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentConfig {
    /// Exact, case-sensitive label of the policy to assign.
    #[serde(default = "default_policy_label")]
    pub policy_label: String,
    /// Leave a pawn unmarked when no policy matches, so a later trigger
    /// can retry once the policy exists.
    #[serde(default)]
    pub retry_on_miss: bool,
}

impl Default for AssignmentConfig {
    fn default() -> Self {
        Self {
            policy_label: default_policy_label(),
            retry_on_miss: false,
        }
    }
}

/// Save-data settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Encoding of the `enslavedPawns` record in the host's save stream.
    #[serde(default)]
    pub format: SaveFormat,
}

/// Per-trigger toggles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HooksConfig {
    /// React to player-faction humanlike pawns finishing spawn.
    #[serde(default = "default_true")]
    pub on_spawn: bool,
    /// React to completed enslave interactions.
    #[serde(default = "default_true")]
    pub on_enslave: bool,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            on_spawn: true,
            on_enslave: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_policy_label() -> String {
    crate::DEFAULT_POLICY_LABEL.to_string()
}
