//! External commands queued into the kernel.
//!
//! Producers (display, voice layer, persistence host) enqueue these; the
//! tick loop drains and applies them atomically at the next tick boundary,
//! never mid-tick.

use serde::{Deserialize, Serialize};

use crate::components::WeaponTarget;
use crate::enums::*;

/// All commands the kernel consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Command {
    // --- Assets ---
    /// Place a new asset on the scope.
    CreateAsset {
        name: String,
        domain: Domain,
        #[serde(default)]
        identity: Identity,
        lat: f64,
        lon: f64,
        #[serde(default)]
        heading_deg: f64,
        #[serde(default)]
        speed_kt: f64,
        /// Altitude (Air) or depth (SubSurface) in feet.
        #[serde(default)]
        vertical_ft: Option<f64>,
        #[serde(default)]
        track_number: Option<u32>,
    },
    /// Change fields on an existing asset; omitted fields are untouched.
    /// Direct heading/speed/vertical sets take effect immediately, the
    /// `target_*` fields converge at the domain rate.
    UpdateAsset {
        asset_id: u32,
        #[serde(default)]
        name: Option<String>,
        #[serde(default)]
        identity: Option<Identity>,
        #[serde(default)]
        domain: Option<Domain>,
        #[serde(default)]
        heading_deg: Option<f64>,
        #[serde(default)]
        speed_kt: Option<f64>,
        #[serde(default)]
        vertical_ft: Option<f64>,
        #[serde(default)]
        target_heading_deg: Option<f64>,
        #[serde(default)]
        target_speed_kt: Option<f64>,
        #[serde(default)]
        target_vertical_ft: Option<f64>,
        #[serde(default)]
        track_number: Option<u32>,
    },
    /// Remove an asset. The ownship is protected; an unknown id is
    /// discarded and reported.
    DeleteAsset { asset_id: u32 },
    /// Launch a weapon of the given category from an asset.
    Fire {
        firer_id: u32,
        category: WeaponCategory,
        target: WeaponTarget,
    },

    // --- Waypoints ---
    /// Append a waypoint to an asset's route.
    AddWaypoint { asset_id: u32, lat: f64, lon: f64 },
    /// Remove a waypoint by queue index; removing the active head
    /// re-steers (or idles) immediately.
    RemoveWaypoint { asset_id: u32, index: usize },

    // --- Radar ---
    /// Enable or disable contact generation. Disabling never halts decay
    /// of contacts already on the scope.
    SetRadarEnabled { enabled: bool },
    /// Set the decay duration for newly spawned contacts (seconds,
    /// clamped to [10, 60]).
    SetContactDecay { seconds: f64 },

    // --- Display references ---
    /// Move the bullseye reference point.
    SetBullseye { lat: f64, lon: f64, label: String },

    // --- Clock ---
    /// Freeze mission time. Commands still drain while paused.
    Pause,
    /// Resume mission time.
    Resume,
}
