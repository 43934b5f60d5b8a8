//! Kernel snapshot — the read-only state published after each tick.
//!
//! External consumers (display, scoring, logging) read these views; they
//! never reach back into the world.

use serde::{Deserialize, Serialize};

use crate::components::{MotionTarget, WeaponTarget};
use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{GeoPoint, MissionTime};

/// Complete post-tick state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KernelSnapshot {
    pub time: MissionTime,
    pub paused: bool,
    pub radar: RadarView,
    pub bullseye: BullseyeView,
    pub assets: Vec<AssetView>,
    pub weapons: Vec<WeaponView>,
    pub contacts: Vec<ContactView>,
    /// One-shot events since the previous snapshot.
    pub events: Vec<SimEvent>,
}

/// A placed asset as rendered on the scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetView {
    pub asset_id: u32,
    pub name: String,
    pub domain: Domain,
    pub identity: Identity,
    pub position: GeoPoint,
    pub heading_deg: f64,
    pub speed_kt: f64,
    /// Present only for Air assets.
    pub altitude_ft: Option<f64>,
    /// Present only for SubSurface assets.
    pub depth_ft: Option<f64>,
    pub nav_state: NavState,
    pub waypoints: Vec<GeoPoint>,
    pub track_number: Option<u32>,
    /// Pending commanded targets still converging.
    pub target: MotionTarget,
    pub ownship: bool,
}

/// An in-flight weapon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponView {
    pub weapon_id: u32,
    pub variant: String,
    pub category: WeaponCategory,
    pub firer_id: u32,
    pub target: WeaponTarget,
    pub position: GeoPoint,
    pub heading_deg: f64,
    pub speed_kt: f64,
    pub phase: WeaponPhase,
}

/// A fading scope blip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactView {
    pub position: GeoPoint,
    /// Mission-time age (seconds since spawn).
    pub age_secs: f64,
    /// Decay duration captured at spawn (seconds).
    pub decay_secs: f64,
}

/// Contact generator status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarView {
    pub enabled: bool,
    pub decay_secs: f64,
}

impl Default for RadarView {
    fn default() -> Self {
        Self {
            enabled: true,
            decay_secs: crate::constants::CONTACT_DECAY_DEFAULT_SECS,
        }
    }
}

/// The bullseye reference point.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BullseyeView {
    pub position: GeoPoint,
    pub label: String,
}
