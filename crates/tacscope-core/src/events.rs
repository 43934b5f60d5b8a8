//! Events surfaced to external observers.
//!
//! One-shot notifications drained into each post-tick snapshot for the
//! logging/scoring collaborators.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Notifications emitted by the kernel since the previous snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A weapon left the rail.
    WeaponAway {
        weapon_id: u32,
        firer_id: u32,
        variant: String,
        category: WeaponCategory,
    },
    /// A weapon reached a termination condition. Reported exactly once.
    WeaponTerminated {
        weapon_id: u32,
        reason: TerminationReason,
    },
    /// An asset closed within the arrival radius of its active waypoint.
    WaypointReached { asset_id: u32 },
    /// A commanded speed exceeded the domain envelope and was clamped.
    SpeedClamped {
        asset_id: u32,
        requested_kt: f64,
        limit_kt: f64,
    },
    /// A command referenced an id no longer present and was discarded.
    UnknownEntity { id: u32 },
    /// A fire command found no remaining rounds for the category.
    MagazineEmpty {
        firer_id: u32,
        category: WeaponCategory,
    },
}
