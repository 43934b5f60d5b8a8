//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods beyond small
//! accessors. Kernel logic lives in systems, not components.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::GeoPoint;

/// Identity and bookkeeping for a placed asset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetInfo {
    /// Kernel-assigned unique id (monotonic, shared with weapons).
    pub asset_id: u32,
    pub name: String,
    pub domain: Domain,
    pub identity: Identity,
    /// Optional display track number assigned by the operator.
    pub track_number: Option<u32>,
}

/// Scalar motion state: heading and speed, plus the vertical attribute for
/// domains that define one (altitude for Air, depth for SubSurface).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Kinematics {
    /// Heading in degrees, always normalized to [0, 360).
    pub heading_deg: f64,
    /// Speed in knots, >= 0, bounded by the domain envelope.
    pub speed_kt: f64,
    /// Altitude or depth in feet; None for Surface assets.
    pub vertical_ft: Option<f64>,
}

/// Pending commanded targets. Each field clears once its value converges,
/// so a fully converged asset carries an empty target.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct MotionTarget {
    pub heading_deg: Option<f64>,
    pub speed_kt: Option<f64>,
    pub vertical_ft: Option<f64>,
}

impl MotionTarget {
    /// True when no component is still converging.
    pub fn is_clear(&self) -> bool {
        self.heading_deg.is_none() && self.speed_kt.is_none() && self.vertical_ft.is_none()
    }

    /// Drop every pending target.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Ordered waypoint queue. Empty = Idle, non-empty = EnRoute.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    pub waypoints: Vec<GeoPoint>,
}

impl Route {
    pub fn nav_state(&self) -> NavState {
        if self.waypoints.is_empty() {
            NavState::Idle
        } else {
            NavState::EnRoute
        }
    }
}

/// Weapon roster and magazine for a firer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Loadout {
    /// Variant names in priority order; the first category match fires.
    pub roster: Vec<String>,
    /// Remaining rounds per category. Consulted only for the ownship;
    /// every other firer has unlimited stock.
    pub magazine: BTreeMap<WeaponCategory, u32>,
}

/// What an in-flight weapon is steering at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum WeaponTarget {
    /// Guided at a live asset.
    Track { asset_id: u32 },
    /// Flies out on a fixed commanded heading.
    Bearing { heading_deg: f64 },
}

/// In-flight weapon record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponState {
    /// Kernel-assigned unique id (monotonic, shared with assets).
    pub weapon_id: u32,
    /// Variant name, keyed into the variant table.
    pub variant: String,
    pub category: WeaponCategory,
    /// Id of the firing asset.
    pub firer_id: u32,
    pub target: WeaponTarget,
    pub phase: WeaponPhase,
    /// Mission time at launch (seconds).
    pub fired_at_secs: f64,
    /// Derived total burn time (seconds after launch).
    pub fuel_time_secs: f64,
    /// Derived booster cutoff (seconds after launch).
    pub booster_time_secs: f64,
    /// Derived self-destruct deadline (seconds after launch).
    pub self_destruct_secs: f64,
}

/// Marks the permanent ownship asset. Exactly one entity carries this; it
/// cannot be deleted and its domain cannot change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ownship;
