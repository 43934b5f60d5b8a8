//! Persisted scenario schema.
//!
//! The surrounding application owns the load/save boundary; the kernel
//! converts to and from this shape but performs no file or network I/O
//! itself.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::GeoPoint;
use crate::variants::WeaponVariantSpec;

/// A complete saved exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedScenario {
    pub assets: Vec<SavedAsset>,
    /// Weapon variant table; empty means use the built-in defaults.
    #[serde(default)]
    pub variants: Vec<WeaponVariantSpec>,
    #[serde(default)]
    pub bullseye: SavedBullseye,
    /// Display scale in nautical miles (host-owned passthrough).
    #[serde(default)]
    pub map_scale_nm: f64,
    /// Mission time already elapsed when the scenario was saved.
    #[serde(default)]
    pub elapsed_secs: f64,
}

/// One asset as persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAsset {
    /// Kernel id at save time; a load keeps it when it does not collide.
    #[serde(default)]
    pub id: Option<u32>,
    pub name: String,
    pub domain: Domain,
    #[serde(default)]
    pub identity: Identity,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub heading_deg: f64,
    #[serde(default)]
    pub speed_kt: f64,
    /// Altitude (Air) or depth (SubSurface) in feet.
    #[serde(default)]
    pub vertical_ft: Option<f64>,
    #[serde(default)]
    pub target_heading_deg: Option<f64>,
    #[serde(default)]
    pub target_speed_kt: Option<f64>,
    #[serde(default)]
    pub target_vertical_ft: Option<f64>,
    #[serde(default)]
    pub waypoints: Vec<GeoPoint>,
    #[serde(default)]
    pub track_number: Option<u32>,
    /// Exactly one saved asset sets this.
    #[serde(default)]
    pub ownship: bool,
    /// Roster override; empty means every variant in table order.
    #[serde(default)]
    pub roster: Vec<String>,
    /// Magazine counts; meaningful only for the ownship.
    #[serde(default)]
    pub magazine: BTreeMap<WeaponCategory, u32>,
}

/// Persisted bullseye reference.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedBullseye {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub label: String,
}
