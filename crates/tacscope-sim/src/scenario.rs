//! Scenario definitions — the built-in training setup.
//!
//! Places the ownship in the strait with a small practice picture: one
//! hostile air contact, a neutral surface tanker, and an unevaluated
//! sub-surface contact.

use std::collections::BTreeMap;

use tacscope_core::enums::{Domain, Identity, WeaponCategory};
use tacscope_core::persist::{SavedAsset, SavedBullseye, SavedScenario};
use tacscope_core::types::GeoPoint;
use tacscope_core::variants::default_variants;

/// Magazine carried by the default ownship.
pub fn default_magazine() -> BTreeMap<WeaponCategory, u32> {
    BTreeMap::from([
        (WeaponCategory::Aam, 6),
        (WeaponCategory::Agm, 4),
        (WeaponCategory::Asm, 2),
    ])
}

/// The built-in training scenario.
pub fn default_scenario() -> SavedScenario {
    SavedScenario {
        assets: vec![
            SavedAsset {
                id: None,
                name: "KNIGHT 1".to_string(),
                domain: Domain::Air,
                identity: Identity::Friendly,
                lat: 26.0833,
                lon: 54.0,
                heading_deg: 0.0,
                speed_kt: 220.0,
                vertical_ft: Some(25_000.0),
                target_heading_deg: None,
                target_speed_kt: None,
                target_vertical_ft: None,
                waypoints: Vec::new(),
                track_number: Some(1),
                ownship: true,
                roster: Vec::new(),
                magazine: default_magazine(),
            },
            SavedAsset {
                id: None,
                name: "BANDIT 1".to_string(),
                domain: Domain::Air,
                identity: Identity::Hostile,
                lat: 27.2,
                lon: 54.5,
                heading_deg: 180.0,
                speed_kt: 400.0,
                vertical_ft: Some(20_000.0),
                target_heading_deg: None,
                target_speed_kt: None,
                target_vertical_ft: None,
                waypoints: Vec::new(),
                track_number: Some(2),
                ownship: false,
                roster: Vec::new(),
                magazine: BTreeMap::new(),
            },
            SavedAsset {
                id: None,
                name: "MERCHANT".to_string(),
                domain: Domain::Surface,
                identity: Identity::Neutral,
                lat: 26.5,
                lon: 53.5,
                heading_deg: 270.0,
                speed_kt: 12.0,
                vertical_ft: None,
                target_heading_deg: None,
                target_speed_kt: None,
                target_vertical_ft: None,
                waypoints: Vec::new(),
                track_number: Some(3),
                ownship: false,
                roster: Vec::new(),
                magazine: BTreeMap::new(),
            },
            SavedAsset {
                id: None,
                name: "GOBLIN".to_string(),
                domain: Domain::SubSurface,
                identity: Identity::UnknownUnevaluated,
                lat: 26.3,
                lon: 54.8,
                heading_deg: 90.0,
                speed_kt: 6.0,
                vertical_ft: Some(150.0),
                target_heading_deg: None,
                target_speed_kt: None,
                target_vertical_ft: None,
                waypoints: Vec::new(),
                track_number: Some(4),
                ownship: false,
                roster: Vec::new(),
                magazine: BTreeMap::new(),
            },
        ],
        variants: default_variants().variants,
        bullseye: SavedBullseye {
            lat: 26.5,
            lon: 54.25,
            label: "CACTUS".to_string(),
        },
        map_scale_nm: 80.0,
        elapsed_secs: 0.0,
    }
}

/// Convenience: the point where the default ownship starts.
pub fn ownship_start() -> GeoPoint {
    GeoPoint::new(26.0833, 54.0)
}
