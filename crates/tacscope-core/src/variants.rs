//! Static weapon variant specifications.
//!
//! Variants are loaded as configuration at scenario setup; the built-in
//! table covers one variant per category and is used when a scenario does
//! not supply its own.

use serde::{Deserialize, Serialize};

use crate::constants::{FUEL_TIME_FACTOR, SELF_DESTRUCT_FACTOR};
use crate::enums::{Domain, WeaponCategory};

/// Performance specification for one weapon variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponVariantSpec {
    pub name: String,
    pub category: WeaponCategory,
    pub max_speed_kt: f64,
    pub max_range_nm: f64,
    /// Sustainer acceleration (knots per second).
    pub max_accel_kts: f64,
    /// Boost acceleration (knots per second).
    pub booster_accel_kts: f64,
    /// Fraction of fuel time spent in boost, in [0.10, 0.20].
    pub booster_fraction: f64,
    /// Domain this variant engages.
    pub target_domain: Domain,
    /// Single-character scope symbol.
    pub symbol: char,
}

impl WeaponVariantSpec {
    /// Total burn time: the max-range flight time at max speed, with
    /// margin.
    pub fn fuel_time_secs(&self) -> f64 {
        FUEL_TIME_FACTOR * (self.max_range_nm / (self.max_speed_kt / 3600.0))
    }

    /// Booster cutoff, seconds after launch.
    pub fn booster_time_secs(&self) -> f64 {
        self.fuel_time_secs() * self.booster_fraction
    }

    /// Self-destruct deadline, seconds after launch.
    pub fn self_destruct_secs(&self) -> f64 {
        self.fuel_time_secs() * SELF_DESTRUCT_FACTOR
    }
}

/// Ordered variant table, looked up by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VariantTable {
    pub variants: Vec<WeaponVariantSpec>,
}

impl VariantTable {
    pub fn get(&self, name: &str) -> Option<&WeaponVariantSpec> {
        self.variants.iter().find(|v| v.name == name)
    }

    /// Every variant name in table order, the default roster for a new
    /// asset.
    pub fn roster(&self) -> Vec<String> {
        self.variants.iter().map(|v| v.name.clone()).collect()
    }
}

/// The built-in variant table: one variant per category.
pub fn default_variants() -> VariantTable {
    VariantTable {
        variants: vec![
            WeaponVariantSpec {
                name: "LANCE".to_string(),
                category: WeaponCategory::Aam,
                max_speed_kt: 1500.0,
                max_range_nm: 30.0,
                max_accel_kts: 150.0,
                booster_accel_kts: 400.0,
                booster_fraction: 0.15,
                target_domain: Domain::Air,
                symbol: 'a',
            },
            WeaponVariantSpec {
                name: "MAUL".to_string(),
                category: WeaponCategory::Agm,
                max_speed_kt: 620.0,
                max_range_nm: 40.0,
                max_accel_kts: 80.0,
                booster_accel_kts: 220.0,
                booster_fraction: 0.12,
                target_domain: Domain::Surface,
                symbol: 'g',
            },
            WeaponVariantSpec {
                name: "SEASPEAR".to_string(),
                category: WeaponCategory::Asm,
                max_speed_kt: 540.0,
                max_range_nm: 70.0,
                max_accel_kts: 60.0,
                booster_accel_kts: 180.0,
                booster_fraction: 0.10,
                target_domain: Domain::Surface,
                symbol: 's',
            },
            WeaponVariantSpec {
                name: "RAMPART".to_string(),
                category: WeaponCategory::Sam,
                max_speed_kt: 1800.0,
                max_range_nm: 50.0,
                max_accel_kts: 200.0,
                booster_accel_kts: 500.0,
                booster_fraction: 0.18,
                target_domain: Domain::Air,
                symbol: 'm',
            },
            WeaponVariantSpec {
                name: "PIKE".to_string(),
                category: WeaponCategory::Torpedo,
                max_speed_kt: 55.0,
                max_range_nm: 20.0,
                max_accel_kts: 4.0,
                booster_accel_kts: 10.0,
                booster_fraction: 0.10,
                target_domain: Domain::SubSurface,
                symbol: 't',
            },
        ],
    }
}
