//! Fundamental geodetic and simulation types.

use serde::{Deserialize, Serialize};

/// Geodetic position in floating degrees on a spherical earth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Mission clock. Advances only while the tick loop runs, so it is distinct
/// from wall-clock time and freezes across a pause.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MissionTime {
    /// Tick number (increments by 1 each running tick).
    pub tick: u64,
    /// Elapsed mission time in seconds.
    pub elapsed_secs: f64,
}

impl MissionTime {
    /// Resume a clock from previously elapsed mission time.
    pub fn from_elapsed(elapsed_secs: f64, dt: f64) -> Self {
        Self {
            tick: (elapsed_secs / dt).round() as u64,
            elapsed_secs,
        }
    }

    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
