//! Radar contact generator.
//!
//! Emits one contact per asset each time mission time crosses the sweep
//! interval, and purges contacts whose decay has elapsed. Cadence and
//! decay both follow mission time, not wall clock, so a paused loop
//! freezes them.

use hecs::World;

use tacscope_core::components::AssetInfo;
use tacscope_core::constants::*;
use tacscope_core::types::{GeoPoint, MissionTime};

/// Generator configuration and sweep bookkeeping.
#[derive(Debug, Clone)]
pub struct RadarState {
    pub enabled: bool,
    /// Decay applied to newly spawned contacts (seconds).
    pub decay_secs: f64,
    /// Mission time of the last contact sweep (seconds).
    pub last_sweep_secs: f64,
}

impl Default for RadarState {
    fn default() -> Self {
        Self {
            enabled: true,
            decay_secs: CONTACT_DECAY_DEFAULT_SECS,
            last_sweep_secs: 0.0,
        }
    }
}

impl RadarState {
    /// Set the decay duration, clamped to the configurable range.
    /// Returns the applied value.
    pub fn set_decay(&mut self, seconds: f64) -> f64 {
        self.decay_secs = seconds.clamp(CONTACT_DECAY_MIN_SECS, CONTACT_DECAY_MAX_SECS);
        self.decay_secs
    }
}

/// A single scope blip.
#[derive(Debug, Clone, Copy)]
pub struct RadarContact {
    pub position: GeoPoint,
    /// Mission time at spawn (seconds).
    pub spawn_secs: f64,
    /// Decay duration captured at spawn (seconds).
    pub decay_secs: f64,
}

/// Purge decayed contacts, then spawn a new sweep if one is due.
pub fn run(
    radar: &mut RadarState,
    contacts: &mut Vec<RadarContact>,
    world: &World,
    time: MissionTime,
) {
    let now = time.elapsed_secs;

    // Decay runs whenever the loop runs, even with the radar disabled.
    contacts.retain(|c| now - c.spawn_secs < c.decay_secs);

    if !radar.enabled {
        // Keep the cadence aligned while disabled so re-enabling does not
        // back-fill missed sweeps.
        while now - radar.last_sweep_secs >= CONTACT_INTERVAL_SECS {
            radar.last_sweep_secs += CONTACT_INTERVAL_SECS;
        }
        return;
    }

    while now - radar.last_sweep_secs >= CONTACT_INTERVAL_SECS {
        radar.last_sweep_secs += CONTACT_INTERVAL_SECS;
        spawn_sweep(radar, contacts, world);
    }
}

/// Paint one contact per asset at its current position, in asset-id order
/// for stable snapshots.
fn spawn_sweep(radar: &RadarState, contacts: &mut Vec<RadarContact>, world: &World) {
    let mut sweep: Vec<(u32, RadarContact)> = world
        .query::<(&AssetInfo, &GeoPoint)>()
        .iter()
        .map(|(_, (info, pos))| {
            (
                info.asset_id,
                RadarContact {
                    position: *pos,
                    spawn_secs: radar.last_sweep_secs,
                    decay_secs: radar.decay_secs,
                },
            )
        })
        .collect();
    sweep.sort_by_key(|(asset_id, _)| *asset_id);
    contacts.extend(sweep.into_iter().map(|(_, c)| c));
}
