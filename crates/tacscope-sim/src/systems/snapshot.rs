//! Snapshot system: queries the world and builds a complete
//! `KernelSnapshot` for external consumers.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use tacscope_core::components::*;
use tacscope_core::enums::Domain;
use tacscope_core::events::SimEvent;
use tacscope_core::state::*;
use tacscope_core::types::MissionTime;

use crate::engine::Bullseye;
use crate::systems::radar_contacts::{RadarContact, RadarState};

/// Build a complete snapshot from the current world state.
pub fn build(
    world: &World,
    time: MissionTime,
    paused: bool,
    radar: &RadarState,
    bullseye: &Bullseye,
    contacts: &[RadarContact],
    events: Vec<SimEvent>,
) -> KernelSnapshot {
    KernelSnapshot {
        time,
        paused,
        radar: RadarView {
            enabled: radar.enabled,
            decay_secs: radar.decay_secs,
        },
        bullseye: BullseyeView {
            position: bullseye.position,
            label: bullseye.label.clone(),
        },
        assets: build_assets(world),
        weapons: build_weapons(world),
        contacts: build_contacts(contacts, time),
        events,
    }
}

/// Build AssetView list from all entities with AssetInfo.
fn build_assets(world: &World) -> Vec<AssetView> {
    let mut assets: Vec<AssetView> = world
        .query::<(
            &AssetInfo,
            &Kinematics,
            &MotionTarget,
            &Route,
            &tacscope_core::types::GeoPoint,
            Option<&Ownship>,
        )>()
        .iter()
        .map(|(_, (info, kin, target, route, pos, ownship))| AssetView {
            asset_id: info.asset_id,
            name: info.name.clone(),
            domain: info.domain,
            identity: info.identity,
            position: *pos,
            heading_deg: kin.heading_deg,
            speed_kt: kin.speed_kt,
            altitude_ft: if info.domain == Domain::Air {
                kin.vertical_ft
            } else {
                None
            },
            depth_ft: if info.domain == Domain::SubSurface {
                kin.vertical_ft
            } else {
                None
            },
            nav_state: route.nav_state(),
            waypoints: route.waypoints.clone(),
            track_number: info.track_number,
            target: *target,
            ownship: ownship.is_some(),
        })
        .collect();

    assets.sort_by_key(|a| a.asset_id);
    assets
}

/// Build WeaponView list from all in-flight weapons.
fn build_weapons(world: &World) -> Vec<WeaponView> {
    let mut weapons: Vec<WeaponView> = world
        .query::<(&WeaponState, &Kinematics, &tacscope_core::types::GeoPoint)>()
        .iter()
        .map(|(_, (weapon, kin, pos))| WeaponView {
            weapon_id: weapon.weapon_id,
            variant: weapon.variant.clone(),
            category: weapon.category,
            firer_id: weapon.firer_id,
            target: weapon.target,
            position: *pos,
            heading_deg: kin.heading_deg,
            speed_kt: kin.speed_kt,
            phase: weapon.phase,
        })
        .collect();

    weapons.sort_by_key(|w| w.weapon_id);
    weapons
}

/// Build ContactView list with mission-time ages.
fn build_contacts(contacts: &[RadarContact], time: MissionTime) -> Vec<ContactView> {
    contacts
        .iter()
        .map(|c| ContactView {
            position: c.position,
            age_secs: time.elapsed_secs - c.spawn_secs,
            decay_secs: c.decay_secs,
        })
        .collect()
}
