//! Weapon ballistics engine.
//!
//! Three-phase propulsion (Booster -> Cruise -> BleedOff), fixed-rate
//! guidance toward the target, and prioritized termination checks. A
//! terminated weapon is reported exactly once and receives no further
//! mutation; cleanup despawns it in the same tick.

use hecs::Entity;
use log::{debug, info, warn};

use tacscope_core::components::*;
use tacscope_core::constants::*;
use tacscope_core::enums::*;
use tacscope_core::errors::CommandError;
use tacscope_core::events::SimEvent;
use tacscope_core::types::{GeoPoint, MissionTime};
use tacscope_core::variants::VariantTable;

use crate::store::EntityStore;
use crate::systems::kinematics::converge_heading;

/// Computed state to write back after the read pass.
struct WeaponUpdate {
    entity: Entity,
    phase: WeaponPhase,
    kin: Kinematics,
    pos: GeoPoint,
}

/// Advance every in-flight weapon by one tick.
pub fn run(
    store: &mut EntityStore,
    variants: &VariantTable,
    time: MissionTime,
    dt: f64,
    events: &mut Vec<SimEvent>,
) {
    // Read pass: compute updates without mutating the world, so target
    // positions can be resolved mid-iteration.
    let mut updates: Vec<WeaponUpdate> = Vec::new();
    {
        let world = store.world();
        let assets = store.assets();
        let mut query = world.query::<(&WeaponState, &Kinematics, &GeoPoint)>();
        for (entity, (weapon, kin, pos)) in query.iter() {
            if matches!(weapon.phase, WeaponPhase::Terminated(_)) {
                continue;
            }
            let Some(variant) = variants.get(&weapon.variant) else {
                warn!(
                    "weapon {}: unknown variant {:?}",
                    weapon.weapon_id, weapon.variant
                );
                continue;
            };

            let elapsed = time.elapsed_secs - weapon.fired_at_secs;

            // Propulsion phase is a pure function of elapsed mission time,
            // so the progression can never reverse.
            let phase = if elapsed >= weapon.fuel_time_secs {
                WeaponPhase::BleedOff
            } else if elapsed >= weapon.booster_time_secs {
                WeaponPhase::Cruise
            } else {
                WeaponPhase::Booster
            };

            let speed_kt = match phase {
                WeaponPhase::Booster => {
                    (kin.speed_kt + variant.booster_accel_kts * dt).min(variant.max_speed_kt)
                }
                WeaponPhase::Cruise => {
                    (kin.speed_kt + variant.max_accel_kts * dt).min(variant.max_speed_kt)
                }
                WeaponPhase::BleedOff => (kin.speed_kt - BLEED_OFF_DECEL_KTS * dt).max(0.0),
                WeaponPhase::Terminated(_) => kin.speed_kt,
            };

            // Guidance: steer at the current bearing to the target. A
            // target that no longer resolves is target-loss, not an
            // error: the weapon keeps its last heading.
            let target_pos = match weapon.target {
                WeaponTarget::Track { asset_id } => assets
                    .get(&asset_id)
                    .and_then(|&e| world.get::<&GeoPoint>(e).ok().map(|p| *p)),
                WeaponTarget::Bearing { .. } => None,
            };

            let mut heading_deg = kin.heading_deg;
            if let Some(target_pos) = target_pos {
                let (bearing, _) = tacscope_geo::bearing_and_range(*pos, target_pos);
                heading_deg = converge_heading(heading_deg, bearing, WEAPON_TURN_RATE_DPS, dt).0;
            }

            let next_pos = tacscope_geo::advance(*pos, heading_deg, speed_kt * dt / 3600.0);

            // Termination checks, in priority order: impact, then
            // self-destruct, then energy loss.
            let mut next_phase = phase;
            if let Some(target_pos) = target_pos {
                let (_, range_nm) = tacscope_geo::bearing_and_range(next_pos, target_pos);
                if range_nm < IMPACT_RANGE_NM {
                    next_phase = WeaponPhase::Terminated(TerminationReason::Impact);
                }
            }
            if next_phase == phase && elapsed >= weapon.self_destruct_secs {
                next_phase = WeaponPhase::Terminated(TerminationReason::SelfDestruct);
            }
            if next_phase == phase
                && phase == WeaponPhase::BleedOff
                && speed_kt < WEAPON_MIN_SPEED_KT
            {
                next_phase = WeaponPhase::Terminated(TerminationReason::EnergyLoss);
            }

            updates.push(WeaponUpdate {
                entity,
                phase: next_phase,
                kin: Kinematics {
                    heading_deg,
                    speed_kt,
                    vertical_ft: None,
                },
                pos: next_pos,
            });
        }
    }

    // Write pass.
    let world = store.world_mut();
    for update in updates {
        if let Ok((weapon, kin, pos)) =
            world.query_one_mut::<(&mut WeaponState, &mut Kinematics, &mut GeoPoint)>(update.entity)
        {
            *kin = update.kin;
            *pos = update.pos;
            if weapon.phase != update.phase {
                debug!(
                    "weapon {}: {:?} -> {:?}",
                    weapon.weapon_id, weapon.phase, update.phase
                );
                weapon.phase = update.phase;
                if let WeaponPhase::Terminated(reason) = update.phase {
                    info!("weapon {} terminated: {reason:?}", weapon.weapon_id);
                    events.push(SimEvent::WeaponTerminated {
                        weapon_id: weapon.weapon_id,
                        reason,
                    });
                }
            }
        }
    }
}

/// Resolve a fire command: pick the first variant in the firer's roster
/// whose category matches, spend ownship inventory, and spawn the weapon
/// at the firer's position and speed.
pub fn fire(
    store: &mut EntityStore,
    variants: &VariantTable,
    time: MissionTime,
    firer_id: u32,
    category: WeaponCategory,
    target: WeaponTarget,
    events: &mut Vec<SimEvent>,
) -> Result<u32, CommandError> {
    let firer_entity = store
        .asset_entity(firer_id)
        .ok_or(CommandError::UnknownEntity(firer_id))?;

    let variant = {
        let loadout = store
            .world()
            .get::<&Loadout>(firer_entity)
            .map_err(|_| CommandError::UnknownEntity(firer_id))?;
        loadout
            .roster
            .iter()
            .filter_map(|name| variants.get(name))
            .find(|v| v.category == category)
            .cloned()
            .ok_or(CommandError::NoMatchingVariant(category))?
    };

    let (position, launch_speed_kt) = {
        let kin = store
            .world()
            .get::<&Kinematics>(firer_entity)
            .map_err(|_| CommandError::UnknownEntity(firer_id))?;
        let pos = store
            .world()
            .get::<&GeoPoint>(firer_entity)
            .map_err(|_| CommandError::UnknownEntity(firer_id))?;
        (*pos, kin.speed_kt)
    };

    // Initial heading: at the target if it resolves, else the commanded
    // bearing. Firing at an id that is already gone is discarded.
    let heading_deg = match target {
        WeaponTarget::Track { asset_id } => {
            let target_entity = store
                .asset_entity(asset_id)
                .ok_or(CommandError::UnknownEntity(asset_id))?;
            let target_pos = store
                .world()
                .get::<&GeoPoint>(target_entity)
                .map_err(|_| CommandError::UnknownEntity(asset_id))?;
            tacscope_geo::bearing_and_range(position, *target_pos).0
        }
        WeaponTarget::Bearing { heading_deg } => heading_deg.rem_euclid(360.0),
    };

    // The ownship spends from its magazine; every other firer is
    // unlimited.
    if store.is_ownship(firer_id) {
        let mut loadout = store
            .world_mut()
            .get::<&mut Loadout>(firer_entity)
            .map_err(|_| CommandError::UnknownEntity(firer_id))?;
        let rounds = loadout.magazine.entry(category).or_insert(0);
        if *rounds == 0 {
            return Err(CommandError::MagazineEmpty(category));
        }
        *rounds -= 1;
    }

    let weapon_id = store.alloc_id();
    let state = WeaponState {
        weapon_id,
        variant: variant.name.clone(),
        category,
        firer_id,
        target,
        phase: WeaponPhase::Booster,
        fired_at_secs: time.elapsed_secs,
        fuel_time_secs: variant.fuel_time_secs(),
        booster_time_secs: variant.booster_time_secs(),
        self_destruct_secs: variant.self_destruct_secs(),
    };
    let kin = Kinematics {
        heading_deg,
        speed_kt: launch_speed_kt,
        vertical_ft: None,
    };
    store.add_weapon(state, kin, position);

    info!("weapon {weapon_id} away: {} from asset {firer_id}", variant.name);
    events.push(SimEvent::WeaponAway {
        weapon_id,
        firer_id,
        variant: variant.name,
        category,
    });
    Ok(weapon_id)
}
