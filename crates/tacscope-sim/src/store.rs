//! Entity store — canonical ownership of asset and weapon records.
//!
//! Owns the hecs world plus ordered id indexes. All mutation goes through
//! validated create/update/delete operations. Ids are assigned from a
//! single monotonic counter shared by assets and weapons, so an unknown-id
//! report is unambiguous.

use std::collections::BTreeMap;

use hecs::{Entity, World};
use log::warn;

use tacscope_core::components::*;
use tacscope_core::enums::*;
use tacscope_core::errors::CommandError;
use tacscope_core::events::SimEvent;
use tacscope_core::types::GeoPoint;

/// Parameters for creating an asset.
#[derive(Debug, Clone)]
pub struct AssetInit {
    /// Requested id (scenario load); None takes the next from the counter.
    pub id: Option<u32>,
    pub name: String,
    pub domain: Domain,
    pub identity: Identity,
    pub position: GeoPoint,
    pub heading_deg: f64,
    pub speed_kt: f64,
    pub vertical_ft: Option<f64>,
    pub track_number: Option<u32>,
    pub roster: Vec<String>,
    pub magazine: BTreeMap<WeaponCategory, u32>,
    pub ownship: bool,
}

/// Field updates for an existing asset; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct AssetUpdate {
    pub name: Option<String>,
    pub identity: Option<Identity>,
    pub domain: Option<Domain>,
    pub heading_deg: Option<f64>,
    pub speed_kt: Option<f64>,
    pub vertical_ft: Option<f64>,
    pub target_heading_deg: Option<f64>,
    pub target_speed_kt: Option<f64>,
    pub target_vertical_ft: Option<f64>,
    pub track_number: Option<u32>,
}

/// The authoritative entity container.
pub struct EntityStore {
    world: World,
    assets: BTreeMap<u32, Entity>,
    weapons: BTreeMap<u32, Entity>,
    next_id: u32,
    ownship: Option<(u32, Entity)>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityStore {
    pub fn new() -> Self {
        Self {
            world: World::new(),
            assets: BTreeMap::new(),
            weapons: BTreeMap::new(),
            next_id: 1,
            ownship: None,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Ordered id -> entity index for assets.
    pub fn assets(&self) -> &BTreeMap<u32, Entity> {
        &self.assets
    }

    /// Ordered id -> entity index for in-flight weapons.
    pub fn weapons(&self) -> &BTreeMap<u32, Entity> {
        &self.weapons
    }

    pub fn asset_entity(&self, asset_id: u32) -> Option<Entity> {
        self.assets.get(&asset_id).copied()
    }

    pub fn ownship_id(&self) -> Option<u32> {
        self.ownship.map(|(id, _)| id)
    }

    pub fn is_ownship(&self, asset_id: u32) -> bool {
        self.ownship_id() == Some(asset_id)
    }

    /// Next id from the shared monotonic counter.
    pub(crate) fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create an asset. Speed is clamped to the domain envelope (reported,
    /// never rejected) and the vertical attribute is normalized to the
    /// domain's shape.
    pub fn create_asset(
        &mut self,
        init: AssetInit,
        events: &mut Vec<SimEvent>,
    ) -> Result<u32, CommandError> {
        if init.ownship && self.ownship.is_some() {
            return Err(CommandError::OwnshipExists);
        }

        let asset_id = match init.id {
            Some(id) if !self.assets.contains_key(&id) && !self.weapons.contains_key(&id) => {
                self.next_id = self.next_id.max(id + 1);
                id
            }
            _ => self.alloc_id(),
        };
        let speed_kt = sanitize_speed(init.domain, init.speed_kt, asset_id, events);
        let vertical_ft = sanitize_vertical(init.domain, init.vertical_ft, asset_id);

        let info = AssetInfo {
            asset_id,
            name: init.name,
            domain: init.domain,
            identity: init.identity,
            track_number: init.track_number,
        };
        let kin = Kinematics {
            heading_deg: init.heading_deg.rem_euclid(360.0),
            speed_kt,
            vertical_ft,
        };
        let loadout = Loadout {
            roster: init.roster,
            magazine: init.magazine,
        };

        let entity = self.world.spawn((
            info,
            kin,
            MotionTarget::default(),
            Route::default(),
            loadout,
            init.position,
        ));
        if init.ownship {
            let _ = self.world.insert_one(entity, Ownship);
            self.ownship = Some((asset_id, entity));
        }
        self.assets.insert(asset_id, entity);
        Ok(asset_id)
    }

    /// Apply a field update. The ownship's domain is fixed; everything
    /// else clamps into the envelope rather than rejecting.
    pub fn update_asset(
        &mut self,
        asset_id: u32,
        update: AssetUpdate,
        events: &mut Vec<SimEvent>,
    ) -> Result<(), CommandError> {
        let entity = self
            .asset_entity(asset_id)
            .ok_or(CommandError::UnknownEntity(asset_id))?;
        let is_own = self.is_ownship(asset_id);

        let (info, kin, target) = self
            .world
            .query_one_mut::<(&mut AssetInfo, &mut Kinematics, &mut MotionTarget)>(entity)
            .map_err(|_| CommandError::UnknownEntity(asset_id))?;

        if let Some(domain) = update.domain {
            if domain != info.domain && is_own {
                return Err(CommandError::OwnshipDomainChange);
            }
        }

        if let Some(name) = update.name {
            info.name = name;
        }
        if let Some(identity) = update.identity {
            info.identity = identity;
        }
        if let Some(track_number) = update.track_number {
            info.track_number = Some(track_number);
        }
        if let Some(domain) = update.domain {
            if domain != info.domain {
                info.domain = domain;
                kin.speed_kt = sanitize_speed(domain, kin.speed_kt, asset_id, events);
                kin.vertical_ft = if domain.has_vertical() { Some(0.0) } else { None };
                target.clear();
            }
        }

        // A direct set supersedes any convergence still pending on the
        // same component.
        if let Some(heading) = update.heading_deg {
            kin.heading_deg = heading.rem_euclid(360.0);
            target.heading_deg = None;
        }
        if let Some(speed) = update.speed_kt {
            kin.speed_kt = sanitize_speed(info.domain, speed, asset_id, events);
            target.speed_kt = None;
        }
        if let Some(vertical) = update.vertical_ft {
            if info.domain.has_vertical() {
                kin.vertical_ft = Some(vertical.max(0.0));
                target.vertical_ft = None;
            } else {
                warn!("asset {asset_id}: vertical attribute ignored for Surface domain");
            }
        }

        if let Some(heading) = update.target_heading_deg {
            target.heading_deg = Some(heading.rem_euclid(360.0));
        }
        if let Some(speed) = update.target_speed_kt {
            target.speed_kt = Some(sanitize_speed(info.domain, speed, asset_id, events));
        }
        if let Some(vertical) = update.target_vertical_ft {
            if info.domain.has_vertical() {
                target.vertical_ft = Some(vertical.max(0.0));
            } else {
                warn!("asset {asset_id}: vertical target ignored for Surface domain");
            }
        }

        Ok(())
    }

    /// Delete an asset. The ownship is protected; deleting an unknown id
    /// reports `UnknownEntity` to the caller.
    pub fn delete_asset(&mut self, asset_id: u32) -> Result<(), CommandError> {
        if self.is_ownship(asset_id) {
            return Err(CommandError::OwnshipDelete);
        }
        let entity = self
            .assets
            .remove(&asset_id)
            .ok_or(CommandError::UnknownEntity(asset_id))?;
        let _ = self.world.despawn(entity);
        Ok(())
    }

    /// Register a freshly fired weapon entity.
    pub(crate) fn add_weapon(&mut self, state: WeaponState, kin: Kinematics, position: GeoPoint) {
        let weapon_id = state.weapon_id;
        let entity = self.world.spawn((state, kin, position));
        self.weapons.insert(weapon_id, entity);
    }

    /// Despawn a weapon and drop it from the index.
    pub(crate) fn remove_weapon(&mut self, weapon_id: u32) {
        if let Some(entity) = self.weapons.remove(&weapon_id) {
            let _ = self.world.despawn(entity);
        }
    }
}

/// Clamp a commanded speed into the domain envelope. Exceeding the max is
/// clamped and reported; a negative request floors at zero.
fn sanitize_speed(
    domain: Domain,
    requested_kt: f64,
    asset_id: u32,
    events: &mut Vec<SimEvent>,
) -> f64 {
    let limit_kt = domain.envelope().max_speed_kt;
    if requested_kt > limit_kt {
        warn!("asset {asset_id}: speed {requested_kt:.0} kt clamped to {limit_kt:.0} kt");
        events.push(SimEvent::SpeedClamped {
            asset_id,
            requested_kt,
            limit_kt,
        });
        limit_kt
    } else if requested_kt < 0.0 {
        warn!("asset {asset_id}: negative speed clamped to 0");
        0.0
    } else {
        requested_kt
    }
}

/// Normalize the vertical attribute to the domain's shape: altitude for
/// Air, depth for SubSurface (defaulting to 0), none for Surface.
fn sanitize_vertical(domain: Domain, requested_ft: Option<f64>, asset_id: u32) -> Option<f64> {
    if domain.has_vertical() {
        Some(requested_ft.unwrap_or(0.0).max(0.0))
    } else {
        if requested_ft.is_some() {
            warn!("asset {asset_id}: vertical attribute ignored for Surface domain");
        }
        None
    }
}
