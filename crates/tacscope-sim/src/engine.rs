//! Simulation engine — the kernel's tick loop.
//!
//! `SimulationEngine` owns the entity store, drains queued external
//! commands atomically at each tick boundary, runs the systems in fixed
//! order, and publishes a read-only `KernelSnapshot`. Completely headless:
//! no I/O, no blocking, no randomness, one writer. Identical command/tick
//! sequences from the same initial state replay bit-identically.

use std::collections::{BTreeMap, VecDeque};

use log::warn;

use tacscope_core::commands::Command;
use tacscope_core::components::{AssetInfo, Kinematics, Loadout, MotionTarget, Route};
use tacscope_core::constants::*;
use tacscope_core::errors::CommandError;
use tacscope_core::events::SimEvent;
use tacscope_core::persist::{SavedAsset, SavedBullseye, SavedScenario};
use tacscope_core::state::KernelSnapshot;
use tacscope_core::types::{GeoPoint, MissionTime};
use tacscope_core::variants::{default_variants, VariantTable};

use crate::store::{AssetInit, AssetUpdate, EntityStore};
use crate::systems;
use crate::systems::radar_contacts::{RadarContact, RadarState};

/// Fixed geodetic reference point for bearing/range readouts.
#[derive(Debug, Clone, Default)]
pub struct Bullseye {
    pub position: GeoPoint,
    pub label: String,
}

/// The simulation kernel. Owns all mutable entity state.
pub struct SimulationEngine {
    store: EntityStore,
    time: MissionTime,
    paused: bool,
    variants: VariantTable,
    radar: RadarState,
    contacts: Vec<RadarContact>,
    bullseye: Bullseye,
    map_scale_nm: f64,
    command_queue: VecDeque<Command>,
    events: Vec<SimEvent>,
    despawn_buffer: Vec<u32>,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new(default_variants())
    }
}

impl SimulationEngine {
    /// Create an empty engine with the given weapon variant table.
    pub fn new(variants: VariantTable) -> Self {
        Self {
            store: EntityStore::new(),
            time: MissionTime::default(),
            paused: false,
            variants,
            radar: RadarState::default(),
            contacts: Vec::new(),
            bullseye: Bullseye::default(),
            map_scale_nm: 0.0,
            command_queue: VecDeque::new(),
            events: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Create an engine and load a scenario into it.
    pub fn from_scenario(scenario: &SavedScenario) -> Self {
        let mut engine = Self::new(default_variants());
        engine.load_scenario(scenario);
        engine
    }

    /// Queue an external command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: Command) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = Command>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot. Strictly in order: drain commands, kinematics,
    /// navigation, ballistics, radar contacts, cleanup. While paused,
    /// commands still drain but mission time is frozen.
    pub fn tick(&mut self) -> KernelSnapshot {
        self.process_commands();

        if !self.paused {
            systems::kinematics::run(self.store.world_mut(), DT);
            systems::navigation::run(self.store.world_mut(), &mut self.events);
            systems::ballistics::run(
                &mut self.store,
                &self.variants,
                self.time,
                DT,
                &mut self.events,
            );
            systems::radar_contacts::run(
                &mut self.radar,
                &mut self.contacts,
                self.store.world(),
                self.time,
            );
            systems::cleanup::run(&mut self.store, &mut self.despawn_buffer);
            self.time.advance(DT);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(
            self.store.world(),
            self.time,
            self.paused,
            &self.radar,
            &self.bullseye,
            &self.contacts,
            events,
        )
    }

    pub fn time(&self) -> MissionTime {
        self.time
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn variants(&self) -> &VariantTable {
        &self.variants
    }

    /// Reset the engine to a saved scenario. Replaces all entity state;
    /// the variant table is taken from the scenario when it carries one.
    pub fn load_scenario(&mut self, scenario: &SavedScenario) {
        if !scenario.variants.is_empty() {
            self.variants = VariantTable {
                variants: scenario.variants.clone(),
            };
        }
        self.store = EntityStore::new();
        self.contacts.clear();
        self.command_queue.clear();
        self.events.clear();
        self.despawn_buffer.clear();
        self.paused = false;
        self.time = MissionTime::from_elapsed(scenario.elapsed_secs, DT);
        self.radar = RadarState {
            last_sweep_secs: scenario.elapsed_secs
                - scenario.elapsed_secs.rem_euclid(CONTACT_INTERVAL_SECS),
            ..RadarState::default()
        };
        self.bullseye = Bullseye {
            position: GeoPoint::new(scenario.bullseye.lat, scenario.bullseye.lon),
            label: scenario.bullseye.label.clone(),
        };
        self.map_scale_nm = scenario.map_scale_nm;

        for saved in &scenario.assets {
            let init = AssetInit {
                id: saved.id,
                name: saved.name.clone(),
                domain: saved.domain,
                identity: saved.identity,
                position: GeoPoint::new(saved.lat, saved.lon),
                heading_deg: saved.heading_deg,
                speed_kt: saved.speed_kt,
                vertical_ft: saved.vertical_ft,
                track_number: saved.track_number,
                roster: if saved.roster.is_empty() {
                    self.variants.roster()
                } else {
                    saved.roster.clone()
                },
                magazine: saved.magazine.clone(),
                ownship: saved.ownship,
            };
            match self.store.create_asset(init, &mut self.events) {
                Ok(asset_id) => {
                    let targets = AssetUpdate {
                        target_heading_deg: saved.target_heading_deg,
                        target_speed_kt: saved.target_speed_kt,
                        target_vertical_ft: saved.target_vertical_ft,
                        ..Default::default()
                    };
                    let _ = self.store.update_asset(asset_id, targets, &mut self.events);
                    if let Some(entity) = self.store.asset_entity(asset_id) {
                        for waypoint in &saved.waypoints {
                            let _ = systems::navigation::add_waypoint(
                                self.store.world_mut(),
                                entity,
                                asset_id,
                                *waypoint,
                            );
                        }
                    }
                }
                Err(err) => warn!("scenario asset {} skipped: {err}", saved.name),
            }
        }
    }

    /// Export the current state in the persisted scenario shape.
    pub fn save_scenario(&self) -> SavedScenario {
        let world = self.store.world();
        let mut assets = Vec::new();
        for (&asset_id, &entity) in self.store.assets() {
            let (Ok(info), Ok(kin), Ok(target), Ok(route), Ok(loadout), Ok(pos)) = (
                world.get::<&AssetInfo>(entity),
                world.get::<&Kinematics>(entity),
                world.get::<&MotionTarget>(entity),
                world.get::<&Route>(entity),
                world.get::<&Loadout>(entity),
                world.get::<&GeoPoint>(entity),
            ) else {
                continue;
            };
            assets.push(SavedAsset {
                id: Some(asset_id),
                name: info.name.clone(),
                domain: info.domain,
                identity: info.identity,
                lat: pos.lat,
                lon: pos.lon,
                heading_deg: kin.heading_deg,
                speed_kt: kin.speed_kt,
                vertical_ft: kin.vertical_ft,
                target_heading_deg: target.heading_deg,
                target_speed_kt: target.speed_kt,
                target_vertical_ft: target.vertical_ft,
                waypoints: route.waypoints.clone(),
                track_number: info.track_number,
                ownship: self.store.is_ownship(asset_id),
                roster: loadout.roster.clone(),
                magazine: loadout.magazine.clone(),
            });
        }

        SavedScenario {
            assets,
            variants: self.variants.variants.clone(),
            bullseye: SavedBullseye {
                lat: self.bullseye.position.lat,
                lon: self.bullseye.position.lon,
                label: self.bullseye.label.clone(),
            },
            map_scale_nm: self.map_scale_nm,
            elapsed_secs: self.time.elapsed_secs,
        }
    }

    /// Drain and apply all queued commands. An error discards that
    /// command only; the rest of the queue still applies.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.apply_command(command) {
                warn!("command discarded: {err}");
                if let CommandError::UnknownEntity(id) = err {
                    self.events.push(SimEvent::UnknownEntity { id });
                }
            }
        }
    }

    /// Apply a single command.
    fn apply_command(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::CreateAsset {
                name,
                domain,
                identity,
                lat,
                lon,
                heading_deg,
                speed_kt,
                vertical_ft,
                track_number,
            } => {
                let init = AssetInit {
                    id: None,
                    name,
                    domain,
                    identity,
                    position: GeoPoint::new(lat, lon),
                    heading_deg,
                    speed_kt,
                    vertical_ft,
                    track_number,
                    roster: self.variants.roster(),
                    magazine: BTreeMap::new(),
                    ownship: false,
                };
                self.store.create_asset(init, &mut self.events)?;
                Ok(())
            }
            Command::UpdateAsset {
                asset_id,
                name,
                identity,
                domain,
                heading_deg,
                speed_kt,
                vertical_ft,
                target_heading_deg,
                target_speed_kt,
                target_vertical_ft,
                track_number,
            } => {
                let update = AssetUpdate {
                    name,
                    identity,
                    domain,
                    heading_deg,
                    speed_kt,
                    vertical_ft,
                    target_heading_deg,
                    target_speed_kt,
                    target_vertical_ft,
                    track_number,
                };
                self.store.update_asset(asset_id, update, &mut self.events)
            }
            Command::DeleteAsset { asset_id } => self.store.delete_asset(asset_id),
            Command::Fire {
                firer_id,
                category,
                target,
            } => match systems::ballistics::fire(
                &mut self.store,
                &self.variants,
                self.time,
                firer_id,
                category,
                target,
                &mut self.events,
            ) {
                Ok(_) => Ok(()),
                Err(CommandError::MagazineEmpty(category)) => {
                    self.events.push(SimEvent::MagazineEmpty { firer_id, category });
                    Err(CommandError::MagazineEmpty(category))
                }
                Err(err) => Err(err),
            },
            Command::AddWaypoint { asset_id, lat, lon } => {
                let entity = self
                    .store
                    .asset_entity(asset_id)
                    .ok_or(CommandError::UnknownEntity(asset_id))?;
                systems::navigation::add_waypoint(
                    self.store.world_mut(),
                    entity,
                    asset_id,
                    GeoPoint::new(lat, lon),
                )
            }
            Command::RemoveWaypoint { asset_id, index } => {
                let entity = self
                    .store
                    .asset_entity(asset_id)
                    .ok_or(CommandError::UnknownEntity(asset_id))?;
                systems::navigation::remove_waypoint(
                    self.store.world_mut(),
                    entity,
                    asset_id,
                    index,
                    &mut self.events,
                )
            }
            Command::SetRadarEnabled { enabled } => {
                self.radar.enabled = enabled;
                Ok(())
            }
            Command::SetContactDecay { seconds } => {
                let applied = self.radar.set_decay(seconds);
                if applied != seconds {
                    warn!("contact decay {seconds:.0}s clamped to {applied:.0}s");
                }
                Ok(())
            }
            Command::SetBullseye { lat, lon, label } => {
                self.bullseye = Bullseye {
                    position: GeoPoint::new(lat, lon),
                    label,
                };
                Ok(())
            }
            Command::Pause => {
                self.paused = true;
                Ok(())
            }
            Command::Resume => {
                self.paused = false;
                Ok(())
            }
        }
    }
}
