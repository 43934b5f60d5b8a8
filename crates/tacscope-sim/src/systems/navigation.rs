//! Navigation controller.
//!
//! Steers EnRoute assets at the head of their waypoint queue. The bearing
//! is recomputed every tick, never cached, so heading keeps tracking the
//! asset's own progress. Arrival pops the waypoint and either re-steers at
//! the next one or clears every pending target and goes Idle.

use hecs::{Entity, World};

use tacscope_core::components::{AssetInfo, MotionTarget, Route};
use tacscope_core::constants::WAYPOINT_ARRIVAL_NM;
use tacscope_core::errors::CommandError;
use tacscope_core::events::SimEvent;
use tacscope_core::types::GeoPoint;

/// Run the waypoint state machine for every asset. Called after the
/// kinematics integrator, so ranges use post-integration positions.
pub fn run(world: &mut World, events: &mut Vec<SimEvent>) {
    for (_entity, (info, pos, route, target)) in
        world.query_mut::<(&AssetInfo, &GeoPoint, &mut Route, &mut MotionTarget)>()
    {
        if route.waypoints.is_empty() {
            continue;
        }
        steer(info.asset_id, *pos, route, target, events);
    }
}

/// Append a waypoint. An empty queue transitions Idle -> EnRoute and the
/// asset starts turning at the new waypoint immediately.
pub fn add_waypoint(
    world: &mut World,
    entity: Entity,
    asset_id: u32,
    waypoint: GeoPoint,
) -> Result<(), CommandError> {
    let (pos, route, target) = world
        .query_one_mut::<(&GeoPoint, &mut Route, &mut MotionTarget)>(entity)
        .map_err(|_| CommandError::UnknownEntity(asset_id))?;

    let was_idle = route.waypoints.is_empty();
    route.waypoints.push(waypoint);
    if was_idle {
        let (bearing, _) = tacscope_geo::bearing_and_range(*pos, waypoint);
        target.heading_deg = Some(bearing);
    }
    Ok(())
}

/// Remove a waypoint by queue index. Removing the active head triggers
/// the same recompute-or-idle logic as arrival.
pub fn remove_waypoint(
    world: &mut World,
    entity: Entity,
    asset_id: u32,
    index: usize,
    events: &mut Vec<SimEvent>,
) -> Result<(), CommandError> {
    let (pos, route, target) = world
        .query_one_mut::<(&GeoPoint, &mut Route, &mut MotionTarget)>(entity)
        .map_err(|_| CommandError::UnknownEntity(asset_id))?;

    if index >= route.waypoints.len() {
        return Err(CommandError::WaypointIndex { asset_id, index });
    }
    route.waypoints.remove(index);
    if index == 0 {
        steer(asset_id, *pos, route, target, events);
    }
    Ok(())
}

/// Point the asset at the head of its queue, popping any waypoint already
/// inside the arrival radius. A queue that drains clears every pending
/// target (heading, speed, vertical) and leaves the asset Idle.
fn steer(
    asset_id: u32,
    pos: GeoPoint,
    route: &mut Route,
    target: &mut MotionTarget,
    events: &mut Vec<SimEvent>,
) {
    loop {
        match route.waypoints.first() {
            Some(&waypoint) => {
                let (bearing, range) = tacscope_geo::bearing_and_range(pos, waypoint);
                if range < WAYPOINT_ARRIVAL_NM {
                    route.waypoints.remove(0);
                    events.push(SimEvent::WaypointReached { asset_id });
                    continue;
                }
                target.heading_deg = Some(bearing);
                return;
            }
            None => {
                target.clear();
                return;
            }
        }
    }
}
