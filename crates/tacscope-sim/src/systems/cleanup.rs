//! Cleanup system: removes weapons that have terminated.
//!
//! Runs after the ballistics engine has reported the termination, so each
//! weapon is reported exactly once and can never be mutated again. Uses a
//! pre-allocated buffer to avoid per-tick allocation.

use tacscope_core::components::WeaponState;
use tacscope_core::enums::WeaponPhase;

use crate::store::EntityStore;

/// Despawn every weapon whose phase reached Terminated.
pub fn run(store: &mut EntityStore, despawn_buffer: &mut Vec<u32>) {
    despawn_buffer.clear();

    for (_entity, weapon) in store.world_mut().query_mut::<&WeaponState>() {
        if matches!(weapon.phase, WeaponPhase::Terminated(_)) {
            despawn_buffer.push(weapon.weapon_id);
        }
    }

    for weapon_id in despawn_buffer.drain(..) {
        store.remove_weapon(weapon_id);
    }
}
