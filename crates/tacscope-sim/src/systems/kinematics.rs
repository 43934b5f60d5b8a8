//! Kinematics integrator.
//!
//! Converges each asset's heading, speed, and vertical attribute toward
//! its pending targets at the domain rate, then advances position along
//! the post-update heading. State keeps full f64 precision; any rounding
//! is the renderer's concern.

use hecs::World;

use tacscope_core::components::{AssetInfo, Kinematics, MotionTarget};
use tacscope_core::constants::*;
use tacscope_core::types::GeoPoint;

/// Run one integration step over every asset.
pub fn run(world: &mut World, dt: f64) {
    for (_entity, (info, kin, target, pos)) in
        world.query_mut::<(&AssetInfo, &mut Kinematics, &mut MotionTarget, &mut GeoPoint)>()
    {
        let env = info.domain.envelope();

        if let Some(commanded) = target.heading_deg {
            let (heading, converged) =
                converge_heading(kin.heading_deg, commanded, env.turn_rate_dps, dt);
            kin.heading_deg = heading;
            if converged {
                target.heading_deg = None;
            }
        }

        if let Some(commanded) = target.speed_kt {
            let (speed, converged) = converge_linear(
                kin.speed_kt,
                commanded,
                env.speed_rate_kts,
                SPEED_TOLERANCE_KT,
                dt,
            );
            kin.speed_kt = speed;
            if converged {
                target.speed_kt = None;
            }
        }

        if let (Some(rate), Some(current), Some(commanded)) =
            (env.vertical_rate_fps, kin.vertical_ft, target.vertical_ft)
        {
            let (vertical, converged) =
                converge_linear(current, commanded, rate, VERTICAL_TOLERANCE_FT, dt);
            kin.vertical_ft = Some(vertical);
            if converged {
                target.vertical_ft = None;
            }
        }

        let distance_nm = kin.speed_kt * dt / 3600.0;
        if distance_nm > 0.0 {
            *pos = tacscope_geo::advance(*pos, kin.heading_deg, distance_nm);
        }
    }
}

/// Step `value` toward `target` at `rate` per second. The value snaps
/// exactly onto the target once the remaining difference fits in the
/// capture window; the tolerance only widens that window when it exceeds
/// one step's travel (coarse dt).
pub(crate) fn converge_linear(
    value: f64,
    target: f64,
    rate: f64,
    tolerance: f64,
    dt: f64,
) -> (f64, bool) {
    let diff = target - value;
    let capture = dt * rate.max(tolerance);
    if diff.abs() <= capture {
        (target, true)
    } else {
        (value + (rate * dt).copysign(diff), false)
    }
}

/// Heading variant of [`converge_linear`]: rotates through the shorter
/// arc and keeps the result normalized to [0, 360).
pub(crate) fn converge_heading(value: f64, target: f64, rate: f64, dt: f64) -> (f64, bool) {
    let diff = shortest_arc(value, target);
    let capture = dt * rate.max(HEADING_TOLERANCE_DEG);
    if diff.abs() <= capture {
        (target.rem_euclid(360.0), true)
    } else {
        ((value + (rate * dt).copysign(diff)).rem_euclid(360.0), false)
    }
}

/// Signed shortest rotation from `from` to `to`, in (-180, 180].
pub(crate) fn shortest_arc(from: f64, to: f64) -> f64 {
    let diff = (to - from).rem_euclid(360.0);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}
