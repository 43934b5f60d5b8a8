//! Enumeration types used throughout the kernel.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Operational domain of an asset. The domain fixes the physical envelope
/// (turn/speed/vertical rates, speed cap) and which vertical attribute the
/// asset carries: altitude for Air, depth for SubSurface, none for Surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Air,
    Surface,
    SubSurface,
}

/// Constant physical envelope for a domain.
#[derive(Debug, Clone, Copy)]
pub struct DomainEnvelope {
    /// Turn rate in degrees per second.
    pub turn_rate_dps: f64,
    /// Speed change rate in knots per second.
    pub speed_rate_kts: f64,
    /// Vertical rate in feet per second; None for domains without a
    /// vertical axis.
    pub vertical_rate_fps: Option<f64>,
    /// Maximum speed in knots.
    pub max_speed_kt: f64,
}

impl Domain {
    /// The envelope for this domain. Matching is exhaustive by
    /// construction; there is no fallback row.
    pub const fn envelope(self) -> DomainEnvelope {
        match self {
            Domain::Air => DomainEnvelope {
                turn_rate_dps: AIR_TURN_RATE_DPS,
                speed_rate_kts: AIR_SPEED_RATE_KTS,
                vertical_rate_fps: Some(AIR_VERTICAL_RATE_FPS),
                max_speed_kt: AIR_MAX_SPEED_KT,
            },
            Domain::Surface => DomainEnvelope {
                turn_rate_dps: SURFACE_TURN_RATE_DPS,
                speed_rate_kts: SURFACE_SPEED_RATE_KTS,
                vertical_rate_fps: None,
                max_speed_kt: SURFACE_MAX_SPEED_KT,
            },
            Domain::SubSurface => DomainEnvelope {
                turn_rate_dps: SUBSURFACE_TURN_RATE_DPS,
                speed_rate_kts: SUBSURFACE_SPEED_RATE_KTS,
                vertical_rate_fps: Some(SUBSURFACE_VERTICAL_RATE_FPS),
                max_speed_kt: SUBSURFACE_MAX_SPEED_KT,
            },
        }
    }

    /// Whether assets in this domain carry an altitude/depth attribute.
    pub const fn has_vertical(self) -> bool {
        !matches!(self, Domain::Surface)
    }
}

/// Tactical classification of an asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Identity {
    Friendly,
    Hostile,
    Neutral,
    #[default]
    Unknown,
    /// Detected but not yet evaluated by the operator.
    UnknownUnevaluated,
}

/// Weapon category requested by a fire command and carried by each variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WeaponCategory {
    /// Air-to-air missile.
    Aam,
    /// Air-to-ground missile.
    Agm,
    /// Anti-ship missile.
    Asm,
    /// Surface-to-air missile.
    Sam,
    Torpedo,
}

/// Why an in-flight weapon stopped flying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminationReason {
    /// Closed within the impact radius of its target.
    Impact,
    /// Flew past its self-destruct deadline.
    SelfDestruct,
    /// Bled off below minimum flying speed after fuel exhaustion.
    EnergyLoss,
}

/// Propulsion/guidance phase of an in-flight weapon. Transitions are
/// monotonic: Booster -> Cruise -> BleedOff -> Terminated, never backward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeaponPhase {
    /// High-acceleration launch burn.
    #[default]
    Booster,
    /// Sustainer burn holding max speed.
    Cruise,
    /// Fuel exhausted, decelerating.
    BleedOff,
    /// Flight over; the weapon receives no further integration.
    Terminated(TerminationReason),
}

/// Navigation controller state, derived from the waypoint queue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavState {
    #[default]
    Idle,
    EnRoute,
}
