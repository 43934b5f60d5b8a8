//! Kernel constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Domain envelopes ---

/// Air turn rate (degrees per second).
pub const AIR_TURN_RATE_DPS: f64 = 15.0;

/// Air speed change rate (knots per second).
pub const AIR_SPEED_RATE_KTS: f64 = 10.0;

/// Air climb/descent rate (feet per second).
pub const AIR_VERTICAL_RATE_FPS: f64 = 100.0;

/// Air maximum speed (knots).
pub const AIR_MAX_SPEED_KT: f64 = 999.0;

/// Surface turn rate (degrees per second).
pub const SURFACE_TURN_RATE_DPS: f64 = 1.0;

/// Surface speed change rate (knots per second).
pub const SURFACE_SPEED_RATE_KTS: f64 = 2.0;

/// Surface maximum speed (knots).
pub const SURFACE_MAX_SPEED_KT: f64 = 30.0;

/// Sub-surface turn rate (degrees per second).
pub const SUBSURFACE_TURN_RATE_DPS: f64 = 1.0;

/// Sub-surface speed change rate (knots per second).
pub const SUBSURFACE_SPEED_RATE_KTS: f64 = 2.0;

/// Sub-surface depth change rate (feet per second).
pub const SUBSURFACE_VERTICAL_RATE_FPS: f64 = 10.0;

/// Sub-surface maximum speed (knots).
pub const SUBSURFACE_MAX_SPEED_KT: f64 = 30.0;

// --- Convergence tolerances ---
// Floors on the per-tick capture window; at 60 Hz the per-tick step is
// smaller, so a converging value lands exactly on its target.

/// Heading capture tolerance (degrees).
pub const HEADING_TOLERANCE_DEG: f64 = 1.0;

/// Speed capture tolerance (knots).
pub const SPEED_TOLERANCE_KT: f64 = 1.0;

/// Vertical capture tolerance (feet).
pub const VERTICAL_TOLERANCE_FT: f64 = 1.0;

// --- Navigation ---

/// Range at which the active waypoint counts as reached (nautical miles).
pub const WAYPOINT_ARRIVAL_NM: f64 = 0.5;

// --- Weapons ---

/// Guidance turn rate for all in-flight weapons (degrees per second).
pub const WEAPON_TURN_RATE_DPS: f64 = 30.0;

/// Post-fuel deceleration (knots per second).
pub const BLEED_OFF_DECEL_KTS: f64 = 50.0;

/// Below this speed an out-of-fuel weapon terminates (knots).
pub const WEAPON_MIN_SPEED_KT: f64 = 10.0;

/// Range at which a weapon registers an impact on its target
/// (nautical miles).
pub const IMPACT_RANGE_NM: f64 = 0.1;

/// Fuel margin over the nominal max-range flight time.
pub const FUEL_TIME_FACTOR: f64 = 1.2;

/// Self-destruct deadline as a multiple of fuel time.
pub const SELF_DESTRUCT_FACTOR: f64 = 2.0;

// --- Radar contacts ---

/// Mission-time interval between contact sweeps (seconds).
pub const CONTACT_INTERVAL_SECS: f64 = 10.0;

/// Lower bound for the configurable contact decay (seconds).
pub const CONTACT_DECAY_MIN_SECS: f64 = 10.0;

/// Upper bound for the configurable contact decay (seconds).
pub const CONTACT_DECAY_MAX_SECS: f64 = 60.0;

/// Default contact decay (seconds).
pub const CONTACT_DECAY_DEFAULT_SECS: f64 = 30.0;
