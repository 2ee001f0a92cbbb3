//! Cube Roll - a rolling-cube puzzle over a floating tile floor
//!
//! Core modules:
//! - `sim`: Deterministic simulation (roll state machine, floor table, collisions, enemy path)
//! - `camera`: Orbital and free-look camera math for the rendering shell
//! - `settings`: Runtime preferences

pub mod camera;
pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Roll step when the footprint tips end-over-end (cells)
    pub const ROLL_STEP_LONG: f32 = 1.5;
    /// Roll step when a lying cube rolls sideways along its long axis
    pub const ROLL_STEP_SHORT: f32 = 1.0;
    /// Vertical visual offset while the cube lies on its side
    pub const LYING_Y_OFFSET: f32 = -0.5;

    /// Goal tile - must be reached standing upright
    pub const GOAL_X: f32 = 7.0;
    pub const GOAL_Z: f32 = 4.0;

    /// The enemy sphere patrols a fixed x lane at a fixed height
    pub const ENEMY_X: f32 = 4.0;
    pub const ENEMY_Y: f32 = 0.7;

    /// Enemy contact tolerance along x, per orientation footprint
    pub const CONTACT_X_UPRIGHT: f32 = 0.8;
    pub const CONTACT_X_LYING_Z: f32 = 0.5;
    pub const CONTACT_X_LYING_X: f32 = 1.0;
    /// Enemy contact tolerance along z (exclusive bound, all orientations)
    pub const CONTACT_Z: f32 = 1.0;

    /// How long the fail banner stays up after a death (seconds)
    pub const FAIL_BANNER_SECS: f32 = 4.0;

    /// Tolerance for comparing half-step grid coordinates
    pub const GRID_EPSILON: f32 = 1e-4;
}

/// Compare two half-step grid coordinates.
///
/// Every reachable coordinate is an exact multiple of 0.5, so the epsilon
/// only absorbs rounding drift; it must stay far below 0.5 so a coordinate
/// never matches a neighboring row.
#[inline]
pub fn grid_eq(a: f32, b: f32) -> bool {
    (a - b).abs() <= consts::GRID_EPSILON
}
