//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - State transitions are pure functions of (state, input)
//! - The frame driver owns the single mutable `GameState`
//! - Time arrives as an elapsed-seconds scalar, never read from a clock here
//! - No rendering or platform dependencies

pub mod collision;
pub mod enemy;
pub mod floor;
pub mod roll;
pub mod state;
pub mod tick;

pub use collision::{enemy_contact, evaluate, player_off_floor, victory};
pub use enemy::{enemy_position, spline};
pub use floor::{FloorRow, is_on_floor};
pub use roll::{Direction, advance_roll_angles, apply_input};
pub use state::{EnemyState, GameState, Orientation, Outcome, PlayerState, RollAngles};
pub use tick::{TickInput, tick};
