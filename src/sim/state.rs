//! Game state and core simulation types
//!
//! The frame driver owns one `GameState` and is the only mutator; every
//! transition below is a pure function of the current value.

use glam::Vec3;

use super::enemy;

/// Discrete resting pose of the player cube
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Standing on a unit face, occupying one cell
    Upright,
    /// Lying on its side along the z axis, straddling two cells in z
    LyingAlongZ,
    /// Lying on its side along the x axis, straddling two cells in x
    LyingAlongX,
}

/// Player cube: pose plus world position on the half-step grid.
///
/// `y` is not simulated; it is a visual offset selected by the pose
/// (0.0 upright, -0.5 lying). `x` and `z` always land on multiples of 0.5.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerState {
    pub orientation: Orientation,
    pub position: Vec3,
}

impl PlayerState {
    /// The fixed start state: upright on the origin tile
    pub fn initial() -> Self {
        Self {
            orientation: Orientation::Upright,
            position: Vec3::ZERO,
        }
    }
}

/// Visual rotation accumulators for the rolling animation (radians per axis).
///
/// Display-only: these never feed back into position or orientation logic.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RollAngles {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Enemy sphere state, fully derived from elapsed time each frame.
///
/// The enemy is invulnerable; contact only ever affects the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyState {
    pub position: Vec3,
}

/// Per-frame gameplay verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing decided this frame
    Continue,
    /// Left the floor or touched the enemy; the player resets in full
    Death,
    /// Standing upright on the goal tile
    Victory,
}

/// Complete game state, owned by the frame driver
#[derive(Debug, Clone)]
pub struct GameState {
    /// Player cube
    pub player: PlayerState,
    /// Roll animation accumulators (display-only)
    pub roll_angles: RollAngles,
    /// Enemy sphere, recomputed from `elapsed` every tick
    pub enemy: EnemyState,
    /// Elapsed simulation time in seconds
    pub elapsed: f32,
    /// Remaining fail-banner display time in seconds (0 = hidden)
    pub fail_banner: f32,
    /// Whether the victory banner shows this frame
    pub victory_banner: bool,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            player: PlayerState::initial(),
            roll_angles: RollAngles::default(),
            enemy: enemy::enemy_position(0.0),
            elapsed: 0.0,
            fail_banner: 0.0,
            victory_banner: false,
        }
    }

    /// Full player reset after a death. No partial state survives:
    /// position, orientation and roll angles all return to the start.
    pub fn reset_player(&mut self) {
        self.player = PlayerState::initial();
        self.roll_angles = RollAngles::default();
    }

    /// Whether the fail banner should be on screen
    pub fn show_fail(&self) -> bool {
        self.fail_banner > 0.0
    }

    /// One-line player status for the debug overlay
    pub fn status_line(&self) -> String {
        format!(
            "Player: {:?} | Pos: ({:.2}, {:.2}, {:.2})",
            self.player.orientation,
            self.player.position.x,
            self.player.position.y,
            self.player.position.z,
        )
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
