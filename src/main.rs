//! Cube Roll entry point
//!
//! The graphical shell (window, meshes, overlays) is a separate front end;
//! this binary drives the simulation headless, playing the built-in level
//! with a scripted route so a full run can be watched through the logs.

use cube_roll::Settings;
use cube_roll::sim::{Direction, GameState, Outcome, TickInput, tick};

/// A floor-valid route from the start tile to the goal
const ROUTE: [Direction; 12] = [
    Direction::Down,
    Direction::Right,
    Direction::Right,
    Direction::Down,
    Direction::Right,
    Direction::Right,
    Direction::Right,
    Direction::Down,
    Direction::Right,
    Direction::Up,
    Direction::Left,
    Direction::Down,
];

/// Route step that crosses the enemy's patrol lane
const CROSSING_STEP: usize = 4;

const DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: u32 = 20_000;

fn main() {
    env_logger::init();
    log::info!("Cube Roll (native) starting...");
    log::info!("No graphical shell attached - playing the level headless");

    let settings = Settings::load();
    log::debug!("settings: {settings:?}");

    let mut state = GameState::new();
    let mut next_step = 0;
    let mut prev_enemy_z = state.enemy.position.z;

    for frame in 0..MAX_FRAMES {
        let mut input = TickInput::default();
        if next_step < ROUTE.len() && clear_to_roll(&state, next_step, prev_enemy_z) {
            input.press(ROUTE[next_step]);
            next_step += 1;
        }
        prev_enemy_z = state.enemy.position.z;

        match tick(&mut state, &input, DT) {
            Outcome::Victory => {
                log::info!(
                    "victory after {} frames ({:.1}s): {}",
                    frame + 1,
                    state.elapsed,
                    state.status_line()
                );
                return;
            }
            Outcome::Death => {
                log::warn!("death on route step {next_step}, replaying from the start");
                next_step = 0;
            }
            Outcome::Continue => {
                if !input.presses.is_empty() {
                    log::info!("{}", state.status_line());
                }
            }
        }
    }

    log::error!("gave up after {MAX_FRAMES} frames without reaching the goal");
}

/// Whether the autopilot should roll this frame.
///
/// Every step is floor-safe by construction; the only hazard is the
/// enemy's lane. Hold the crossing step until the sphere is low in its
/// patrol band and still heading away, then the very next step clears the
/// lane again before the sphere can swing back.
fn clear_to_roll(state: &GameState, step: usize, prev_enemy_z: f32) -> bool {
    if step != CROSSING_STEP {
        return true;
    }
    let z = state.enemy.position.z;
    z < 1.0 && z < prev_enemy_z
}
