//! Per-frame simulation step
//!
//! The frame driver owns one `GameState` and calls `tick` exactly once per
//! rendered frame, after the platform shell has drained its event queue.

use log::debug;

use super::collision::evaluate;
use super::enemy::enemy_position;
use super::roll::{Direction, advance_roll_angles, apply_input};
use super::state::{GameState, Outcome};
use crate::consts::FAIL_BANNER_SECS;

/// Input edges collected by the platform shell since the last tick.
///
/// Only press edges arrive here; hold-to-repeat does not exist, so every
/// roll costs its own key press.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Directional presses in arrival order
    pub presses: Vec<Direction>,
}

impl TickInput {
    /// Queue a press edge for the next tick
    pub fn press(&mut self, direction: Direction) {
        self.presses.push(direction);
    }
}

/// Advance the game by one frame.
///
/// Order within the frame: queued rolls, then time and the enemy, then
/// the outcome. On Death the player resets immediately and in full -
/// nothing of the failed attempt survives into the next frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Outcome {
    for &press in &input.presses {
        // Angles advance off the pre-roll pose, position after
        advance_roll_angles(&mut state.roll_angles, state.player.orientation, press);
        state.player = apply_input(state.player, press);
    }

    state.elapsed += dt;
    state.enemy = enemy_position(state.elapsed);

    let outcome = evaluate(&state.player, &state.enemy);
    match outcome {
        Outcome::Death => {
            debug!("death at t={:.2}s: {}", state.elapsed, state.status_line());
            state.reset_player();
            state.fail_banner = FAIL_BANNER_SECS;
        }
        Outcome::Victory => {
            if !state.victory_banner {
                debug!("victory at t={:.2}s", state.elapsed);
            }
        }
        Outcome::Continue => {}
    }
    // The victory banner tracks the condition frame by frame; the fail
    // banner runs down its timer instead
    state.victory_banner = outcome == Outcome::Victory;
    state.fail_banner = (state.fail_banner - dt).max(0.0);

    outcome
}
