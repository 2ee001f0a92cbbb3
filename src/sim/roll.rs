//! The orientation state machine: one directional press, one discrete roll
//!
//! Rolling toggles between the standing pose and one of two lying poses
//! depending on the roll axis. A lying cube rolling along its long axis
//! keeps its pose and advances a half step (1.0); every other roll swaps
//! pose and advances a full step (1.5) - the extent of the footprint the
//! cube tips across.

use std::f32::consts::FRAC_PI_2;

use super::state::{Orientation, PlayerState, RollAngles};
use crate::consts::*;

/// Directional press edge delivered by the platform shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Movement sign along the affected axis (Left/Up are negative)
    #[inline]
    fn sign(self) -> f32 {
        match self {
            Direction::Left | Direction::Up => -1.0,
            Direction::Right | Direction::Down => 1.0,
        }
    }

    /// True for Left/Right (the x axis), false for Up/Down (the z axis)
    #[inline]
    fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Apply one directional press, producing the next player state.
///
/// Exactly one of six transition rules fires, selected by the current
/// orientation and the input axis. Floor validity is not checked here -
/// the collision evaluator rules on the result when the frame ticks.
pub fn apply_input(player: PlayerState, input: Direction) -> PlayerState {
    let mut next = player;
    match (player.orientation, input.is_horizontal()) {
        (Orientation::Upright, true) => {
            next.orientation = Orientation::LyingAlongX;
            next.position.x += input.sign() * ROLL_STEP_LONG;
            next.position.y = LYING_Y_OFFSET;
        }
        (Orientation::Upright, false) => {
            next.orientation = Orientation::LyingAlongZ;
            next.position.z += input.sign() * ROLL_STEP_LONG;
            next.position.y = LYING_Y_OFFSET;
        }
        (Orientation::LyingAlongZ, true) => {
            // Sideways roll along the long axis keeps the pose
            next.position.x += input.sign() * ROLL_STEP_SHORT;
            next.position.y = LYING_Y_OFFSET;
        }
        (Orientation::LyingAlongZ, false) => {
            next.orientation = Orientation::Upright;
            next.position.z += input.sign() * ROLL_STEP_LONG;
            next.position.y = 0.0;
        }
        (Orientation::LyingAlongX, true) => {
            next.orientation = Orientation::Upright;
            next.position.x += input.sign() * ROLL_STEP_LONG;
            next.position.y = 0.0;
        }
        (Orientation::LyingAlongX, false) => {
            next.position.z += input.sign() * ROLL_STEP_SHORT;
            next.position.y = LYING_Y_OFFSET;
        }
    }
    next
}

/// Advance the roll animation accumulators for a roll out of `orientation`
/// (the pose before `apply_input`).
///
/// Each roll turns the cube 90 degrees about one axis; that axis's
/// accumulator alternates direction once it reaches a half turn, so the
/// animation never winds up unbounded. Off-axis accumulators clear.
/// Output-only: nothing here may flow back into position or orientation.
pub fn advance_roll_angles(angles: &mut RollAngles, orientation: Orientation, input: Direction) {
    match (orientation, input.is_horizontal()) {
        (Orientation::Upright, true) => {
            angles.x = 0.0;
            angles.y = 0.0;
            toggle(&mut angles.z);
        }
        (Orientation::Upright, false) | (Orientation::LyingAlongZ, false) => {
            angles.y = 0.0;
            angles.z = 0.0;
            toggle(&mut angles.x);
        }
        (Orientation::LyingAlongZ, true) => {
            angles.y = 0.0;
            toggle(&mut angles.z);
        }
        (Orientation::LyingAlongX, true) => {
            angles.x = 0.0;
            angles.y = 0.0;
            toggle(&mut angles.z);
        }
        (Orientation::LyingAlongX, false) => {
            angles.x = 0.0;
            toggle(&mut angles.y);
        }
    }
}

/// Step an accumulator by a quarter turn, reversing once it holds two
#[inline]
fn toggle(angle: &mut f32) {
    if *angle < 2.0 * FRAC_PI_2 {
        *angle += FRAC_PI_2;
    } else {
        *angle -= FRAC_PI_2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use proptest::prelude::*;

    #[test]
    fn test_upright_left_then_right_round_trips() {
        let start = PlayerState::initial();

        let left = apply_input(start, Direction::Left);
        assert_eq!(left.orientation, Orientation::LyingAlongX);
        assert_eq!(left.position, Vec3::new(-1.5, -0.5, 0.0));

        let back = apply_input(left, Direction::Right);
        assert_eq!(back.orientation, Orientation::Upright);
        assert_eq!(back.position, Vec3::ZERO);
    }

    #[test]
    fn test_upright_down_then_up_round_trips() {
        let start = PlayerState::initial();

        let down = apply_input(start, Direction::Down);
        assert_eq!(down.orientation, Orientation::LyingAlongZ);
        assert_eq!(down.position, Vec3::new(0.0, -0.5, 1.5));

        let back = apply_input(down, Direction::Up);
        assert_eq!(back.orientation, Orientation::Upright);
        assert_eq!(back.position, Vec3::ZERO);
    }

    #[test]
    fn test_lying_cube_slides_by_half_step_along_its_axis() {
        let lying_z = apply_input(PlayerState::initial(), Direction::Down);

        // Rolling sideways keeps the pose and moves one cell
        let slid = apply_input(lying_z, Direction::Right);
        assert_eq!(slid.orientation, Orientation::LyingAlongZ);
        assert_eq!(slid.position, Vec3::new(1.0, -0.5, 1.5));

        let lying_x = apply_input(PlayerState::initial(), Direction::Right);
        let slid = apply_input(lying_x, Direction::Down);
        assert_eq!(slid.orientation, Orientation::LyingAlongX);
        assert_eq!(slid.position, Vec3::new(1.5, -0.5, 1.0));
    }

    #[test]
    fn test_standing_up_restores_zero_height() {
        let lying_x = apply_input(PlayerState::initial(), Direction::Right);
        assert_eq!(lying_x.position.y, -0.5);

        let upright = apply_input(lying_x, Direction::Right);
        assert_eq!(upright.orientation, Orientation::Upright);
        assert_eq!(upright.position.y, 0.0);
    }

    #[test]
    fn test_roll_angle_alternates_after_half_turn() {
        use std::f32::consts::FRAC_PI_2;
        let mut angles = RollAngles::default();

        // Repeated rolls about z: 0 -> 90 -> 180 -> 90 -> 180 -> ...
        advance_roll_angles(&mut angles, Orientation::Upright, Direction::Left);
        assert_eq!(angles.z, FRAC_PI_2);
        advance_roll_angles(&mut angles, Orientation::LyingAlongX, Direction::Right);
        assert_eq!(angles.z, 2.0 * FRAC_PI_2);
        advance_roll_angles(&mut angles, Orientation::Upright, Direction::Left);
        assert_eq!(angles.z, FRAC_PI_2);
    }

    #[test]
    fn test_roll_angle_off_axis_accumulators_clear() {
        use std::f32::consts::FRAC_PI_2;
        let mut angles = RollAngles {
            x: FRAC_PI_2,
            y: 0.0,
            z: FRAC_PI_2,
        };

        // An upright roll about x clears y and z
        advance_roll_angles(&mut angles, Orientation::Upright, Direction::Down);
        assert_eq!(angles.z, 0.0);
        assert_eq!(angles.y, 0.0);
        assert_eq!(angles.x, 2.0 * FRAC_PI_2);
    }

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::Left),
            Just(Direction::Right),
            Just(Direction::Up),
            Just(Direction::Down),
        ]
    }

    proptest! {
        /// Every state reachable from the start stays on the half-step grid
        #[test]
        fn positions_stay_on_half_step_grid(
            moves in prop::collection::vec(direction_strategy(), 0..64)
        ) {
            let mut player = PlayerState::initial();
            for m in moves {
                player = apply_input(player, m);
                prop_assert!((player.position.x * 2.0).fract().abs() < 1e-4);
                prop_assert!((player.position.z * 2.0).fract().abs() < 1e-4);
            }
        }

        /// y is always the pose's visual offset, never anything else
        #[test]
        fn height_follows_orientation(
            moves in prop::collection::vec(direction_strategy(), 1..64)
        ) {
            let mut player = PlayerState::initial();
            for m in moves {
                player = apply_input(player, m);
            }
            let expected = match player.orientation {
                Orientation::Upright => 0.0,
                _ => -0.5,
            };
            prop_assert_eq!(player.position.y, expected);
        }

        /// A same-axis reverse input undoes any single roll
        #[test]
        fn reverse_input_round_trips(
            moves in prop::collection::vec(direction_strategy(), 0..32),
            last in direction_strategy()
        ) {
            let mut player = PlayerState::initial();
            for m in moves {
                player = apply_input(player, m);
            }
            let reverse = match last {
                Direction::Left => Direction::Right,
                Direction::Right => Direction::Left,
                Direction::Up => Direction::Down,
                Direction::Down => Direction::Up,
            };
            let rolled = apply_input(player, last);
            let back = apply_input(rolled, reverse);
            prop_assert_eq!(back, player);
        }
    }
}
