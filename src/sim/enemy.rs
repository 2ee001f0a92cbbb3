//! The enemy sphere's patrol path
//!
//! A two-segment composite cubic Bezier through seven fixed control
//! points, sampled with a time-derived parameter that oscillates over
//! [0, 1]. Stateless and total: identical input always yields the
//! identical point.

use glam::Vec3;

use super::state::EnemyState;
use crate::consts::{ENEMY_X, ENEMY_Y};

/// Parameter value where the first segment hands off to the second
pub const SPLINE_SPLIT: f32 = 0.7;

/// Control points. Both segments share p4, so the path is continuous at
/// the split.
const CONTROL_POINTS: [Vec3; 7] = [
    Vec3::new(1.0, 1.0, 3.0),
    Vec3::new(2.0, 1.0, 2.0),
    Vec3::new(3.0, 1.0, 1.0),
    Vec3::new(4.0, 1.0, 2.0),
    Vec3::new(5.0, 1.0, 3.0),
    Vec3::new(6.0, 1.0, 3.0),
    Vec3::new(7.0, 1.0, 3.0),
];

/// Evaluate a cubic Bezier with de Casteljau's lerp ladder
fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let c12 = p0.lerp(p1, t);
    let c23 = p1.lerp(p2, t);
    let c34 = p2.lerp(p3, t);

    let c123 = c12.lerp(c23, t);
    let c234 = c23.lerp(c34, t);
    c123.lerp(c234, t)
}

/// Sample the patrol spline at `t` in [0, 1].
///
/// The second segment's parameter remap multiplies by a literal 2.0, not
/// 1/(1 - split): the curve still passes through p4 at the split, but the
/// far segment plays back slower than an exact reparametrization and stops
/// short of p7 at t = 1.
pub fn spline(t: f32) -> Vec3 {
    let [p1, p2, p3, p4, p5, p6, p7] = CONTROL_POINTS;
    if t <= SPLINE_SPLIT {
        cubic_bezier(p1, p2, p3, p4, t / SPLINE_SPLIT)
    } else {
        cubic_bezier(p4, p5, p6, p7, (t - SPLINE_SPLIT) * 2.0)
    }
}

/// Derive the enemy's world position from elapsed seconds.
///
/// The time parameter oscillates smoothly across [0, 1], so the sphere
/// patrols back and forth forever; it holds a fixed x lane and height
/// while the spline's z maps onto the world band.
pub fn enemy_position(elapsed: f32) -> EnemyState {
    let t = (1.0 + elapsed.sin()) / 2.0;
    let point = spline(t);
    EnemyState {
        position: Vec3::new(ENEMY_X, ENEMY_Y, 2.0 * point.z - 3.0),
    }
}
