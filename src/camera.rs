//! Camera math for the rendering shell
//!
//! Two modes, toggled at runtime: an orbital look-at camera circling the
//! level, and a free-look camera flown with held movement keys. Pure math
//! over `glam` - the shell feeds it input deltas and a frame dt, and reads
//! back an (eye, view) pair. Nothing here touches the sim.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

/// Fixed look-at point for the orbital camera, roughly the level center
const LOOK_AT: Vec3 = Vec3::new(5.0, 1.0, 3.0);

/// A look-at camera sitting on its target breaks the view basis
const MIN_DISTANCE: f32 = f32::EPSILON;

/// Held movement flags, set on press edges and cleared on release edges
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveFlags {
    pub forward: bool,
    pub left: bool,
    pub backward: bool,
    pub right: bool,
}

/// Camera state
#[derive(Debug, Clone)]
pub struct Camera {
    /// Azimuth in the zx plane, measured from the z axis (radians)
    pub theta: f32,
    /// Elevation from the zx plane (radians, clamped to the poles)
    pub phi: f32,
    /// Orbit distance from the look-at point
    pub distance: f32,
    /// Free-look mode enabled
    pub freelook: bool,
    /// Free-look eye position
    pub position: Vec3,
    /// Held movement keys, free-look only
    pub moving: MoveFlags,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            theta: 0.0,
            phi: 0.0,
            distance: 10.5,
            freelook: true,
            position: Vec3::new(5.0, 3.0, 10.0),
            moving: MoveFlags::default(),
        }
    }
}

impl Camera {
    /// Apply a mouse-look delta in pixels
    pub fn rotate(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.theta -= sensitivity * dx;
        self.phi = (self.phi + sensitivity * dy).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Apply a scroll-wheel zoom delta (orbital mode)
    pub fn zoom(&mut self, scroll: f32, step: f32) {
        self.distance = (self.distance - step * scroll).max(MIN_DISTANCE);
    }

    pub fn toggle_freelook(&mut self) {
        self.freelook = !self.freelook;
    }

    /// Unit offset from the look-at point toward the orbital eye
    fn spherical_offset(&self) -> Vec3 {
        Vec3::new(
            self.phi.cos() * self.theta.sin(),
            self.phi.sin(),
            self.phi.cos() * self.theta.cos(),
        )
    }

    /// Unit view direction in free-look mode
    fn view_dir(&self) -> Vec3 {
        -self.spherical_offset()
    }

    /// Integrate held free-look movement over the frame delta
    pub fn update(&mut self, dt: f32, speed: f32) {
        if !self.freelook {
            return;
        }
        let step = speed * dt;
        let view = self.view_dir();
        let strafe = view.cross(Vec3::Y);
        if self.moving.forward {
            self.position += step * view;
        }
        if self.moving.left {
            self.position -= step * strafe;
        }
        if self.moving.backward {
            self.position -= step * view;
        }
        if self.moving.right {
            self.position += step * strafe;
        }
    }

    /// The (eye, view-direction) pair for this frame
    pub fn eye_and_view(&self) -> (Vec3, Vec3) {
        if self.freelook {
            (self.position, self.view_dir())
        } else {
            let eye = LOOK_AT + self.distance * self.spherical_offset();
            (eye, (LOOK_AT - eye).normalize())
        }
    }
}
