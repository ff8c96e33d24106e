/// Input-driven scene state and the demo scene definitions
use nalgebra::Vector3;

use crate::pose::{pointer_rotation, Pose};

/// Depth half-extent of the demo frustums, in pixels
pub const FRUSTUM_DEPTH: f32 = 600.0;

/// Background color shared by all demos
pub const CLEAR_COLOR: [f32; 4] = [0.0, 0.1, 0.0, 1.0];

/// Light position for the point-light scene, world space
pub const LIGHT_WORLD_POSITION: [f32; 3] = [-2.0, 2.0, -2.0];

/// Base color for the point-light scene
pub const LIT_BASE_COLOR: [f32; 4] = [0.2, 1.0, 0.2, 1.0];

/// Default specular exponent for the lit scene
pub const DEFAULT_SHININESS: f32 = 150.0;

/// Static placement of one drawable; rotation comes from the shared
/// scene state
#[derive(Debug, Clone, Copy)]
pub struct Placement {
    pub translation: [f32; 3],
    pub scale: [f32; 3],
}

impl Placement {
    /// Pose for this drawable under the state's current rotation.
    pub fn pose(&self, state: &SceneState) -> Pose {
        state.posed(Vector3::from(self.translation), Vector3::from(self.scale))
    }
}

/// The two-cube scene, larger cube first
pub const CUBE_SCENE: [Placement; 2] = [
    Placement {
        translation: [0.0, 0.0, 200.0],
        scale: [400.0, 400.0, 400.0],
    },
    Placement {
        translation: [-200.0, 200.0, 0.0],
        scale: [200.0, 200.0, 200.0],
    },
];

/// The point-light scene
pub const LIT_SCENE: [Placement; 1] = [Placement {
    translation: [0.0, 0.0, 0.0],
    scale: [400.0, 400.0, 400.0],
}];

/// Rotation and material state owned by a frontend's event loop.
///
/// Event handlers mutate this through the methods below and the renderer
/// reads it back within the same synchronous call. Keeping it on the
/// loop, not in module globals, is deliberate.
#[derive(Debug, Clone, Copy)]
pub struct SceneState {
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub shininess: f32,
}

impl SceneState {
    pub fn new() -> Self {
        Self {
            rotation_x: 0.0,
            rotation_y: 0.0,
            shininess: DEFAULT_SHININESS,
        }
    }

    /// Applies the absolute pointer mapping to the shared rotation.
    pub fn pointer_moved(&mut self, nx: f32, ny: f32) {
        let (rotation_x, rotation_y) = pointer_rotation(nx, ny);
        self.rotation_x = rotation_x;
        self.rotation_y = rotation_y;
    }

    pub fn set_shininess(&mut self, value: f32) {
        self.shininess = value;
    }

    /// Pose for one drawable sharing this state's rotation.
    pub fn posed(&self, translation: Vector3<f32>, scale: Vector3<f32>) -> Pose {
        Pose {
            translation,
            scale,
            rotation_x: self.rotation_x,
            rotation_y: self.rotation_y,
        }
    }
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pointer_zeroes_rotation() {
        let mut state = SceneState::new();
        state.pointer_moved(0.9, 0.2);
        state.pointer_moved(0.5, 0.5);
        assert!(state.rotation_x.abs() < 1e-6);
        assert!(state.rotation_y.abs() < 1e-6);
    }

    #[test]
    fn test_placements_share_rotation() {
        let mut state = SceneState::new();
        state.pointer_moved(0.75, 0.25);

        let large = CUBE_SCENE[0].pose(&state);
        let small = CUBE_SCENE[1].pose(&state);
        assert_eq!(large.rotation_x, small.rotation_x);
        assert_eq!(large.rotation_y, small.rotation_y);
        assert_eq!(large.translation, Vector3::new(0.0, 0.0, 200.0));
        assert_eq!(small.scale, Vector3::new(200.0, 200.0, 200.0));
    }
}
