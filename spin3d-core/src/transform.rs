/// Per-draw matrix pipeline
use nalgebra::Matrix4;

use crate::pose::Pose;

/// Shading variant a scene renders with.
///
/// The variant selects which matrix feeds the inverse-transpose:
/// `Directional` shades in clip space and derives the normal matrix from
/// the full object-to-clip matrix, `PointLight` shades in world space
/// (against an explicit light position) and uses the object-to-world
/// matrix only. The matrix handed to a shader must match the space its
/// lighting math runs in; a mismatch renders wrong lighting, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightingMode {
    Unlit,
    Directional,
    PointLight,
}

/// Matrices for one draw call.
///
/// Entirely derived from the frustum and pose; nothing here survives the
/// draw that consumed it.
#[derive(Debug, Clone, Copy)]
pub struct TransformSet {
    pub object_to_world: Matrix4<f32>,
    /// `view_projection * object_to_world`
    pub object_to_clip: Matrix4<f32>,
    /// Inverse-transpose of the mode's source matrix; identity for
    /// `Unlit`. Shaders consume the upper-left 3x3.
    pub normal_matrix: Matrix4<f32>,
}

/// Transpose of the inverse, for transforming surface normals correctly
/// under non-uniform scale.
///
/// Returns `None` when `source` is singular (for example a zero scale
/// axis) instead of letting NaNs propagate into a shader.
pub fn normal_matrix(source: &Matrix4<f32>) -> Option<Matrix4<f32>> {
    source.try_inverse().map(|inverse| inverse.transpose())
}

/// Computes the matrices for one drawable.
///
/// Returns `None` only when `mode` needs a normal matrix and its source
/// is singular.
pub fn transform_set(
    view_projection: &Matrix4<f32>,
    pose: &Pose,
    mode: LightingMode,
) -> Option<TransformSet> {
    let object_to_world = pose.object_to_world();
    let object_to_clip = view_projection * object_to_world;

    let normals = match mode {
        LightingMode::Unlit => Matrix4::identity(),
        LightingMode::Directional => normal_matrix(&object_to_clip)?,
        LightingMode::PointLight => normal_matrix(&object_to_world)?,
    };

    Some(TransformSet {
        object_to_world,
        object_to_clip,
        normal_matrix: normals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::Frustum;
    use nalgebra::Vector3;

    #[test]
    fn test_normal_direction_survives_nonuniform_scale() {
        let pose = Pose {
            translation: Vector3::zeros(),
            scale: Vector3::new(2.0, 1.0, 1.0),
            rotation_x: 0.0,
            rotation_y: 0.0,
        };
        let world = pose.object_to_world();
        let normals = normal_matrix(&world).unwrap();

        // Shaders consume the upper-left 3x3 of the normal matrix.
        let linear = normals.fixed_view::<3, 3>(0, 0);
        let transformed = (linear * Vector3::new(1.0, 0.0, 0.0)).normalize();
        assert!((transformed.x - 1.0).abs() < 1e-6);
        assert!(transformed.y.abs() < 1e-6);
        assert!(transformed.z.abs() < 1e-6);

        // The position transform stretches x by 2; the raw (unnormalized)
        // normal shrinks by the same factor, keeping it orthogonal to the
        // scaled surface.
        let raw = linear * Vector3::new(1.0, 0.0, 0.0);
        assert!((raw.x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_singular_scale_fails_explicitly() {
        let pose = Pose {
            translation: Vector3::zeros(),
            scale: Vector3::new(0.0, 1.0, 1.0),
            rotation_x: 0.0,
            rotation_y: 0.0,
        };
        let view_projection = Frustum::from_viewport(800, 600, 600.0).matrix();

        assert!(transform_set(&view_projection, &pose, LightingMode::Directional).is_none());
        assert!(transform_set(&view_projection, &pose, LightingMode::PointLight).is_none());
        // Unlit never inverts anything and cannot fail.
        assert!(transform_set(&view_projection, &pose, LightingMode::Unlit).is_some());
    }

    #[test]
    fn test_unlit_normal_matrix_is_identity() {
        let pose = Pose::default();
        let view_projection = Frustum::from_viewport(800, 600, 600.0).matrix();
        let set = transform_set(&view_projection, &pose, LightingMode::Unlit).unwrap();
        assert!((set.normal_matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_clip_depth_matches_closed_form() {
        let frustum = Frustum::new(-400.0, 400.0, -300.0, 300.0, -600.0, 600.0);
        let pose = Pose::new(
            Vector3::new(0.0, 0.0, 200.0),
            Vector3::new(400.0, 400.0, 400.0),
        );
        let set = transform_set(&frustum.matrix(), &pose, LightingMode::Directional).unwrap();

        // The translation column of object-to-clip carries the object's
        // center. z follows the orthographic closed form.
        let expected_z = -(2.0 * 200.0) / (frustum.far - frustum.near)
            - (frustum.far + frustum.near) / (frustum.far - frustum.near);
        let center = set.object_to_clip.column(3);
        assert!(center[0].abs() < 1e-6);
        assert!(center[1].abs() < 1e-6);
        assert!((center[2] - expected_z).abs() < 1e-6);
        assert!((center[3] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_projection_is_left_operand() {
        let frustum = Frustum::new(-400.0, 400.0, -300.0, 300.0, -600.0, 600.0);
        let pose = Pose::new(
            Vector3::new(100.0, 0.0, 0.0),
            Vector3::new(1.0, 1.0, 1.0),
        );
        let view_projection = frustum.matrix();
        let set = transform_set(&view_projection, &pose, LightingMode::Unlit).unwrap();

        let expected = view_projection * pose.object_to_world();
        assert!((set.object_to_clip - expected).norm() < 1e-6);
    }
}
