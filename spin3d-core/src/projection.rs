/// Orthographic viewing volume and projection
use nalgebra::Matrix4;

/// An orthographic viewing volume.
///
/// Bounds are expected to satisfy `left < right`, `bottom < top` and
/// `near < far`. Degenerate volumes produce a singular projection matrix;
/// validating the bounds is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frustum {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Frustum {
    pub fn new(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
            near,
            far,
        }
    }

    /// Volume centered on the drawable area: x and y span half the pixel
    /// size in each direction, z spans `[-depth, depth]`.
    ///
    /// Recompute this whenever the drawable area resizes.
    pub fn from_viewport(width: u32, height: u32, depth: f32) -> Self {
        let half_width = width as f32 / 2.0;
        let half_height = height as f32 / 2.0;
        Self::new(-half_width, half_width, -half_height, half_height, -depth, depth)
    }

    /// Orthographic projection mapping the volume to the canonical clip
    /// cube.
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::new_orthographic(
            self.left,
            self.right,
            self.bottom,
            self.top,
            self.near,
            self.far,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    #[test]
    fn test_from_viewport() {
        let frustum = Frustum::from_viewport(800, 600, 600.0);
        assert_eq!(frustum.left, -400.0);
        assert_eq!(frustum.right, 400.0);
        assert_eq!(frustum.bottom, -300.0);
        assert_eq!(frustum.top, 300.0);
        assert_eq!(frustum.near, -600.0);
        assert_eq!(frustum.far, 600.0);
    }

    #[test]
    fn test_corners_map_to_clip_cube() {
        let frustum = Frustum::new(-400.0, 400.0, -300.0, 300.0, -600.0, 600.0);
        let matrix = frustum.matrix();

        // Eye space looks down -z, so the near plane sits at z = -near and
        // the far plane at z = -far.
        for (x, clip_x) in [(frustum.left, -1.0), (frustum.right, 1.0)] {
            for (y, clip_y) in [(frustum.bottom, -1.0), (frustum.top, 1.0)] {
                for (z, clip_z) in [(-frustum.near, -1.0), (-frustum.far, 1.0)] {
                    let corner = matrix.transform_point(&Point3::new(x, y, z));
                    assert!((corner.x - clip_x).abs() < 1e-6);
                    assert!((corner.y - clip_y).abs() < 1e-6);
                    assert!((corner.z - clip_z).abs() < 1e-6);
                }
            }
        }
    }

    #[test]
    fn test_asymmetric_volume() {
        let frustum = Frustum::new(0.0, 200.0, -50.0, 150.0, -10.0, 30.0);
        let matrix = frustum.matrix();

        // The volume center lands on the clip-cube center.
        let center = matrix.transform_point(&Point3::new(100.0, 50.0, -10.0));
        assert!(center.x.abs() < 1e-6);
        assert!(center.y.abs() < 1e-6);
        assert!(center.z.abs() < 1e-6);
    }
}
