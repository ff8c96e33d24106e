/// 2D spin transforms for the nested-triangle demo
use nalgebra::{Matrix3, Vector2};
use std::f32::consts::PI;

/// Triangle sizes drawn each frame, largest first
pub const SPIN_SIZES: [f32; 4] = [1.0, 0.75, 0.5, 0.25];

/// Front-facing triangle centered on the origin, two floats per vertex
pub const TRIANGLE_POSITIONS: [f32; 6] = [0.0, 1.0, -1.0, -1.0, 1.0, -1.0];

/// Base angle for a frame, oscillating over `[0, 2*PI]`.
pub fn spin_angle(time_ms: f64) -> f32 {
    (std::f64::consts::PI * ((time_ms / 5000.0).sin() + 1.0)) as f32
}

/// Rotation-then-scale transform for one nested triangle.
///
/// The spin rate is proportional to `size`, so the inner triangles turn
/// slower than the outer ones.
pub fn spin_transform(angle: f32, size: f32) -> Matrix3<f32> {
    let rotate = Matrix3::new_rotation(angle * 4.0 * size);
    let scale = Matrix3::new_nonuniform_scaling(&Vector2::new(size, size));
    rotate * scale
}

/// Color ramp keyed on the frame angle and triangle size
pub fn spin_color(angle: f32, size: f32) -> [f32; 4] {
    [angle / PI, size, 0.0, 1.0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;

    #[test]
    fn test_spin_angle_stays_in_range() {
        for step in 0..200 {
            let angle = spin_angle(step as f64 * 157.0);
            assert!(angle >= 0.0);
            assert!(angle <= 2.0 * PI + 1e-6);
        }
    }

    #[test]
    fn test_identity_at_rest() {
        let transform = spin_transform(0.0, 1.0);
        assert!((transform - Matrix3::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_scale_shrinks_vertices() {
        let transform = spin_transform(0.0, 0.5);
        let apex = transform.transform_point(&Point2::new(0.0, 1.0));
        assert!(apex.x.abs() < 1e-6);
        assert!((apex.y - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_color_ramp() {
        let color = spin_color(PI, 0.75);
        assert!((color[0] - 1.0).abs() < 1e-6);
        assert!((color[1] - 0.75).abs() < 1e-6);
        assert_eq!(color[2], 0.0);
        assert_eq!(color[3], 1.0);
    }
}
