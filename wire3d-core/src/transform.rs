/// Rotation state and model transform construction
use nalgebra::{Matrix4, Vector3};

/// Rotation state around three axes (in radians)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dx: f32, dy: f32, dz: f32) {
        self.x += dx;
        self.y += dy;
        self.z += dz;
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

/// Transform builder for 3D transformations
pub struct Transform;

impl Transform {
    pub fn rotation_x(theta: f32) -> Matrix4<f32> {
        Matrix4::new_rotation(Vector3::new(theta, 0.0, 0.0))
    }

    pub fn rotation_y(theta: f32) -> Matrix4<f32> {
        Matrix4::new_rotation(Vector3::new(0.0, theta, 0.0))
    }

    pub fn rotation_z(theta: f32) -> Matrix4<f32> {
        Matrix4::new_rotation(Vector3::new(0.0, 0.0, theta))
    }

    /// Create a rotation matrix from a rotation state.
    ///
    /// Rotations apply in X, then Y, then Z order. The order is not
    /// commutative and determines gimbal behavior, so it must stay fixed.
    pub fn rotation_matrix(rotation: &RotationState) -> Matrix4<f32> {
        Self::rotation_z(rotation.z) * Self::rotation_y(rotation.y) * Self::rotation_x(rotation.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_rotation_state() {
        let mut state = RotationState::zero();
        assert_eq!(state.x, 0.0);
        assert_eq!(state.y, 0.0);
        assert_eq!(state.z, 0.0);

        state.rotate(0.1, 0.2, 0.3);
        assert!((state.x - 0.1).abs() < 1e-6);
        assert!((state.y - 0.2).abs() < 1e-6);
        assert!((state.z - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_identity_rotation() {
        let rotation = RotationState::zero();
        let matrix = Transform::rotation_matrix(&rotation);
        assert!((matrix - Matrix4::identity()).norm() < 1e-6);
    }

    #[test]
    fn test_rotation_x_is_right_handed() {
        // +Y rotates toward +Z around the X axis
        let p = Transform::rotation_x(FRAC_PI_2).transform_point(&Point3::new(0.0, 1.0, 0.0));
        assert!((p - Point3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_rotation_y_is_right_handed() {
        // +Z rotates toward +X around the Y axis
        let p = Transform::rotation_y(FRAC_PI_2).transform_point(&Point3::new(0.0, 0.0, 1.0));
        assert!((p - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-6);
    }

    #[test]
    fn test_composite_applies_x_then_y_then_z() {
        let rotation = RotationState::new(0.3, -0.7, 1.1);
        let composite = Transform::rotation_matrix(&rotation);

        let p = Point3::new(0.5, -2.0, 3.0);
        let step_by_step = Transform::rotation_z(rotation.z).transform_point(
            &Transform::rotation_y(rotation.y)
                .transform_point(&Transform::rotation_x(rotation.x).transform_point(&p)),
        );

        assert!((composite.transform_point(&p) - step_by_step).norm() < 1e-5);
    }
}
