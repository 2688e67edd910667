/// Perspective projection and screen-space mapping
use nalgebra::Point3;

/// Camera-space depths at or below this are unplottable, not an error.
pub const PROJECTION_EPSILON: f32 = 0.0001;

/// A point on the 2D display surface, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

/// Pinhole camera at the origin looking down +Z.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub focal_length: f32,
}

impl Camera {
    pub fn new(focal_length: f32) -> Self {
        Self { focal_length }
    }

    /// Perspective divide into normalized device coordinates, keeping the
    /// camera-space depth in `z`. Returns `None` for points at or behind
    /// the camera plane; callers skip those rather than treating them as
    /// an error.
    pub fn project(&self, point: &Point3<f32>) -> Option<Point3<f32>> {
        if point.z <= PROJECTION_EPSILON {
            return None;
        }
        Some(Point3::new(
            point.x / point.z * self.focal_length,
            point.y / point.z * self.focal_length,
            point.z,
        ))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(1.0)
    }
}

/// Target surface rectangle, mapping NDC [-1, +1] on both axes to pixels.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// Affine remap from NDC to surface pixels, flipping Y (device up is
    /// surface-row down). Points outside [-1, +1] still map; clipping is
    /// the surface's concern.
    pub fn map_to_screen(&self, ndc: &Point3<f32>) -> ScreenPoint {
        ScreenPoint {
            x: (ndc.x + 1.0) / 2.0 * self.width,
            y: (1.0 - (ndc.y + 1.0) / 2.0) * self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_point_in_front() {
        let camera = Camera::default();
        let p = camera.project(&Point3::new(1.0, 1.0, 10.0)).unwrap();
        assert!((p.x - 0.1).abs() < 1e-6);
        assert!((p.y - 0.1).abs() < 1e-6);
        assert!((p.z - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_project_near_plane_is_unplottable() {
        let camera = Camera::default();
        assert!(camera.project(&Point3::new(1.0, 1.0, 0.00005)).is_none());
        assert!(camera.project(&Point3::new(1.0, 1.0, 0.0)).is_none());
        assert!(camera.project(&Point3::new(1.0, 1.0, -3.0)).is_none());
    }

    #[test]
    fn test_focal_length_scales_ndc() {
        let camera = Camera::new(2.0);
        let p = camera.project(&Point3::new(1.0, -1.0, 4.0)).unwrap();
        assert!((p.x - 0.5).abs() < 1e-6);
        assert!((p.y + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_map_to_screen_corners() {
        let viewport = Viewport::new(200, 100);
        let top_left = viewport.map_to_screen(&Point3::new(-1.0, 1.0, 1.0));
        assert_eq!(top_left, ScreenPoint { x: 0.0, y: 0.0 });

        let bottom_right = viewport.map_to_screen(&Point3::new(1.0, -1.0, 1.0));
        assert_eq!(
            bottom_right,
            ScreenPoint {
                x: 200.0,
                y: 100.0
            }
        );

        let center = viewport.map_to_screen(&Point3::new(0.0, 0.0, 1.0));
        assert_eq!(center, ScreenPoint { x: 100.0, y: 50.0 });
    }

    #[test]
    fn test_map_to_screen_does_not_clip() {
        let viewport = Viewport::new(100, 100);
        let outside = viewport.map_to_screen(&Point3::new(3.0, 0.0, 1.0));
        assert_eq!(outside.x, 200.0);
    }
}
