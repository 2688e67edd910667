/// Depth-based line styling: width and opacity from camera-space depth
///
/// Width and alpha use independent depth windows (5..50 and 5..150). The
/// asymmetry matches the rendered look and must not be unified.

const NEAR_Z: f32 = 5.0;

const WIDTH_FAR_Z: f32 = 50.0;
const MAX_WIDTH: f32 = 6.0;
const MIN_WIDTH: f32 = 0.5;

const ALPHA_FAR_Z: f32 = 150.0;
const ALPHA_FLOOR: f32 = 0.15;

/// Stroke parameters for one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    /// Stroke width in pixels, thicker when nearer.
    pub width: f32,
    /// Opacity in [ALPHA_FLOOR, 1.0], brighter when nearer.
    pub alpha: f32,
}

/// Linear width falloff over the 5..50 depth window, clamped outside it.
pub fn depth_to_width(z: f32) -> f32 {
    let t = ((z - NEAR_Z) / (WIDTH_FAR_Z - NEAR_Z)).clamp(0.0, 1.0);
    MAX_WIDTH + (MIN_WIDTH - MAX_WIDTH) * t
}

/// Linear alpha falloff over the 5..150 depth window with a visibility
/// floor so far geometry never fully disappears.
pub fn depth_to_alpha(z: f32) -> f32 {
    let t = ((z - NEAR_Z) / (ALPHA_FAR_Z - NEAR_Z)).clamp(0.0, 1.0);
    let nearness = 1.0 - t;
    ALPHA_FLOOR + (1.0 - ALPHA_FLOOR) * nearness
}

/// Style for a segment whose endpoints average to depth `z`.
pub fn line_style(z: f32) -> LineStyle {
    LineStyle {
        width: depth_to_width(z),
        alpha: depth_to_alpha(z),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_window() {
        assert!((depth_to_width(5.0) - 6.0).abs() < 1e-6);
        assert!((depth_to_width(50.0) - 0.5).abs() < 1e-6);
        // Clamped beyond the far edge, no further decrease
        assert!((depth_to_width(100.0) - 0.5).abs() < 1e-6);
        // Clamped before the near edge too
        assert!((depth_to_width(1.0) - 6.0).abs() < 1e-6);
    }

    #[test]
    fn test_alpha_window() {
        assert!((depth_to_alpha(5.0) - 1.0).abs() < 1e-6);
        assert!((depth_to_alpha(150.0) - 0.15).abs() < 1e-6);
        assert!((depth_to_alpha(1000.0) - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_alpha_midpoint() {
        // Halfway through the 5..150 window: 0.15 + 0.85 * 0.5
        assert!((depth_to_alpha(5.0 + 72.5) - 0.575).abs() < 1e-5);
    }

    #[test]
    fn test_windows_are_independent() {
        // At z = 50 width has bottomed out while alpha is still fading
        let style = line_style(50.0);
        assert!((style.width - 0.5).abs() < 1e-6);
        assert!(style.alpha > 0.15 + 1e-3);
        assert!(style.alpha < 1.0 - 1e-3);
    }
}
