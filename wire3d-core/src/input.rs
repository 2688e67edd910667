/// Pointer and scroll interaction: raw deltas to scene transform mutations
use std::f32::consts::PI;

use crate::geometry::Scene;

const TRANSLATION_DIVISOR: f32 = 7.0;
const SCROLL_SENS: f32 = 0.05;

/// Pointer buttons the controller distinguishes. Anything else neither
/// starts nor stops a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary (left) button: drags translate.
    Primary,
    /// Middle/auxiliary button: drags rotate.
    Middle,
    Other,
}

/// Translates pointer/scroll deltas into transform mutations applied to
/// every object in lockstep; there is no per-object camera.
///
/// The two drag modes are independent flags, set by their button's press
/// and cleared by its release wherever the pointer is at the time.
#[derive(Debug)]
pub struct InteractionController {
    translating: bool,
    rotating: bool,
    last_x: f32,
    last_y: f32,
    rotation_sens: f32,
}

impl InteractionController {
    /// Rotation sensitivity is fixed from the surface width at
    /// construction time and intentionally not tracked across resizes.
    pub fn new(surface_width: f32) -> Self {
        Self {
            translating: false,
            rotating: false,
            last_x: 0.0,
            last_y: 0.0,
            rotation_sens: PI / surface_width,
        }
    }

    pub fn pointer_down(&mut self, button: PointerButton, x: f32, y: f32) {
        match button {
            PointerButton::Primary => self.translating = true,
            PointerButton::Middle => self.rotating = true,
            PointerButton::Other => {}
        }
        self.last_x = x;
        self.last_y = y;
    }

    pub fn pointer_up(&mut self, button: PointerButton) {
        match button {
            PointerButton::Primary => self.translating = false,
            PointerButton::Middle => self.rotating = false,
            PointerButton::Other => {}
        }
    }

    /// Apply the move delta to the scene. Returns whether anything was
    /// mutated so the caller can redraw synchronously.
    pub fn pointer_move(&mut self, scene: &mut Scene, x: f32, y: f32) -> bool {
        if !self.translating && !self.rotating {
            return false;
        }

        let dx = x - self.last_x;
        let dy = y - self.last_y;
        self.last_x = x;
        self.last_y = y;

        if self.translating {
            for object in &mut scene.objects {
                object.translation.x += dx / TRANSLATION_DIVISOR;
                object.translation.y -= dy / TRANSLATION_DIVISOR;
            }
        }

        if self.rotating {
            for object in &mut scene.objects {
                object.rotation.x -= dy * self.rotation_sens;
                object.rotation.y -= dx * self.rotation_sens;
            }
        }

        true
    }

    /// Scroll moves every object along the view axis. Always mutates.
    pub fn wheel(&mut self, scene: &mut Scene, delta_y: f32) -> bool {
        for object in &mut scene.objects {
            object.translation.z -= delta_y * SCROLL_SENS;
        }
        true
    }
}
