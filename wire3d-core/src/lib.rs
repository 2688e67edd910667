/// Wire3D Core Library - wireframe model loading and projection
///
/// This library provides the core of an interactive wireframe viewer:
/// a tolerant OBJ parser building a scene of objects over a shared vertex
/// pool, and the transform/projection pipeline turning that scene into
/// depth-styled 2D line segments for an external display surface.

pub mod error;
pub mod geometry;
pub mod input;
pub mod obj;
pub mod projection;
pub mod render;
pub mod style;
pub mod transform;

// Re-export commonly used types
pub use error::LoadError;
pub use geometry::{Face, Object, Polyline, Scene};
pub use input::{InteractionController, PointerButton};
pub use obj::{load_scene, parse_scene};
pub use projection::{Camera, ScreenPoint, Viewport};
pub use render::{render_scene, Surface};
pub use style::{line_style, LineStyle};
pub use transform::{RotationState, Transform};
