/// Wireframe render pipeline: scene edges to surface draw calls
use nalgebra::{Matrix4, Point3, Vector3};

use crate::geometry::Scene;
use crate::projection::{Camera, ScreenPoint, Viewport};
use crate::style::{line_style, LineStyle};
use crate::transform::Transform;

/// The external 2D drawing surface. Implementations apply the computed
/// draw calls; the pipeline never sees pixels.
pub trait Surface {
    fn clear(&mut self);
    fn draw_segment(&mut self, p1: ScreenPoint, p2: ScreenPoint, style: LineStyle);
}

/// Draw every edge of every object onto a cleared surface.
///
/// Iteration order is deterministic: objects in creation order, faces
/// before polylines, edges in element order. An edge with an endpoint at
/// or behind the camera is skipped whole.
pub fn render_scene(scene: &Scene, camera: &Camera, viewport: &Viewport, surface: &mut impl Surface) {
    surface.clear();
    for object in &scene.objects {
        let rotation = Transform::rotation_matrix(&object.rotation);
        for face in &object.faces {
            for (a, b) in face.edges() {
                render_edge(scene, &rotation, &object.translation, a, b, camera, viewport, surface);
            }
        }
        for polyline in &object.polylines {
            for (a, b) in polyline.edges() {
                render_edge(scene, &rotation, &object.translation, a, b, camera, viewport, surface);
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn render_edge(
    scene: &Scene,
    rotation: &Matrix4<f32>,
    translation: &Vector3<f32>,
    a: usize,
    b: usize,
    camera: &Camera,
    viewport: &Viewport,
    surface: &mut impl Surface,
) {
    let (Some(va), Some(vb)) = (scene.vertices.get(a), scene.vertices.get(b)) else {
        return;
    };

    let ca = to_camera_space(va, rotation, translation);
    let cb = to_camera_space(vb, rotation, translation);

    // Depth styling reads camera-space z before the perspective divide
    let depth = (ca.z + cb.z) / 2.0;

    let (Some(na), Some(nb)) = (camera.project(&ca), camera.project(&cb)) else {
        return;
    };

    surface.draw_segment(
        viewport.map_to_screen(&na),
        viewport.map_to_screen(&nb),
        line_style(depth),
    );
}

fn to_camera_space(
    vertex: &Point3<f32>,
    rotation: &Matrix4<f32>,
    translation: &Vector3<f32>,
) -> Point3<f32> {
    rotation.transform_point(vertex) + translation
}
