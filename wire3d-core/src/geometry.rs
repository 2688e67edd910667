/// Scene data model: shared vertex pool and objects made of wireframe elements
use nalgebra::{Point3, Vector3};

use crate::transform::RotationState;

/// A closed polygon referencing vertices in the scene pool by index.
///
/// Edge i connects `indices[i]` to `indices[(i + 1) % len]`. Faces with
/// fewer than two indices are kept but produce no edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    pub indices: Vec<usize>,
}

impl Face {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Iterate the polygon's edges as index pairs, wrapping around.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let len = self.indices.len();
        let count = if len < 2 { 0 } else { len };
        (0..count).map(move |i| (self.indices[i], self.indices[(i + 1) % len]))
    }
}

/// An open chain of pool vertex indices (the `l` directive).
///
/// Edge i connects `indices[i]` to `indices[i + 1]`; no wraparound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polyline {
    pub indices: Vec<usize>,
}

impl Polyline {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }

    /// Iterate the chain's edges as index pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.indices.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

/// A named group of faces and polylines sharing one rigid transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Object {
    pub name: String,
    pub faces: Vec<Face>,
    pub polylines: Vec<Polyline>,
    pub rotation: RotationState,
    pub translation: Vector3<f32>,
}

impl Object {
    /// Create an empty object with zeroed rotation and translation.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            faces: Vec::new(),
            polylines: Vec::new(),
            rotation: RotationState::zero(),
            translation: Vector3::zeros(),
        }
    }
}

/// A parsed model: one global append-only vertex pool plus the objects
/// referencing it. Loading a new file replaces the whole value.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub vertices: Vec<Point3<f32>>,
    pub objects: Vec<Object>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            objects: Vec::new(),
        }
    }

    /// Create a wireframe cube for demo purposes: 8 vertices, 6 quad faces.
    pub fn cube(size: f32) -> Self {
        let half = size / 2.0;
        let mut scene = Self::new();

        for &z in &[-half, half] {
            scene.vertices.push(Point3::new(-half, -half, z));
            scene.vertices.push(Point3::new(half, -half, z));
            scene.vertices.push(Point3::new(half, half, z));
            scene.vertices.push(Point3::new(-half, half, z));
        }

        let mut object = Object::new("cube");
        object.faces.push(Face::new(vec![0, 1, 2, 3])); // back
        object.faces.push(Face::new(vec![4, 5, 6, 7])); // front
        object.faces.push(Face::new(vec![0, 1, 5, 4])); // bottom
        object.faces.push(Face::new(vec![3, 2, 6, 7])); // top
        object.faces.push(Face::new(vec![0, 3, 7, 4])); // left
        object.faces.push(Face::new(vec![1, 2, 6, 5])); // right
        scene.objects.push(object);

        scene
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_edges_wrap_around() {
        let face = Face::new(vec![0, 1, 2]);
        let edges: Vec<_> = face.edges().collect();
        assert_eq!(edges, vec![(0, 1), (1, 2), (2, 0)]);
    }

    #[test]
    fn test_degenerate_face_has_no_edges() {
        assert_eq!(Face::new(vec![]).edges().count(), 0);
        assert_eq!(Face::new(vec![3]).edges().count(), 0);
    }

    #[test]
    fn test_polyline_edges_are_open() {
        let line = Polyline::new(vec![4, 5, 6]);
        let edges: Vec<_> = line.edges().collect();
        assert_eq!(edges, vec![(4, 5), (5, 6)]);
    }

    #[test]
    fn test_new_object_is_untransformed() {
        let object = Object::new("teapot");
        assert_eq!(object.name, "teapot");
        assert_eq!(object.rotation, RotationState::zero());
        assert_eq!(object.translation, Vector3::zeros());
    }

    #[test]
    fn test_cube_scene_shape() {
        let scene = Scene::cube(2.0);
        assert_eq!(scene.vertices.len(), 8);
        assert_eq!(scene.objects.len(), 1);
        assert_eq!(scene.objects[0].faces.len(), 6);
        for face in &scene.objects[0].faces {
            assert_eq!(face.indices.len(), 4);
            assert!(face.indices.iter().all(|&i| i < 8));
        }
    }
}
