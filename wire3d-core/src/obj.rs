/// Tolerant OBJ wireframe parser
///
/// Line-oriented: each directive parses independently and a malformed
/// token is dropped at the finest granularity that keeps the rest of the
/// file intact. A single bad index loses only itself, a bad coordinate
/// loses only its vertex line, and nothing aborts the load.
use std::fs;
use std::path::Path;

use nom::{
    branch::alt,
    character::complete::{multispace0, multispace1},
    combinator::eof,
    number::complete::float,
    sequence::terminated,
    IResult,
};
use nalgebra::Point3;
use tracing::warn;

use crate::error::LoadError;
use crate::geometry::{Face, Object, Polyline, Scene};

/// Read and parse a model file. Only the `.obj` extension is accepted;
/// rejection leaves the caller's current scene untouched since a new
/// `Scene` is only ever returned on success.
pub fn load_scene(path: impl AsRef<Path>) -> Result<Scene, LoadError> {
    let path = path.as_ref();
    if path.extension().and_then(|e| e.to_str()) != Some("obj") {
        return Err(LoadError::UnsupportedExtension(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|source| LoadError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_scene(&text))
}

/// Parse model text into a fresh scene. Never fails: a file with zero
/// well-formed directives yields an empty scene.
pub fn parse_scene(text: &str) -> Scene {
    let mut scene = Scene::new();

    for (line_no, raw_line) in text.lines().enumerate() {
        // Trailing comments go first, then surrounding whitespace
        let line = match raw_line.find('#') {
            Some(i) => &raw_line[..i],
            None => raw_line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let tag = line.split_whitespace().next().unwrap_or("");
        let rest = &line[tag.len()..];

        match tag {
            "o" => {
                let name = rest.split_whitespace().collect::<Vec<_>>().join(" ");
                let name = if name.is_empty() {
                    format!("object_{}", scene.objects.len())
                } else {
                    name
                };
                // A repeated name still starts a new object
                scene.objects.push(Object::new(name));
            }
            "v" => {
                match vertex_coords(rest) {
                    Ok((_, point))
                        if point.x.is_finite() && point.y.is_finite() && point.z.is_finite() =>
                    {
                        ensure_object(&mut scene);
                        scene.vertices.push(point);
                    }
                    _ => {
                        warn!(line = line_no + 1, "skipping vertex with malformed coordinates");
                    }
                }
            }
            "f" | "l" => {
                // Unlike vertices, elements need an explicit current object
                let pool_len = scene.vertices.len();
                let Some(object) = scene.objects.last_mut() else {
                    warn!(line = line_no + 1, tag, "element before any object, dropped");
                    continue;
                };
                let indices = parse_indices(rest, pool_len, line_no + 1);
                if tag == "f" {
                    object.faces.push(Face::new(indices));
                } else {
                    object.polylines.push(Polyline::new(indices));
                }
            }
            _ => {} // unknown directives are ignored
        }
    }

    scene
}

/// Make sure a current object exists, creating a default-named one for
/// files that start with vertex data before any `o` directive.
fn ensure_object(scene: &mut Scene) {
    if scene.objects.is_empty() {
        scene.objects.push(Object::new("default"));
    }
}

/// Three whitespace-separated floats. The third must be followed by
/// whitespace or end of line so a fused trailing token rejects the line.
fn vertex_coords(input: &str) -> IResult<&str, Point3<f32>> {
    let (input, _) = multispace0(input)?;
    let (input, x) = terminated(float, multispace1)(input)?;
    let (input, y) = terminated(float, multispace1)(input)?;
    let (input, z) = terminated(float, alt((multispace1, eof)))(input)?;
    Ok((input, Point3::new(x, y, z)))
}

/// Resolve the vertex indices of an `f`/`l` directive against the pool as
/// it stands right now. Each token keeps only the part before the first
/// `/` (the `v/vt/vn` form, texture and normal references unused).
/// Positive indices are 1-based, negative ones count back from the end of
/// the pool; zero, non-integer, and out-of-range tokens are dropped
/// individually.
fn parse_indices(rest: &str, pool_len: usize, line_no: usize) -> Vec<usize> {
    let mut indices = Vec::new();
    for token in rest.split_whitespace() {
        let head = token.split('/').next().unwrap_or("");
        let raw: i64 = match head.parse() {
            Ok(0) | Err(_) => {
                warn!(line = line_no, token, "skipping non-integer or zero vertex index");
                continue;
            }
            Ok(raw) => raw,
        };
        let resolved = if raw > 0 {
            raw - 1
        } else {
            pool_len as i64 + raw
        };
        if (0..pool_len as i64).contains(&resolved) {
            indices.push(resolved as usize);
        } else {
            warn!(line = line_no, token, "skipping out-of-range vertex index");
        }
    }
    indices
}
