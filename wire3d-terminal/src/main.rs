/// wire3d terminal viewer
///
/// Loads a wireframe .obj model and views it interactively:
///   - Left-drag: pan, Middle-drag: orbit, Scroll: zoom
///   - WASD / Arrow Keys: keyboard rotation, E/R: roll
///   - Q/ESC: quit
///
/// With no argument a demo cube is shown.

use std::env;
use std::io;
use tracing_subscriber::EnvFilter;
use wire3d_core::{load_scene, Scene};
use wire3d_terminal::TerminalApp;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let (scene, status) = match env::args().nth(1) {
        Some(path) => match load_scene(&path) {
            Ok(scene) => (scene, format!("Loaded {path} successfully!")),
            // Rejection keeps the scene empty; the message says why
            Err(err) => (Scene::new(), err.to_string()),
        },
        None => {
            let mut scene = Scene::cube(4.0);
            for object in &mut scene.objects {
                object.translation.z = 12.0;
            }
            (scene, "No file given, showing demo cube".to_string())
        }
    };

    let mut app = TerminalApp::new(scene)?;
    app.set_status(status);
    app.run()
}
