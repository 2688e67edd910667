/// Load rejection errors
///
/// Malformed directives inside an accepted file are not errors; the
/// parser skips and logs them. Only whole-load rejection surfaces here.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("only .obj files are supported: {}", .0.display())]
    UnsupportedExtension(PathBuf),

    #[error("failed to read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        source: io::Error,
    },
}
