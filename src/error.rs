//! Error type shared by the persistence and hotkey layers.

use std::fmt;

/// Errors raised while reading, writing or validating sketch files and
/// hotkey bindings.
#[derive(Debug)]
pub enum SketchError {
    /// Reading or writing a file failed.
    Io(std::io::Error),
    /// The sketch file is not valid JSON or does not match the file format.
    Json(serde_json::Error),
    /// The hotkeys file is not valid YAML.
    Yaml(serde_yaml::Error),
    /// The file parsed but describes an impossible sketch.
    Invalid(String),
    /// The file was written by a newer, unknown format version.
    UnsupportedVersion(u32),
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchError::Io(e) => write!(f, "I/O error: {}", e),
            SketchError::Json(e) => write!(f, "JSON error: {}", e),
            SketchError::Yaml(e) => write!(f, "YAML error: {}", e),
            SketchError::Invalid(msg) => write!(f, "invalid sketch: {}", msg),
            SketchError::UnsupportedVersion(v) => {
                write!(f, "unsupported sketch file version {}", v)
            }
        }
    }
}

impl std::error::Error for SketchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SketchError::Io(e) => Some(e),
            SketchError::Json(e) => Some(e),
            SketchError::Yaml(e) => Some(e),
            SketchError::Invalid(_) | SketchError::UnsupportedVersion(_) => None,
        }
    }
}

impl From<std::io::Error> for SketchError {
    fn from(e: std::io::Error) -> Self {
        SketchError::Io(e)
    }
}

impl From<serde_json::Error> for SketchError {
    fn from(e: serde_json::Error) -> Self {
        SketchError::Json(e)
    }
}

impl From<serde_yaml::Error> for SketchError {
    fn from(e: serde_yaml::Error) -> Self {
        SketchError::Yaml(e)
    }
}

pub type Result<T> = std::result::Result<T, SketchError>;
