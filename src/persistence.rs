//! Sketch persistence: save and load a sketch to/from a JSON file.
//!
//! The file stores the vertex ring as `[x, y]` pairs together with the closed
//! flag and the scale ratio text:
//!
//! ```json
//! { "version": 1, "scale": "1:100", "closed": true, "points": [[0.0, 0.0], ...] }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, SketchError};
use crate::geometry::Point;
use crate::scale::Scale;
use crate::sketch::Sketch;

/// File name proposed by the save dialog.
pub const DEFAULT_FILE_NAME: &str = "polygon-sketch.json";

/// Format version written by this build.
pub const FORMAT_VERSION: u32 = 1;

fn default_scale() -> String {
    "1:1".to_string()
}

/// Serializable sketch file contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SketchFile {
    pub version: u32,
    #[serde(default = "default_scale")]
    pub scale: String,
    #[serde(default)]
    pub closed: bool,
    pub points: Vec<[f64; 2]>,
}

impl SketchFile {
    /// Capture the current sketch and scale.
    pub fn capture(sketch: &Sketch, scale: &Scale) -> Self {
        Self {
            version: FORMAT_VERSION,
            scale: scale.text().to_string(),
            closed: sketch.is_closed(),
            points: sketch.points().iter().map(|&p| p.into()).collect(),
        }
    }

    /// Validate the file and turn it back into a sketch and scale.
    pub fn restore(self) -> Result<(Sketch, Scale)> {
        if self.version == 0 || self.version > FORMAT_VERSION {
            return Err(SketchError::UnsupportedVersion(self.version));
        }
        let mut points: Vec<Point> = self.points.into_iter().map(Point::from).collect();
        if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
            return Err(SketchError::Invalid(format!(
                "vertex {} has a non-finite coordinate",
                idx
            )));
        }
        if self.closed {
            // Rings stored with the first vertex repeated at the end.
            if points.len() > 1 && points.first() == points.last() {
                points.pop();
            }
            let mut distinct: Vec<Point> = Vec::with_capacity(points.len());
            for p in &points {
                if !distinct.contains(p) {
                    distinct.push(*p);
                }
            }
            if distinct.len() < 3 {
                return Err(SketchError::Invalid(format!(
                    "closed polygon needs at least 3 distinct vertices, found {}",
                    distinct.len()
                )));
            }
        }
        Ok((Sketch::from_parts(points, self.closed), Scale::parse(&self.scale)))
    }
}

/// Serialize the sketch as pretty JSON.
pub fn sketch_to_json(sketch: &Sketch, scale: &Scale) -> Result<String> {
    Ok(serde_json::to_string_pretty(&SketchFile::capture(sketch, scale))?)
}

/// Deserialize and validate a sketch from JSON.
pub fn sketch_from_json(json: &str) -> Result<(Sketch, Scale)> {
    let file: SketchFile = serde_json::from_str(json)?;
    file.restore()
}

/// Save the sketch to a JSON file at the given path.
pub fn save_to_path(sketch: &Sketch, scale: &Scale, path: &Path) -> Result<()> {
    let txt = sketch_to_json(sketch, scale)?;
    std::fs::write(path, txt)?;
    info!(path = %path.display(), vertices = sketch.len(), "sketch saved");
    Ok(())
}

/// Load a sketch from a JSON file at the given path.
pub fn load_from_path(path: &Path) -> Result<(Sketch, Scale)> {
    let txt = std::fs::read_to_string(path)?;
    let loaded = sketch_from_json(&txt)?;
    info!(path = %path.display(), vertices = loaded.0.len(), closed = loaded.0.is_closed(), "sketch loaded");
    Ok(loaded)
}
