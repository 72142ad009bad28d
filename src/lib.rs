//! Interactive polygon sketching built on egui/eframe.
//!
//! Click to place vertices, click near the first vertex to close the polygon,
//! and read off edge lengths and the enclosed area, optionally scaled by an
//! `a:b` ratio. Sketches round-trip through a small JSON file.
//!
//! - `geometry`: points, distances, shoelace area, fill triangulation
//! - `scale`: `a:b` ratio parsing
//! - `sketch`: vertex capture and closure
//! - `persistence`: JSON save/load
//! - `hotkeys`: keyboard shortcuts
//! - `config`: window and style configuration
//! - `app`: the eframe application

pub mod app;
pub mod config;
pub mod error;
pub mod geometry;
pub mod hotkeys;
pub mod persistence;
pub mod scale;
pub mod sketch;

pub use app::{run_polysketch, SketchApp};
pub use config::{SketchConfig, SketchStyle};
pub use error::{Result, SketchError};
pub use geometry::Point;
pub use scale::Scale;
pub use sketch::{ClickOutcome, Edge, Sketch};
