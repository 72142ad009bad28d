//! Desktop front end for the sketch.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`canvas`]      | Plot area: click capture and drawing of vertices, edges, labels and fill |
//! | [`toolbar`]     | Scale field, area/perimeter read-outs and action buttons |
//! | [`sketch_app`]  | [`SketchApp`] (eframe) owning the sketch and wiring actions |
//! | [`run`]         | [`run_polysketch()`] entry point and icon loading |

pub mod canvas;
pub mod sketch_app;
pub mod toolbar;
mod run;

pub use run::run_polysketch;
pub use sketch_app::SketchApp;
