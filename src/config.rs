//! Configuration for the sketch window.

use eframe::egui::Color32;

use crate::hotkeys::Hotkeys;

// ─────────────────────────────────────────────────────────────────────────────
// Style
// ─────────────────────────────────────────────────────────────────────────────

/// Colours and sizes used to draw the sketch.
#[derive(Clone, Debug, PartialEq)]
pub struct SketchStyle {
    /// Vertex marker fill.
    pub vertex: Color32,
    /// Vertex marker radius in pixels. Default: `4.0`.
    pub vertex_radius: f32,
    /// Edge stroke colour.
    pub edge: Color32,
    /// Edge stroke width in pixels. Default: `2.0`.
    pub edge_width: f32,
    /// Edge length label colour.
    pub label: Color32,
    /// Fill of the closed polygon.
    pub fill: Color32,
    /// Dashed segment from the last vertex to the pointer while drawing.
    pub preview: Color32,
}

impl Default for SketchStyle {
    fn default() -> Self {
        Self {
            vertex: Color32::from_rgb(0x00, 0x7b, 0xff),
            vertex_radius: 4.0,
            edge: Color32::from_rgb(0x33, 0x33, 0x33),
            edge_width: 2.0,
            label: Color32::from_rgb(0x00, 0x80, 0x00),
            fill: Color32::from_rgba_unmultiplied(0, 128, 0, 51),
            preview: Color32::from_rgb(0x99, 0x99, 0x99),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SketchConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the sketch window.
#[derive(Clone)]
pub struct SketchConfig {
    // ── Window / chrome ──────────────────────────────────────────────────────
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the toolbar.
    pub headline: Option<String>,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,

    // ── Sketching ────────────────────────────────────────────────────────────
    /// A click closer than this many pixels to the first vertex closes the
    /// polygon. Default: `10.0`.
    pub close_tolerance_px: f32,
    /// Ratio text the scale field starts with. Default: `"1:1"`.
    pub initial_scale: String,
    /// Canvas extent shown on start-up, in canvas units.
    pub canvas_size: [f64; 2],

    // ── Labels ───────────────────────────────────────────────────────────────
    /// Decimal places for lengths and areas. Default: `2`.
    pub label_decimals: usize,
    /// Unit name appended to lengths (and squared for areas).
    pub unit: String,

    // ── Appearance ───────────────────────────────────────────────────────────
    pub style: SketchStyle,

    // ── Hotkeys ──────────────────────────────────────────────────────────────
    pub hotkeys: Hotkeys,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            title: "Polygon Sketch".to_string(),
            headline: None,
            native_options: None,

            close_tolerance_px: 10.0,
            initial_scale: "1:1".to_string(),
            canvas_size: [1000.0, 700.0],

            label_decimals: 2,
            unit: "units".to_string(),

            style: SketchStyle::default(),
            hotkeys: Hotkeys::default(),
        }
    }
}
