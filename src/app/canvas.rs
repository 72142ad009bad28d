//! Sketch canvas: an `egui_plot` area with a fixed 1:1 aspect that turns
//! primary clicks into vertices and draws the polygon with edge labels.

use egui::{Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{Line, LineStyle, Plot, PlotPoint, Points, Polygon, Text};

use crate::config::SketchConfig;
use crate::geometry::Point;
use crate::scale::Scale;
use crate::sketch::{edge_label, Sketch};

/// A click on the canvas, in canvas units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasClick {
    pub pos: Point,
    /// Closing tolerance converted from pixels to canvas units at the
    /// current zoom level.
    pub tolerance: f64,
}

pub struct SketchCanvas {
    /// Set after load/reset so the view snaps back to the sketch extent.
    reset_view: bool,
}

impl Default for SketchCanvas {
    fn default() -> Self {
        Self { reset_view: true }
    }
}

impl SketchCanvas {
    pub fn request_reset_view(&mut self) {
        self.reset_view = true;
    }

    /// Draw the sketch and return the click to apply, if any.
    pub fn show(
        &mut self,
        ui: &mut Ui,
        sketch: &Sketch,
        scale: &Scale,
        cfg: &SketchConfig,
    ) -> Option<CanvasClick> {
        let [w, h] = cfg.canvas_size;
        let style = &cfg.style;
        let mut plot = Plot::new("sketch_canvas")
            .data_aspect(1.0)
            .allow_drag(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_x(false)
            .show_y(false)
            .include_x(0.0)
            .include_x(w)
            .include_y(0.0)
            .include_y(h);
        if self.reset_view {
            plot = plot.reset();
            self.reset_view = false;
        }

        let plot_resp = plot.show(ui, |plot_ui| {
            for (i, tri) in sketch.fill_triangles().into_iter().enumerate() {
                let pts: Vec<[f64; 2]> = tri.iter().map(|&p| p.into()).collect();
                plot_ui.polygon(
                    Polygon::new(format!("fill_{}", i), pts)
                        .fill_color(style.fill)
                        .stroke(Stroke::NONE),
                );
            }

            for (i, edge) in sketch.edges().enumerate() {
                let seg: Vec<[f64; 2]> = vec![edge.start.into(), edge.end.into()];
                plot_ui.line(
                    Line::new(format!("edge_{}", i), seg)
                        .color(style.edge)
                        .width(style.edge_width),
                );
                let mid = edge.midpoint();
                let text = edge_label(&edge, scale, cfg.label_decimals, &cfg.unit);
                plot_ui.text(
                    Text::new(
                        "edge_label",
                        PlotPoint::new(mid.x, mid.y),
                        RichText::new(text).size(14.0).color(style.label),
                    )
                    .anchor(Align2::LEFT_TOP),
                );
            }

            // Rubber band from the last vertex to the pointer while drawing.
            if !sketch.is_closed() {
                if let (Some(last), Some(ptr)) = (sketch.last(), plot_ui.pointer_coordinate()) {
                    plot_ui.line(
                        Line::new("preview", vec![[last.x, last.y], [ptr.x, ptr.y]])
                            .color(style.preview)
                            .width(1.0)
                            .style(LineStyle::dashed_loose()),
                    );
                }
            }

            if !sketch.is_empty() {
                let pts: Vec<[f64; 2]> = sketch.points().iter().map(|&p| p.into()).collect();
                plot_ui.points(
                    Points::new("vertices", pts)
                        .radius(style.vertex_radius)
                        .filled(true)
                        .color(style.vertex),
                );
                if let Some(first) = sketch.first() {
                    // Highlight the vertex that closes the ring.
                    if !sketch.is_closed() && sketch.len() > 2 {
                        plot_ui.points(
                            Points::new("start", vec![[first.x, first.y]])
                                .radius(style.vertex_radius + 2.0)
                                .filled(false)
                                .color(Color32::WHITE),
                        );
                    }
                }
            }
        });

        if !plot_resp.response.clicked() {
            return None;
        }
        let screen = plot_resp.response.interact_pointer_pos()?;
        let value = plot_resp.transform.value_from_position(screen);
        let px_per_unit = plot_resp.transform.dpos_dvalue_x().abs();
        let tolerance = if px_per_unit > 0.0 {
            cfg.close_tolerance_px as f64 / px_per_unit
        } else {
            cfg.close_tolerance_px as f64
        };
        Some(CanvasClick {
            pos: Point::new(value.x, value.y),
            tolerance,
        })
    }
}
