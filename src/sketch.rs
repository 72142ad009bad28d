//! Polygon capture: vertices are placed one click at a time until a click
//! lands near the first vertex, which closes the polygon.

use tracing::{debug, info};

use crate::geometry::{self, Point};
use crate::scale::Scale;

/// Result of feeding a click into [`Sketch::handle_click`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A new vertex was appended at this index.
    Added(usize),
    /// The click landed near the first vertex and closed the polygon.
    Closed,
    /// The polygon is already closed; the click was dropped.
    Ignored,
}

/// A straight segment between two consecutive vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub start: Point,
    pub end: Point,
}

impl Edge {
    pub fn length(&self) -> f64 {
        geometry::distance(self.start, self.end)
    }

    pub fn midpoint(&self) -> Point {
        geometry::midpoint(self.start, self.end)
    }
}

/// Ordered polygon vertices and whether the ring has been closed.
///
/// Vertices are kept unique: closing does not repeat the first vertex, the
/// closing edge is produced by [`Sketch::edges`] instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sketch {
    points: Vec<Point>,
    closed: bool,
}

impl Sketch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sketch from already validated parts.
    pub fn from_parts(points: Vec<Point>, closed: bool) -> Self {
        Self {
            closed: closed && points.len() >= 3,
            points,
        }
    }

    /// Handle a click at `pos`.
    ///
    /// Once at least three vertices exist, a click strictly within
    /// `tolerance` of the first vertex closes the polygon instead of adding a
    /// vertex.
    pub fn handle_click(&mut self, pos: Point, tolerance: f64) -> ClickOutcome {
        if self.closed {
            return ClickOutcome::Ignored;
        }
        if let Some(first) = self.first() {
            if self.points.len() > 2 && geometry::is_near(first, pos, tolerance) {
                self.closed = true;
                info!(vertices = self.points.len(), "polygon closed");
                return ClickOutcome::Closed;
            }
        }
        self.points.push(pos);
        debug!(x = pos.x, y = pos.y, index = self.points.len() - 1, "vertex added");
        ClickOutcome::Added(self.points.len() - 1)
    }

    /// Close the polygon without clicking on the first vertex.
    ///
    /// Returns `false` when there are fewer than three vertices or the polygon
    /// is already closed.
    pub fn close(&mut self) -> bool {
        if self.closed || self.points.len() < 3 {
            return false;
        }
        self.closed = true;
        info!(vertices = self.points.len(), "polygon closed");
        true
    }

    /// Step back once: reopen a closed polygon, or drop the last vertex.
    pub fn undo(&mut self) -> bool {
        if self.closed {
            self.closed = false;
            debug!("polygon reopened");
            return true;
        }
        self.points.pop().is_some()
    }

    /// Clear all vertices and start over.
    pub fn reset(&mut self) {
        self.points.clear();
        self.closed = false;
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn first(&self) -> Option<Point> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Edges between consecutive vertices, plus the closing edge once closed.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let open = self.points.windows(2).map(|w| Edge {
            start: w[0],
            end: w[1],
        });
        let closing = match (self.closed, self.last(), self.first()) {
            (true, Some(start), Some(end)) => Some(Edge { start, end }),
            _ => None,
        };
        open.chain(closing)
    }

    /// Enclosed area in canvas units; only defined once closed.
    pub fn area(&self) -> Option<f64> {
        self.closed.then(|| geometry::area(&self.points))
    }

    pub fn perimeter(&self) -> Option<f64> {
        self.closed.then(|| geometry::perimeter(&self.points))
    }

    /// Fill triangles for the closed polygon; empty while open.
    pub fn fill_triangles(&self) -> Vec<[Point; 3]> {
        if !self.closed {
            return Vec::new();
        }
        geometry::triangulate(&self.points)
            .into_iter()
            .map(|[a, b, c]| [self.points[a], self.points[b], self.points[c]])
            .collect()
    }
}

/// Label drawn at an edge midpoint, e.g. `"12.50 units"`.
pub fn edge_label(edge: &Edge, scale: &Scale, decimals: usize, unit: &str) -> String {
    format!("{:.*} {}", decimals, scale.length(edge.length()), unit)
}

/// Area read-out, e.g. `"Area: 100.00 units²"`; a dash while still open.
pub fn area_label(sketch: &Sketch, scale: &Scale, decimals: usize, unit: &str) -> String {
    match sketch.area() {
        Some(a) => format!("Area: {:.*} {}²", decimals, scale.area(a), unit),
        None => "Area: —".to_string(),
    }
}

/// Perimeter read-out, e.g. `"Perimeter: 40.00 units"`; a dash while still open.
pub fn perimeter_label(sketch: &Sketch, scale: &Scale, decimals: usize, unit: &str) -> String {
    match sketch.perimeter() {
        Some(p) => format!("Perimeter: {:.*} {}", decimals, scale.length(p), unit),
        None => "Perimeter: —".to_string(),
    }
}
