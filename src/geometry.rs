//! Plane geometry used by the sketch: distances, midpoints and the shoelace
//! area of a vertex ring.
//!
//! All functions treat a slice of points as a ring; the edge from the last
//! vertex back to the first is implied and must not be repeated by callers
//! (a repeated closing vertex is harmless for the area, but counts as a
//! zero-length edge for [`perimeter`]).

use serde::{Deserialize, Serialize};

/// A point on the sketch canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Self { x: p[0], y: p[1] }
    }
}

impl From<Point> for [f64; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// `true` when `b` lies strictly within `tolerance` of `a`.
pub fn is_near(a: Point, b: Point, tolerance: f64) -> bool {
    distance(a, b) < tolerance
}

/// Point halfway between `a` and `b`.
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Twice the signed area of the ring (shoelace sum).
///
/// Positive for counter-clockwise rings in a y-up frame.
pub fn signed_area_2x(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p, q)| p.x * q.y - q.x * p.y)
        .sum()
}

/// Signed area of the ring; see [`signed_area_2x`] for the orientation.
pub fn signed_area(points: &[Point]) -> f64 {
    signed_area_2x(points) / 2.0
}

/// Unsigned area enclosed by the ring.
pub fn area(points: &[Point]) -> f64 {
    signed_area(points).abs()
}

/// Length of the ring including the closing edge.
pub fn perimeter(points: &[Point]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(p, q)| distance(*p, *q))
        .sum()
}

/// Ear-clipping triangulation of a simple polygon.
///
/// Only used to fill the closed polygon on the canvas, since egui can only
/// fill convex shapes. Returns vertex index triples into `points`. Repeated
/// and collinear vertices are skipped. If the ring self-intersects, clipping
/// stops once no ear can be found and the triangles found so far are returned.
pub fn triangulate(points: &[Point]) -> Vec<[usize; 3]> {
    let n = points.len();
    if n < 3 {
        return Vec::new();
    }

    // Work on a counter-clockwise ring so convexity has a single sign.
    let mut ring: Vec<usize> = (0..n).collect();
    if signed_area_2x(points) < 0.0 {
        ring.reverse();
    }
    drop_degenerate_vertices(points, &mut ring);
    if ring.len() < 3 {
        return Vec::new();
    }

    let mut triangles = Vec::with_capacity(ring.len() - 2);
    while ring.len() > 3 {
        let len = ring.len();
        let ear = (0..len).find(|&i| {
            let prev = ring[(i + len - 1) % len];
            let cur = ring[i];
            let next = ring[(i + 1) % len];
            is_ear(points, &ring, prev, cur, next)
        });
        let Some(i) = ear else {
            break;
        };
        let prev = ring[(i + len - 1) % len];
        let next = ring[(i + 1) % len];
        triangles.push([prev, ring[i], next]);
        ring.remove(i);
    }
    if ring.len() == 3 {
        triangles.push([ring[0], ring[1], ring[2]]);
    }
    triangles
}

/// Remove repeated vertices and vertices making a zero-area turn with their
/// neighbours. Neither contributes to the filled area, and both block the
/// ear test.
fn drop_degenerate_vertices(points: &[Point], ring: &mut Vec<usize>) {
    // Each removal changes its neighbours' turns, so sweep until stable.
    loop {
        let before = ring.len();
        let mut i = 0;
        while ring.len() >= 3 && i < ring.len() {
            let len = ring.len();
            let prev = points[ring[(i + len - 1) % len]];
            let cur = points[ring[i]];
            let next = points[ring[(i + 1) % len]];
            if cur == prev || cross(prev, cur, next) == 0.0 {
                ring.remove(i);
            } else {
                i += 1;
            }
        }
        if ring.len() == before || ring.len() < 3 {
            break;
        }
    }
}

fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

fn is_ear(points: &[Point], ring: &[usize], prev: usize, cur: usize, next: usize) -> bool {
    let (a, b, c) = (points[prev], points[cur], points[next]);
    if cross(a, b, c) <= 0.0 {
        return false;
    }
    ring.iter()
        .map(|&idx| points[idx])
        .filter(|p| *p != a && *p != b && *p != c)
        .all(|p| !in_triangle(p, a, b, c))
}

// Closed triangle test; points on the boundary count as inside.
fn in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    cross(a, b, p) >= 0.0 && cross(b, c, p) >= 0.0 && cross(c, a, p) >= 0.0
}
