use polysketch::geometry::Point;
use polysketch::scale::Scale;
use polysketch::sketch::*;

const TOL: f64 = 10.0;

fn square(side: f64) -> Sketch {
    let mut s = Sketch::new();
    s.handle_click(Point::new(0.0, 0.0), TOL);
    s.handle_click(Point::new(side, 0.0), TOL);
    s.handle_click(Point::new(side, side), TOL);
    s.handle_click(Point::new(0.0, side), TOL);
    s
}

#[test]
fn clicks_append_vertices_in_order() {
    let mut s = Sketch::new();
    assert_eq!(s.handle_click(Point::new(0.0, 0.0), TOL), ClickOutcome::Added(0));
    assert_eq!(s.handle_click(Point::new(50.0, 0.0), TOL), ClickOutcome::Added(1));
    assert_eq!(s.len(), 2);
    assert!(!s.is_closed());
}

#[test]
fn click_near_start_closes_after_three_vertices() {
    let mut s = square(100.0);
    assert_eq!(s.handle_click(Point::new(3.0, 4.0), TOL), ClickOutcome::Closed);
    assert!(s.is_closed());
    assert_eq!(s.len(), 4, "closing does not repeat the first vertex");
}

#[test]
fn click_near_start_with_two_vertices_adds_a_vertex() {
    let mut s = Sketch::new();
    s.handle_click(Point::new(0.0, 0.0), TOL);
    s.handle_click(Point::new(100.0, 0.0), TOL);
    assert_eq!(s.handle_click(Point::new(1.0, 1.0), TOL), ClickOutcome::Added(2));
    assert!(!s.is_closed());
}

#[test]
fn click_exactly_at_tolerance_does_not_close() {
    let mut s = square(100.0);
    assert_eq!(s.handle_click(Point::new(6.0, 8.0), TOL), ClickOutcome::Added(4));
}

#[test]
fn clicks_after_closing_are_ignored() {
    let mut s = square(100.0);
    s.handle_click(Point::new(0.0, 0.0), TOL);
    assert_eq!(s.handle_click(Point::new(500.0, 500.0), TOL), ClickOutcome::Ignored);
    assert_eq!(s.len(), 4);
}

#[test]
fn edges_include_closing_edge_only_when_closed() {
    let mut s = square(10.0);
    assert_eq!(s.edges().count(), 3);
    assert!(s.close());
    let edges: Vec<Edge> = s.edges().collect();
    assert_eq!(edges.len(), 4);
    let closing = edges[3];
    assert_eq!(closing.start, Point::new(0.0, 10.0));
    assert_eq!(closing.end, Point::new(0.0, 0.0));
    assert_eq!(closing.length(), 10.0);
    assert_eq!(closing.midpoint(), Point::new(0.0, 5.0));
}

#[test]
fn area_only_once_closed() {
    let mut s = square(10.0);
    assert_eq!(s.area(), None);
    assert_eq!(s.perimeter(), None);
    s.close();
    assert_eq!(s.area(), Some(100.0));
    assert_eq!(s.perimeter(), Some(40.0));
}

#[test]
fn explicit_close_needs_three_vertices() {
    let mut s = Sketch::new();
    s.handle_click(Point::new(0.0, 0.0), TOL);
    s.handle_click(Point::new(10.0, 0.0), TOL);
    assert!(!s.close());
    s.handle_click(Point::new(10.0, 10.0), TOL);
    assert!(s.close());
    assert!(!s.close());
}

#[test]
fn undo_reopens_then_removes_vertices() {
    let mut s = square(10.0);
    s.close();
    assert!(s.undo());
    assert!(!s.is_closed());
    assert_eq!(s.len(), 4);
    assert!(s.undo());
    assert_eq!(s.len(), 3);
    let mut empty = Sketch::new();
    assert!(!empty.undo());
}

#[test]
fn reset_clears_everything() {
    let mut s = square(10.0);
    s.close();
    s.reset();
    assert!(s.is_empty());
    assert!(!s.is_closed());
    assert_eq!(s.handle_click(Point::new(1.0, 1.0), TOL), ClickOutcome::Added(0));
}

#[test]
fn from_parts_never_closes_short_rings() {
    let s = Sketch::from_parts(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)], true);
    assert!(!s.is_closed());
}

#[test]
fn fill_triangles_only_when_closed() {
    let mut s = square(10.0);
    assert!(s.fill_triangles().is_empty());
    s.close();
    assert_eq!(s.fill_triangles().len(), 2);
}

#[test]
fn labels_apply_scale() {
    let mut s = square(10.0);
    let scale = Scale::parse("1:100");
    let edge = s.edges().next().expect("first edge");
    assert_eq!(edge_label(&edge, &scale, 2, "units"), "1000.00 units");
    assert_eq!(area_label(&s, &scale, 2, "units"), "Area: —");
    s.close();
    assert_eq!(area_label(&s, &scale, 2, "units"), "Area: 1000000.00 units²");
    assert_eq!(perimeter_label(&s, &scale, 1, "m"), "Perimeter: 4000.0 m");
}

#[test]
fn labels_without_scale() {
    let mut s = Sketch::new();
    s.handle_click(Point::new(0.0, 0.0), TOL);
    s.handle_click(Point::new(3.0, 0.0), TOL);
    s.handle_click(Point::new(3.0, 4.0), TOL);
    s.close();
    let scale = Scale::default();
    assert_eq!(area_label(&s, &scale, 2, "units"), "Area: 6.00 units²");
    let labels: Vec<String> = s
        .edges()
        .map(|e| edge_label(&e, &scale, 2, "units"))
        .collect();
    assert_eq!(labels, ["3.00 units", "4.00 units", "5.00 units"]);
}
