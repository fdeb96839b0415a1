//! End-to-end tracing scenarios: pointer events through to path data.

use kurbo::{PathEl, Point};
use numtrace_core::{
    CanvasConfig, Digit, DrawingCanvas, HostShell, PathStyle, PointerEvent, build_path,
};

fn canvas() -> DrawingCanvas {
    DrawingCanvas::new(CanvasConfig {
        width: 300.0,
        height: 300.0,
        stroke_width: 10.0,
        stroke_color: "#2196F3".to_string(),
    })
    .unwrap()
}

fn down(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Down { position: Point::new(x, y) }
}

fn mv(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Move { position: Point::new(x, y) }
}

fn up(x: f64, y: f64) -> PointerEvent {
    PointerEvent::Up { position: Point::new(x, y) }
}

fn on_curve_points(elements: &[PathEl]) -> Vec<Point> {
    elements
        .iter()
        .filter_map(|el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) | PathEl::QuadTo(_, p) | PathEl::CurveTo(_, _, p) => Some(*p),
            PathEl::ClosePath => None,
        })
        .collect()
}

#[test]
fn tap_produces_single_point_dot() {
    let mut canvas = canvas();
    canvas.handle_pointer_event(down(10.0, 10.0));
    canvas.handle_pointer_event(up(10.0, 10.0));

    let strokes = canvas.store().strokes();
    assert_eq!(strokes.len(), 1);
    assert_eq!(strokes[0].points(), &[Point::new(10.0, 10.0)]);

    let path = strokes[0].to_path(canvas.path_style());
    assert!(matches!(path.elements().last(), Some(PathEl::ClosePath)));
}

#[test]
fn drag_keeps_points_in_order_and_path_hits_them() {
    let mut canvas = canvas();
    canvas.handle_pointer_event(down(0.0, 0.0));
    canvas.handle_pointer_event(mv(5.0, 5.0));
    canvas.handle_pointer_event(mv(10.0, 0.0));
    canvas.handle_pointer_event(up(10.0, 0.0));

    let expected = [Point::new(0.0, 0.0), Point::new(5.0, 5.0), Point::new(10.0, 0.0)];
    let stroke = &canvas.store().strokes()[0];
    assert_eq!(stroke.points(), &expected);

    for style in [PathStyle::Smooth, PathStyle::Polyline] {
        let path = stroke.to_path(style);
        assert_eq!(on_curve_points(path.elements()), expected);
    }
}

#[test]
fn switching_digits_starts_blank() {
    let mut shell = HostShell::default();
    let mut canvas = canvas();

    shell.select_digit(Digit::new(3).unwrap(), &mut canvas);
    canvas.handle_pointer_event(down(20.0, 20.0));
    canvas.handle_pointer_event(mv(40.0, 60.0));
    canvas.handle_pointer_event(up(40.0, 60.0));
    assert_eq!(canvas.store().len(), 1);

    shell.select_digit(Digit::new(7).unwrap(), &mut canvas);
    assert!(canvas.store().is_empty());
    assert_eq!(shell.selected().value(), 7);
}

#[test]
fn clearing_empty_canvas_is_harmless() {
    let mut shell = HostShell::default();
    let mut canvas = canvas();
    shell.clear(&mut canvas);
    shell.clear(&mut canvas);
    assert!(canvas.store().is_empty());
}

#[test]
fn nonempty_point_sequences_always_draw() {
    let mut points = Vec::new();
    assert!(build_path(&points, PathStyle::Smooth).elements().is_empty());
    for i in 0..20 {
        points.push(Point::new(i as f64 * 3.0, (i % 4) as f64));
        for style in [PathStyle::Smooth, PathStyle::Polyline] {
            assert!(!build_path(&points, style).elements().is_empty());
        }
    }
}

#[test]
fn nth_delivered_point_is_nth_in_path() {
    let mut canvas = canvas();
    let samples: Vec<Point> = (0..12).map(|i| Point::new(i as f64 * 7.0, (i * i) as f64)).collect();

    canvas.handle_pointer_event(down(samples[0].x, samples[0].y));
    for p in &samples[1..] {
        canvas.handle_pointer_event(mv(p.x, p.y));
    }
    // Mid-stroke the active path already reflects every point.
    let active = build_path(canvas.store().active_stroke(), PathStyle::Smooth);
    assert_eq!(on_curve_points(active.elements()), samples);

    canvas.handle_pointer_event(up(0.0, 0.0));
    let path = canvas.store().strokes()[0].to_path(PathStyle::Smooth);
    assert_eq!(on_curve_points(path.elements()), samples);
}
