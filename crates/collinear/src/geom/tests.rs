use super::*;
use crate::InputError;
use nalgebra::Vector2;

fn pt(x: i32, y: i32) -> Point {
    Point::new(x, y).unwrap()
}

#[test]
fn construction_rejects_out_of_range() {
    assert!(Point::new(COORD_MIN, COORD_MAX).is_ok());
    assert_eq!(
        Point::new(-1, 0),
        Err(InputError::OutOfRange { x: -1, y: 0 })
    );
    assert_eq!(
        Point::new(0, COORD_MAX + 1),
        Err(InputError::OutOfRange {
            x: 0,
            y: COORD_MAX + 1
        })
    );
    assert!(Point::try_from(Vector2::new(40_000, 3)).is_err());
    assert_eq!(Point::try_from(Vector2::new(4, 3)).unwrap(), pt(4, 3));
}

#[test]
fn natural_order_is_y_then_x() {
    assert!(pt(5, 1) < pt(0, 2));
    assert!(pt(1, 2) < pt(3, 2));
    assert_eq!(pt(3, 3).cmp(&pt(3, 3)), std::cmp::Ordering::Equal);
    let mut pts = vec![pt(2, 2), pt(0, 3), pt(9, 0), pt(1, 2)];
    pts.sort();
    assert_eq!(pts, vec![pt(9, 0), pt(1, 2), pt(2, 2), pt(0, 3)]);
}

#[test]
fn slope_conventions() {
    let p = pt(3, 4);
    assert_eq!(p.slope_to(&p), f64::NEG_INFINITY);
    assert_eq!(p.slope_to(&pt(7, 4)), 0.0);
    assert!(p.slope_to(&pt(0, 4)).is_sign_positive());
    assert_eq!(p.slope_to(&pt(3, 0)), f64::INFINITY);
    assert_eq!(p.slope_to(&pt(3, 9)), f64::INFINITY);
    assert_eq!(p.slope_to(&pt(5, 8)), 2.0);
    assert_eq!(p.slope_to(&pt(1, 5)), -0.5);
    // Symmetric for distinct points.
    assert_eq!(pt(5, 8).slope_to(&p), 2.0);
}

#[test]
fn slope_is_exact_at_grid_extremes() {
    // 1/32766 vs 1/32767: neighbouring fractions at the coarsest resolution.
    let o = pt(0, 0);
    let a = o.slope_to(&pt(32766, 1));
    let b = o.slope_to(&pt(32767, 1));
    assert_ne!(a, b);
    // Equal fractions from different offsets agree bit for bit.
    let c = pt(1, 1).slope_to(&pt(32767, 3));
    let d = pt(16384, 2).slope_to(&pt(32767, 3));
    assert_eq!(c.to_bits(), d.to_bits());
}

#[test]
fn slope_order_puts_origin_first() {
    let p = pt(1, 1);
    let mut pts = vec![pt(1, 5), pt(4, 1), p, pt(2, 2), pt(3, 0)];
    pts.sort_by(p.slope_order());
    assert_eq!(pts[0], p);
    // -0.5, 0, 1, +inf
    assert_eq!(&pts[1..], &[pt(3, 0), pt(4, 1), pt(2, 2), pt(1, 5)]);
}

#[test]
fn segment_value_semantics_and_display() {
    let a = Segment::new(pt(1, 1), pt(4, 4));
    let b = Segment::new(pt(1, 1), pt(4, 4));
    assert_eq!(a, b);
    assert_ne!(a, Segment::new(pt(1, 1), pt(3, 3)));
    assert_eq!(a.p(), pt(1, 1));
    assert_eq!(a.q(), pt(4, 4));
    assert_eq!(a.to_string(), "(1, 1) - (4, 4)");
}

#[test]
fn segment_contains_points_on_it() {
    let s = Segment::new(pt(0, 0), pt(6, 3));
    assert!(s.contains(&pt(0, 0)));
    assert!(s.contains(&pt(2, 1)));
    assert!(s.contains(&pt(6, 3)));
    assert!(!s.contains(&pt(8, 4)));
    assert!(!s.contains(&pt(3, 1)));
    let h = Segment::new(pt(5, 2), pt(1, 2));
    assert!(h.contains(&pt(3, 2)));
}

#[test]
fn vectors_round_trip_coordinates() {
    let p = pt(7, 11);
    assert_eq!(p.to_grid(), Vector2::new(7, 11));
    assert_eq!(p.to_vec2(), Vector2::new(7.0, 11.0));
}
