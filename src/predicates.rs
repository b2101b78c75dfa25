//! Orientation, collinearity, and exact segment-segment intersection.
//!
//! These are the geometric predicates the sweep driver depends on. Every
//! decision is computed over [`Rational`] coordinates, so there is no
//! tolerance or epsilon anywhere in this module.

use crate::{Line2D, Point2D, Segment2D};
use std::cmp::Ordering;

/// The sign of the cross product `(b-a) x (c-a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
  /// A right turn at `b` when walking `a -> b -> c`.
  ClockWise,
  /// A left turn at `b` when walking `a -> b -> c`.
  CounterClockWise,
  /// `a`, `b`, `c` lie on a common line.
  Collinear,
}

impl Orientation {
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::Collinear => Orientation::Collinear,
    }
  }

  fn is_opposite(self, other: Orientation) -> bool {
    matches!(
      (self, other),
      (Orientation::ClockWise, Orientation::CounterClockWise)
        | (Orientation::CounterClockWise, Orientation::ClockWise)
    )
  }
}

/// `sign((b.x-a.x)(c.y-a.y) - (b.y-a.y)(c.x-a.x))`: `-1` is a right turn
/// (clockwise), `0` is collinear, `+1` is a left turn (counter-clockwise).
pub fn orientation(a: &Point2D, b: &Point2D, c: &Point2D) -> Orientation {
  let lhs = &(&b.x - &a.x) * &(&c.y - &a.y);
  let rhs = &(&b.y - &a.y) * &(&c.x - &a.x);
  match lhs.cmp(&rhs) {
    Ordering::Less => Orientation::ClockWise,
    Ordering::Equal => Orientation::Collinear,
    Ordering::Greater => Orientation::CounterClockWise,
  }
}

/// `a`, `b`, `c` are collinear iff [`orientation`] is zero.
pub fn collinear(a: &Point2D, b: &Point2D, c: &Point2D) -> bool {
  orientation(a, b, c) == Orientation::Collinear
}

/// The result of intersecting two segments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intersection {
  /// The segments share no point.
  Empty,
  /// The segments meet at exactly one point.
  Point(Point2D),
  /// The segments are collinear and overlap along a sub-segment (which may
  /// degenerate to the single shared endpoint — that case is reported as
  /// [`Intersection::Point`] instead).
  Overlap(Segment2D),
}

/// Exact intersection of two segments, following the classic
/// orientation-based test (four cross products), specialised to report
/// collinear overlaps as their own variant instead of treating them as a
/// crossing.
pub fn intersect(s1: &Segment2D, s2: &Segment2D) -> Intersection {
  let p1 = s1.upper();
  let p2 = s1.lower();
  let q1 = s2.upper();
  let q2 = s2.lower();

  let o1 = orientation(p1, p2, q1);
  let o2 = orientation(p1, p2, q2);
  if o1 == Orientation::Collinear && o2 == Orientation::Collinear {
    return collinear_overlap(s1, s2);
  }

  let o3 = orientation(q1, q2, p1);
  let o4 = orientation(q1, q2, p2);

  if o1.is_opposite(o2) && o3.is_opposite(o4) {
    return Intersection::Point(line_intersection_point(s1, s2));
  }
  if o1 == Orientation::Collinear && s1.contains(q1) {
    return Intersection::Point(q1.clone());
  }
  if o2 == Orientation::Collinear && s1.contains(q2) {
    return Intersection::Point(q2.clone());
  }
  if o3 == Orientation::Collinear && s2.contains(p1) {
    return Intersection::Point(p1.clone());
  }
  if o4 == Orientation::Collinear && s2.contains(p2) {
    return Intersection::Point(p2.clone());
  }
  Intersection::Empty
}

/// `s1` and `s2` are already known to be collinear: reduce to an interval
/// intersection using the sweep order `≺`, which — restricted to points on
/// a common line — is a consistent (if not necessarily distance-preserving)
/// total order along that line.
fn collinear_overlap(s1: &Segment2D, s2: &Segment2D) -> Intersection {
  let lo = if s1.upper() >= s2.upper() {
    s1.upper()
  } else {
    s2.upper()
  };
  let hi = if s1.lower() <= s2.lower() {
    s1.lower()
  } else {
    s2.lower()
  };
  match lo.cmp(hi) {
    Ordering::Greater => Intersection::Empty,
    Ordering::Equal => Intersection::Point(lo.clone()),
    Ordering::Less => {
      Intersection::Overlap(Segment2D::new(lo.clone(), hi.clone()).expect("lo != hi by branch"))
    }
  }
}

/// The two segments' unique crossing point, via their supporting lines.
/// Only called once the four-orientation test has established the lines
/// are not parallel.
fn line_intersection_point(s1: &Segment2D, s2: &Segment2D) -> Point2D {
  let l1 = Line2D::through(s1.upper(), s1.lower());
  let l2 = Line2D::through(s2.upper(), s2.lower());
  l1.intersect(&l2).expect("non-parallel lines have a unique crossing point")
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Rational;

  fn r(n: i64) -> Rational {
    Rational::from_integer(n)
  }
  fn p(x: i64, y: i64) -> Point2D {
    Point2D::new(r(x), r(y))
  }
  fn seg(a: (i64, i64), b: (i64, i64)) -> Segment2D {
    Segment2D::new(p(a.0, a.1), p(b.0, b.1)).unwrap()
  }

  #[test]
  fn orientation_sign_law() {
    let (a, b, c) = (p(0, 0), p(1, 0), p(1, 1));
    let o = orientation(&a, &b, &c);
    assert_eq!(o.reverse(), orientation(&a, &c, &b));
    assert_eq!(o, orientation(&b, &c, &a));
  }

  #[test]
  fn collinearity_matches_orientation() {
    assert!(collinear(&p(0, 0), &p(1, 1), &p(2, 2)));
    assert!(!collinear(&p(0, 0), &p(1, 1), &p(2, 3)));
  }

  #[test]
  fn proper_crossing() {
    let s1 = seg((0, 0), (2, 2));
    let s2 = seg((0, 2), (2, 0));
    assert_eq!(intersect(&s1, &s2), Intersection::Point(p(1, 1)));
  }

  #[test]
  fn disjoint_segments_are_empty() {
    let s1 = seg((0, 0), (1, 0));
    let s2 = seg((2, 0), (3, 0));
    assert_eq!(intersect(&s1, &s2), Intersection::Empty);
  }

  #[test]
  fn shared_endpoint_is_a_point() {
    let s1 = seg((0, 0), (2, 0));
    let s2 = seg((2, 0), (2, 2));
    assert_eq!(intersect(&s1, &s2), Intersection::Point(p(2, 0)));
  }

  #[test]
  fn endpoint_on_interior_is_a_point() {
    let s1 = seg((0, 0), (4, 0));
    let s2 = seg((2, 0), (2, 3));
    assert_eq!(intersect(&s1, &s2), Intersection::Point(p(2, 0)));
  }

  #[test]
  fn collinear_overlap_reports_sub_segment() {
    let s1 = seg((0, 0), (3, 0));
    let s2 = seg((1, 0), (4, 0));
    assert_eq!(
      intersect(&s1, &s2),
      Intersection::Overlap(seg((1, 0), (3, 0)))
    );
  }

  #[test]
  fn collinear_touching_at_single_point_is_a_point() {
    let s1 = seg((0, 0), (2, 0));
    let s2 = seg((2, 0), (4, 0));
    assert_eq!(intersect(&s1, &s2), Intersection::Point(p(2, 0)));
  }

  #[test]
  fn collinear_disjoint_is_empty() {
    let s1 = seg((0, 0), (1, 0));
    let s2 = seg((2, 0), (3, 0));
    assert_eq!(intersect(&s1, &s2), Intersection::Empty);
  }

  #[test]
  fn one_inside_the_other_is_overlap() {
    let s1 = seg((0, 0), (10, 0));
    let s2 = seg((2, 0), (4, 0));
    assert_eq!(
      intersect(&s1, &s2),
      Intersection::Overlap(seg((2, 0), (4, 0)))
    );
  }

  #[test]
  fn vertical_crosses_non_vertical() {
    let s1 = seg((1, -1), (1, 2));
    let s2 = seg((0, 0), (3, 0));
    assert_eq!(intersect(&s1, &s2), Intersection::Point(p(1, 0)));
  }
}
