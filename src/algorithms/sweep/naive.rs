//! The quadratic reference implementation used to check the sweep driver
//! against in property tests: test every pair of segments directly with
//! [`crate::predicates::intersect`], with no event queue or status at all.

use crate::predicates::Intersection;
use crate::{Intersections, Point2D, Segment2D};
use std::collections::BTreeSet;

/// Every intersection point among `segments`, found by brute-force
/// pairwise testing, together with the segments passing through it.
///
/// A collinear overlap contributes a single point, its lower endpoint under
/// the sweep order, rather than the whole sub-segment — matching the
/// driver's own one-point-per-overlap reporting convention.
pub fn segment_intersections(segments: &[Segment2D]) -> Intersections {
  let mut hits: Intersections = Intersections::new();
  for (a, b) in pairs(segments) {
    match crate::predicates::intersect(a, b) {
      Intersection::Empty => {}
      Intersection::Point(p) => {
        record(&mut hits, p, a, b);
      }
      Intersection::Overlap(overlap) => {
        record(&mut hits, overlap.lower().clone(), a, b);
      }
    }
  }
  hits
}

fn record(hits: &mut Intersections, point: Point2D, a: &Segment2D, b: &Segment2D) {
  let witnesses = hits.entry(point).or_insert_with(BTreeSet::new);
  witnesses.insert(a.clone());
  witnesses.insert(b.clone());
}

fn pairs<T>(slice: &[T]) -> impl Iterator<Item = (&T, &T)> {
  let n = slice.len();
  (0..n).flat_map(move |a| (0..a).map(move |b| (&slice[a], &slice[b])))
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
  fn finds_a_single_crossing() {
    let segments = vec![seg((0, 0), (2, 2)), seg((0, 2), (2, 0))];
    let hits = segment_intersections(&segments);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits.get(&p(1, 1)).unwrap().len(), 2);
  }

  #[test]
  fn no_crossings_among_disjoint_segments() {
    let segments = vec![seg((0, 0), (1, 0)), seg((2, 0), (3, 0))];
    assert!(segment_intersections(&segments).is_empty());
  }

  #[test]
  fn collinear_overlap_contributes_its_lower_endpoint() {
    let segments = vec![seg((0, 0), (3, 0)), seg((1, 0), (4, 0))];
    let hits = segment_intersections(&segments);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits.get(&p(3, 0)).unwrap().len(), 2);
  }

  #[test]
  fn three_segments_concurrent_at_one_point() {
    let segments = vec![
      seg((0, 0), (4, 4)),
      seg((0, 4), (4, 0)),
      seg((0, 2), (4, 2)),
    ];
    let hits = segment_intersections(&segments);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits.get(&p(2, 2)).unwrap().len(), 3);
  }
}
