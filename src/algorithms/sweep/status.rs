//! The sweep status: the segments currently crossing the sweep line,
//! ordered left-to-right by x at the current sweep y.
//!
//! The comparator is closed over a mutable "current sweep y" plus a
//! tie-break mode, per the design note in spec §9: before any structural
//! mutation for an event point `P`, the driver sets the current y to
//! `P.y` and selects a tie-break mode. Segments that momentarily share
//! `x_at(P.y) == P.x` are ordered by slope (vertical treated as `+∞`),
//! which gives the order they will occupy just below `P` — the same
//! computation also gives a well-defined order for segments that merely
//! pass through `P` (their relative order cannot have changed since the
//! previous event, because no two active segments can cross between
//! consecutive event points by construction), so both tie-break modes
//! named in the spec glossary resolve to the same comparator here; see
//! `DESIGN.md` for this as a recorded Open Question resolution.

use crate::{Point2D, Rational, Segment2D};
use std::cmp::Ordering;

/// Which of the two tie-break conventions named in spec §4.F/§9 is active.
/// Both resolve to the same slope-based comparator (see module docs); the
/// enum exists so callers can state their intent at each call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
  ThroughPoint,
  JustBelowPoint,
}

/// The segments currently crossing the sweep line.
#[derive(Debug, Clone)]
pub struct Status {
  active: Vec<Segment2D>,
  sweep_y: Rational,
  tie_break: TieBreak,
}

impl Status {
  pub fn new() -> Status {
    Status {
      active: Vec::new(),
      sweep_y: Rational::zero(),
      tie_break: TieBreak::JustBelowPoint,
    }
  }

  /// Set the current sweep position. Must be called before any insert,
  /// remove, or neighbour query performed while handling a given event
  /// point, per the atomicity requirement in spec §5.
  pub fn set_sweep(&mut self, y: Rational, tie_break: TieBreak) {
    self.sweep_y = y;
    self.tie_break = tie_break;
  }

  pub fn len(&self) -> usize {
    self.active.len()
  }

  pub fn is_empty(&self) -> bool {
    self.active.is_empty()
  }

  pub fn contains(&self, segment: &Segment2D) -> bool {
    self.active.contains(segment)
  }

  pub fn insert(&mut self, segment: Segment2D) {
    if !self.active.contains(&segment) {
      self.active.push(segment);
    }
  }

  pub fn remove(&mut self, segment: &Segment2D) {
    if let Some(idx) = self.active.iter().position(|s| s == segment) {
      self.active.remove(idx);
    }
  }

  /// Re-establish the x-at-sweep-y order after a batch of inserts/removes.
  pub fn resort(&mut self) {
    let y = self.sweep_y.clone();
    self.active.sort_by(|a, b| compare_segments(a, b, &y));
  }

  /// The segment immediately to the left of `segment`, if any.
  pub fn left_neighbour(&self, segment: &Segment2D) -> Option<&Segment2D> {
    let idx = self.active.iter().position(|s| s == segment)?;
    idx.checked_sub(1).map(|i| &self.active[i])
  }

  /// The segment immediately to the right of `segment`, if any.
  pub fn right_neighbour(&self, segment: &Segment2D) -> Option<&Segment2D> {
    let idx = self.active.iter().position(|s| s == segment)?;
    self.active.get(idx + 1)
  }

  /// Every active segment whose supporting line passes through `point`.
  pub fn segments_through(&self, point: &Point2D) -> Vec<Segment2D> {
    self
      .active
      .iter()
      .filter(|s| s.contains(point))
      .cloned()
      .collect()
  }

  /// The leftmost and rightmost segments in `block`, as currently ordered
  /// in the status (`block` is assumed to be a contiguous run).
  pub fn extremes_of<'a>(&self, block: &'a [Segment2D]) -> Option<(&'a Segment2D, &'a Segment2D)> {
    let mut ordered: Vec<&Segment2D> = block.iter().collect();
    ordered.sort_by(|a, b| {
      let pos_a = self.active.iter().position(|s| s == *a);
      let pos_b = self.active.iter().position(|s| s == *b);
      pos_a.cmp(&pos_b)
    });
    match (ordered.first(), ordered.last()) {
      (Some(first), Some(last)) => Some((*first, *last)),
      _ => None,
    }
  }
}

impl Default for Status {
  fn default() -> Status {
    Status::new()
  }
}

fn compare_segments(a: &Segment2D, b: &Segment2D, sweep_y: &Rational) -> Ordering {
  if a == b {
    return Ordering::Equal;
  }
  let xa = a.x_at(sweep_y);
  let xb = b.x_at(sweep_y);
  match xa.cmp(&xb) {
    Ordering::Equal => match (a.slope(), b.slope()) {
      (Some(sa), Some(sb)) => sa.cmp(&sb).then_with(|| stable_tiebreak(a, b)),
      (None, Some(_)) => Ordering::Greater,
      (Some(_), None) => Ordering::Less,
      (None, None) => stable_tiebreak(a, b),
    },
    ordering => ordering,
  }
}

/// A deterministic, content-based fallback for segments that tie on both
/// x-at-sweep-y and slope (collinear or identical segments).
fn stable_tiebreak(a: &Segment2D, b: &Segment2D) -> Ordering {
  (a.upper(), a.lower()).cmp(&(b.upper(), b.lower()))
}

#[cfg(test)]
mod tests {
  use super::*;

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
  fn orders_by_x_at_sweep_y() {
    let mut status = Status::new();
    let left = seg((0, -5), (0, 5));
    let right = seg((5, -5), (5, 5));
    status.insert(right.clone());
    status.insert(left.clone());
    status.set_sweep(r(0), TieBreak::JustBelowPoint);
    status.resort();
    assert_eq!(status.left_neighbour(&right), Some(&left));
    assert_eq!(status.right_neighbour(&left), Some(&right));
  }

  #[test]
  fn tie_break_by_slope_vertical_is_rightmost() {
    let mut status = Status::new();
    let vertical = seg((0, -5), (0, 5));
    let sloped = seg((-5, -5), (5, 5));
    status.insert(sloped.clone());
    status.insert(vertical.clone());
    status.set_sweep(r(0), TieBreak::JustBelowPoint);
    status.resort();
    assert_eq!(status.right_neighbour(&sloped), Some(&vertical));
  }

  #[test]
  fn segments_through_finds_exact_hits() {
    let mut status = Status::new();
    let a = seg((0, 0), (4, 4));
    let b = seg((0, 4), (4, 0));
    status.insert(a);
    status.insert(b);
    let hits = status.segments_through(&p(2, 2));
    assert_eq!(hits.len(), 2);
  }

  #[test]
  fn insert_is_idempotent_and_remove_works() {
    let mut status = Status::new();
    let a = seg((0, 0), (1, 1));
    status.insert(a.clone());
    status.insert(a.clone());
    assert_eq!(status.len(), 1);
    status.remove(&a);
    assert!(status.is_empty());
  }
}
