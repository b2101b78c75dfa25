//! The event taxonomy consumed by the sweep: a segment starting, a segment
//! ending, or an intersection discovered between two (or more) segments.

use crate::{Point2D, Segment2D};

/// A tagged sweep event. `Start`/`End` events own the segment that
/// triggers a status insertion/removal; `Intersection` events carry only
/// the point — the participating segments are rediscovered by a status
/// lookup at handling time (spec §4.D).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Event {
  Start(Segment2D),
  End(Segment2D),
  Intersection(Point2D),
}

impl Event {
  pub fn start(segment: Segment2D) -> Event {
    Event::Start(segment)
  }

  pub fn end(segment: Segment2D) -> Event {
    Event::End(segment)
  }

  pub fn intersection(point: Point2D) -> Event {
    Event::Intersection(point)
  }

  /// The point this event is keyed on: a `Start` event keys on the
  /// segment's upper endpoint, an `End` event on its lower endpoint.
  pub fn point(&self) -> Point2D {
    match self {
      Event::Start(s) => s.upper().clone(),
      Event::End(s) => s.lower().clone(),
      Event::Intersection(p) => p.clone(),
    }
  }
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

  #[test]
  fn start_keys_on_upper_endpoint() {
    let s = Segment2D::new(p(0, 0), p(1, 5)).unwrap();
    assert_eq!(Event::start(s.clone()).point(), p(1, 5));
    assert_eq!(Event::end(s).point(), p(0, 0));
  }

  #[test]
  fn intersection_keys_on_its_point() {
    assert_eq!(Event::intersection(p(2, 2)).point(), p(2, 2));
  }
}
