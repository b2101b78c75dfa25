//! A line segment between two distinct points, canonicalised by sweep order.

use crate::{Point2D, Rational, SweepError};
use std::fmt;

/// An unordered pair of distinct endpoints `{p, q}`, canonicalised so that
/// `p1` is the *upper* endpoint under the sweep order `≺` and `p2` is the
/// *lower* one (`p1 ≺ p2`, strictly).
///
/// Two segments are equal iff their endpoint sets are equal. The derived
/// `Ord` (by upper endpoint, then lower) is an arbitrary but deterministic
/// total order, used only to key ordered collections such as
/// [`crate::Intersections`] — it carries no geometric meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Segment2D {
  p1: Point2D,
  p2: Point2D,
}

impl Segment2D {
  /// Build a canonical segment from two points.
  ///
  /// # Errors
  /// Returns [`SweepError::DegenerateSegment`] if the two points are equal.
  pub fn new(a: Point2D, b: Point2D) -> Result<Segment2D, SweepError> {
    if a == b {
      return Err(SweepError::DegenerateSegment {
        point: a.to_string(),
      });
    }
    let (p1, p2) = if a < b { (a, b) } else { (b, a) };
    Ok(Segment2D { p1, p2 })
  }

  /// The upper endpoint under the sweep order.
  pub fn upper(&self) -> &Point2D {
    &self.p1
  }

  /// The lower endpoint under the sweep order.
  pub fn lower(&self) -> &Point2D {
    &self.p2
  }

  pub fn is_vertical(&self) -> bool {
    self.p1.x == self.p2.x
  }

  /// The slope of the supporting line, or `None` for a vertical segment.
  pub fn slope(&self) -> Option<Rational> {
    if self.is_vertical() {
      return None;
    }
    let dy = &self.p2.y - &self.p1.y;
    let dx = &self.p2.x - &self.p1.x;
    Some((&dy / &dx).expect("non-vertical segment has a non-zero dx"))
  }

  /// The y-intercept of the supporting line, or `None` for a vertical
  /// segment (which has no single-valued intercept).
  pub fn y_intercept(&self) -> Option<Rational> {
    let slope = self.slope()?;
    // y = slope * x + b  =>  b = y - slope * x
    Some(&self.p1.y - &(&slope * &self.p1.x))
  }

  /// The x-coordinate on this segment's *supporting line* at ordinate `y`,
  /// not clipped to the segment's own extent. Vertical segments always
  /// return their constant x.
  pub fn x_at(&self, y: &Rational) -> Rational {
    if self.is_vertical() {
      return self.p1.x.clone();
    }
    let dy = &self.p2.y - &self.p1.y;
    let dx = &self.p2.x - &self.p1.x;
    // x = p1.x + dx * (y - p1.y) / dy
    let t = (&(y - &self.p1.y) / &dy).expect("non-vertical segment spans distinct y or is level");
    &self.p1.x + &(&dx * &t)
  }

  /// Axis-aligned bounding box as `(min, max)` corners.
  pub fn bounding_box(&self) -> (Point2D, Point2D) {
    let (x_lo, x_hi) = if self.p1.x <= self.p2.x {
      (&self.p1.x, &self.p2.x)
    } else {
      (&self.p2.x, &self.p1.x)
    };
    let (y_lo, y_hi) = if self.p1.y <= self.p2.y {
      (&self.p1.y, &self.p2.y)
    } else {
      (&self.p2.y, &self.p1.y)
    };
    (
      Point2D::new(x_lo.clone(), y_lo.clone()),
      Point2D::new(x_hi.clone(), y_hi.clone()),
    )
  }

  /// True iff `point` lies on the segment: collinear with both endpoints
  /// and within the (inclusive) bounding box.
  pub fn contains(&self, point: &Point2D) -> bool {
    let (min, max) = self.bounding_box();
    if point.x < min.x || point.x > max.x || point.y < min.y || point.y > max.y {
      return false;
    }
    crate::predicates::orientation(&self.p1, &self.p2, point) == crate::predicates::Orientation::Collinear
  }
}

impl fmt::Display for Segment2D {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{}", self.p1, self.p2)
  }
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

  #[test]
  fn canonicalises_endpoints_by_sweep_order() {
    let s = Segment2D::new(p(0, 0), p(1, 5)).unwrap();
    assert_eq!(s.upper(), &p(1, 5));
    assert_eq!(s.lower(), &p(0, 0));
  }

  #[test]
  fn rejects_equal_endpoints() {
    assert_eq!(
      Segment2D::new(p(1, 1), p(1, 1)),
      Err(SweepError::DegenerateSegment {
        point: p(1, 1).to_string()
      })
    );
  }

  #[test]
  fn vertical_segment_has_no_slope() {
    let s = Segment2D::new(p(1, 0), p(1, 5)).unwrap();
    assert!(s.is_vertical());
    assert_eq!(s.slope(), None);
    assert_eq!(s.x_at(&r(3)), r(1));
  }

  #[test]
  fn x_at_on_sloped_segment() {
    let s = Segment2D::new(p(0, 0), p(4, 4)).unwrap();
    assert_eq!(s.x_at(&r(2)), r(2));
  }

  #[test]
  fn contains_checks_bounding_box_and_collinearity() {
    let s = Segment2D::new(p(0, 0), p(4, 4)).unwrap();
    assert!(s.contains(&p(2, 2)));
    assert!(s.contains(&p(0, 0)));
    assert!(s.contains(&p(4, 4)));
    assert!(!s.contains(&p(5, 5)));
    assert!(!s.contains(&p(1, 2)));
  }
}
