//! The Bentley–Ottmann main loop: the incremental [`Driver`] and the
//! one-call [`build_intersections`] entry point.

use crate::algorithms::sweep::{EventGroup, EventQueue, Status, TieBreak};
use crate::data::Event;
use crate::predicates::{self, Intersection};
use crate::{Point2D, Segment2D, SweepError};
use std::collections::{BTreeMap, BTreeSet};
use tracing::instrument;

/// A mapping from intersection point to every segment meeting there.
pub type Intersections = BTreeMap<Point2D, BTreeSet<Segment2D>>;

/// The one-call form: every intersection among `segments`, with witnesses.
///
/// # Errors
/// Returns [`SweepError::EmptyInput`] if `segments` is empty.
pub fn build_intersections(segments: &[Segment2D]) -> Result<Intersections, SweepError> {
  let mut driver = Driver::new();
  driver.seed(segments)?;
  while !driver.is_empty() {
    let (point, events) = driver.poll()?;
    driver.handle(point, events);
  }
  Ok(driver.intersections().clone())
}

/// Incremental Bentley–Ottmann driver: own the event queue and status, and
/// advance one event-group at a time.
#[derive(Debug)]
pub struct Driver {
  queue: EventQueue,
  status: Status,
  intersections: Intersections,
}

impl Default for Driver {
  fn default() -> Driver {
    Driver::new()
  }
}

impl Driver {
  pub fn new() -> Driver {
    Driver {
      queue: EventQueue::new(),
      status: Status::new(),
      intersections: Intersections::new(),
    }
  }

  /// Seed the driver's queue with a START and END event for every segment.
  ///
  /// # Errors
  /// Returns [`SweepError::EmptyInput`] if `segments` is empty.
  pub fn seed(&mut self, segments: &[Segment2D]) -> Result<(), SweepError> {
    self.queue = EventQueue::from_segments(segments)?;
    Ok(())
  }

  /// Remove and return the events at the sweep-minimal point, without
  /// handling them. Pair with [`Driver::handle`] to drive the loop
  /// manually; [`build_intersections`] does exactly this.
  ///
  /// # Errors
  /// Returns [`SweepError::NoSuchElement`] if the queue is empty.
  pub fn poll(&mut self) -> Result<(Point2D, EventGroup), SweepError> {
    self.queue.poll()
  }

  /// True once the queue has no more pending events.
  pub fn is_empty(&self) -> bool {
    self.queue.is_empty()
  }

  pub fn intersections(&self) -> &Intersections {
    &self.intersections
  }

  /// Number of segments currently crossing the sweep line.
  pub fn size(&self) -> usize {
    self.status.len()
  }

  pub fn has_intersections(&self) -> bool {
    !self.intersections.is_empty()
  }

  /// Handle every event sharing one sweep-order-minimal point: spec §4.G
  /// step 2.
  #[instrument(level = "debug", skip(self, events), fields(x = %point.x, y = %point.y))]
  pub fn handle(&mut self, point: Point2D, events: EventGroup) {
    let starting: BTreeSet<Segment2D> = events.starts.iter().cloned().collect();
    let ending: BTreeSet<Segment2D> = events.ends.iter().cloned().collect();

    let through = self.status.segments_through(&point);
    let passing_through: BTreeSet<Segment2D> = through
      .into_iter()
      .filter(|s| !starting.contains(s) && !ending.contains(s))
      .collect();

    // A segment merely passing through `point` while collinear-overlapping a
    // segment that starts or ends here is continuing an overlap already
    // witnessed elsewhere, not discovering a new one, unless `point` is that
    // overlap's own lower endpoint — its one designated reporting point.
    // Without this check a two-segment overlap is witnessed twice, once at
    // each of its boundary points.
    let touching: BTreeSet<Segment2D> = starting.union(&ending).cloned().collect();
    let witness_passing_through: BTreeSet<Segment2D> = passing_through
      .iter()
      .filter(|candidate| {
        let mut overlaps_any = false;
        let mut overlap_matches_here = false;
        for other in &touching {
          if let Intersection::Overlap(overlap) = predicates::intersect(candidate, other) {
            overlaps_any = true;
            if overlap.lower() == &point {
              overlap_matches_here = true;
            }
          }
        }
        !overlaps_any || overlap_matches_here
      })
      .cloned()
      .collect();

    let mut witnesses: BTreeSet<Segment2D> = starting.clone();
    witnesses.extend(ending.iter().cloned());
    witnesses.extend(witness_passing_through.iter().cloned());
    if witnesses.len() >= 2 {
      tracing::debug!(witnesses = witnesses.len(), "intersection point");
      self
        .intersections
        .entry(point.clone())
        .or_insert_with(BTreeSet::new)
        .extend(witnesses.iter().cloned());
    }

    let to_remove: BTreeSet<Segment2D> = ending.union(&passing_through).cloned().collect();
    let to_insert: BTreeSet<Segment2D> = starting.union(&passing_through).cloned().collect();

    let mut fallback_neighbours: Option<(Option<Segment2D>, Option<Segment2D>)> = None;
    if to_insert.is_empty() {
      let removed: Vec<Segment2D> = to_remove.iter().cloned().collect();
      if let Some((leftmost, rightmost)) = self.status.extremes_of(&removed) {
        let left = self.status.left_neighbour(leftmost).cloned();
        let right = self.status.right_neighbour(rightmost).cloned();
        fallback_neighbours = Some((left, right));
      }
    }

    for segment in &to_remove {
      self.status.remove(segment);
    }

    self.status.set_sweep(point.y.clone(), TieBreak::JustBelowPoint);
    for segment in &to_insert {
      self.status.insert(segment.clone());
    }
    self.status.resort();

    if to_insert.is_empty() {
      if let Some((left, right)) = fallback_neighbours {
        find_new_event(left.as_ref(), right.as_ref(), &point, &mut self.queue);
      }
    } else {
      let inserted: Vec<Segment2D> = to_insert.iter().cloned().collect();
      if let Some((leftmost, rightmost)) = self.status.extremes_of(&inserted) {
        let left_of_leftmost = self.status.left_neighbour(leftmost).cloned();
        find_new_event(left_of_leftmost.as_ref(), Some(leftmost), &point, &mut self.queue);
        let right_of_rightmost = self.status.right_neighbour(rightmost).cloned();
        find_new_event(Some(rightmost), right_of_rightmost.as_ref(), &point, &mut self.queue);
      }
    }
  }
}

/// Spec §4.G step 3: test a candidate neighbouring pair and, if their
/// intersection lies strictly below `point` (or on the same sweep line but
/// strictly to its right), schedule an `INTERSECTION` event for it.
fn find_new_event(
  a: Option<&Segment2D>,
  b: Option<&Segment2D>,
  point: &Point2D,
  queue: &mut EventQueue,
) {
  let (a, b) = match (a, b) {
    (Some(a), Some(b)) => (a, b),
    _ => return,
  };
  if a == b {
    return;
  }
  match predicates::intersect(a, b) {
    Intersection::Empty => {}
    Intersection::Point(q) => {
      if should_schedule(point, &q) {
        queue.insert(Event::intersection(q));
      }
    }
    Intersection::Overlap(overlap) => {
      // The overlap's one designated reporting point, matching `handle`'s
      // witnessing convention.
      let lower = overlap.lower();
      if should_schedule(point, lower) {
        queue.insert(Event::intersection(lower.clone()));
      }
    }
  }
}

/// `q` is strictly below `p` in the sweep order, or at the same y but
/// strictly to the right — exactly `p ≺ q`, i.e. `p < q` under
/// [`Point2D`]'s `Ord`.
fn should_schedule(p: &Point2D, q: &Point2D) -> bool {
  p < q
}
