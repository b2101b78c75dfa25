//! The sweep's event queue: a `BTreeMap` keyed by the sweep order `≺`, with
//! every event sharing a point delivered together as one group.

use crate::{Event, Point2D, Segment2D, SweepError};
use std::collections::BTreeMap;

/// All events sharing a single event point, deduplicated by segment
/// identity within each bucket.
#[derive(Debug, Clone, Default)]
pub struct EventGroup {
  pub starts: Vec<Segment2D>,
  pub ends: Vec<Segment2D>,
  pub intersections: bool,
}

impl EventGroup {
  fn add(&mut self, event: Event) {
    match event {
      Event::Start(s) => {
        if !self.starts.contains(&s) {
          self.starts.push(s);
        }
      }
      Event::End(s) => {
        if !self.ends.contains(&s) {
          self.ends.push(s);
        }
      }
      Event::Intersection(_) => self.intersections = true,
    }
  }

  pub fn is_empty(&self) -> bool {
    self.starts.is_empty() && self.ends.is_empty() && !self.intersections
  }

  /// All segments named by a `Start` or `End` event in this group, i.e.
  /// `U ∪ L` from spec §4.G step 2.b.
  pub fn named_segments(&self) -> Vec<Segment2D> {
    let mut all = self.starts.clone();
    for s in &self.ends {
      if !all.contains(s) {
        all.push(s.clone());
      }
    }
    all
  }
}

/// An ordered multiset of events, keyed by the sweep order `≺` of the
/// event's point. `insert` is idempotent: inserting the same `(kind,
/// point, segment)` twice has the same effect as inserting it once.
#[derive(Debug, Default)]
pub struct EventQueue {
  map: BTreeMap<Point2D, EventGroup>,
}

impl EventQueue {
  pub fn new() -> EventQueue {
    EventQueue {
      map: BTreeMap::new(),
    }
  }

  /// Seed a queue with a `Start` and `End` event for every segment.
  ///
  /// # Errors
  /// Returns [`SweepError::EmptyInput`] if `segments` is empty.
  pub fn from_segments(segments: &[Segment2D]) -> Result<EventQueue, SweepError> {
    if segments.is_empty() {
      return Err(SweepError::EmptyInput);
    }
    let mut queue = EventQueue::new();
    for segment in segments {
      queue.insert(Event::start(segment.clone()));
      queue.insert(Event::end(segment.clone()));
    }
    Ok(queue)
  }

  /// Insert an event, deduplicated against any existing event with the
  /// same `(kind, point, segment)`.
  pub fn insert(&mut self, event: Event) {
    let point = event.point();
    self.map.entry(point).or_default().add(event);
  }

  /// Remove and return every event at the sweep-minimal point.
  ///
  /// # Errors
  /// Returns [`SweepError::NoSuchElement`] if the queue is empty.
  pub fn poll(&mut self) -> Result<(Point2D, EventGroup), SweepError> {
    let point = self
      .map
      .keys()
      .next()
      .cloned()
      .ok_or(SweepError::NoSuchElement)?;
    let group = self.map.remove(&point).expect("just observed this key");
    Ok((point, group))
  }

  /// The sweep-minimal point without removing its events.
  pub fn peek(&self) -> Option<&Point2D> {
    self.map.keys().next()
  }

  pub fn is_empty(&self) -> bool {
    self.map.is_empty()
  }

  pub fn len(&self) -> usize {
    self.map.len()
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
  fn seg(a: (i64, i64), b: (i64, i64)) -> Segment2D {
    Segment2D::new(p(a.0, a.1), p(b.0, b.1)).unwrap()
  }

  #[test]
  fn from_segments_seeds_start_and_end() {
    let s = seg((0, 0), (1, 1));
    let mut q = EventQueue::from_segments(&[s.clone()]).unwrap();
    let (point, group) = q.poll().unwrap();
    assert_eq!(point, p(1, 1));
    assert_eq!(group.starts, vec![s.clone()]);
    assert!(group.ends.is_empty());

    let (point, group) = q.poll().unwrap();
    assert_eq!(point, p(0, 0));
    assert!(group.starts.is_empty());
    assert_eq!(group.ends, vec![s]);

    assert!(q.is_empty());
  }

  #[test]
  fn empty_input_is_rejected() {
    assert_eq!(
      EventQueue::from_segments(&[]).unwrap_err(),
      SweepError::EmptyInput
    );
  }

  #[test]
  fn poll_on_empty_queue_fails() {
    let mut q = EventQueue::new();
    assert_eq!(q.poll().unwrap_err(), SweepError::NoSuchElement);
  }

  #[test]
  fn insertion_is_idempotent() {
    let s = seg((0, 0), (1, 1));
    let mut q = EventQueue::new();
    q.insert(Event::start(s.clone()));
    q.insert(Event::start(s.clone()));
    let (_, group) = q.poll().unwrap();
    assert_eq!(group.starts.len(), 1);
  }

  #[test]
  fn single_segment_queue_then_empty() {
    let s = seg((0, 0), (1, 1));
    let mut q = EventQueue::from_segments(&[s]).unwrap();
    assert!(q.poll().is_ok());
    assert!(q.poll().is_ok());
    assert!(q.is_empty());
    assert_eq!(q.poll().unwrap_err(), SweepError::NoSuchElement);
  }
}
