//! Exact-arithmetic Bentley–Ottmann plane-sweep engine.
//!
//! This crate is the core of a larger computational-geometry library: it
//! reports every intersection point among a set of line segments, using
//! arbitrary-precision [`Rational`] coordinates so that no decision is
//! corrupted by floating-point rounding.
//!
//! # Layout
//! - [`rational`] — the exact rational kernel.
//! - [`data`] — `Point2D`, `Segment2D`, `Line2D`, and `Event`.
//! - [`predicates`] — orientation, collinearity, and segment intersection.
//! - [`algorithms::sweep`] — the event queue, sweep status, and driver.
//!
//! Parsing text into rationals/points/segments, convex hulls, and anything
//! touching the screen or a filesystem are deliberately out of scope; see
//! this crate's design notes for the list of external collaborators the
//! core expects.

pub mod algorithms;
pub mod data;
pub mod predicates;
pub mod rational;

pub use algorithms::sweep::{build_intersections, Driver, Intersections};
pub use data::{Event, Line2D, Point2D, Segment2D};
pub use predicates::{orientation, Intersection, Orientation};
pub use rational::Rational;

/// The error taxonomy for this crate. Every fallible entry point returns
/// `Result<_, SweepError>`; nothing is recovered internally, and the sweep
/// driver itself never produces an error while handling events (malformed
/// input is rejected at construction, before the driver ever sees it).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SweepError {
  #[error("invalid number: {text:?}")]
  InvalidNumber { text: String },

  #[error("division by zero")]
  DivisionByZero,

  #[error("segment has equal endpoints at {point}")]
  DegenerateSegment { point: String },

  #[error("empty input: at least one segment is required")]
  EmptyInput,

  #[error("no such element: queue is empty")]
  NoSuchElement,

  #[error("invalid argument: {message}")]
  InvalidArgument { message: String },
}
