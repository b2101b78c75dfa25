//! Bentley–Ottmann sweep-line intersection detection.
//!
//! This module implements the classic Bentley–Ottmann algorithm for
//! reporting every intersection point among a set of line segments. The
//! sweep line advances top-to-bottom across an event queue seeded with
//! segment endpoints, dynamically enriched with discovered intersection
//! points. An order-statistics-style status structure tracks the segments
//! currently crossing the sweep line, ordered left-to-right at the current
//! sweep position.
//!
//! # High-level workflow
//! 1. **Event queue** ([`queue::EventQueue`]) – ordered lexicographically by
//!    the sweep order `≺`, seeded with every segment's start and end.
//! 2. **Status structure** ([`status::Status`]) – holds the segments
//!    currently active, ordered by x at the current sweep y, with an
//!    explicit slope tie-break for segments that pass through the current
//!    event point.
//! 3. **Driver** ([`driver::Driver`]) – for each event point, segments
//!    starting or ending are inserted or removed, newly adjacent pairs are
//!    tested for intersection, and any discovered intersection is injected
//!    back into the queue.
//! 4. **Reporting** – every point at which two or more segments meet is
//!    recorded, together with the full set of segments passing through it.
//!
//! The algorithm runs in `O((n + k) log n)` time, where `n` is the number
//! of segments and `k` the number of intersection points, and uses `O(n)`
//! memory for the queue and status structure. Coordinates are exact
//! [`crate::Rational`] values throughout: there is no floating-point fast
//! path, by design (see the crate's design notes).
//!
//! # Testing guidance
//! - **Common cases** – a handful of crossing segments, compared against
//!   the [`naive`] quadratic baseline.
//! - **Special cases** – collinear overlaps, shared endpoints, vertical
//!   segments, and three-or-more segments concurrent at one point. These
//!   stress the event-group deduplication and the status tie-break.
//! - **Tricky cases** – intersections discovered strictly below the
//!   triggering event (via newly adjacent neighbours after a swap), and
//!   segments that merely touch without crossing.
//! - **Property checks** – proptest generators comparing the sweep
//!   driver's output against the naive baseline on small random segment
//!   sets.

mod driver;
mod naive;
mod queue;
mod status;

pub use driver::{build_intersections, Driver, Intersections};
pub use naive::segment_intersections as naive_segment_intersections;
pub use queue::{EventGroup, EventQueue};
pub use status::{Status, TieBreak};
