//! Month layout engine.
//!
//! Turns a grid and an event list into a `MonthLayout`: which week row
//! and vertical track every multi-day bar occupies, how far each bar
//! spans before a week boundary cuts it, and which regular events each
//! day cell shows before truncation.

pub mod cells;
pub mod membership;
pub mod span;
pub mod tracks;

pub use cells::{BarSegment, CellEntry, CellLayout, MAX_EVENTS_PER_DAY, MonthLayout, SegmentKey};
pub use span::Span;
pub use tracks::TrackBoard;
