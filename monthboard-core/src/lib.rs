//! Core types and layout engine for the monthboard ecosystem.
//!
//! This crate provides everything the CLI and calendar providers share:
//! - `Event`, `CalendarInfo` and related display types
//! - the month-grid layout engine (`grid`, `layout`, `view`)
//! - `protocol` module for the CLI-provider communication protocol

pub mod calendar;
pub mod color;
pub mod error;
pub mod event;
pub mod grid;
pub mod layout;
pub mod month;
pub mod protocol;
pub mod view;

// Re-export the types most callers need at crate root for convenience
pub use calendar::CalendarInfo;
pub use error::{MonthboardError, MonthboardResult};
pub use event::{Event, EventKey, EventTime};
pub use layout::MonthLayout;
pub use month::Month;
pub use view::MonthView;
