//! Bundled implementations of [`Observer`](crate::Observer).
//!
//! * [`default`] collects the whole stream as owned [`Event`](crate::Event)s.
//!   The easiest to use and the test workhorse.
//! * [`callback`] funnels borrowed events through a single closure, with no
//!   per-event allocation.
//! * [`fanout`] replays the stream to several observers at once.

pub mod callback;
pub mod default;
pub mod fanout;
