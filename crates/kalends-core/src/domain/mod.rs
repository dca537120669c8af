//! Calendar value types.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Instant`] | Immutable point in time with a fixed UTC offset |
//! | [`Interval`] | Signed duration in a single calendar [`Unit`] |
//! | [`DateDiff`] | Difference between two instants, split into units |

mod diff;
pub(crate) mod instant;
mod interval;

pub use diff::DateDiff;
pub use instant::Instant;
pub use interval::{Interval, Unit};
