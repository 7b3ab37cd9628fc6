//! Value processing for status snapshots.
//!
//! ## Submodules
//!
//! - [`duration`]: Parsing and formatting of duration strings (e.g., "1s", "500ms")
//! - [`status`]: Mapping reported statuses to card classes, and blink display text

pub mod duration;
pub mod status;

pub use status::{blink_text, StatusClass};
