//! Snapshot source abstraction.
//!
//! The poller asks a [`SnapshotSource`] for the current [`StatusSnapshot`]
//! once per cycle. The normal source is the posture monitor's `/data`
//! endpoint ([`HttpSource`]); a JSON file or an in-process channel can
//! stand in for it.

mod channel;
mod file;
mod http;
mod snapshot;

pub use channel::ChannelSource;
pub use file::FileSource;
pub use http::{HttpSource, DEFAULT_DATA_PATH};
pub use snapshot::StatusSnapshot;

use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::PollError;

/// Trait for fetching status snapshots from various sources.
///
/// # Example
///
/// ```
/// use posture_watch::{ChannelSource, SnapshotSource, StatusSnapshot};
///
/// # tokio_test::block_on(async {
/// let (tx, mut source) = ChannelSource::create("demo");
/// tx.send(StatusSnapshot { posture: Some("Good".into()), ..Default::default() }).unwrap();
///
/// let snapshot = source.fetch().await.unwrap();
/// assert_eq!(snapshot.posture.as_deref(), Some("Good"));
/// # });
/// ```
#[async_trait]
pub trait SnapshotSource: Send + Debug {
    /// Fetch the current snapshot.
    ///
    /// Any error means this cycle produced nothing usable; the caller
    /// keeps whatever it displayed before.
    async fn fetch(&mut self) -> Result<StatusSnapshot, PollError>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for log fields and the TUI header.
    fn description(&self) -> &str;
}
