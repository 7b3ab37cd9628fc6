//! Channel-based data source.
//!
//! Receives status snapshots via a tokio watch channel. This lets another
//! part of the same process (a sensor loop, a test) publish snapshots
//! without going through HTTP.

use async_trait::async_trait;
use tokio::sync::watch;

use super::{SnapshotSource, StatusSnapshot};
use crate::error::PollError;

/// A data source that serves the latest snapshot pushed into a channel.
///
/// Like the `/data` endpoint, every fetch returns the current value, not
/// just changes. Once every sender is dropped the source reports
/// [`PollError::Disconnected`].
///
/// # Example
///
/// ```
/// use posture_watch::ChannelSource;
///
/// let (tx, source) = ChannelSource::create("sensor-loop");
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<StatusSnapshot>,
    description: String,
}

impl ChannelSource {
    /// Create a new channel source.
    pub fn new(receiver: watch::Receiver<StatusSnapshot>, source_description: &str) -> Self {
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
        }
    }

    /// Create a channel pair for sending snapshots to a ChannelSource.
    ///
    /// The source starts out serving an empty snapshot.
    pub fn create(source_description: &str) -> (watch::Sender<StatusSnapshot>, Self) {
        let (tx, rx) = watch::channel(StatusSnapshot::default());
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

#[async_trait]
impl SnapshotSource for ChannelSource {
    async fn fetch(&mut self) -> Result<StatusSnapshot, PollError> {
        if self.receiver.has_changed().is_err() {
            return Err(PollError::Disconnected);
        }
        Ok(self.receiver.borrow_and_update().clone())
    }

    fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_channel_source_fetch() {
        let (tx, mut source) = ChannelSource::create("test");

        // Initially serves the empty snapshot
        assert_eq!(source.fetch().await.unwrap(), StatusSnapshot::default());

        tx.send(StatusSnapshot {
            posture: Some("Warning".to_string()),
            ..Default::default()
        })
        .unwrap();

        // Repeated fetches keep returning the latest value
        for _ in 0..2 {
            let snapshot = source.fetch().await.unwrap();
            assert_eq!(snapshot.posture.as_deref(), Some("Warning"));
        }
    }

    #[tokio::test]
    async fn test_channel_source_disconnected() {
        let (tx, mut source) = ChannelSource::create("test");
        drop(tx);
        assert_eq!(source.fetch().await.unwrap_err(), PollError::Disconnected);
    }

    #[test]
    fn test_channel_source_description() {
        let (_tx, source) = ChannelSource::create("sensor-loop");
        assert_eq!(source.description(), "channel: sensor-loop");
    }
}
