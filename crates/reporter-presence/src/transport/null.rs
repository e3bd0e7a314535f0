//! Null-object transport for hosts built without a presence client SDK.

use async_trait::async_trait;
use reporter_common::ConnectionError;
use tokio::sync::mpsc;

use crate::activity::Activity;

use super::{PresenceTransport, TransportEvent};

/// Transport that reports the SDK as absent and swallows every call.
///
/// A bridge running on this transport never leaves `Disconnected` and never
/// fires an observer callback, so callers can use the bridge unconditionally
/// without checking SDK availability first.
pub struct NullTransport;

#[async_trait]
impl PresenceTransport for NullTransport {
    fn is_available(&self) -> bool {
        false
    }

    async fn open(
        &self,
        _application_id: &str,
    ) -> Result<mpsc::Receiver<TransportEvent>, ConnectionError> {
        // The bridge checks `is_available` first, so this is only reached
        // by direct callers; hand them an already-closed channel.
        let (_, rx) = mpsc::channel(1);
        Ok(rx)
    }

    async fn set_activity(&self, _activity: &Activity) -> Result<(), ConnectionError> {
        Ok(())
    }

    async fn clear_activity(&self) -> Result<(), ConnectionError> {
        Ok(())
    }

    async fn close(&self) {}
}
