//! Transport seam between the bridge and the external presence client.
//!
//! The actual wire protocol (IPC socket, named pipe, vendor SDK) lives
//! behind [`PresenceTransport`]; the bridge only sees handshake completion
//! and closure events. Two implementations ship here: [`NullTransport`] for
//! hosts built without any client SDK, and [`LoopbackTransport`], an
//! in-memory stand-in driven by tests and headless environments.

mod loopback;
mod null;

pub use loopback::{LoopbackHandle, LoopbackTransport};
pub use null::NullTransport;

use async_trait::async_trait;
use reporter_common::ConnectionError;
use tokio::sync::mpsc;

use crate::activity::Activity;

/// Lifecycle signals a transport reports back to the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportEvent {
    /// Handshake with the external client completed.
    Ready,
    /// The link went away. `error` is set for involuntary closure.
    Closed { error: Option<ConnectionError> },
}

/// A command the transport forwarded to the external client.
///
/// Recorded by [`LoopbackTransport`] so tests and hosts can inspect what
/// would have been displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportCommand {
    SetActivity(Activity),
    ClearActivity,
    Close,
}

/// Connection to an external presence client.
///
/// The single connection handle is exclusively owned by the transport
/// object; the bridge never touches the wire directly.
#[async_trait]
pub trait PresenceTransport: Send + Sync {
    /// Whether an external client SDK is present at all. When this is
    /// false the bridge never attempts to connect.
    fn is_available(&self) -> bool;

    /// Open the connection for the given application id.
    ///
    /// Returns a receiver of lifecycle events; the handshake is complete
    /// when [`TransportEvent::Ready`] arrives.
    async fn open(
        &self,
        application_id: &str,
    ) -> Result<mpsc::Receiver<TransportEvent>, ConnectionError>;

    /// Replace the displayed activity.
    async fn set_activity(&self, activity: &Activity) -> Result<(), ConnectionError>;

    /// Remove the displayed activity.
    async fn clear_activity(&self) -> Result<(), ConnectionError>;

    /// Tear down the connection. Must be safe to call repeatedly.
    async fn close(&self);
}
