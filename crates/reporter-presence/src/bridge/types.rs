//! Configuration and state types for the bridge.

use std::sync::atomic::AtomicU64;

use tokio::sync::RwLock;

use crate::activity::Activity;

use super::observer::ObserverSlot;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for the presence bridge.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// How long to wait for the client handshake before giving up.
    pub connect_timeout_secs: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
        }
    }
}

// ---------------------------------------------------------------------------
// Connection state
// ---------------------------------------------------------------------------

/// Lifecycle state of the connection to the external client.
///
/// Mutated only by the bridge itself; the valid paths are
/// `Disconnected -> Connecting -> Connected -> Disconnected` and
/// `Connecting -> Disconnected` for failed or cancelled attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Disconnected,
    Connecting,
    Connected,
}

// ---------------------------------------------------------------------------
// Shared internals
// ---------------------------------------------------------------------------

/// State shared between the bridge handle and its background tasks.
pub(crate) struct Shared {
    pub(crate) state: RwLock<ConnectionState>,
    pub(crate) current_activity: RwLock<Option<Activity>>,
    pub(crate) observer: ObserverSlot,
    /// Bumped by `shutdown`; tasks carrying a stale value stay silent.
    pub(crate) generation: AtomicU64,
}

impl Shared {
    pub(crate) fn new() -> Self {
        Self {
            state: RwLock::new(ConnectionState::Disconnected),
            current_activity: RwLock::new(None),
            observer: ObserverSlot::new(),
            generation: AtomicU64::new(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.connect_timeout_secs, 10);
    }

    #[tokio::test]
    async fn shared_starts_disconnected() {
        let shared = Shared::new();
        assert_eq!(*shared.state.read().await, ConnectionState::Disconnected);
        assert!(shared.current_activity.read().await.is_none());
    }
}
