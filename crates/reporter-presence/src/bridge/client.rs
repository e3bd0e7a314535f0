//! The bridge handle exposed to the host application.

use std::sync::atomic::Ordering;
use std::sync::{Arc, Weak};
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::activity::Activity;
use crate::transport::{NullTransport, PresenceTransport};

use super::event_pump::{abort_connect, event_pump};
use super::observer::BridgeObserver;
use super::types::{BridgeConfig, ConnectionState, Shared};

// ---------------------------------------------------------------------------
// Bridge
// ---------------------------------------------------------------------------

/// Mediates all activity updates through one connection to the external
/// presence client.
///
/// Built once by the host's composition root and passed around by handle;
/// there is no global instance. All methods are fire-and-forget: failures
/// are logged or reported through the observer, never raised to the caller,
/// and a missing presence update is not a correctness failure for the host.
pub struct PresenceBridge {
    config: BridgeConfig,
    transport: Arc<dyn PresenceTransport>,
    shared: Arc<Shared>,
}

impl PresenceBridge {
    pub fn new(config: BridgeConfig, transport: Arc<dyn PresenceTransport>) -> Self {
        Self {
            config,
            transport,
            shared: Arc::new(Shared::new()),
        }
    }

    /// Bridge wired to the null transport, for hosts running without any
    /// presence client SDK. Every method is a safe no-op.
    pub fn disabled(config: BridgeConfig) -> Self {
        Self::new(config, Arc::new(NullTransport))
    }

    /// Register the lifecycle observer.
    ///
    /// The reference is non-owning; a dropped observer is skipped at
    /// delivery time.
    pub fn set_observer(&self, observer: Weak<dyn BridgeObserver>) {
        self.shared.observer.set(observer);
    }

    /// Establish the connection for the given application id.
    ///
    /// Non-blocking: the handshake runs on a background task and completion
    /// is reported through the observer. A no-op while a connection is
    /// already being established or active, and a no-op when the transport
    /// reports no SDK present.
    pub async fn initialize(&self, application_id: &str) {
        if !self.transport.is_available() {
            debug!("presence client unavailable, staying disconnected");
            return;
        }

        {
            let mut state = self.shared.state.write().await;
            match *state {
                ConnectionState::Disconnected => *state = ConnectionState::Connecting,
                current => {
                    debug!(state = ?current, "initialize ignored, connection already active");
                    return;
                }
            }
        }

        info!(application_id = %application_id, "presence client connecting");

        let generation = self.shared.generation.load(Ordering::SeqCst);
        let connect_timeout = Duration::from_secs(self.config.connect_timeout_secs);
        let transport = Arc::clone(&self.transport);
        let shared = Arc::clone(&self.shared);
        let application_id = application_id.to_string();

        tokio::spawn(async move {
            match transport.open(&application_id).await {
                Ok(event_rx) => {
                    event_pump(event_rx, connect_timeout, generation, shared).await;
                }
                Err(e) => {
                    warn!(error = %e, "failed to open presence transport");
                    abort_connect(generation, &shared).await;
                }
            }
        });
    }

    /// Replace the displayed activity.
    ///
    /// Dropped with a debug log when not connected; updates are not queued.
    /// Button lists longer than [`crate::MAX_BUTTONS`] are truncated before
    /// forwarding.
    pub async fn set_activity(&self, activity: Activity) {
        if *self.shared.state.read().await != ConnectionState::Connected {
            debug!("activity update dropped, not connected");
            return;
        }

        let activity = activity.clamp_buttons();
        if let Err(e) = self.transport.set_activity(&activity).await {
            debug!(error = %e, "failed to forward activity update");
            return;
        }
        *self.shared.current_activity.write().await = Some(activity);
    }

    /// Remove the displayed activity. No-op when none is set.
    pub async fn clear_activity(&self) {
        let connected = *self.shared.state.read().await == ConnectionState::Connected;
        let had_activity = self.shared.current_activity.write().await.take().is_some();
        if !had_activity {
            return;
        }
        if connected {
            if let Err(e) = self.transport.clear_activity().await {
                debug!(error = %e, "failed to clear activity");
            }
        }
    }

    /// Tear down the connection. Safe to call repeatedly.
    ///
    /// Suppresses any in-flight connect attempt, so no callback fires after
    /// this returns. The observer sees `on_disconnect(None)` only when the
    /// bridge was actually connected.
    pub async fn shutdown(&self) {
        // Invalidate in-flight pumps before touching state.
        self.shared.generation.fetch_add(1, Ordering::SeqCst);

        let was_connected = {
            let mut state = self.shared.state.write().await;
            let was = *state == ConnectionState::Connected;
            *state = ConnectionState::Disconnected;
            was
        };
        self.shared.current_activity.write().await.take();
        self.transport.close().await;

        if was_connected {
            info!("presence client shut down");
            self.shared.observer.notify_disconnect(None);
        }
    }

    pub async fn state(&self) -> ConnectionState {
        *self.shared.state.read().await
    }

    pub async fn is_connected(&self) -> bool {
        *self.shared.state.read().await == ConnectionState::Connected
    }

    /// The activity currently displayed by the external client, if any.
    pub async fn current_activity(&self) -> Option<Activity> {
        self.shared.current_activity.read().await.clone()
    }
}
