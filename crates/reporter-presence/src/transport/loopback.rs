//! In-memory transport driven from the other end by a [`LoopbackHandle`].
//!
//! Stands in for the real client SDK in tests and headless environments:
//! the handle plays the external client, accepting or dropping the link
//! and recording every command the bridge forwards.

use std::sync::Arc;

use async_trait::async_trait;
use reporter_common::ConnectionError;
use tokio::sync::{mpsc, Mutex, Notify};

use crate::activity::Activity;

use super::{PresenceTransport, TransportCommand, TransportEvent};

struct LoopbackShared {
    /// Sender for the receiver handed out by the last `open` call.
    event_tx: Mutex<Option<mpsc::Sender<TransportEvent>>>,
    /// Application id from the last `open` call.
    application_id: Mutex<Option<String>>,
    /// Commands forwarded by the bridge, in order.
    commands: Mutex<Vec<TransportCommand>>,
    /// Error to return from the next `open` call.
    next_open_error: Mutex<Option<ConnectionError>>,
    /// Signaled whenever `open` completes, so the handle can wait for it.
    opened: Notify,
}

/// Transport half, handed to the bridge.
pub struct LoopbackTransport {
    shared: Arc<LoopbackShared>,
}

/// Client half, kept by the test or host driving the link.
#[derive(Clone)]
pub struct LoopbackHandle {
    shared: Arc<LoopbackShared>,
}

impl LoopbackTransport {
    pub fn new() -> (Self, LoopbackHandle) {
        let shared = Arc::new(LoopbackShared {
            event_tx: Mutex::new(None),
            application_id: Mutex::new(None),
            commands: Mutex::new(Vec::new()),
            next_open_error: Mutex::new(None),
            opened: Notify::new(),
        });
        (
            Self {
                shared: Arc::clone(&shared),
            },
            LoopbackHandle { shared },
        )
    }
}

#[async_trait]
impl PresenceTransport for LoopbackTransport {
    fn is_available(&self) -> bool {
        true
    }

    async fn open(
        &self,
        application_id: &str,
    ) -> Result<mpsc::Receiver<TransportEvent>, ConnectionError> {
        if let Some(err) = self.shared.next_open_error.lock().await.take() {
            return Err(err);
        }

        let (tx, rx) = mpsc::channel(16);
        *self.shared.event_tx.lock().await = Some(tx);
        *self.shared.application_id.lock().await = Some(application_id.to_string());
        self.shared.opened.notify_waiters();
        Ok(rx)
    }

    async fn set_activity(&self, activity: &Activity) -> Result<(), ConnectionError> {
        self.shared
            .commands
            .lock()
            .await
            .push(TransportCommand::SetActivity(activity.clone()));
        Ok(())
    }

    async fn clear_activity(&self) -> Result<(), ConnectionError> {
        self.shared
            .commands
            .lock()
            .await
            .push(TransportCommand::ClearActivity);
        Ok(())
    }

    async fn close(&self) {
        self.shared
            .commands
            .lock()
            .await
            .push(TransportCommand::Close);
        // Drop the sender so any pump still listening sees end-of-stream.
        self.shared.event_tx.lock().await.take();
    }
}

impl LoopbackHandle {
    /// Complete the handshake, as the external client accepting the app.
    ///
    /// Waits for the bridge to open the transport first, so it is safe to
    /// call right after a fire-and-forget `initialize`. A no-op when the
    /// transport is closed and stays closed.
    pub async fn accept(&self) {
        if let Some(tx) = self.wait_for_open().await {
            let _ = tx.send(TransportEvent::Ready).await;
        }
    }

    /// Drop the link, as an external client crash or network failure.
    pub async fn drop_link(&self, error: Option<ConnectionError>) {
        if let Some(tx) = self.wait_for_open().await {
            let _ = tx.send(TransportEvent::Closed { error }).await;
        }
    }

    /// Make the next `open` call fail with the given error.
    pub async fn fail_next_open(&self, error: ConnectionError) {
        *self.shared.next_open_error.lock().await = Some(error);
    }

    /// Application id the bridge opened the transport with, if any.
    pub async fn application_id(&self) -> Option<String> {
        self.shared.application_id.lock().await.clone()
    }

    /// Every command the bridge has forwarded, in order.
    pub async fn commands(&self) -> Vec<TransportCommand> {
        self.shared.commands.lock().await.clone()
    }

    /// Bounded so a handle poking a transport that was shut down and never
    /// reopened gives up instead of hanging its caller.
    async fn wait_for_open(&self) -> Option<mpsc::Sender<TransportEvent>> {
        for _ in 0..200 {
            let notified = self.shared.opened.notified();
            if let Some(tx) = self.shared.event_tx.lock().await.clone() {
                return Some(tx);
            }
            let _ = tokio::time::timeout(std::time::Duration::from_millis(5), notified).await;
        }
        None
    }
}
