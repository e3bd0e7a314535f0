//! Background task that translates `TransportEvent`s into state
//! transitions and observer callbacks.

use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use reporter_common::ConnectionError;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::transport::TransportEvent;

use super::types::{ConnectionState, Shared};

/// Pump transport events for one connection attempt.
///
/// `generation` is the counter value captured when the attempt started; a
/// `shutdown` (or a newer `initialize`) bumps the live counter, and every
/// transition here re-checks it so no late callback fires afterwards.
pub(crate) async fn event_pump(
    mut event_rx: mpsc::Receiver<TransportEvent>,
    connect_timeout: Duration,
    generation: u64,
    shared: Arc<Shared>,
) {
    // Handshake phase: the first event must arrive within the timeout.
    let first = match tokio::time::timeout(connect_timeout, event_rx.recv()).await {
        Ok(Some(event)) => event,
        Ok(None) => {
            debug!("presence transport closed before handshake");
            abort_connect(generation, &shared).await;
            return;
        }
        Err(_elapsed) => {
            warn!(
                timeout_secs = connect_timeout.as_secs(),
                "presence handshake timed out"
            );
            abort_connect(generation, &shared).await;
            return;
        }
    };

    match first {
        TransportEvent::Ready => {
            if !is_current(generation, &shared) {
                debug!("connect completed after shutdown, ignoring");
                return;
            }
            {
                let mut state = shared.state.write().await;
                if *state != ConnectionState::Connecting {
                    return;
                }
                *state = ConnectionState::Connected;
            }
            info!("presence client connected");
            shared.observer.notify_connect();
        }
        TransportEvent::Closed { error } => {
            // Never reached Connected, so no observer callback.
            match error {
                Some(e) => warn!(error = %e, "presence handshake failed"),
                None => debug!("presence client closed during handshake"),
            }
            abort_connect(generation, &shared).await;
            return;
        }
    }

    // Connected phase: watch for involuntary closure.
    while let Some(event) = event_rx.recv().await {
        match event {
            TransportEvent::Closed { error } => {
                disconnect(generation, &shared, error).await;
                return;
            }
            TransportEvent::Ready => {
                // Duplicate handshake signal; Connected stays Connected.
                debug!("duplicate ready event from transport, ignoring");
            }
        }
    }

    // Sender dropped without a close event.
    disconnect(
        generation,
        &shared,
        Some(ConnectionError::ConnectionLost(
            "transport channel closed".into(),
        )),
    )
    .await;
}

/// Roll a failed or cancelled attempt back to `Disconnected`, silently.
pub(crate) async fn abort_connect(generation: u64, shared: &Shared) {
    if !is_current(generation, shared) {
        return;
    }
    let mut state = shared.state.write().await;
    if *state == ConnectionState::Connecting {
        *state = ConnectionState::Disconnected;
    }
}

/// Handle an involuntary `Connected -> Disconnected` transition.
async fn disconnect(generation: u64, shared: &Shared, error: Option<ConnectionError>) {
    if !is_current(generation, shared) {
        return;
    }
    {
        let mut state = shared.state.write().await;
        if *state != ConnectionState::Connected {
            return;
        }
        *state = ConnectionState::Disconnected;
    }
    shared.current_activity.write().await.take();

    match &error {
        Some(e) => warn!(error = %e, "presence client disconnected"),
        None => info!("presence client disconnected"),
    }
    shared.observer.notify_disconnect(error);
}

fn is_current(generation: u64, shared: &Shared) -> bool {
    shared.generation.load(Ordering::SeqCst) == generation
}
