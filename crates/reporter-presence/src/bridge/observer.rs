//! Non-owning observer of bridge lifecycle transitions.

use std::sync::{RwLock, Weak};

use reporter_common::ConnectionError;
use tracing::debug;

/// Receives connect/disconnect notifications from the bridge.
///
/// Held as a [`Weak`] reference: the bridge never extends the observer's
/// lifetime, and delivery silently skips an observer that has already been
/// dropped.
pub trait BridgeObserver: Send + Sync {
    /// Fired exactly once per successful `Connecting -> Connected` transition.
    fn on_connect(&self);

    /// Fired on every `Connected -> Disconnected` transition. `error` is
    /// set for involuntary loss, `None` for a voluntary shutdown.
    fn on_disconnect(&self, error: Option<ConnectionError>);
}

/// Slot holding the weak observer reference.
pub(crate) struct ObserverSlot {
    inner: RwLock<Option<Weak<dyn BridgeObserver>>>,
}

impl ObserverSlot {
    pub(crate) fn new() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    pub(crate) fn set(&self, observer: Weak<dyn BridgeObserver>) {
        if let Ok(mut slot) = self.inner.write() {
            *slot = Some(observer);
        }
    }

    pub(crate) fn notify_connect(&self) {
        if let Some(observer) = self.live() {
            observer.on_connect();
        } else {
            debug!("no live observer for connect notification");
        }
    }

    pub(crate) fn notify_disconnect(&self, error: Option<ConnectionError>) {
        if let Some(observer) = self.live() {
            observer.on_disconnect(error);
        } else {
            debug!("no live observer for disconnect notification");
        }
    }

    /// Upgrade the weak reference, checking liveness before delivery.
    fn live(&self) -> Option<std::sync::Arc<dyn BridgeObserver>> {
        let slot = self.inner.read().ok()?;
        slot.as_ref()?.upgrade()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Counting {
        connects: AtomicUsize,
    }

    impl BridgeObserver for Counting {
        fn on_connect(&self) {
            self.connects.fetch_add(1, Ordering::SeqCst);
        }

        fn on_disconnect(&self, _error: Option<ConnectionError>) {}
    }

    #[test]
    fn delivers_to_live_observer() {
        let observer = Arc::new(Counting {
            connects: AtomicUsize::new(0),
        });
        let slot = ObserverSlot::new();
        let weak = Arc::downgrade(&observer);
        slot.set(weak);

        slot.notify_connect();
        assert_eq!(observer.connects.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn skips_dropped_observer() {
        let observer = Arc::new(Counting {
            connects: AtomicUsize::new(0),
        });
        let slot = ObserverSlot::new();
        let weak = Arc::downgrade(&observer);
        slot.set(weak);

        drop(observer);
        slot.notify_connect();
        slot.notify_disconnect(None);
    }

    #[test]
    fn empty_slot_is_silent() {
        let slot = ObserverSlot::new();
        slot.notify_connect();
        slot.notify_disconnect(Some(ConnectionError::ConnectionLost("gone".into())));
    }
}
