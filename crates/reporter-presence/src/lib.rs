//! Status-presence bridge.
//!
//! Forwards rich-presence updates (details, state, timestamps, images,
//! buttons) to an external social client and reports connect/disconnect
//! lifecycle events back to a registered observer. The wire protocol to the
//! external client is behind the [`PresenceTransport`] trait; hosts built
//! without the client SDK run on [`NullTransport`] and every call becomes a
//! safe no-op.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use reporter_presence::{Activity, BridgeConfig, LoopbackTransport, PresenceBridge};
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let (transport, _handle) = LoopbackTransport::new();
//! let bridge = PresenceBridge::new(BridgeConfig::default(), Arc::new(transport));
//! bridge.initialize("1383904378154651768").await;
//! bridge
//!     .set_activity(Activity::new().details("Playing").state("Level 1"))
//!     .await;
//! # }
//! ```

pub mod activity;
pub mod bridge;
pub mod transport;

pub use activity::{Activity, ActivityButton, MAX_BUTTONS};
pub use bridge::{BridgeConfig, BridgeObserver, ConnectionState, PresenceBridge};
pub use transport::{
    LoopbackHandle, LoopbackTransport, NullTransport, PresenceTransport, TransportCommand,
    TransportEvent,
};

// Re-exported so observers can match on disconnect errors without pulling
// in reporter-common directly.
pub use reporter_common::ConnectionError;
