//! The presence bridge.
//!
//! Owns the single connection to the external presence client, mediates
//! all activity updates through it, and notifies a registered observer of
//! connect/disconnect transitions. Connection establishment happens on a
//! background task; nothing here blocks the caller.

mod client;
mod event_pump;
mod observer;
mod types;

pub use client::PresenceBridge;
pub use observer::BridgeObserver;
pub use types::{BridgeConfig, ConnectionState};
