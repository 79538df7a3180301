//! # openbridge-types
//!
//! Shared types, errors, and configuration for the **OpenBridge** order
//! lifecycle engine.
//!
//! This crate is the leaf dependency of the workspace; every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`OrderId`], [`AccountId`], [`RemoteAddress`], [`TxRef`]
//! - **Order model**: [`BridgeOrder`], [`OrderStatus`], [`BridgeDirection`]
//! - **Events**: [`BridgeEvent`]
//! - **Configuration**: [`BridgeConfig`]
//! - **Errors**: [`BridgeError`] with `BR_ERR_` prefix codes
//! - **Constants**: fee and capacity defaults

pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod order;

// Re-export all primary types at crate root for ergonomic imports:
//   use openbridge_types::{BridgeOrder, OrderStatus, BridgeError, ...};

pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use order::*;

// Constants are accessed via `openbridge_types::constants::FOO`
// (not re-exported to avoid name collisions).
