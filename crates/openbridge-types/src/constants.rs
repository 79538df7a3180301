//! System-wide constants for the OpenBridge engine.

/// Flat fee (in host ledger units) charged per created order.
pub const DEFAULT_ORDER_FEE: u64 = 1_000;

/// Fixed order store capacity. Orders are never deleted, so this bounds the
/// audit history a single machine instance retains.
pub const DEFAULT_STORE_CAPACITY: usize = 65_536;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "OpenBridge";
