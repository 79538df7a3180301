//! Configuration for a bridge order machine instance.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration consulted by the machine on every order creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Flat per-order fee the invocation reward must cover.
    pub order_fee: u64,
    /// Fixed capacity of the order store.
    pub store_capacity: usize,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            order_fee: constants::DEFAULT_ORDER_FEE,
            store_capacity: constants::DEFAULT_STORE_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_come_from_constants() {
        let cfg = BridgeConfig::default();
        assert_eq!(cfg.order_fee, 1_000);
        assert_eq!(cfg.store_capacity, 65_536);
    }

    #[test]
    fn serde_roundtrip() {
        let cfg = BridgeConfig {
            order_fee: 50,
            store_capacity: 8,
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: BridgeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg.order_fee, back.order_fee);
        assert_eq!(cfg.store_capacity, back.store_capacity);
    }
}
