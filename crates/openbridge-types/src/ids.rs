//! Identifiers used throughout OpenBridge.
//!
//! `OrderId` is a host-assigned monotonic counter, never a random ID: the
//! machine guarantees strict increase and no reuse. Account identities are
//! opaque 32-byte host identities; counterpart-chain addresses are 20 bytes.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// OrderId
// ---------------------------------------------------------------------------

/// Monotonically increasing order identifier, assigned at creation.
///
/// Ids strictly increase over the lifetime of a machine and are never reused,
/// even after the order reaches a terminal status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl OrderId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// Identity of an account on the host chain (raw 32-byte public identity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub [u8; 32]);

impl AccountId {
    #[must_use]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "acct:{}", hex::encode(&self.0[..8]))
    }
}

/// Random identity for unit tests.
#[cfg(any(test, feature = "test-helpers"))]
impl AccountId {
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random::<[u8; 32]>())
    }
}

// ---------------------------------------------------------------------------
// RemoteAddress
// ---------------------------------------------------------------------------

/// Destination address on the counterpart chain (20 bytes, EVM-style).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct RemoteAddress(pub [u8; 20]);

impl RemoteAddress {
    #[must_use]
    pub fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for RemoteAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

// ---------------------------------------------------------------------------
// TxRef
// ---------------------------------------------------------------------------

/// Reference to a transaction on the counterpart chain (32-byte hash).
///
/// Recorded on an order when the relayer confirms the matching counterpart
/// action; empty until then.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TxRef(pub [u8; 32]);

impl TxRef {
    #[must_use]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Deterministic `TxRef` from an order id and a relayer nonce.
    ///
    /// Relayers (and tests) derive the **exact same** reference for the same
    /// confirmation, so a replayed confirmation carries a replayed ref.
    #[must_use]
    pub fn deterministic(order_id: u64, nonce: u64) -> Self {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(b"openbridge:tx_ref:v1:");
        hasher.update(order_id.to_le_bytes());
        hasher.update(nonce.to_le_bytes());
        let hash = hasher.finalize();
        let bytes: [u8; 32] = hash.into();
        Self(bytes)
    }
}

impl fmt::Display for TxRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tx:{}", hex::encode(&self.0[..8]))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_next_increments() {
        let id = OrderId(41);
        assert_eq!(id.next(), OrderId(42));
    }

    #[test]
    fn order_id_ordering() {
        assert!(OrderId(1) < OrderId(2));
    }

    #[test]
    fn account_id_short_and_display() {
        let id = AccountId([0xAB; 32]);
        assert_eq!(id.short(), "abababab");
        assert_eq!(format!("{id}"), "acct:abababababababab");
    }

    #[test]
    fn account_id_random_uniqueness() {
        assert_ne!(AccountId::random(), AccountId::random());
    }

    #[test]
    fn remote_address_display_is_hex() {
        let addr = RemoteAddress([0x01; 20]);
        let s = format!("{addr}");
        assert!(s.starts_with("0x"));
        assert_eq!(s.len(), 2 + 40);
    }

    #[test]
    fn tx_ref_deterministic() {
        let a = TxRef::deterministic(7, 0);
        let b = TxRef::deterministic(7, 0);
        assert_eq!(a, b);
        let c = TxRef::deterministic(7, 1);
        assert_ne!(a, c);
    }

    #[test]
    fn serde_roundtrips() {
        let oid = OrderId(99);
        let json = serde_json::to_string(&oid).unwrap();
        let back: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(oid, back);

        let tx = TxRef::deterministic(1, 2);
        let json = serde_json::to_string(&tx).unwrap();
        let back: TxRef = serde_json::from_str(&json).unwrap();
        assert_eq!(tx, back);
    }
}
