//! Keyed order storage with a fixed capacity.
//!
//! The store is the authoritative state holder: every guard in the machine
//! re-derives status from here, never from queue membership. Orders are never
//! deleted (history is retained for audit), so capacity bounds the total
//! number of orders a machine instance ever accepts.

use std::collections::HashMap;

use openbridge_types::{BridgeError, BridgeOrder, OrderId, Result};

/// Capacity-bounded map of orders keyed by [`OrderId`].
///
/// All mutations are full-record replacements: the machine reads a clone,
/// applies a guarded transition, and `put`s the result back.
pub struct OrderStore {
    orders: HashMap<OrderId, BridgeOrder>,
    capacity: usize,
}

impl OrderStore {
    /// Create an empty store with the given fixed capacity.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            orders: HashMap::new(),
            capacity,
        }
    }

    /// Insert or overwrite by `order.id`.
    ///
    /// Overwriting a known id always succeeds. Inserting a **new** id past
    /// capacity fails with [`BridgeError::CapacityExceeded`] and evicts
    /// nothing; the caller must escalate externally.
    pub fn put(&mut self, order: BridgeOrder) -> Result<()> {
        if !self.orders.contains_key(&order.id) && self.orders.len() >= self.capacity {
            tracing::warn!(capacity = self.capacity, "order store full");
            return Err(BridgeError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.orders.insert(order.id, order);
        Ok(())
    }

    /// Point lookup by id.
    #[must_use]
    pub fn get(&self, order_id: &OrderId) -> Option<&BridgeOrder> {
        self.orders.get(order_id)
    }

    #[must_use]
    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.orders.contains_key(order_id)
    }

    /// Number of orders retained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterate all retained orders. Audit and invariant checks only;
    /// operational lookups go through [`OrderStore::get`].
    pub fn orders(&self) -> impl Iterator<Item = &BridgeOrder> {
        self.orders.values()
    }

    /// Sum of `amount` over orders whose status locks funds. Must equal the
    /// locked-token ledger at all times.
    #[must_use]
    pub fn locked_total(&self) -> u64 {
        self.orders
            .values()
            .filter(|o| o.locks_funds())
            .map(|o| o.amount)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openbridge_types::BridgeDirection;

    #[test]
    fn put_and_get() {
        let mut store = OrderStore::new(4);
        let order = BridgeOrder::dummy_pending(1, 100, BridgeDirection::Outbound);
        store.put(order).unwrap();
        assert_eq!(store.len(), 1);
        let got = store.get(&OrderId(1)).unwrap();
        assert_eq!(got.amount, 100);
    }

    #[test]
    fn missing_id_is_absent() {
        let store = OrderStore::new(4);
        assert!(store.get(&OrderId(9)).is_none());
        assert!(!store.contains(&OrderId(9)));
    }

    #[test]
    fn overwrite_replaces_full_record() {
        let mut store = OrderStore::new(4);
        store
            .put(BridgeOrder::dummy_pending(1, 100, BridgeDirection::Outbound))
            .unwrap();

        let mut updated = store.get(&OrderId(1)).unwrap().clone();
        updated.mark_success(None).unwrap();
        store.put(updated).unwrap();

        assert_eq!(store.len(), 1);
        assert!(!store.get(&OrderId(1)).unwrap().locks_funds());
    }

    #[test]
    fn new_id_past_capacity_fails_without_eviction() {
        let mut store = OrderStore::new(2);
        store
            .put(BridgeOrder::dummy_pending(1, 10, BridgeDirection::Outbound))
            .unwrap();
        store
            .put(BridgeOrder::dummy_pending(2, 20, BridgeDirection::Outbound))
            .unwrap();

        let err = store
            .put(BridgeOrder::dummy_pending(3, 30, BridgeDirection::Outbound))
            .unwrap_err();
        assert!(matches!(err, BridgeError::CapacityExceeded { capacity: 2 }));

        // Unrelated entries untouched.
        assert_eq!(store.len(), 2);
        assert!(store.contains(&OrderId(1)));
        assert!(store.contains(&OrderId(2)));
        assert!(!store.contains(&OrderId(3)));
    }

    #[test]
    fn overwrite_at_capacity_still_succeeds() {
        let mut store = OrderStore::new(1);
        store
            .put(BridgeOrder::dummy_pending(1, 10, BridgeDirection::Outbound))
            .unwrap();

        let mut updated = store.get(&OrderId(1)).unwrap().clone();
        updated.mark_success(None).unwrap();
        assert!(store.put(updated).is_ok());
    }

    #[test]
    fn locked_total_counts_only_locking_statuses() {
        let mut store = OrderStore::new(4);
        store
            .put(BridgeOrder::dummy_pending(1, 100, BridgeDirection::Outbound))
            .unwrap();
        store
            .put(BridgeOrder::dummy_pending(2, 50, BridgeDirection::Inbound))
            .unwrap();

        let mut done = store.get(&OrderId(2)).unwrap().clone();
        done.mark_success(None).unwrap();
        store.put(done).unwrap();

        assert_eq!(store.locked_total(), 100);
    }
}
