//! Lifecycle events for off-chain observers.
//!
//! One event per state transition. Emission is optional for correctness
//! (the machine accepts any sink, including a null one), but relayers and
//! indexers are expected to consume these.

use serde::{Deserialize, Serialize};

use crate::{AccountId, BridgeDirection, OrderId, TxRef};

/// A state transition observed on a bridge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeEvent {
    /// A new order was stored, enqueued, and its amount locked.
    OrderCreated {
        order_id: OrderId,
        sender: AccountId,
        amount: u64,
        direction: BridgeDirection,
    },
    /// A cross-chain transfer leg moved the order to IN_PROGRESS.
    TransferInitiated {
        order_id: OrderId,
        direction: BridgeDirection,
    },
    /// The order reached SUCCESS, via counterpart confirmation (ref set)
    /// or operator completion (ref empty).
    OrderCompleted {
        order_id: OrderId,
        counterpart_tx_ref: Option<TxRef>,
    },
    /// Funds were returned to the sender.
    OrderRefunded {
        order_id: OrderId,
        sender: AccountId,
        amount: u64,
    },
    /// The locked value was destroyed.
    OrderBurned { order_id: OrderId, amount: u64 },
}

impl BridgeEvent {
    /// The order this event concerns.
    #[must_use]
    pub fn order_id(&self) -> OrderId {
        match self {
            Self::OrderCreated { order_id, .. }
            | Self::TransferInitiated { order_id, .. }
            | Self::OrderCompleted { order_id, .. }
            | Self::OrderRefunded { order_id, .. }
            | Self::OrderBurned { order_id, .. } => *order_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_accessor() {
        let ev = BridgeEvent::OrderBurned {
            order_id: OrderId(12),
            amount: 100,
        };
        assert_eq!(ev.order_id(), OrderId(12));
    }

    #[test]
    fn serde_roundtrip() {
        let ev = BridgeEvent::OrderCompleted {
            order_id: OrderId(3),
            counterpart_tx_ref: Some(TxRef::deterministic(3, 1)),
        };
        let json = serde_json::to_string(&ev).unwrap();
        let back: BridgeEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(ev, back);
    }
}
