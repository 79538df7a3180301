//! Bridge order model: direction, status state machine, and the order record.
//!
//! ## Status state machine
//!
//! ```text
//!   CREATED ──▶ PENDING ──▶ IN_PROGRESS ──confirm──▶ SUCCESS ──burn──▶ BURNED
//!      │           │                                    ▲
//!      └───────────┴────────── complete ────────────────┘
//!
//!   CREATED / PENDING / IN_PROGRESS ──refund──▶ REFUNDED
//! ```
//!
//! Transitions are **monotonic**: REFUNDED and BURNED admit no further
//! transition, and SUCCESS can only move to BURNED. Funds stay in the locked
//! pool exactly while the status is CREATED, PENDING, or IN_PROGRESS.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, BridgeError, OrderId, RemoteAddress, Result, TxRef};

/// Which way value moves across the bridge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum BridgeDirection {
    /// Value leaves the local chain for the counterpart chain.
    Outbound,
    /// Value returns from the counterpart chain; confirmation releases
    /// funds to the order's sender on the local chain.
    Inbound,
}

impl std::fmt::Display for BridgeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outbound => write!(f, "OUTBOUND"),
            Self::Inbound => write!(f, "INBOUND"),
        }
    }
}

/// Lifecycle status of a bridge order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Nominal initial status. Orders move to PENDING within the same
    /// atomic creation call, so observers only ever see PENDING.
    Created,
    /// Queued, funds locked, awaiting processing.
    Pending,
    /// A cross-chain transfer leg has been initiated by the relayer.
    InProgress,
    /// The counterpart action was confirmed (or an operator completed the
    /// order). Funds have left the locked pool.
    Success,
    /// Funds were returned to the sender. Terminal.
    Refunded,
    /// The locked value was destroyed after a confirmed completion.
    /// Terminal, absolutely.
    Burned,
}

impl OrderStatus {
    /// Can an order in this status transition to `target`?
    #[must_use]
    pub fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Created, Self::Pending | Self::Success | Self::Refunded)
                | (Self::Pending, Self::InProgress | Self::Success | Self::Refunded)
                | (Self::InProgress, Self::Success | Self::Refunded)
                | (Self::Success, Self::Burned)
        )
    }

    /// Terminal statuses admit no further transition.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Refunded | Self::Burned)
    }

    /// Whether an order in this status counts toward the locked-token pool.
    #[must_use]
    pub fn locks_funds(&self) -> bool {
        matches!(self, Self::Created | Self::Pending | Self::InProgress)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "CREATED"),
            Self::Pending => write!(f, "PENDING"),
            Self::InProgress => write!(f, "IN_PROGRESS"),
            Self::Success => write!(f, "SUCCESS"),
            Self::Refunded => write!(f, "REFUNDED"),
            Self::Burned => write!(f, "BURNED"),
        }
    }
}

/// A bridge order: value locked on the local chain pending release, refund,
/// or burn on confirmation of a matching action on the counterpart chain.
///
/// Owned exclusively by the order store; all mutation goes through the
/// guarded `mark_*` methods so an invalid transition is unrepresentable
/// without an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeOrder {
    /// Strictly increasing identifier, immutable after creation.
    pub id: OrderId,
    /// The account that created the order, captured from the invocation.
    pub sender: AccountId,
    /// Destination address on the counterpart chain.
    pub counterpart_address: RemoteAddress,
    /// Positive locked quantity, immutable after creation.
    pub amount: u64,
    /// Bridge direction, immutable.
    pub direction: BridgeDirection,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Counterpart-chain reference proving completion. Set exactly when the
    /// order enters SUCCESS via confirmation, never before.
    pub counterpart_tx_ref: Option<TxRef>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BridgeOrder {
    /// Construct a new order in CREATED status with no counterpart ref.
    #[must_use]
    pub fn new(
        id: OrderId,
        sender: AccountId,
        counterpart_address: RemoteAddress,
        amount: u64,
        direction: BridgeDirection,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            sender,
            counterpart_address,
            amount,
            direction,
            status: OrderStatus::Created,
            counterpart_tx_ref: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether this order's amount counts toward the locked-token pool.
    #[must_use]
    pub fn locks_funds(&self) -> bool {
        self.status.locks_funds()
    }

    /// Whether this order reached a terminal status.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    fn transition(&mut self, target: OrderStatus) -> Result<()> {
        if !self.status.can_transition_to(target) {
            return Err(BridgeError::InvalidStatus {
                reason: format!(
                    "{} cannot move from {} to {target}",
                    self.id, self.status
                ),
            });
        }
        self.status = target;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// CREATED → PENDING.
    pub fn mark_pending(&mut self) -> Result<()> {
        self.transition(OrderStatus::Pending)
    }

    /// PENDING → IN_PROGRESS.
    pub fn mark_in_progress(&mut self) -> Result<()> {
        self.transition(OrderStatus::InProgress)
    }

    /// Transition into SUCCESS. A confirmation passes the counterpart ref;
    /// an operator completion passes `None` and the ref stays empty.
    pub fn mark_success(&mut self, tx_ref: Option<TxRef>) -> Result<()> {
        self.transition(OrderStatus::Success)?;
        if tx_ref.is_some() {
            self.counterpart_tx_ref = tx_ref;
        }
        Ok(())
    }

    /// Transition into REFUNDED.
    pub fn mark_refunded(&mut self) -> Result<()> {
        self.transition(OrderStatus::Refunded)
    }

    /// SUCCESS → BURNED.
    pub fn mark_burned(&mut self) -> Result<()> {
        self.transition(OrderStatus::Burned)
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl BridgeOrder {
    /// Order in CREATED status with a fixed sender and counterpart address.
    pub fn dummy(id: u64, amount: u64, direction: BridgeDirection) -> Self {
        Self::new(
            OrderId(id),
            AccountId([7u8; 32]),
            RemoteAddress([0xEE; 20]),
            amount,
            direction,
        )
    }

    /// Order already moved to PENDING, as `create_order` leaves it.
    pub fn dummy_pending(id: u64, amount: u64, direction: BridgeDirection) -> Self {
        let mut order = Self::dummy(id, amount, direction);
        order.mark_pending().expect("CREATED -> PENDING is valid");
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_transitions() {
        assert!(OrderStatus::Created.can_transition_to(OrderStatus::Pending));
        assert!(OrderStatus::Created.can_transition_to(OrderStatus::Success));
        assert!(OrderStatus::Created.can_transition_to(OrderStatus::Refunded));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::InProgress));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Success));
        assert!(OrderStatus::Pending.can_transition_to(OrderStatus::Refunded));
        assert!(OrderStatus::InProgress.can_transition_to(OrderStatus::Success));
        assert!(OrderStatus::InProgress.can_transition_to(OrderStatus::Refunded));
        assert!(OrderStatus::Success.can_transition_to(OrderStatus::Burned));
    }

    #[test]
    fn terminal_statuses_admit_nothing() {
        for target in [
            OrderStatus::Created,
            OrderStatus::Pending,
            OrderStatus::InProgress,
            OrderStatus::Success,
            OrderStatus::Refunded,
            OrderStatus::Burned,
        ] {
            assert!(!OrderStatus::Refunded.can_transition_to(target));
            assert!(!OrderStatus::Burned.can_transition_to(target));
        }
    }

    #[test]
    fn success_only_reaches_burned() {
        assert!(!OrderStatus::Success.can_transition_to(OrderStatus::Refunded));
        assert!(!OrderStatus::Success.can_transition_to(OrderStatus::Pending));
        assert!(OrderStatus::Success.can_transition_to(OrderStatus::Burned));
    }

    #[test]
    fn locked_set_matches_non_success_non_terminal() {
        assert!(OrderStatus::Created.locks_funds());
        assert!(OrderStatus::Pending.locks_funds());
        assert!(OrderStatus::InProgress.locks_funds());
        assert!(!OrderStatus::Success.locks_funds());
        assert!(!OrderStatus::Refunded.locks_funds());
        assert!(!OrderStatus::Burned.locks_funds());
    }

    #[test]
    fn new_order_is_created_without_ref() {
        let order = BridgeOrder::dummy(1, 100, BridgeDirection::Outbound);
        assert_eq!(order.status, OrderStatus::Created);
        assert!(order.counterpart_tx_ref.is_none());
        assert!(order.locks_funds());
    }

    #[test]
    fn confirm_sets_counterpart_ref() {
        let mut order = BridgeOrder::dummy_pending(1, 100, BridgeDirection::Outbound);
        order.mark_in_progress().unwrap();
        let tx_ref = TxRef::deterministic(1, 0);
        order.mark_success(Some(tx_ref)).unwrap();
        assert_eq!(order.status, OrderStatus::Success);
        assert_eq!(order.counterpart_tx_ref, Some(tx_ref));
    }

    #[test]
    fn operator_completion_leaves_ref_empty() {
        let mut order = BridgeOrder::dummy_pending(1, 100, BridgeDirection::Outbound);
        order.mark_success(None).unwrap();
        assert!(order.counterpart_tx_ref.is_none());
    }

    #[test]
    fn double_burn_blocked() {
        let mut order = BridgeOrder::dummy_pending(1, 100, BridgeDirection::Outbound);
        order.mark_success(None).unwrap();
        order.mark_burned().unwrap();
        let err = order.mark_burned().unwrap_err();
        assert!(matches!(err, BridgeError::InvalidStatus { .. }));
    }

    #[test]
    fn refund_after_success_blocked() {
        let mut order = BridgeOrder::dummy_pending(1, 100, BridgeDirection::Outbound);
        order.mark_success(None).unwrap();
        assert!(order.mark_refunded().is_err());
    }

    #[test]
    fn status_display() {
        assert_eq!(format!("{}", OrderStatus::InProgress), "IN_PROGRESS");
        assert_eq!(format!("{}", BridgeDirection::Inbound), "INBOUND");
    }

    #[test]
    fn serde_roundtrip() {
        let mut order = BridgeOrder::dummy_pending(5, 250, BridgeDirection::Inbound);
        order.mark_in_progress().unwrap();
        let json = serde_json::to_string(&order).unwrap();
        let back: BridgeOrder = serde_json::from_str(&json).unwrap();
        assert_eq!(order.id, back.id);
        assert_eq!(order.status, back.status);
        assert_eq!(order.amount, back.amount);
        assert_eq!(order.direction, back.direction);
    }
}
