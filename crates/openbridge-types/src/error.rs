//! Error types for the OpenBridge order lifecycle engine.
//!
//! All errors use the `BR_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Order errors
//! - 2xx: Fee / accounting errors
//! - 3xx: Queue errors
//! - 4xx: Store errors
//! - 5xx: Access errors
//! - 6xx: Host-primitive errors
//!
//! Every error is returned to the caller as a value. The engine never
//! panics on a failed guard, and a failed operation leaves state untouched.

use thiserror::Error;

use crate::{AccountId, BridgeDirection, OrderId, OrderStatus};

/// Central error enum for all OpenBridge operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    // =================================================================
    // Order Errors (1xx)
    // =================================================================
    /// The requested order does not exist in the store.
    #[error("BR_ERR_100: Order not found: {0}")]
    OrderNotFound(OrderId),

    /// Order amount must be a positive quantity.
    #[error("BR_ERR_101: Invalid amount: amount must be greater than zero")]
    InvalidAmount,

    /// The order's current status does not admit the requested transition.
    #[error("BR_ERR_102: Invalid status: {reason}")]
    InvalidStatus { reason: String },

    /// The order already reached a status that is terminal for this path.
    #[error("BR_ERR_103: Order already terminal: {order_id} is {status}")]
    AlreadyTerminal {
        order_id: OrderId,
        status: OrderStatus,
    },

    /// The order's bridge direction does not match the invoked leg.
    #[error("BR_ERR_104: Wrong direction for {order_id}: expected {expected}, got {actual}")]
    WrongDirection {
        order_id: OrderId,
        expected: BridgeDirection,
        actual: BridgeDirection,
    },

    // =================================================================
    // Fee / Accounting Errors (2xx)
    // =================================================================
    /// The invocation reward does not cover the configured order fee.
    #[error("BR_ERR_200: Insufficient fee: required {required}, provided {provided}")]
    InsufficientFee { required: u64, provided: u64 },

    /// A release would drive the locked-token counter negative.
    #[error("BR_ERR_201: Ledger underflow: locked {locked}, tried to release {release}")]
    LedgerUnderflow { locked: u64, release: u64 },

    // =================================================================
    // Queue Errors (3xx)
    // =================================================================
    /// `pull` was invoked on an empty queue.
    #[error("BR_ERR_300: Order queue is empty")]
    QueueEmpty,

    // =================================================================
    // Store Errors (4xx)
    // =================================================================
    /// The store is at capacity; no new orders can be accepted.
    #[error("BR_ERR_400: Order store capacity exceeded ({capacity} orders)")]
    CapacityExceeded { capacity: usize },

    // =================================================================
    // Access Errors (5xx)
    // =================================================================
    /// The caller lacks the permission required by the operation.
    #[error("BR_ERR_500: Unauthorized: {caller} may not {operation}")]
    Unauthorized {
        caller: AccountId,
        operation: &'static str,
    },

    // =================================================================
    // Host-Primitive Errors (6xx)
    // =================================================================
    /// The host transfer primitive rejected the transfer. The enclosing
    /// operation aborts with no state committed.
    #[error("BR_ERR_600: Host transfer of {amount} to {dest} failed: {reason}")]
    TransferFailed {
        dest: AccountId,
        amount: u64,
        reason: String,
    },
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, BridgeError>;
