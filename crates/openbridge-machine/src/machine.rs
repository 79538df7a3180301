//! The bridge order machine.
//!
//! Orchestrates the custody plane to implement create / push / pull /
//! initiate / confirm / complete / refund / burn. Every public operation is
//! one atomic call: all preconditions are validated (and the fallible host
//! transfer performed) before any state is committed, so a failure leaves
//! the store, queue, and ledger provably unchanged.
//!
//! Guards re-derive permission and status from the order store on every
//! call. Queue membership is advisory sequencing only: an id pulled from the
//! queue may point at an order an out-of-band refund or completion already
//! finalized, and is then unusable.

use openbridge_custody::{AccessControl, LockedLedger, OrderQueue, OrderStore};
use openbridge_types::{
    AccountId, BridgeConfig, BridgeDirection, BridgeError, BridgeEvent, BridgeOrder, OrderId,
    OrderStatus, RemoteAddress, Result, TxRef,
};

use crate::events::{EventSink, NullSink};
use crate::host::{HostLedger, Invocation};

/// Lifecycle engine for bridge orders.
///
/// Owns the custody plane (store, queue, ledger, access registry) plus the
/// host-ledger handle and an event sink. The host environment serializes
/// calls, so the machine holds no locks.
pub struct BridgeOrderMachine<H: HostLedger, S: EventSink = NullSink> {
    config: BridgeConfig,
    store: OrderStore,
    queue: OrderQueue,
    ledger: LockedLedger,
    access: AccessControl,
    host: H,
    sink: S,
    next_order_id: OrderId,
}

impl<H: HostLedger> BridgeOrderMachine<H, NullSink> {
    /// Machine with the default (null) event sink.
    pub fn new(config: BridgeConfig, admin: AccountId, host: H) -> Self {
        Self::with_sink(config, admin, host, NullSink)
    }
}

impl<H: HostLedger, S: EventSink> BridgeOrderMachine<H, S> {
    pub fn with_sink(config: BridgeConfig, admin: AccountId, host: H, sink: S) -> Self {
        Self {
            store: OrderStore::new(config.store_capacity),
            queue: OrderQueue::new(),
            ledger: LockedLedger::new(),
            access: AccessControl::new(admin),
            host,
            sink,
            next_order_id: OrderId(1),
            config,
        }
    }

    // =====================================================================
    // Order lifecycle
    // =====================================================================

    /// Create a bridge order: lock `amount` against the caller, store the
    /// order in PENDING status, and enqueue it for processing.
    ///
    /// # Errors
    /// `InvalidAmount` for a zero amount, `InsufficientFee` when the
    /// invocation reward does not cover the configured fee,
    /// `CapacityExceeded` when the store is full. Nothing is committed on
    /// failure.
    pub fn create_order(
        &mut self,
        ctx: &Invocation,
        counterpart_address: RemoteAddress,
        amount: u64,
        direction: BridgeDirection,
    ) -> Result<OrderId> {
        if amount == 0 {
            return Err(BridgeError::InvalidAmount);
        }
        if ctx.reward < self.config.order_fee {
            return Err(BridgeError::InsufficientFee {
                required: self.config.order_fee,
                provided: ctx.reward,
            });
        }

        let order_id = self.next_order_id;
        let mut order =
            BridgeOrder::new(order_id, ctx.caller, counterpart_address, amount, direction);
        order.mark_pending()?;

        // The one fallible commit step; on CapacityExceeded nothing changed.
        self.store.put(order)?;

        self.next_order_id = order_id.next();
        self.ledger.lock(amount);
        self.queue.enqueue(order_id);

        tracing::info!(%order_id, amount, %direction, "bridge order created");
        self.sink.emit(BridgeEvent::OrderCreated {
            order_id,
            sender: ctx.caller,
            amount,
            direction,
        });
        Ok(order_id)
    }

    /// Re-enqueue a PENDING order for processing.
    pub fn push_order(&mut self, order_id: OrderId) -> Result<()> {
        let order = self.fetch(order_id)?;
        if order.status != OrderStatus::Pending {
            return Err(BridgeError::InvalidStatus {
                reason: format!(
                    "{order_id} is {}, push requires {}",
                    order.status,
                    OrderStatus::Pending
                ),
            });
        }
        self.queue.enqueue(order_id);
        Ok(())
    }

    /// Dequeue the oldest queued id and return a snapshot of its order.
    ///
    /// The snapshot's status is not changed. The queue is advisory: a
    /// snapshot in a non-pending status is unusable and must not be acted
    /// on; re-validate against [`BridgeOrderMachine::get_order`].
    pub fn pull_order(&mut self) -> Result<BridgeOrder> {
        let order_id = self.queue.dequeue().ok_or(BridgeError::QueueEmpty)?;
        let order = self.fetch(order_id)?;
        if !order.status.locks_funds() {
            tracing::warn!(%order_id, status = %order.status, "pulled stale queue entry");
        }
        Ok(order.clone())
    }

    /// Start the cross-chain leg for a PENDING order: status → IN_PROGRESS.
    ///
    /// `expected` is the direction the invoked leg serves; a mismatch fails
    /// with `WrongDirection` and changes nothing.
    pub fn initiate_transfer(
        &mut self,
        order_id: OrderId,
        expected: BridgeDirection,
    ) -> Result<()> {
        let mut order = self.fetch(order_id)?.clone();
        if order.status != OrderStatus::Pending {
            return Err(BridgeError::InvalidStatus {
                reason: format!(
                    "{order_id} is {}, initiate requires {}",
                    order.status,
                    OrderStatus::Pending
                ),
            });
        }
        if order.direction != expected {
            return Err(BridgeError::WrongDirection {
                order_id,
                expected,
                actual: order.direction,
            });
        }

        order.mark_in_progress()?;
        let direction = order.direction;
        self.store.put(order)?;

        tracing::info!(%order_id, %direction, "transfer initiated");
        self.sink.emit(BridgeEvent::TransferInitiated {
            order_id,
            direction,
        });
        Ok(())
    }

    /// Confirm the counterpart action for an IN_PROGRESS order: status →
    /// SUCCESS, counterpart ref recorded, amount released from the locked
    /// pool. For an inbound order the host transfers the amount back to the
    /// order's sender; a host failure aborts the whole call.
    pub fn confirm_transfer(&mut self, order_id: OrderId, tx_ref: TxRef) -> Result<()> {
        let mut order = self.fetch(order_id)?.clone();
        if order.status != OrderStatus::InProgress {
            return Err(BridgeError::InvalidStatus {
                reason: format!(
                    "{order_id} is {}, confirm requires {}",
                    order.status,
                    OrderStatus::InProgress
                ),
            });
        }

        // Fallible host call first: an abort here leaves state untouched.
        if order.direction == BridgeDirection::Inbound {
            self.host.transfer(order.sender, order.amount)?;
        }

        order.mark_success(Some(tx_ref))?;
        self.ledger.release(order.amount)?;
        self.store.put(order)?;

        tracing::info!(%order_id, %tx_ref, "transfer confirmed");
        self.sink.emit(BridgeEvent::OrderCompleted {
            order_id,
            counterpart_tx_ref: Some(tx_ref),
        });
        Ok(())
    }

    /// Operator completion of an order not yet in flight (CREATED or
    /// PENDING): status → SUCCESS, amount released from the locked pool.
    /// Admin/manager only.
    pub fn complete_order(&mut self, ctx: &Invocation, order_id: OrderId) -> Result<()> {
        self.access
            .authorize_settlement(&ctx.caller, "complete order")?;

        let mut order = self.fetch(order_id)?.clone();
        if !matches!(order.status, OrderStatus::Created | OrderStatus::Pending) {
            return Err(BridgeError::InvalidStatus {
                reason: format!(
                    "{order_id} is {}, complete requires {} or {}",
                    order.status,
                    OrderStatus::Created,
                    OrderStatus::Pending
                ),
            });
        }

        order.mark_success(None)?;
        self.ledger.release(order.amount)?;
        self.store.put(order)?;

        tracing::info!(%order_id, caller = %ctx.caller, "order completed by operator");
        self.sink.emit(BridgeEvent::OrderCompleted {
            order_id,
            counterpart_tx_ref: None,
        });
        Ok(())
    }

    /// Refund an open order: host transfer of the amount back to the
    /// sender, status → REFUNDED, amount released from the locked pool.
    /// Admin/manager only; orders past the locked set fail `AlreadyTerminal`.
    pub fn refund_order(&mut self, ctx: &Invocation, order_id: OrderId) -> Result<()> {
        self.access
            .authorize_settlement(&ctx.caller, "refund order")?;

        let mut order = self.fetch(order_id)?.clone();
        if !order.status.locks_funds() {
            return Err(BridgeError::AlreadyTerminal {
                order_id,
                status: order.status,
            });
        }

        // Fallible host call first: an abort here leaves state untouched.
        self.host.transfer(order.sender, order.amount)?;

        order.mark_refunded()?;
        self.ledger.release(order.amount)?;
        let (sender, amount) = (order.sender, order.amount);
        self.store.put(order)?;

        tracing::info!(%order_id, amount, caller = %ctx.caller, "order refunded");
        self.sink.emit(BridgeEvent::OrderRefunded {
            order_id,
            sender,
            amount,
        });
        Ok(())
    }

    /// Destroy the locked value of a confirmed order: host burn, status →
    /// BURNED. The locked pool is untouched: the amount already left it
    /// when the order reached SUCCESS.
    pub fn burn_amount(&mut self, order_id: OrderId) -> Result<()> {
        let mut order = self.fetch(order_id)?.clone();
        if order.status != OrderStatus::Success {
            return Err(BridgeError::InvalidStatus {
                reason: format!(
                    "{order_id} is {}, burn requires {}",
                    order.status,
                    OrderStatus::Success
                ),
            });
        }

        self.host.burn(order.amount);
        order.mark_burned()?;
        let amount = order.amount;
        self.store.put(order)?;

        tracing::info!(%order_id, amount, "order amount burned");
        self.sink.emit(BridgeEvent::OrderBurned { order_id, amount });
        Ok(())
    }

    // =====================================================================
    // Reads
    // =====================================================================

    /// Read-only lookup.
    pub fn get_order(&self, order_id: OrderId) -> Result<&BridgeOrder> {
        self.fetch(order_id)
    }

    /// Current aggregate locked-token balance.
    #[must_use]
    pub fn locked_tokens(&self) -> u64 {
        self.ledger.locked()
    }

    /// Number of orders ever accepted (history is never deleted).
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Iterate all retained orders, for audit and invariant checks.
    pub fn orders(&self) -> impl Iterator<Item = &BridgeOrder> {
        self.store.orders()
    }

    #[must_use]
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    #[must_use]
    pub fn access(&self) -> &AccessControl {
        &self.access
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    // =====================================================================
    // Access administration (delegated; AccessControl enforces the caller)
    // =====================================================================

    pub fn set_admin(&mut self, ctx: &Invocation, new_admin: AccountId) -> Result<()> {
        self.access.set_admin(&ctx.caller, new_admin)
    }

    pub fn add_manager(&mut self, ctx: &Invocation, manager: AccountId) -> Result<()> {
        self.access.add_manager(&ctx.caller, manager)
    }

    pub fn remove_manager(&mut self, ctx: &Invocation, manager: &AccountId) -> Result<()> {
        self.access.remove_manager(&ctx.caller, manager)
    }

    fn fetch(&self, order_id: OrderId) -> Result<&BridgeOrder> {
        self.store
            .get(&order_id)
            .ok_or(BridgeError::OrderNotFound(order_id))
    }
}
