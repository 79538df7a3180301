//! Host-chain collaborator boundary.
//!
//! The machine never touches balances directly: the host runtime owns the
//! transfer and burn primitives and executes each machine call as one atomic
//! step. These are the only two primitives the core consumes, plus the
//! per-call invocation context (caller identity and attached reward).

use openbridge_types::{AccountId, BridgeError, Result};

/// Read-only per-call context supplied by the host.
#[derive(Debug, Clone, Copy)]
pub struct Invocation {
    /// Identity of the invoking account.
    pub caller: AccountId,
    /// Reward attached to the invocation, checked against the order fee.
    pub reward: u64,
}

impl Invocation {
    #[must_use]
    pub fn new(caller: AccountId, reward: u64) -> Self {
        Self { caller, reward }
    }
}

/// Transfer and burn primitives of the host ledger.
///
/// `transfer` debits the contract's own balance and credits the destination
/// atomically; a failure aborts the enclosing machine operation with no
/// partial state commit. `burn` permanently destroys the given amount and is
/// assumed infallible once invoked with a valid amount.
pub trait HostLedger {
    fn transfer(&mut self, dest: AccountId, amount: u64) -> Result<()>;

    fn burn(&mut self, amount: u64);
}

/// In-memory host ledger for tests and host-less development.
///
/// Records every transfer and burn; set `fail_transfers` to exercise the
/// abort path of operations that move funds.
#[derive(Debug, Default)]
pub struct MockLedger {
    pub transfers: Vec<(AccountId, u64)>,
    pub burned: u64,
    pub fail_transfers: bool,
}

impl MockLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A ledger whose `transfer` rejects every call.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_transfers: true,
            ..Self::default()
        }
    }
}

impl HostLedger for MockLedger {
    fn transfer(&mut self, dest: AccountId, amount: u64) -> Result<()> {
        if self.fail_transfers {
            return Err(BridgeError::TransferFailed {
                dest,
                amount,
                reason: "host rejected transfer".to_string(),
            });
        }
        self.transfers.push((dest, amount));
        Ok(())
    }

    fn burn(&mut self, amount: u64) {
        self.burned += amount;
    }
}
