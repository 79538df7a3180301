//! # openbridge-machine
//!
//! **Orchestration plane**: the [`BridgeOrderMachine`] drives every bridge
//! order through its lifecycle against the custody plane.
//!
//! ## Operation flow
//!
//! ```text
//! create_order ─▶ OrderStore.put + LockedLedger.lock + OrderQueue.enqueue
//! pull_order ───▶ OrderQueue.dequeue → snapshot (re-validate before acting)
//! initiate ─────▶ PENDING → IN_PROGRESS            (relayer, per direction)
//! confirm ──────▶ IN_PROGRESS → SUCCESS + release  (relayer, ref recorded)
//! complete ─────▶ CREATED/PENDING → SUCCESS + release   (admin/manager)
//! refund ───────▶ open → REFUNDED + host transfer + release (admin/manager)
//! burn ─────────▶ SUCCESS → BURNED + host burn
//! ```
//!
//! Each operation is a single atomic call under the host's serialization
//! guarantee: validate everything (including the fallible host transfer)
//! first, then commit. The locked-token ledger therefore always equals the
//! summed amount of orders in CREATED/PENDING/IN_PROGRESS.

pub mod events;
pub mod host;
pub mod machine;

pub use events::{EventSink, NullSink, RecordingSink};
pub use host::{HostLedger, Invocation, MockLedger};
pub use machine::BridgeOrderMachine;
