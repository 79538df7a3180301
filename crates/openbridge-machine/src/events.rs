//! Event sink boundary for off-chain observers.
//!
//! The machine emits one [`BridgeEvent`] per state transition. Emission is
//! optional for correctness: [`NullSink`] drops everything, and relayers or
//! indexers plug in their own sink.

use openbridge_types::BridgeEvent;

/// Receives lifecycle events as they happen.
pub trait EventSink {
    fn emit(&mut self, event: BridgeEvent);
}

/// Discards all events. The default sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: BridgeEvent) {}
}

/// Buffers events in order. For tests and local tooling.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<BridgeEvent>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: BridgeEvent) {
        self.events.push(event);
    }
}
