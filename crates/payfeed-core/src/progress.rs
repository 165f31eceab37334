//! Caller-supplied progress observation.
//!
//! Hosts observe a batch run through a sink receiving a finite stream of
//! events. Events are emitted in row order so a consumer can tie them back
//! to row numbers.

/// One progress event from a batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    BatchStarted {
        /// Detail rows in the batch (known after parsing).
        total_rows: usize,
    },
    RowProcessed {
        row_number: usize,
        row_id: String,
        error_count: usize,
        compliant: bool,
    },
    BatchFinished {
        processed: usize,
        transformed: usize,
        skipped: usize,
        error_count: usize,
    },
}

pub trait ProgressSink {
    fn on_event(&mut self, event: ProgressEvent);
}

/// Discards all events.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn on_event(&mut self, _event: ProgressEvent) {}
}

/// Collects events for inspection; used by tests and buffering hosts.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    pub events: Vec<ProgressEvent>,
}

impl ProgressSink for CollectingSink {
    fn on_event(&mut self, event: ProgressEvent) {
        self.events.push(event);
    }
}
