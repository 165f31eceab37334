//! Terminal progress reporting for batch runs.

use indicatif::{ProgressBar, ProgressStyle};

use payfeed_core::{ProgressEvent, ProgressSink};

/// Drives an indicatif bar from pipeline progress events.
pub struct ProgressBarSink {
    bar: ProgressBar,
}

impl ProgressBarSink {
    pub fn new() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressBarSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for ProgressBarSink {
    fn on_event(&mut self, event: ProgressEvent) {
        match event {
            ProgressEvent::BatchStarted { total_rows } => {
                self.bar = ProgressBar::new(total_rows as u64);
                if let Ok(style) =
                    ProgressStyle::with_template("{bar:40} {pos}/{len} rows {msg}")
                {
                    self.bar.set_style(style);
                }
            }
            ProgressEvent::RowProcessed { error_count, .. } => {
                self.bar.inc(1);
                if error_count > 0 {
                    self.bar.set_message(format!("{error_count} error(s) on last row"));
                }
            }
            ProgressEvent::BatchFinished { .. } => {
                self.bar.finish_and_clear();
            }
        }
    }
}
