// Rust guideline compliant 2026-10-19

//! Progress reporting while a sync pass fills the partitions.

use lostfound_core::Partitions;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::watch;

/// Prints the running item count to stderr as pages are merged.
pub struct ProgressReporter {
    label: String,
    enabled: bool,
}

impl ProgressReporter {
    /// Creates a new progress reporter.
    ///
    /// # Arguments
    ///
    /// * `label` - Label to include in progress messages
    /// * `enabled` - Whether anything is printed at all
    pub fn new(label: &str, enabled: bool) -> Self {
        Self {
            label: label.to_string(),
            enabled,
        }
    }

    /// Drives `work` to completion, reporting every committed store update.
    ///
    /// # Arguments
    ///
    /// * `work` - The sync future
    /// * `updates` - Store snapshot receiver
    pub async fn track<F, T>(&self, work: F, mut updates: watch::Receiver<Arc<Partitions>>) -> T
    where
        F: Future<Output = T>,
    {
        if !self.enabled {
            return work.await;
        }

        tokio::pin!(work);
        loop {
            tokio::select! {
                result = &mut work => {
                    self.finish(updates.borrow().len());
                    return result;
                }
                changed = updates.changed() => {
                    if changed.is_err() {
                        let result = (&mut work).await;
                        self.finish(updates.borrow().len());
                        return result;
                    }
                    let current = updates.borrow_and_update().len();
                    self.report(current);
                }
            }
        }
    }

    fn report(&self, current: usize) {
        eprint!("\r{}: {} items", self.label, current);
    }

    fn finish(&self, current: usize) {
        eprintln!("\r{}: {} items, done", self.label, current);
    }
}
