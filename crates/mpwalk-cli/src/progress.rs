//! Progress reporting for a walk run.
//!
//! The monitor runs on its own thread, polling the scheduler's shared
//! completion counter every 100 ms and updating an indicatif bar. It never
//! touches the workers; once the counter reaches the unit total it draws
//! the final state and exits.

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Monitor thread watching a shared completion counter.
pub struct ProgressMonitor {
    handle: JoinHandle<()>,
}

impl ProgressMonitor {
    /// Spawn a monitor for `total` units of work.
    pub fn spawn(total: usize, completed: Arc<AtomicUsize>) -> Self {
        let handle = thread::spawn(move || {
            let bar = ProgressBar::new(total as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("{bar:40.green} {pos}/{len} nodes [{elapsed_precise}]")
                    .expect("Invalid progress template"),
            );

            loop {
                let done = completed.load(Ordering::Relaxed);
                bar.set_position(done as u64);
                if done >= total {
                    break;
                }
                thread::sleep(POLL_INTERVAL);
            }

            bar.finish();
        });

        Self { handle }
    }

    /// Wait for the monitor to observe completion.
    pub fn join(self) {
        let _ = self.handle.join();
    }
}
