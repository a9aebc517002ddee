//! Fire-once delayed callbacks, used to simulate loading delays before
//! revealing dashboard data.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

/// Handle to a callback scheduled on the tokio runtime.
///
/// The callback runs at most once. Dropping the handle cancels it.
pub struct DelayedTask {
    handle: JoinHandle<()>,
    fired: Arc<AtomicBool>,
}

impl DelayedTask {
    /// Run `callback` once after `delay`. Must be called inside a tokio runtime.
    pub fn schedule<F>(delay: Duration, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let fired = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&fired);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
            flag.store(true, Ordering::SeqCst);
            debug!(delay_ms = delay.as_millis() as u64, "Delayed task fired");
        });
        Self { handle, fired }
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Prevent the callback if it has not run yet.
    pub fn cancel(&self) {
        if !self.handle.is_finished() {
            debug!("Delayed task cancelled");
        }
        self.handle.abort();
    }

    /// Wait until the task either fires or is cancelled.
    pub async fn wait(mut self) -> bool {
        let _ = (&mut self.handle).await;
        self.has_fired()
    }
}

impl Drop for DelayedTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
