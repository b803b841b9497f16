//! Cancellable one-shot timers
//!
//! A [`TimerHandle`] owns the scheduled action. Dropping the handle cancels
//! the timer, so a screen that stores its handle releases the timer on every
//! unmount path, including early ones.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::Instant;

/// Run `action` once after `delay`, unless the returned handle is dropped
/// or canceled first
///
/// The deadline is fixed when this is called, not when the task is first
/// polled. Must be called from within a tokio runtime.
pub fn schedule<F>(delay: Duration, action: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    let deadline = Instant::now() + delay;
    let (stop_tx, stop_rx) = oneshot::channel::<()>();
    let fired = Arc::new(AtomicBool::new(false));
    let fired_flag = Arc::clone(&fired);

    tracing::debug!(delay_ms = delay.as_millis() as u64, "Timer scheduled");

    let handle = tokio::spawn(async move {
        tokio::select! {
            biased;
            // Resolves on an explicit stop and when the sender is dropped.
            _ = stop_rx => {
                tracing::debug!("Timer canceled before deadline");
            }
            _ = tokio::time::sleep_until(deadline) => {
                fired_flag.store(true, Ordering::SeqCst);
                action();
            }
        }
    });

    TimerHandle {
        stop_tx: Some(stop_tx),
        fired,
        task: handle,
    }
}

/// Handle to a scheduled one-shot timer
///
/// When dropped, a timer that has not fired yet is canceled.
#[derive(Debug)]
pub struct TimerHandle {
    stop_tx: Option<oneshot::Sender<()>>,
    fired: Arc<AtomicBool>,
    task: tokio::task::JoinHandle<()>,
}

impl TimerHandle {
    /// Whether the action has run
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Whether the timer is still waiting for its deadline
    pub fn is_pending(&self) -> bool {
        self.stop_tx.is_some() && !self.task.is_finished()
    }

    /// Cancel the timer explicitly
    pub fn cancel(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        if let Some(tx) = self.stop_tx.take() {
            let _ = tx.send(());
            if !self.has_fired() {
                self.task.abort();
            }
        }
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let inner = Arc::clone(&count);
        (count, move || {
            inner.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_at_deadline() {
        let (count, action) = counter();
        let handle = schedule(Duration::from_millis(2000), action);
        assert!(handle.is_pending());

        tokio::time::sleep(Duration::from_millis(1999)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!handle.has_fired());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert!(handle.has_fired());
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_only_once() {
        let (count, action) = counter();
        let _handle = schedule(Duration::from_millis(10), action);

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels() {
        let (count, action) = counter();
        let handle = schedule(Duration::from_millis(2000), action);

        tokio::time::sleep(Duration::from_millis(1000)).await;
        drop(handle);

        tokio::time::sleep(Duration::from_millis(5000)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_cancel() {
        let (count, action) = counter();
        let handle = schedule(Duration::from_millis(500), action);
        handle.cancel();

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_after_fire_is_harmless() {
        let (count, action) = counter();
        let handle = schedule(Duration::from_millis(5), action);

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(handle.has_fired());
        drop(handle);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
