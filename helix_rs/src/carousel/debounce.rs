//! Trailing-edge debounce on a tokio runtime.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

type Action = Arc<dyn Fn() + Send + Sync>;

struct Inner {
    delay: Duration,
    handle: Handle,
    action: Action,
    pending: Mutex<Option<JoinHandle<()>>>,
}

/// Runs `action` once `delay` has elapsed since the last trigger.
///
/// Each trigger aborts the pending task and schedules a new one, so a burst
/// of triggers closer together than `delay` runs the action once.
#[derive(Clone)]
pub struct Debouncer {
    inner: Arc<Inner>,
}

impl Debouncer {
    pub fn new<F>(delay: Duration, handle: Handle, action: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                delay,
                handle,
                action: Arc::new(action),
                pending: Mutex::new(None),
            }),
        }
    }

    fn pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.inner
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    pub fn delay(&self) -> Duration {
        self.inner.delay
    }

    pub fn trigger(&self) {
        let action = self.inner.action.clone();
        let delay = self.inner.delay;

        let mut pending = self.pending();
        if let Some(task) = pending.take() {
            task.abort();
        }
        *pending = Some(self.inner.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            action();
        }));
    }

    /// Drop the pending run, if any. Returns whether one was waiting.
    pub fn cancel(&self) -> bool {
        match self.pending().take() {
            Some(task) => {
                let waiting = !task.is_finished();
                task.abort();
                waiting
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending().as_ref().is_some_and(|task| !task.is_finished())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::time::sleep;

    use super::*;

    fn counting(delay: Duration) -> (Debouncer, Arc<AtomicUsize>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let seen = runs.clone();
        let debouncer = Debouncer::new(delay, Handle::current(), move || {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        (debouncer, runs)
    }

    #[tokio::test(start_paused = true)]
    async fn burst_runs_once() {
        let (debouncer, runs) = counting(Duration::from_millis(150));

        for _ in 0..5 {
            debouncer.trigger();
            sleep(Duration::from_millis(50)).await;
        }
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        sleep(Duration::from_millis(200)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_triggers_run_each_time() {
        let (debouncer, runs) = counting(Duration::from_millis(150));

        debouncer.trigger();
        sleep(Duration::from_millis(200)).await;
        debouncer.trigger();
        sleep(Duration::from_millis(200)).await;

        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_pending_run() {
        let (debouncer, runs) = counting(Duration::from_millis(150));

        debouncer.trigger();
        assert!(debouncer.is_pending());
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());

        sleep(Duration::from_millis(500)).await;
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }
}
