//! Image-load signals.
//!
//! Each pending image is a one-shot completion. Success and failure both
//! settle it, and so does a host dropping the signal without reporting.

use futures::future::join_all;
use tokio::sync::oneshot;

/// How an image finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOutcome {
    Loaded,
    Failed,
}

/// Host side of a pending image.
#[derive(Debug)]
pub struct ImageSignal {
    tx: oneshot::Sender<ImageOutcome>,
}

impl ImageSignal {
    /// The image decoded.
    pub fn loaded(self) {
        let _ = self.tx.send(ImageOutcome::Loaded);
    }

    /// The image failed to load.
    pub fn failed(self) {
        let _ = self.tx.send(ImageOutcome::Failed);
    }
}

/// Consumer side of a pending image.
#[derive(Debug)]
pub struct ImageLoad {
    rx: oneshot::Receiver<ImageOutcome>,
}

impl ImageLoad {
    /// Wait for the image to settle. A dropped signal counts as a failure.
    pub async fn settled(self) -> ImageOutcome {
        self.rx.await.unwrap_or(ImageOutcome::Failed)
    }
}

/// Create a linked signal/load pair.
pub fn image_load() -> (ImageSignal, ImageLoad) {
    let (tx, rx) = oneshot::channel();
    (ImageSignal { tx }, ImageLoad { rx })
}

/// Wait until every load has settled, in any order.
pub async fn all_settled(loads: Vec<ImageLoad>) -> Vec<ImageOutcome> {
    join_all(loads.into_iter().map(ImageLoad::settled)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_set_settles_immediately() {
        assert!(all_settled(Vec::new()).await.is_empty());
    }

    #[tokio::test]
    async fn failures_and_dropped_signals_settle() {
        let (a, load_a) = image_load();
        let (b, load_b) = image_load();
        let (c, load_c) = image_load();

        a.loaded();
        b.failed();
        drop(c);

        let outcomes = all_settled(vec![load_a, load_b, load_c]).await;
        assert_eq!(
            outcomes,
            vec![ImageOutcome::Loaded, ImageOutcome::Failed, ImageOutcome::Failed]
        );
    }

    #[tokio::test]
    async fn waits_for_the_slowest_signal() {
        let (fast, fast_load) = image_load();
        let (slow, slow_load) = image_load();
        fast.loaded();

        let barrier = tokio::spawn(all_settled(vec![fast_load, slow_load]));
        tokio::task::yield_now().await;
        assert!(!barrier.is_finished());

        slow.loaded();
        let outcomes = barrier.await.unwrap();
        assert_eq!(outcomes.len(), 2);
    }
}
