//! Search input debounce
//!
//! Cancel-on-rerun timer: each keystroke aborts the previous pending
//! apply and schedules a new one, so recomputation only fires once the
//! input has paused.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Debounces a recomputation behind a fixed quiet interval
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Register new input: abort any pending apply and schedule `apply`
    /// to run after the quiet interval.
    pub fn input<F, Fut>(&mut self, apply: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            apply().await;
        }));
    }

    /// Drop any pending apply without running it
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for SearchDebouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[tokio::test(start_paused = true)]
    async fn only_the_last_input_applies() {
        let applied: Arc<Mutex<Vec<String>>> = Arc::default();
        let mut debouncer = SearchDebouncer::new(Duration::from_millis(300));

        for text in ["a", "ab", "abc"] {
            let applied = Arc::clone(&applied);
            debouncer.input(move || async move {
                applied.lock().unwrap().push(text.to_string());
            });
            // keystrokes arrive faster than the quiet interval
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        tokio::time::sleep(Duration::from_millis(400)).await;
        assert_eq!(*applied.lock().unwrap(), vec!["abc".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_apply() {
        let applied: Arc<Mutex<Vec<String>>> = Arc::default();
        let mut debouncer = SearchDebouncer::new(Duration::from_millis(300));

        {
            let applied = Arc::clone(&applied);
            debouncer.input(move || async move {
                applied.lock().unwrap().push("x".to_string());
            });
        }
        debouncer.cancel();

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(applied.lock().unwrap().is_empty());
    }
}
