use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// Display time of a short notification.
pub const SHORT_DURATION: Duration = Duration::from_millis(4000);

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    message: Option<String>,
}

/// Holds at most one transient message and clears it after a fixed delay.
/// A newer message replaces the current one and cancels its timer.
///
/// `show` spawns onto the ambient tokio runtime.
pub struct SnackbarHost {
    slot: Arc<Mutex<Slot>>,
    timer: Option<JoinHandle<()>>,
    duration: Duration,
}

fn lock(slot: &Mutex<Slot>) -> MutexGuard<'_, Slot> {
    slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl SnackbarHost {
    pub fn new(duration: Duration) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Slot::default())),
            timer: None,
            duration,
        }
    }

    pub fn show(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("Snackbar: {}", message);

        let generation = {
            let mut slot = lock(&self.slot);
            slot.generation += 1;
            slot.message = Some(message);
            slot.generation
        };

        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        let slot = Arc::clone(&self.slot);
        let duration = self.duration;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            let mut slot = lock(&slot);
            if slot.generation == generation {
                slot.message = None;
            }
        }));
    }

    pub fn current(&self) -> Option<String> {
        lock(&self.slot).message.clone()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for SnackbarHost {
    fn default() -> Self {
        Self::new(SHORT_DURATION)
    }
}

impl Drop for SnackbarHost {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_message_expires_after_duration() {
        let mut host = SnackbarHost::new(Duration::from_secs(4));
        host.show("Book added to cart");
        assert_eq!(host.current().as_deref(), Some("Book added to cart"));

        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(host.current().as_deref(), Some("Book added to cart"));

        tokio::time::sleep(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(host.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_newer_message_replaces_and_restarts_timer() {
        let mut host = SnackbarHost::new(Duration::from_secs(4));
        host.show("Book added to cart");

        tokio::time::sleep(Duration::from_secs(3)).await;
        host.show("Cart cleared");

        // The first timer would have fired here.
        tokio::time::sleep(Duration::from_secs(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(host.current().as_deref(), Some("Cart cleared"));

        tokio::time::sleep(Duration::from_secs(3)).await;
        tokio::task::yield_now().await;
        assert_eq!(host.current(), None);
    }
}
