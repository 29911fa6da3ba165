//! Transient "added to cart" flag with a timed auto-reset.

use std::{sync::Arc, time::Duration};

use tokio::{
    sync::{watch, Mutex},
    task::JoinHandle,
};
use tracing::debug;

pub struct CartSession {
    active: watch::Sender<bool>,
    delay: Duration,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl CartSession {
    pub fn new(delay: Duration) -> Arc<Self> {
        let (active, _) = watch::channel(false);
        Arc::new(Self {
            active,
            delay,
            timer: Mutex::new(None),
        })
    }

    /// Raises the flag and (re)arms the auto-reset timer. A pending timer
    /// is cancelled first, so re-adding while active extends the window
    /// rather than letting the earlier timer clear the flag early.
    pub async fn add_to_cart(self: &Arc<Self>) {
        self.active.send_replace(true);

        let mut timer = self.timer.lock().await;
        if let Some(previous) = timer.take() {
            previous.abort();
        }

        // Weak handle: a torn-down session discards the pending timer
        // instead of firing it.
        let session = Arc::downgrade(self);
        let delay = self.delay;
        *timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(session) = session.upgrade() {
                session.active.send_replace(false);
                debug!("cart: auto-reset fired");
            }
        }));
    }

    pub fn is_active(&self) -> bool {
        *self.active.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.active.subscribe()
    }

    /// Discards any pending auto-reset without firing it.
    pub async fn close(&self) {
        if let Some(timer) = self.timer.lock().await.take() {
            timer.abort();
        }
    }
}
