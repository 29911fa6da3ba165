//! Per-dish customization engine: bounded attribute values, synchronous
//! derived-theme recomputation, and the two timed actors layered on top
//! (cart auto-reset, animated reset to defaults).

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::Duration,
};

use catalog::domain::{AttributeCategory, DishSchema};
use thiserror::Error;
use tokio::{
    sync::{broadcast, watch, Mutex},
    task::JoinHandle,
};
use tracing::{debug, info};

pub mod cart;
pub mod reset;
pub mod theme;

pub use cart::CartSession;
pub use reset::{ResetPlan, ResetState};
pub use theme::{DominantCategory, ThemeSnapshot};

/// Timer cadence for the session's two timed actors. Defaults match the
/// legacy behavior: 21 reset emissions 50 ms apart, 2 s cart flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimings {
    pub reset_tick: Duration,
    pub reset_steps: u32,
    pub cart_reset_delay: Duration,
}

impl Default for SessionTimings {
    fn default() -> Self {
        Self {
            reset_tick: Duration::from_millis(50),
            reset_steps: 20,
            cart_reset_delay: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error("attribute {category:?} is not customizable on dish {dish_id}")]
    OutOfSchema {
        dish_id: i64,
        category: AttributeCategory,
    },
}

#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Emitted on every value mutation, slider or reset frame alike. The
    /// theme is recomputed before emission, so consumers never observe a
    /// stale snapshot.
    CustomizationChanged {
        values: HashMap<AttributeCategory, f32>,
        theme: ThemeSnapshot,
    },
    ResetStateChanged(ResetState),
}

struct SessionState {
    values: HashMap<AttributeCategory, f32>,
    theme: ThemeSnapshot,
}

struct ResetRun {
    generation: u64,
    handle: JoinHandle<()>,
}

/// One dish-customization session: the single logical owner of the
/// attribute values, theme snapshot, cart flag, and reset animation for
/// the dish being customized. Discard it when the screen closes; nothing
/// is persisted.
pub struct CustomizationSession {
    dish: DishSchema,
    timings: SessionTimings,
    inner: Mutex<SessionState>,
    reset_run: Mutex<Option<ResetRun>>,
    reset_generation: AtomicU64,
    cart: Arc<CartSession>,
    events: broadcast::Sender<SessionEvent>,
}

impl CustomizationSession {
    pub fn open(dish: DishSchema) -> Arc<Self> {
        Self::open_with_timings(dish, SessionTimings::default())
    }

    pub fn open_with_timings(dish: DishSchema, timings: SessionTimings) -> Arc<Self> {
        let values: HashMap<_, _> = dish.default_values().into_iter().collect();
        let theme = theme::derive(&values);
        let (events, _) = broadcast::channel(256);
        info!(
            "customization: session opened dish={} name={:?}",
            dish.id.0, dish.name
        );
        Arc::new(Self {
            cart: CartSession::new(timings.cart_reset_delay),
            dish,
            timings,
            inner: Mutex::new(SessionState { values, theme }),
            reset_run: Mutex::new(None),
            reset_generation: AtomicU64::new(0),
            events,
        })
    }

    pub fn dish(&self) -> &DishSchema {
        &self.dish
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// Current attribute values. Only categories present on the dish's
    /// schema appear; readers apply the legacy fallback for the rest
    /// (theme derivation already does).
    pub async fn values(&self) -> HashMap<AttributeCategory, f32> {
        self.inner.lock().await.values.clone()
    }

    /// Latest derived theme. Always consistent with `values()`: both are
    /// updated under the same lock.
    pub async fn theme(&self) -> ThemeSnapshot {
        self.inner.lock().await.theme
    }

    /// Applies one slider interaction. The raw value is clamped silently
    /// into the spec's bounds; a category missing from the dish's schema
    /// is a programming error on the caller's side and is rejected.
    ///
    /// The derived theme is recomputed before this returns, so renderers
    /// reading the snapshot right after never see a staleness window.
    pub async fn update(
        &self,
        category: AttributeCategory,
        raw: f32,
    ) -> Result<ThemeSnapshot, UpdateError> {
        let spec = self
            .dish
            .attribute(category)
            .ok_or(UpdateError::OutOfSchema {
                dish_id: self.dish.id.0,
                category,
            })?;
        let clamped = spec.clamp(raw);

        let mut inner = self.inner.lock().await;
        inner.values.insert(category, clamped);
        let theme = theme::derive(&inner.values);
        inner.theme = theme;
        let values = inner.values.clone();
        drop(inner);

        let _ = self
            .events
            .send(SessionEvent::CustomizationChanged { values, theme });
        Ok(theme)
    }

    // Cart boundary. The flag lives on its own watch channel so renderers
    // can subscribe to it independently of the customization stream.

    pub async fn add_to_cart(&self) {
        self.cart.add_to_cart().await;
        info!("customization: dish={} added to cart", self.dish.id.0);
    }

    pub fn cart_active(&self) -> bool {
        self.cart.is_active()
    }

    pub fn subscribe_cart(&self) -> watch::Receiver<bool> {
        self.cart.subscribe()
    }

    // Reset animation. One run at a time per session: starting a new run
    // cancels the previous one before its next emission (last writer
    // wins), so emissions never interleave.

    pub async fn start_reset(self: &Arc<Self>) {
        let mut run = self.reset_run.lock().await;
        if let Some(previous) = run.take() {
            previous.handle.abort();
            debug!("reset: superseded dish={}", self.dish.id.0);
        }

        let origin = self.inner.lock().await.values.clone();
        let plan = ResetPlan::new(origin, &self.dish, self.timings.reset_steps);
        let generation = self.reset_generation.fetch_add(1, Ordering::SeqCst) + 1;
        info!("customization: reset started dish={}", self.dish.id.0);
        let _ = self
            .events
            .send(SessionEvent::ResetStateChanged(ResetState::Running));

        let session = Arc::downgrade(self);
        let tick = self.timings.reset_tick;
        let handle = tokio::spawn(async move {
            for step in 0..=plan.steps() {
                let Some(session) = session.upgrade() else {
                    return;
                };
                session.apply_reset_frame(&plan, step).await;
                drop(session);
                if step < plan.steps() {
                    tokio::time::sleep(tick).await;
                }
            }
            if let Some(session) = session.upgrade() {
                session.finish_reset(generation).await;
            }
        });

        *run = Some(ResetRun { generation, handle });
    }

    /// Stops a running reset at its current emission. Values stay where
    /// the last frame left them; there is no snap back to the origin nor
    /// a jump to the target.
    pub async fn cancel_reset(&self) {
        let previous = self.reset_run.lock().await.take();
        if let Some(previous) = previous {
            previous.handle.abort();
            info!("customization: reset cancelled dish={}", self.dish.id.0);
            let _ = self
                .events
                .send(SessionEvent::ResetStateChanged(ResetState::Idle));
        }
    }

    pub async fn reset_state(&self) -> ResetState {
        if self.reset_run.lock().await.is_some() {
            ResetState::Running
        } else {
            ResetState::Idle
        }
    }

    async fn apply_reset_frame(&self, plan: &ResetPlan, step: u32) {
        let mut inner = self.inner.lock().await;
        for (category, value) in plan.frame(step) {
            inner.values.insert(category, value);
        }
        let theme = theme::derive(&inner.values);
        inner.theme = theme;
        let values = inner.values.clone();
        drop(inner);

        let _ = self
            .events
            .send(SessionEvent::CustomizationChanged { values, theme });
    }

    async fn finish_reset(&self, generation: u64) {
        let mut run = self.reset_run.lock().await;
        // A newer run may already have replaced this one; only the task
        // that still owns the slot transitions back to idle.
        if run.as_ref().is_some_and(|r| r.generation == generation) {
            *run = None;
            drop(run);
            info!("customization: reset complete dish={}", self.dish.id.0);
            let _ = self
                .events
                .send(SessionEvent::ResetStateChanged(ResetState::Idle));
        }
    }

    /// Tears the session down: pending cart and reset timers are
    /// discarded, never fired against a closed session.
    pub async fn close(&self) {
        self.cancel_reset().await;
        self.cart.close().await;
        info!("customization: session closed dish={}", self.dish.id.0);
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
