// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Debouncing sync controller.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::protocol::Transport;
use crate::state::{DeviceState, Store};

/// Pushes the state of a [`Store`] to the device through a [`Transport`].
///
/// The controller is either idle or holds exactly one pending debounce timer.
/// Arming a new timer aborts the previous one; a push that already started
/// is never cancelled.
///
/// Pushes go through a single worker task, one request at a time, and each
/// one sends the store's state at the moment it starts. Requests made while
/// a push is under way are coalesced into one follow-up push, so the last
/// request to reach the device always carries the newest state.
///
/// Dropping the controller aborts the pending timer. A push already under
/// way still completes.
///
/// Methods that schedule work spawn Tokio tasks and must be called from
/// within a Tokio runtime.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
/// use aircon_remote::protocol::HttpTransport;
/// use aircon_remote::state::Store;
/// use aircon_remote::sync::SyncController;
///
/// # async fn example() -> aircon_remote::Result<()> {
/// let store = Store::default();
/// let sync = SyncController::new(
///     HttpTransport::new("192.168.1.20:8080")?,
///     store.clone(),
///     Duration::from_millis(500),
/// );
///
/// sync.initial_sync().await;
///
/// if store.enable_cool_mode() {
///     sync.push_immediate();
/// }
/// if store.increment_temp() {
///     sync.schedule_debounced();
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SyncController<T: Transport> {
    transport: Arc<T>,
    store: Store,
    debounce: Duration,
    /// Number of push requests made so far.
    requests: Arc<watch::Sender<u64>>,
    /// Last push completed by the worker.
    deliveries: Arc<watch::Sender<Delivery>>,
    worker: Mutex<Option<JoinHandle<()>>>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

/// Outcome of the push that served every request up to `generation`.
#[derive(Debug, Clone, Copy)]
struct Delivery {
    generation: u64,
    delivered: bool,
}

impl<T: Transport> SyncController<T> {
    /// Creates a controller pushing `store` through `transport`.
    #[must_use]
    pub fn new(transport: T, store: Store, debounce: Duration) -> Self {
        let (requests, _) = watch::channel(0);
        let (deliveries, _) = watch::channel(Delivery {
            generation: 0,
            delivered: true,
        });

        Self {
            transport: Arc::new(transport),
            store,
            debounce,
            requests: Arc::new(requests),
            deliveries: Arc::new(deliveries),
            worker: Mutex::new(None),
            pending: Mutex::new(None),
        }
    }

    /// Returns the store being synchronized.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns the debounce period.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    /// Reads the device's state and overwrites the store with it.
    ///
    /// On failure the store keeps its current content. Returns `true` if the
    /// device state was absorbed.
    pub async fn initial_sync(&self) -> bool {
        match self.transport.fetch_state().await {
            Ok(state) => {
                self.store.replace(state);
                tracing::info!(state = ?state, "Absorbed aircon state from device");
                true
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to fetch aircon state");
                false
            }
        }
    }

    /// Queues a push of the current state without waiting for it.
    pub fn push_immediate(&self) {
        self.request_push();
    }

    /// Pushes the current state and waits for the outcome.
    ///
    /// Returns `true` if the device accepted it. Failures are logged.
    pub async fn push_now(&self) -> bool {
        self.request_push();
        self.wait_delivered().await
    }

    /// Arms the debounce timer, replacing any pending one.
    ///
    /// When the timer fires, a push of the state at that moment is queued.
    pub fn schedule_debounced(&self) {
        self.ensure_worker();

        let requests = Arc::clone(&self.requests);
        let delay = self.debounce;

        let mut pending = self.pending.lock();
        let replaced = pending.take().is_some_and(|timer| {
            let live = !timer.is_finished();
            timer.abort();
            live
        });

        tracing::debug!(delay = ?delay, replaced, "Arming sync debounce timer");

        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            requests.send_modify(|generation| *generation += 1);
        }));
    }

    /// Returns `true` while a debounce timer is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .as_ref()
            .is_some_and(|timer| !timer.is_finished())
    }

    /// Disarms the pending debounce timer. Returns `true` if one was waiting.
    pub fn cancel_pending(&self) -> bool {
        self.pending.lock().take().is_some_and(|timer| {
            let live = !timer.is_finished();
            timer.abort();
            live
        })
    }

    /// Pushes a pending debounced change right away, then waits until every
    /// push requested so far has completed.
    ///
    /// Returns whether the last completed push was accepted by the device,
    /// or `true` if nothing was ever pushed.
    pub async fn flush(&self) -> bool {
        if self.cancel_pending() {
            tracing::debug!("Flushing pending aircon state");
            self.request_push();
        }
        self.wait_delivered().await
    }

    fn request_push(&self) {
        self.ensure_worker();
        self.requests.send_modify(|generation| *generation += 1);
    }

    fn ensure_worker(&self) {
        let mut worker = self.worker.lock();
        if worker.as_ref().is_some_and(|task| !task.is_finished()) {
            return;
        }

        *worker = Some(tokio::spawn(run_pushes(
            Arc::clone(&self.transport),
            self.store.clone(),
            self.requests.subscribe(),
            Arc::clone(&self.deliveries),
        )));
    }

    async fn wait_delivered(&self) -> bool {
        let target = *self.requests.borrow();
        let mut deliveries = self.deliveries.subscribe();
        deliveries
            .wait_for(|delivery| delivery.generation >= target)
            .await
            .is_ok_and(|delivery| delivery.delivered)
    }
}

impl<T: Transport> Drop for SyncController<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.get_mut().take() {
            timer.abort();
        }
    }
}

/// Serves push requests one at a time until every request sender is gone.
async fn run_pushes<T: Transport>(
    transport: Arc<T>,
    store: Store,
    mut requests: watch::Receiver<u64>,
    deliveries: Arc<watch::Sender<Delivery>>,
) {
    loop {
        let generation = *requests.borrow_and_update();
        let served = deliveries.borrow().generation;

        if served < generation {
            let delivered = push_logged(transport.as_ref(), store.snapshot()).await;
            deliveries.send_replace(Delivery {
                generation,
                delivered,
            });
        }

        if requests.changed().await.is_err() {
            break;
        }
    }
}

async fn push_logged<T: Transport>(transport: &T, state: DeviceState) -> bool {
    match transport.push_state(&state).await {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(error = %e, state = ?state, "Failed to push aircon state");
            false
        }
    }
}
