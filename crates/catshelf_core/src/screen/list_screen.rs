//! List screen controller.
//!
//! # Responsibility
//! - Drive the screen lifecycle: acquire the store handle, fetch all records
//!   off the interactive thread, rebind the adapter, release on teardown.
//! - Make fetch failure an observable state instead of a silently swallowed
//!   log line.
//!
//! # Invariants
//! - The interactive thread never blocks on the store; fetches run on their
//!   own thread and hand results back over a channel.
//! - Only the outcome of the newest activation generation may rebind the
//!   adapter; stale and post-teardown outcomes are discarded.
//! - `deactivate` is idempotent and leaves no store handle behind.

use crate::model::cat::Cat;
use crate::screen::adapter::ListAdapter;
use crate::screen::nav::{Navigator, ScreenTarget};
use crate::store::{CatStore, StoreResult};
use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, error, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Lifecycle state of the list screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Not activated, or torn down.
    Inactive,
    /// Handle acquired, adapter bound to the current (possibly empty) list.
    Activating,
    /// Background fetch in flight.
    Loading,
    /// Adapter holds the records of the last successful fetch.
    Loaded,
    /// Last fetch failed; the working list reflects the failure policy.
    LoadFailed,
}

/// What the view shows after a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Clear the working list; failure looks like an empty store.
    #[default]
    ShowEmpty,
    /// Keep the last successfully bound list.
    KeepStale,
}

/// Controller configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListScreenConfig {
    pub failure_policy: FailurePolicy,
}

struct FetchOutcome {
    generation: u64,
    result: StoreResult<Vec<Cat>>,
}

/// Controller for the cat list screen.
///
/// The store is injected at construction; the controller only manages a
/// per-activation handle to it. The adapter is constructed by the caller and
/// bound to an empty list immediately, so the view is never without one.
pub struct ListScreenController<A: ListAdapter> {
    store: Arc<dyn CatStore>,
    handle: Option<Arc<dyn CatStore>>,
    adapter: A,
    cats: Vec<Cat>,
    state: ScreenState,
    config: ListScreenConfig,
    generation: u64,
    active: Arc<AtomicBool>,
    outcome_tx: Sender<FetchOutcome>,
    outcome_rx: Receiver<FetchOutcome>,
}

impl<A: ListAdapter> ListScreenController<A> {
    /// Creates a controller and eagerly binds the adapter to an empty list.
    pub fn new(store: Arc<dyn CatStore>, mut adapter: A, config: ListScreenConfig) -> Self {
        adapter.rebind(&[]);
        let (outcome_tx, outcome_rx) = unbounded();
        Self {
            store,
            handle: None,
            adapter,
            cats: Vec::new(),
            state: ScreenState::Inactive,
            config,
            generation: 0,
            active: Arc::new(AtomicBool::new(false)),
            outcome_tx,
            outcome_rx,
        }
    }

    /// Activates the screen: acquires the store handle and starts one
    /// background fetch of all records.
    ///
    /// Re-activating while a previous fetch is still in flight supersedes
    /// it; the older outcome is discarded when it arrives.
    pub fn activate(&mut self) {
        self.handle = Some(Arc::clone(&self.store));
        self.state = ScreenState::Activating;
        self.active.store(true, Ordering::Release);
        self.generation += 1;

        let generation = self.generation;
        info!("event=screen_activate module=screen status=ok generation={generation}");

        let store = Arc::clone(&self.store);
        let tx = self.outcome_tx.clone();
        let active = Arc::clone(&self.active);
        let spawned = thread::Builder::new()
            .name("cat-fetch".into())
            .spawn(move || run_fetch(store, tx, active, generation));

        match spawned {
            Ok(_) => self.state = ScreenState::Loading,
            Err(err) => {
                error!(
                    "event=cat_fetch module=screen status=error generation={generation} \
                     error_code=spawn_failed error={err}"
                );
                self.enter_failed();
            }
        }
    }

    /// Applies any fetch outcomes that have already arrived, without
    /// blocking. Returns whether the screen state changed.
    pub fn pump(&mut self) -> bool {
        let mut applied = false;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            applied |= self.apply(outcome);
        }
        applied
    }

    /// Blocks the calling (interactive) side until the current fetch
    /// completes or the timeout elapses. Returns whether an outcome for the
    /// current activation was applied.
    ///
    /// Intended for frontends without an event loop and for tests; an
    /// event-driven frontend would call [`ListScreenController::pump`]
    /// from its tick instead.
    pub fn wait_for_fetch(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            let now = Instant::now();
            if now >= deadline {
                warn!(
                    "event=cat_fetch module=screen status=timeout generation={}",
                    self.generation
                );
                return false;
            }
            match self.outcome_rx.recv_timeout(deadline - now) {
                Ok(outcome) => {
                    if self.apply(outcome) {
                        return true;
                    }
                }
                Err(_) => {
                    warn!(
                        "event=cat_fetch module=screen status=timeout generation={}",
                        self.generation
                    );
                    return false;
                }
            }
        }
    }

    /// Tears the screen down: releases the store handle and marks in-flight
    /// fetches as discardable. Idempotent; never waits for the fetch thread.
    pub fn deactivate(&mut self) {
        self.active.store(false, Ordering::Release);
        if self.handle.take().is_some() {
            info!(
                "event=screen_deactivate module=screen status=ok generation={}",
                self.generation
            );
        }
        self.state = ScreenState::Inactive;
    }

    /// Handles a tap on the add control: exactly one launch of the creation
    /// screen followed by exactly one end of the current screen.
    pub fn tap_add(&mut self, nav: &mut dyn Navigator) {
        info!("event=nav_add module=screen status=ok target=add_cat");
        nav.launch_screen(ScreenTarget::AddCat);
        nav.end_current_screen();
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ScreenState {
        self.state
    }

    /// The working list currently bound to the adapter.
    pub fn cats(&self) -> &[Cat] {
        &self.cats
    }

    /// Whether a store handle is currently held.
    pub fn store_handle_active(&self) -> bool {
        self.handle.is_some()
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn adapter_mut(&mut self) -> &mut A {
        &mut self.adapter
    }

    fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if self.state != ScreenState::Loading || outcome.generation != self.generation {
            debug!(
                "event=cat_fetch module=screen status=stale generation={} current={}",
                outcome.generation, self.generation
            );
            return false;
        }

        match outcome.result {
            Ok(cats) => {
                self.cats = cats;
                self.adapter.rebind(&self.cats);
                self.adapter.notify_changed();
                self.state = ScreenState::Loaded;
            }
            Err(err) => {
                warn!(
                    "event=screen_state module=screen status=load_failed generation={} \
                     policy={:?} error={err}",
                    outcome.generation, self.config.failure_policy
                );
                self.enter_failed();
            }
        }
        true
    }

    fn enter_failed(&mut self) {
        if self.config.failure_policy == FailurePolicy::ShowEmpty {
            self.cats.clear();
            self.adapter.rebind(&self.cats);
            self.adapter.notify_changed();
        }
        self.state = ScreenState::LoadFailed;
    }
}

fn run_fetch(
    store: Arc<dyn CatStore>,
    tx: Sender<FetchOutcome>,
    active: Arc<AtomicBool>,
    generation: u64,
) {
    let started_at = Instant::now();
    info!("event=cat_fetch module=screen status=start generation={generation}");

    let result = store.all_cats();

    if !active.load(Ordering::Acquire) {
        info!(
            "event=cat_fetch module=screen status=discarded generation={generation} \
             duration_ms={}",
            started_at.elapsed().as_millis()
        );
        return;
    }

    match &result {
        Ok(cats) => info!(
            "event=cat_fetch module=screen status=ok generation={generation} count={} \
             duration_ms={}",
            cats.len(),
            started_at.elapsed().as_millis()
        ),
        Err(err) => error!(
            "event=cat_fetch module=screen status=error generation={generation} \
             duration_ms={} error={err}",
            started_at.elapsed().as_millis()
        ),
    }

    // Receiver dropped means the controller is gone; nothing left to notify.
    let _ = tx.send(FetchOutcome { generation, result });
}
