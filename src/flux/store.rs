//! Store: the single serial dispatch loop owning the state tree.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

use crate::flux::effect::{ActionSender, CancelId, Effect, EffectKind, RunWork};
use crate::flux::reducer::Reducer;

/// The root runtime.
///
/// Holds the current state behind a watch channel and accepts actions
/// through an unbounded queue drained by a single task, so no two
/// reductions ever run concurrently against the same state tree. Actions
/// are applied in the exact order `dispatch` receives them; actions sent
/// from inside effects re-enter the same serial path.
pub struct Store<R: Reducer> {
    actions: mpsc::UnboundedSender<R::Action>,
    states: watch::Receiver<R::State>,
}

impl<R> Store<R>
where
    R: Reducer + Send + Sync + 'static,
{
    /// Spawn the dispatch loop. Must be called from within a tokio runtime.
    pub fn new(reducer: R, initial: R::State) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(initial.clone());

        let runtime = StoreRuntime {
            reducer,
            state: initial,
            state_tx,
            // Effects hold only a weak sender so the loop shuts down once
            // the store handle and all in-flight effects are gone.
            action_tx: action_tx.downgrade(),
            cancellations: CancellationRegistry::default(),
        };
        tokio::spawn(runtime.run(action_rx));

        Self {
            actions: action_tx,
            states: state_rx,
        }
    }

    /// Queue an action for reduction. Non-blocking; returns immediately.
    pub fn dispatch(&self, action: R::Action) {
        if self.actions.send(action).is_err() {
            tracing::warn!("store dispatch loop is gone; action dropped");
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> R::State {
        self.states.borrow().clone()
    }

    /// Observe state changes. Every committed reduction publishes once.
    pub fn subscribe(&self) -> watch::Receiver<R::State> {
        self.states.clone()
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
            states: self.states.clone(),
        }
    }
}

struct StoreRuntime<R: Reducer> {
    reducer: R,
    state: R::State,
    state_tx: watch::Sender<R::State>,
    action_tx: mpsc::WeakUnboundedSender<R::Action>,
    cancellations: CancellationRegistry,
}

impl<R> StoreRuntime<R>
where
    R: Reducer + Send + Sync + 'static,
{
    async fn run(mut self, mut actions: mpsc::UnboundedReceiver<R::Action>) {
        while let Some(action) = actions.recv().await {
            // `send` effects queue here and are reduced before the next
            // externally-submitted action is pulled from the channel.
            let mut queue = VecDeque::new();
            queue.push_back(action);

            while let Some(action) = queue.pop_front() {
                tracing::debug!(action = ?action, "dispatch");
                let effect = self.reducer.reduce(&mut self.state, action);
                // Commit before scheduling so observers and effects both
                // see the post-reduction state.
                let _ = self.state_tx.send(self.state.clone());
                if !effect.is_none() {
                    tracing::debug!(effect = %effect.name(), "schedule");
                }
                self.schedule(effect, &mut queue);
            }
        }
        tracing::debug!("store dispatch loop finished");
    }

    fn schedule(&self, effect: Effect<R::Action>, queue: &mut VecDeque<R::Action>) {
        match effect.kind {
            EffectKind::None => {}
            EffectKind::Send(action) => queue.push_back(action),
            EffectKind::Cancel(id) => self.cancellations.cancel(id),
            EffectKind::Run { id, work } => self.spawn(id, work),
            EffectKind::Merge(effects) => {
                for effect in effects {
                    self.schedule(effect, queue);
                }
            }
        }
    }

    fn spawn(&self, id: Option<CancelId>, work: RunWork<R::Action>) {
        let action_tx = self.action_tx.clone();
        let sender = ActionSender::new(move |action| {
            if let Some(tx) = action_tx.upgrade() {
                let _ = tx.send(action);
            }
        });
        let future = work(sender);

        match id {
            None => {
                tokio::spawn(future);
            }
            Some(id) => {
                let (task, token) = self.cancellations.register(id);
                let registry = self.cancellations.clone();
                tokio::spawn(async move {
                    let _cleanup = scopeguard::guard((), move |_| registry.complete(id, task));
                    tokio::select! {
                        _ = token.cancelled() => {
                            tracing::debug!(%id, "effect cancelled");
                        }
                        _ = future => {}
                    }
                });
            }
        }
    }
}

/// In-flight effect registry.
///
/// One identity may have several concurrent tasks; cancel signals all of
/// them. Completion removes a single task. Cancellation is cooperative:
/// the select in `spawn` observes the token at the task's next suspension
/// point, so work that already finished may still have delivered actions.
#[derive(Clone, Default)]
struct CancellationRegistry {
    inner: Arc<Mutex<HashMap<CancelId, HashMap<u64, CancellationToken>>>>,
    next_task: Arc<AtomicU64>,
}

impl CancellationRegistry {
    fn register(&self, id: CancelId) -> (u64, CancellationToken) {
        let task = self.next_task.fetch_add(1, Ordering::Relaxed);
        let token = CancellationToken::new();
        self.inner
            .lock()
            .entry(id)
            .or_default()
            .insert(task, token.clone());
        (task, token)
    }

    fn cancel(&self, id: CancelId) {
        let tasks = self.inner.lock().remove(&id);
        match tasks {
            Some(tasks) => {
                for token in tasks.into_values() {
                    token.cancel();
                }
            }
            None => tracing::trace!(%id, "cancel with no in-flight effect"),
        }
    }

    fn complete(&self, id: CancelId, task: u64) {
        let mut inner = self.inner.lock();
        if let Some(tasks) = inner.get_mut(&id) {
            tasks.remove(&task);
            if tasks.is_empty() {
                inner.remove(&id);
            }
        }
    }
}
