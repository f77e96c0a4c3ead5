//! Effects: descriptions of asynchronous work returned by reducers.
//!
//! A reducer never performs I/O. It returns an [`Effect`] value and the
//! store schedules it after committing the new state. Effects are plain
//! values until scheduled, so tests can inspect them without running
//! anything.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::flux::action::Action;

/// Stable identity for an in-flight effect, used to target cancellation.
///
/// Keyed by (feature instance, operation) so that tearing a feature down
/// can cancel its full fixed set of operations. Starting a second effect
/// under a busy identity does not cancel the first; only an explicit
/// [`Effect::cancel`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CancelId {
    pub feature: &'static str,
    pub operation: &'static str,
    /// Distinguishes structurally identical feature instances, e.g. a
    /// detail screen nested inside another detail screen.
    pub instance: u64,
}

impl CancelId {
    pub const fn new(feature: &'static str, operation: &'static str) -> Self {
        Self {
            feature,
            operation,
            instance: 0,
        }
    }

    /// The same operation owned by a specific feature instance.
    pub const fn at(self, instance: u64) -> Self {
        Self {
            feature: self.feature,
            operation: self.operation,
            instance,
        }
    }
}

impl std::fmt::Display for CancelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.instance == 0 {
            write!(f, "{}/{}", self.feature, self.operation)
        } else {
            write!(f, "{}/{}#{}", self.feature, self.operation, self.instance)
        }
    }
}

/// Handle given to `run` work for feeding actions back into the store.
///
/// Sending is non-blocking; the action re-enters the store's serial
/// dispatch path. A sender obtained after the store is gone drops actions
/// silently.
pub struct ActionSender<A> {
    send: Arc<dyn Fn(A) + Send + Sync>,
}

impl<A: Action> ActionSender<A> {
    pub(crate) fn new(send: impl Fn(A) + Send + Sync + 'static) -> Self {
        Self {
            send: Arc::new(send),
        }
    }

    pub fn send(&self, action: A) {
        (self.send)(action);
    }
}

impl<A> Clone for ActionSender<A> {
    fn clone(&self) -> Self {
        Self {
            send: Arc::clone(&self.send),
        }
    }
}

pub(crate) type EffectFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;
pub(crate) type RunWork<A> = Box<dyn FnOnce(ActionSender<A>) -> EffectFuture + Send + 'static>;

pub(crate) enum EffectKind<A> {
    None,
    Send(A),
    Run { id: Option<CancelId>, work: RunWork<A> },
    Cancel(CancelId),
    Merge(Vec<Effect<A>>),
}

/// Description of zero, one, or many future actions.
pub struct Effect<A> {
    pub(crate) kind: EffectKind<A>,
}

impl<A: Action> Effect<A> {
    /// No follow-up work.
    pub fn none() -> Self {
        Self {
            kind: EffectKind::None,
        }
    }

    /// Re-dispatch `action` before the store pulls the next external action.
    pub fn send(action: A) -> Self {
        Self {
            kind: EffectKind::Send(action),
        }
    }

    /// Schedule asynchronous work. The work receives an [`ActionSender`]
    /// and may send any number of actions as results become available.
    pub fn run<F, Fut>(work: F) -> Self
    where
        F: FnOnce(ActionSender<A>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            kind: EffectKind::Run {
                id: None,
                work: Box::new(move |sender| Box::pin(work(sender))),
            },
        }
    }

    /// Like [`Effect::run`], registered under `id` so a later
    /// [`Effect::cancel`] can stop it while in flight.
    pub fn run_cancellable<F, Fut>(id: CancelId, work: F) -> Self
    where
        F: FnOnce(ActionSender<A>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            kind: EffectKind::Run {
                id: Some(id),
                work: Box::new(move |sender| Box::pin(work(sender))),
            },
        }
    }

    /// Cancel every in-flight effect registered under `id`.
    ///
    /// Idempotent: cancelling an identity with no in-flight work is a no-op.
    /// Cancellation is cooperative and race-tolerant; work that completed
    /// before the signal is observed may still deliver its action.
    pub fn cancel(id: CancelId) -> Self {
        Self {
            kind: EffectKind::Cancel(id),
        }
    }

    /// Combine effects; `run` parts execute concurrently, not sequentially.
    pub fn merge(effects: impl IntoIterator<Item = Effect<A>>) -> Self {
        let mut flattened = Vec::new();
        for effect in effects {
            match effect.kind {
                EffectKind::None => {}
                EffectKind::Merge(inner) => flattened.extend(inner),
                _ => flattened.push(effect),
            }
        }
        match flattened.len() {
            0 => Self::none(),
            1 => flattened.remove(0),
            _ => Self {
                kind: EffectKind::Merge(flattened),
            },
        }
    }

    /// Re-tag every action this effect produces into a parent action type.
    ///
    /// This is the lifting half of reducer scoping: a child effect mapped
    /// with the parent's embedding constructor re-enters the store as
    /// parent actions.
    pub fn map<B, F>(self, f: F) -> Effect<B>
    where
        B: Action,
        F: Fn(A) -> B + Clone + Send + Sync + 'static,
    {
        match self.kind {
            EffectKind::None => Effect::none(),
            EffectKind::Send(action) => Effect::send(f(action)),
            EffectKind::Cancel(id) => Effect::cancel(id),
            EffectKind::Run { id, work } => Effect {
                kind: EffectKind::Run {
                    id,
                    work: Box::new(move |sender: ActionSender<B>| {
                        let child = ActionSender::new(move |action| sender.send(f(action)));
                        work(child)
                    }),
                },
            },
            EffectKind::Merge(effects) => Effect {
                kind: EffectKind::Merge(
                    effects.into_iter().map(|e| e.map(f.clone())).collect(),
                ),
            },
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self.kind, EffectKind::None)
    }

    /// Actions this effect re-dispatches synchronously, in order.
    pub fn sent_actions(&self) -> Vec<&A> {
        match &self.kind {
            EffectKind::Send(action) => vec![action],
            EffectKind::Merge(effects) => {
                effects.iter().flat_map(Effect::sent_actions).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Cancellation identities this effect targets, in order.
    pub fn cancellations(&self) -> Vec<CancelId> {
        match &self.kind {
            EffectKind::Cancel(id) => vec![*id],
            EffectKind::Merge(effects) => {
                effects.iter().flat_map(Effect::cancellations).collect()
            }
            _ => Vec::new(),
        }
    }

    /// True when the effect schedules at least one unit of async work.
    pub fn has_run_work(&self) -> bool {
        match &self.kind {
            EffectKind::Run { .. } => true,
            EffectKind::Merge(effects) => effects.iter().any(Effect::has_run_work),
            _ => false,
        }
    }

    pub(crate) fn name(&self) -> &'static str {
        match &self.kind {
            EffectKind::None => "none",
            EffectKind::Send(_) => "send",
            EffectKind::Run { .. } => "run",
            EffectKind::Cancel(_) => "cancel",
            EffectKind::Merge(_) => "merge",
        }
    }
}

impl<A: Action> std::fmt::Debug for Effect<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect::{}", self.name())
    }
}
