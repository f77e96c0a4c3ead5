//! Reducer trait and composition combinators.

use crate::flux::action::Action;
use crate::flux::effect::Effect;
use crate::flux::state::FeatureState;

/// Reducer: the only place where state transitions happen.
///
/// `reduce` must be pure with respect to the state tree: it may read the
/// injected clients a reducer was constructed with, but all side effects
/// are returned as an [`Effect`] value, never performed inline, and it
/// never suspends.
pub trait Reducer {
    /// The state slice this reducer owns.
    type State: FeatureState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Fold one action into the state and describe any follow-up work.
    fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Effect<Self::Action>;
}

/// Conditional scoping for optional sub-state.
///
/// When the sub-state is absent the screen is torn down; actions addressed
/// to it (for example late effect completions) are dropped silently instead
/// of faulting.
pub fn reduce_if_let<R: Reducer>(
    reducer: &R,
    state: Option<&mut R::State>,
    action: R::Action,
) -> Effect<R::Action> {
    match state {
        Some(state) => reducer.reduce(state, action),
        None => {
            tracing::trace!(action = ?action, "dropped action for absent sub-state");
            Effect::none()
        }
    }
}

/// Runs an ordered list of reducers against the same action.
///
/// Each reducer sees the state as left by the previous one; their effects
/// are merged and run concurrently.
pub struct Combined<S, A> {
    reducers: Vec<Box<dyn Reducer<State = S, Action = A> + Send + Sync>>,
}

impl<S: FeatureState, A: Action> Combined<S, A> {
    pub fn new() -> Self {
        Self {
            reducers: Vec::new(),
        }
    }

    pub fn with(mut self, reducer: impl Reducer<State = S, Action = A> + Send + Sync + 'static) -> Self {
        self.reducers.push(Box::new(reducer));
        self
    }
}

impl<S: FeatureState, A: Action> Default for Combined<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: FeatureState, A: Action> Reducer for Combined<S, A> {
    type State = S;
    type Action = A;

    fn reduce(&self, state: &mut S, action: A) -> Effect<A> {
        Effect::merge(
            self.reducers
                .iter()
                .map(|reducer| reducer.reduce(state, action.clone()))
                .collect::<Vec<_>>(),
        )
    }
}

/// Cross-cutting wrapper observing one state field across a reduction.
///
/// Snapshots the selected value before delegating, compares afterwards, and
/// merges in whatever the reaction returns when the value changed. The
/// wrapper owns no state itself; haptic feedback on route presentation is
/// the canonical use.
pub struct OnChange<R: Reducer, V> {
    inner: R,
    select: Box<dyn Fn(&R::State) -> V + Send + Sync>,
    react: Box<dyn Fn(&V, &V) -> Effect<R::Action> + Send + Sync>,
}

impl<R: Reducer, V: PartialEq> OnChange<R, V> {
    pub fn new(
        inner: R,
        select: impl Fn(&R::State) -> V + Send + Sync + 'static,
        react: impl Fn(&V, &V) -> Effect<R::Action> + Send + Sync + 'static,
    ) -> Self {
        Self {
            inner,
            select: Box::new(select),
            react: Box::new(react),
        }
    }
}

impl<R: Reducer, V: PartialEq> Reducer for OnChange<R, V> {
    type State = R::State;
    type Action = R::Action;

    fn reduce(&self, state: &mut R::State, action: R::Action) -> Effect<R::Action> {
        let before = (self.select)(state);
        let effect = self.inner.reduce(state, action);
        let after = (self.select)(state);
        if before != after {
            Effect::merge([effect, (self.react)(&before, &after)])
        } else {
            effect
        }
    }
}
