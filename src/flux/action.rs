//! Base trait for actions driving state transitions.

/// Marker trait for action enums.
///
/// Actions represent:
/// - User intents (taps, text input, navigation)
/// - Completed async results (network responses, timer expirations)
///
/// Actions are immutable once constructed. `Debug + Clone` keeps them
/// loggable and replayable: reducing the same action sequence from the same
/// initial state always produces the same final state.
pub trait Action: std::fmt::Debug + Clone + Send + 'static {}
