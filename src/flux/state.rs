//! Base trait for feature state in the data-flow engine.

/// Marker trait for feature state objects.
///
/// States should be:
/// - Value-semantic (Clone yields an independent snapshot)
/// - Self-contained (all data needed to present the feature)
/// - Comparable (PartialEq for detecting changes)
/// - Constructible empty (Default is the torn-down/initial value)
pub trait FeatureState: std::fmt::Debug + Clone + PartialEq + Default + Send + Sync + 'static {}
