//! Resource kinds and their bounded per-player counters.

/// The closed set of tracked resources and their fixed ranges.
pub mod kind;
/// Mutable quantity / production counters for a single resource.
pub mod state;

pub use kind::ResourceKind;
pub use state::ResourceState;
