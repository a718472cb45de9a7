//! Tools for inspecting boosting runs.
//! These are diagnostics for experiments; the algorithms themselves
//! never print or write anything.
pub mod logger;

pub use logger::Logger;

/// A trait implemented by boosters whose per-round state is worth
/// watching.
pub trait Research {
    /// How often each row has been drawn so far.
    fn current_counts(&self) -> &[usize];

    /// The current sampling distribution over rows.
    fn current_pmf(&self) -> &[f32];
}
