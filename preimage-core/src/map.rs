/// A differentiable map from a scalar domain to a scalar range.
///
/// Maps must be deterministic and side-effect free, always producing the same
/// result for a given domain value, which makes them a stable foundation for
/// solvers, caching, and instrumentation.
///
/// The expensive work happens once in [`state`]: it produces an intermediate
/// value from which the range value and the derivative are then read without
/// repeating the computation. A state is created once per domain value and
/// consumed exactly twice, by [`range`] and then [`derivative`].
///
/// [`state`]: DifferentiableMap::state
/// [`range`]: DifferentiableMap::range
/// [`derivative`]: DifferentiableMap::derivative
pub trait DifferentiableMap {
    type State;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the intermediate state at the given domain value.
    ///
    /// # Errors
    ///
    /// Each map defines its own `Error` type to represent domain-specific failures.
    fn state(&self, x: f64) -> Result<Self::State, Self::Error>;

    /// Reads the range value from a previously computed state.
    ///
    /// # Errors
    ///
    /// Returns an error if the range value cannot be computed.
    fn range(&self, state: &Self::State) -> Result<f64, Self::Error>;

    /// Reads the derivative of the range value with respect to the domain
    /// value from a previously computed state.
    ///
    /// # Errors
    ///
    /// Returns an error if the derivative cannot be computed.
    fn derivative(&self, state: &Self::State) -> Result<f64, Self::Error>;
}
