use thiserror::Error;

use preimage_core::DifferentiableMap;

/// The result of evaluating a map at a given domain value.
#[derive(Debug, Clone)]
pub struct Evaluation<S> {
    pub x: f64,
    pub state: S,
    pub range: f64,
    pub derivative: f64,
}

impl<S> Evaluation<S> {
    /// Returns the signed residual against a target range value.
    #[must_use]
    pub fn residual(&self, target: f64) -> f64 {
        self.range - target
    }
}

/// Errors that can occur when evaluating a map.
#[derive(Debug, Error)]
pub enum EvalError<E> {
    /// Failed to compute the intermediate state.
    #[error("failed to compute state")]
    State(#[source] E),
    /// Failed to read the range value from the state.
    #[error("failed to compute range value")]
    Range(#[source] E),
    /// Failed to read the derivative from the state.
    #[error("failed to compute derivative")]
    Derivative(#[source] E),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M> = Result<
    Evaluation<<M as DifferentiableMap>::State>,
    EvalError<<M as DifferentiableMap>::Error>,
>;

/// Evaluates the map at `x`.
///
/// The state is computed once and consumed exactly twice: first for the range
/// value, then for the derivative. Solvers call this at most once per domain
/// value and never re-derive a value already in hand.
///
/// # Errors
///
/// Returns an error if the state, range, or derivative computation fails.
pub fn evaluate<M: DifferentiableMap>(map: &M, x: f64) -> EvaluateResult<M> {
    let state = map.state(x).map_err(EvalError::State)?;
    let range = map.range(&state).map_err(EvalError::Range)?;
    let derivative = map.derivative(&state).map_err(EvalError::Derivative)?;

    Ok(Evaluation {
        x,
        state,
        range,
        derivative,
    })
}
