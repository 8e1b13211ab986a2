use std::error::Error as StdError;

use thiserror::Error;

use crate::inversion::EvalError;

/// Errors that can occur while inverting a map.
#[derive(Debug, Error)]
pub enum Error {
    #[error("bracket has zero width: both bounds are {value}")]
    ZeroWidthBracket { value: f64 },

    #[error("bracket contains non-finite bound: {value}")]
    NonFiniteBracket { value: f64 },

    #[error(
        "target {target} is not between the bracket range values \
         {lower_range} and {upper_range}"
    )]
    InvalidBracket {
        target: f64,
        lower_range: f64,
        upper_range: f64,
    },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("no convergence after {iters} iterations: residual {residual}")]
    NonConvergence { iters: usize, residual: f64 },

    #[error("failed to compute state")]
    State(#[source] Box<dyn StdError + Send + Sync>),

    #[error("failed to compute range value")]
    Range(#[source] Box<dyn StdError + Send + Sync>),

    #[error("failed to compute derivative")]
    Derivative(#[source] Box<dyn StdError + Send + Sync>),

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },
}

impl<E> From<EvalError<E>> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<E>) -> Self {
        match err {
            EvalError::State(e) => Self::State(Box::new(e)),
            EvalError::Range(e) => Self::Range(Box::new(e)),
            EvalError::Derivative(e) => Self::Derivative(Box::new(e)),
        }
    }
}
