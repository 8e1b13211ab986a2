mod bracket;
mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::{Solution, Status};

use bracket::{Bracket, Sign};

use preimage_core::{DifferentiableMap, numeric::within_tolerance};

use crate::inversion::{Evaluation, Observer, evaluate};

/// Control actions supported by the inversion solver.
pub enum Action {
    /// Stop the solver early and return the best point seen so far.
    StopEarly,
}

/// How the solver chose the candidate it just evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Newton extrapolation from the current best point.
    Newton,
    /// Bracket midpoint fallback.
    Bisection,
}

/// Iteration event emitted by the inversion solver.
pub struct Event<'a, S> {
    /// Iteration counter (1-based within the search loop).
    pub iter: usize,
    /// How the evaluated candidate was chosen.
    pub kind: StepKind,
    /// Current search bracket.
    pub bracket: [f64; 2],
    /// Evaluation at the chosen candidate.
    pub eval: &'a Evaluation<S>,
}

/// Caller-supplied bracket data for an inversion.
///
/// The lower bound arrives fully evaluated, so the solver never repeats work
/// the caller already did. The upper bound contributes only its domain and
/// range values; its state is computed on demand if it is ever needed.
#[derive(Debug, Clone)]
pub struct Endpoints<S> {
    /// Evaluation at the minimum domain bound.
    pub lower: Evaluation<S>,
    /// The maximum domain bound.
    pub upper_x: f64,
    /// The range value at the maximum domain bound.
    pub upper_range: f64,
}

impl<S> Endpoints<S> {
    /// Creates bracket endpoints from a lower evaluation and upper bound data.
    pub fn new(lower: Evaluation<S>, upper_x: f64, upper_range: f64) -> Self {
        Self {
            lower,
            upper_x,
            upper_range,
        }
    }
}

/// Finds the domain value whose range output matches `target`.
///
/// The search combines Newton extrapolation from the best-known point with a
/// bisection fallback on a sign-preserving bracket. Each candidate is
/// evaluated through the map exactly once. Observers see every solver-issued
/// evaluation and may stop the search early.
///
/// The caller guarantees that `target` lies between the range values of the
/// two bounds; an unmet precondition is reported as [`Error::InvalidBracket`].
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, if the map fails
/// during evaluation, or if the iteration cap is reached without meeting the
/// tolerance.
pub fn solve<M, Obs>(
    map: &M,
    target: f64,
    endpoints: Endpoints<M::State>,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::State>, Error>
where
    M: DifferentiableMap,
    Obs: for<'a> Observer<Event<'a, M::State>, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let Endpoints {
        lower,
        upper_x,
        upper_range,
    } = endpoints;

    for bound in [lower.x, upper_x] {
        if !bound.is_finite() {
            return Err(Error::NonFiniteBracket { value: bound });
        }
    }

    let lower_residual = lower.residual(target);
    if !lower_residual.is_finite() {
        return Err(Error::NonFiniteResidual {
            x: lower.x,
            residual: lower_residual,
        });
    }
    if within_tolerance(lower.range, target, config.tolerance) {
        return Ok(Solution::from_eval(lower, target, Status::Converged, 0));
    }

    let upper_residual = upper_range - target;
    if !upper_residual.is_finite() {
        return Err(Error::NonFiniteResidual {
            x: upper_x,
            residual: upper_residual,
        });
    }
    if within_tolerance(upper_range, target, config.tolerance) {
        // The upper bound was supplied as a bare range value, so one
        // evaluation fills in its state and derivative.
        let eval = evaluate(map, upper_x)?;
        return Ok(Solution::from_eval(eval, target, Status::Converged, 0));
    }

    if Sign::of(lower_residual) == Sign::of(upper_residual) {
        return Err(Error::InvalidBracket {
            target,
            lower_range: lower.range,
            upper_range,
        });
    }

    #[allow(clippy::float_cmp)]
    if lower.x == upper_x {
        return Err(Error::ZeroWidthBracket { value: lower.x });
    }

    let mut bracket = Bracket::new(
        (lower.x, Sign::of(lower_residual)),
        (upper_x, Sign::of(upper_residual)),
    );

    let mut best = lower;
    let mut best_residual = lower_residual;
    // Bracket width one round ago; bounds the accepted Newton step size.
    let mut prev_width = bracket.width();

    for iter in 1..=config.max_iters {
        let width = bracket.width();

        let (x, kind) = match newton_candidate(&best, best_residual, prev_width, &bracket) {
            Some(x) => (x, StepKind::Newton),
            None => (bracket.midpoint(), StepKind::Bisection),
        };

        let eval = evaluate(map, x)?;
        let residual = eval.residual(target);
        if !residual.is_finite() {
            return Err(Error::NonFiniteResidual { x, residual });
        }

        let event = Event {
            iter,
            kind,
            bracket: bracket.as_array(),
            eval: &eval,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    let chosen = if residual.abs() < best_residual.abs() {
                        eval
                    } else {
                        best
                    };
                    return Ok(Solution::from_eval(
                        chosen,
                        target,
                        Status::StoppedByObserver,
                        iter,
                    ));
                }
            }
        }

        if within_tolerance(eval.range, target, config.tolerance) {
            return Ok(Solution::from_eval(eval, target, Status::Converged, iter));
        }

        bracket.shrink(x, Sign::of(residual));
        best = eval;
        best_residual = residual;
        prev_width = width;

        if bracket.is_collapsed(config.x_abs_tol, config.x_rel_tol) {
            return Ok(Solution::from_eval(
                best,
                target,
                Status::BracketCollapsed,
                iter,
            ));
        }
    }

    Err(Error::NonConvergence {
        iters: config.max_iters,
        residual: best_residual,
    })
}

/// Runs the inversion without observation.
///
/// # Errors
///
/// Returns an error if the bracket or config is invalid, if the map fails
/// during evaluation, or if the iteration cap is reached without meeting the
/// tolerance.
pub fn solve_unobserved<M>(
    map: &M,
    target: f64,
    endpoints: Endpoints<M::State>,
    config: &Config,
) -> Result<Solution<M::State>, Error>
where
    M: DifferentiableMap,
{
    solve(map, target, endpoints, config, ())
}

/// Proposes a Newton candidate from the current best point, or `None` when
/// the safeguard calls for bisection this round.
///
/// The candidate is rejected when the step is non-finite (the derivative
/// vanished), when its size exceeds half the previous round's bracket width,
/// or when it does not land strictly inside the open bracket. Rejection on
/// any of these keeps the bracket shrinking.
fn newton_candidate<S>(
    best: &Evaluation<S>,
    residual: f64,
    prev_width: f64,
    bracket: &Bracket,
) -> Option<f64> {
    let step = residual / best.derivative;
    if !step.is_finite() || step.abs() > 0.5 * prev_width {
        return None;
    }

    let x = best.x - step;
    bracket.contains_strictly(x).then_some(x)
}
