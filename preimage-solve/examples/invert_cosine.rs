//! Inverts `cos(x)` over `[0, pi]`, where the derivative vanishes at both
//! bounds and the solver must open with a bisection step.

use std::convert::Infallible;
use std::f64::consts::PI;

use preimage_core::DifferentiableMap;
use preimage_solve::inversion::evaluate;
use preimage_solve::inversion::newton::{Action, Config, Endpoints, Event, solve};

struct Cosine;

impl DifferentiableMap for Cosine {
    type State = f64;
    type Error = Infallible;

    fn state(&self, x: f64) -> Result<Self::State, Self::Error> {
        Ok(x)
    }

    fn range(&self, state: &Self::State) -> Result<f64, Self::Error> {
        Ok(state.cos())
    }

    fn derivative(&self, state: &Self::State) -> Result<f64, Self::Error> {
        Ok(-state.sin())
    }
}

fn main() {
    let map = Cosine;
    let target = 0.3;

    let lower = evaluate(&map, 0.0).expect("cosine never fails");
    let upper = evaluate(&map, PI).expect("cosine never fails");
    let endpoints = Endpoints::new(lower, upper.x, upper.range);

    let observer = |event: &Event<'_, f64>| {
        println!(
            "iter {:>2} {:?} step: x = {:.9}, range = {:+.9}",
            event.iter, event.kind, event.eval.x, event.eval.range,
        );
        None::<Action>
    };

    let solution = solve(&map, target, endpoints, &Config::with_tolerance(1e-9), observer)
        .expect("cosine inversion should converge");

    println!(
        "inverted cos at {target}: x = {:.9} (acos: {:.9}), derivative = {:.9}",
        solution.x,
        target.acos(),
        solution.derivative,
    );
}
