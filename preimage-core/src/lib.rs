//! Core interfaces for inverting differentiable maps.
//!
//! A [`DifferentiableMap`] turns a scalar domain value into an intermediate
//! computed state, from which a range value and a derivative are read.
//! Solvers in the companion `preimage-solve` crate drive such maps toward a
//! caller-specified target range value.

pub mod map;
pub mod numeric;

pub use map::DifferentiableMap;
