//! Solvers that invert differentiable maps.
//!
//! A [`DifferentiableMap`] is evaluated through an opaque intermediate state;
//! the solvers here search its domain for the value whose range output matches
//! a caller-specified target.
//!
//! [`DifferentiableMap`]: preimage_core::DifferentiableMap

pub mod inversion;
