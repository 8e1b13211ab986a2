/// Configuration for the safeguarded Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Scaled tolerance on the achieved range value: the solver stops once
    /// `|range - target| <= tolerance * max(1, |range| + |target|)`.
    pub tolerance: f64,
    pub max_iters: usize,
    pub x_abs_tol: f64,
    pub x_rel_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-12,
            max_iters: 100,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-12,
        }
    }
}

impl Config {
    /// Creates a config with the given range tolerance and default limits.
    #[must_use]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Validates that all tolerances are finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err("tolerance must be finite and non-negative");
        }
        if !self.x_abs_tol.is_finite() || self.x_abs_tol < 0.0 {
            return Err("x_abs_tol must be finite and non-negative");
        }
        if !self.x_rel_tol.is_finite() || self.x_rel_tol < 0.0 {
            return Err("x_rel_tol must be finite and non-negative");
        }
        Ok(())
    }
}
