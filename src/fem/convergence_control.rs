use crate::base::{Config, Criterion};
use crate::StrError;
use russell_lab::{vec_copy, vec_max_scaled, vec_norm, Norm, Vector};

/// Controls the convergence of the Newton-Raphson iterations
///
/// Two metrics are tracked:
///
/// 1. The max-norm of the residual vector (`norm_rr`), checked against the
///    absolute tolerance and against the relative tolerance with respect to
///    the norm at the first iteration of the current load increment.
/// 2. The relative corrective displacement (`rel_mdu`).
///
/// The criterion selected in [Config] decides which metric flags convergence.
pub struct ConvergenceControl<'a> {
    /// Holds the configuration (tolerances and verbosity)
    config: &'a Config<'a>,

    /// Current iteration index
    iteration: usize,

    /// Residual norm at the first iteration of the current load increment
    norm_rr0: f64,

    /// Previous residual norm
    norm_rr_prev: f64,

    /// Current residual norm
    norm_rr: f64,

    /// First corrective displacement vector of the current load increment
    mdu0: Vector,

    /// Norm of the current corrective displacement
    norm_mdu: f64,

    /// Previous relative corrective displacement
    rel_mdu_prev: f64,

    /// Current relative corrective displacement
    rel_mdu: f64,

    /// Converged on the norm of the residual vector
    converged_on_norm_rr: bool,

    /// Diverging on the norm of the residual vector
    diverging_on_norm_rr: bool,

    /// Converged on the relative corrective displacement
    converged_on_rel_mdu: bool,

    /// Diverging on the relative corrective displacement
    diverging_on_rel_mdu: bool,
}

impl<'a> ConvergenceControl<'a> {
    /// Allocates a new instance
    pub fn new(config: &'a Config<'a>, n_equation: usize) -> Self {
        ConvergenceControl {
            config,
            iteration: 0,
            norm_rr0: 0.0,
            norm_rr_prev: 0.0,
            norm_rr: 0.0,
            mdu0: Vector::new(n_equation),
            norm_mdu: 0.0,
            rel_mdu_prev: 0.0,
            rel_mdu: 0.0,
            converged_on_norm_rr: false,
            diverging_on_norm_rr: false,
            converged_on_rel_mdu: false,
            diverging_on_rel_mdu: false,
        }
    }

    /// Resets the flags at the beginning of a new load increment
    pub fn reset(&mut self) {
        self.converged_on_norm_rr = false;
        self.diverging_on_norm_rr = false;
        self.converged_on_rel_mdu = false;
        self.diverging_on_rel_mdu = false;
    }

    /// Checks the convergence according to the selected criterion
    pub fn converged(&self) -> bool {
        match self.config.criterion {
            Criterion::Residual => self.converged_on_norm_rr,
            Criterion::Increment => self.converged_on_rel_mdu,
        }
    }

    /// Tells whether the iterations are diverging or not
    pub fn diverging(&self) -> bool {
        match self.config.criterion {
            Criterion::Residual => self.diverging_on_norm_rr,
            Criterion::Increment => self.diverging_on_rel_mdu,
        }
    }

    /// Analyzes the convergence on the norm of the residual vector
    pub fn analyze_rr(&mut self, iteration: usize, rr: &Vector) -> Result<(), StrError> {
        // record iteration index
        self.iteration = iteration;

        // compute the norm of R
        self.norm_rr = vec_norm(rr, Norm::Max);

        // check for NaN or Inf
        if !self.norm_rr.is_finite() {
            self.converged_on_norm_rr = false;
            self.diverging_on_norm_rr = false;
            return Err("found NaN or Inf in the residual vector");
        }

        // reference value at the first iteration
        if iteration == 0 {
            self.norm_rr0 = self.norm_rr;
        }

        // check convergence (absolute or relative to the first iteration)
        self.converged_on_norm_rr = self.norm_rr < self.config.tol_rr_abs
            || (iteration > 0 && self.norm_rr < self.config.tol_rr_rel * self.norm_rr0);

        // check if diverging
        self.diverging_on_norm_rr = iteration > 0 && self.norm_rr > self.norm_rr_prev;

        // record the norm for subsequent iterations
        self.norm_rr_prev = self.norm_rr;
        Ok(())
    }

    /// Analyzes the convergence on the corrective displacement
    pub fn analyze_mdu(&mut self, iteration: usize, mdu: &Vector) -> Result<(), StrError> {
        // compute the norm of mdu
        self.norm_mdu = vec_norm(mdu, Norm::Max);

        // check for NaN or Inf
        if !self.norm_mdu.is_finite() {
            self.converged_on_rel_mdu = false;
            self.diverging_on_rel_mdu = false;
            return Err("found NaN or Inf in the corrective displacement vector");
        }

        // record the first correction and check convergence
        if iteration == 0 {
            vec_copy(&mut self.mdu0, mdu).unwrap();
            self.rel_mdu = 1.0;
            self.converged_on_rel_mdu = false;
        } else {
            self.rel_mdu = vec_max_scaled(mdu, &self.mdu0);
            self.converged_on_rel_mdu = self.rel_mdu < self.config.tol_mdu_rel;
        }

        // check if diverging
        self.diverging_on_rel_mdu = iteration > 1 && self.rel_mdu > self.rel_mdu_prev;

        // record the value for subsequent iterations
        self.rel_mdu_prev = self.rel_mdu;
        Ok(())
    }

    /// Prints the table header before the load stepping begins
    pub fn print_header(&self) {
        if self.config.verbose_steps || self.config.verbose_iterations {
            println!("{}", "-".repeat(69));
            println!(
                "{:>9} {:>11} {:>11} {:>5} {:>13} {:>13}",
                "increment", "ell", "dell", "iter", "max|mdu|", "max|R|"
            );
            println!("{}", "-".repeat(69));
        }
    }

    /// Prints the load increment information
    pub fn print_step(&self, increment: usize, ell: f64, dell: f64) {
        if self.config.verbose_steps {
            println!("{:>9} {:>11.6} {:>11.6}", increment, ell, dell);
        }
    }

    /// Prints the iteration information
    pub fn print_iteration(&self) {
        if self.config.verbose_iterations {
            let status = if self.converged() {
                "converged"
            } else if self.diverging() {
                "diverging"
            } else {
                ""
            };
            println!(
                "{:>9} {:>11} {:>11} {:>5} {:>13.6e} {:>13.6e} {}",
                "", "", "", self.iteration, self.norm_mdu, self.norm_rr, status
            );
        }
    }

    /// Prints the horizontal line at the end of the analysis
    pub fn print_footer(&self) {
        if self.config.verbose_steps || self.config.verbose_iterations {
            println!("{}", "-".repeat(69));
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
