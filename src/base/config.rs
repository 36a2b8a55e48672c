use super::{Criterion, Dof, Idealization, LoadSchedule};
use super::{DEFAULT_N_MAX_ITERATIONS, DEFAULT_TOL_MDU_REL, DEFAULT_TOL_RR_ABS, DEFAULT_TOL_RR_REL};
use crate::StrError;
use gemlab::mesh::Mesh;
use russell_sparse::{Genie, LinSolParams};
use std::fmt;

/// Holds the configuration of a quasi-static finite-strain simulation
pub struct Config<'a> {
    /// Holds an access to the mesh
    pub(crate) mesh: &'a Mesh,

    /// Holds the geometry idealization (2D plane-strain or 3D)
    pub ideal: Idealization,

    /// Gravity acceleration (oriented against the last axis)
    ///
    /// The self-weight body force at full load is ρ g acting downwards,
    /// i.e., against y in 2D and against z in 3D. The current load factor ℓ
    /// scales the body force during the analysis.
    pub(crate) gravity: f64,

    /// Holds the schedule of load factors
    pub(crate) schedule: LoadSchedule,

    /// Maximum number of Newton-Raphson iterations per load increment
    pub(crate) n_max_iterations: usize,

    /// Absolute tolerance for the max-norm of the residual vector
    pub(crate) tol_rr_abs: f64,

    /// Relative tolerance for the max-norm of the residual vector
    ///
    /// The reference value is the residual norm at the first iteration of the
    /// current load increment.
    pub(crate) tol_rr_rel: f64,

    /// Relative tolerance for the corrective displacement
    pub(crate) tol_mdu_rel: f64,

    /// Criterion to detect the convergence of Newton-Raphson iterations
    pub(crate) criterion: Criterion,

    /// Use the tangent stiffness computed at the first iteration only
    pub(crate) constant_tangent: bool,

    /// Ignore the symmetry of the global Jacobian matrix (use full storage)
    pub(crate) ignore_jacobian_symmetry: bool,

    /// Linear solver selection (direct sparse factorization)
    pub lin_sol_genie: Genie,

    /// Parameters for the linear (sparse) solver
    pub lin_sol_params: LinSolParams,

    /// Displacement DOF monitored by the load-displacement log
    pub(crate) monitored_dof: Dof,

    /// Show messages at each load increment
    pub(crate) verbose_steps: bool,

    /// Show messages at each Newton-Raphson iteration
    pub(crate) verbose_iterations: bool,

    /// Show linear system solution messages
    pub(crate) verbose_lin_sys_solve: bool,
}

impl<'a> Config<'a> {
    /// Allocates a new instance
    pub fn new(mesh: &'a Mesh) -> Self {
        Config {
            mesh,
            ideal: Idealization::new(mesh.ndim),
            gravity: 0.0,
            schedule: LoadSchedule::linspace(10).unwrap(),
            n_max_iterations: DEFAULT_N_MAX_ITERATIONS,
            tol_rr_abs: DEFAULT_TOL_RR_ABS,
            tol_rr_rel: DEFAULT_TOL_RR_REL,
            tol_mdu_rel: DEFAULT_TOL_MDU_REL,
            criterion: Criterion::Residual,
            constant_tangent: false,
            ignore_jacobian_symmetry: false,
            lin_sol_genie: Genie::Umfpack,
            lin_sol_params: LinSolParams::new(),
            monitored_dof: Dof::Uy,
            verbose_steps: true,
            verbose_iterations: false,
            verbose_lin_sys_solve: false,
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.gravity < 0.0 {
            return Some(format!("gravity = {:?} is incorrect; it must be ≥ 0.0", self.gravity));
        }
        if self.ideal.thickness <= 0.0 {
            return Some(format!(
                "thickness = {:?} is incorrect; it must be > 0.0",
                self.ideal.thickness
            ));
        }
        if self.n_max_iterations < 1 {
            return Some(format!(
                "n_max_iterations = {} is incorrect; it must be ≥ 1",
                self.n_max_iterations
            ));
        }
        if self.tol_rr_abs <= 0.0 {
            return Some(format!(
                "tol_rr_abs = {:?} is incorrect; it must be > 0.0",
                self.tol_rr_abs
            ));
        }
        if self.tol_rr_rel <= 0.0 {
            return Some(format!(
                "tol_rr_rel = {:?} is incorrect; it must be > 0.0",
                self.tol_rr_rel
            ));
        }
        if self.tol_mdu_rel <= 0.0 {
            return Some(format!(
                "tol_mdu_rel = {:?} is incorrect; it must be > 0.0",
                self.tol_mdu_rel
            ));
        }
        if self.mesh.ndim == 2 && self.monitored_dof == Dof::Uz {
            return Some("monitored_dof = Uz is incorrect in 2D".to_string());
        }
        None
    }

    /// Sets the gravity acceleration
    pub fn set_gravity(&mut self, value: f64) -> &mut Self {
        self.gravity = value;
        self
    }

    /// Sets the thickness for 2D plane-strain analyses
    pub fn set_thickness(&mut self, value: f64) -> &mut Self {
        self.ideal.thickness = value;
        self
    }

    /// Sets the schedule of load factors
    pub fn set_load_schedule(&mut self, schedule: LoadSchedule) -> &mut Self {
        self.schedule = schedule;
        self
    }

    /// Sets the maximum number of Newton-Raphson iterations per load increment
    pub fn set_n_max_iterations(&mut self, value: usize) -> &mut Self {
        self.n_max_iterations = value;
        self
    }

    /// Sets the absolute tolerance for the max-norm of the residual vector
    pub fn set_tol_rr_abs(&mut self, value: f64) -> &mut Self {
        self.tol_rr_abs = value;
        self
    }

    /// Sets the relative tolerance for the max-norm of the residual vector
    pub fn set_tol_rr_rel(&mut self, value: f64) -> &mut Self {
        self.tol_rr_rel = value;
        self
    }

    /// Sets the relative tolerance for the corrective displacement
    pub fn set_tol_mdu_rel(&mut self, value: f64) -> &mut Self {
        self.tol_mdu_rel = value;
        self
    }

    /// Sets the criterion to detect the convergence of Newton-Raphson iterations
    pub fn set_criterion(&mut self, criterion: Criterion) -> &mut Self {
        self.criterion = criterion;
        self
    }

    /// Sets the flag to use the tangent stiffness of the first iteration only
    pub fn set_constant_tangent(&mut self, flag: bool) -> &mut Self {
        self.constant_tangent = flag;
        self
    }

    /// Sets the flag to ignore the symmetry of the global Jacobian matrix
    pub fn set_ignore_jacobian_symmetry(&mut self, flag: bool) -> &mut Self {
        self.ignore_jacobian_symmetry = flag;
        self
    }

    /// Sets the linear solver (direct sparse factorization)
    pub fn set_lin_sol_genie(&mut self, genie: Genie) -> &mut Self {
        self.lin_sol_genie = genie;
        self
    }

    /// Sets the displacement DOF monitored by the load-displacement log
    pub fn set_monitored_dof(&mut self, dof: Dof) -> &mut Self {
        self.monitored_dof = dof;
        self
    }

    /// Enables or disables messages at each load increment
    pub fn set_verbose_steps(&mut self, flag: bool) -> &mut Self {
        self.verbose_steps = flag;
        self
    }

    /// Enables or disables messages at each Newton-Raphson iteration
    pub fn set_verbose_iterations(&mut self, flag: bool) -> &mut Self {
        self.verbose_iterations = flag;
        self
    }

    /// Enables or disables linear system solution messages
    pub fn set_verbose_lin_sys_solve(&mut self, flag: bool) -> &mut Self {
        self.verbose_lin_sys_solve = flag;
        self
    }
}

impl<'a> fmt::Display for Config<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n").unwrap();
        write!(f, "==================\n").unwrap();
        write!(f, "two_dim = {:?}\n", self.ideal.two_dim).unwrap();
        write!(f, "thickness = {:?}\n", self.ideal.thickness).unwrap();
        write!(f, "gravity = {:?}\n", self.gravity).unwrap();
        write!(f, "n_increment = {}\n", self.schedule.n_increment()).unwrap();
        write!(f, "n_max_iterations = {}\n", self.n_max_iterations).unwrap();
        write!(f, "tol_rr_abs = {:?}\n", self.tol_rr_abs).unwrap();
        write!(f, "tol_rr_rel = {:?}\n", self.tol_rr_rel).unwrap();
        write!(f, "tol_mdu_rel = {:?}\n", self.tol_mdu_rel).unwrap();
        write!(f, "criterion = {:?}\n", self.criterion).unwrap();
        write!(f, "lin_sol_genie = {:?}\n", self.lin_sol_genie).unwrap();
        write!(f, "monitored_dof = {:?}\n", self.monitored_dof).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
