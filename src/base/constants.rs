/// Defines the default directory to write output files
pub const DEFAULT_OUT_DIR: &str = "/tmp/fssim/results";

/// Defines the default directory to write test files
pub const DEFAULT_TEST_DIR: &str = "/tmp/fssim/test";

/// Defines the default absolute tolerance for the residual norm
pub const DEFAULT_TOL_RR_ABS: f64 = 1e-10;

/// Defines the default relative tolerance for the residual norm
pub const DEFAULT_TOL_RR_REL: f64 = 1e-8;

/// Defines the default relative tolerance for the corrective displacement
pub const DEFAULT_TOL_MDU_REL: f64 = 1e-8;

/// Defines the default maximum number of Newton-Raphson iterations
pub const DEFAULT_N_MAX_ITERATIONS: usize = 15;
