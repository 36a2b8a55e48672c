//! Makes available common structures needed to run a simulation
//!
//! You may write `use fssim::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Config, Criterion, Dof, Essential, LoadSchedule, Natural, Nbc, Pbc};
pub use crate::base::{ParamSolid, SampleMeshes, StressStrain, DEFAULT_OUT_DIR, DEFAULT_TEST_DIR};
pub use crate::fem::{FemBase, FemState, FileIo, PostProc, SolverQuasistatic};
pub use crate::util::LoadDisplacement;
