//! Implements finite-strain material models

mod kinematics;
mod local_state;
mod neo_hookean;
mod saint_venant_kirchhoff;
mod stress_strain;
pub use crate::material::kinematics::*;
pub use crate::material::local_state::*;
pub use crate::material::neo_hookean::*;
pub use crate::material::saint_venant_kirchhoff::*;
pub use crate::material::stress_strain::*;
