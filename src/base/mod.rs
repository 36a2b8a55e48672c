//! Implements the base structures for a finite element simulation

mod assembly;
mod attributes;
mod config;
mod constants;
mod enums;
mod equations;
mod essential;
mod idealization;
mod natural;
mod parameters;
mod sample_meshes;
mod schedule;
pub use crate::base::assembly::*;
pub use crate::base::attributes::*;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::equations::*;
pub use crate::base::essential::*;
pub use crate::base::idealization::*;
pub use crate::base::natural::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_meshes::*;
pub use crate::base::schedule::*;
