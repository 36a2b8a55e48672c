//! Fssim - finite-strain solid mechanics simulator
//!
//! This crate implements the finite element method for quasi-static solid
//! mechanics at finite strains using a total Lagrangian formulation.
//! Hyperelastic material models map the Green-Lagrange strain (derived from
//! the deformation gradient) to the second Piola-Kirchhoff stress. External
//! loads grow according to a schedule of load factors and a Newton-Raphson
//! solve is performed at every load increment.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

pub mod base;
pub mod fem;
pub mod material;
pub mod prelude;
pub mod util;
