use super::FemState;
use crate::StrError;
use russell_lab::{Matrix, Vector};

/// Defines the trait for local (element) equations
pub trait ElementTrait: Send + Sync {
    /// Returns whether the local Jacobian matrix is symmetric or not
    fn symmetric_jacobian(&self) -> bool;

    /// Returns the local-to-global mapping
    fn local_to_global(&self) -> &Vec<usize>;

    /// Initializes the secondary values at the reference configuration
    fn initialize_internal_values(&mut self, state: &mut FemState) -> Result<(), StrError>;

    /// Calculates the internal force vector
    fn calc_f_int(&mut self, f_int: &mut Vector, state: &FemState) -> Result<(), StrError>;

    /// Calculates the external force vector at a given load factor
    fn calc_f_ext(&mut self, f_ext: &mut Vector, ell: f64) -> Result<(), StrError>;

    /// Calculates the Jacobian (tangent stiffness) matrix
    fn calc_jacobian(&mut self, jacobian: &mut Matrix, state: &FemState) -> Result<(), StrError>;

    /// Updates secondary values (deformation gradient, strain, stress)
    ///
    /// Note that the total displacement vector state.uu has been updated already
    fn update_secondary_values(&mut self, state: &mut FemState) -> Result<(), StrError>;

    /// Creates a copy of the secondary values
    fn backup_secondary_values(&mut self, state: &mut FemState);

    /// Restores the secondary values from the backup
    fn restore_secondary_values(&mut self, state: &mut FemState);
}
