use russell_lab::Matrix;
use russell_tensor::{Mandel, Tensor2};
use serde::{Deserialize, Serialize};

/// Holds local state data at a single integration (Gauss) point
///
/// The deformation gradient F is the "gradient" quantity handed to the
/// material model whereas the second Piola-Kirchhoff stress S is the "flux"
/// returned by it. The Green-Lagrange strain E = ½(FᵀF - I) is the strain
/// measure conjugate to S.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LocalState {
    /// Holds the deformation gradient F (3×3 components)
    pub deformation_gradient: Matrix,

    /// Holds the Green-Lagrange strain tensor E
    pub strain: Tensor2,

    /// Holds the second Piola-Kirchhoff stress tensor S
    pub stress: Tensor2,
}

impl LocalState {
    /// Allocates a new instance at the reference (undeformed) configuration
    pub fn new(mandel: Mandel) -> Self {
        let mut deformation_gradient = Matrix::new(3, 3);
        for i in 0..3 {
            deformation_gradient.set(i, i, 1.0);
        }
        LocalState {
            deformation_gradient,
            strain: Tensor2::new(mandel),
            stress: Tensor2::new(mandel),
        }
    }

    /// Copies the data from another state into this state
    pub fn mirror(&mut self, other: &LocalState) {
        for i in 0..3 {
            for j in 0..3 {
                self.deformation_gradient.set(i, j, other.deformation_gradient.get(i, j));
            }
        }
        self.strain.set_tensor(1.0, &other.strain);
        self.stress.set_tensor(1.0, &other.stress);
    }
}

/// Implements an array of LocalState with backup/restore functionality
///
/// One array is allocated per cell, with one entry per integration point.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ArrLocalState {
    /// All states (ngauss)
    pub all: Vec<LocalState>,

    /// Copy of all states for restoring after a rejected iteration
    backup: Vec<LocalState>,
}

impl ArrLocalState {
    /// Allocates a new instance
    pub fn new(mandel: Mandel, ngauss: usize) -> Self {
        let zero = LocalState::new(mandel);
        ArrLocalState {
            all: vec![zero.clone(); ngauss],
            backup: vec![zero; ngauss],
        }
    }

    /// Creates a backup copy of all states
    pub fn backup(&mut self) {
        for p in 0..self.all.len() {
            let (dest, src) = (&mut self.backup[p], &self.all[p]);
            dest.mirror(src);
        }
    }

    /// Restores all states from the backup copy
    pub fn restore(&mut self) {
        for p in 0..self.all.len() {
            let (dest, src) = (&mut self.all[p], &self.backup[p]);
            dest.mirror(src);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
