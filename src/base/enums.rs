use serde::{Deserialize, Serialize};

/// Defines degrees-of-freedom (DOF) types
///
/// Note: The fixed numbering scheme assists in sorting the DOFs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Deserialize, Serialize)]
pub enum Dof {
    /// Displacement along the first dimension
    Ux = 0,

    /// Displacement along the second dimension
    Uy = 1,

    /// Displacement along the third dimension
    Uz = 2,
}

impl Dof {
    /// Returns the displacement DOFs for a given space dimension
    pub fn displacement(ndim: usize) -> &'static [Dof] {
        if ndim == 2 {
            &[Dof::Ux, Dof::Uy]
        } else {
            &[Dof::Ux, Dof::Uy, Dof::Uz]
        }
    }
}

/// Defines natural boundary conditions (NBC)
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub enum Nbc {
    /// Normal distributed load on the reference configuration
    Qn,

    /// Distributed load parallel to x
    Qx,

    /// Distributed load parallel to y
    Qy,

    /// Distributed load parallel to z
    Qz,
}

impl Nbc {
    /// Returns the boundary cell DOF keys and local equation numbers
    ///
    /// **Notes:** The outer array has length = nnode.
    /// The inner arrays have lengths = ndof at the node.
    #[rustfmt::skip]
    pub fn dof_equation_pairs(&self, ndim: usize, nnode: usize) -> Vec<Vec<(Dof, usize)>> {
        let mut dofs = vec![Vec::new(); nnode];
        let mut count = 0;
        for m in 0..nnode {
            dofs[m].push((Dof::Ux, count)); count += 1;
            dofs[m].push((Dof::Uy, count)); count += 1;
            if ndim == 3 {
                dofs[m].push((Dof::Uz, count)); count += 1;
            }
        }
        dofs
    }
}

/// Defines point boundary conditions (e.g., point loads)
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub enum Pbc {
    /// Concentrated load parallel to x
    Fx,

    /// Concentrated load parallel to y
    Fy,

    /// Concentrated load parallel to z
    Fz,
}

impl Pbc {
    /// Returns the DOF corresponding to the concentrated load
    pub fn dof(&self) -> Dof {
        match self {
            Pbc::Fx => Dof::Ux,
            Pbc::Fy => Dof::Uy,
            Pbc::Fz => Dof::Uz,
        }
    }
}

/// Defines the criterion to detect the convergence of Newton-Raphson iterations
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub enum Criterion {
    /// Convergence on the (absolute or relative) norm of the residual vector
    Residual,

    /// Convergence on the relative corrective displacement
    Increment,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
