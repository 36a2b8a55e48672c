use super::{BcPrescribedArray, Elements, FemBase};
use crate::base::Config;
use crate::StrError;
use russell_lab::Vector;
use russell_sparse::{LinSolver, SparseMatrix, Sym};

/// Holds variables to solve the global linear system
pub struct LinearSystem<'a> {
    /// Total number of global equations (total number of DOFs)
    pub n_equation: usize,

    /// Holds the supremum of the number of nonzero values (nnz) in the global matrix
    ///
    /// **Notes:**
    ///
    /// 1. The global matrix is sparse with the number of nonzero values indicated by `nnz`
    /// 2. The local element matrices add only to parts of the global matrix yielding a banded matrix
    /// 3. The largest upper bound of nnz is the total number of entries in the global matrix (nrow × ncol).
    ///    However, the elements share DOFs; therefore, the exact nnz is (much) less than nrow × ncol
    /// 4. The least upper bound (supremum) of nnz, indicated here by `nnz_sup`, is equal to the
    ///    sum of the number of entries of all local matrices plus the number of prescribed
    ///    equations since we will put ones on the diagonal of the global matrix; thus
    ///    `nnz ≤ n_prescribed + Σ (n_local_eq × n_local_eq)`
    pub nnz_sup: usize,

    /// Holds the symmetric storage option of the global matrix
    pub sym: Sym,

    /// Holds the global internal forces vector
    pub ff_int: Vector,

    /// Holds the global external forces vector
    pub ff_ext: Vector,

    /// Holds the residual vector R = F_int - F_ext
    pub rr: Vector,

    /// Holds the global Jacobian matrix K
    pub kk: SparseMatrix,

    /// Holds the linear solver
    pub solver: LinSolver<'a>,

    /// Holds the "minus-delta-U" vector (the solution of the linear system)
    pub mdu: Vector,
}

impl<'a> LinearSystem<'a> {
    /// Allocates a new instance
    pub fn new(
        base: &FemBase,
        config: &Config,
        prescribed: &BcPrescribedArray,
        elements: &Elements,
    ) -> Result<Self, StrError> {
        // equation (DOF) numbers
        let n_equation = base.equations.n_equation;

        // check if all Jacobian matrices are symmetric
        let symmetric = if config.ignore_jacobian_symmetry {
            false
        } else {
            elements.all_symmetric_jacobians()
        };

        // estimate the number of non-zero values
        let sym = config.lin_sol_genie.get_sym(symmetric);
        let mut nnz_sup = prescribed.equations.len();

        // elements always have a Jacobian matrix (all must be symmetric to use symmetry)
        nnz_sup += elements.all.iter().fold(0, |acc, e| {
            let n = e.actual.local_to_global().len();
            if sym.triangular() {
                acc + (n * n + n) / 2
            } else {
                acc + n * n
            }
        });

        // allocate new instance
        Ok(LinearSystem {
            n_equation,
            nnz_sup,
            sym,
            ff_int: Vector::new(n_equation),
            ff_ext: Vector::new(n_equation),
            rr: Vector::new(n_equation),
            kk: SparseMatrix::new_coo(n_equation, n_equation, nnz_sup, sym)?,
            solver: LinSolver::new(config.lin_sol_genie)?,
            mdu: Vector::new(n_equation),
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
