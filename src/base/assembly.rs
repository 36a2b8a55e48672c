use russell_lab::{Matrix, Vector};
use russell_sparse::CooMatrix;
use crate::StrError;

/// Assembles a local vector into the global vector
///
/// # Input
///
/// * `rr_global` -- the global vector with length = `n_equation`
/// * `r_local` -- the local vector with length = `n_equation_local`
/// * `local_to_global` -- an array holding the global equation numbers
/// * `ignore` -- tells whether a global equation number must be ignored
///   in the assembly process (e.g., prescribed equations). Its length is
///   equal to the total number of equations.
///
/// # Panics
///
/// This function will panic if the indices are out-of-bounds
#[inline]
pub fn assemble_vector(rr_global: &mut Vector, r_local: &Vector, local_to_global: &[usize], ignore: &[bool]) {
    let n_equation_local = r_local.dim();
    for l in 0..n_equation_local {
        let g = local_to_global[l];
        if !ignore[g] {
            rr_global[g] += r_local[l];
        }
    }
}

/// Assembles a local matrix into the global (sparse) matrix
///
/// # Input
///
/// * `kk_global` -- the global square COO matrix with dims = (`n_equation`, `n_equation`)
/// * `kk_local` -- the local square matrix with dims = (`n_equation_local`, `n_equation_local`)
/// * `local_to_global` -- an array holding the global equation numbers
/// * `ignore` -- tells whether a global equation number must be ignored
///   in the assembly process (e.g., prescribed equations)
/// * `triangular` -- tells whether only the lower triangle (and diagonal)
///   must be assembled (required by symmetric-triangular sparse storage)
///
/// # Panics
///
/// This function will panic if the indices are out-of-bounds
#[inline]
pub fn assemble_matrix(
    kk_global: &mut CooMatrix,
    kk_local: &Matrix,
    local_to_global: &[usize],
    ignore: &[bool],
    triangular: bool,
) -> Result<(), StrError> {
    let n_equation_local = kk_local.dims().0;
    for l in 0..n_equation_local {
        let g = local_to_global[l];
        if !ignore[g] {
            for ll in 0..n_equation_local {
                let gg = local_to_global[ll];
                if !ignore[gg] {
                    if !triangular || g >= gg {
                        kk_global.put(g, gg, kk_local.get(l, ll))?;
                    }
                }
            }
        }
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
