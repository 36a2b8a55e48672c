use crate::StrError;
use russell_lab::{mat_inverse, Matrix};
use russell_tensor::{Mandel, Tensor2};

/// Returns the (i,j) index pairs of the Mandel components
pub(crate) fn mandel_index_pairs(mandel: Mandel) -> &'static [(usize, usize)] {
    if mandel == Mandel::Symmetric2D {
        &[(0, 0), (1, 1), (2, 2), (0, 1)]
    } else {
        &[(0, 0), (1, 1), (2, 2), (0, 1), (1, 2), (0, 2)]
    }
}

/// Calculates the Green-Lagrange strain tensor from the deformation gradient
///
/// ```text
/// E = ½ (Fᵀ F - I)
/// ```
pub fn green_lagrange(strain: &mut Tensor2, ff: &Matrix) -> Result<(), StrError> {
    let (nrow, ncol) = ff.dims();
    if nrow != 3 || ncol != 3 {
        return Err("the deformation gradient must be a 3×3 matrix");
    }
    strain.clear();
    for (i, j) in mandel_index_pairs(strain.mandel()) {
        let mut cij = 0.0;
        for k in 0..3 {
            cij += ff.get(k, *i) * ff.get(k, *j);
        }
        let delta = if i == j { 1.0 } else { 0.0 };
        strain.sym_set(*i, *j, (cij - delta) / 2.0);
    }
    Ok(())
}

/// Calculates the determinant of the deformation gradient (the Jacobian J)
pub fn deformation_det(ff: &Matrix) -> f64 {
    ff.get(0, 0) * (ff.get(1, 1) * ff.get(2, 2) - ff.get(1, 2) * ff.get(2, 1))
        - ff.get(0, 1) * (ff.get(1, 0) * ff.get(2, 2) - ff.get(1, 2) * ff.get(2, 0))
        + ff.get(0, 2) * (ff.get(1, 0) * ff.get(2, 1) - ff.get(1, 1) * ff.get(2, 0))
}

/// Calculates the right Cauchy-Green tensor C = I + 2E as a 3×3 matrix
pub(crate) fn right_cauchy_green(cc: &mut Matrix, strain: &Tensor2) {
    for i in 0..3 {
        for j in 0..3 {
            let delta = if i == j { 1.0 } else { 0.0 };
            cc.set(i, j, delta + 2.0 * strain.get(i, j));
        }
    }
}

/// Calculates the inverse of the right Cauchy-Green tensor
///
/// Returns the determinant of C. The determinant must be positive, otherwise
/// the deformation state is invalid (non-positive volume ratio).
pub(crate) fn inverse_right_cauchy_green(cci: &mut Matrix, cc: &Matrix) -> Result<f64, StrError> {
    let det = mat_inverse(cci, cc).map_err(|_| "cannot invert the right Cauchy-Green tensor")?;
    if det <= 0.0 {
        return Err("the det(C) of the right Cauchy-Green tensor must be positive");
    }
    Ok(det)
}

/// Calculates the Cauchy stress from the second Piola-Kirchhoff stress
///
/// ```text
/// σ = F S Fᵀ / J
/// ```
pub fn cauchy_from_pk2(sigma: &mut Tensor2, ff: &Matrix, stress: &Tensor2) -> Result<(), StrError> {
    let jj = deformation_det(ff);
    if jj <= 0.0 {
        return Err("the det(F) of the deformation gradient must be positive");
    }
    sigma.clear();
    for (i, j) in mandel_index_pairs(sigma.mandel()) {
        let mut value = 0.0;
        for k in 0..3 {
            for l in 0..3 {
                value += ff.get(*i, k) * stress.get(k, l) * ff.get(*j, l);
            }
        }
        sigma.sym_set(*i, *j, value / jj);
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
