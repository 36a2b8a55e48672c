use super::{inverse_right_cauchy_green, lame_params, mandel_index_pairs, right_cauchy_green};
use super::{LocalState, StressStrainTrait};
use crate::base::Idealization;
use crate::StrError;
use russell_lab::Matrix;
use russell_tensor::{Tensor4, SQRT_2};

/// Implements a compressible neo-Hookean hyperelastic model
///
/// With C = I + 2E denoting the right Cauchy-Green tensor and J = det(F),
/// the second Piola-Kirchhoff stress and the tangent operator are:
///
/// ```text
/// S = μ (I - C⁻¹) + λ ln(J) C⁻¹
///
/// dS/dE = λ C⁻¹ ⊗ C⁻¹ + 2 (μ - λ ln(J)) H
///
/// Hᵢⱼₖₗ = ½ (C⁻¹ᵢₖ C⁻¹ⱼₗ + C⁻¹ᵢₗ C⁻¹ⱼₖ)
/// ```
pub struct NeoHookean {
    lambda: f64,
    mu: f64,

    // scratchpad for C and C⁻¹
    cc: Matrix,
    cci: Matrix,
}

impl NeoHookean {
    /// Allocates a new instance
    pub fn new(_ideal: &Idealization, young: f64, poisson: f64) -> Result<Self, StrError> {
        let (lambda, mu) = lame_params(young, poisson)?;
        Ok(NeoHookean {
            lambda,
            mu,
            cc: Matrix::new(3, 3),
            cci: Matrix::new(3, 3),
        })
    }
}

impl StressStrainTrait for NeoHookean {
    /// Indicates that the stiffness matrix is symmetric
    fn symmetric_stiffness(&self) -> bool {
        true
    }

    /// Computes the consistent tangent operator dS/dE
    fn stiffness(&mut self, dd: &mut Tensor4, state: &LocalState) -> Result<(), StrError> {
        right_cauchy_green(&mut self.cc, &state.strain);
        let det_c = inverse_right_cauchy_green(&mut self.cci, &self.cc)?;
        let ln_j = f64::ln(det_c) / 2.0;
        let pairs = mandel_index_pairs(state.strain.mandel());
        let dim = pairs.len();
        let cci = &self.cci;

        // Mandel vector of C⁻¹
        let mut civ = vec![0.0; dim];
        for a in 0..dim {
            let (i, j) = pairs[a];
            let factor = if i == j { 1.0 } else { SQRT_2 };
            civ[a] = factor * cci.get(i, j);
        }

        // Mandel matrix of dS/dE
        let coef = 2.0 * (self.mu - self.lambda * ln_j);
        let mat = dd.matrix_mut();
        for a in 0..dim {
            let (i, j) = pairs[a];
            let fa = if i == j { 1.0 } else { SQRT_2 };
            for b in 0..dim {
                let (k, l) = pairs[b];
                let fb = if k == l { 1.0 } else { SQRT_2 };
                let hh = (cci.get(i, k) * cci.get(j, l) + cci.get(i, l) * cci.get(j, k)) / 2.0;
                mat.set(a, b, self.lambda * civ[a] * civ[b] + coef * fa * fb * hh);
            }
        }
        Ok(())
    }

    /// Updates the stress tensor for the current strain state
    fn update_stress(&mut self, state: &mut LocalState) -> Result<(), StrError> {
        right_cauchy_green(&mut self.cc, &state.strain);
        let det_c = inverse_right_cauchy_green(&mut self.cci, &self.cc)?;
        let ln_j = f64::ln(det_c) / 2.0;
        let pairs = mandel_index_pairs(state.stress.mandel());
        state.stress.clear();
        for (i, j) in pairs {
            let delta = if i == j { 1.0 } else { 0.0 };
            let value = self.mu * (delta - self.cci.get(*i, *j)) + self.lambda * ln_j * self.cci.get(*i, *j);
            state.stress.sym_set(*i, *j, value);
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
