use super::{lame_params, LocalState, StressStrainTrait};
use crate::base::Idealization;
use crate::StrError;
use russell_tensor::{t4_ddot_t2, LinElasticity, Tensor4};

/// Implements the Saint-Venant-Kirchhoff hyperelastic model
///
/// The model extends the classical linear elastic relation to finite strains
/// by pairing the Green-Lagrange strain E with the second Piola-Kirchhoff
/// stress S:
///
/// ```text
/// S = D : E = λ tr(E) I + 2 μ E
/// ```
///
/// The tangent operator dS/dE is the constant elasticity tensor D.
pub struct SaintVenantKirchhoff {
    model: LinElasticity,
}

impl SaintVenantKirchhoff {
    /// Allocates a new instance
    pub fn new(ideal: &Idealization, young: f64, poisson: f64) -> Result<Self, StrError> {
        lame_params(young, poisson)?; // validates the parameters
        Ok(SaintVenantKirchhoff {
            model: LinElasticity::new(young, poisson, ideal.two_dim, false),
        })
    }
}

impl StressStrainTrait for SaintVenantKirchhoff {
    /// Indicates that the stiffness matrix is symmetric and constant
    fn symmetric_stiffness(&self) -> bool {
        true
    }

    /// Computes the consistent tangent operator dS/dE
    fn stiffness(&mut self, dd: &mut Tensor4, _state: &LocalState) -> Result<(), StrError> {
        dd.set_tensor(1.0, self.model.get_modulus());
        Ok(())
    }

    /// Updates the stress tensor for the current strain state
    fn update_stress(&mut self, state: &mut LocalState) -> Result<(), StrError> {
        let dd = self.model.get_modulus();
        t4_ddot_t2(&mut state.stress, 1.0, dd, &state.strain); // S = D : E
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SaintVenantKirchhoff;
    use crate::base::Idealization;
    use crate::material::{LocalState, StressStrainTrait};
    use russell_lab::approx_eq;
    use russell_tensor::{Mandel, Tensor4};

    const YOUNG: f64 = 1500.0;
    const POISSON: f64 = 0.25; // λ = μ = 600

    #[test]
    fn new_captures_errors() {
        let ideal = Idealization::new(2);
        assert_eq!(
            SaintVenantKirchhoff::new(&ideal, 0.0, POISSON).err(),
            Some("Young's modulus must be positive")
        );
        assert_eq!(
            SaintVenantKirchhoff::new(&ideal, YOUNG, 0.5).err(),
            Some("Poisson's coefficient must satisfy -1 < ν < 0.5")
        );
    }

    #[test]
    fn update_stress_works() {
        let ideal = Idealization::new(2);
        let mut model = SaintVenantKirchhoff::new(&ideal, YOUNG, POISSON).unwrap();
        let mut state = LocalState::new(ideal.mandel());
        state.strain.sym_set(0, 0, 0.1);
        state.strain.sym_set(0, 1, 0.05);
        model.update_stress(&mut state).unwrap();
        let (lambda, mu) = (600.0, 600.0);
        approx_eq(state.stress.get(0, 0), lambda * 0.1 + 2.0 * mu * 0.1, 1e-12);
        approx_eq(state.stress.get(1, 1), lambda * 0.1, 1e-12);
        approx_eq(state.stress.get(2, 2), lambda * 0.1, 1e-12);
        approx_eq(state.stress.get(0, 1), 2.0 * mu * 0.05, 1e-12);
    }

    #[test]
    fn stiffness_works() {
        let ideal = Idealization::new(3);
        let mut model = SaintVenantKirchhoff::new(&ideal, YOUNG, POISSON).unwrap();
        let state = LocalState::new(Mandel::Symmetric);
        let mut dd = Tensor4::new(Mandel::Symmetric);
        model.stiffness(&mut dd, &state).unwrap();
        let (lambda, mu) = (600.0, 600.0);
        approx_eq(dd.get(0, 0, 0, 0), lambda + 2.0 * mu, 1e-12);
        approx_eq(dd.get(0, 0, 1, 1), lambda, 1e-12);
        approx_eq(dd.get(0, 1, 0, 1), mu, 1e-12);
        assert_eq!(model.symmetric_stiffness(), true);
    }
}
