use super::{LocalState, NeoHookean, SaintVenantKirchhoff};
use crate::base::{Idealization, StressStrain};
use crate::StrError;
use russell_tensor::Tensor4;

/// Specifies the essential functions for finite-strain stress-strain models
///
/// A model maps the "gradient" quantity (the deformation gradient F, through
/// the Green-Lagrange strain E) to the "flux" quantity (the second
/// Piola-Kirchhoff stress S). Both quantities are exposed by name and size,
/// following the metadata convention of constitutive behaviour libraries.
pub trait StressStrainTrait: Send {
    /// Indicates that the stiffness (tangent operator) matrix is symmetric
    fn symmetric_stiffness(&self) -> bool;

    /// Returns the name of the gradient (kinematic) quantity
    fn gradient_name(&self) -> &'static str {
        "DeformationGradient"
    }

    /// Returns the name of the flux (stress) quantity
    fn flux_name(&self) -> &'static str {
        "SecondPiolaKirchhoffStress"
    }

    /// Returns the number of components of the gradient quantity
    ///
    /// The deformation gradient is a non-symmetric tensor: nine components in
    /// 3D and five in 2D plane-strain (F₁₁, F₂₂, F₃₃, F₁₂, F₂₁).
    fn gradient_size(&self, two_dim: bool) -> usize {
        if two_dim {
            5
        } else {
            9
        }
    }

    /// Returns the number of components of the flux quantity
    ///
    /// The second Piola-Kirchhoff stress is a symmetric tensor: six
    /// components in 3D and four in 2D plane-strain.
    fn flux_size(&self, two_dim: bool) -> usize {
        if two_dim {
            4
        } else {
            6
        }
    }

    /// Computes the consistent tangent operator dS/dE
    fn stiffness(&mut self, dd: &mut Tensor4, state: &LocalState) -> Result<(), StrError>;

    /// Updates the stress tensor for the current strain state
    ///
    /// The Green-Lagrange strain in `state.strain` must have been updated
    /// from the deformation gradient beforehand.
    fn update_stress(&mut self, state: &mut LocalState) -> Result<(), StrError>;
}

/// Holds the actual stress-strain model implementation
pub struct StressStrainModel {
    /// Holds the actual model implementation
    pub actual: Box<dyn StressStrainTrait>,
}

impl StressStrainModel {
    /// Allocates a new instance
    pub fn new(ideal: &Idealization, param: &StressStrain) -> Result<Self, StrError> {
        let actual: Box<dyn StressStrainTrait> = match param {
            StressStrain::SaintVenantKirchhoff { young, poisson } => {
                Box::new(SaintVenantKirchhoff::new(ideal, *young, *poisson)?)
            }
            StressStrain::NeoHookean { young, poisson } => Box::new(NeoHookean::new(ideal, *young, *poisson)?),
        };
        Ok(StressStrainModel { actual })
    }
}

/// Calculates the Lamé parameters (λ, μ) from Young's modulus and Poisson's coefficient
pub(crate) fn lame_params(young: f64, poisson: f64) -> Result<(f64, f64), StrError> {
    if young <= 0.0 {
        return Err("Young's modulus must be positive");
    }
    if poisson <= -1.0 || poisson >= 0.5 {
        return Err("Poisson's coefficient must satisfy -1 < ν < 0.5");
    }
    let lambda = young * poisson / ((1.0 + poisson) * (1.0 - 2.0 * poisson));
    let mu = young / (2.0 * (1.0 + poisson));
    Ok((lambda, mu))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{lame_params, StressStrainModel};
    use crate::base::{Idealization, StressStrain};
    use russell_lab::approx_eq;

    #[test]
    fn new_works() {
        let ideal = Idealization::new(2);
        let param = StressStrain::SaintVenantKirchhoff {
            young: 1500.0,
            poisson: 0.25,
        };
        let model = StressStrainModel::new(&ideal, &param).unwrap();
        assert_eq!(model.actual.symmetric_stiffness(), true);
        assert_eq!(model.actual.gradient_name(), "DeformationGradient");
        assert_eq!(model.actual.flux_name(), "SecondPiolaKirchhoffStress");
        assert_eq!(model.actual.gradient_size(true), 5);
        assert_eq!(model.actual.gradient_size(false), 9);
        assert_eq!(model.actual.flux_size(true), 4);
        assert_eq!(model.actual.flux_size(false), 6);

        let param = StressStrain::NeoHookean {
            young: 1500.0,
            poisson: 0.25,
        };
        let model = StressStrainModel::new(&ideal, &param).unwrap();
        assert_eq!(model.actual.symmetric_stiffness(), true);
    }

    #[test]
    fn new_captures_errors() {
        let ideal = Idealization::new(2);
        let param = StressStrain::SaintVenantKirchhoff {
            young: -1.0,
            poisson: 0.25,
        };
        assert_eq!(
            StressStrainModel::new(&ideal, &param).err(),
            Some("Young's modulus must be positive")
        );
        let param = StressStrain::NeoHookean {
            young: 1500.0,
            poisson: 0.5,
        };
        assert_eq!(
            StressStrainModel::new(&ideal, &param).err(),
            Some("Poisson's coefficient must satisfy -1 < ν < 0.5")
        );
    }

    #[test]
    fn lame_params_works() {
        let (lambda, mu) = lame_params(1500.0, 0.25).unwrap();
        approx_eq(lambda, 600.0, 1e-12);
        approx_eq(mu, 600.0, 1e-12);
    }
}
