use crate::StrError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Holds the parameters of finite-strain stress-strain models
///
/// All models relate the Green-Lagrange strain tensor E (computed from the
/// deformation gradient F) to the second Piola-Kirchhoff stress tensor S.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub enum StressStrain {
    /// Saint-Venant-Kirchhoff hyperelastic model
    ///
    /// ```text
    /// S = λ tr(E) I + 2 μ E
    /// ```
    SaintVenantKirchhoff {
        /// Young's modulus
        young: f64,

        /// Poisson's coefficient
        poisson: f64,
    },

    /// Compressible neo-Hookean hyperelastic model
    ///
    /// ```text
    /// S = μ (I - C⁻¹) + λ ln(J) C⁻¹
    /// ```
    NeoHookean {
        /// Young's modulus
        young: f64,

        /// Poisson's coefficient
        poisson: f64,
    },
}

impl StressStrain {
    /// Allocates a model selection from a model name and a map of properties
    ///
    /// This function mirrors the registration contract of behaviour libraries
    /// where a model is selected by a string identifier and a map of named
    /// material properties. The recognized property keys are `"YoungModulus"`
    /// and `"PoissonRatio"`.
    pub fn from_name(name: &str, properties: &HashMap<String, f64>) -> Result<Self, StrError> {
        let young = *properties
            .get("YoungModulus")
            .ok_or("the map of properties must contain YoungModulus")?;
        let poisson = *properties
            .get("PoissonRatio")
            .ok_or("the map of properties must contain PoissonRatio")?;
        match name {
            "SaintVenantKirchhoff" => Ok(StressStrain::SaintVenantKirchhoff { young, poisson }),
            "NeoHookean" => Ok(StressStrain::NeoHookean { young, poisson }),
            _ => Err("cannot find a stress-strain model with the given name"),
        }
    }

    /// Returns the name of the model
    pub fn name(&self) -> &'static str {
        match self {
            StressStrain::SaintVenantKirchhoff { .. } => "SaintVenantKirchhoff",
            StressStrain::NeoHookean { .. } => "NeoHookean",
        }
    }
}

/// Holds the parameters of a solid medium
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ParamSolid {
    /// Intrinsic (real) density
    pub density: f64,

    /// Parameters of the stress-strain model
    pub stress_strain: StressStrain,

    /// Optional number of integration (Gauss) points
    pub ngauss: Option<usize>,
}

impl ParamSolid {
    /// Returns a sample of parameters for the Saint-Venant-Kirchhoff model
    pub fn sample_saint_venant_kirchhoff() -> Self {
        ParamSolid {
            density: 1.0,
            stress_strain: StressStrain::SaintVenantKirchhoff {
                young: 1500.0,
                poisson: 0.25,
            },
            ngauss: None,
        }
    }

    /// Returns a sample of parameters for the neo-Hookean model
    pub fn sample_neo_hookean() -> Self {
        ParamSolid {
            density: 1.0,
            stress_strain: StressStrain::NeoHookean {
                young: 1500.0,
                poisson: 0.25,
            },
            ngauss: None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
