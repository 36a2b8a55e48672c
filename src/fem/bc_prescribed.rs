use super::FemBase;
use crate::base::Essential;
use crate::StrError;
use russell_lab::Vector;

/// Implements an array of prescribed (essential) values
///
/// The prescribed values are set directly in the solution vector at the
/// beginning of each load increment. The corresponding equations are removed
/// from the unknowns of the global linear system (ones on the diagonal).
pub struct BcPrescribedArray<'a> {
    /// Essential boundary conditions
    essential: &'a Essential<'a>,

    /// Equation number of each condition
    ///
    /// (n_condition; parallel to `essential.all`)
    pub equations: Vec<usize>,

    /// An array indicating which DOFs (equations) are prescribed
    ///
    /// The length of `flags` is equal to `n_equation`, the total number of DOFs (total number of equations).
    pub flags: Vec<bool>,
}

impl<'a> BcPrescribedArray<'a> {
    /// Allocates a new instance
    pub fn new(base: &FemBase, essential: &'a Essential<'a>) -> Result<Self, StrError> {
        let mut equations = Vec::with_capacity(essential.all.len());
        let mut flags = vec![false; base.equations.n_equation];
        for (point_id, dof, ..) in &essential.all {
            let eq = base.equations.eq(*point_id, *dof)?;
            flags[eq] = true;
            equations.push(eq);
        }
        Ok(BcPrescribedArray {
            essential,
            equations,
            flags,
        })
    }

    /// Sets all prescribed values in the solution vector at a given load factor
    pub fn apply(&self, duu: &mut Vector, uu: &mut Vector, ell: f64) {
        for (i, eq) in self.equations.iter().enumerate() {
            let value = self.essential.value(i, ell);
            duu[*eq] = value - uu[*eq];
            uu[*eq] = value;
        }
    }

    /// Tells whether at least one condition prescribes a non-zero value
    pub fn has_non_zero(&self) -> bool {
        self.essential.has_non_zero()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::BcPrescribedArray;
    use crate::base::{Dof, Essential, ParamSolid};
    use crate::fem::FemBase;
    use gemlab::mesh::Samples;
    use russell_lab::Vector;

    #[test]
    fn new_captures_errors() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();

        let mut essential = Essential::new();
        essential.points(&[100], Dof::Ux, 0.0);
        assert_eq!(
            BcPrescribedArray::new(&base, &essential).err(),
            Some("cannot find equation number because PointId is out-of-bounds")
        );

        let mut essential = Essential::new();
        essential.points(&[0], Dof::Uz, 0.0);
        assert_eq!(
            BcPrescribedArray::new(&base, &essential).err(),
            Some("cannot find equation number corresponding to (PointId,DOF)")
        );
    }

    #[test]
    fn apply_works() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let mut essential = Essential::new();
        essential.points(&[0, 1], Dof::Uy, 0.0).points(&[0], Dof::Ux, 0.0);
        let array = BcPrescribedArray::new(&base, &essential).unwrap();
        assert_eq!(array.flags, &[true, true, false, true, false, false, false, false]);
        assert_eq!(array.has_non_zero(), false);

        let n = base.equations.n_equation;
        let mut duu = Vector::new(n);
        let mut uu = Vector::new(n);
        uu.fill(0.5);
        array.apply(&mut duu, &mut uu, 1.0);
        assert_eq!(uu.as_data(), &[0.0, 0.0, 0.5, 0.0, 0.5, 0.5, 0.5, 0.5]);
        assert_eq!(duu.as_data(), &[-0.5, -0.5, 0.0, -0.5, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn apply_works_with_load_factor_function() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let mut essential = Essential::new();
        essential.points_fn(&[1], Dof::Ux, -0.2, |ell| ell);
        let array = BcPrescribedArray::new(&base, &essential).unwrap();
        assert_eq!(array.has_non_zero(), true);

        let n = base.equations.n_equation;
        let mut duu = Vector::new(n);
        let mut uu = Vector::new(n);
        array.apply(&mut duu, &mut uu, 0.5);
        assert_eq!(uu[2], -0.1);
        assert_eq!(duu[2], -0.1);
        array.apply(&mut duu, &mut uu, 1.0);
        assert_eq!(uu[2], -0.2);
        assert_eq!(duu[2], -0.1);
    }
}
