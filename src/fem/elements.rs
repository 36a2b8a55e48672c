use super::{ElementSolid, ElementTrait, FemBase, FemState};
use crate::base::{assemble_matrix, assemble_vector, Config};
use crate::StrError;
use gemlab::mesh::{Cell, Mesh};
use russell_lab::{deriv1_central5, Matrix, Vector};
use russell_sparse::CooMatrix;

/// Defines a generic finite element, wrapping an "actual" implementation
pub struct GenericElement<'a> {
    /// Connects to the "actual" implementation of local equations
    pub actual: Box<dyn ElementTrait + 'a>,

    /// Holds the local internal force vector
    pub f_int: Vector,

    /// Holds the local external force vector
    pub f_ext: Vector,

    /// Holds the local Jacobian matrix
    pub jacobian: Matrix,
}

/// Holds a collection of (generic) finite elements
pub struct Elements<'a> {
    /// All elements
    pub all: Vec<GenericElement<'a>>,
}

/// Holds auxiliary arguments for the computation of numerical Jacobian matrices
struct ArgsForNumericalJacobian<'a> {
    /// Holds the residual vector
    pub f_int: &'a mut Vector,

    /// Holds the current state
    pub state: &'a mut FemState,
}

impl<'a> GenericElement<'a> {
    /// Allocates a new instance
    pub fn new(mesh: &'a Mesh, base: &'a FemBase, config: &'a Config, cell: &'a Cell) -> Result<Self, StrError> {
        let param = base.amap.get(cell)?;
        let actual: Box<dyn ElementTrait> = Box::new(ElementSolid::new(mesh, base, config, cell, param)?);
        let neq = base.n_local_eq(cell);
        Ok(GenericElement {
            actual,
            f_int: Vector::new(neq),
            f_ext: Vector::new(neq),
            jacobian: Matrix::new(neq, neq),
        })
    }

    /// Calculates the local Jacobian matrix using finite differences on the internal forces
    ///
    /// The external forces are dead loads, thus the derivative of the residual
    /// equals the derivative of the internal forces.
    ///
    /// **Note:** The state may be changed temporarily, but it is restored at the end of the function
    pub fn numerical_jacobian(&mut self, state: &mut FemState) -> Result<(), StrError> {
        let neq = self.f_int.dim();
        let l2g = self.actual.local_to_global().clone();
        let mut args = ArgsForNumericalJacobian {
            f_int: &mut self.f_int,
            state,
        };
        for i in 0..neq {
            for j in 0..neq {
                let g = l2g[j];
                let at_u = args.state.uu[g];
                let res = deriv1_central5(at_u, &mut args, |u, a| {
                    let original_uu = a.state.uu[g];
                    let original_duu = a.state.duu[g];
                    a.state.uu[g] = u;
                    a.state.duu[g] = u - original_uu;
                    self.actual.backup_secondary_values(a.state);
                    self.actual.update_secondary_values(&mut a.state).unwrap();
                    self.actual.calc_f_int(&mut a.f_int, &a.state).unwrap();
                    self.actual.restore_secondary_values(&mut a.state);
                    a.state.uu[g] = original_uu;
                    a.state.duu[g] = original_duu;
                    Ok(a.f_int[i])
                });
                self.jacobian.set(i, j, res.unwrap());
            }
        }
        Ok(())
    }
}

impl<'a> Elements<'a> {
    /// Allocates a new instance
    pub fn new(mesh: &'a Mesh, base: &'a FemBase, config: &'a Config) -> Result<Self, StrError> {
        let res: Result<Vec<_>, _> = mesh
            .cells
            .iter()
            .map(|cell| GenericElement::new(mesh, base, config, cell))
            .collect();
        match res {
            Ok(all) => Ok(Elements { all }),
            Err(e) => Err(e),
        }
    }

    /// Returns whether all local Jacobian matrices are symmetric or not
    pub fn all_symmetric_jacobians(&self) -> bool {
        for e in &self.all {
            if !e.actual.symmetric_jacobian() {
                return false;
            }
        }
        true
    }

    /// Calculates all internal force vectors and adds them to the global vector
    pub fn assemble_f_int(&mut self, ff_int: &mut Vector, state: &FemState, ignore: &[bool]) -> Result<(), StrError> {
        for e in &mut self.all {
            e.actual.calc_f_int(&mut e.f_int, state)?;
            assemble_vector(ff_int, &e.f_int, &e.actual.local_to_global(), ignore);
        }
        Ok(())
    }

    /// Calculates all external force vectors at a load factor and adds them to the global vector
    pub fn assemble_f_ext(&mut self, ff_ext: &mut Vector, ell: f64, ignore: &[bool]) -> Result<(), StrError> {
        for e in &mut self.all {
            e.actual.calc_f_ext(&mut e.f_ext, ell)?;
            assemble_vector(ff_ext, &e.f_ext, &e.actual.local_to_global(), ignore);
        }
        Ok(())
    }

    /// Calculates all local Jacobian matrices and adds them to the global matrix
    pub fn assemble_jacobians(
        &mut self,
        kk: &mut CooMatrix,
        state: &FemState,
        ignore: &[bool],
        triangular: bool,
    ) -> Result<(), StrError> {
        for e in &mut self.all {
            e.actual.calc_jacobian(&mut e.jacobian, state)?;
            assemble_matrix(kk, &e.jacobian, &e.actual.local_to_global(), ignore, triangular)?;
        }
        Ok(())
    }

    /// Initializes all internal values at the reference configuration
    pub fn initialize_internal_values(&mut self, state: &mut FemState) -> Result<(), StrError> {
        self.all
            .iter_mut()
            .map(|e| e.actual.initialize_internal_values(state))
            .collect()
    }

    /// Updates secondary values (deformation gradient, strain, stress)
    ///
    /// Note that the total displacement vector state.uu has been updated already
    pub fn update_secondary_values(&mut self, state: &mut FemState) -> Result<(), StrError> {
        self.all
            .iter_mut()
            .map(|e| e.actual.update_secondary_values(state))
            .collect()
    }

    /// Creates a copy of the secondary values
    pub fn backup_secondary_values(&mut self, state: &mut FemState) {
        self.all.iter_mut().for_each(|e| e.actual.backup_secondary_values(state));
    }

    /// Restores the secondary values from the backup
    pub fn restore_secondary_values(&mut self, state: &mut FemState) {
        self.all
            .iter_mut()
            .for_each(|e| e.actual.restore_secondary_values(state));
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{Elements, GenericElement};
    use crate::base::{Config, ParamSolid};
    use crate::fem::{FemBase, FemState};
    use gemlab::mesh::Samples;
    use russell_lab::{mat_approx_eq, Vector};

    #[test]
    fn new_handles_errors() {
        let mesh = Samples::one_qua4();
        let mut p1 = ParamSolid::sample_saint_venant_kirchhoff();
        p1.ngauss = Some(123); // wrong
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let config = Config::new(&mesh);
        assert!(GenericElement::new(&mesh, &base, &config, &mesh.cells[0]).is_err());
        assert!(Elements::new(&mesh, &base, &config).is_err());
    }

    #[test]
    fn new_works() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let config = Config::new(&mesh);
        let elements = Elements::new(&mesh, &base, &config).unwrap();
        assert_eq!(elements.all.len(), 1);
        assert_eq!(elements.all_symmetric_jacobians(), true);
    }

    #[test]
    fn num_jacobian_saint_venant_kirchhoff() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let config = Config::new(&mesh);
        let mut ele = GenericElement::new(&mesh, &base, &config, &mesh.cells[0]).unwrap();

        // a finite deformation state (stretch plus shear)
        let mut state = FemState::new(&mesh, &base, &config).unwrap();
        for m in 0..mesh.points.len() {
            let x = mesh.points[m].coords[0];
            let y = mesh.points[m].coords[1];
            state.uu[0 + m * 2] = 0.08 * x + 0.03 * y;
            state.uu[1 + m * 2] = -0.05 * y;
        }
        ele.actual.update_secondary_values(&mut state).unwrap();

        ele.actual.calc_jacobian(&mut ele.jacobian, &state).unwrap();
        let jj_ana = ele.jacobian.clone();
        ele.numerical_jacobian(&mut state).unwrap();
        mat_approx_eq(&jj_ana, &ele.jacobian, 1e-6);
    }

    #[test]
    fn num_jacobian_neo_hookean() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_neo_hookean();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let config = Config::new(&mesh);
        let mut ele = GenericElement::new(&mesh, &base, &config, &mesh.cells[0]).unwrap();

        let mut state = FemState::new(&mesh, &base, &config).unwrap();
        for m in 0..mesh.points.len() {
            let x = mesh.points[m].coords[0];
            let y = mesh.points[m].coords[1];
            state.uu[0 + m * 2] = 0.06 * x;
            state.uu[1 + m * 2] = 0.02 * x - 0.04 * y;
        }
        ele.actual.update_secondary_values(&mut state).unwrap();

        ele.actual.calc_jacobian(&mut ele.jacobian, &state).unwrap();
        let jj_ana = ele.jacobian.clone();
        ele.numerical_jacobian(&mut state).unwrap();
        mat_approx_eq(&jj_ana, &ele.jacobian, 1e-6);
    }

    #[test]
    fn assemble_methods_work() {
        let mesh = Samples::one_qua4();
        let mut p1 = ParamSolid::sample_saint_venant_kirchhoff();
        p1.density = 2.0;
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let mut config = Config::new(&mesh);
        config.set_gravity(1.0);
        let mut elements = Elements::new(&mesh, &base, &config).unwrap();
        let mut state = FemState::new(&mesh, &base, &config).unwrap();
        elements.initialize_internal_values(&mut state).unwrap();
        elements.update_secondary_values(&mut state).unwrap();

        let neq = base.equations.n_equation;
        let ignore = vec![false; neq];

        // internal forces vanish at the reference configuration
        let mut ff_int = Vector::new(neq);
        elements.assemble_f_int(&mut ff_int, &state, &ignore).unwrap();
        for i in 0..neq {
            assert!(f64::abs(ff_int[i]) < 1e-14);
        }

        // the unit square with ρ g = 2 weighs 2; halved by ℓ = 0.5
        let mut ff_ext = Vector::new(neq);
        elements.assemble_f_ext(&mut ff_ext, 0.5, &ignore).unwrap();
        let total: f64 = (0..neq).map(|i| ff_ext[i]).sum();
        assert!(f64::abs(total - (-1.0)) < 1e-14);
    }
}
