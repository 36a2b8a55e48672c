use super::{ElementTrait, FemBase, FemState};
use crate::base::{Config, Dof, ParamSolid};
use crate::material::{deformation_det, green_lagrange, ArrLocalState, StressStrainModel};
use crate::StrError;
use gemlab::integ::Gauss;
use gemlab::mesh::{Cell, Mesh};
use gemlab::shapes::Scratchpad;
use russell_lab::{Matrix, Vector};
use russell_tensor::Tensor4;

/// Implements a total Lagrangian finite element for solid mechanics at finite strains
///
/// The element integrates over the reference configuration. The internal
/// force follows from the first Piola-Kirchhoff stress P = F S and the
/// consistent Jacobian matrix carries the material part (with the tangent
/// operator dS/dE) plus the geometric (initial stress) part.
pub struct ElementSolid<'a> {
    /// Global configuration
    config: &'a Config<'a>,

    /// The cell corresponding to this element
    cell: &'a Cell,

    /// Material parameters
    param: &'a ParamSolid,

    /// Material model
    model: StressStrainModel,

    /// Local-to-global mapping
    local_to_global: Vec<usize>,

    /// Scratchpad to perform numerical integration
    pad: Scratchpad,

    /// Integration (Gauss) points
    gauss: Gauss,

    /// Tangent operator dS/dE at a Gauss point
    dd: Tensor4,

    /// Space dimension
    ndim: usize,

    /// Number of nodes
    nnode: usize,
}

impl<'a> ElementSolid<'a> {
    /// Allocates a new instance
    pub fn new(
        mesh: &Mesh,
        base: &'a FemBase,
        config: &'a Config,
        cell: &'a Cell,
        param: &'a ParamSolid,
    ) -> Result<Self, StrError> {
        // model
        let model = StressStrainModel::new(&config.ideal, &param.stress_strain)?;

        // local-to-global mapping
        let ndim = mesh.ndim;
        let nnode = cell.points.len();
        let dofs = Dof::displacement(ndim);
        let mut local_to_global = vec![0; nnode * ndim];
        for m in 0..nnode {
            for (i, dof) in dofs.iter().enumerate() {
                local_to_global[i + m * ndim] = base.equations.eq(cell.points[m], *dof)?;
            }
        }

        // pad and integration points
        let mut pad = Scratchpad::new(ndim, cell.kind)?;
        mesh.set_pad(&mut pad, &cell.points);
        let gauss = Gauss::new_or_sized(cell.kind, param.ngauss)?;

        // done
        Ok(ElementSolid {
            config,
            cell,
            param,
            model,
            local_to_global,
            pad,
            gauss,
            dd: Tensor4::new(config.ideal.mandel()),
            ndim,
            nnode,
        })
    }
}

impl<'a> ElementTrait for ElementSolid<'a> {
    /// Returns whether the local Jacobian matrix is symmetric or not
    fn symmetric_jacobian(&self) -> bool {
        self.model.actual.symmetric_stiffness()
    }

    /// Returns the local-to-global mapping
    fn local_to_global(&self) -> &Vec<usize> {
        &self.local_to_global
    }

    /// Initializes the secondary values at the reference configuration
    fn initialize_internal_values(&mut self, state: &mut FemState) -> Result<(), StrError> {
        let mandel = self.config.ideal.mandel();
        state.gauss[self.cell.id] = ArrLocalState::new(mandel, self.gauss.npoint());
        Ok(())
    }

    /// Calculates the internal force vector
    ///
    /// ```text
    /// f_intᵐᵢ = ∫ Pᵢⱼ Gᵐⱼ dΩ₀   with   P = F S
    /// ```
    fn calc_f_int(&mut self, f_int: &mut Vector, state: &FemState) -> Result<(), StrError> {
        f_int.fill(0.0);
        let (ndim, nnode) = (self.ndim, self.nnode);
        let arr = &state.gauss[self.cell.id];
        for p in 0..self.gauss.npoint() {
            let iota = self.gauss.coords(p);
            let det_jac = self.pad.calc_gradient(iota)?;
            let wdv = self.gauss.weight(p) * det_jac * self.config.ideal.thickness;
            let gg = &self.pad.gradient;
            let local = &arr.all[p];
            let ff = &local.deformation_gradient;
            let ss = &local.stress;
            for m in 0..nnode {
                for i in 0..ndim {
                    let mut value = 0.0;
                    for j in 0..ndim {
                        // P₍ᵢⱼ₎ = Σₖ Fᵢₖ Sₖⱼ (off-plane terms vanish)
                        let mut pij = 0.0;
                        for k in 0..ndim {
                            pij += ff.get(i, k) * ss.get(k, j);
                        }
                        value += pij * gg.get(m, j);
                    }
                    f_int[i + m * ndim] += value * wdv;
                }
            }
        }
        Ok(())
    }

    /// Calculates the external force vector at a given load factor
    ///
    /// The only element-level external force is the self-weight (gravity)
    /// body force, scaled by the load factor ℓ and acting against the last
    /// axis (y in 2D and z in 3D).
    fn calc_f_ext(&mut self, f_ext: &mut Vector, ell: f64) -> Result<(), StrError> {
        f_ext.fill(0.0);
        if self.config.gravity == 0.0 {
            return Ok(());
        }
        let (ndim, nnode) = (self.ndim, self.nnode);
        let bf = -self.param.density * self.config.gravity * ell;
        for p in 0..self.gauss.npoint() {
            let iota = self.gauss.coords(p);
            let det_jac = self.pad.calc_gradient(iota)?;
            (self.pad.fn_interp)(&mut self.pad.interp, iota);
            let wdv = self.gauss.weight(p) * det_jac * self.config.ideal.thickness;
            let nn = &self.pad.interp;
            for m in 0..nnode {
                f_ext[(ndim - 1) + m * ndim] += nn[m] * bf * wdv;
            }
        }
        Ok(())
    }

    /// Calculates the Jacobian (tangent stiffness) matrix
    ///
    /// ```text
    /// Kᵐᵢⁿⱼ = ∫ Gᵐₐ [ Fᵢᵦ D₍ᵦₐᵨᵩ₎ Fⱼᵨ Gⁿᵩ + δᵢⱼ Sₐᵩ Gⁿᵩ ] dΩ₀
    /// ```
    fn calc_jacobian(&mut self, jacobian: &mut Matrix, state: &FemState) -> Result<(), StrError> {
        jacobian.fill(0.0);
        let (ndim, nnode) = (self.ndim, self.nnode);
        let arr = &state.gauss[self.cell.id];
        for p in 0..self.gauss.npoint() {
            let iota = self.gauss.coords(p);
            let det_jac = self.pad.calc_gradient(iota)?;
            let wdv = self.gauss.weight(p) * det_jac * self.config.ideal.thickness;
            let local = &arr.all[p];
            self.model.actual.stiffness(&mut self.dd, local)?;
            let gg = &self.pad.gradient;
            let ff = &local.deformation_gradient;
            let ss = &local.stress;
            for m in 0..nnode {
                for i in 0..ndim {
                    for n in 0..nnode {
                        for j in 0..ndim {
                            let mut value = 0.0;
                            // material stiffness
                            for a in 0..ndim {
                                for q in 0..ndim {
                                    let mut inner = 0.0;
                                    for b in 0..ndim {
                                        for r in 0..ndim {
                                            inner += ff.get(i, b) * self.dd.get(b, a, r, q) * ff.get(j, r);
                                        }
                                    }
                                    value += gg.get(m, a) * inner * gg.get(n, q);
                                }
                            }
                            // geometric (initial stress) stiffness
                            if i == j {
                                let mut geo = 0.0;
                                for a in 0..ndim {
                                    for q in 0..ndim {
                                        geo += gg.get(m, a) * ss.get(a, q) * gg.get(n, q);
                                    }
                                }
                                value += geo;
                            }
                            let (r, c) = (i + m * ndim, j + n * ndim);
                            jacobian.set(r, c, jacobian.get(r, c) + value * wdv);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Updates secondary values (deformation gradient, strain, stress)
    ///
    /// The deformation gradient is computed from the total displacement
    /// vector: F = I + Σₘ uᵐ ⊗ Gᵐ. Hyperelastic models are path-independent,
    /// so the stress follows directly from the total strain.
    fn update_secondary_values(&mut self, state: &mut FemState) -> Result<(), StrError> {
        let (ndim, nnode) = (self.ndim, self.nnode);
        for p in 0..self.gauss.npoint() {
            let iota = self.gauss.coords(p);
            self.pad.calc_gradient(iota)?;
            let gg = &self.pad.gradient;
            let local = &mut state.gauss[self.cell.id].all[p];
            let ff = &mut local.deformation_gradient;
            for i in 0..3 {
                for j in 0..3 {
                    ff.set(i, j, if i == j { 1.0 } else { 0.0 });
                }
            }
            for i in 0..ndim {
                for j in 0..ndim {
                    let mut value = if i == j { 1.0 } else { 0.0 };
                    for m in 0..nnode {
                        value += state.uu[self.local_to_global[i + m * ndim]] * gg.get(m, j);
                    }
                    ff.set(i, j, value);
                }
            }
            if deformation_det(ff) <= 0.0 {
                return Err("the det(F) of the deformation gradient must be positive");
            }
            green_lagrange(&mut local.strain, &local.deformation_gradient)?;
            self.model.actual.update_stress(local)?;
        }
        Ok(())
    }

    /// Creates a copy of the secondary values
    fn backup_secondary_values(&mut self, state: &mut FemState) {
        state.gauss[self.cell.id].backup();
    }

    /// Restores the secondary values from the backup
    fn restore_secondary_values(&mut self, state: &mut FemState) {
        state.gauss[self.cell.id].restore();
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ElementSolid;
    use crate::base::{Config, ParamSolid};
    use crate::fem::{ElementTrait, FemBase, FemState};
    use gemlab::mesh::Samples;
    use russell_lab::{approx_eq, vec_approx_eq, Matrix, Vector};

    #[test]
    fn new_works() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let config = Config::new(&mesh);
        let element = ElementSolid::new(&mesh, &base, &config, &mesh.cells[0], &p1).unwrap();
        assert_eq!(element.local_to_global, &[0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(element.symmetric_jacobian(), true);
    }

    #[test]
    fn update_secondary_values_works_homogeneous() {
        // impose a homogeneous deformation: u = (α x, β y)
        // ⇒ F = diag(1+α, 1+β) at every Gauss point
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let config = Config::new(&mesh);
        let mut element = ElementSolid::new(&mesh, &base, &config, &mesh.cells[0], &p1).unwrap();
        let mut state = FemState::new(&mesh, &base, &config).unwrap();

        let (alpha, beta) = (0.2, -0.1);
        for m in 0..mesh.points.len() {
            let x = mesh.points[m].coords[0];
            let y = mesh.points[m].coords[1];
            state.uu[0 + m * 2] = alpha * x;
            state.uu[1 + m * 2] = beta * y;
        }
        element.update_secondary_values(&mut state).unwrap();

        let (lx, ly) = (1.0 + alpha, 1.0 + beta);
        for local in &state.gauss[0].all {
            approx_eq(local.deformation_gradient.get(0, 0), lx, 1e-14);
            approx_eq(local.deformation_gradient.get(1, 1), ly, 1e-14);
            approx_eq(local.deformation_gradient.get(0, 1), 0.0, 1e-14);
            approx_eq(local.deformation_gradient.get(2, 2), 1.0, 1e-15);
            approx_eq(local.strain.get(0, 0), (lx * lx - 1.0) / 2.0, 1e-14);
            approx_eq(local.strain.get(1, 1), (ly * ly - 1.0) / 2.0, 1e-14);
            // Saint-Venant-Kirchhoff stress (λ = μ = 600)
            let (e_xx, e_yy) = ((lx * lx - 1.0) / 2.0, (ly * ly - 1.0) / 2.0);
            let correct_sxx = 600.0 * (e_xx + e_yy) + 2.0 * 600.0 * e_xx;
            approx_eq(local.stress.get(0, 0), correct_sxx, 1e-11);
        }
    }

    #[test]
    fn update_secondary_values_captures_inverted_cell() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let config = Config::new(&mesh);
        let mut element = ElementSolid::new(&mesh, &base, &config, &mesh.cells[0], &p1).unwrap();
        let mut state = FemState::new(&mesh, &base, &config).unwrap();
        // collapse the cell horizontally (u = -2x) so that det(F) < 0
        for m in 0..mesh.points.len() {
            let x = mesh.points[m].coords[0];
            state.uu[0 + m * 2] = -2.0 * x;
        }
        assert_eq!(
            element.update_secondary_values(&mut state).err(),
            Some("the det(F) of the deformation gradient must be positive")
        );
    }

    #[test]
    fn calc_f_int_vanishes_at_reference() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let config = Config::new(&mesh);
        let mut element = ElementSolid::new(&mesh, &base, &config, &mesh.cells[0], &p1).unwrap();
        let mut state = FemState::new(&mesh, &base, &config).unwrap();
        element.update_secondary_values(&mut state).unwrap();
        let mut f_int = Vector::new(8);
        element.calc_f_int(&mut f_int, &state).unwrap();
        vec_approx_eq(&f_int, &[0.0; 8], 1e-14);
    }

    #[test]
    fn calc_f_ext_works() {
        // unit square with ρ g = 2.0 and ℓ = 0.5:
        // total weight = 1.0; equally shared by the four nodes of Qua4
        let mesh = Samples::one_qua4();
        let mut p1 = ParamSolid::sample_saint_venant_kirchhoff();
        p1.density = 2.0;
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let mut config = Config::new(&mesh);
        config.set_gravity(1.0);
        let mut element = ElementSolid::new(&mesh, &base, &config, &mesh.cells[0], &p1).unwrap();
        let mut f_ext = Vector::new(8);
        element.calc_f_ext(&mut f_ext, 0.5).unwrap();
        #[rustfmt::skip]
        let correct = &[
            0.0, -0.25,
            0.0, -0.25,
            0.0, -0.25,
            0.0, -0.25,
        ];
        vec_approx_eq(&f_ext, correct, 1e-14);

        // zero gravity gives a zero vector
        let mut config = Config::new(&mesh);
        config.set_gravity(0.0);
        let mut element = ElementSolid::new(&mesh, &base, &config, &mesh.cells[0], &p1).unwrap();
        element.calc_f_ext(&mut f_ext, 1.0).unwrap();
        vec_approx_eq(&f_ext, &[0.0; 8], 1e-15);
    }

    #[test]
    fn calc_jacobian_is_symmetric() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_neo_hookean();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let config = Config::new(&mesh);
        let mut element = ElementSolid::new(&mesh, &base, &config, &mesh.cells[0], &p1).unwrap();
        let mut state = FemState::new(&mesh, &base, &config).unwrap();
        for m in 0..mesh.points.len() {
            let x = mesh.points[m].coords[0];
            let y = mesh.points[m].coords[1];
            state.uu[0 + m * 2] = 0.05 * x + 0.01 * y;
            state.uu[1 + m * 2] = -0.02 * y;
        }
        element.update_secondary_values(&mut state).unwrap();
        let mut jacobian = Matrix::new(8, 8);
        element.calc_jacobian(&mut jacobian, &state).unwrap();
        for i in 0..8 {
            for j in (i + 1)..8 {
                approx_eq(jacobian.get(i, j), jacobian.get(j, i), 1e-10);
            }
        }
    }
}
