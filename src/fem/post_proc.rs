use super::{FemBase, FemState, FileIo};
use crate::base::Dof;
use crate::material::cauchy_from_pk2;
use crate::StrError;
use gemlab::integ::Gauss;
use gemlab::mesh::{CellId, Mesh};
use gemlab::recovery::get_points_coords;
use gemlab::shapes::Scratchpad;
use russell_lab::{Matrix, Vector};
use russell_tensor::Tensor2;

/// Returns the maximum absolute value of a displacement component
///
/// The reduction folds over the whole DOF map, i.e., over all points carrying
/// the given displacement DOF.
pub fn max_abs_displacement(base: &FemBase, state: &FemState, dof: Dof) -> f64 {
    let mut vmax = 0.0;
    for map in &base.equations.all {
        if let Some(eq) = map.get(&dof) {
            vmax = f64::max(vmax, f64::abs(state.uu[*eq]));
        }
    }
    vmax
}

/// Assists in post-processing the results given at Gauss points
pub struct PostProc<'a> {
    /// Holds the mesh
    mesh: &'a Mesh,

    /// Holds the material parameters, cell attributes, and equation numbers
    base: &'a FemBase,
}

impl<'a> PostProc<'a> {
    /// Reads the summary and associated files for post-processing
    ///
    /// # Input
    ///
    /// * `out_dir` -- the output directory where the summary and associated files are located
    /// * `fn_stem` -- the filename stem used to construct the full path to the summary file
    ///
    /// # Output
    ///
    /// Returns `(file_io, mesh, base)`
    pub fn read_summary(out_dir: &str, fn_stem: &str) -> Result<(FileIo, Mesh, FemBase), StrError> {
        // load FileIo
        let full_path = format!("{}/{}-summary.json", out_dir, fn_stem);
        let mut file_io = FileIo::read_json(&full_path)?;

        // update output_dir because the files may have been moved
        file_io.output_dir = out_dir.to_string();

        // load the mesh
        let mesh = Mesh::read_json(&file_io.path_mesh())?;

        // load the FemBase
        let base = FemBase::read_json(&file_io.path_base())?;

        // done
        Ok((file_io, mesh, base))
    }

    /// Reads a JSON file with the FEM state at a given index (snapshot)
    pub fn read_state(file_io: &FileIo, index: usize) -> Result<FemState, StrError> {
        FemState::read_json(&file_io.path_state(index))
    }

    /// Allocates a new instance
    pub fn new(mesh: &'a Mesh, base: &'a FemBase) -> Self {
        PostProc { mesh, base }
    }

    /// Returns the real coordinates of all Gauss points of a cell
    ///
    /// # Output
    ///
    /// Returns an array with ngauss vectors, each one with dimension equal to the space dimension.
    pub fn gauss_coords(&self, cell_id: CellId) -> Result<Vec<Vector>, StrError> {
        let cell = &self.mesh.cells[cell_id];
        let ngauss_opt = self.base.amap.ngauss(cell.attribute)?;
        let gauss = Gauss::new_or_sized(cell.kind, ngauss_opt)?;
        let mut pad = Scratchpad::new(self.mesh.ndim, cell.kind)?;
        self.mesh.set_pad(&mut pad, &cell.points);
        get_points_coords(&mut pad, &gauss)
    }

    /// Returns the Cauchy stress components at the Gauss points of a cell
    ///
    /// The Cauchy stress is obtained from the second Piola-Kirchhoff stress
    /// by the push-forward σ = F S Fᵀ / J.
    ///
    /// # Output
    ///
    /// * 2D: returns an `(ngauss, 4)` matrix where each row corresponds to `[σxx, σyy, σzz, σxy]`
    /// * 3D: returns an `(ngauss, 6)` matrix where each row corresponds to `[σxx, σyy, σzz, σxy, σyz, σzx]`
    pub fn gauss_stress(&self, cell_id: CellId, state: &FemState) -> Result<Matrix, StrError> {
        let arr = &state.gauss[cell_id];
        let ngauss = arr.all.len();
        if ngauss == 0 {
            return Err("there are no Gauss point data for the given cell");
        }
        let mandel = arr.all[0].stress.mandel();
        let two_dim = self.mesh.ndim == 2;
        let ncomp = if two_dim { 4 } else { 6 };
        let mut res = Matrix::new(ngauss, ncomp);
        let mut sigma = Tensor2::new(mandel);
        for p in 0..ngauss {
            let local = &arr.all[p];
            cauchy_from_pk2(&mut sigma, &local.deformation_gradient, &local.stress)?;
            res.set(p, 0, sigma.get(0, 0));
            res.set(p, 1, sigma.get(1, 1));
            res.set(p, 2, sigma.get(2, 2));
            res.set(p, 3, sigma.get(0, 1));
            if !two_dim {
                res.set(p, 4, sigma.get(1, 2));
                res.set(p, 5, sigma.get(0, 2));
            }
        }
        Ok(res)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{max_abs_displacement, PostProc};
    use crate::base::{Config, Dof, ParamSolid, DEFAULT_TEST_DIR};
    use crate::fem::{ElementSolid, ElementTrait, FemBase, FemState, FileIo};
    use gemlab::mesh::Samples;
    use russell_lab::approx_eq;

    #[test]
    fn max_abs_displacement_works() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let config = Config::new(&mesh);
        let mut state = FemState::new(&mesh, &base, &config).unwrap();
        assert_eq!(max_abs_displacement(&base, &state, Dof::Uy), 0.0);
        state.uu[1] = -0.3;
        state.uu[3] = 0.1;
        state.uu[0] = 9.0; // Ux must not interfere
        assert_eq!(max_abs_displacement(&base, &state, Dof::Uy), 0.3);
    }

    #[test]
    fn gauss_coords_works() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let post = PostProc::new(&mesh, &base);
        let coords = post.gauss_coords(0).unwrap();
        assert_eq!(coords.len(), 4); // 2x2 Gauss rule
        let a = 0.5 - 0.5 / f64::sqrt(3.0);
        approx_eq(coords[0][0], a, 1e-14);
        approx_eq(coords[0][1], a, 1e-14);
    }

    #[test]
    fn gauss_stress_works() {
        // uniaxial stretch of a unit square (plane strain)
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let config = Config::new(&mesh);
        let mut element = ElementSolid::new(&mesh, &base, &config, &mesh.cells[0], &p1).unwrap();
        let mut state = FemState::new(&mesh, &base, &config).unwrap();
        let alpha = 0.1;
        for m in 0..mesh.points.len() {
            let x = mesh.points[m].coords[0];
            state.uu[0 + m * 2] = alpha * x;
        }
        element.update_secondary_values(&mut state).unwrap();

        let post = PostProc::new(&mesh, &base);
        let sig = post.gauss_stress(0, &state).unwrap();
        assert_eq!(sig.dims(), (4, 4));

        // analytical solution: F = diag(λ, 1, 1), E = diag((λ²-1)/2, 0, 0)
        // S = λL tr(E) I + 2 μ E with λL = μ = 600; σ = F S Fᵀ / J
        let lam = 1.0 + alpha;
        let exx = (lam * lam - 1.0) / 2.0;
        let (lambda, mu) = (600.0, 600.0);
        let s_xx = lambda * exx + 2.0 * mu * exx;
        let s_yy = lambda * exx;
        let sig_xx = lam * lam * s_xx / lam;
        let sig_yy = s_yy / lam;
        for p in 0..4 {
            approx_eq(sig.get(p, 0), sig_xx, 1e-11);
            approx_eq(sig.get(p, 1), sig_yy, 1e-11);
            approx_eq(sig.get(p, 3), 0.0, 1e-12);
        }
    }

    #[test]
    fn read_summary_and_state_work() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let config = Config::new(&mesh);
        let mut state = FemState::new(&mesh, &base, &config).unwrap();
        state.ell = 1.0;

        let fn_stem = "test_post_proc_read_summary";
        let mut file_io = FileIo::new();
        file_io.activate(&mesh, &base, fn_stem, Some(DEFAULT_TEST_DIR)).unwrap();
        file_io.write_state(&state).unwrap();
        file_io.write_self().unwrap();

        let (read_io, read_mesh, read_base) = PostProc::read_summary(DEFAULT_TEST_DIR, fn_stem).unwrap();
        assert_eq!(read_io.indices, &[0]);
        assert_eq!(read_mesh.points.len(), mesh.points.len());
        assert_eq!(read_base.equations.n_equation, base.equations.n_equation);
        let read_state = PostProc::read_state(&read_io, 0).unwrap();
        assert_eq!(read_state.ell, 1.0);
    }
}
