use super::FemBase;
use crate::base::Config;
use crate::material::ArrLocalState;
use crate::StrError;
use gemlab::integ::Gauss;
use gemlab::mesh::Mesh;
use russell_lab::Vector;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the state of a simulation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FemState {
    /// Load factor ℓ
    pub ell: f64,

    /// Load factor increment Δℓ of the current load step
    pub dell: f64,

    /// Cumulated (for one load step) primary unknowns {ΔU}
    ///
    /// (n_equation)
    pub duu: Vector,

    /// Primary unknowns {U}
    ///
    /// (n_equation)
    pub uu: Vector,

    /// Holds the secondary values (deformation gradient, strain, stress) at
    /// all integration (Gauss) points of all cells
    ///
    /// (ncell)
    pub gauss: Vec<ArrLocalState>,
}

impl FemState {
    /// Allocates a new instance
    pub fn new(mesh: &Mesh, base: &FemBase, config: &Config) -> Result<FemState, StrError> {
        if mesh.cells.len() == 0 {
            return Err("there are no cells in the mesh");
        }
        let mandel = config.ideal.mandel();
        let mut gauss = Vec::with_capacity(mesh.cells.len());
        for cell in &mesh.cells {
            let param = base.amap.get(cell)?;
            let ngauss = Gauss::new_or_sized(cell.kind, param.ngauss)?.npoint();
            gauss.push(ArrLocalState::new(mandel, ngauss));
        }
        let n_equation = base.equations.n_equation;
        Ok(FemState {
            ell: 0.0,
            dell: 0.0,
            duu: Vector::new(n_equation),
            uu: Vector::new(n_equation),
            gauss,
        })
    }

    /// Reads a JSON file containing the state data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let state = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(state)
    }

    /// Writes a JSON file with the state data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
