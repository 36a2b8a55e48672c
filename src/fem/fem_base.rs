use crate::base::{Attributes, Dof, Equations, ParamSolid};
use crate::StrError;
use gemlab::mesh::{Cell, CellAttribute, Mesh};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the material parameters, cell attributes, and equation numbers
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FemBase {
    /// Holds the space dimension
    pub ndim: usize,

    /// Holds all attributes
    pub amap: Attributes,

    /// Holds all DOF numbers
    pub equations: Equations,
}

impl FemBase {
    /// Allocates a new instance
    pub fn new<const N: usize>(mesh: &Mesh, arr: [(CellAttribute, ParamSolid); N]) -> Result<Self, StrError> {
        let amap = Attributes::from(arr);
        for cell in &mesh.cells {
            amap.get(cell)?; // every cell must have parameters
        }
        let equations = Equations::new(mesh);
        Ok(FemBase {
            ndim: mesh.ndim,
            amap,
            equations,
        })
    }

    /// Returns the number of local equations of a cell
    pub fn n_local_eq(&self, cell: &Cell) -> usize {
        cell.points.len() * Dof::displacement(self.ndim).len()
    }

    /// Reads a JSON file containing the base data
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let data = File::open(path).map_err(|_| "cannot open base file")?;
        let buffered = BufReader::new(data);
        let base = serde_json::from_reader(buffered).map_err(|_| "cannot parse base file")?;
        Ok(base)
    }

    /// Writes a JSON file with the base data
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
        let mut file = File::create(&path).map_err(|_| "cannot create base file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write base file")?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
