use super::{FemBase, FemState};
use crate::base::DEFAULT_OUT_DIR;
use crate::StrError;
use gemlab::mesh::Mesh;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Assists in generating output files
///
/// The summary file (this struct, serialized) records which snapshots were
/// written and the load factor of each one. Snapshots are indexed from zero;
/// index 0 corresponds to the reference (unloaded) configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileIo {
    /// Holds a flag to enable/disable the file generation
    pub(crate) active: bool,

    /// Defines the output directory
    pub(crate) output_dir: String,

    /// Defines the filename stem
    pub(crate) filename_stem: String,

    /// Holds the count of files written
    output_count: usize,

    /// Holds the indices of the output files
    pub indices: Vec<usize>,

    /// Holds the load factors corresponding to each output file
    pub ell_values: Vec<f64>,
}

impl FileIo {
    /// Allocates a new instance with deactivated generation of files
    pub fn new() -> Self {
        FileIo {
            active: false,
            output_dir: String::new(),
            filename_stem: String::new(),
            output_count: 0,
            indices: Vec::new(),
            ell_values: Vec::new(),
        }
    }

    /// Activates the generation of files
    ///
    /// This function creates the output directory and writes the mesh and
    /// base files.
    ///
    /// # Input
    ///
    /// * `mesh` -- the mesh
    /// * `base` -- the material parameters, attributes, and equation numbers
    /// * `filename_stem` -- the last part of the filename without extension, e.g., "my_simulation"
    /// * `output_directory` -- the directory to save the output files.
    ///   None means that the default directory will be used; see [DEFAULT_OUT_DIR]
    pub fn activate(
        &mut self,
        mesh: &Mesh,
        base: &FemBase,
        filename_stem: &str,
        output_directory: Option<&str>,
    ) -> Result<(), StrError> {
        // output directory
        let out_dir = match output_directory {
            Some(d) => d,
            None => DEFAULT_OUT_DIR,
        };

        // create directory
        fs::create_dir_all(out_dir).map_err(|_| "cannot create output directory")?;

        // update flags
        self.active = true;
        self.output_dir = out_dir.to_string();
        self.filename_stem = filename_stem.to_string();

        // write the mesh and base files
        mesh.write_json(&self.path_mesh())?;
        base.write_json(&self.path_base())?;
        Ok(())
    }

    /// Generates the filename path for the mesh file
    pub fn path_mesh(&self) -> String {
        if self.active {
            format!("{}/{}-mesh.json", self.output_dir, self.filename_stem)
        } else {
            "".to_string()
        }
    }

    /// Generates the filename path for the base file
    pub fn path_base(&self) -> String {
        if self.active {
            format!("{}/{}-base.json", self.output_dir, self.filename_stem)
        } else {
            "".to_string()
        }
    }

    /// Generates the filename path for the summary file
    pub fn path_summary(&self) -> String {
        if self.active {
            format!("{}/{}-summary.json", self.output_dir, self.filename_stem)
        } else {
            "".to_string()
        }
    }

    /// Generates the filename path for the state files
    pub fn path_state(&self, index: usize) -> String {
        if self.active {
            format!("{}/{}-{:0>20}.json", self.output_dir, self.filename_stem, index)
        } else {
            "".to_string()
        }
    }

    /// Generates the filename path for the VTU (ParaView) files
    pub fn path_vtu(&self, index: usize) -> String {
        if self.active {
            format!("{}/{}-{:0>20}.vtu", self.output_dir, self.filename_stem, index)
        } else {
            "".to_string()
        }
    }

    /// Generates the filename path for the PVD (ParaView) file
    pub fn path_pvd(&self) -> String {
        if self.active {
            format!("{}/{}.pvd", self.output_dir, self.filename_stem)
        } else {
            "".to_string()
        }
    }

    /// Reads a JSON file containing this struct
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open summary file")?;
        let buffered = BufReader::new(input);
        let summary = serde_json::from_reader(buffered).map_err(|_| "cannot parse summary file")?;
        Ok(summary)
    }

    /// Writes a JSON file with this struct
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
        let mut file = File::create(&path).map_err(|_| "cannot create summary file")?;
        serde_json::to_writer(&mut file, &self).map_err(|_| "cannot write summary file")?;
        Ok(())
    }

    /// Writes the current FEM state to a file tagged by the load factor
    pub fn write_state(&mut self, state: &FemState) -> Result<(), StrError> {
        if self.active {
            // save the state
            let path = self.path_state(self.output_count);
            state.write_json(&path)?;

            // update counters
            self.indices.push(self.output_count);
            self.ell_values.push(state.ell);
            self.output_count += 1;
        }
        Ok(())
    }

    /// Writes this struct to the summary file
    pub fn write_self(&self) -> Result<(), StrError> {
        if self.active {
            let path = self.path_summary();
            self.write_json(&path)?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::FileIo;
    use crate::base::{Config, ParamSolid, DEFAULT_TEST_DIR};
    use crate::fem::{FemBase, FemState};
    use gemlab::mesh::Samples;

    #[test]
    fn new_works() {
        let file_io = FileIo::new();
        assert_eq!(file_io.active, false);
        assert_eq!(file_io.path_mesh(), "");
        assert_eq!(file_io.path_base(), "");
        assert_eq!(file_io.path_summary(), "");
        assert_eq!(file_io.path_state(0), "");
        assert_eq!(file_io.path_vtu(0), "");
        assert_eq!(file_io.path_pvd(), "");
    }

    #[test]
    fn activate_and_write_work() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let config = Config::new(&mesh);
        let mut state = FemState::new(&mesh, &base, &config).unwrap();

        let mut file_io = FileIo::new();
        file_io
            .activate(&mesh, &base, "test_file_io_activate", Some(DEFAULT_TEST_DIR))
            .unwrap();
        assert_eq!(
            file_io.path_state(3),
            format!("{}/test_file_io_activate-00000000000000000003.json", DEFAULT_TEST_DIR)
        );

        // two snapshots: reference and half load
        file_io.write_state(&state).unwrap();
        state.ell = 0.5;
        file_io.write_state(&state).unwrap();
        file_io.write_self().unwrap();
        assert_eq!(file_io.indices, &[0, 1]);
        assert_eq!(file_io.ell_values, &[0.0, 0.5]);

        // read the summary back
        let read = FileIo::read_json(&file_io.path_summary()).unwrap();
        assert_eq!(read.indices, file_io.indices);
        assert_eq!(read.ell_values, file_io.ell_values);
    }
}
