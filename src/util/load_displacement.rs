use crate::StrError;
use plotpy::{Curve, Plot};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the load-displacement curve of a quasi-static analysis
///
/// One row is appended per converged load increment, after the initial row
/// corresponding to the reference (unloaded) configuration. Thus, a completed
/// analysis with n increments yields exactly n + 1 rows, with the first row
/// equal to (0, 0). Rows are never revised.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoadDisplacement {
    /// Maximum absolute value of the monitored displacement component
    pub disp: Vec<f64>,

    /// Load factor ℓ
    pub load: Vec<f64>,
}

impl LoadDisplacement {
    /// Allocates a new (empty) instance
    pub fn new() -> Self {
        LoadDisplacement {
            disp: Vec::new(),
            load: Vec::new(),
        }
    }

    /// Appends a (displacement, load) row
    pub fn push(&mut self, disp: f64, load: f64) {
        self.disp.push(disp);
        self.load.push(load);
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.disp.len()
    }

    /// Reads a JSON file containing the results
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let file = File::open(&path).map_err(|_| "file not found")?;
        let reader = BufReader::new(file);
        let results = serde_json::from_reader(reader).map_err(|_| "deserialize failed")?;
        Ok(results)
    }

    /// Writes a JSON file with the results
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
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }

    /// Draws the load-displacement curve and saves the figure
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn draw_and_save<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let mut curve = Curve::new();
        curve.set_marker_style("o");
        curve.draw(&self.disp, &self.load);
        let mut plot = Plot::new();
        plot.add(&curve)
            .grid_and_labels("max displacement magnitude", "load factor");
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        plot.save(&path)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::LoadDisplacement;
    use crate::base::DEFAULT_TEST_DIR;
    use russell_lab::vec_approx_eq;

    #[test]
    fn push_and_len_work() {
        let mut log = LoadDisplacement::new();
        assert_eq!(log.len(), 0);
        log.push(0.0, 0.0);
        log.push(0.01, 0.5);
        log.push(0.03, 1.0);
        assert_eq!(log.len(), 3);
        assert_eq!(log.load, &[0.0, 0.5, 1.0]);
        assert_eq!(log.disp, &[0.0, 0.01, 0.03]);
    }

    #[test]
    fn read_write_json_work() {
        let mut log = LoadDisplacement::new();
        log.push(0.0, 0.0);
        log.push(0.02, 1.0);
        let path = format!("{}/test_load_displacement.json", DEFAULT_TEST_DIR);
        log.write_json(&path).unwrap();
        let read = LoadDisplacement::read_json(&path).unwrap();
        assert_eq!(read.len(), 2);
        vec_approx_eq(&read.disp, &log.disp, 1e-15);
        vec_approx_eq(&read.load, &log.load, 1e-15);
    }

    #[test]
    fn derive_works() {
        let mut log = LoadDisplacement::new();
        log.push(0.0, 0.0);
        let clone = log.clone();
        assert_eq!(format!("{:?}", clone), format!("{:?}", log));
        let json = serde_json::to_string(&log).unwrap();
        let read: LoadDisplacement = serde_json::from_str(&json).unwrap();
        assert_eq!(read.len(), 1);
    }
}
