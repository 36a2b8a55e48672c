use super::Dof;
use crate::StrError;
use gemlab::mesh::{Mesh, PointId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Holds all DOF numbers (equation numbers)
///
/// Every point of the mesh carries the displacement DOFs corresponding to the
/// space dimension. The equations are numbered point by point with the DOFs
/// sorted at each point.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Equations {
    /// Holds the DOF-to-equation maps (one map per point)
    ///
    /// (npoint)
    pub all: Vec<HashMap<Dof, usize>>,

    /// Holds the total number of equations (total number of DOFs)
    pub n_equation: usize,
}

impl Equations {
    /// Allocates a new instance
    pub fn new(mesh: &Mesh) -> Self {
        let dofs = Dof::displacement(mesh.ndim);
        let mut all = vec![HashMap::new(); mesh.points.len()];
        let mut count = 0;
        for point in &mesh.points {
            for dof in dofs {
                all[point.id].insert(*dof, count);
                count += 1;
            }
        }
        Equations { all, n_equation: count }
    }

    /// Returns the equation number of a (PointId, DOF) pair
    pub fn eq(&self, point_id: PointId, dof: Dof) -> Result<usize, StrError> {
        if point_id >= self.all.len() {
            return Err("cannot find equation number because PointId is out-of-bounds");
        }
        let eq = self.all[point_id]
            .get(&dof)
            .ok_or("cannot find equation number corresponding to (PointId,DOF)")?;
        Ok(*eq)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Equations;
    use crate::base::Dof;
    use gemlab::mesh::Samples;

    #[test]
    fn new_works_2d() {
        let mesh = Samples::one_qua4();
        let eqs = Equations::new(&mesh);
        assert_eq!(eqs.n_equation, 8);
        assert_eq!(eqs.eq(0, Dof::Ux).unwrap(), 0);
        assert_eq!(eqs.eq(0, Dof::Uy).unwrap(), 1);
        assert_eq!(eqs.eq(3, Dof::Ux).unwrap(), 6);
        assert_eq!(eqs.eq(3, Dof::Uy).unwrap(), 7);
    }

    #[test]
    fn new_works_3d() {
        let mesh = Samples::one_hex8();
        let eqs = Equations::new(&mesh);
        assert_eq!(eqs.n_equation, 24);
        assert_eq!(eqs.eq(7, Dof::Uz).unwrap(), 23);
    }

    #[test]
    fn eq_captures_errors() {
        let mesh = Samples::one_hex8();
        let eqs = Equations::new(&mesh);
        assert_eq!(
            eqs.eq(100, Dof::Ux).err(),
            Some("cannot find equation number because PointId is out-of-bounds")
        );
        let mesh = Samples::one_qua4();
        let eqs = Equations::new(&mesh);
        assert_eq!(
            eqs.eq(0, Dof::Uz).err(),
            Some("cannot find equation number corresponding to (PointId,DOF)")
        );
    }

    #[test]
    fn derive_works() {
        let mesh = Samples::one_qua4();
        let eqs = Equations::new(&mesh);
        let clone = eqs.clone();
        let json = serde_json::to_string(&clone).unwrap();
        let read: Equations = serde_json::from_str(&json).unwrap();
        assert_eq!(read.n_equation, eqs.n_equation);
        assert_eq!(read.eq(2, Dof::Uy).unwrap(), eqs.eq(2, Dof::Uy).unwrap());
    }
}
