use super::ParamSolid;
use crate::StrError;
use gemlab::mesh::{Cell, CellAttribute};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Holds the association between cell attributes and solid parameters
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Attributes {
    all: HashMap<CellAttribute, ParamSolid>,
}

impl Attributes {
    /// Allocates a new instance from an array of (attribute, parameters) pairs
    pub fn from<const N: usize>(arr: [(CellAttribute, ParamSolid); N]) -> Self {
        Attributes {
            all: HashMap::from(arr),
        }
    }

    /// Returns the parameters corresponding to a cell
    pub fn get(&self, cell: &Cell) -> Result<&ParamSolid, StrError> {
        self.all
            .get(&cell.attribute)
            .ok_or("cannot find CellAttribute in Attributes map")
    }

    /// Returns the (optional) number of integration points of an attribute
    pub fn ngauss(&self, attribute: CellAttribute) -> Result<Option<usize>, StrError> {
        let param = self
            .all
            .get(&attribute)
            .ok_or("cannot find CellAttribute in Attributes map")?;
        Ok(param.ngauss)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Attributes;
    use crate::base::ParamSolid;
    use gemlab::mesh::Samples;

    #[test]
    fn from_and_get_work() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let amap = Attributes::from([(1, p1)]);
        let param = amap.get(&mesh.cells[0]).unwrap();
        assert_eq!(param.density, 1.0);
        assert_eq!(amap.ngauss(1).unwrap(), None);
    }

    #[test]
    fn get_captures_errors() {
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let amap = Attributes::from([(2, p1)]);
        assert_eq!(
            amap.get(&mesh.cells[0]).err(),
            Some("cannot find CellAttribute in Attributes map")
        );
        assert_eq!(amap.ngauss(1).err(), Some("cannot find CellAttribute in Attributes map"));
    }

    #[test]
    fn derive_works() {
        let p1 = ParamSolid::sample_neo_hookean();
        let amap = Attributes::from([(1, p1)]);
        let clone = amap.clone();
        let json = serde_json::to_string(&clone).unwrap();
        let read: Attributes = serde_json::from_str(&json).unwrap();
        assert_eq!(read.ngauss(1).unwrap(), None);
    }
}
