use gemlab::mesh::{Cell, Mesh, Point};
use gemlab::shapes::GeoKind;

/// Holds sample meshes for testing
pub struct SampleMeshes {}

impl SampleMeshes {
    /// Returns a mesh with two Qua4 cells representing a short beam
    ///
    /// ```text
    /// 3--------4--------5
    /// |        |        |     [#] indicates cell id
    /// |  [0]   |  [1]   |     (#) indicates attribute
    /// |  (1)   |  (1)   |
    /// 0--------1--------2
    /// 0.0     1.0      2.0
    /// ```
    #[rustfmt::skip]
    pub fn beam_two_qua4() -> Mesh {
        Mesh {
            ndim: 2,
            points: vec![
                Point { id: 0, marker: 0, coords: vec![0.0, 0.0] },
                Point { id: 1, marker: 0, coords: vec![1.0, 0.0] },
                Point { id: 2, marker: 0, coords: vec![2.0, 0.0] },
                Point { id: 3, marker: 0, coords: vec![0.0, 1.0] },
                Point { id: 4, marker: 0, coords: vec![1.0, 1.0] },
                Point { id: 5, marker: 0, coords: vec![2.0, 1.0] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Qua4, points: vec![0, 1, 4, 3] },
                Cell { id: 1, attribute: 1, kind: GeoKind::Qua4, points: vec![1, 2, 5, 4] },
            ],
        }
    }

    /// Returns a mesh with one Qua4 cell stretched horizontally
    ///
    /// ```text
    /// 3----------------2
    /// |                |      [#] indicates cell id
    /// |      [0]       |      (#) indicates attribute
    /// |      (1)       |
    /// 0----------------1
    /// 0.0             2.0    (height 0.5)
    /// ```
    #[rustfmt::skip]
    pub fn one_qua4_rectangle() -> Mesh {
        Mesh {
            ndim: 2,
            points: vec![
                Point { id: 0, marker: 0, coords: vec![0.0, 0.0] },
                Point { id: 1, marker: 0, coords: vec![2.0, 0.0] },
                Point { id: 2, marker: 0, coords: vec![2.0, 0.5] },
                Point { id: 3, marker: 0, coords: vec![0.0, 0.5] },
            ],
            cells: vec![
                Cell { id: 0, attribute: 1, kind: GeoKind::Qua4, points: vec![0, 1, 2, 3] },
            ],
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
