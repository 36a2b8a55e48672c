use super::{Nbc, Pbc};
use gemlab::mesh::{Edge, PointId};
use std::fmt;

/// Holds natural (Neumann) boundary conditions
///
/// The specified value is multiplied by the current load factor ℓ during the
/// load-stepping analysis (proportional loading). An optional function of ℓ
/// may be attached to override the proportional ramp.
pub struct Natural<'a> {
    /// Concentrated loads as (PointId, Pbc, value, optional function index)
    pub at_points: Vec<(PointId, Pbc, f64, Option<usize>)>,

    /// Distributed loads as (Edge, Nbc, value, optional function index)
    pub on_edges: Vec<(Edge, Nbc, f64, Option<usize>)>,

    /// Functions of the load factor ℓ multiplying the specified value
    pub functions: Vec<Box<dyn Fn(f64) -> f64 + 'a>>,
}

impl<'a> Natural<'a> {
    /// Allocates a new instance
    pub fn new() -> Self {
        Natural {
            at_points: Vec::new(),
            on_edges: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Sets concentrated loads at points
    pub fn points(&mut self, points: &[PointId], pbc: Pbc, value: f64) -> &mut Self {
        for point_id in points {
            self.at_points.push((*point_id, pbc, value, None));
        }
        self
    }

    /// Sets a distributed load on a single edge
    pub fn edge(&mut self, edge: &Edge, nbc: Nbc, value: f64) -> &mut Self {
        self.on_edges.push((edge.clone(), nbc, value, None));
        self
    }

    /// Sets distributed loads on edges
    pub fn edges(&mut self, edges: &[&Edge], nbc: Nbc, value: f64) -> &mut Self {
        for edge in edges {
            self.on_edges.push(((*edge).clone(), nbc, value, None));
        }
        self
    }

    /// Sets concentrated loads at points with a function of ℓ
    pub fn points_fn(&mut self, points: &[PointId], pbc: Pbc, value: f64, function: impl Fn(f64) -> f64 + 'a) -> &mut Self {
        self.functions.push(Box::new(function));
        let index = self.functions.len() - 1;
        for point_id in points {
            self.at_points.push((*point_id, pbc, value, Some(index)));
        }
        self
    }

    /// Sets distributed loads on edges with a function of ℓ
    pub fn edges_fn(&mut self, edges: &[&Edge], nbc: Nbc, value: f64, function: impl Fn(f64) -> f64 + 'a) -> &mut Self {
        self.functions.push(Box::new(function));
        let index = self.functions.len() - 1;
        for edge in edges {
            self.on_edges.push(((*edge).clone(), nbc, value, Some(index)));
        }
        self
    }
}

impl<'a> fmt::Display for Natural<'a> {
    /// Prints a formatted summary of the natural boundary conditions
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Concentrated boundary conditions\n").unwrap();
        write!(f, "================================\n").unwrap();
        for (point_id, pbc, value, _) in &self.at_points {
            write!(f, "{:?} : {:?} = {:?}\n", point_id, pbc, value).unwrap();
        }
        write!(f, "\nDistributed boundary conditions\n").unwrap();
        write!(f, "===============================\n").unwrap();
        for (edge, nbc, value, _) in &self.on_edges {
            write!(f, "{:?} : {:?} = {:?}\n", edge.points, nbc, value).unwrap();
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
