use super::Dof;
use gemlab::mesh::{Edge, PointId};
use std::fmt;

/// Holds essential (Dirichlet) boundary conditions
///
/// The specified value is constant by default. An optional function of the
/// load factor ℓ may be attached to ramp the prescribed value during the
/// load-stepping analysis.
pub struct Essential<'a> {
    /// All conditions as (PointId, DOF, value, optional function index)
    pub all: Vec<(PointId, Dof, f64, Option<usize>)>,

    /// Functions of the load factor ℓ multiplying the specified value
    pub functions: Vec<Box<dyn Fn(f64) -> f64 + 'a>>,
}

impl<'a> Essential<'a> {
    /// Allocates a new instance
    pub fn new() -> Self {
        Essential {
            all: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Sets essential boundary conditions at points
    pub fn points(&mut self, points: &[PointId], dof: Dof, value: f64) -> &mut Self {
        for point_id in points {
            self.all.push((*point_id, dof, value, None));
        }
        self
    }

    /// Sets essential boundary conditions on edges
    pub fn edges(&mut self, edges: &[&Edge], dof: Dof, value: f64) -> &mut Self {
        for edge in edges {
            for point_id in &edge.points {
                self.all.push((*point_id, dof, value, None));
            }
        }
        self
    }

    /// Sets essential boundary conditions at points with a function of ℓ
    pub fn points_fn(&mut self, points: &[PointId], dof: Dof, value: f64, function: impl Fn(f64) -> f64 + 'a) -> &mut Self {
        self.functions.push(Box::new(function));
        let index = self.functions.len() - 1;
        for point_id in points {
            self.all.push((*point_id, dof, value, Some(index)));
        }
        self
    }

    /// Sets essential boundary conditions on edges with a function of ℓ
    pub fn edges_fn(&mut self, edges: &[&Edge], dof: Dof, value: f64, function: impl Fn(f64) -> f64 + 'a) -> &mut Self {
        self.functions.push(Box::new(function));
        let index = self.functions.len() - 1;
        for edge in edges {
            for point_id in &edge.points {
                self.all.push((*point_id, dof, value, Some(index)));
            }
        }
        self
    }

    /// Calculates the prescribed value of the i-th condition at a load factor
    pub fn value(&self, i: usize, ell: f64) -> f64 {
        let (.., value, f_index) = self.all[i];
        match f_index {
            Some(index) => value * (self.functions[index])(ell),
            None => value,
        }
    }

    /// Tells whether at least one condition prescribes a non-zero value
    pub fn has_non_zero(&self) -> bool {
        self.all.iter().any(|(.., value, f_index)| *value != 0.0 || f_index.is_some())
    }
}

impl<'a> fmt::Display for Essential<'a> {
    /// Prints a formatted summary of the essential boundary conditions
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Essential boundary conditions\n").unwrap();
        write!(f, "=============================\n").unwrap();
        let mut entries: Vec<_> = self.all.iter().collect();
        entries.sort_by_key(|(point_id, dof, ..)| (*point_id, *dof));
        for (point_id, dof, value, f_index) in entries {
            match f_index {
                Some(_) => write!(f, "{:?} : {:?} = {:?} × f(ℓ)\n", point_id, dof, value).unwrap(),
                None => write!(f, "{:?} : {:?} = {:?}\n", point_id, dof, value).unwrap(),
            }
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
