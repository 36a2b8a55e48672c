use super::FemBase;
use crate::base::Natural;
use crate::StrError;
use russell_lab::Vector;

/// Assists in calculating a single concentrated load
pub struct BcConcentrated {
    /// Equation corresponding to the concentrated load
    pub eq: usize,

    /// Specified load value at full load (ℓ = 1)
    value: f64,

    /// Index of the function of ℓ overriding the proportional ramp
    f_index: Option<usize>,
}

/// Implements an array of BcConcentrated
pub struct BcConcentratedArray<'a> {
    /// Natural boundary conditions
    natural: &'a Natural<'a>,

    /// All values
    pub all: Vec<BcConcentrated>,
}

impl<'a> BcConcentratedArray<'a> {
    /// Allocates a new instance
    pub fn new(base: &FemBase, natural: &'a Natural<'a>) -> Result<Self, StrError> {
        let mut all = Vec::with_capacity(natural.at_points.len());
        for (point_id, pbc, value, f_index) in &natural.at_points {
            all.push(BcConcentrated {
                eq: base.equations.eq(*point_id, pbc.dof())?,
                value: *value,
                f_index: *f_index,
            });
        }
        Ok(BcConcentratedArray { natural, all })
    }

    /// Adds the concentrated load values at a given load factor to the external forces vector
    ///
    /// The specified value is multiplied by ℓ (proportional loading) unless a
    /// function of ℓ was attached to the condition.
    pub fn add_to_ff_ext(&self, ff_ext: &mut Vector, ell: f64) {
        for c in &self.all {
            let scale = match c.f_index {
                Some(index) => (self.natural.functions[index])(ell),
                None => ell,
            };
            ff_ext[c.eq] += c.value * scale;
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
