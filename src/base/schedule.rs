use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Holds the schedule of load factors for the quasi-static analysis
///
/// The schedule is an ordered sequence of load factors ℓ starting at zero,
/// ending at one, and strictly increasing in between. The solver performs one
/// Newton-Raphson solve per increment, i.e., per pair of consecutive factors.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoadSchedule {
    factors: Vec<f64>,
}

impl LoadSchedule {
    /// Allocates a new instance from a given sequence of load factors
    ///
    /// The sequence must start at 0.0, end at 1.0, and be strictly increasing.
    pub fn new(factors: &[f64]) -> Result<Self, StrError> {
        if factors.len() < 2 {
            return Err("the load schedule requires at least two factors");
        }
        if factors[0] != 0.0 {
            return Err("the first load factor must be equal to 0.0");
        }
        if *factors.last().unwrap() != 1.0 {
            return Err("the last load factor must be equal to 1.0");
        }
        for i in 1..factors.len() {
            if factors[i] <= factors[i - 1] {
                return Err("the load factors must be strictly increasing");
            }
        }
        Ok(LoadSchedule {
            factors: factors.to_vec(),
        })
    }

    /// Allocates a new instance with n_increment equal increments from 0.0 to 1.0
    pub fn linspace(n_increment: usize) -> Result<Self, StrError> {
        if n_increment < 1 {
            return Err("the number of increments must be at least 1");
        }
        let n = n_increment;
        let factors: Vec<f64> = (0..(n + 1)).map(|i| (i as f64) / (n as f64)).collect();
        Ok(LoadSchedule { factors })
    }

    /// Returns the number of increments (number of factors minus one)
    pub fn n_increment(&self) -> usize {
        self.factors.len() - 1
    }

    /// Returns an access to the load factors
    pub fn factors(&self) -> &[f64] {
        &self.factors
    }
}

impl fmt::Display for LoadSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Load schedule\n").unwrap();
        write!(f, "=============\n").unwrap();
        write!(f, "n_increment = {}\n", self.n_increment()).unwrap();
        write!(f, "factors = {:?}\n", self.factors).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
