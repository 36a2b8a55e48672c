use russell_tensor::Mandel;

/// Holds the geometry idealization of the problem
///
/// In 2D, the plane-strain hypothesis is adopted: the out-of-plane stretch is
/// one (F₃₃ = 1), the out-of-plane Green-Lagrange strain vanishes, and the
/// out-of-plane stress is generally non-zero.
#[derive(Clone, Copy, Debug)]
pub struct Idealization {
    /// 2D instead of 3D
    pub two_dim: bool,

    /// Out-of-plane thickness in 2D
    pub thickness: f64,
}

impl Idealization {
    /// Allocates a new instance
    pub fn new(ndim: usize) -> Self {
        Idealization {
            two_dim: ndim == 2,
            thickness: 1.0,
        }
    }

    /// Returns the Mandel representation associated with this idealization
    pub fn mandel(&self) -> Mandel {
        if self.two_dim {
            Mandel::Symmetric2D
        } else {
            Mandel::Symmetric
        }
    }

    /// Returns the space dimension
    pub fn ndim(&self) -> usize {
        if self.two_dim {
            2
        } else {
            3
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Idealization;
    use russell_tensor::Mandel;

    #[test]
    fn new_and_methods_work() {
        let ideal = Idealization::new(2);
        assert_eq!(ideal.two_dim, true);
        assert_eq!(ideal.thickness, 1.0);
        assert_eq!(ideal.mandel(), Mandel::Symmetric2D);
        assert_eq!(ideal.ndim(), 2);

        let ideal = Idealization::new(3);
        assert_eq!(ideal.two_dim, false);
        assert_eq!(ideal.mandel(), Mandel::Symmetric);
        assert_eq!(ideal.ndim(), 3);

        let clone = ideal.clone();
        assert_eq!(format!("{:?}", clone), format!("{:?}", ideal));
    }
}
