use super::FemBase;
use crate::base::{assemble_vector, Config, Natural, Nbc};
use crate::StrError;
use gemlab::integ::{self, Gauss};
use gemlab::mesh::Mesh;
use gemlab::shapes::{GeoKind, Scratchpad};
use russell_lab::Vector;

/// Assists in the integration of a distributed load over the boundary of an element
///
/// This data structure corresponds to a single Natural (Neumann) boundary
/// condition. The load is integrated over the reference configuration (dead
/// load) and contributes to the external forces vector, scaled by the current
/// load factor ℓ.
pub struct BcDistributed<'a> {
    /// Global configuration
    config: &'a Config<'a>,

    /// Scratchpad to perform numerical integration
    pad: Scratchpad,

    /// Integration (Gauss) points
    gauss: Gauss,

    /// Local contribution to the external forces vector
    f_ext: Vector,

    /// Local-to-global mapping
    ///
    /// (n_local_eq)
    local_to_global: Vec<usize>,

    /// Natural boundary condition
    nbc: Nbc,

    /// Specified load value at full load (ℓ = 1)
    value: f64,

    /// Function of ℓ overriding the proportional ramp (if not None)
    function: Option<&'a Box<dyn Fn(f64) -> f64 + 'a>>,
}

/// Implements an array of BcDistributed
pub struct BcDistributedArray<'a> {
    /// All values
    pub all: Vec<BcDistributed<'a>>,
}

impl<'a> BcDistributed<'a> {
    /// Allocates a new instance
    ///
    /// Note: `Qn` is not allowed for 3D edges
    pub fn new(
        mesh: &Mesh,
        base: &FemBase,
        config: &'a Config,
        kind: GeoKind,
        points: &[usize],
        nbc: Nbc,
        value: f64,
        function: Option<&'a Box<dyn Fn(f64) -> f64 + 'a>>,
    ) -> Result<Self, StrError> {
        // check
        let ndim = mesh.ndim;
        if ndim == 3 && kind.ndim() == 1 {
            if let Nbc::Qn = nbc {
                return Err("Qn natural boundary condition is not available for 3D edge");
            }
        }

        // pad and integration points
        let mut pad = Scratchpad::new(ndim, kind)?;
        mesh.set_pad(&mut pad, &points);
        let gauss = Gauss::new(pad.kind);

        // local-to-global mapping
        let (ndim, nnode) = pad.xxt.dims();
        let dofs = nbc.dof_equation_pairs(ndim, nnode);
        let n_local_eq = 1 + dofs.last().unwrap().last().unwrap().1;
        let mut local_to_global = vec![0; n_local_eq];
        for m in 0..nnode {
            for (dof, local) in &dofs[m] {
                local_to_global[*local] = base.equations.eq(points[m], *dof)?;
            }
        }

        // done
        Ok(BcDistributed {
            config,
            pad,
            gauss,
            f_ext: Vector::new(n_local_eq),
            local_to_global,
            nbc,
            value,
            function,
        })
    }

    /// Calculates the local contribution to the external forces vector at a load factor
    pub fn calc_f_ext(&mut self, ell: f64) -> Result<(), StrError> {
        let (ndim, _) = self.pad.xxt.dims();
        let res = &mut self.f_ext;
        let mut args = integ::CommonArgs::new(&mut self.pad, &self.gauss);
        args.alpha = self.config.ideal.thickness;
        let value = match self.function {
            Some(f) => self.value * (f)(ell),
            None => self.value * ell,
        };
        match self.nbc {
            Nbc::Qn => integ::vec_02_nv_bry(res, &mut args, |v, _, un, _| {
                for i in 0..ndim {
                    v[i] = value * un[i];
                }
                Ok(())
            }),
            Nbc::Qx => integ::vec_02_nv(res, &mut args, |v, _, _| {
                // the normal vector is irrelevant
                for i in 0..ndim {
                    v[i] = 0.0;
                }
                v[0] = value;
                Ok(())
            }),
            Nbc::Qy => integ::vec_02_nv(res, &mut args, |v, _, _| {
                for i in 0..ndim {
                    v[i] = 0.0;
                }
                v[1] = value;
                Ok(())
            }),
            Nbc::Qz => integ::vec_02_nv(res, &mut args, |v, _, _| {
                for i in 0..ndim {
                    v[i] = 0.0;
                }
                v[2] = value;
                Ok(())
            }),
        }
    }

    /// Returns the number of local equations
    pub fn n_local_eq(&self) -> usize {
        self.local_to_global.len()
    }
}

impl<'a> BcDistributedArray<'a> {
    /// Allocates a new instance
    pub fn new(mesh: &Mesh, base: &FemBase, config: &'a Config, natural: &'a Natural<'a>) -> Result<Self, StrError> {
        let mut all = Vec::with_capacity(natural.on_edges.len());
        for (edge, nbc, value, f_index) in &natural.on_edges {
            let function = match f_index {
                Some(index) => Some(&natural.functions[*index]),
                None => None,
            };
            all.push(BcDistributed::new(
                mesh,
                base,
                config,
                edge.kind,
                &edge.points,
                *nbc,
                *value,
                function,
            )?);
        }
        Ok(BcDistributedArray { all })
    }

    /// Calculates all local external force vectors and adds them to the global vector
    ///
    /// `ignore` (n_equation) holds the equation numbers to be ignored in the
    /// assembly process (the prescribed equations of the reduced system).
    pub fn assemble_f_ext(&mut self, ff_ext: &mut Vector, ell: f64, ignore: &[bool]) -> Result<(), StrError> {
        for e in &mut self.all {
            e.calc_f_ext(ell)?;
            assemble_vector(ff_ext, &e.f_ext, &e.local_to_global, ignore);
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
