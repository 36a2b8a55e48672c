use super::{max_abs_displacement, BcConcentratedArray, BcDistributedArray, BcPrescribedArray};
use super::{ConvergenceControl, Elements, FemBase, FemState, FileIo, LinearSystem};
use crate::base::{Config, Essential, Natural};
use crate::util::LoadDisplacement;
use crate::StrError;
use gemlab::mesh::Mesh;
use russell_lab::vec_add;

/// Implements the quasi-static solver with load stepping
///
/// The driver walks through the load schedule and performs exactly one
/// Newton-Raphson solve attempt per increment. On convergence, a snapshot is
/// written (tagged by the load factor) and a (max displacement, load) row is
/// appended to the load-displacement log. On failure, the run is fatal: the
/// current state is flushed to disk and the error propagates. There is no
/// retry, no adaptive step refinement, and no early stopping.
pub struct SolverQuasistatic<'a> {
    /// Holds configuration parameters
    config: &'a Config<'a>,

    /// Holds the material parameters, cell attributes, and equation numbers
    base: &'a FemBase,

    /// Holds a collection of concentrated loads
    pub bc_concentrated: BcConcentratedArray<'a>,

    /// Holds a collection of boundary integration data
    pub bc_distributed: BcDistributedArray<'a>,

    /// Holds a collection of prescribed (primary) values
    pub bc_prescribed: BcPrescribedArray<'a>,

    /// Holds a collection of elements
    pub elements: Elements<'a>,

    /// Holds variables to solve the global linear system
    pub linear_system: LinearSystem<'a>,

    /// Holds the load-displacement log, one row per converged increment
    pub log: LoadDisplacement,
}

impl<'a> SolverQuasistatic<'a> {
    /// Allocates a new instance
    pub fn new(
        mesh: &'a Mesh,
        base: &'a FemBase,
        config: &'a Config,
        essential: &'a Essential,
        natural: &'a Natural,
    ) -> Result<Self, StrError> {
        if let Some(msg) = config.validate() {
            println!("ERROR: {}", msg);
            return Err("cannot allocate simulation because config.validate() failed");
        }
        let bc_concentrated = BcConcentratedArray::new(base, natural)?;
        let bc_distributed = BcDistributedArray::new(mesh, base, config, natural)?;
        let bc_prescribed = BcPrescribedArray::new(base, essential)?;
        let elements = Elements::new(mesh, base, config)?;
        let linear_system = LinearSystem::new(base, config, &bc_prescribed, &elements)?;
        Ok(SolverQuasistatic {
            config,
            base,
            bc_concentrated,
            bc_distributed,
            bc_prescribed,
            elements,
            linear_system,
            log: LoadDisplacement::new(),
        })
    }

    /// Walks through the load schedule and solves the nonlinear problem at each increment
    pub fn solve(&mut self, state: &mut FemState, file_io: &mut FileIo) -> Result<(), StrError> {
        // helper macro to save the state before returning an error
        macro_rules! run {
            ($e:expr) => {
                match $e {
                    Ok(val) => val,
                    Err(err) => {
                        match file_io.write_state(state) {
                            Ok(_) => (),
                            Err(e) => println!("ERROR-ON-ERROR: cannot write state due to: {}", e),
                        }
                        match file_io.write_self() {
                            Ok(_) => (),
                            Err(e) => println!("ERROR-ON-ERROR: cannot write summary due to: {}", e),
                        }
                        return Err(err);
                    }
                }
            };
        }

        // accessors
        let config = self.config;
        let ff_int = &mut self.linear_system.ff_int;
        let ff_ext = &mut self.linear_system.ff_ext;
        let rr = &mut self.linear_system.rr;
        let kk = &mut self.linear_system.kk;
        let mdu = &mut self.linear_system.mdu;
        let triangular = self.linear_system.sym.triangular();

        // array to ignore prescribed equations when building the reduced system
        let ignore = &self.bc_prescribed.flags;

        // collect the unknown equations
        let n_equation = self.linear_system.n_equation;
        let unknown_equations: Vec<_> = (0..n_equation).filter(|&eq| !ignore[eq]).collect();

        // initialize internal variables at the reference configuration
        self.elements.initialize_internal_values(state)?;

        // first output: the reference (unloaded) configuration
        file_io.write_state(state)?;
        self.log.push(0.0, 0.0);

        // allocate convergence control
        let mut control = ConvergenceControl::new(config, n_equation);
        control.print_header();

        // load stepping
        let factors = config.schedule.factors().to_vec();
        for increment in 1..factors.len() {
            // update load factor
            let ell_new = factors[increment];
            state.dell = ell_new - state.ell;
            state.ell = ell_new;

            // reset cumulated primary values
            state.duu.fill(0.0);

            // set prescribed U and ΔU at the new load factor
            self.bc_prescribed.apply(&mut state.duu, &mut state.uu, state.ell);
            run!(self.elements.update_secondary_values(state));

            // message
            control.reset();
            control.print_step(increment, state.ell, state.dell);

            // Newton-Raphson iterations
            let mut converged = false;
            for iteration in 0..config.n_max_iterations {
                // clear vectors
                ff_int.fill(0.0);
                ff_ext.fill(0.0);

                // calculate all element local vectors and add them to the global vectors
                run!(self.elements.assemble_f_int(ff_int, state, ignore));
                run!(self.elements.assemble_f_ext(ff_ext, state.ell, ignore));

                // calculate all boundary local vectors and add them to the global vectors
                run!(self.bc_distributed.assemble_f_ext(ff_ext, state.ell, ignore));

                // add concentrated loads to the external forces vector
                self.bc_concentrated.add_to_ff_ext(ff_ext, state.ell);

                // calculate the residual vector
                vec_add(rr, 1.0, ff_int, -1.0, ff_ext).unwrap();

                // check convergence on the residual
                run!(control.analyze_rr(iteration, rr));
                if control.converged() {
                    control.print_iteration();
                    converged = true;
                    break;
                }

                // compute Jacobian matrix
                if iteration == 0 || !config.constant_tangent {
                    // reset pointer in K matrix == clear all values
                    kk.reset().unwrap();

                    // add all local Jacobian matrices to K
                    let kk_coo = kk.get_coo_mut().unwrap();
                    run!(self.elements.assemble_jacobians(kk_coo, state, ignore, triangular));

                    // augment K with ones on the diagonal of the prescribed equations
                    for eq in &self.bc_prescribed.equations {
                        kk.put(*eq, *eq, 1.0).unwrap();
                    }

                    // factorize K matrix
                    run!(self
                        .linear_system
                        .solver
                        .actual
                        .factorize(kk, Some(config.lin_sol_params)));
                }

                // solve linear system K mdu = R
                run!(self
                    .linear_system
                    .solver
                    .actual
                    .solve(mdu, &kk, &rr, config.verbose_lin_sys_solve));

                // check convergence on the corrective displacement
                run!(control.analyze_mdu(iteration, mdu));
                control.print_iteration();
                if control.converged() {
                    converged = true;
                    break;
                }

                // update U and ΔU vectors
                for i in &unknown_equations {
                    state.uu[*i] -= mdu[*i];
                    state.duu[*i] -= mdu[*i];
                }

                // backup/restore secondary values
                if iteration == 0 {
                    self.elements.backup_secondary_values(state);
                } else {
                    self.elements.restore_secondary_values(state);
                }

                // update secondary values
                run!(self.elements.update_secondary_values(state));
            }

            // the driver has no retry or fallback policy
            if !converged {
                run!(Result::<(), StrError>::Err("Newton-Raphson did not converge"));
            }

            // persist a snapshot tagged by the load factor
            file_io.write_state(state)?;

            // append (max displacement, load) to the log
            let value = max_abs_displacement(self.base, state, config.monitored_dof);
            self.log.push(value, state.ell);
        }
        control.print_footer();

        // write the summary file
        file_io.write_self()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SolverQuasistatic;
    use crate::base::{Config, Dof, Essential, LoadSchedule, Natural, Nbc, ParamSolid, Pbc};
    use crate::fem::{FemBase, FemState, FileIo};
    use gemlab::mesh::{Edge, Samples};
    use gemlab::shapes::GeoKind;

    #[test]
    fn new_captures_errors() {
        let mesh = Samples::one_hex8();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();
        let essential = Essential::new();
        let natural = Natural::new();

        // error due to config.validate
        let mut config = Config::new(&mesh);
        config.set_gravity(-1.0);
        assert_eq!(
            SolverQuasistatic::new(&mesh, &base, &config, &essential, &natural).err(),
            Some("cannot allocate simulation because config.validate() failed")
        );
        let config = Config::new(&mesh);

        // error due to prescribed values
        let mut essential = Essential::new();
        essential.points(&[123], Dof::Ux, 0.0);
        assert_eq!(
            SolverQuasistatic::new(&mesh, &base, &config, &essential, &natural).err(),
            Some("cannot find equation number because PointId is out-of-bounds")
        );
        let essential = Essential::new();

        // error due to concentrated loads
        let mut natural = Natural::new();
        natural.points(&[100], Pbc::Fx, 0.0);
        assert_eq!(
            SolverQuasistatic::new(&mesh, &base, &config, &essential, &natural).err(),
            Some("cannot find equation number because PointId is out-of-bounds")
        );

        // error due to boundaries
        let mut natural = Natural::new();
        let edge = Edge {
            kind: GeoKind::Lin2,
            points: vec![4, 5],
        };
        natural.edge(&edge, Nbc::Qn, 0.0);
        assert_eq!(
            SolverQuasistatic::new(&mesh, &base, &config, &essential, &natural).err(),
            Some("Qn natural boundary condition is not available for 3D edge")
        );
    }

    #[test]
    fn solve_works_prescribed_stretch() {
        // stretch a unit square by prescribing all displacements:
        // u = (α ℓ x, 0); the solver must converge immediately at every
        // increment and record the ramped maximum displacement
        let mesh = Samples::one_qua4();
        let p1 = ParamSolid::sample_saint_venant_kirchhoff();
        let base = FemBase::new(&mesh, [(1, p1)]).unwrap();

        const ALPHA: f64 = 0.1;
        let mut essential = Essential::new();
        for m in 0..mesh.points.len() {
            let x = mesh.points[m].coords[0];
            essential.points_fn(&[m], Dof::Ux, ALPHA * x, |ell| ell);
            essential.points(&[m], Dof::Uy, 0.0);
        }
        let natural = Natural::new();

        let mut config = Config::new(&mesh);
        config
            .set_load_schedule(LoadSchedule::linspace(4).unwrap())
            .set_monitored_dof(Dof::Ux)
            .set_verbose_steps(false);

        let mut state = FemState::new(&mesh, &base, &config).unwrap();
        let mut file_io = FileIo::new();
        let mut solver = SolverQuasistatic::new(&mesh, &base, &config, &essential, &natural).unwrap();
        solver.solve(&mut state, &mut file_io).unwrap();

        // the log has (increments + 1) rows with the first row equal to (0, 0)
        assert_eq!(solver.log.len(), 5);
        assert_eq!(solver.log.load[0], 0.0);
        assert_eq!(solver.log.disp[0], 0.0);
        assert_eq!(solver.log.load, &[0.0, 0.25, 0.5, 0.75, 1.0]);
        for i in 0..5 {
            let correct = ALPHA * solver.log.load[i];
            assert!(f64::abs(solver.log.disp[i] - correct) < 1e-14);
        }

        // the deformation gradient matches the homogeneous stretch
        let lam = 1.0 + ALPHA;
        for local in &state.gauss[0].all {
            assert!(f64::abs(local.deformation_gradient.get(0, 0) - lam) < 1e-14);
            assert!(f64::abs(local.deformation_gradient.get(1, 1) - 1.0) < 1e-14);
        }
    }
}
