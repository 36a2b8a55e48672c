use fssim::prelude::*;
use fssim::StrError;
use gemlab::mesh::{At, Block, Features};
use gemlab::shapes::GeoKind;
use gemlab::util::any_x;

const NAME: &str = "clamped_beam_selfweight";

// geometry
const LX: f64 = 1.0; // beam length
const LY: f64 = 0.04; // beam height

// material (Saint-Venant-Kirchhoff)
const YOUNG: f64 = 2e5;
const POISSON: f64 = 0.3;

// self-weight ρ g at full load
const RHO_G: f64 = 50e3;

// number of load increments
const N_INCREMENT: usize = 30;

fn main() -> Result<(), StrError> {
    // mesh
    let mut block = Block::new(&[[0.0, 0.0], [LX, 0.0], [LX, LY], [0.0, LY]])?;
    block.set_ndiv(&[25, 2])?;
    let mesh = block.subdivide(GeoKind::Qua8)?;

    // features
    let features = Features::new(&mesh, false);
    let left = features.search_edges(At::X(0.0), any_x)?;
    let right = features.search_edges(At::X(LX), any_x)?;

    // parameters
    let p1 = ParamSolid {
        density: 1.0,
        stress_strain: StressStrain::SaintVenantKirchhoff {
            young: YOUNG,
            poisson: POISSON,
        },
        ngauss: None,
    };
    let base = FemBase::new(&mesh, [(1, p1)])?;

    // essential boundary conditions: clamped left edge and
    // symmetry condition on the right edge
    let mut essential = Essential::new();
    essential
        .edges(&left, Dof::Ux, 0.0)
        .edges(&left, Dof::Uy, 0.0)
        .edges(&right, Dof::Ux, 0.0);

    // natural boundary conditions: none (the load is the self-weight)
    let natural = Natural::new();

    // configuration
    let mut config = Config::new(&mesh);
    config
        .set_gravity(RHO_G)
        .set_load_schedule(LoadSchedule::linspace(N_INCREMENT)?)
        .set_tol_rr_abs(1e-8)
        .set_tol_rr_rel(1e-8)
        .set_monitored_dof(Dof::Uy)
        .set_verbose_iterations(true);

    // FEM state and output files
    let mut state = FemState::new(&mesh, &base, &config)?;
    let mut file_io = FileIo::new();
    file_io.activate(&mesh, &base, NAME, None)?;

    // solution
    let mut solver = SolverQuasistatic::new(&mesh, &base, &config, &essential, &natural)?;
    solver.solve(&mut state, &mut file_io)?;

    // ParaView files (one VTU per converged increment plus the PVD index)
    for index in &file_io.indices {
        let snapshot = PostProc::read_state(&file_io, *index)?;
        file_io.write_vtu(&mesh, &base, &snapshot, *index)?;
    }
    file_io.write_pvd()?;

    // load-displacement results
    solver
        .log
        .write_json(&format!("{}/{}-load-displacement.json", DEFAULT_OUT_DIR, NAME))?;
    solver.log.draw_and_save(&format!("{}/{}.svg", DEFAULT_OUT_DIR, NAME))?;

    // message
    println!("max |uy| at full load = {:.6e}", solver.log.disp.last().unwrap());
    Ok(())
}
