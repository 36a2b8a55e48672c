use fssim::prelude::*;
use fssim::StrError;
use plotpy::{Curve, Plot};

const NAME: &str = "clamped_beam_selfweight";

fn main() -> Result<(), StrError> {
    // read the load-displacement results written by the simulation
    let path = format!("{}/{}-load-displacement.json", DEFAULT_OUT_DIR, NAME);
    let log = LoadDisplacement::read_json(&path)?;

    // draw the displacement-load curve
    let mut curve = Curve::new();
    curve.set_marker_style("o").set_label("Qua8 mesh");
    curve.draw(&log.disp, &log.load);
    let mut plot = Plot::new();
    plot.set_title("Clamped beam under self-weight")
        .add(&curve)
        .grid_labels_legend("maximum vertical displacement magnitude", "load factor");
    plot.save(&format!("{}/{}-curve.svg", DEFAULT_OUT_DIR, NAME))?;
    Ok(())
}
