use std::error::Error;
use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::config::PlotConfig;
use crate::core::table::Trajectories;

const ENVELOPE_GREY: RGBColor = RGBColor(128, 128, 128);

/// Render state populations against time, with the drive envelope on a
/// secondary y-axis, and write the figure to `out_path`.
///
/// One line per state column, colored by palette index and labeled
/// `State |i⟩`. The envelope is a single dashed grey series on the twin
/// axis; its legend entry sits in the same series-label box as the states.
pub fn render(
    traj: &Trajectories,
    cfg: &PlotConfig,
    out_path: &Path,
) -> Result<(), Box<dyn Error>> {
    let pops = traj.populations();
    let (x_min, x_max) = padded_span(&traj.time);
    let (env_min, env_max) = padded_span(&traj.envelope);
    let y_max = pops
        .iter()
        .flatten()
        .copied()
        .fold(1.0f64, f64::max)
        * 1.05;

    let root = BitMapBackend::new(out_path, (cfg.figure.width_px, cfg.figure.height_px))
        .into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .right_y_label_area_size(80)
        .build_cartesian_2d(x_min..x_max, 0.0f64..y_max)?
        .set_secondary_coord(x_min..x_max, env_min..env_max);

    chart
        .configure_mesh()
        .x_desc("Time (μs)")
        .y_desc("|Ψ|²")
        .draw()?;
    chart
        .configure_secondary_axes()
        .y_desc("Envelope intensity")
        .draw()?;

    for (idx, pop) in pops.iter().enumerate() {
        let style = Palette99::pick(idx).stroke_width(cfg.style.stroke_width);
        let points = traj.time.iter().copied().zip(pop.iter().copied());
        chart
            .draw_series(LineSeries::new(points, style))?
            .label(format!("State |{idx}⟩"))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], style));
    }

    let env_style = ENVELOPE_GREY
        .mix(cfg.style.envelope_opacity)
        .stroke_width(cfg.style.stroke_width);
    let env_points = traj.time.iter().copied().zip(traj.envelope.iter().copied());
    chart
        .draw_secondary_series(DashedLineSeries::new(env_points, 10, 6, env_style))?
        .label("Envelope function")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 24, y)], env_style));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!(path = %out_path.display(), states = traj.n_states(), "wrote figure");
    Ok(())
}

/// Min/max of a non-empty slice, widened when the span is degenerate so the
/// chart always has a drawable range (single-row tables, flat envelopes).
fn padded_span(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() > f64::EPSILON {
        (min, max)
    } else {
        (min - 0.5, max + 0.5)
    }
}
