use anyhow::Result;
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use std::path::Path;

/// Maps a normalized value in [0, 1] onto a hot (black-red-yellow-white)
/// color ramp.
fn hot_color(heat: f64) -> RGBColor {
    let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0) as u8;
    RGBColor(
        channel(heat * 3.0),
        channel(heat * 3.0 - 1.0),
        channel(heat * 3.0 - 2.0),
    )
}

/// Renders a distance matrix as an SVG heatmap.
///
/// The axis extent is `atom_total + 0.5` so cell (i, j) is centered on the
/// 1-based atom indices. The drawing area is created and presented within
/// this call; no drawing state outlives it.
pub fn render_distance_map(path: &Path, matrix: &[Vec<f64>], atom_total: usize) -> Result<()> {
    let root = SVGBackend::new(path, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    if matrix.is_empty() {
        root.draw(&Text::new(
            "No atoms",
            (400, 400),
            ("sans-serif", 20).into_font().color(&BLACK),
        ))?;
        root.present()?;
        return Ok(());
    }

    let extent = atom_total as f64 + 0.5;
    let max_distance = matrix
        .iter()
        .flatten()
        .fold(0.0_f64, |max, &value| max.max(value))
        .max(f64::EPSILON);

    let mut chart = ChartBuilder::on(&root)
        .caption("Distance Map", ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.5..extent, 0.5..extent)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Atom index")
        .y_desc("Atom index")
        .draw()?;

    chart.draw_series(matrix.iter().enumerate().flat_map(|(i, row)| {
        row.iter().enumerate().map(move |(j, &distance)| {
            let heat = distance / max_distance;
            Rectangle::new(
                [
                    (j as f64 + 0.5, i as f64 + 0.5),
                    (j as f64 + 1.5, i as f64 + 1.5),
                ],
                hot_color(heat).filled(),
            )
        })
    }))?;

    root.present()?;
    Ok(())
}
