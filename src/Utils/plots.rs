use crate::curve::marching_squares::{Domain, Segment};
use crate::curve::slots::Color;

/// Draws the extracted curve sets into a png image, one line series per
/// curve in its slot color.
pub fn plot_segments(filename: &str, domain: Domain, curves: &[(Color, Vec<Segment>)]) {
    use plotters::prelude::*;
    let root_area = BitMapBackend::new(filename, (800, 600)).into_drawing_area();
    root_area.fill(&WHITE).unwrap();

    // Create a chart builder
    let mut chart = ChartBuilder::on(&root_area)
        .caption("projective curves", ("sans-serif", 50))
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(domain.x_min..domain.x_max, domain.y_min..domain.y_max)
        .unwrap();

    // Configure the mesh
    chart.configure_mesh().x_desc("x").y_desc("y").draw().unwrap();

    // Each segment is drawn as its own tiny line series; curves are not
    // connected paths, just the segment soup the extractor produces
    for (color, segments) in curves {
        let style = RGBColor(color.r, color.g, color.b).stroke_width(2);
        for seg in segments {
            chart
                .draw_series(LineSeries::new(
                    vec![(seg.start.x, seg.start.y), (seg.end.x, seg.end.y)],
                    style,
                ))
                .unwrap();
        }
    }
}
