#![allow(non_snake_case)]
use RustedProjCurve::Utils::logger::init_logging;
use RustedProjCurve::Utils::plots::plot_segments;
use RustedProjCurve::Utils::segments_io::save_segments_to_csv;
use RustedProjCurve::curve::marching_squares::ExtractionSettings;
use RustedProjCurve::curve::slots::CurveSet;
use RustedProjCurve::curve::view::ViewState;
use log::{error, info};
use simplelog::LevelFilter;
use std::time::Instant;

fn main() {
    if let Err(e) = init_logging(LevelFilter::Info) {
        eprintln!("logger init failed: {}", e);
    }

    // formula from the command line, unit circle by default
    let formula = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "x^2 + y^2 - 1".to_string());

    let mut curves = CurveSet::new();
    let slot = curves.add_slot();
    match curves.update_formula(slot, &formula) {
        Ok(degree) => {
            info!(
                "homogenized to {} of degree {}",
                curves.expression(slot).unwrap(),
                degree
            );
        }
        Err(e) => {
            error!("could not parse {:?}: {}", formula, e);
            return;
        }
    }

    let view = ViewState::new();
    let settings = ExtractionSettings::default();

    let begin = Instant::now();
    let extracted = curves.extract_all(&view, &settings);
    let elapsed = begin.elapsed();
    let n_segments: usize = extracted.iter().map(|(_, segs)| segs.len()).sum();
    info!("extracted {} segments in {:?}", n_segments, elapsed);

    plot_segments("curve.png", view.domain(), &extracted);
    info!("saved curve.png");
    match save_segments_to_csv("curve_segments.csv", &extracted) {
        Ok(()) => info!("saved curve_segments.csv"),
        Err(e) => error!("csv export failed: {}", e),
    }
}
