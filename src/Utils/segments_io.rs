use crate::curve::marching_squares::Segment;
use crate::curve::slots::Color;
use csv::Writer;
use std::fs::File;

/// Saves the extracted curve sets to a csv file, one row per segment.
pub fn save_segments_to_csv(
    filename: &str,
    curves: &[(Color, Vec<Segment>)],
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(filename)?;
    let mut writer = Writer::from_writer(file);

    // Write headers
    writer.write_record(["curve", "x1", "y1", "x2", "y2"])?;

    // Write data rows
    for (curve_index, (_, segments)) in curves.iter().enumerate() {
        for seg in segments {
            writer.write_record([
                curve_index.to_string(),
                seg.start.x.to_string(),
                seg.start.y.to_string(),
                seg.end.x.to_string(),
                seg.end.y.to_string(),
            ])?;
        }
    }

    writer.flush()?;
    Ok(())
}
