use std::collections::BTreeMap;

use plotters::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Renders the simulated exposure totals as a PNG histogram. Empty input
/// writes nothing.
pub fn write_histogram_png(output_path: &str, results: &[f64]) -> Result<(), HistogramError> {
    if results.is_empty() {
        return Ok(());
    }

    let min_value = results.iter().cloned().fold(f64::INFINITY, f64::min);
    let max_value = results.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let range = max_value - min_value;
    let bin_width = if range < f64::EPSILON {
        1.0
    } else {
        range / (results.len() as f64).sqrt()
    };

    let counts = bucket_counts(results, min_value, bin_width);
    let max_count = *counts.values().max().unwrap_or(&1);
    let max_bucket = counts.keys().next_back().copied().unwrap_or(0) + 1;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Simulated Risk Exposure", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_bucket, 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Total cost exposure")
        .y_desc("Frequency")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_label_formatter(&|bucket| format!("{:.0}", min_value + *bucket as f64 * bin_width))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(204, 85, 30);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(
            counts
                .iter()
                .map(|(bucket, count)| Rectangle::new([(*bucket, 0), (*bucket + 1, *count)], bar_style)),
        )
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}

fn bucket_counts(results: &[f64], min_value: f64, bin_width: f64) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for value in results {
        let bucket = ((*value - min_value) / bin_width).floor() as i32;
        *counts.entry(bucket).or_insert(0usize) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_counts_start_at_the_minimum() {
        let counts = bucket_counts(&[10.0, 11.0, 14.0, 20.0], 10.0, 5.0);
        assert_eq!(counts.get(&0), Some(&3));
        assert_eq!(counts.get(&2), Some(&1));
        assert_eq!(counts.values().sum::<usize>(), 4);
    }

    #[test]
    fn empty_results_write_nothing() {
        let temp = assert_fs::TempDir::new().unwrap();
        let path = temp.path().join("empty.png");
        write_histogram_png(path.to_str().unwrap(), &[]).unwrap();
        assert!(!path.exists());
    }
}
