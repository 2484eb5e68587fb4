use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::models::ThemeMode;
use crate::services::generator_service::ThroughputPoint;
use crate::utils::{DashboardError, Result};

const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Background and bar colors for the chart
fn chart_palette(mode: ThemeMode) -> (RGBColor, RGBColor) {
    match mode {
        ThemeMode::Dark => (RGBColor(0x26, 0x26, 0x26), RGBColor(0x22, 0xd3, 0xee)),
        ThemeMode::Light => (RGBColor(0xf5, 0xf5, 0xf5), RGBColor(0x10, 0xb9, 0x81)),
    }
}

/// One block character per bar, scaled by bar height
pub fn sparkline(points: &[ThroughputPoint]) -> String {
    points
        .iter()
        .map(|p| {
            let level = ((p.height.clamp(0.0, 100.0) / 100.0) * SPARK_LEVELS.len() as f64).ceil();
            let idx = (level as usize).clamp(1, SPARK_LEVELS.len()) - 1;
            SPARK_LEVELS[idx]
        })
        .collect()
}

/// Render the throughput bars as an SVG document
///
/// The caption is optional because text layout needs a system font.
pub fn render_throughput_svg(
    points: &[ThroughputPoint],
    mode: ThemeMode,
    caption: Option<&str>,
    width: u32,
    height: u32,
) -> Result<String> {
    if points.is_empty() {
        return Err(DashboardError::Chart("No throughput data to draw".to_string()));
    }

    let (background, bar) = chart_palette(mode);
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (width, height)).into_drawing_area();
        root.fill(&background)
            .map_err(|e| DashboardError::Chart(format!("Failed to fill canvas: {}", e)))?;

        let mut builder = ChartBuilder::on(&root);
        builder.margin(12);
        if let Some(caption) = caption {
            builder.caption(caption, ("sans-serif", 20.0).into_font());
        }
        let mut chart = builder
            .build_cartesian_2d(0u32..points.len() as u32, 0f64..100f64)
            .map_err(|e| DashboardError::Chart(format!("Failed to build chart: {}", e)))?;

        chart
            .draw_series(points.iter().enumerate().map(|(i, p)| {
                let x = i as u32;
                Rectangle::new([(x, 0.0), (x + 1, p.height)], bar.filled())
            }))
            .map_err(|e| DashboardError::Chart(format!("Failed to draw bars: {}", e)))?;

        root.present()
            .map_err(|e| DashboardError::Chart(format!("Failed to finish chart: {}", e)))?;
    }
    Ok(svg)
}

/// Render the chart and write it to `path`
pub fn write_throughput_svg(
    path: &Path,
    points: &[ThroughputPoint],
    mode: ThemeMode,
    caption: &str,
) -> Result<()> {
    let svg = render_throughput_svg(points, mode, Some(caption), 960, 320)?;
    std::fs::write(path, svg)?;
    info!("Chart written to {}", path.display());
    Ok(())
}
