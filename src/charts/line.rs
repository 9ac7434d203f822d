use serde::Serialize;

use super::Datum;

/// Vertical band the series occupies: y runs from 100 (bottom, minimum) up
/// to 20 (top, maximum), leaving headroom above the chart.
const BAND_HEIGHT: f64 = 80.0;

/// Mid-band position used when every value in the series is equal.
const FLAT_Y: f64 = 60.0;

#[derive(Clone, Debug, Serialize)]
pub struct Point {
    pub label: String,
    pub value: f64,
    /// 0..=100 across the viewBox.
    pub x: f64,
    /// 0..=100 down the viewBox; smaller is higher.
    pub y: f64,
}

/// A polyline in a 100x100 viewBox plus the closed area path under it.
#[derive(Clone, Debug, Serialize)]
pub struct LineChart {
    pub points: Vec<Point>,
    pub path: String,
    pub area_path: String,
}

/// Normalizes values into the vertical band: `y = 100 - (v - min) / (max -
/// min) * 80`. A flat series (max == min) is special-cased to a mid-band
/// horizontal line instead of dividing by zero. Returns `None` for an empty
/// series.
pub fn layout(data: &[Datum]) -> Option<LineChart> {
    if data.is_empty() {
        return None;
    }

    let min = data.iter().map(|d| d.value).fold(f64::INFINITY, f64::min);
    let max = data
        .iter()
        .map(|d| d.value)
        .fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    let last_index = data.len() - 1;
    let points: Vec<Point> = data
        .iter()
        .enumerate()
        .map(|(i, d)| {
            let x = if last_index == 0 {
                0.0
            } else {
                i as f64 / last_index as f64 * 100.0
            };
            let y = if range > 0.0 {
                100.0 - (d.value - min) / range * BAND_HEIGHT
            } else {
                FLAT_Y
            };
            Point {
                label: d.label.clone(),
                value: d.value,
                x,
                y,
            }
        })
        .collect();

    let path = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let command = if i == 0 { 'M' } else { 'L' };
            format!("{command} {} {}", p.x, p.y)
        })
        .collect::<Vec<_>>()
        .join(" ");

    let last_x = points[last_index].x;
    let area_path = format!("{path} L {last_x} 100 L 0 100 Z");

    Some(LineChart {
        points,
        path,
        area_path,
    })
}
