use serde::Serialize;

use super::Datum;

/// One bar, with its height as a 0..=1 fraction of the tallest bar.
#[derive(Clone, Debug, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub height_fraction: f64,
}

/// Scales each value against the maximum of the series.
///
/// Zero-safe: an all-zero (or empty) series produces zero-height bars
/// rather than dividing by a zero maximum.
pub fn layout(data: &[Datum]) -> Vec<Bar> {
    let max = data.iter().map(|d| d.value).fold(0.0_f64, f64::max);

    data.iter()
        .map(|d| Bar {
            label: d.label.clone(),
            value: d.value,
            height_fraction: if max > 0.0 { d.value / max } else { 0.0 },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallest_bar_fills_the_band() {
        let bars = layout(&[Datum::new("a", 25.0), Datum::new("b", 100.0)]);
        assert_eq!(bars[0].height_fraction, 0.25);
        assert_eq!(bars[1].height_fraction, 1.0);
    }

    #[test]
    fn all_zero_series_degrades_to_flat_bars() {
        let bars = layout(&[Datum::new("a", 0.0), Datum::new("b", 0.0)]);
        assert!(bars.iter().all(|b| b.height_fraction == 0.0));
    }

    #[test]
    fn empty_input_yields_no_bars() {
        assert!(layout(&[]).is_empty());
    }
}
