use serde::Serialize;

use super::Datum;

// Annulus geometry in a 200x200 viewBox.
const CENTER: f64 = 100.0;
const OUTER_RADIUS: f64 = 80.0;
const INNER_RADIUS: f64 = 50.0;

/// Slices start at 12 o'clock.
const START_ANGLE_DEG: f64 = -90.0;

/// One donut slice with its SVG annulus path.
#[derive(Clone, Debug, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
    /// Start angle in degrees, measured clockwise from the x-axis.
    pub start_angle: f64,
    /// Angular span in degrees.
    pub sweep: f64,
    /// Share of the total, formatted to one decimal.
    pub percent_label: String,
    /// SVG path for the annulus segment.
    pub path: String,
}

/// Lays slices out consecutively from -90°, each spanning
/// `value / total * 360` degrees. An empty series or a zero total yields no
/// slices; otherwise the sweeps sum to 360 within floating tolerance.
pub fn layout(data: &[Datum]) -> Vec<Slice> {
    let total: f64 = data.iter().map(|d| d.value).sum();
    if data.is_empty() || total <= 0.0 {
        return Vec::new();
    }

    let mut current = START_ANGLE_DEG;
    data.iter()
        .map(|d| {
            let percent = d.value / total * 100.0;
            let sweep = percent / 100.0 * 360.0;
            let start = current;
            current += sweep;

            Slice {
                label: d.label.clone(),
                value: d.value,
                start_angle: start,
                sweep,
                percent_label: format!("{percent:.1}"),
                path: annulus_path(start, start + sweep),
            }
        })
        .collect()
}

fn annulus_path(start_deg: f64, end_deg: f64) -> String {
    let start = start_deg.to_radians();
    let end = end_deg.to_radians();

    let (x1, y1) = point(OUTER_RADIUS, start);
    let (x2, y2) = point(OUTER_RADIUS, end);
    let (ix1, iy1) = point(INNER_RADIUS, start);
    let (ix2, iy2) = point(INNER_RADIUS, end);

    let large_arc = if end_deg - start_deg > 180.0 { 1 } else { 0 };

    format!(
        "M {x1} {y1} \
         A {OUTER_RADIUS} {OUTER_RADIUS} 0 {large_arc} 1 {x2} {y2} \
         L {ix2} {iy2} \
         A {INNER_RADIUS} {INNER_RADIUS} 0 {large_arc} 0 {ix1} {iy1} \
         Z"
    )
}

fn point(radius: f64, angle_rad: f64) -> (f64, f64) {
    (
        CENTER + radius * angle_rad.cos(),
        CENTER + radius * angle_rad.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweeps_sum_to_a_full_circle() {
        let slices = layout(&[
            Datum::new("a", 10.0),
            Datum::new("b", 30.0),
            Datum::new("c", 60.0),
        ]);
        let total_sweep: f64 = slices.iter().map(|s| s.sweep).sum();
        assert!((total_sweep - 360.0).abs() < 1e-9);
    }

    #[test]
    fn slices_are_consecutive_from_minus_ninety() {
        let slices = layout(&[Datum::new("a", 1.0), Datum::new("b", 1.0)]);
        assert_eq!(slices[0].start_angle, -90.0);
        assert_eq!(slices[1].start_angle, slices[0].start_angle + slices[0].sweep);
    }

    #[test]
    fn percent_labels_have_one_decimal() {
        let slices = layout(&[Datum::new("a", 1.0), Datum::new("b", 2.0)]);
        assert_eq!(slices[0].percent_label, "33.3");
        assert_eq!(slices[1].percent_label, "66.7");
    }

    #[test]
    fn zero_total_yields_no_slices() {
        assert!(layout(&[Datum::new("a", 0.0)]).is_empty());
        assert!(layout(&[]).is_empty());
    }

    #[test]
    fn majority_slice_sets_the_large_arc_flag() {
        let slices = layout(&[Datum::new("a", 3.0), Datum::new("b", 1.0)]);
        // 270° slice takes the long way round, 90° slice does not
        assert!(slices[0].path.contains(&format!(
            "A {OUTER_RADIUS} {OUTER_RADIUS} 0 1 1"
        )));
        assert!(slices[1].path.contains(&format!(
            "A {OUTER_RADIUS} {OUTER_RADIUS} 0 0 1"
        )));
    }
}
