use serde::Serialize;

/// Bounds of the fixed linear projection, tuned for the Kerala service
/// region. Not a real map projection; acceptable only for the depicted
/// longitude/latitude range.
const LNG_MIN: f64 = 75.0;
const LNG_SPAN: f64 = 2.0;
const LAT_MAX: f64 = 11.5;
const LAT_SPAN: f64 = 3.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MarkerKind {
    Warehouse,
    Retailer,
    Delivery,
}

/// A marker positioned in percent coordinates on the schematic region map.
#[derive(Clone, Debug, Serialize)]
pub struct Marker {
    pub label: String,
    pub kind: MarkerKind,
    /// 0..=100 from the west edge.
    pub x_pct: f64,
    /// 0..=100 from the north edge.
    pub y_pct: f64,
}

/// Projects a coordinate onto the bounded rectangle. Points outside the
/// region bounds land outside 0..=100 and are the caller's problem, exactly
/// like markers that scroll off a fixed-extent map.
pub fn place(label: impl Into<String>, kind: MarkerKind, latitude: f64, longitude: f64) -> Marker {
    Marker {
        label: label.into(),
        kind,
        x_pct: (longitude - LNG_MIN) / LNG_SPAN * 100.0,
        y_pct: (LAT_MAX - latitude) / LAT_SPAN * 100.0,
    }
}
