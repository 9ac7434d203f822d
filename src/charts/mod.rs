//! Chart-geometry formatters: they map aggregated series into renderable
//! geometry (bar heights, donut arc paths, line polylines, map marker
//! positions). The presentation layer consumes these as-is; nothing here
//! touches pixels.

pub mod bar;
pub mod donut;
pub mod line;
pub mod map;

use serde::Serialize;

/// A labeled value, the common input shape for every formatter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Datum {
    pub label: String,
    pub value: f64,
}

impl Datum {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl From<(String, i64)> for Datum {
    fn from((label, value): (String, i64)) -> Self {
        Self {
            label,
            value: value as f64,
        }
    }
}
