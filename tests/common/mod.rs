#![allow(dead_code)]

use chrono::NaiveDate;
pub use stocksent::domain::heatmap::HeatmapData;
pub use stocksent::domain::lag::{CorrelationData, LagData};
pub use stocksent::domain::line::LineData;
use std::io::Write;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn aapl_line() -> LineData {
    LineData::new("AAPL", date(2023, 1, 3), 0.42, 0.012, -0.004, 0.009, 0.031)
}

pub fn aapl_lag() -> LagData {
    LagData::new("AAPL", 0.67, 2)
}

pub fn aapl_heatmap() -> HeatmapData {
    HeatmapData::from_values("AAPL", [0.10, 0.35, 0.67, 0.22, -0.05])
}

pub fn aapl_correlation() -> CorrelationData {
    CorrelationData::new("AAPL", 0.67, 2)
}

pub fn make_line(stock: &str, date_str: &str, sent_score: f64) -> LineData {
    LineData::new(
        stock,
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap(),
        sent_score,
        0.01,
        0.015,
        0.02,
        0.05,
    )
}

/// Write `content` to a temp file whose name ends in `suffix`.
pub fn write_temp(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
