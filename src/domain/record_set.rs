//! Per-stock index over a batch of records.
//!
//! Every record kind keys on `stock_name`; line observations also key on
//! `date`. A later record with an already-indexed key replaces the earlier
//! one here. Use [`validate_batch`](crate::domain::validation::validate_batch)
//! to surface those duplicates.

use crate::domain::heatmap::HeatmapData;
use crate::domain::lag::LagData;
use crate::domain::line::LineData;
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet, HashMap};

#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    lines: BTreeMap<String, BTreeMap<NaiveDate, LineData>>,
    lags: HashMap<String, LagData>,
    heatmaps: HashMap<String, HeatmapData>,
}

impl RecordSet {
    pub fn new(lines: Vec<LineData>, lags: Vec<LagData>, heatmaps: Vec<HeatmapData>) -> Self {
        let mut set = Self::default();
        for line in lines {
            set.insert_line(line);
        }
        for lag in lags {
            set.insert_lag(lag);
        }
        for heatmap in heatmaps {
            set.insert_heatmap(heatmap);
        }
        set
    }

    pub fn insert_line(&mut self, line: LineData) {
        self.lines
            .entry(line.stock_name.clone())
            .or_default()
            .insert(line.date, line);
    }

    pub fn insert_lag(&mut self, lag: LagData) {
        self.lags.insert(lag.stock_name.clone(), lag);
    }

    pub fn insert_heatmap(&mut self, heatmap: HeatmapData) {
        self.heatmaps.insert(heatmap.stock_name.clone(), heatmap);
    }

    /// Sorted union of stock names across all record kinds.
    pub fn stock_names(&self) -> Vec<String> {
        let names: BTreeSet<&String> = self
            .lines
            .keys()
            .chain(self.lags.keys())
            .chain(self.heatmaps.keys())
            .collect();
        names.into_iter().cloned().collect()
    }

    /// Line observations for a stock in date order.
    pub fn lines_for(&self, stock_name: &str) -> Vec<&LineData> {
        self.lines
            .get(stock_name)
            .map(|by_date| by_date.values().collect())
            .unwrap_or_default()
    }

    pub fn line_on(&self, stock_name: &str, date: NaiveDate) -> Option<&LineData> {
        self.lines.get(stock_name).and_then(|by_date| by_date.get(&date))
    }

    pub fn lag_for(&self, stock_name: &str) -> Option<&LagData> {
        self.lags.get(stock_name)
    }

    pub fn heatmap_for(&self, stock_name: &str) -> Option<&HeatmapData> {
        self.heatmaps.get(stock_name)
    }

    /// Sorted unique dates across every stock's line observations.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let unique: BTreeSet<NaiveDate> = self
            .lines
            .values()
            .flat_map(|by_date| by_date.keys().copied())
            .collect();
        unique.into_iter().collect()
    }

    pub fn line_count(&self) -> usize {
        self.lines.values().map(BTreeMap::len).sum()
    }
}
