use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{AttendanceSummary, MealSelection, MealTotals};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OverviewTotals {
    pub breakfast: u32,
    pub lunch: u32,
    pub snack: u32,
    pub average_drop_off: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub count: u32,
}

/// Admin view of a window: per-day summary, window totals and the
/// commitment heatmap.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub summary: Vec<AttendanceSummary>,
    pub totals: OverviewTotals,
    pub selection_heatmap: Vec<HeatmapCell>,
}

impl Overview {
    pub fn new(summary: Vec<AttendanceSummary>, selection_heatmap: Vec<HeatmapCell>) -> Self {
        let mut meals = MealTotals::default();
        let mut drop_off = 0.0;

        for day in &summary {
            meals += day.totals;
            drop_off += day.drop_off_rate;
        }

        let average_drop_off = if summary.is_empty() {
            0.0
        } else {
            round2(drop_off / summary.len() as f64)
        };

        Self {
            totals: OverviewTotals {
                breakfast: meals.breakfast,
                lunch: meals.lunch,
                snack: meals.snack,
                average_drop_off,
            },
            summary,
            selection_heatmap,
        }
    }
}

/// Attending toggles per date, across all users, for each of `dates`.
pub fn heatmap<'a>(
    dates: &[NaiveDate],
    selections: impl IntoIterator<Item = &'a MealSelection>,
) -> Vec<HeatmapCell> {
    let mut counts: HashMap<NaiveDate, u32> = HashMap::new();
    for selection in selections {
        *counts.entry(selection.date).or_default() += selection.attending_count() as u32;
    }

    dates
        .iter()
        .map(|date| HeatmapCell {
            date: *date,
            count: counts.get(date).copied().unwrap_or(0),
        })
        .collect()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
