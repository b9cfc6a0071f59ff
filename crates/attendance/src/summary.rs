use std::collections::HashMap;

use canteen_shared::MealType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::MealSelection;

/// Attending toggle counts per meal slot.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MealTotals {
    pub breakfast: u32,
    pub lunch: u32,
    pub snack: u32,
}

impl MealTotals {
    pub fn add(&mut self, meal_type: MealType, count: u32) {
        match meal_type {
            MealType::Breakfast => self.breakfast += count,
            MealType::Lunch => self.lunch += count,
            MealType::Snack => self.snack += count,
        }
    }

    pub fn total(&self) -> u32 {
        self.breakfast + self.lunch + self.snack
    }
}

impl std::ops::AddAssign for MealTotals {
    fn add_assign(&mut self, rhs: Self) {
        self.breakfast += rhs.breakfast;
        self.lunch += rhs.lunch;
        self.snack += rhs.snack;
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub date: NaiveDate,
    pub totals: MealTotals,
    pub drop_off_rate: f64,
}

/// Fraction of possible commitments not confirmed as attending.
///
/// Every user is assumed to have `MealType::SLOTS_PER_DAY` slots regardless
/// of what the day's menu actually serves. The result is clamped to `[0, 1]`
/// and is `1` when there are no users.
pub fn drop_off_rate(attending: u32, total_users: usize) -> f64 {
    if total_users == 0 {
        return 1.0;
    }

    let possible = (total_users * MealType::SLOTS_PER_DAY) as f64;
    (1.0 - f64::from(attending) / possible).clamp(0.0, 1.0)
}

/// Per-date attendance for `dates` across all `selections`.
pub fn summarize<'a>(
    dates: &[NaiveDate],
    selections: impl IntoIterator<Item = &'a MealSelection>,
    total_users: usize,
) -> Vec<AttendanceSummary> {
    let mut by_date: HashMap<NaiveDate, MealTotals> = HashMap::new();

    for selection in selections {
        let totals = by_date.entry(selection.date).or_default();
        for toggle in selection.attending() {
            totals.add(toggle.meal_type, 1);
        }
    }

    dates
        .iter()
        .map(|date| {
            let totals = by_date.get(date).copied().unwrap_or_default();
            AttendanceSummary {
                date: *date,
                totals,
                drop_off_rate: drop_off_rate(totals.total(), total_users),
            }
        })
        .collect()
}
