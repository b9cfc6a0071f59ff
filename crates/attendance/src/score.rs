use canteen_shared::MealType;

use crate::MealSelection;

/// Share of a user's recorded meal slots they confirmed as attending, as a
/// percentage capped at 100. Zero when nothing has been recorded yet.
pub fn attendance_score(selections: &[MealSelection]) -> u8 {
    if selections.is_empty() {
        return 0;
    }

    let attending: usize = selections.iter().map(MealSelection::attending_count).sum();
    let possible = selections.len() * MealType::SLOTS_PER_DAY;
    let score = (attending as f64 / possible as f64 * 100.0).round();

    score.min(100.0) as u8
}
