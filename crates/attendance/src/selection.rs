use std::str::FromStr;

use canteen_shared::{FieldErrors, MealType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// How concurrent writes to the same (user, date, meal type) are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergePolicy {
    /// The most recent toggle replaces the stored one. No version check.
    LastWriteWins,
}

pub const MERGE_POLICY: MergePolicy = MergePolicy::LastWriteWins;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealToggle {
    pub meal_type: MealType,
    pub attending: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_request: Option<String>,
}

impl MealToggle {
    pub fn new(meal_type: MealType, attending: bool) -> Self {
        Self {
            meal_type,
            attending,
            special_request: None,
        }
    }

    pub fn with_request(mut self, request: impl Into<String>) -> Self {
        self.special_request = Some(request.into());
        self
    }
}

/// One user's commitments for one date, at most one toggle per meal type.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MealSelection {
    pub user_id: String,
    pub date: NaiveDate,
    pub meals: Vec<MealToggle>,
    pub confirmed_at: DateTime<Utc>,
}

impl MealSelection {
    pub fn new(user_id: impl Into<String>, date: NaiveDate, now: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.into(),
            date,
            meals: Vec::new(),
            confirmed_at: now,
        }
    }

    /// Records a toggle, replacing the one for the same meal type if any,
    /// and stamps the selection as confirmed at `now`.
    pub fn apply(&mut self, toggle: MealToggle, now: DateTime<Utc>) {
        match MERGE_POLICY {
            MergePolicy::LastWriteWins => {
                match self
                    .meals
                    .iter_mut()
                    .find(|m| m.meal_type == toggle.meal_type)
                {
                    Some(existing) => {
                        existing.attending = toggle.attending;
                        existing.special_request = toggle.special_request;
                    }
                    None => self.meals.push(toggle),
                }
            }
        }

        self.confirmed_at = now;
    }

    pub fn toggle_for(&self, meal_type: MealType) -> Option<&MealToggle> {
        self.meals.iter().find(|m| m.meal_type == meal_type)
    }

    pub fn attending(&self) -> impl Iterator<Item = &MealToggle> {
        self.meals.iter().filter(|m| m.attending)
    }

    pub fn attending_count(&self) -> usize {
        self.attending().count()
    }
}

/// Toggle payload as received from a client.
#[derive(Deserialize, Serialize, Validate, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SelectionInput {
    pub date: String,
    pub meal_type: String,
    pub attending: bool,
    #[validate(length(max = 140, message = "Must be at most 140 characters"))]
    pub special_request: Option<String>,
}

impl SelectionInput {
    /// Validates the payload into the calendar date and toggle to save.
    ///
    /// `special_request` is trimmed and dropped when blank.
    pub fn into_toggle(self) -> canteen_shared::Result<(NaiveDate, MealToggle)> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => FieldErrors::from_validation(&e, &[("special_request", "specialRequest")]),
        };

        let date = match canteen_shared::parse_date(&self.date) {
            Ok(date) => Some(date),
            Err(_) => {
                errors.insert("date", "Must be an ISO calendar date (YYYY-MM-DD)");
                None
            }
        };

        let meal_type = match MealType::from_str(self.meal_type.trim()) {
            Ok(meal_type) => Some(meal_type),
            Err(_) => {
                errors.insert("mealType", "Must be one of breakfast, lunch, snack");
                None
            }
        };

        let (Some(date), Some(meal_type), true) = (date, meal_type, errors.is_empty()) else {
            return Err(errors.into());
        };

        Ok((
            date,
            MealToggle {
                meal_type,
                attending: self.attending,
                special_request: self
                    .special_request
                    .map(|r| r.trim().to_owned())
                    .filter(|r| !r.is_empty()),
            },
        ))
    }
}
