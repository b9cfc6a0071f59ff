use canteen_attendance::{MealSelection, MealToggle};
use canteen_shared::Result;
use canteen_user::{PreferenceInput, UserPreference};
use chrono::{DateTime, NaiveDate, Utc};

use crate::Store;

impl Store {
    /// Validates `input` and replaces the user's stored preference with it.
    ///
    /// On a validation error nothing is written.
    #[tracing::instrument(skip(self, input))]
    pub async fn upsert_preference(
        &self,
        user_id: &str,
        input: PreferenceInput,
    ) -> Result<UserPreference> {
        let preference = input.into_preference(user_id)?;

        let mut records = self.records.write().await;
        records
            .preferences
            .insert(user_id.to_owned(), preference.clone());

        tracing::info!(
            dietary_preference = %preference.dietary_preference,
            auto_opt_in = preference.auto_opt_in,
            "preference saved"
        );

        Ok(preference)
    }

    /// Records one meal toggle for (user, date), creating the day's selection
    /// if needed. Saving the same toggle twice leaves the same meals stored.
    pub async fn save_meal_toggle(
        &self,
        user_id: &str,
        date: NaiveDate,
        toggle: MealToggle,
    ) -> MealSelection {
        self.save_meal_toggle_at(user_id, date, toggle, Utc::now())
            .await
    }

    #[tracing::instrument(skip(self, toggle), fields(meal_type = %toggle.meal_type, attending = toggle.attending))]
    pub async fn save_meal_toggle_at(
        &self,
        user_id: &str,
        date: NaiveDate,
        toggle: MealToggle,
        now: DateTime<Utc>,
    ) -> MealSelection {
        let mut records = self.records.write().await;
        let selection = records
            .selections
            .entry((user_id.to_owned(), date))
            .or_insert_with(|| MealSelection::new(user_id, date, now));

        selection.apply(toggle, now);

        tracing::info!(meals = selection.meals.len(), "meal selection saved");

        selection.clone()
    }
}
