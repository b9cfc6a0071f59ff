use canteen_attendance::{AttendanceSummary, MealSelection, Overview};
use canteen_menu::MenuDay;
use canteen_shared::{Result, today, validate_window, window_dates};
use canteen_user::{UserPreference, UserProfile};
use chrono::NaiveDate;

use crate::Store;

impl Store {
    pub async fn user(&self, id: &str) -> Option<UserProfile> {
        let records = self.records.read().await;
        records.users.iter().find(|u| u.id == id).cloned()
    }

    pub async fn user_by_email(&self, email: &str) -> Option<UserProfile> {
        let records = self.records.read().await;
        records.users.iter().find(|u| u.has_email(email)).cloned()
    }

    /// Menu for `days` consecutive dates starting today.
    pub fn list_menu(&self, days: u32) -> Result<Vec<MenuDay>> {
        self.list_menu_from(today(), days)
    }

    pub fn list_menu_from(&self, start: NaiveDate, days: u32) -> Result<Vec<MenuDay>> {
        canteen_menu::list_menu(start, days)
    }

    /// All selections of one user, oldest date first.
    pub async fn list_selections_for_user(&self, user_id: &str) -> Vec<MealSelection> {
        let records = self.records.read().await;
        records
            .selections
            .range((user_id.to_owned(), NaiveDate::MIN)..=(user_id.to_owned(), NaiveDate::MAX))
            .map(|(_, selection)| selection.clone())
            .collect()
    }

    pub async fn selection(&self, user_id: &str, date: NaiveDate) -> Option<MealSelection> {
        let records = self.records.read().await;
        records
            .selections
            .get(&(user_id.to_owned(), date))
            .cloned()
    }

    /// Every stored selection, in no particular order.
    pub async fn list_all_selections(&self) -> Vec<MealSelection> {
        let records = self.records.read().await;
        records.selections.values().cloned().collect()
    }

    /// The stored preference, if the user has one yet. Never creates a record.
    pub async fn preference(&self, user_id: &str) -> Option<UserPreference> {
        let records = self.records.read().await;
        records.preferences.get(user_id).cloned()
    }

    /// Read-or-initialize: returns the stored preference, storing
    /// [`UserPreference::default_for`] first when the user has none.
    #[tracing::instrument(skip(self))]
    pub async fn preference_or_init(&self, user_id: &str) -> UserPreference {
        let mut records = self.records.write().await;
        records
            .preferences
            .entry(user_id.to_owned())
            .or_insert_with(|| {
                tracing::debug!("initializing default preference");
                UserPreference::default_for(user_id)
            })
            .clone()
    }

    /// Attendance per date for `days` consecutive dates starting today.
    pub async fn attendance_summary(&self, days: u32) -> Result<Vec<AttendanceSummary>> {
        self.attendance_summary_from(today(), days).await
    }

    pub async fn attendance_summary_from(
        &self,
        start: NaiveDate,
        days: u32,
    ) -> Result<Vec<AttendanceSummary>> {
        let dates = window_dates(start, validate_window(days)?);
        let records = self.records.read().await;

        Ok(canteen_attendance::summarize(
            &dates,
            records.selections.values(),
            records.users.len(),
        ))
    }

    /// Admin overview for `days` consecutive dates starting at `start`,
    /// computed from a single consistent read of the store.
    #[tracing::instrument(skip(self))]
    pub async fn overview_from(&self, start: NaiveDate, days: u32) -> Result<Overview> {
        let dates = window_dates(start, validate_window(days)?);
        let records = self.records.read().await;

        let summary = canteen_attendance::summarize(
            &dates,
            records.selections.values(),
            records.users.len(),
        );
        let heatmap = canteen_attendance::heatmap(&dates, records.selections.values());

        Ok(Overview::new(summary, heatmap))
    }
}
