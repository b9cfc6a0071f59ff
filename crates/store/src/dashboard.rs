use canteen_attendance::{MealSelection, attendance_score};
use canteen_menu::{MenuDay, filter_by_preference};
use canteen_shared::{Result, not_found};
use canteen_user::{UserPreference, UserProfile};
use chrono::NaiveDate;
use serde::Serialize;

use crate::Store;

#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDay {
    #[serde(flatten)]
    pub day: MenuDay,
    pub commitment: Option<MealSelection>,
    /// Ids of the day's items that suit the user's dietary preference.
    pub suggested: Vec<String>,
}

/// Everything an employee sees on landing: upcoming menu paired with their
/// commitments, their preference and how often they actually turn up.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub user: UserProfile,
    pub days: Vec<DashboardDay>,
    pub preference: UserPreference,
    pub attendance_score: u8,
}

impl Store {
    #[tracing::instrument(skip(self))]
    pub async fn dashboard_from(
        &self,
        user_id: &str,
        start: NaiveDate,
        days: u32,
    ) -> Result<Dashboard> {
        let menu = self.list_menu_from(start, days)?;
        let Some(user) = self.user(user_id).await else {
            not_found!("user {user_id}");
        };

        let preference = self.preference_or_init(user_id).await;
        let selections = self.list_selections_for_user(user_id).await;

        let days = menu
            .into_iter()
            .map(|day| {
                let commitment = find_commitment(&selections, day.date);
                let suggested = filter_by_preference(&day.items, preference.dietary_preference)
                    .into_iter()
                    .map(|item| item.id.clone())
                    .collect();

                DashboardDay {
                    day,
                    commitment,
                    suggested,
                }
            })
            .collect();

        Ok(Dashboard {
            user,
            days,
            attendance_score: attendance_score(&selections),
            preference,
        })
    }
}

fn find_commitment(selections: &[MealSelection], date: NaiveDate) -> Option<MealSelection> {
    selections.iter().find(|s| s.date == date).cloned()
}

#[cfg(test)]
mod tests {
    use canteen_attendance::MealToggle;
    use canteen_shared::{DietaryPreference, MealType};
    use canteen_user::PreferenceInput;

    use super::*;
    use crate::record::fixtures;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, n).unwrap()
    }

    #[tokio::test]
    async fn pairs_menu_days_with_commitments() {
        let store = fixtures::store(&["u1"]);
        store
            .save_meal_toggle("u1", day(2), MealToggle::new(MealType::Lunch, true))
            .await;

        let dashboard = store.dashboard_from("u1", day(1), 3).await.unwrap();

        assert_eq!(dashboard.days.len(), 3);
        assert!(dashboard.days[0].commitment.is_none());
        assert_eq!(
            dashboard.days[1].commitment.as_ref().map(|c| c.date),
            Some(day(2))
        );
        assert_eq!(dashboard.attendance_score, 33);
        assert!(dashboard.preference.auto_opt_in);
    }

    #[tokio::test]
    async fn suggestions_follow_the_dietary_preference() {
        let store = fixtures::store(&["u1"]);
        store
            .upsert_preference(
                "u1",
                PreferenceInput {
                    dietary_preference: "vegetarian".to_owned(),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        let dashboard = store.dashboard_from("u1", day(1), 2).await.unwrap();

        assert_eq!(
            dashboard.preference.dietary_preference,
            DietaryPreference::Vegetarian
        );
        for entry in &dashboard.days {
            assert!(!entry.suggested.is_empty());
            for id in &entry.suggested {
                let item = entry.day.items.iter().find(|i| &i.id == id).unwrap();
                assert!(item.is_vegetarian);
            }
        }
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let store = fixtures::store(&["u1"]);
        let err = store.dashboard_from("ghost", day(1), 1).await.unwrap_err();

        assert!(matches!(err, canteen_shared::Error::NotFound(_)));
    }

    #[tokio::test]
    async fn serializes_days_flat() {
        let store = fixtures::store(&["u1"]);
        let dashboard = store.dashboard_from("u1", day(1), 1).await.unwrap();
        let json = serde_json::to_value(&dashboard).unwrap();

        assert_eq!(json["days"][0]["date"], "2024-01-01");
        assert!(json["days"][0]["items"].is_array());
        assert!(json["days"][0]["commitment"].is_null());
        assert!(json["attendanceScore"].is_number());
        assert!(json["user"].get("passwordHash").is_none());
    }
}
