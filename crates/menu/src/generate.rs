use canteen_shared::MealType;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::VariantArray;

use crate::catalog::{self, Dish};

/// Dishes offered per meal slot each day.
pub const ITEMS_PER_SLOT: usize = 2;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub meal_type: MealType,
    pub title: String,
    pub description: String,
    pub calorie_count: u16,
    pub is_vegetarian: bool,
    pub tags: Vec<String>,
}

impl MenuItem {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MenuDay {
    pub date: NaiveDate,
    pub items: Vec<MenuItem>,
}

impl MenuDay {
    pub fn items_for(&self, meal_type: MealType) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(move |i| i.meal_type == meal_type)
    }
}

/// Builds the menu for one date.
///
/// The same date always yields the same items: each slot rotates through its
/// catalog by the day number, pairing dishes half a catalog apart.
pub fn generate_day(date: NaiveDate) -> MenuDay {
    let day = date.num_days_from_ce();
    let mut items = Vec::with_capacity(MealType::VARIANTS.len() * ITEMS_PER_SLOT);

    for meal_type in MealType::VARIANTS {
        let dishes = catalog::dishes(*meal_type);
        let len = dishes.len() as i32;
        let stride = (len / ITEMS_PER_SLOT as i32).max(1);

        for n in 0..ITEMS_PER_SLOT {
            let index = (day + stride * n as i32).rem_euclid(len) as usize;
            items.push(to_item(date, *meal_type, n, &dishes[index]));
        }
    }

    MenuDay { date, items }
}

/// The menu for `days` consecutive dates starting at `start`.
///
/// Fails with a validation error when `days` is outside the allowed window.
pub fn list_menu(start: NaiveDate, days: u32) -> canteen_shared::Result<Vec<MenuDay>> {
    let days = canteen_shared::validate_window(days)?;

    tracing::debug!(%start, days, "generating menu window");

    Ok(canteen_shared::window_dates(start, days)
        .into_iter()
        .map(generate_day)
        .collect())
}

fn to_item(date: NaiveDate, meal_type: MealType, n: usize, dish: &Dish) -> MenuItem {
    MenuItem {
        id: format!("{date}-{meal_type}-{}", n + 1),
        meal_type,
        title: dish.title.to_owned(),
        description: dish.description.to_owned(),
        calorie_count: dish.calories,
        is_vegetarian: dish.vegetarian,
        tags: dish.tags.iter().map(|t| (*t).to_owned()).collect(),
    }
}
