use canteen_shared::DietaryPreference;

use crate::MenuItem;

/// Whether a menu item suits a diner's dietary preference.
///
/// Standard diners can eat everything. Vegetarian relies on the item flag.
/// Vegan and jain need the flag as well as the matching tag, so a mis-tagged
/// meat dish is still excluded.
pub fn suits(item: &MenuItem, preference: DietaryPreference) -> bool {
    match preference {
        DietaryPreference::Standard => true,
        DietaryPreference::Vegetarian => item.is_vegetarian,
        DietaryPreference::Vegan => item.is_vegetarian && item.has_tag("vegan"),
        DietaryPreference::Jain => item.is_vegetarian && item.has_tag("jain"),
    }
}

pub fn filter_by_preference(
    items: &[MenuItem],
    preference: DietaryPreference,
) -> Vec<&MenuItem> {
    items.iter().filter(|i| suits(i, preference)).collect()
}
