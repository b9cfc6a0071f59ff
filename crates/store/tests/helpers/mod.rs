use canteen_shared::Role;
use canteen_store::Store;
use canteen_user::UserProfile;

pub fn profile(id: &str, role: Role) -> UserProfile {
    UserProfile {
        id: id.to_owned(),
        name: format!("Test {id}"),
        email: format!("{id}@karmicsolutions.localhost"),
        role,
        department: "Testing".to_owned(),
        password_hash: String::new(),
    }
}

pub fn setup_store(ids: impl IntoIterator<Item = &'static str>) -> anyhow::Result<Store> {
    Store::new(
        ids.into_iter()
            .map(|id| profile(id, Role::Employee))
            .collect(),
    )
}

#[allow(dead_code)]
pub fn date(raw: &str) -> chrono::NaiveDate {
    canteen_shared::parse_date(raw).unwrap()
}
