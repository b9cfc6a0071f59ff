use canteen_shared::Role;

use crate::UserProfile;

/// Demo accounts loaded at startup. Every account shares `password_hash`.
pub fn demo_profiles(password_hash: &str) -> Vec<UserProfile> {
    [
        (
            "u-asha",
            "Asha Menon",
            "asha.menon@karmicsolutions.com",
            Role::Employee,
            "Engineering",
        ),
        (
            "u-karan",
            "Karan Patel",
            "karan.patel@karmicsolutions.com",
            Role::Admin,
            "Operations",
        ),
        (
            "u-meera",
            "Meera Iyer",
            "meera.iyer@karmicsolutions.com",
            Role::Employee,
            "Finance",
        ),
    ]
    .into_iter()
    .map(|(id, name, email, role, department)| UserProfile {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        role,
        department: department.to_owned(),
        password_hash: password_hash.to_owned(),
    })
    .collect()
}
