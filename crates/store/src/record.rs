use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use canteen_attendance::MealSelection;
use canteen_user::{UserPreference, UserProfile};
use chrono::NaiveDate;
use tokio::sync::RwLock;

/// In-memory record collections. Only reachable through a [`Store`] handle.
#[derive(Debug, Default)]
pub(crate) struct Records {
    pub users: Vec<UserProfile>,
    /// Keyed by (user id, date) so one user's selections iterate in date order.
    pub selections: BTreeMap<(String, NaiveDate), MealSelection>,
    pub preferences: HashMap<String, UserPreference>,
}

/// Shared handle to the canteen record store.
///
/// Cloning is cheap; all clones see the same records. Every operation takes
/// the lock exactly once, so a caller always reads its own completed writes.
#[derive(Clone, Debug)]
pub struct Store {
    pub(crate) records: Arc<RwLock<Records>>,
}

impl Store {
    /// Creates a store seeded with `users`. Emails must be unique.
    pub fn new(users: Vec<UserProfile>) -> anyhow::Result<Self> {
        for (i, user) in users.iter().enumerate() {
            if users[..i].iter().any(|u| u.has_email(&user.email)) {
                anyhow::bail!("duplicate user email {}", user.email);
            }
            if users[..i].iter().any(|u| u.id == user.id) {
                anyhow::bail!("duplicate user id {}", user.id);
            }
        }

        tracing::info!(users = users.len(), "record store seeded");

        Ok(Self {
            records: Arc::new(RwLock::new(Records {
                users,
                ..Default::default()
            })),
        })
    }
}
