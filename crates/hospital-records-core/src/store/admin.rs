//! Administrator profile and credential.

use super::{HospitalStore, StoreResult};
use crate::db::CollectionKey;
use crate::models::User;

impl HospitalStore {
    /// Update the admin login.
    ///
    /// `password` and `name` are applied only when non-empty; the username is
    /// always replaced. Profile and password are written in one transaction,
    /// so a failed write leaves both unchanged.
    pub fn update_admin_credentials(
        &mut self,
        username: &str,
        password: Option<&str>,
        name: Option<&str>,
    ) -> StoreResult<User> {
        let mut profile = self.admin_profile.clone();
        profile.username = username.to_string();
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            profile.name = name.to_string();
        }
        let password = password.filter(|p| !p.is_empty());

        self.db.atomically(|db| {
            db.store(CollectionKey::AdminProfile, &profile)?;
            if let Some(password) = password {
                db.store(CollectionKey::AdminPassword, password)?;
            }
            Ok(())
        })?;

        self.admin_profile = profile.clone();
        if let Some(password) = password {
            self.admin_password = password.to_string();
            tracing::info!("admin password changed");
        }
        Ok(profile)
    }
}
