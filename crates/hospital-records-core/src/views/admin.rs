//! Administrator dashboard and hospital settings.

use crate::models::{
    InventoryItem, Invoice, LabTest, NewStaffMember, Patient, PatientUpdate, StaffUpdate, User,
    UserRole,
};
use crate::query::{self, AdminOverview};
use crate::session::AuthError;
use crate::store::{HospitalStore, StoreResult};

/// Admin settings form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminSettings {
    pub username: String,
    pub name: String,
    /// Left empty to keep the current password
    pub new_password: String,
    pub confirm_password: String,
}

/// Hospital administration: staff, patients, operations and settings.
pub struct AdminDashboard<'a> {
    store: &'a mut HospitalStore,
}

impl<'a> AdminDashboard<'a> {
    pub(crate) fn new(store: &'a mut HospitalStore) -> Self {
        Self { store }
    }

    pub fn overview(&self) -> AdminOverview {
        query::admin_overview(
            self.store.patients(),
            self.store.staff(),
            self.store.invoices(),
            self.store.labs(),
            self.store.inventory(),
        )
    }

    pub fn staff(&self) -> &[User] {
        self.store.staff()
    }

    pub fn patients(&self) -> &[Patient] {
        self.store.patients()
    }

    pub fn invoices(&self) -> &[Invoice] {
        self.store.invoices()
    }

    pub fn labs(&self) -> &[LabTest] {
        self.store.labs()
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        self.store.inventory()
    }

    pub fn profile(&self) -> &User {
        self.store.admin_profile()
    }

    pub fn add_staff(&mut self, member: NewStaffMember, role: UserRole) -> StoreResult<User> {
        self.store.add_staff(member, role)
    }

    pub fn update_staff(&mut self, id: &str, update: StaffUpdate) -> StoreResult<User> {
        self.store.update_staff(id, update)
    }

    pub fn delete_staff(&mut self, id: &str) -> StoreResult<()> {
        self.store.delete_staff(id)
    }

    pub fn update_patient(&mut self, id: &str, update: PatientUpdate) -> StoreResult<Patient> {
        self.store.update_patient(id, update)
    }

    pub fn delete_patient(&mut self, id: &str) -> StoreResult<()> {
        self.store.delete_patient(id)
    }

    /// Save the settings form. The password changes only when a new one is
    /// entered and confirmed.
    pub fn update_settings(&mut self, settings: AdminSettings) -> Result<User, AuthError> {
        if !settings.new_password.is_empty() && settings.new_password != settings.confirm_password
        {
            return Err(AuthError::PasswordMismatch);
        }
        let profile = self.store.update_admin_credentials(
            &settings.username,
            Some(&settings.new_password),
            Some(&settings.name),
        )?;
        Ok(profile)
    }
}
