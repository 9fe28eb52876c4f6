//! In-memory entity store with synchronous write-through persistence.
//!
//! Every collection lives in memory and in one row of the `collections`
//! table. Mutators build the next version of a collection, persist it and
//! only then swap it in, so a failed write leaves the store unchanged.

mod admin;
mod appointments;
mod notifications;
mod patients;
mod seed;
mod staff;

pub use seed::DEFAULT_ADMIN_PASSWORD;

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::clock::{Clock, SystemClock};
use crate::config::StoreConfig;
use crate::db::{CollectionKey, Database, DbError, DbResult};
use crate::models::{
    Appointment, AppointmentStatus, AppNotification, InventoryItem, Invoice, LabTest, Patient,
    User,
};

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Cannot change appointment status from {from} to {to}")]
    InvalidTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}

impl StoreError {
    pub(crate) fn not_found(kind: &'static str, id: &str) -> Self {
        tracing::warn!(kind, id, "lookup miss");
        StoreError::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The hospital's single source of truth.
pub struct HospitalStore {
    db: Database,
    clock: Box<dyn Clock>,
    rng: StdRng,
    patients: Vec<Patient>,
    staff: Vec<User>,
    appointments: Vec<Appointment>,
    invoices: Vec<Invoice>,
    labs: Vec<LabTest>,
    inventory: Vec<InventoryItem>,
    notifications: Vec<AppNotification>,
    admin_profile: User,
    admin_password: String,
}

impl HospitalStore {
    /// Open the database named by `config`, seeding any missing collection.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let db = Database::open(&config.db_path)?;
        tracing::info!(path = %config.db_path.display(), "opened hospital records database");
        Self::with_database(db, config.mock_patient_count, Box::new(SystemClock))
    }

    /// In-memory store with the fixed seed only.
    pub fn open_in_memory() -> StoreResult<Self> {
        let db = Database::open_in_memory()?;
        Self::with_database(db, 0, Box::new(SystemClock))
    }

    /// Build a store over an already opened database.
    pub fn with_database(
        db: Database,
        mock_patient_count: usize,
        clock: Box<dyn Clock>,
    ) -> StoreResult<Self> {
        let mut rng = StdRng::from_entropy();
        let now = clock.now();

        let patients = load_or_seed(&db, CollectionKey::Patients, || {
            Ok(seed::patients(now, mock_patient_count, &mut rng)?)
        })?;
        let staff = load_or_seed(&db, CollectionKey::Staff, || Ok(seed::staff()?))?;
        let appointments = load_or_seed(&db, CollectionKey::Appointments, || {
            Ok(seed::appointments(now))
        })?;
        let invoices = load_or_seed(&db, CollectionKey::Invoices, || Ok(seed::invoices()?))?;
        let labs = load_or_seed(&db, CollectionKey::Labs, || Ok(seed::labs()?))?;
        let inventory = load_or_seed(&db, CollectionKey::Inventory, || Ok(seed::inventory()?))?;
        let notifications = load_or_seed(&db, CollectionKey::Notifications, || Ok(Vec::new()))?;
        let admin_profile = load_or_seed(&db, CollectionKey::AdminProfile, || {
            Ok(seed::admin_profile())
        })?;
        let admin_password = load_or_seed(&db, CollectionKey::AdminPassword, || {
            Ok(DEFAULT_ADMIN_PASSWORD.to_string())
        })?;

        tracing::info!(
            patients = patients.len(),
            staff = staff.len(),
            appointments = appointments.len(),
            "hospital store ready"
        );

        Ok(Self {
            db,
            clock,
            rng,
            patients,
            staff,
            appointments,
            invoices,
            labs,
            inventory,
            notifications,
            admin_profile,
            admin_password,
        })
    }

    /// Current time according to the store's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn staff(&self) -> &[User] {
        &self.staff
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn labs(&self) -> &[LabTest] {
        &self.labs
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    /// All notifications, newest first.
    pub fn notifications(&self) -> &[AppNotification] {
        &self.notifications
    }

    pub fn admin_profile(&self) -> &User {
        &self.admin_profile
    }

    pub fn admin_password(&self) -> &str {
        &self.admin_password
    }

    pub fn patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    pub fn staff_member(&self, id: &str) -> Option<&User> {
        self.staff.iter().find(|u| u.id == id)
    }

    pub fn appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    // =========================================================================
    // Write-through
    // =========================================================================

    fn commit_patients(&mut self, patients: Vec<Patient>) -> StoreResult<()> {
        self.db.store(CollectionKey::Patients, &patients)?;
        self.patients = patients;
        Ok(())
    }

    fn commit_staff(&mut self, staff: Vec<User>) -> StoreResult<()> {
        self.db.store(CollectionKey::Staff, &staff)?;
        self.staff = staff;
        Ok(())
    }

    fn commit_appointments(&mut self, appointments: Vec<Appointment>) -> StoreResult<()> {
        self.db.store(CollectionKey::Appointments, &appointments)?;
        self.appointments = appointments;
        Ok(())
    }

    fn commit_notifications(&mut self, notifications: Vec<AppNotification>) -> StoreResult<()> {
        self.db.store(CollectionKey::Notifications, &notifications)?;
        self.notifications = notifications;
        Ok(())
    }
}

/// Load `key`, or build it with `seed` and write it immediately.
fn load_or_seed<T, F>(db: &Database, key: CollectionKey, seed: F) -> DbResult<T>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce() -> DbResult<T>,
{
    if let Some(value) = db.load(key)? {
        return Ok(value);
    }
    let value = seed()?;
    db.store(key, &value)?;
    tracing::info!(key = key.as_str(), "seeded collection");
    Ok(value)
}
