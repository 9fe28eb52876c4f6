//! Hospital Records Core Library
//!
//! Local-first records store for a single facility: patients, staff,
//! appointments and the hospital's operational ledgers, with role-gated
//! dashboards for administrators, doctors and patients.
//!
//! # Architecture
//!
//! ```text
//!   Login ──► Session ──► Dashboard (Admin / Doctor / Patient)
//!                              │
//!                              ▼
//!                     HospitalStore mutators ──► Notification dispatch
//!                              │
//!              ┌───────────────┴───────────────┐
//!              ▼                               ▼
//!     SQLite `collections`              in-memory state
//!     (write-through, JSON)                    │
//!                                              ▼
//!                                    query filters / overview
//! ```
//!
//! # Modules
//!
//! - [`db`]: SQLite key/value persistence, one JSON document per collection
//! - [`models`]: Domain types (Patient, User, Appointment, Invoice, etc.)
//! - [`store`]: Entity store with write-through mutators
//! - [`ids`]: Patient and timestamp identifier generation
//! - [`query`]: Pure filtering and sorting pipelines
//! - [`session`]: Login, registration and role routing
//! - [`views`]: Role-scoped dashboards

pub mod clock;
pub mod config;
pub mod db;
pub mod ids;
pub mod models;
pub mod query;
pub mod session;
pub mod store;
pub mod views;

// Re-export commonly used types
pub use clock::{Clock, SteppingClock, SystemClock};
pub use config::StoreConfig;
pub use db::Database;
pub use models::{
    AppNotification, Appointment, AppointmentStatus, Gender, InventoryItem, Invoice, LabTest,
    MedicalRecord, NewAppointment, NewMedicalRecord, NewPatient, NewStaffMember,
    NotificationKind, Patient, PatientUpdate, StaffUpdate, User, UserRole,
};
pub use query::{AdminOverview, DateRange, HistoryFilter, PatientFilter};
pub use session::{AuthError, Dashboard, DoctorRegistration, Session};
pub use store::{HospitalStore, StoreError, StoreResult};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use chrono::{DateTime, NaiveDate, Utc};
use std::sync::{Arc, Mutex};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum HospitalRecordsError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("{0}")]
    AuthError(String),
}

impl From<db::DbError> for HospitalRecordsError {
    fn from(e: db::DbError) -> Self {
        HospitalRecordsError::DatabaseError(e.to_string())
    }
}

impl From<StoreError> for HospitalRecordsError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Db(e) => e.into(),
            StoreError::NotFound { .. } => HospitalRecordsError::NotFound(e.to_string()),
            StoreError::InvalidTransition { .. } => {
                HospitalRecordsError::InvalidTransition(e.to_string())
            }
        }
    }
}

impl From<AuthError> for HospitalRecordsError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Store(e) => e.into(),
            other => HospitalRecordsError::AuthError(other.to_string()),
        }
    }
}

impl<T> From<std::sync::PoisonError<T>> for HospitalRecordsError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        HospitalRecordsError::DatabaseError(format!("Lock poisoned: {}", e))
    }
}

fn parse_day(value: Option<String>) -> Result<Option<NaiveDate>, HospitalRecordsError> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(v) => NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| HospitalRecordsError::InvalidInput(format!("invalid date: {}", v))),
        None => Ok(None),
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, HospitalRecordsError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| HospitalRecordsError::InvalidInput(format!("invalid timestamp: {}", value)))
}

fn parse_role(value: &str) -> Result<UserRole, HospitalRecordsError> {
    UserRole::parse(value)
        .ok_or_else(|| HospitalRecordsError::InvalidInput(format!("unknown role: {}", value)))
}

fn parse_gender(value: &str) -> Result<Gender, HospitalRecordsError> {
    Gender::parse(value)
        .ok_or_else(|| HospitalRecordsError::InvalidInput(format!("unknown gender: {}", value)))
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open or create a store at the given path.
#[uniffi::export]
pub fn open_store(
    path: String,
    mock_patient_count: u32,
) -> Result<Arc<HospitalRecordsCore>, HospitalRecordsError> {
    let config = StoreConfig {
        db_path: path.into(),
        mock_patient_count: mock_patient_count as usize,
    };
    let store = HospitalStore::open(&config)?;
    Ok(Arc::new(HospitalRecordsCore {
        store: Arc::new(Mutex::new(store)),
    }))
}

/// Create an in-memory store with the fixed seed (for testing).
#[uniffi::export]
pub fn open_store_in_memory() -> Result<Arc<HospitalRecordsCore>, HospitalRecordsError> {
    let store = HospitalStore::open_in_memory()?;
    Ok(Arc::new(HospitalRecordsCore {
        store: Arc::new(Mutex::new(store)),
    }))
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe store wrapper for FFI.
#[derive(uniffi::Object)]
pub struct HospitalRecordsCore {
    store: Arc<Mutex<HospitalStore>>,
}

#[uniffi::export]
impl HospitalRecordsCore {
    // =========================================================================
    // Session Operations
    // =========================================================================

    pub fn login_staff(&self, username: String, password: String) -> Result<FfiUser, HospitalRecordsError> {
        let store = self.store.lock()?;
        let session = session::login_staff(&store, &username, &password)?;
        Ok(session.user().clone().into())
    }

    pub fn login_doctor(
        &self,
        id_or_username: String,
        licensure_number: String,
    ) -> Result<FfiUser, HospitalRecordsError> {
        let store = self.store.lock()?;
        let session = session::login_doctor(&store, &id_or_username, &licensure_number)?;
        Ok(session.user().clone().into())
    }

    pub fn login_patient(&self, patient_id: String, contact: String) -> Result<FfiUser, HospitalRecordsError> {
        let store = self.store.lock()?;
        let session = session::login_patient(&store, &patient_id, &contact)?;
        Ok(session.user().clone().into())
    }

    pub fn register_doctor(
        &self,
        name: String,
        username: String,
        specialization: String,
        licensure_number: String,
    ) -> Result<FfiUser, HospitalRecordsError> {
        let mut store = self.store.lock()?;
        let doctor = session::register_doctor(
            &mut store,
            DoctorRegistration {
                name,
                username,
                specialization,
                licensure_number,
            },
        )?;
        Ok(doctor.into())
    }

    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// Patient directory, most recently active first.
    pub fn search_patients(
        &self,
        search: String,
        doctor_id: Option<String>,
        from: Option<String>,
        to: Option<String>,
    ) -> Result<Vec<FfiPatient>, HospitalRecordsError> {
        let filter = PatientFilter {
            search,
            doctor_id,
            range: DateRange::new(parse_day(from)?, parse_day(to)?),
        };
        let store = self.store.lock()?;
        let patients = query::filter_patients(store.patients(), &filter);
        Ok(patients.into_iter().map(|p| p.clone().into()).collect())
    }

    pub fn get_patient(&self, id: String) -> Result<Option<FfiPatient>, HospitalRecordsError> {
        let store = self.store.lock()?;
        Ok(store.patient(&id).map(|p| p.clone().into()))
    }

    pub fn add_patient(&self, patient: FfiNewPatient) -> Result<FfiPatient, HospitalRecordsError> {
        let new_patient: NewPatient = patient.try_into()?;
        let mut store = self.store.lock()?;
        Ok(store.add_patient(new_patient)?.into())
    }

    pub fn update_patient(
        &self,
        id: String,
        update: FfiPatientUpdate,
    ) -> Result<FfiPatient, HospitalRecordsError> {
        let update: PatientUpdate = update.try_into()?;
        let mut store = self.store.lock()?;
        Ok(store.update_patient(&id, update)?.into())
    }

    pub fn delete_patient(&self, id: String) -> Result<(), HospitalRecordsError> {
        let mut store = self.store.lock()?;
        store.delete_patient(&id)?;
        Ok(())
    }

    pub fn add_medical_record(
        &self,
        patient_id: String,
        record: FfiNewMedicalRecord,
    ) -> Result<FfiMedicalRecord, HospitalRecordsError> {
        let mut store = self.store.lock()?;
        Ok(store.add_medical_record(&patient_id, record.into())?.into())
    }

    /// A patient's history narrowed by text, doctor and date.
    pub fn filter_history(
        &self,
        patient_id: String,
        search: String,
        doctor_name: Option<String>,
        from: Option<String>,
        to: Option<String>,
    ) -> Result<Vec<FfiMedicalRecord>, HospitalRecordsError> {
        let filter = HistoryFilter {
            search,
            doctor_name,
            range: DateRange::new(parse_day(from)?, parse_day(to)?),
        };
        let store = self.store.lock()?;
        let patient = store
            .patient(&patient_id)
            .ok_or_else(|| StoreError::not_found("patient", &patient_id))?;
        let records = query::filter_history(&patient.history, &filter);
        Ok(records.into_iter().map(|r| r.clone().into()).collect())
    }

    pub fn history_doctors(&self, patient_id: String) -> Result<Vec<String>, HospitalRecordsError> {
        let store = self.store.lock()?;
        let patient = store
            .patient(&patient_id)
            .ok_or_else(|| StoreError::not_found("patient", &patient_id))?;
        Ok(query::history_doctors(&patient.history)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    // =========================================================================
    // Staff Operations
    // =========================================================================

    pub fn list_staff(&self) -> Result<Vec<FfiUser>, HospitalRecordsError> {
        let store = self.store.lock()?;
        Ok(store.staff().iter().map(|u| u.clone().into()).collect())
    }

    /// Doctors, optionally narrowed to one specialization.
    pub fn list_doctors(&self, specialization: Option<String>) -> Result<Vec<FfiUser>, HospitalRecordsError> {
        let store = self.store.lock()?;
        let doctors = query::doctors(store.staff());
        let doctors = query::doctors_by_specialization(&doctors, specialization.as_deref());
        Ok(doctors.into_iter().map(|u| u.clone().into()).collect())
    }

    pub fn list_specializations(&self) -> Result<Vec<String>, HospitalRecordsError> {
        let store = self.store.lock()?;
        let doctors = query::doctors(store.staff());
        Ok(query::specializations(&doctors)
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    pub fn add_staff(&self, member: FfiNewStaffMember, role: String) -> Result<FfiUser, HospitalRecordsError> {
        let role = parse_role(&role)?;
        let mut store = self.store.lock()?;
        Ok(store.add_staff(member.into(), role)?.into())
    }

    pub fn add_doctor(&self, member: FfiNewStaffMember) -> Result<FfiUser, HospitalRecordsError> {
        let mut store = self.store.lock()?;
        Ok(store.add_doctor(member.into())?.into())
    }

    pub fn update_staff(&self, id: String, update: FfiStaffUpdate) -> Result<FfiUser, HospitalRecordsError> {
        let update: StaffUpdate = update.try_into()?;
        let mut store = self.store.lock()?;
        Ok(store.update_staff(&id, update)?.into())
    }

    pub fn delete_staff(&self, id: String) -> Result<(), HospitalRecordsError> {
        let mut store = self.store.lock()?;
        store.delete_staff(&id)?;
        Ok(())
    }

    // =========================================================================
    // Appointment Operations
    // =========================================================================

    pub fn appointments_for_doctor(&self, doctor_id: String) -> Result<Vec<FfiAppointment>, HospitalRecordsError> {
        let store = self.store.lock()?;
        let list = query::appointments_for_doctor(store.appointments(), &doctor_id);
        Ok(list.into_iter().map(|a| a.clone().into()).collect())
    }

    /// A patient's appointments split into upcoming and past.
    pub fn appointments_for_patient(&self, patient_id: String) -> Result<FfiSchedule, HospitalRecordsError> {
        let store = self.store.lock()?;
        let list = query::appointments_for_patient(store.appointments(), &patient_id);
        let schedule = query::split_schedule(&list, store.now());
        Ok(FfiSchedule {
            upcoming: schedule.upcoming.into_iter().map(|a| a.clone().into()).collect(),
            past: schedule.past.into_iter().map(|a| a.clone().into()).collect(),
        })
    }

    pub fn add_appointment(&self, appointment: FfiNewAppointment) -> Result<FfiAppointment, HospitalRecordsError> {
        let new_appointment: NewAppointment = appointment.try_into()?;
        let mut store = self.store.lock()?;
        Ok(store.add_appointment(new_appointment)?.into())
    }

    pub fn update_appointment_status(
        &self,
        id: String,
        status: String,
    ) -> Result<FfiAppointment, HospitalRecordsError> {
        let status = AppointmentStatus::parse(&status)
            .ok_or_else(|| HospitalRecordsError::InvalidInput(format!("unknown status: {}", status)))?;
        let mut store = self.store.lock()?;
        Ok(store.update_appointment_status(&id, status)?.into())
    }

    // =========================================================================
    // Notification Operations
    // =========================================================================

    pub fn notifications_for_user(&self, user_id: String) -> Result<Vec<FfiNotification>, HospitalRecordsError> {
        let store = self.store.lock()?;
        let feed = query::notifications_for_user(store.notifications(), &user_id);
        Ok(feed.into_iter().map(|n| n.clone().into()).collect())
    }

    pub fn unread_count(&self, user_id: String) -> Result<u32, HospitalRecordsError> {
        let store = self.store.lock()?;
        let feed = query::notifications_for_user(store.notifications(), &user_id);
        Ok(query::unread_count(&feed) as u32)
    }

    pub fn mark_notification_as_read(&self, id: String) -> Result<(), HospitalRecordsError> {
        let mut store = self.store.lock()?;
        store.mark_notification_as_read(&id)?;
        Ok(())
    }

    // =========================================================================
    // Admin Operations
    // =========================================================================

    pub fn admin_profile(&self) -> Result<FfiUser, HospitalRecordsError> {
        let store = self.store.lock()?;
        Ok(store.admin_profile().clone().into())
    }

    pub fn update_admin_credentials(
        &self,
        username: String,
        password: Option<String>,
        name: Option<String>,
    ) -> Result<FfiUser, HospitalRecordsError> {
        let mut store = self.store.lock()?;
        let profile =
            store.update_admin_credentials(&username, password.as_deref(), name.as_deref())?;
        Ok(profile.into())
    }

    pub fn admin_overview(&self) -> Result<FfiAdminOverview, HospitalRecordsError> {
        let store = self.store.lock()?;
        let overview = query::admin_overview(
            store.patients(),
            store.staff(),
            store.invoices(),
            store.labs(),
            store.inventory(),
        );
        Ok(overview.into())
    }

    pub fn list_invoices(&self) -> Result<Vec<FfiInvoice>, HospitalRecordsError> {
        let store = self.store.lock()?;
        Ok(store.invoices().iter().map(|i| i.clone().into()).collect())
    }

    pub fn list_labs(&self) -> Result<Vec<FfiLabTest>, HospitalRecordsError> {
        let store = self.store.lock()?;
        Ok(store.labs().iter().map(|l| l.clone().into()).collect())
    }

    pub fn list_inventory(&self) -> Result<Vec<FfiInventoryItem>, HospitalRecordsError> {
        let store = self.store.lock()?;
        Ok(store.inventory().iter().map(|i| i.clone().into()).collect())
    }
}

// =========================================================================
// FFI Types
// =========================================================================

/// FFI-safe user (staff, admin or patient session).
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiUser {
    pub id: String,
    pub username: String,
    pub name: String,
    pub role: String,
    pub specialization: Option<String>,
    pub department: Option<String>,
    pub contact: Option<String>,
    pub licensure_number: Option<String>,
}

impl From<User> for FfiUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            role: user.role.as_str().to_string(),
            specialization: user.specialization,
            department: user.department,
            contact: user.contact,
            licensure_number: user.licensure_number,
        }
    }
}

/// FFI-safe staff registration.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewStaffMember {
    pub username: String,
    pub name: String,
    pub specialization: Option<String>,
    pub department: Option<String>,
    pub contact: Option<String>,
    pub licensure_number: Option<String>,
}

impl From<FfiNewStaffMember> for NewStaffMember {
    fn from(member: FfiNewStaffMember) -> Self {
        NewStaffMember {
            username: member.username,
            name: member.name,
            specialization: member.specialization,
            department: member.department,
            contact: member.contact,
            licensure_number: member.licensure_number,
        }
    }
}

/// FFI-safe partial staff update.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiStaffUpdate {
    pub username: Option<String>,
    pub name: Option<String>,
    pub role: Option<String>,
    pub specialization: Option<String>,
    pub department: Option<String>,
    pub contact: Option<String>,
    pub licensure_number: Option<String>,
}

impl TryFrom<FfiStaffUpdate> for StaffUpdate {
    type Error = HospitalRecordsError;

    fn try_from(update: FfiStaffUpdate) -> Result<Self, Self::Error> {
        Ok(StaffUpdate {
            username: update.username,
            name: update.name,
            role: update.role.as_deref().map(parse_role).transpose()?,
            specialization: update.specialization,
            department: update.department,
            contact: update.contact,
            licensure_number: update.licensure_number,
        })
    }
}

/// FFI-safe medical record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiMedicalRecord {
    pub id: String,
    /// RFC 3339
    pub date: String,
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
    pub doctor_id: String,
    pub doctor_name: String,
}

impl From<MedicalRecord> for FfiMedicalRecord {
    fn from(record: MedicalRecord) -> Self {
        Self {
            id: record.id,
            date: record.date.to_rfc3339(),
            diagnosis: record.diagnosis,
            prescription: record.prescription,
            notes: record.notes,
            doctor_id: record.doctor_id,
            doctor_name: record.doctor_name,
        }
    }
}

/// FFI-safe new medical record.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewMedicalRecord {
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
    pub doctor_id: String,
    pub doctor_name: String,
}

impl From<FfiNewMedicalRecord> for NewMedicalRecord {
    fn from(record: FfiNewMedicalRecord) -> Self {
        NewMedicalRecord {
            diagnosis: record.diagnosis,
            prescription: record.prescription,
            notes: record.notes,
            doctor_id: record.doctor_id,
            doctor_name: record.doctor_name,
        }
    }
}

/// FFI-safe patient.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatient {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub contact: String,
    pub address: String,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub chronic_conditions: Option<String>,
    pub blood_type: Option<String>,
    pub allergies: Option<String>,
    pub assigned_doctor_id: Option<String>,
    pub history: Vec<FfiMedicalRecord>,
    pub created_at: String,
}

impl From<Patient> for FfiPatient {
    fn from(patient: Patient) -> Self {
        Self {
            id: patient.id,
            name: patient.name,
            age: patient.age,
            gender: patient.gender.as_str().to_string(),
            contact: patient.contact,
            address: patient.address,
            emergency_contact_name: patient.emergency_contact_name,
            emergency_contact_phone: patient.emergency_contact_phone,
            chronic_conditions: patient.chronic_conditions,
            blood_type: patient.blood_type,
            allergies: patient.allergies,
            assigned_doctor_id: patient.assigned_doctor_id,
            history: patient.history.into_iter().map(|r| r.into()).collect(),
            created_at: patient.created_at.to_rfc3339(),
        }
    }
}

/// FFI-safe patient registration.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewPatient {
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub contact: String,
    pub address: String,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub chronic_conditions: Option<String>,
    pub blood_type: Option<String>,
    pub allergies: Option<String>,
    pub assigned_doctor_id: Option<String>,
}

impl TryFrom<FfiNewPatient> for NewPatient {
    type Error = HospitalRecordsError;

    fn try_from(patient: FfiNewPatient) -> Result<Self, Self::Error> {
        Ok(NewPatient {
            name: patient.name,
            age: patient.age,
            gender: parse_gender(&patient.gender)?,
            contact: patient.contact,
            address: patient.address,
            emergency_contact_name: patient.emergency_contact_name,
            emergency_contact_phone: patient.emergency_contact_phone,
            chronic_conditions: patient.chronic_conditions,
            blood_type: patient.blood_type,
            allergies: patient.allergies,
            assigned_doctor_id: patient.assigned_doctor_id,
        })
    }
}

/// FFI-safe partial patient update.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiPatientUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub contact: Option<String>,
    pub address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub chronic_conditions: Option<String>,
    pub blood_type: Option<String>,
    pub allergies: Option<String>,
    pub assigned_doctor_id: Option<String>,
}

impl TryFrom<FfiPatientUpdate> for PatientUpdate {
    type Error = HospitalRecordsError;

    fn try_from(update: FfiPatientUpdate) -> Result<Self, Self::Error> {
        Ok(PatientUpdate {
            name: update.name,
            age: update.age,
            gender: update.gender.as_deref().map(parse_gender).transpose()?,
            contact: update.contact,
            address: update.address,
            emergency_contact_name: update.emergency_contact_name,
            emergency_contact_phone: update.emergency_contact_phone,
            chronic_conditions: update.chronic_conditions,
            blood_type: update.blood_type,
            allergies: update.allergies,
            assigned_doctor_id: update.assigned_doctor_id,
        })
    }
}

/// FFI-safe appointment.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAppointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date: String,
    pub reason: String,
    pub status: String,
}

impl From<Appointment> for FfiAppointment {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            patient_id: appointment.patient_id,
            patient_name: appointment.patient_name,
            doctor_id: appointment.doctor_id,
            doctor_name: appointment.doctor_name,
            date: appointment.date.to_rfc3339(),
            reason: appointment.reason,
            status: appointment.status.as_str().to_string(),
        }
    }
}

/// FFI-safe booking request.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNewAppointment {
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    /// RFC 3339
    pub date: String,
    pub reason: String,
}

impl TryFrom<FfiNewAppointment> for NewAppointment {
    type Error = HospitalRecordsError;

    fn try_from(appointment: FfiNewAppointment) -> Result<Self, Self::Error> {
        Ok(NewAppointment {
            date: parse_timestamp(&appointment.date)?,
            patient_id: appointment.patient_id,
            patient_name: appointment.patient_name,
            doctor_id: appointment.doctor_id,
            doctor_name: appointment.doctor_name,
            reason: appointment.reason,
        })
    }
}

/// FFI-safe upcoming/past split.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiSchedule {
    pub upcoming: Vec<FfiAppointment>,
    pub past: Vec<FfiAppointment>,
}

/// FFI-safe notification.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiNotification {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub message: String,
    pub date: String,
    pub read: bool,
    pub kind: String,
}

impl From<AppNotification> for FfiNotification {
    fn from(notification: AppNotification) -> Self {
        Self {
            id: notification.id,
            user_id: notification.user_id,
            title: notification.title,
            message: notification.message,
            date: notification.date.to_rfc3339(),
            read: notification.read,
            kind: notification.kind.as_str().to_string(),
        }
    }
}

/// FFI-safe invoice.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiInvoice {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub date: String,
    pub amount: f64,
    pub status: String,
    pub items: Vec<String>,
}

impl From<Invoice> for FfiInvoice {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id,
            patient_id: invoice.patient_id,
            patient_name: invoice.patient_name,
            date: invoice.date.to_string(),
            amount: invoice.amount,
            status: invoice.status.as_str().to_string(),
            items: invoice.items,
        }
    }
}

/// FFI-safe lab test.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiLabTest {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub test_name: String,
    pub date: String,
    pub status: String,
    pub result: Option<String>,
    pub requested_by: String,
}

impl From<LabTest> for FfiLabTest {
    fn from(lab: LabTest) -> Self {
        Self {
            id: lab.id,
            patient_id: lab.patient_id,
            patient_name: lab.patient_name,
            test_name: lab.test_name,
            date: lab.date.to_string(),
            status: lab.status.as_str().to_string(),
            result: lab.result,
            requested_by: lab.requested_by,
        }
    }
}

/// FFI-safe inventory item.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiInventoryItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub unit: String,
    pub expiry_date: Option<String>,
    pub status: String,
}

impl From<InventoryItem> for FfiInventoryItem {
    fn from(item: InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            category: item.category.as_str().to_string(),
            quantity: item.quantity,
            unit: item.unit,
            expiry_date: item.expiry_date.map(|d| d.to_string()),
            status: item.status.as_str().to_string(),
        }
    }
}

/// FFI-safe admin overview.
#[derive(Debug, Clone, uniffi::Record)]
pub struct FfiAdminOverview {
    pub total_patients: u32,
    pub total_staff: u32,
    pub doctors: u32,
    pub pending_invoices: u32,
    pub open_labs: u32,
    pub restock_items: u32,
    pub outstanding_amount: f64,
}

impl From<AdminOverview> for FfiAdminOverview {
    fn from(overview: AdminOverview) -> Self {
        Self {
            total_patients: overview.total_patients as u32,
            total_staff: overview.total_staff as u32,
            doctors: overview.doctors as u32,
            pending_invoices: overview.pending_invoices as u32,
            open_labs: overview.open_labs as u32,
            restock_items: overview.restock_items as u32,
            outstanding_amount: overview.outstanding_amount,
        }
    }
}
