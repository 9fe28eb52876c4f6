//! Role-scoped dashboards.
//!
//! Each dashboard borrows the store and exposes only the operations its role
//! may perform. Records outside a doctor's or patient's reach are reported as
//! not found.

mod admin;
mod doctor;
mod patient;

pub use admin::{AdminDashboard, AdminSettings};
pub use doctor::{DoctorDashboard, RecordEntry};
pub use patient::{BookingRequest, PatientPortal};

use crate::models::UserRole;
use crate::session::Session;
use crate::store::HospitalStore;

impl Session {
    /// Open the admin dashboard, if this session is the admin.
    pub fn admin_dashboard<'a>(&self, store: &'a mut HospitalStore) -> Option<AdminDashboard<'a>> {
        (self.user().role == UserRole::Admin).then(|| AdminDashboard::new(store))
    }

    /// Open the doctor workstation, if this session is a doctor.
    pub fn doctor_dashboard<'a>(
        &self,
        store: &'a mut HospitalStore,
    ) -> Option<DoctorDashboard<'a>> {
        (self.user().role == UserRole::Doctor)
            .then(|| DoctorDashboard::new(store, self.user().clone()))
    }

    /// Open the patient portal, if this session is a patient.
    pub fn patient_portal<'a>(&self, store: &'a mut HospitalStore) -> Option<PatientPortal<'a>> {
        (self.user().role == UserRole::Patient)
            .then(|| PatientPortal::new(store, self.user().clone()))
    }
}
