//! Doctor dashboard: patient directory, consultations and own schedule.

use crate::models::{
    AppNotification, Appointment, AppointmentStatus, MedicalRecord, NewMedicalRecord, NewPatient,
    Patient, PatientUpdate, User,
};
use crate::query::{self, HistoryFilter, PatientFilter};
use crate::store::{HospitalStore, StoreError, StoreResult};

/// Consultation note as typed by the doctor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordEntry {
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
}

/// Doctor workstation: patient directory, consultations and own schedule.
pub struct DoctorDashboard<'a> {
    store: &'a mut HospitalStore,
    doctor: User,
}

impl<'a> DoctorDashboard<'a> {
    pub(crate) fn new(store: &'a mut HospitalStore, doctor: User) -> Self {
        Self { store, doctor }
    }

    pub fn doctor(&self) -> &User {
        &self.doctor
    }

    /// Patient directory, most recently active first.
    pub fn patients(&self, filter: &PatientFilter) -> Vec<&Patient> {
        query::filter_patients(self.store.patients(), filter)
    }

    /// Doctors available for the directory's doctor filter.
    pub fn colleagues(&self) -> Vec<&User> {
        query::doctors(self.store.staff())
    }

    pub fn patient(&self, id: &str) -> StoreResult<&Patient> {
        self.store
            .patient(id)
            .ok_or_else(|| StoreError::not_found("patient", id))
    }

    pub fn add_patient(&mut self, new_patient: NewPatient) -> StoreResult<Patient> {
        self.store.add_patient(new_patient)
    }

    pub fn update_patient(&mut self, id: &str, update: PatientUpdate) -> StoreResult<Patient> {
        self.store.update_patient(id, update)
    }

    /// Record a consultation signed by this doctor.
    pub fn add_record(&mut self, patient_id: &str, entry: RecordEntry) -> StoreResult<MedicalRecord> {
        let record = NewMedicalRecord {
            diagnosis: entry.diagnosis,
            prescription: entry.prescription,
            notes: entry.notes,
            doctor_id: self.doctor.id.clone(),
            doctor_name: self.doctor.name.clone(),
        };
        self.store.add_medical_record(patient_id, record)
    }

    /// A patient's history narrowed by `filter`.
    pub fn history(&self, patient_id: &str, filter: &HistoryFilter) -> StoreResult<Vec<&MedicalRecord>> {
        let patient = self.patient(patient_id)?;
        Ok(query::filter_history(&patient.history, filter))
    }

    /// Doctors who have written in a patient's history.
    pub fn history_doctors(&self, patient_id: &str) -> StoreResult<Vec<&str>> {
        let patient = self.patient(patient_id)?;
        Ok(query::history_doctors(&patient.history))
    }

    /// This doctor's appointments, earliest first.
    pub fn schedule(&self) -> Vec<&Appointment> {
        query::appointments_for_doctor(self.store.appointments(), &self.doctor.id)
    }

    /// Complete or cancel one of this doctor's appointments.
    pub fn set_appointment_status(
        &mut self,
        appointment_id: &str,
        status: AppointmentStatus,
    ) -> StoreResult<Appointment> {
        let owned = self
            .store
            .appointment(appointment_id)
            .is_some_and(|a| a.doctor_id == self.doctor.id);
        if !owned {
            return Err(StoreError::not_found("appointment", appointment_id));
        }
        self.store.update_appointment_status(appointment_id, status)
    }

    pub fn notifications(&self) -> Vec<&AppNotification> {
        query::notifications_for_user(self.store.notifications(), &self.doctor.id)
    }

    pub fn mark_notification_as_read(&mut self, id: &str) -> StoreResult<()> {
        let owned = self
            .store
            .notifications()
            .iter()
            .any(|n| n.id == id && n.user_id == self.doctor.id);
        if !owned {
            return Err(StoreError::not_found("notification", id));
        }
        self.store.mark_notification_as_read(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use crate::session::login_staff;

    #[test]
    fn test_record_is_signed_by_doctor() {
        let mut store = HospitalStore::open_in_memory().unwrap();
        let session = login_staff(&store, "dr.boateng", "").unwrap();
        let mut desk = session.doctor_dashboard(&mut store).unwrap();

        let record = desk
            .add_record(
                "pat-2",
                RecordEntry {
                    diagnosis: "Malaria".into(),
                    prescription: "Artemether + Lumefantrine".into(),
                    notes: "Fever for 3 days".into(),
                },
            )
            .unwrap();

        assert_eq!(record.doctor_id, "doc-1");
        assert_eq!(record.doctor_name, "Dr. Kwaku Boateng");
        assert_eq!(desk.history_doctors("pat-2").unwrap(), vec!["Dr. Kwaku Boateng"]);
    }

    #[test]
    fn test_directory_and_registration() {
        let mut store = HospitalStore::open_in_memory().unwrap();
        let session = login_staff(&store, "dr.boateng", "").unwrap();
        let mut desk = session.doctor_dashboard(&mut store).unwrap();

        let patient = desk
            .add_patient(NewPatient::new("Efua Mensah", 30, Gender::Female, "0277000000"))
            .unwrap();
        let found = desk.patients(&PatientFilter {
            search: patient.id.to_lowercase(),
            ..Default::default()
        });
        assert_eq!(found.len(), 1);
        assert_eq!(desk.patients(&PatientFilter::default()).len(), 11);
    }

    #[test]
    fn test_only_own_appointments_can_change() {
        let mut store = HospitalStore::open_in_memory().unwrap();
        let other = store
            .staff()
            .iter()
            .find(|u| u.is_doctor() && u.id != "doc-1")
            .unwrap()
            .username
            .clone();

        let session = login_staff(&store, &other, "").unwrap();
        let mut desk = session.doctor_dashboard(&mut store).unwrap();
        assert!(desk.schedule().is_empty());
        assert!(matches!(
            desk.set_appointment_status("apt-1", AppointmentStatus::Cancelled),
            Err(StoreError::NotFound { .. })
        ));

        let session = login_staff(&store, "dr.boateng", "").unwrap();
        let mut desk = session.doctor_dashboard(&mut store).unwrap();
        assert_eq!(desk.schedule().len(), 1);
        let done = desk
            .set_appointment_status("apt-1", AppointmentStatus::Completed)
            .unwrap();
        assert_eq!(done.status, AppointmentStatus::Completed);
    }

    #[test]
    fn test_history_of_missing_patient() {
        let mut store = HospitalStore::open_in_memory().unwrap();
        let session = login_staff(&store, "dr.boateng", "").unwrap();
        let desk = session.doctor_dashboard(&mut store).unwrap();
        assert!(desk.history("nope", &HistoryFilter::default()).is_err());
    }
}
