//! Patient registration, updates and medical history.

use super::{HospitalStore, StoreError, StoreResult};
use crate::ids::{self, IdKind};
use crate::models::{MedicalRecord, NewMedicalRecord, NewPatient, Patient, PatientUpdate};

impl HospitalStore {
    /// Register a patient with a generated id and an empty history.
    pub fn add_patient(&mut self, new_patient: NewPatient) -> StoreResult<Patient> {
        let now = self.clock.now();
        let existing = &self.patients;
        let id = ids::patient_id(
            &new_patient.name,
            |candidate| existing.iter().any(|p| p.id == candidate),
            &mut self.rng,
        );
        let patient = new_patient.into_patient(id, now);

        let mut patients = self.patients.clone();
        patients.push(patient.clone());
        self.commit_patients(patients)?;

        tracing::info!(id = %patient.id, "patient registered");
        Ok(patient)
    }

    /// Shallow-merge `update` into the patient with `id`.
    pub fn update_patient(&mut self, id: &str, update: PatientUpdate) -> StoreResult<Patient> {
        let mut patients = self.patients.clone();
        let patient = patients
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::not_found("patient", id))?;
        update.apply(patient);
        let updated = patient.clone();

        self.commit_patients(patients)?;
        Ok(updated)
    }

    /// Remove a patient. Appointments, invoices and lab tests that reference
    /// the patient are left in place.
    pub fn delete_patient(&mut self, id: &str) -> StoreResult<()> {
        if !self.patients.iter().any(|p| p.id == id) {
            return Err(StoreError::not_found("patient", id));
        }
        let patients = self.patients.iter().filter(|p| p.id != id).cloned().collect();
        self.commit_patients(patients)?;

        tracing::info!(id, "patient deleted");
        Ok(())
    }

    /// Prepend a new record to the patient's history.
    pub fn add_medical_record(
        &mut self,
        patient_id: &str,
        new_record: NewMedicalRecord,
    ) -> StoreResult<MedicalRecord> {
        let now = self.clock.now();
        let mut patients = self.patients.clone();
        let patient = patients
            .iter_mut()
            .find(|p| p.id == patient_id)
            .ok_or_else(|| StoreError::not_found("patient", patient_id))?;

        let record = new_record.into_record(ids::timestamp_id(IdKind::Record, now), now);
        patient.history.insert(0, record.clone());

        self.commit_patients(patients)?;
        tracing::info!(patient_id, record_id = %record.id, "medical record added");
        Ok(record)
    }
}
