//! Patient portal: own record, bookings and notifications.

use chrono::{DateTime, Utc};

use crate::models::{
    AppNotification, Appointment, AppointmentStatus, NewAppointment, Patient, User,
};
use crate::query::{self, Schedule};
use crate::store::{HospitalStore, StoreError, StoreResult};

/// Appointment request from the booking form.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub doctor_id: String,
    pub date: DateTime<Utc>,
    pub reason: String,
}

/// Patient self-service: own record, appointments and notifications.
pub struct PatientPortal<'a> {
    store: &'a mut HospitalStore,
    user: User,
}

impl<'a> PatientPortal<'a> {
    pub(crate) fn new(store: &'a mut HospitalStore, user: User) -> Self {
        Self { store, user }
    }

    /// The logged-in patient's record.
    pub fn record(&self) -> StoreResult<&Patient> {
        self.store
            .patient(&self.user.id)
            .ok_or_else(|| StoreError::not_found("patient", &self.user.id))
    }

    /// Own appointments split into upcoming and past at the current time.
    pub fn appointments(&self) -> Schedule<'_> {
        let mine = query::appointments_for_patient(self.store.appointments(), &self.user.id);
        query::split_schedule(&mine, self.store.now())
    }

    pub fn specializations(&self) -> Vec<&str> {
        query::specializations(&query::doctors(self.store.staff()))
    }

    pub fn doctors(&self, specialization: Option<&str>) -> Vec<&User> {
        query::doctors_by_specialization(&query::doctors(self.store.staff()), specialization)
    }

    /// Book with a doctor; patient and doctor names are filled in here.
    pub fn book(&mut self, request: BookingRequest) -> StoreResult<Appointment> {
        let doctor_name = self
            .store
            .staff_member(&request.doctor_id)
            .filter(|u| u.is_doctor())
            .map(|u| u.name.clone())
            .ok_or_else(|| StoreError::not_found("doctor", &request.doctor_id))?;

        self.store.add_appointment(NewAppointment {
            patient_id: self.user.id.clone(),
            patient_name: self.user.name.clone(),
            doctor_id: request.doctor_id,
            doctor_name,
            date: request.date,
            reason: request.reason,
        })
    }

    /// Cancel one of this patient's appointments.
    pub fn cancel(&mut self, appointment_id: &str) -> StoreResult<Appointment> {
        let owned = self
            .store
            .appointment(appointment_id)
            .is_some_and(|a| a.patient_id == self.user.id);
        if !owned {
            return Err(StoreError::not_found("appointment", appointment_id));
        }
        self.store
            .update_appointment_status(appointment_id, AppointmentStatus::Cancelled)
    }

    pub fn notifications(&self) -> Vec<&AppNotification> {
        query::notifications_for_user(self.store.notifications(), &self.user.id)
    }

    pub fn unread_count(&self) -> usize {
        query::unread_count(&self.notifications())
    }

    pub fn mark_notification_as_read(&mut self, id: &str) -> StoreResult<()> {
        let owned = self
            .store
            .notifications()
            .iter()
            .any(|n| n.id == id && n.user_id == self.user.id);
        if !owned {
            return Err(StoreError::not_found("notification", id));
        }
        self.store.mark_notification_as_read(id)
    }
}
