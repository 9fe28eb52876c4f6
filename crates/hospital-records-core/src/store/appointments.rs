//! Appointment booking and status workflow.

use super::{HospitalStore, StoreError, StoreResult};
use crate::ids::{self, IdKind};
use crate::models::{Appointment, AppointmentStatus, NewAppointment, NotificationKind};

pub const BOOKING_TITLE: &str = "New Appointment Request";
pub const STATUS_UPDATE_TITLE: &str = "Appointment Update";

impl HospitalStore {
    /// Book an appointment and notify the doctor.
    ///
    /// The appointment is persisted before the notification; if the
    /// notification write fails the booking stands and the error is returned.
    pub fn add_appointment(&mut self, new_appointment: NewAppointment) -> StoreResult<Appointment> {
        let id = ids::timestamp_id(IdKind::Appointment, self.clock.now());
        let appointment = new_appointment.into_appointment(id);

        let mut appointments = self.appointments.clone();
        appointments.push(appointment.clone());
        self.commit_appointments(appointments)?;
        tracing::info!(
            id = %appointment.id,
            patient_id = %appointment.patient_id,
            doctor_id = %appointment.doctor_id,
            "appointment booked"
        );

        let message = format!(
            "{} has booked an appointment for {}. Reason: {}",
            appointment.patient_name,
            appointment.date.format("%Y-%m-%d %H:%M"),
            appointment.reason
        );
        self.dispatch_notification(
            &appointment.doctor_id,
            BOOKING_TITLE,
            message,
            NotificationKind::Info,
        )?;

        Ok(appointment)
    }

    /// Move an appointment out of `Scheduled` and notify the patient.
    pub fn update_appointment_status(
        &mut self,
        id: &str,
        status: AppointmentStatus,
    ) -> StoreResult<Appointment> {
        let mut appointments = self.appointments.clone();
        let appointment = appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| StoreError::not_found("appointment", id))?;

        if !appointment.status.can_transition_to(status) {
            tracing::warn!(id, from = %appointment.status, to = %status, "rejected status change");
            return Err(StoreError::InvalidTransition {
                from: appointment.status,
                to: status,
            });
        }
        appointment.status = status;
        let updated = appointment.clone();
        self.commit_appointments(appointments)?;

        let message = format!(
            "Your appointment with {} on {} has been {}.",
            updated.doctor_name,
            updated.date.format("%Y-%m-%d"),
            status
        );
        let kind = match status {
            AppointmentStatus::Cancelled => NotificationKind::Error,
            _ => NotificationKind::Success,
        };
        self.dispatch_notification(&updated.patient_id, STATUS_UPDATE_TITLE, message, kind)?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SteppingClock;
    use crate::db::Database;
    use chrono::{Duration, TimeZone, Utc};

    fn store() -> HospitalStore {
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        HospitalStore::with_database(
            Database::open_in_memory().unwrap(),
            0,
            Box::new(SteppingClock::starting_at(start)),
        )
        .unwrap()
    }

    fn booking() -> NewAppointment {
        NewAppointment {
            patient_id: "pat-2".into(),
            patient_name: "Ama Serwaa".into(),
            doctor_id: "doc-2".into(),
            doctor_name: "Dr. Sarah Osei".into(),
            date: Utc.with_ymd_and_hms(2024, 6, 10, 14, 30, 0).unwrap(),
            reason: "Follow-up".into(),
        }
    }

    #[test]
    fn test_booking_notifies_doctor() {
        let mut store = store();
        let appointment = store.add_appointment(booking()).unwrap();

        assert_eq!(appointment.status, AppointmentStatus::Scheduled);
        assert!(appointment.id.starts_with("apt-"));

        let notification = &store.notifications()[0];
        assert_eq!(notification.user_id, "doc-2");
        assert_eq!(notification.title, BOOKING_TITLE);
        assert_eq!(notification.kind, NotificationKind::Info);
        assert_eq!(
            notification.message,
            "Ama Serwaa has booked an appointment for 2024-06-10 14:30. Reason: Follow-up"
        );
    }

    #[test]
    fn test_cancel_notifies_patient_with_error() {
        let mut store = store();
        let appointment = store.add_appointment(booking()).unwrap();

        let cancelled = store
            .update_appointment_status(&appointment.id, AppointmentStatus::Cancelled)
            .unwrap();
        assert_eq!(cancelled.status, AppointmentStatus::Cancelled);

        let notification = &store.notifications()[0];
        assert_eq!(notification.user_id, "pat-2");
        assert_eq!(notification.title, STATUS_UPDATE_TITLE);
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(
            notification.message,
            "Your appointment with Dr. Sarah Osei on 2024-06-10 has been Cancelled."
        );
    }

    #[test]
    fn test_complete_notifies_patient_with_success() {
        let mut store = store();
        store
            .update_appointment_status("apt-1", AppointmentStatus::Completed)
            .unwrap();

        let notification = &store.notifications()[0];
        assert_eq!(notification.user_id, "pat-1");
        assert_eq!(notification.kind, NotificationKind::Success);
    }

    #[test]
    fn test_terminal_states_reject_changes() {
        let mut store = store();
        store
            .update_appointment_status("apt-1", AppointmentStatus::Completed)
            .unwrap();
        let notifications = store.notifications().len();

        let result = store.update_appointment_status("apt-1", AppointmentStatus::Cancelled);
        assert!(matches!(
            result,
            Err(StoreError::InvalidTransition {
                from: AppointmentStatus::Completed,
                to: AppointmentStatus::Cancelled
            })
        ));
        assert_eq!(store.notifications().len(), notifications);
        assert_eq!(
            store.appointment("apt-1").map(|a| a.status),
            Some(AppointmentStatus::Completed)
        );
    }

    #[test]
    fn test_missing_appointment_sends_nothing() {
        let mut store = store();
        let result = store.update_appointment_status("apt-0", AppointmentStatus::Cancelled);
        assert!(matches!(result, Err(StoreError::NotFound { .. })));
        assert!(store.notifications().is_empty());
    }

    #[test]
    fn test_seed_appointment_is_tomorrow() {
        let store = store();
        let start = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
        let seeded = store.appointment("apt-1").unwrap();
        assert_eq!(seeded.date, start + Duration::days(1));
    }
}
