//! Appointment schedules for doctors and patients.

use chrono::{DateTime, Utc};

use crate::models::{Appointment, AppointmentStatus};

/// A doctor's appointments, earliest first.
pub fn appointments_for_doctor<'a>(
    appointments: &'a [Appointment],
    doctor_id: &str,
) -> Vec<&'a Appointment> {
    sorted_by_date(appointments.iter().filter(|a| a.doctor_id == doctor_id))
}

/// A patient's appointments, earliest first.
pub fn appointments_for_patient<'a>(
    appointments: &'a [Appointment],
    patient_id: &str,
) -> Vec<&'a Appointment> {
    sorted_by_date(appointments.iter().filter(|a| a.patient_id == patient_id))
}

fn sorted_by_date<'a>(iter: impl Iterator<Item = &'a Appointment>) -> Vec<&'a Appointment> {
    let mut list: Vec<&Appointment> = iter.collect();
    list.sort_by_key(|a| a.date);
    list
}

/// Appointments split around a point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Schedule<'a> {
    /// Still ahead and not cancelled
    pub upcoming: Vec<&'a Appointment>,
    /// Everything else
    pub past: Vec<&'a Appointment>,
}

/// Split `appointments` into upcoming and past relative to `now`, keeping order.
pub fn split_schedule<'a>(appointments: &[&'a Appointment], now: DateTime<Utc>) -> Schedule<'a> {
    let (upcoming, past) = appointments
        .iter()
        .copied()
        .partition(|a| a.date > now && a.status != AppointmentStatus::Cancelled);
    Schedule { upcoming, past }
}
