//! Appointment models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Appointment lifecycle state.
///
/// ```text
/// Scheduled ──complete──► Completed
///     │
///     └──────cancel─────► Cancelled
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "scheduled" => Some(AppointmentStatus::Scheduled),
            "completed" => Some(AppointmentStatus::Completed),
            "cancelled" | "canceled" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }

    /// Completed and Cancelled have no outgoing transitions.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, AppointmentStatus::Scheduled)
    }

    /// Whether `self -> next` is a defined transition.
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        matches!(
            (self, next),
            (AppointmentStatus::Scheduled, AppointmentStatus::Completed)
                | (AppointmentStatus::Scheduled, AppointmentStatus::Cancelled)
        )
    }
}

impl std::fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A booked consultation between a patient and a doctor.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date: DateTime<Utc>,
    pub reason: String,
    pub status: AppointmentStatus,
}

/// Input for booking an appointment. Id and status are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date: DateTime<Utc>,
    pub reason: String,
}

impl NewAppointment {
    /// Every new appointment starts out Scheduled.
    pub fn into_appointment(self, id: String) -> Appointment {
        Appointment {
            id,
            patient_id: self.patient_id,
            patient_name: self.patient_name,
            doctor_id: self.doctor_id,
            doctor_name: self.doctor_name,
            date: self.date,
            reason: self.reason,
            status: AppointmentStatus::Scheduled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transitions() {
        use AppointmentStatus::*;

        assert!(Scheduled.can_transition_to(Completed));
        assert!(Scheduled.can_transition_to(Cancelled));
        assert!(!Scheduled.can_transition_to(Scheduled));
        assert!(!Completed.can_transition_to(Cancelled));
        assert!(!Cancelled.can_transition_to(Scheduled));
        assert!(!Cancelled.can_transition_to(Completed));

        assert!(!Scheduled.is_terminal());
        assert!(Completed.is_terminal());
        assert!(Cancelled.is_terminal());
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(AppointmentStatus::parse("Cancelled"), Some(AppointmentStatus::Cancelled));
        assert_eq!(AppointmentStatus::parse("canceled"), Some(AppointmentStatus::Cancelled));
        assert_eq!(AppointmentStatus::parse("done"), None);
    }
}
