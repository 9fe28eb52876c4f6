//! Patient directory and medical-history filters.

use super::{contains_ignore_case, DateRange};
use crate::models::{MedicalRecord, Patient};

/// Patient directory criteria. The default matches every patient.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientFilter {
    /// Substring of the patient's name or id
    pub search: String,
    /// Exact assigned doctor id
    pub doctor_id: Option<String>,
    /// Window applied to the patient's last activity
    pub range: DateRange,
}

/// Patients matching `filter`, most recently active first.
///
/// Patients with equal activity keep their input order.
pub fn filter_patients<'a>(patients: &'a [Patient], filter: &PatientFilter) -> Vec<&'a Patient> {
    let needle = filter.search.to_lowercase();

    let mut matches: Vec<&Patient> = patients
        .iter()
        .filter(|p| contains_ignore_case(&p.name, &needle) || contains_ignore_case(&p.id, &needle))
        .filter(|p| match &filter.doctor_id {
            Some(doctor_id) => p.assigned_doctor_id.as_deref() == Some(doctor_id.as_str()),
            None => true,
        })
        .filter(|p| filter.range.contains(p.last_activity()))
        .collect();

    matches.sort_by(|a, b| b.last_activity().cmp(&a.last_activity()));
    matches
}

/// Medical-history criteria. The default matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryFilter {
    /// Substring of diagnosis, notes or prescription
    pub search: String,
    /// Exact doctor display name
    pub doctor_name: Option<String>,
    pub range: DateRange,
}

/// Records matching `filter`, in history order.
pub fn filter_history<'a>(
    history: &'a [MedicalRecord],
    filter: &HistoryFilter,
) -> Vec<&'a MedicalRecord> {
    let needle = filter.search.to_lowercase();

    history
        .iter()
        .filter(|r| {
            contains_ignore_case(&r.diagnosis, &needle)
                || contains_ignore_case(&r.notes, &needle)
                || contains_ignore_case(&r.prescription, &needle)
        })
        .filter(|r| match &filter.doctor_name {
            Some(name) => r.doctor_name == *name,
            None => true,
        })
        .filter(|r| filter.range.contains(r.date))
        .collect()
}

/// Distinct doctor names appearing in a history, first-seen order.
pub fn history_doctors(history: &[MedicalRecord]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for record in history {
        if !names.contains(&record.doctor_name.as_str()) {
            names.push(&record.doctor_name);
        }
    }
    names
}
