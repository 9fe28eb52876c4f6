//! Doctor projections over the staff list.

use crate::models::User;

/// Staff members with the DOCTOR role, in staff order.
pub fn doctors(staff: &[User]) -> Vec<&User> {
    staff.iter().filter(|u| u.is_doctor()).collect()
}

/// Distinct, non-empty doctor specializations, sorted.
pub fn specializations<'a>(doctors: &[&'a User]) -> Vec<&'a str> {
    let mut specs: Vec<&str> = doctors
        .iter()
        .filter_map(|d| d.specialization.as_deref())
        .filter(|s| !s.trim().is_empty())
        .collect();
    specs.sort_unstable();
    specs.dedup();
    specs
}

/// Doctors with exactly `specialization`, or all of them when `None`.
pub fn doctors_by_specialization<'a>(
    doctors: &[&'a User],
    specialization: Option<&str>,
) -> Vec<&'a User> {
    match specialization {
        Some(spec) => doctors
            .iter()
            .copied()
            .filter(|d| d.specialization.as_deref() == Some(spec))
            .collect(),
        None => doctors.to_vec(),
    }
}
