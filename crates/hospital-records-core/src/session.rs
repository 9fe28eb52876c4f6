//! Login, doctor self-registration and role routing.
//!
//! Credentials are compared in plaintext. A successful login yields a
//! [`Session`], whose role picks the dashboard the user may open.

use thiserror::Error;

use crate::models::{NewStaffMember, User, UserRole};
use crate::store::{HospitalStore, StoreError};

/// Login and registration failures. Messages are shown to the user verbatim.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid admin credentials.")]
    InvalidAdminCredentials,

    #[error("Staff user not found.")]
    StaffNotFound,

    #[error("Doctor ID not found.")]
    DoctorNotFound,

    #[error("This login method is for Doctors only.")]
    NotADoctor,

    #[error("Invalid Licensure Number.")]
    InvalidLicensure,

    #[error("Invalid Patient ID or Contact Number. Please check your details.")]
    InvalidPatientCredentials,

    #[error("All fields are required")]
    MissingFields,

    #[error("Username already taken")]
    UsernameTaken,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Which dashboard a session routes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashboard {
    Admin,
    Doctor,
    Patient,
}

/// An authenticated user.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    user: User,
}

impl Session {
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The dashboard for this user's role. Nurses, pharmacists and lab
    /// technicians have none.
    pub fn dashboard(&self) -> Option<Dashboard> {
        match self.user.role {
            UserRole::Admin => Some(Dashboard::Admin),
            UserRole::Doctor => Some(Dashboard::Doctor),
            UserRole::Patient => Some(Dashboard::Patient),
            UserRole::Nurse | UserRole::Pharmacist | UserRole::LabTechnician => None,
        }
    }
}

/// Username/password login for the admin, or username-only login for doctors.
pub fn login_staff(
    store: &HospitalStore,
    username: &str,
    password: &str,
) -> Result<Session, AuthError> {
    let admin = store.admin_profile();
    if username == admin.username {
        if password == store.admin_password() {
            tracing::info!(username, "admin logged in");
            return Ok(Session { user: admin.clone() });
        }
        tracing::warn!(username, "admin login rejected");
        return Err(AuthError::InvalidAdminCredentials);
    }

    let doctor = store
        .staff()
        .iter()
        .find(|u| u.is_doctor() && u.username == username)
        .ok_or(AuthError::StaffNotFound)?;
    tracing::info!(id = %doctor.id, "doctor logged in");
    Ok(Session {
        user: doctor.clone(),
    })
}

/// Login by doctor id (or username) and licensure number.
pub fn login_doctor(
    store: &HospitalStore,
    id_or_username: &str,
    licensure_number: &str,
) -> Result<Session, AuthError> {
    let member = store
        .staff()
        .iter()
        .find(|u| u.id == id_or_username || u.username == id_or_username)
        .ok_or(AuthError::DoctorNotFound)?;

    if !member.is_doctor() {
        return Err(AuthError::NotADoctor);
    }
    if member.licensure_number.as_deref() != Some(licensure_number) {
        tracing::warn!(id = %member.id, "licensure mismatch");
        return Err(AuthError::InvalidLicensure);
    }

    tracing::info!(id = %member.id, "doctor logged in");
    Ok(Session {
        user: member.clone(),
    })
}

/// Login by patient id and registered contact number.
pub fn login_patient(
    store: &HospitalStore,
    patient_id: &str,
    contact: &str,
) -> Result<Session, AuthError> {
    let patient = store
        .patients()
        .iter()
        .find(|p| p.id == patient_id && p.contact == contact)
        .ok_or(AuthError::InvalidPatientCredentials)?;

    tracing::info!(id = %patient.id, "patient logged in");
    Ok(Session {
        user: User {
            id: patient.id.clone(),
            username: patient.id.clone(),
            name: patient.name.clone(),
            role: UserRole::Patient,
            specialization: None,
            department: None,
            contact: None,
            licensure_number: None,
        },
    })
}

/// Doctor self-registration form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoctorRegistration {
    pub name: String,
    pub username: String,
    pub specialization: String,
    pub licensure_number: String,
}

/// Register a new doctor. The username must not belong to a doctor or the admin.
pub fn register_doctor(
    store: &mut HospitalStore,
    registration: DoctorRegistration,
) -> Result<User, AuthError> {
    let DoctorRegistration {
        name,
        username,
        specialization,
        licensure_number,
    } = registration;

    if [&name, &username, &specialization, &licensure_number]
        .iter()
        .any(|field| field.is_empty())
    {
        return Err(AuthError::MissingFields);
    }

    let taken = store.admin_profile().username == username
        || store
            .staff()
            .iter()
            .any(|u| u.is_doctor() && u.username == username);
    if taken {
        return Err(AuthError::UsernameTaken);
    }

    let doctor = store.add_doctor(NewStaffMember {
        username,
        name,
        specialization: Some(specialization),
        licensure_number: Some(licensure_number),
        ..Default::default()
    })?;
    Ok(doctor)
}

#[cfg(test)]
pub(crate) fn session_for(user: User) -> Session {
    Session { user }
}
