//! User and staff models.

use serde::{Deserialize, Serialize};

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    Admin,
    Doctor,
    Patient,
    Nurse,
    Pharmacist,
    LabTechnician,
}

impl UserRole {
    /// Wire name used in persisted JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::Doctor => "DOCTOR",
            UserRole::Patient => "PATIENT",
            UserRole::Nurse => "NURSE",
            UserRole::Pharmacist => "PHARMACIST",
            UserRole::LabTechnician => "LAB_TECHNICIAN",
        }
    }

    /// Parse a role from its wire name (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "ADMIN" => Some(UserRole::Admin),
            "DOCTOR" => Some(UserRole::Doctor),
            "PATIENT" => Some(UserRole::Patient),
            "NURSE" => Some(UserRole::Nurse),
            "PHARMACIST" => Some(UserRole::Pharmacist),
            "LAB_TECHNICIAN" => Some(UserRole::LabTechnician),
            _ => None,
        }
    }
}

/// A staff member, the admin, or a patient session identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    /// Login name; unique among staff and admin at registration time
    pub username: String,
    /// Display name
    pub name: String,
    pub role: UserRole,
    /// Clinical specialization (doctors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    /// Department (non-doctor staff)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    /// Medical council licensure number (doctors)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licensure_number: Option<String>,
}

impl User {
    pub fn is_doctor(&self) -> bool {
        self.role == UserRole::Doctor
    }
}

/// Input for registering a staff member. The id is assigned by the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewStaffMember {
    pub username: String,
    pub name: String,
    pub specialization: Option<String>,
    pub department: Option<String>,
    pub contact: Option<String>,
    pub licensure_number: Option<String>,
}

impl NewStaffMember {
    /// Build the stored user with the given id and role.
    pub fn into_user(self, id: String, role: UserRole) -> User {
        User {
            id,
            username: self.username,
            name: self.name,
            role,
            specialization: self.specialization,
            department: self.department,
            contact: self.contact,
            licensure_number: self.licensure_number,
        }
    }
}

/// Partial staff update; `Some` fields overwrite, `None` fields are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StaffUpdate {
    pub username: Option<String>,
    pub name: Option<String>,
    pub role: Option<UserRole>,
    pub specialization: Option<String>,
    pub department: Option<String>,
    pub contact: Option<String>,
    pub licensure_number: Option<String>,
}

impl StaffUpdate {
    /// Shallow-merge into an existing user.
    pub fn apply(self, user: &mut User) {
        if let Some(username) = self.username {
            user.username = username;
        }
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
        if let Some(specialization) = self.specialization {
            user.specialization = Some(specialization);
        }
        if let Some(department) = self.department {
            user.department = Some(department);
        }
        if let Some(contact) = self.contact {
            user.contact = Some(contact);
        }
        if let Some(licensure_number) = self.licensure_number {
            user.licensure_number = Some(licensure_number);
        }
    }
}
