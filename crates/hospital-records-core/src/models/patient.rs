//! Patient models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Patient gender as captured at registration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            "other" => Some(Gender::Other),
            _ => None,
        }
    }
}

/// A registered patient with their embedded medical history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Initials + 4 digits (e.g. "KM4821"), or "P#####" for unnamed registrations
    pub id: String,
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub contact: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chronic_conditions: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<String>,
    /// Weak reference to a doctor's user id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_doctor_id: Option<String>,
    /// Medical records, newest first
    #[serde(default)]
    pub history: Vec<MedicalRecord>,
    pub created_at: DateTime<Utc>,
}

impl Patient {
    /// Most recent activity: the newest record's date, else registration time.
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.history
            .first()
            .map(|record| record.date)
            .unwrap_or(self.created_at)
    }
}

/// A single consultation entry. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
    pub doctor_id: String,
    /// Doctor display name at the time of writing
    pub doctor_name: String,
}

/// Input for registering a patient. Id, creation time and history are assigned by the store.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub contact: String,
    pub address: String,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub chronic_conditions: Option<String>,
    pub blood_type: Option<String>,
    pub allergies: Option<String>,
    pub assigned_doctor_id: Option<String>,
}

impl NewPatient {
    /// Create a registration with the required fields only.
    pub fn new(name: impl Into<String>, age: u32, gender: Gender, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            gender,
            contact: contact.into(),
            address: String::new(),
            emergency_contact_name: None,
            emergency_contact_phone: None,
            chronic_conditions: None,
            blood_type: None,
            allergies: None,
            assigned_doctor_id: None,
        }
    }

    pub fn into_patient(self, id: String, created_at: DateTime<Utc>) -> Patient {
        Patient {
            id,
            name: self.name,
            age: self.age,
            gender: self.gender,
            contact: self.contact,
            address: self.address,
            emergency_contact_name: self.emergency_contact_name,
            emergency_contact_phone: self.emergency_contact_phone,
            chronic_conditions: self.chronic_conditions,
            blood_type: self.blood_type,
            allergies: self.allergies,
            assigned_doctor_id: self.assigned_doctor_id,
            history: Vec::new(),
            created_at,
        }
    }
}

/// Partial patient update; `Some` fields overwrite, `None` fields are kept.
///
/// Id, history and creation time are not updatable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientUpdate {
    pub name: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub contact: Option<String>,
    pub address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub chronic_conditions: Option<String>,
    pub blood_type: Option<String>,
    pub allergies: Option<String>,
    pub assigned_doctor_id: Option<String>,
}

impl PatientUpdate {
    /// Shallow-merge into an existing patient.
    pub fn apply(self, patient: &mut Patient) {
        if let Some(name) = self.name {
            patient.name = name;
        }
        if let Some(age) = self.age {
            patient.age = age;
        }
        if let Some(gender) = self.gender {
            patient.gender = gender;
        }
        if let Some(contact) = self.contact {
            patient.contact = contact;
        }
        if let Some(address) = self.address {
            patient.address = address;
        }
        if self.emergency_contact_name.is_some() {
            patient.emergency_contact_name = self.emergency_contact_name;
        }
        if self.emergency_contact_phone.is_some() {
            patient.emergency_contact_phone = self.emergency_contact_phone;
        }
        if self.chronic_conditions.is_some() {
            patient.chronic_conditions = self.chronic_conditions;
        }
        if self.blood_type.is_some() {
            patient.blood_type = self.blood_type;
        }
        if self.allergies.is_some() {
            patient.allergies = self.allergies;
        }
        if self.assigned_doctor_id.is_some() {
            patient.assigned_doctor_id = self.assigned_doctor_id;
        }
    }
}

/// Input for a new medical record. Id and date are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMedicalRecord {
    pub diagnosis: String,
    pub prescription: String,
    pub notes: String,
    pub doctor_id: String,
    pub doctor_name: String,
}

impl NewMedicalRecord {
    pub fn into_record(self, id: String, date: DateTime<Utc>) -> MedicalRecord {
        MedicalRecord {
            id,
            date,
            diagnosis: self.diagnosis,
            prescription: self.prescription,
            notes: self.notes,
            doctor_id: self.doctor_id,
            doctor_name: self.doctor_name,
        }
    }
}
