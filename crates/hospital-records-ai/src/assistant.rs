//! Text generation seam and the fallback-wrapping assistant.

use hospital_records_core::models::Patient;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prompts::{make_diagnosis_prompt, make_summary_prompt};

pub const UNAVAILABLE_MESSAGE: &str = "AI service is currently unavailable.";
pub const EMPTY_SUMMARY_MESSAGE: &str = "Unable to generate summary.";
pub const EMPTY_SUGGESTIONS_MESSAGE: &str = "Unable to generate suggestions.";

/// Generation errors.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    #[error("Generation failed: {0}")]
    Generation(String),
}

pub type AiResult<T> = Result<T, AiError>;

/// Text in, text out.
pub trait TextGenerator {
    fn generate(&self, prompt: &str) -> AiResult<String>;
}

/// The subset of a patient sent to the generator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientSnapshot {
    pub name: String,
    pub age: u32,
    pub gender: String,
    #[serde(rename = "medicalHistory")]
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    pub diagnosis: String,
    /// RFC 3339
    pub date: String,
    pub notes: String,
}

impl From<&Patient> for PatientSnapshot {
    fn from(patient: &Patient) -> Self {
        Self {
            name: patient.name.clone(),
            age: patient.age,
            gender: patient.gender.as_str().to_string(),
            history: patient
                .history
                .iter()
                .map(|r| HistoryEntry {
                    diagnosis: r.diagnosis.clone(),
                    date: r.date.to_rfc3339(),
                    notes: r.notes.clone(),
                })
                .collect(),
        }
    }
}

/// Wraps a generator so callers always get displayable text.
pub struct AiAssistant<G> {
    generator: G,
}

impl<G: TextGenerator> AiAssistant<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Summary of a patient's record for a doctor's review.
    pub fn summarize(&self, patient: &Patient) -> String {
        let snapshot = PatientSnapshot::from(patient);
        let prompt = match serde_json::to_string(&snapshot) {
            Ok(json) => make_summary_prompt(&json),
            Err(e) => {
                tracing::warn!(error = %e, "could not serialize patient snapshot");
                return UNAVAILABLE_MESSAGE.to_string();
            }
        };
        self.complete(&prompt, EMPTY_SUMMARY_MESSAGE)
    }

    /// Candidate diagnoses and confirmatory tests for the given symptoms.
    pub fn suggest_diagnosis(&self, symptoms: &str, age: u32, gender: &str) -> String {
        let prompt = make_diagnosis_prompt(symptoms, age, gender);
        self.complete(&prompt, EMPTY_SUGGESTIONS_MESSAGE)
    }

    fn complete(&self, prompt: &str, empty_fallback: &str) -> String {
        match self.generator.generate(prompt) {
            Ok(text) if text.trim().is_empty() => empty_fallback.to_string(),
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "text generation failed");
                UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offline::{FailingGenerator, MockGenerator};
    use chrono::{TimeZone, Utc};
    use hospital_records_core::models::{Gender, MedicalRecord, NewPatient};

    fn patient() -> Patient {
        let created = Utc.with_ymd_and_hms(2024, 1, 10, 8, 0, 0).unwrap();
        let mut patient = NewPatient::new("Kwame Mensah", 45, Gender::Male, "0244123456")
            .into_patient("KM1234".into(), created);
        patient.history.push(MedicalRecord {
            id: "rec-1".into(),
            date: created,
            diagnosis: "Hypertension".into(),
            prescription: "Amlodipine 5mg".into(),
            notes: "Occasional headaches".into(),
            doctor_id: "doc-1".into(),
            doctor_name: "Dr. Kwaku Boateng".into(),
        });
        patient
    }

    #[test]
    fn test_snapshot_shape() {
        let json = serde_json::to_string(&PatientSnapshot::from(&patient())).unwrap();
        assert!(json.contains("\"medicalHistory\""));
        assert!(json.contains("\"diagnosis\":\"Hypertension\""));
        assert!(!json.contains("prescription"));
        assert!(!json.contains("contact"));
    }

    #[test]
    fn test_summary_passes_through() {
        let assistant = AiAssistant::new(MockGenerator::new("Stable hypertensive patient."));
        assert_eq!(assistant.summarize(&patient()), "Stable hypertensive patient.");
        assert!(assistant.generator.last_prompt().unwrap().contains("Kwame Mensah"));
    }

    #[test]
    fn test_empty_responses_fall_back() {
        let assistant = AiAssistant::new(MockGenerator::new("  "));
        assert_eq!(assistant.summarize(&patient()), EMPTY_SUMMARY_MESSAGE);
        assert_eq!(
            assistant.suggest_diagnosis("cough", 30, "Female"),
            EMPTY_SUGGESTIONS_MESSAGE
        );
    }

    #[test]
    fn test_failure_falls_back() {
        let assistant = AiAssistant::new(FailingGenerator);
        assert_eq!(assistant.summarize(&patient()), UNAVAILABLE_MESSAGE);
        assert_eq!(
            assistant.suggest_diagnosis("cough", 30, "Female"),
            UNAVAILABLE_MESSAGE
        );
    }
}
