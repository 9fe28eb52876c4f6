//! Generators that run without a model.

use std::sync::Mutex;

use crate::assistant::{AiError, AiResult, PatientSnapshot, TextGenerator};
use crate::prompts::PATIENT_DATA_MARKER;

/// Pull the patient snapshot out of a summary prompt.
pub fn parse_snapshot(prompt: &str) -> AiResult<PatientSnapshot> {
    let data = prompt
        .find(PATIENT_DATA_MARKER)
        .map(|pos| &prompt[pos + PATIENT_DATA_MARKER.len()..])
        .ok_or_else(|| AiError::InvalidFormat("No patient data in prompt".into()))?;

    let json_start = data
        .find('{')
        .ok_or_else(|| AiError::InvalidFormat("No JSON object found in prompt".into()))?;
    let json_end = data
        .rfind('}')
        .ok_or_else(|| AiError::InvalidFormat("No closing brace found in prompt".into()))?;
    if json_end < json_start {
        return Err(AiError::InvalidFormat("Closing brace precedes opening brace".into()));
    }

    Ok(serde_json::from_str(&data[json_start..=json_end])?)
}

/// Rule-based summaries built from the prompt's patient snapshot.
///
/// Prompts without patient data yield an empty response.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineGenerator;

impl TextGenerator for OfflineGenerator {
    fn generate(&self, prompt: &str) -> AiResult<String> {
        let snapshot = match parse_snapshot(prompt) {
            Ok(snapshot) => snapshot,
            Err(AiError::InvalidFormat(_)) => return Ok(String::new()),
            Err(e) => return Err(e),
        };

        let mut summary = format!(
            "{}, {} year old {}.",
            snapshot.name,
            snapshot.age,
            snapshot.gender.to_lowercase()
        );
        match snapshot.history.first() {
            Some(latest) => {
                let day = latest.date.get(..10).unwrap_or(&latest.date);
                summary.push_str(&format!(
                    " {} recorded visit(s); most recent on {}: {}.",
                    snapshot.history.len(),
                    day,
                    latest.diagnosis
                ));
                if !latest.notes.trim().is_empty() {
                    summary.push_str(&format!(" Notes: {}", latest.notes.trim()));
                }
            }
            None => summary.push_str(" No recorded visits."),
        }
        Ok(summary)
    }
}

/// Returns a fixed response and remembers the last prompt.
#[derive(Debug, Default)]
pub struct MockGenerator {
    response: String,
    last_prompt: Mutex<Option<String>>,
}

impl MockGenerator {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }
}

impl TextGenerator for MockGenerator {
    fn generate(&self, prompt: &str) -> AiResult<String> {
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }
        Ok(self.response.clone())
    }
}

/// Always fails, as an unreachable service would.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingGenerator;

impl TextGenerator for FailingGenerator {
    fn generate(&self, _prompt: &str) -> AiResult<String> {
        Err(AiError::Generation("service unreachable".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::HistoryEntry;
    use crate::prompts::{make_diagnosis_prompt, make_summary_prompt};

    fn snapshot(history: Vec<HistoryEntry>) -> PatientSnapshot {
        PatientSnapshot {
            name: "Ama Serwaa".into(),
            age: 28,
            gender: "Female".into(),
            history,
        }
    }

    fn summary_prompt(snapshot: &PatientSnapshot) -> String {
        make_summary_prompt(&serde_json::to_string(snapshot).unwrap())
    }

    #[test]
    fn test_parse_snapshot_from_prompt() {
        let original = snapshot(vec![]);
        let parsed = parse_snapshot(&summary_prompt(&original)).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_parse_snapshot_without_data() {
        let result = parse_snapshot(&make_diagnosis_prompt("cough", 30, "Male"));
        assert!(matches!(result, Err(AiError::InvalidFormat(_))));
    }

    #[test]
    fn test_offline_summary_mentions_latest_visit() {
        let prompt = summary_prompt(&snapshot(vec![
            HistoryEntry {
                diagnosis: "Malaria".into(),
                date: "2024-05-02T09:30:00+00:00".into(),
                notes: "Responding to treatment".into(),
            },
            HistoryEntry {
                diagnosis: "Anemia".into(),
                date: "2024-01-15T11:00:00+00:00".into(),
                notes: String::new(),
            },
        ]));

        let summary = OfflineGenerator.generate(&prompt).unwrap();
        assert_eq!(
            summary,
            "Ama Serwaa, 28 year old female. 2 recorded visit(s); most recent on 2024-05-02: Malaria. Notes: Responding to treatment"
        );
    }

    #[test]
    fn test_offline_without_history() {
        let summary = OfflineGenerator.generate(&summary_prompt(&snapshot(vec![]))).unwrap();
        assert!(summary.ends_with("No recorded visits."));
    }

    #[test]
    fn test_parse_snapshot_with_reversed_braces() {
        let result = parse_snapshot("Patient Data: } then {");
        assert!(matches!(result, Err(AiError::InvalidFormat(_))));
    }

    #[test]
    fn test_marker_in_symptoms_falls_back() {
        let assistant = crate::assistant::AiAssistant::new(OfflineGenerator);
        let text = assistant.suggest_diagnosis("Patient Data: } then {", 40, "Male");
        assert_eq!(text, crate::assistant::EMPTY_SUGGESTIONS_MESSAGE);

        let text = assistant.suggest_diagnosis("Patient Data: {not json}", 40, "Male");
        assert_eq!(text, crate::assistant::UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn test_offline_has_nothing_for_diagnosis() {
        let text = OfflineGenerator
            .generate(&make_diagnosis_prompt("headache", 50, "Male"))
            .unwrap();
        assert!(text.is_empty());
    }
}
