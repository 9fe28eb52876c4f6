//! Prompts for the clinical text assistant.

/// Facility named in the summary persona.
pub const HOSPITAL_NAME: &str = "Amasaman Government Hospital";

/// Marker preceding the JSON patient snapshot in a summary prompt.
pub const PATIENT_DATA_MARKER: &str = "Patient Data: ";

/// Prompt asking for a doctor-facing summary of `patient_json`.
pub fn make_summary_prompt(patient_json: &str) -> String {
    format!(
        r#"You are a helpful medical administrative assistant for {}.
Analyze the following patient data and generate a concise medical summary for a doctor's review.
Highlight chronic conditions if any, recent visits, and potential risk factors.
Keep it professional and clinical.

{}{}"#,
        HOSPITAL_NAME, PATIENT_DATA_MARKER, patient_json
    )
}

/// Prompt asking for candidate diagnoses and confirmatory tests.
pub fn make_diagnosis_prompt(symptoms: &str, age: u32, gender: &str) -> String {
    format!(
        r#"You are a clinical decision support system.
Based on the symptoms provided, suggest 3 potential diagnoses and recommend 3 standard tests to confirm.

Patient Demographics: Age {}, {}
Reported Symptoms: {}

Format the response as markdown with clear sections for 'Potential Diagnoses' and 'Recommended Tests'.
Add a disclaimer that this is AI-assisted and requires professional verification."#,
        age, gender, symptoms
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_prompt() {
        let prompt = make_summary_prompt(r#"{"name":"Kwame Mensah"}"#);
        assert!(prompt.contains(HOSPITAL_NAME));
        assert!(prompt.contains("risk factors"));
        assert!(prompt.ends_with(r#"Patient Data: {"name":"Kwame Mensah"}"#));
    }

    #[test]
    fn test_diagnosis_prompt() {
        let prompt = make_diagnosis_prompt("fever, joint pain", 34, "Female");
        assert!(prompt.contains("Age 34, Female"));
        assert!(prompt.contains("Reported Symptoms: fever, joint pain"));
        assert!(prompt.contains("Recommended Tests"));
        assert!(!prompt.contains(PATIENT_DATA_MARKER));
    }
}
