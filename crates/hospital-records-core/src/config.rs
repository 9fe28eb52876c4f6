//! Store configuration.
//!
//! Environment variables (a `.env` file is honoured):
//! - `HOSPITAL_DB_PATH`: SQLite file path (default: "hospital_records.db")
//! - `HOSPITAL_MOCK_PATIENTS`: number of random patients added to the first-run
//!   seed (default: 245)

use std::path::PathBuf;

pub const DEFAULT_DB_PATH: &str = "hospital_records.db";
pub const DEFAULT_MOCK_PATIENTS: usize = 245;

/// Settings for opening a [`crate::HospitalStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    /// Randomly generated patients appended to the fixed seed on first run
    pub mock_patient_count: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            mock_patient_count: DEFAULT_MOCK_PATIENTS,
        }
    }
}

impl StoreConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let db_path = lookup("HOSPITAL_DB_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.db_path);

        let mock_patient_count = match lookup("HOSPITAL_MOCK_PATIENTS") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "invalid HOSPITAL_MOCK_PATIENTS, using default");
                defaults.mock_patient_count
            }),
            None => defaults.mock_patient_count,
        };

        Self {
            db_path,
            mock_patient_count,
        }
    }

    /// Configuration with no generated patients, so the seed is fully fixed.
    pub fn fixed_seed() -> Self {
        Self {
            mock_patient_count: 0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[]));
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.mock_patient_count, 245);
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("HOSPITAL_DB_PATH", "/tmp/agh.db"),
            ("HOSPITAL_MOCK_PATIENTS", "12"),
        ]));
        assert_eq!(config.db_path, PathBuf::from("/tmp/agh.db"));
        assert_eq!(config.mock_patient_count, 12);
    }

    #[test]
    fn test_invalid_count_falls_back() {
        let config = StoreConfig::from_lookup(lookup(&[("HOSPITAL_MOCK_PATIENTS", "lots")]));
        assert_eq!(config.mock_patient_count, DEFAULT_MOCK_PATIENTS);
    }
}
