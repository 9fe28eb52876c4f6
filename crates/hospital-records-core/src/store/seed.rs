//! First-run dataset.

use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::ids;
use crate::models::{
    Appointment, AppointmentStatus, Gender, InventoryItem, Invoice, LabTest, MedicalRecord,
    NewPatient, Patient, User, UserRole,
};

const STAFF_JSON: &str = include_str!("../../seed/staff.json");
const PATIENTS_JSON: &str = include_str!("../../seed/patients.json");
const INVOICES_JSON: &str = include_str!("../../seed/invoices.json");
const LABS_JSON: &str = include_str!("../../seed/labs.json");
const INVENTORY_JSON: &str = include_str!("../../seed/inventory.json");

pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

const FIRST_NAMES_MALE: &[&str] = &[
    "Kwame", "Kofi", "Yaw", "Akwasi", "Kwabena", "Kojo", "Kwesi", "Kwadwo", "John", "Emmanuel",
    "Samuel", "Isaac", "Stephen", "Daniel", "Joseph", "Peter", "Paul", "Matthew", "Mark", "Luke",
];
const FIRST_NAMES_FEMALE: &[&str] = &[
    "Adwoa", "Abena", "Akua", "Yaa", "Afia", "Ama", "Akosua", "Esi", "Mary", "Sarah",
    "Elizabeth", "Grace", "Faustina", "Juliana", "Comfort", "Patience", "Hannah", "Esther", "Ruth",
    "Naomi", "Deborah",
];
const LAST_NAMES: &[&str] = &[
    "Mensah", "Osei", "Asante", "Appiah", "Owusu", "Boateng", "Antwi", "Sarpong", "Acheampong",
    "Fosu", "Badu", "Agyemang", "Boakye", "Opoku", "Darko", "Kyei", "Yeboah", "Ansah", "Nartey",
    "Tetteh", "Laryea", "Quartey", "Lamptey", "Addo", "Dadzie", "Eshun", "Aggrey", "Frimpong",
    "Gyasi", "Amponsah", "Nyarko", "Ofori", "Djan", "Sowah", "Tagoe", "Annan", "Armah",
];
const LOCATIONS: &[&str] = &[
    "Amasaman", "Pokuase", "Achimota", "Medie", "Nsawam", "Ofankor", "Tantra Hill", "Ga North",
    "Kotoku", "Sarpeiman", "Dome", "Kwabenya", "Adenta", "Madina", "Legon", "Spintex", "Tesano",
    "Alajo", "Circle",
];
// "None" repeats weight the draw towards healthy patients
const CONDITIONS: &[&str] = &[
    "Hypertension", "Type 2 Diabetes", "Malaria", "Asthma", "Peptic Ulcer", "Sickle Cell", "None",
    "None", "None", "None", "None", "Arthritis", "Glaucoma",
];
const ALLERGIES: &[&str] = &[
    "None", "None", "None", "None", "Penicillin", "Peanuts", "Dust", "Pollen", "Shellfish",
    "Sulfa Drugs", "Latex",
];
const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

#[derive(Deserialize)]
struct SeedPatient {
    id: String,
    #[serde(flatten)]
    details: NewPatient,
}

pub fn admin_profile() -> User {
    User {
        id: "admin-1".into(),
        username: "admin".into(),
        name: "System Administrator".into(),
        role: UserRole::Admin,
        specialization: None,
        department: None,
        contact: None,
        licensure_number: None,
    }
}

pub fn staff() -> serde_json::Result<Vec<User>> {
    serde_json::from_str(STAFF_JSON)
}

pub fn invoices() -> serde_json::Result<Vec<Invoice>> {
    serde_json::from_str(INVOICES_JSON)
}

pub fn labs() -> serde_json::Result<Vec<LabTest>> {
    serde_json::from_str(LABS_JSON)
}

pub fn inventory() -> serde_json::Result<Vec<InventoryItem>> {
    serde_json::from_str(INVENTORY_JSON)
}

/// The fixed patients followed by `mock_count` generated ones.
pub fn patients<R: Rng>(
    now: DateTime<Utc>,
    mock_count: usize,
    rng: &mut R,
) -> serde_json::Result<Vec<Patient>> {
    let seeded: Vec<SeedPatient> = serde_json::from_str(PATIENTS_JSON)?;
    let mut patients: Vec<Patient> = seeded
        .into_iter()
        .map(|seed| seed.details.into_patient(seed.id, now))
        .collect();

    if let Some(first) = patients.first_mut() {
        first.history.push(MedicalRecord {
            id: "rec-1".into(),
            date: now,
            diagnosis: "Hypertension".into(),
            prescription: "Amlodipine 5mg".into(),
            notes: "Patient reports occasional headaches.".into(),
            doctor_id: "doc-1".into(),
            doctor_name: "Dr. John Smith".into(),
        });
    }

    for _ in 0..mock_count {
        let patient = mock_patient(now, rng, |id| patients.iter().any(|p| p.id == id));
        patients.push(patient);
    }
    Ok(patients)
}

pub fn appointments(now: DateTime<Utc>) -> Vec<Appointment> {
    vec![Appointment {
        id: "apt-1".into(),
        patient_id: "pat-1".into(),
        patient_name: "Kwame Mensah".into(),
        doctor_id: "doc-1".into(),
        doctor_name: "Dr. John Smith".into(),
        date: now + Duration::days(1),
        reason: "Regular Checkup".into(),
        status: AppointmentStatus::Scheduled,
    }]
}

fn pick<'a, R: Rng>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool.choose(rng).copied().unwrap_or_default()
}

fn phone_number<R: Rng>(rng: &mut R) -> String {
    format!("0{}", rng.gen_range(233_000_000u32..=932_999_999))
}

fn mock_patient<R, E>(now: DateTime<Utc>, rng: &mut R, exists: E) -> Patient
where
    R: Rng,
    E: Fn(&str) -> bool,
{
    let (gender, first_pool) = if rng.gen_bool(0.5) {
        (Gender::Male, FIRST_NAMES_MALE)
    } else {
        (Gender::Female, FIRST_NAMES_FEMALE)
    };
    let first = pick(rng, first_pool);
    let last = pick(rng, LAST_NAMES);
    let name = format!("{} {}", first, last);
    let id = ids::patient_id(&name, exists, rng);

    let emergency_first = if rng.gen_bool(0.5) {
        pick(rng, FIRST_NAMES_MALE)
    } else {
        pick(rng, FIRST_NAMES_FEMALE)
    };

    let mut details = NewPatient::new(name, rng.gen_range(1..=90), gender, phone_number(rng));
    details.address = pick(rng, LOCATIONS).to_string();
    details.emergency_contact_name = Some(format!("{} {}", emergency_first, last));
    details.emergency_contact_phone = Some(phone_number(rng));
    details.chronic_conditions = Some(pick(rng, CONDITIONS).to_string());
    details.blood_type = Some(pick(rng, BLOOD_TYPES).to_string());
    details.allergies = Some(pick(rng, ALLERGIES).to_string());

    let created_at = now - Duration::milliseconds(rng.gen_range(0..31_536_000_000i64));
    details.into_patient(id, created_at)
}
