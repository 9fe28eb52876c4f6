//! Entity store integration tests.

use chrono::{Duration, TimeZone, Utc};
use hospital_records_core::db::{CollectionKey, Database};
use hospital_records_core::models::{
    AppointmentStatus, Gender, NewAppointment, NewMedicalRecord, NewPatient, NotificationKind,
    Patient,
};
use hospital_records_core::{HospitalStore, SteppingClock, StoreConfig, StoreError};

fn test_store() -> HospitalStore {
    let start = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    HospitalStore::with_database(
        Database::open_in_memory().unwrap(),
        0,
        Box::new(SteppingClock::starting_at(start)),
    )
    .unwrap()
}

fn booking(patient_id: &str, patient_name: &str) -> NewAppointment {
    NewAppointment {
        patient_id: patient_id.to_string(),
        patient_name: patient_name.to_string(),
        doctor_id: "doc-1".to_string(),
        doctor_name: "Dr. Kwaku Boateng".to_string(),
        date: Utc.with_ymd_and_hms(2024, 6, 5, 10, 0, 0).unwrap(),
        reason: "Review".to_string(),
    }
}

#[test]
fn test_added_patient_is_retrievable() {
    let mut store = test_store();
    let patient = store
        .add_patient(NewPatient::new("Kwame Mensah", 45, Gender::Male, "0244000000"))
        .unwrap();

    let stored = store.patient(&patient.id).unwrap();
    assert!(stored.history.is_empty());
    assert_eq!(stored.created_at, patient.created_at);
    assert!(patient.id.starts_with("KM"));
    assert_eq!(patient.id.len(), 6);
}

#[test]
fn test_unnamed_patient_gets_fallback_id() {
    let mut store = test_store();
    let patient = store
        .add_patient(NewPatient::new("", 1, Gender::Other, "0200000000"))
        .unwrap();

    assert!(patient.id.starts_with('P'));
    assert_eq!(patient.id.len(), 6);
    assert!(patient.id[1..].chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_generated_ids_do_not_collide() {
    let mut store = test_store();
    for _ in 0..200 {
        store
            .add_patient(NewPatient::new("Kofi Mensah", 30, Gender::Male, "0240000000"))
            .unwrap();
    }
    let mut ids: Vec<&str> = store.patients().iter().map(|p| p.id.as_str()).collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn test_medical_records_prepend() {
    let mut store = test_store();
    for diagnosis in ["Malaria", "Typhoid", "Anemia"] {
        store
            .add_medical_record(
                "pat-1",
                NewMedicalRecord {
                    diagnosis: diagnosis.to_string(),
                    prescription: String::new(),
                    notes: String::new(),
                    doctor_id: "doc-1".to_string(),
                    doctor_name: "Dr. Kwaku Boateng".to_string(),
                },
            )
            .unwrap();
    }

    let diagnoses: Vec<&str> = store
        .patient("pat-1")
        .unwrap()
        .history
        .iter()
        .map(|r| r.diagnosis.as_str())
        .collect();
    // Seeded record stays last
    assert_eq!(diagnoses, vec!["Anemia", "Typhoid", "Malaria", "Hypertension"]);
}

#[test]
fn test_appointment_notification_flow() {
    let mut store = test_store();
    let appointment = store.add_appointment(booking("pat-3", "Kofi Kingston")).unwrap();

    let to_doctor = &store.notifications()[0];
    assert_eq!(to_doctor.user_id, "doc-1");
    assert_eq!(to_doctor.kind, NotificationKind::Info);
    assert!(!to_doctor.read);

    store
        .update_appointment_status(&appointment.id, AppointmentStatus::Cancelled)
        .unwrap();
    let to_patient = &store.notifications()[0];
    assert_eq!(to_patient.user_id, "pat-3");
    assert_eq!(to_patient.kind, NotificationKind::Error);
    assert_eq!(store.notifications().len(), 2);
}

#[test]
fn test_completion_sends_success() {
    let mut store = test_store();
    let appointment = store.add_appointment(booking("pat-4", "Abena Korkor")).unwrap();
    store
        .update_appointment_status(&appointment.id, AppointmentStatus::Completed)
        .unwrap();

    assert_eq!(store.notifications()[0].kind, NotificationKind::Success);
    assert!(store.notifications()[0].message.ends_with("has been Completed."));
}

#[test]
fn test_rescheduling_is_rejected() {
    let mut store = test_store();
    let result = store.update_appointment_status("apt-1", AppointmentStatus::Scheduled);
    assert!(matches!(result, Err(StoreError::InvalidTransition { .. })));
    assert!(store.notifications().is_empty());
}

#[test]
fn test_delete_patient_does_not_cascade() {
    let mut store = test_store();
    let invoices_before = store.invoices().iter().filter(|i| i.patient_id == "pat-1").count();
    let labs_before = store.labs().iter().filter(|l| l.patient_id == "pat-1").count();
    assert!(invoices_before > 0);
    assert!(labs_before > 0);

    store.delete_patient("pat-1").unwrap();

    assert!(store.patient("pat-1").is_none());
    assert!(store.appointments().iter().any(|a| a.patient_id == "pat-1"));
    assert_eq!(
        store.invoices().iter().filter(|i| i.patient_id == "pat-1").count(),
        invoices_before
    );
    assert_eq!(
        store.labs().iter().filter(|l| l.patient_id == "pat-1").count(),
        labs_before
    );
}

#[test]
fn test_changes_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig {
        db_path: dir.path().join("hospital.db"),
        mock_patient_count: 5,
    };

    let (patient_id, appointment_id) = {
        let mut store = HospitalStore::open(&config).unwrap();
        assert_eq!(store.patients().len(), 15);
        let patient = store
            .add_patient(NewPatient::new("Esi Owusu", 22, Gender::Female, "0541234567"))
            .unwrap();
        let appointment = store
            .add_appointment(NewAppointment {
                date: Utc::now() + Duration::days(2),
                ..booking(&patient.id, &patient.name)
            })
            .unwrap();
        store
            .update_admin_credentials("admin", Some("changed"), None)
            .unwrap();
        (patient.id, appointment.id)
    };

    let store = HospitalStore::open(&config).unwrap();
    assert_eq!(store.patients().len(), 16);
    assert_eq!(store.patient(&patient_id).map(|p| p.name.as_str()), Some("Esi Owusu"));
    assert!(store.appointment(&appointment_id).is_some());
    assert_eq!(store.notifications().len(), 1);
    assert_eq!(store.admin_password(), "changed");
}

#[test]
fn test_persisted_json_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shape.db");
    {
        HospitalStore::open(&StoreConfig {
            db_path: path.clone(),
            mock_patient_count: 0,
        })
        .unwrap();
    }

    let db = Database::open(&path).unwrap();
    let raw: String = db
        .conn()
        .query_row(
            "SELECT value FROM collections WHERE key = 'patients'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert!(raw.contains("\"assignedDoctorId\":\"doc-1\""));
    assert!(raw.contains("\"createdAt\""));

    let patients: Vec<Patient> = db.load(CollectionKey::Patients).unwrap().unwrap();
    assert_eq!(patients.len(), 10);
}

#[test]
fn test_ffi_ledger_strings() {
    let core = hospital_records_core::open_store_in_memory().unwrap();

    let invoices = core.list_invoices().unwrap();
    assert_eq!(invoices[0].status, "Paid");
    assert_eq!(invoices[3].status, "Overdue");

    let inventory = core.list_inventory().unwrap();
    assert_eq!(inventory[0].category, "Medication");
    assert_eq!(inventory[0].status, "In Stock");
    assert_eq!(inventory[0].expiry_date.as_deref(), Some("2025-12-31"));
}
