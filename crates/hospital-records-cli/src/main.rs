//! `hospital-records`: command-line access to the records store.
//!
//! # Environment Variables
//! - `HOSPITAL_DB_PATH`: SQLite file (default: "hospital_records.db")
//! - `HOSPITAL_MOCK_PATIENTS`: random patients added on first run (default: 245)
//! - `RUST_LOG`: log filter (default directive: "hospital_records=info")

use anyhow::{anyhow, bail, Context};
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use clap::{Parser, Subcommand};
use hospital_records_ai::{AiAssistant, OfflineGenerator};
use hospital_records_core::query::{self, DateRange, HistoryFilter, PatientFilter};
use hospital_records_core::{
    AppointmentStatus, Gender, HospitalStore, NewAppointment, NewPatient, StoreConfig,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "hospital-records")]
#[command(about = "Hospital records system CLI")]
struct Cli {
    /// Database file (overrides HOSPITAL_DB_PATH)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List patients, most recently active first
    Patients {
        /// Name or id fragment
        #[arg(default_value = "")]
        search: String,
        /// Assigned doctor id
        #[arg(long)]
        doctor: Option<String>,
        /// Earliest activity date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,
        /// Latest activity date (YYYY-MM-DD, inclusive)
        #[arg(long)]
        to: Option<String>,
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Show a patient's medical history
    History {
        patient_id: String,
        /// Diagnosis, notes or prescription fragment
        #[arg(long, default_value = "")]
        search: String,
        /// Doctor display name
        #[arg(long)]
        doctor: Option<String>,
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// Register a patient
    AddPatient {
        name: String,
        age: u32,
        /// Male, Female or Other
        gender: String,
        contact: String,
        #[arg(long, default_value = "")]
        address: String,
        /// Assigned doctor id
        #[arg(long)]
        doctor: Option<String>,
    },
    /// List doctors
    Doctors {
        #[arg(long)]
        specialization: Option<String>,
    },
    /// List doctor specializations
    Specializations,
    /// Book an appointment
    Book {
        patient_id: String,
        doctor_id: String,
        /// RFC 3339 or "YYYY-MM-DD HH:MM" (UTC)
        date: String,
        reason: String,
    },
    /// Complete or cancel an appointment
    SetStatus {
        appointment_id: String,
        /// Completed or Cancelled
        status: String,
    },
    /// Show a user's notifications
    Notifications { user_id: String },
    /// Mark a notification as read
    ReadNotification { id: String },
    /// Admin overview figures
    Overview,
    /// Offline summary of a patient's record
    Summary { patient_id: String },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("hospital_records=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = StoreConfig::from_env();
    if let Some(db) = cli.db {
        config.db_path = db;
    }
    let mut store = HospitalStore::open(&config)
        .with_context(|| format!("opening {}", config.db_path.display()))?;

    match cli.command {
        Commands::Patients {
            search,
            doctor,
            from,
            to,
            limit,
        } => {
            let filter = PatientFilter {
                search,
                doctor_id: doctor,
                range: DateRange::new(parse_day(from)?, parse_day(to)?),
            };
            let patients = query::filter_patients(store.patients(), &filter);
            if patients.is_empty() {
                println!("No patients found.");
            }
            for patient in patients.iter().take(limit) {
                println!(
                    "{:<8} {:<28} {:>3} {:<6} {:<12} last activity {}",
                    patient.id,
                    patient.name,
                    patient.age,
                    patient.gender.as_str(),
                    patient.contact,
                    patient.last_activity().format("%Y-%m-%d")
                );
            }
            if patients.len() > limit {
                println!("... {} more", patients.len() - limit);
            }
        }
        Commands::History {
            patient_id,
            search,
            doctor,
            from,
            to,
        } => {
            let patient = store
                .patient(&patient_id)
                .ok_or_else(|| anyhow!("patient not found: {}", patient_id))?;
            let filter = HistoryFilter {
                search,
                doctor_name: doctor,
                range: DateRange::new(parse_day(from)?, parse_day(to)?),
            };
            println!("{} ({})", patient.name, patient.id);
            let records = query::filter_history(&patient.history, &filter);
            if records.is_empty() {
                println!("No records.");
            }
            for record in records {
                println!(
                    "{}  {:<24} {:<28} {}",
                    record.date.format("%Y-%m-%d %H:%M"),
                    record.diagnosis,
                    record.prescription,
                    record.doctor_name
                );
                if !record.notes.is_empty() {
                    println!("    {}", record.notes);
                }
            }
        }
        Commands::AddPatient {
            name,
            age,
            gender,
            contact,
            address,
            doctor,
        } => {
            let gender =
                Gender::parse(&gender).ok_or_else(|| anyhow!("unknown gender: {}", gender))?;
            let mut new_patient = NewPatient::new(name, age, gender, contact);
            new_patient.address = address;
            new_patient.assigned_doctor_id = doctor;
            let patient = store.add_patient(new_patient)?;
            println!("Registered {} with ID {}", patient.name, patient.id);
        }
        Commands::Doctors { specialization } => {
            let doctors = query::doctors(store.staff());
            for doctor in query::doctors_by_specialization(&doctors, specialization.as_deref()) {
                println!(
                    "{:<16} {:<28} {}",
                    doctor.id,
                    doctor.name,
                    doctor.specialization.as_deref().unwrap_or("-")
                );
            }
        }
        Commands::Specializations => {
            let doctors = query::doctors(store.staff());
            for spec in query::specializations(&doctors) {
                println!("{}", spec);
            }
        }
        Commands::Book {
            patient_id,
            doctor_id,
            date,
            reason,
        } => {
            let patient_name = store
                .patient(&patient_id)
                .map(|p| p.name.clone())
                .ok_or_else(|| anyhow!("patient not found: {}", patient_id))?;
            let doctor_name = store
                .staff_member(&doctor_id)
                .filter(|u| u.is_doctor())
                .map(|u| u.name.clone())
                .ok_or_else(|| anyhow!("doctor not found: {}", doctor_id))?;
            let appointment = store.add_appointment(NewAppointment {
                patient_id,
                patient_name,
                doctor_id,
                doctor_name,
                date: parse_timestamp(&date)?,
                reason,
            })?;
            println!("Booked {}", appointment.id);
        }
        Commands::SetStatus {
            appointment_id,
            status,
        } => {
            let status = AppointmentStatus::parse(&status)
                .ok_or_else(|| anyhow!("unknown status: {}", status))?;
            let appointment = store.update_appointment_status(&appointment_id, status)?;
            println!("{} is now {}", appointment.id, appointment.status);
        }
        Commands::Notifications { user_id } => {
            let feed = query::notifications_for_user(store.notifications(), &user_id);
            println!("{} unread", query::unread_count(&feed));
            for n in feed {
                println!(
                    "{} {} [{}] {}: {}",
                    if n.read { " " } else { "*" },
                    n.date.format("%Y-%m-%d %H:%M"),
                    n.kind.as_str(),
                    n.title,
                    n.message
                );
                println!("    id: {}", n.id);
            }
        }
        Commands::ReadNotification { id } => {
            store.mark_notification_as_read(&id)?;
            println!("Marked {} as read", id);
        }
        Commands::Overview => {
            let overview = query::admin_overview(
                store.patients(),
                store.staff(),
                store.invoices(),
                store.labs(),
                store.inventory(),
            );
            println!("Patients:          {}", overview.total_patients);
            println!("Staff:             {}", overview.total_staff);
            println!("Doctors:           {}", overview.doctors);
            println!("Pending invoices:  {}", overview.pending_invoices);
            println!("Open lab tests:    {}", overview.open_labs);
            println!("Items to restock:  {}", overview.restock_items);
            println!("Outstanding (GHS): {:.2}", overview.outstanding_amount);
        }
        Commands::Summary { patient_id } => {
            let patient = store
                .patient(&patient_id)
                .ok_or_else(|| anyhow!("patient not found: {}", patient_id))?;
            let assistant = AiAssistant::new(OfflineGenerator);
            println!("{}", assistant.summarize(patient));
        }
    }

    Ok(())
}

fn parse_day(value: Option<String>) -> anyhow::Result<Option<NaiveDate>> {
    value
        .map(|v| {
            NaiveDate::parse_from_str(&v, "%Y-%m-%d")
                .with_context(|| format!("invalid date: {}", v))
        })
        .transpose()
}

fn parse_timestamp(value: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    match NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M") {
        Ok(naive) => Ok(Utc.from_utc_datetime(&naive)),
        Err(_) => bail!("invalid date/time: {}", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_timestamp_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 6, 10, 14, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2024-06-10T14:30:00Z").unwrap(), expected);
        assert_eq!(parse_timestamp("2024-06-10 14:30").unwrap(), expected);
        assert!(parse_timestamp("next tuesday").is_err());
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(parse_day(None).unwrap(), None);
        assert_eq!(
            parse_day(Some("2024-03-15".into())).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15)
        );
        assert!(parse_day(Some("15/03/2024".into())).is_err());
    }
}
