//! Identifier generation.
//!
//! Patients get human-readable ids built from their initials plus four random
//! digits (e.g. `KM4821`), checked against existing ids with a bounded number
//! of retries. Staff, records, appointments and notifications get a fixed
//! prefix plus the wall-clock millisecond timestamp.
//!
//! The initials format is a product requirement. With only 9000 suffixes per
//! prefix, collisions become likely once a prefix holds a few hundred
//! patients; after [`MAX_PATIENT_ID_RETRIES`] failed attempts the colliding
//! id is returned anyway.

use chrono::{DateTime, Utc};
use rand::Rng;

/// Retries after the first collision before a colliding id is accepted.
pub const MAX_PATIENT_ID_RETRIES: usize = 10;

const SUFFIX_RANGE: std::ops::RangeInclusive<u32> = 1000..=9999;
const FALLBACK_RANGE: std::ops::RangeInclusive<u32> = 10000..=99999;

/// Two-letter prefix derived from a patient name.
///
/// Returns `None` for a blank name.
pub fn patient_initials(name: &str) -> Option<String> {
    let parts: Vec<&str> = name.split_whitespace().collect();
    let (first, last) = match parts.as_slice() {
        [] => return None,
        [only] => {
            let mut chars = only.chars().flat_map(char::to_uppercase);
            let first = chars.next();
            let second = chars.next().unwrap_or('X');
            (first, Some(second))
        }
        [head, .., tail] => (
            head.chars().flat_map(char::to_uppercase).next(),
            tail.chars().flat_map(char::to_uppercase).next(),
        ),
    };

    let mut initials: String = [first, last]
        .into_iter()
        .flatten()
        .map(|c| if c.is_ascii_uppercase() { c } else { 'X' })
        .collect();
    while initials.len() < 2 {
        initials.push('X');
    }
    Some(initials)
}

/// Generate one candidate patient id, drawing digits from `next_suffix`.
///
/// `next_suffix` is called with the inclusive range the digits must fall in.
fn patient_id_candidate<F>(name: &str, next_suffix: &mut F) -> String
where
    F: FnMut(std::ops::RangeInclusive<u32>) -> u32,
{
    match patient_initials(name) {
        Some(initials) => format!("{}{}", initials, next_suffix(SUFFIX_RANGE)),
        None => format!("P{}", next_suffix(FALLBACK_RANGE)),
    }
}

/// Generate a patient id, retrying while `exists` reports a collision.
///
/// The suffix source is injectable so collisions can be forced.
pub fn patient_id_with<E, F>(name: &str, exists: E, mut next_suffix: F) -> String
where
    E: Fn(&str) -> bool,
    F: FnMut(std::ops::RangeInclusive<u32>) -> u32,
{
    let mut id = patient_id_candidate(name, &mut next_suffix);
    let mut attempts = 0;
    while exists(&id) && attempts < MAX_PATIENT_ID_RETRIES {
        id = patient_id_candidate(name, &mut next_suffix);
        attempts += 1;
    }
    if exists(&id) {
        tracing::warn!(id = %id, "patient id still collides after retries");
    }
    id
}

/// Generate a patient id using `rng` for the numeric suffix.
pub fn patient_id<R, E>(name: &str, exists: E, rng: &mut R) -> String
where
    R: Rng,
    E: Fn(&str) -> bool,
{
    patient_id_with(name, exists, |range| rng.gen_range(range))
}

/// Kinds of timestamp-based identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Staff,
    Record,
    Appointment,
    Notification,
}

impl IdKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            IdKind::Staff => "doc",
            IdKind::Record => "rec",
            IdKind::Appointment => "apt",
            IdKind::Notification => "notif",
        }
    }
}

/// `<prefix>-<unix millis>`.
pub fn timestamp_id(kind: IdKind, now: DateTime<Utc>) -> String {
    format!("{}-{}", kind.prefix(), now.timestamp_millis())
}

/// `notif-<unix millis>-<random>`; several notifications may share a millisecond.
pub fn notification_id(now: DateTime<Utc>) -> String {
    let suffix = uuid::Uuid::new_v4().simple().to_string();
    format!("{}-{}", timestamp_id(IdKind::Notification, now), &suffix[..8])
}
