//! Rules a submitted booking has to satisfy before it may be stored.
//!
//! Every rule is checked on its own and all failures are reported together, in
//! a fixed order, so the frontend can show them at once. There are no checks
//! across fields: a date in the past or two bookings for the same slot are
//! accepted.

use core::ops::RangeInclusive;

use party_booking_database::models::NewBooking;
use serde::{Deserialize, Deserializer};
use validator::ValidateEmail as _;

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_INVALID: &str = "Valid email is required";
pub const PHONE_INVALID: &str = "Valid phone number is required";
pub const DATE_REQUIRED: &str = "Date is required";
pub const TIME_REQUIRED: &str = "Time is required";
pub const DURATION_OUT_OF_RANGE: &str = "Duration must be between 1 and 8 hours";
pub const GUESTS_OUT_OF_RANGE: &str = "Guests must be between 1 and 100";

pub const MIN_PHONE_LENGTH: usize = 7;
pub const DURATION_HOURS: RangeInclusive<i32> = 1..=8;
pub const GUESTS: RangeInclusive<i32> = 1..=100;

/// A booking as sent by the client.
///
/// Absent or `null` fields default to empty or zero so they show up as
/// violations instead of failing deserialization.
#[derive(Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct BookingSubmission {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub time: String,
    #[serde(deserialize_with = "null_as_default")]
    pub duration: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub guests: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl BookingSubmission {
    /// Trims the contact fields. Date and time are kept as submitted.
    #[must_use]
    pub fn normalize(self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            ..self
        }
    }

    /// Messages for every rule the booking breaks, empty if it may be stored.
    ///
    /// Expects a normalized submission.
    #[must_use]
    pub fn violations(&self) -> Vec<&'static str> {
        let mut violations = Vec::new();

        if self.name.is_empty() {
            violations.push(NAME_REQUIRED);
        }
        if !is_mailbox(&self.email) {
            violations.push(EMAIL_INVALID);
        }
        if self.phone.chars().count() < MIN_PHONE_LENGTH {
            violations.push(PHONE_INVALID);
        }
        if self.date.is_empty() {
            violations.push(DATE_REQUIRED);
        }
        if self.time.is_empty() {
            violations.push(TIME_REQUIRED);
        }
        if self.duration_hours().is_none() {
            violations.push(DURATION_OUT_OF_RANGE);
        }
        if self.guest_count().is_none() {
            violations.push(GUESTS_OUT_OF_RANGE);
        }

        violations
    }

    fn duration_hours(&self) -> Option<i32> {
        i32::try_from(self.duration)
            .ok()
            .filter(|hours| DURATION_HOURS.contains(hours))
    }

    fn guest_count(&self) -> Option<i32> {
        i32::try_from(self.guests)
            .ok()
            .filter(|guests| GUESTS.contains(guests))
    }
}

/// Normalizes the submission and turns it into a storable booking, or returns
/// every violated rule.
pub fn validate_booking(submission: BookingSubmission) -> Result<NewBooking, Vec<String>> {
    let submission = submission.normalize();
    let violations = submission.violations();

    match (
        violations.is_empty(),
        submission.duration_hours(),
        submission.guest_count(),
    ) {
        (true, Some(duration), Some(guests)) => Ok(NewBooking {
            name: submission.name,
            email: submission.email,
            phone: submission.phone,
            date: submission.date,
            time: submission.time,
            duration,
            guests,
        }),
        _ => Err(violations.into_iter().map(str::to_owned).collect()),
    }
}

/// Accepts a single mailbox: `jane@example.com`, `<jane@example.com>` or
/// `Jane Doe <jane@example.com>`. Address lists are rejected.
fn is_mailbox(address: &str) -> bool {
    let addr_spec = match address.strip_suffix('>') {
        Some(rest) => match rest.rsplit_once('<') {
            Some((display_name, addr_spec)) if is_display_name(display_name.trim()) => addr_spec,
            _ => return false,
        },
        None => address,
    };

    is_dot_atom_local_part(addr_spec) && addr_spec.validate_email()
}

/// An unquoted local part is a dot-atom: no leading, trailing or doubled dots.
fn is_dot_atom_local_part(addr_spec: &str) -> bool {
    match addr_spec.rsplit_once('@') {
        Some((local, _)) if local.starts_with('"') => true,
        Some((local, _)) => !local.split('.').any(str::is_empty),
        None => false,
    }
}

// RFC 5322 specials except '.', which obsolete phrases allow
const DISPLAY_NAME_SPECIALS: [char; 12] = [
    '(', ')', '<', '>', '[', ']', ':', ';', '@', '\\', ',', '"',
];

fn is_display_name(display_name: &str) -> bool {
    let quoted = display_name.len() >= 2
        && display_name.starts_with('"')
        && display_name.ends_with('"')
        && !display_name[1..display_name.len() - 1].contains('"');

    quoted || !display_name.contains(DISPLAY_NAME_SPECIALS)
}
