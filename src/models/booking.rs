use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

pub const OPENING_HOUR: u32 = 8;
pub const CLOSING_HOUR: u32 = 22;
pub const SLOT_MINUTES: u32 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: String,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub selection: Selection,
    pub notes: String,
    pub total_amount: u32,
    pub duration_minutes: u32,
    pub status: BookingStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Booking {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// What a booking reserves. A package and individual services are mutually
/// exclusive; a validated `Services` list is never empty.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    Services(Vec<String>),
    Package(String),
}

impl Selection {
    pub fn service_ids(&self) -> &[String] {
        match self {
            Selection::Services(ids) => ids,
            Selection::Package(_) => &[],
        }
    }

    pub fn package_id(&self) -> Option<&str> {
        match self {
            Selection::Services(_) => None,
            Selection::Package(id) => Some(id),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::Services(ids) if ids.is_empty())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "completed" => Some(BookingStatus::Completed),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

/// A validated booking that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: Option<String>,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub selection: Selection,
    pub notes: String,
    pub total_amount: u32,
    pub duration_minutes: u32,
}

impl NewBooking {
    pub fn into_booking(self, status: BookingStatus, now: NaiveDateTime) -> Booking {
        Booking {
            id: uuid::Uuid::new_v4().to_string(),
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            customer_email: self.customer_email,
            date: self.date,
            time: self.time,
            selection: self.selection,
            notes: self.notes,
            total_amount: self.total_amount,
            duration_minutes: self.duration_minutes,
            status,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Every bookable start time, 08:00 through 21:30.
pub fn time_slots() -> Vec<NaiveTime> {
    (OPENING_HOUR..CLOSING_HOUR)
        .flat_map(|hour| (0..60).step_by(SLOT_MINUTES as usize).map(move |m| (hour, m)))
        .filter_map(|(hour, minute)| NaiveTime::from_hms_opt(hour, minute, 0))
        .collect()
}

pub fn is_valid_slot(time: &NaiveTime) -> bool {
    (OPENING_HOUR..CLOSING_HOUR).contains(&time.hour())
        && time.minute() % SLOT_MINUTES == 0
        && time.second() == 0
        && time.nanosecond() == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slots_grid() {
        let slots = time_slots();
        assert_eq!(slots.len(), 28);
        assert_eq!(slots[0], NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(slots[1], NaiveTime::from_hms_opt(8, 30, 0).unwrap());
        assert_eq!(slots[27], NaiveTime::from_hms_opt(21, 30, 0).unwrap());
        assert!(slots.iter().all(is_valid_slot));
    }

    #[test]
    fn test_off_grid_times_rejected() {
        assert!(!is_valid_slot(&NaiveTime::from_hms_opt(7, 30, 0).unwrap()));
        assert!(!is_valid_slot(&NaiveTime::from_hms_opt(22, 0, 0).unwrap()));
        assert!(!is_valid_slot(&NaiveTime::from_hms_opt(10, 15, 0).unwrap()));
    }

    #[test]
    fn test_status_parse_roundtrip() {
        for status in [
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::Completed,
            BookingStatus::Cancelled,
        ] {
            assert_eq!(BookingStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::parse(" Confirmed "), Some(BookingStatus::Confirmed));
        assert_eq!(BookingStatus::parse("archived"), None);
    }

    #[test]
    fn test_selection_accessors() {
        let pkg = Selection::Package("pkg1".to_string());
        assert!(pkg.service_ids().is_empty());
        assert_eq!(pkg.package_id(), Some("pkg1"));
        assert!(!pkg.is_empty());

        assert!(Selection::Services(vec![]).is_empty());
    }
}
