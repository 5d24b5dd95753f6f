use chrono::Duration;

use crate::models::{Booking, BookingStatus};
use crate::services::catalog::Catalog;
use crate::services::notification::describe_selection;

pub fn generate_ics(booking: &Booking, catalog: &Catalog, salon_name: &str) -> String {
    let start = booking.starts_at();
    let dtstart = start.format("%Y%m%dT%H%M%S").to_string();
    let dtend = (start + Duration::minutes(booking.duration_minutes as i64))
        .format("%Y%m%dT%H%M%S")
        .to_string();
    let dtstamp = booking.created_at.format("%Y%m%dT%H%M%S").to_string();
    let uid = format!("{}@salonbook", booking.id);

    let summary = escape_text(&format!("Appointment at {salon_name}"));
    let mut description = describe_selection(&booking.selection, catalog);
    if !booking.notes.is_empty() {
        description.push_str(&format!("\nNotes: {}", booking.notes));
    }
    let description = escape_text(&description);

    format!(
        "BEGIN:VCALENDAR\r\n\
         VERSION:2.0\r\n\
         PRODID:-//Salonbook//Booking//EN\r\n\
         BEGIN:VEVENT\r\n\
         UID:{uid}\r\n\
         DTSTAMP:{dtstamp}\r\n\
         DTSTART:{dtstart}\r\n\
         DTEND:{dtend}\r\n\
         SUMMARY:{summary}\r\n\
         DESCRIPTION:{description}\r\n\
         STATUS:{}\r\n\
         END:VEVENT\r\n\
         END:VCALENDAR\r\n",
        ics_status(booking)
    )
}

fn ics_status(booking: &Booking) -> &'static str {
    match booking.status {
        BookingStatus::Pending => "TENTATIVE",
        BookingStatus::Confirmed | BookingStatus::Completed => "CONFIRMED",
        BookingStatus::Cancelled => "CANCELLED",
    }
}

// RFC 5545 TEXT escaping
fn escape_text(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace(';', "\\;")
        .replace(',', "\\,")
        .replace('\n', "\\n")
}
