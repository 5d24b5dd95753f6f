use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rusqlite::{params, Connection};

use crate::models::{Booking, BookingStatus, Selection};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

const BOOKING_COLUMNS: &str = "id, customer_name, customer_phone, customer_email, appointment_date, \
     appointment_time, service_ids, package_id, notes, total_amount, duration_minutes, status, \
     created_at, updated_at";

// ── Bookings ──

pub fn create_booking(conn: &Connection, booking: &Booking) -> anyhow::Result<()> {
    let service_ids = serde_json::to_string(booking.selection.service_ids())?;

    conn.execute(
        "INSERT INTO bookings (id, customer_name, customer_phone, customer_email, appointment_date,
            appointment_time, service_ids, package_id, notes, total_amount, duration_minutes, status,
            created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
        params![
            booking.id,
            booking.customer_name,
            booking.customer_phone,
            booking.customer_email,
            booking.date.format(DATE_FORMAT).to_string(),
            booking.time.format(TIME_FORMAT).to_string(),
            service_ids,
            booking.selection.package_id(),
            booking.notes,
            booking.total_amount,
            booking.duration_minutes,
            booking.status.as_str(),
            booking.created_at.format(TIMESTAMP_FORMAT).to_string(),
            booking.updated_at.format(TIMESTAMP_FORMAT).to_string(),
        ],
    )
    .context("failed to insert booking")?;
    Ok(())
}

/// Newest first. Rows created within the same second keep insertion order
/// reversed.
pub fn get_all_bookings(
    conn: &Connection,
    status_filter: Option<BookingStatus>,
    limit: i64,
) -> anyhow::Result<Vec<Booking>> {
    let sql = format!(
        "SELECT {BOOKING_COLUMNS} FROM bookings
         WHERE (?1 IS NULL OR status = ?1)
         ORDER BY created_at DESC, rowid DESC LIMIT ?2"
    );

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(
        params![status_filter.map(|s| s.as_str()), limit],
        |row| Ok(parse_booking_row(row)),
    )?;

    let mut bookings = vec![];
    for row in rows {
        bookings.push(row??);
    }
    Ok(bookings)
}

pub fn get_booking_by_id(conn: &Connection, id: &str) -> anyhow::Result<Option<Booking>> {
    let result = conn.query_row(
        &format!("SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?1"),
        params![id],
        |row| Ok(parse_booking_row(row)),
    );

    match result {
        Ok(booking) => Ok(Some(booking?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Returns the updated booking, or `None` when no booking has that id.
pub fn update_booking_status(
    conn: &Connection,
    id: &str,
    status: BookingStatus,
) -> anyhow::Result<Option<Booking>> {
    let now = Utc::now().naive_utc().format(TIMESTAMP_FORMAT).to_string();
    let count = conn.execute(
        "UPDATE bookings SET status = ?1, updated_at = ?2 WHERE id = ?3",
        params![status.as_str(), now, id],
    )?;

    if count == 0 {
        return Ok(None);
    }
    get_booking_by_id(conn, id)
}

pub fn count_bookings(conn: &Connection) -> anyhow::Result<i64> {
    let count = conn.query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))?;
    Ok(count)
}

fn parse_booking_row(row: &rusqlite::Row) -> anyhow::Result<Booking> {
    let id: String = row.get(0)?;
    let customer_name: String = row.get(1)?;
    let customer_phone: String = row.get(2)?;
    let customer_email: Option<String> = row.get(3)?;
    let date_str: String = row.get(4)?;
    let time_str: String = row.get(5)?;
    let service_ids_json: String = row.get(6)?;
    let package_id: Option<String> = row.get(7)?;
    let notes: String = row.get(8)?;
    let total_amount: u32 = row.get(9)?;
    let duration_minutes: u32 = row.get(10)?;
    let status_str: String = row.get(11)?;
    let created_at_str: String = row.get(12)?;
    let updated_at_str: String = row.get(13)?;

    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT)
        .with_context(|| format!("booking {id}: bad appointment_date {date_str}"))?;
    let time = NaiveTime::parse_from_str(&time_str, TIME_FORMAT)
        .with_context(|| format!("booking {id}: bad appointment_time {time_str}"))?;
    let status = BookingStatus::parse(&status_str)
        .with_context(|| format!("booking {id}: unknown status {status_str}"))?;

    let selection = match package_id {
        Some(package_id) => Selection::Package(package_id),
        None => Selection::Services(
            serde_json::from_str(&service_ids_json)
                .with_context(|| format!("booking {id}: bad service_ids"))?,
        ),
    };

    let created_at = NaiveDateTime::parse_from_str(&created_at_str, TIMESTAMP_FORMAT)
        .with_context(|| format!("booking {id}: bad created_at {created_at_str}"))?;
    let updated_at = NaiveDateTime::parse_from_str(&updated_at_str, TIMESTAMP_FORMAT)
        .unwrap_or(created_at);

    Ok(Booking {
        id,
        customer_name,
        customer_phone,
        customer_email,
        date,
        time,
        selection,
        notes,
        total_amount,
        duration_minutes,
        status,
        created_at,
        updated_at,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn setup_db() -> Connection {
        db::init_db(":memory:").unwrap()
    }

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).unwrap()
    }

    fn booking(id: &str, selection: Selection, created_at: &str) -> Booking {
        Booking {
            id: id.to_string(),
            customer_name: "Meera".to_string(),
            customer_phone: "9000000001".to_string(),
            customer_email: None,
            date: NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
            time: NaiveTime::from_hms_opt(11, 30, 0).unwrap(),
            selection,
            notes: String::new(),
            total_amount: 299,
            duration_minutes: 30,
            status: BookingStatus::Pending,
            created_at: ts(created_at),
            updated_at: ts(created_at),
        }
    }

    #[test]
    fn test_create_and_get_roundtrip() {
        let conn = setup_db();
        let mut b = booking(
            "bk-1",
            Selection::Services(vec!["1".to_string(), "14".to_string()]),
            "2025-02-01 10:00:00",
        );
        b.customer_email = Some("meera@example.com".to_string());
        b.notes = "first visit".to_string();
        create_booking(&conn, &b).unwrap();

        let loaded = get_booking_by_id(&conn, "bk-1").unwrap().unwrap();
        assert_eq!(loaded, b);
    }

    #[test]
    fn test_package_booking_roundtrip() {
        let conn = setup_db();
        let b = booking("bk-2", Selection::Package("pkg3".to_string()), "2025-02-01 10:00:00");
        create_booking(&conn, &b).unwrap();

        let loaded = get_booking_by_id(&conn, "bk-2").unwrap().unwrap();
        assert_eq!(loaded.selection, Selection::Package("pkg3".to_string()));
    }

    #[test]
    fn test_get_missing_booking() {
        let conn = setup_db();
        assert!(get_booking_by_id(&conn, "nope").unwrap().is_none());
    }

    #[test]
    fn test_empty_selection_rejected_by_schema() {
        let conn = setup_db();
        let b = booking("bk-3", Selection::Services(vec![]), "2025-02-01 10:00:00");
        assert!(create_booking(&conn, &b).is_err());
        assert_eq!(count_bookings(&conn).unwrap(), 0);
    }

    #[test]
    fn test_all_bookings_newest_first() {
        let conn = setup_db();
        let s = || Selection::Services(vec!["1".to_string()]);
        create_booking(&conn, &booking("old", s(), "2025-01-01 09:00:00")).unwrap();
        create_booking(&conn, &booking("new", s(), "2025-01-03 09:00:00")).unwrap();
        create_booking(&conn, &booking("mid", s(), "2025-01-02 09:00:00")).unwrap();

        let ids: Vec<String> = get_all_bookings(&conn, None, 50)
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(ids, ["new", "mid", "old"]);

        let limited = get_all_bookings(&conn, None, 1).unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, "new");
    }

    #[test]
    fn test_status_filter_and_update() {
        let conn = setup_db();
        let s = || Selection::Services(vec!["1".to_string()]);
        create_booking(&conn, &booking("a", s(), "2025-01-01 09:00:00")).unwrap();
        create_booking(&conn, &booking("b", s(), "2025-01-01 09:05:00")).unwrap();

        let updated = update_booking_status(&conn, "a", BookingStatus::Completed)
            .unwrap()
            .unwrap();
        assert_eq!(updated.status, BookingStatus::Completed);
        assert!(updated.updated_at >= updated.created_at);

        let completed = get_all_bookings(&conn, Some(BookingStatus::Completed), 50).unwrap();
        assert_eq!(completed.len(), 1);
        assert_eq!(completed[0].id, "a");

        let pending = get_all_bookings(&conn, Some(BookingStatus::Pending), 50).unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, "b");
    }

    #[test]
    fn test_update_status_missing_booking() {
        let conn = setup_db();
        let result = update_booking_status(&conn, "ghost", BookingStatus::Cancelled).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_corrupt_created_at_is_an_error() {
        let conn = setup_db();
        let s = Selection::Services(vec!["1".to_string()]);
        create_booking(&conn, &booking("bad", s, "2025-01-01 09:00:00")).unwrap();
        conn.execute("UPDATE bookings SET created_at = 'yesterday' WHERE id = 'bad'", [])
            .unwrap();

        let err = get_booking_by_id(&conn, "bad").unwrap_err();
        assert!(format!("{err:#}").contains("created_at"));
        assert!(get_all_bookings(&conn, None, 10).is_err());
    }
}
