use std::env;

use crate::models::BookingStatus;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub salon_name: String,
    pub admin_email: String,
    pub mail_api_url: String,
    pub mail_api_key: String,
    pub mail_from: String,
    /// Status given to freshly submitted bookings.
    pub default_booking_status: BookingStatus,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "salon.db".to_string()),
            salon_name: env::var("SALON_NAME")
                .unwrap_or_else(|_| "He & She Hairfix Salon".to_string()),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@salon.local".to_string()),
            mail_api_url: env::var("MAIL_API_URL")
                .unwrap_or_else(|_| "http://localhost:8025/api".to_string()),
            mail_api_key: env::var("MAIL_API_KEY").unwrap_or_default(),
            mail_from: env::var("MAIL_FROM").unwrap_or_else(|_| "noreply@salon.com".to_string()),
            default_booking_status: env::var("BOOKING_DEFAULT_STATUS")
                .ok()
                .and_then(|v| BookingStatus::parse(&v))
                .filter(|s| matches!(s, BookingStatus::Pending | BookingStatus::Confirmed))
                .unwrap_or(BookingStatus::Pending),
        }
    }
}
