use chrono::{NaiveDate, NaiveTime};
use validator::ValidateEmail;

use crate::errors::ValidationError;
use crate::models::booking::is_valid_slot;
use crate::models::{NewBooking, Selection};
use crate::services::catalog::Catalog;

/// Packages are booked as a single three-hour block.
pub const PACKAGE_DURATION_MINUTES: u32 = 180;

/// Collects a customer's booking choices. The selection is private so a
/// package and individual services can never both be chosen.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingForm {
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub notes: String,
    selection: Selection,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            customer_phone: String::new(),
            customer_email: String::new(),
            appointment_date: String::new(),
            appointment_time: String::new(),
            notes: String::new(),
            selection: Selection::Services(Vec::new()),
        }
    }
}

impl BookingForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Adds the service if absent, removes it if present. Picking a service
    /// while a package is selected drops the package.
    pub fn toggle_service(&mut self, service_id: &str) {
        if let Selection::Services(ids) = &mut self.selection {
            match ids.iter().position(|id| id == service_id) {
                Some(pos) => {
                    ids.remove(pos);
                }
                None => ids.push(service_id.to_string()),
            }
            return;
        }
        self.selection = Selection::Services(vec![service_id.to_string()]);
    }

    /// Like `toggle_service`, but never deselects.
    pub fn add_service(&mut self, service_id: &str) {
        if !self.selection.service_ids().iter().any(|id| id == service_id) {
            self.toggle_service(service_id);
        }
    }

    /// Selects a package, dropping any individually chosen services.
    pub fn select_package(&mut self, package_id: &str) {
        self.selection = Selection::Package(package_id.to_string());
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::Services(Vec::new());
    }

    /// Package price for a package, otherwise the sum of the chosen services.
    /// Unknown ids contribute nothing.
    pub fn total_price(&self, catalog: &Catalog) -> u32 {
        match &self.selection {
            Selection::Package(id) => catalog.package(id).map(|p| p.price).unwrap_or(0),
            Selection::Services(ids) => ids
                .iter()
                .filter_map(|id| catalog.service(id))
                .map(|s| s.price)
                .sum(),
        }
    }

    pub fn total_duration(&self, catalog: &Catalog) -> u32 {
        match &self.selection {
            Selection::Package(_) => PACKAGE_DURATION_MINUTES,
            Selection::Services(ids) => ids
                .iter()
                .filter_map(|id| catalog.service(id))
                .map(|s| s.duration_minutes)
                .sum(),
        }
    }

    /// Checks the form against the catalog. Appointments before `today`
    /// are rejected.
    pub fn validate(
        &self,
        catalog: &Catalog,
        today: NaiveDate,
    ) -> Result<NewBooking, ValidationError> {
        let customer_name = required(&self.customer_name, "name")?;
        let customer_phone = required(&self.customer_phone, "phone")?;
        let date_str = required(&self.appointment_date, "date")?;
        let time_str = required(&self.appointment_time, "time")?;

        if self.selection.is_empty() {
            return Err(ValidationError::NoSelection);
        }

        let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(date_str.clone()))?;
        if date < today {
            return Err(ValidationError::DateInPast(date_str));
        }
        let time = NaiveTime::parse_from_str(&time_str, "%H:%M")
            .ok()
            .filter(is_valid_slot)
            .ok_or_else(|| ValidationError::InvalidTime(time_str.clone()))?;

        let customer_email = parse_email(&self.customer_email)?;

        // Canonicalise package references so "groom" is stored as its id.
        let selection = match &self.selection {
            Selection::Package(key) => {
                let package = catalog
                    .package(key)
                    .ok_or_else(|| ValidationError::UnknownPackage(key.clone()))?;
                Selection::Package(package.id.to_string())
            }
            Selection::Services(ids) => {
                if let Some(unknown) = ids.iter().find(|id| catalog.service(id).is_none()) {
                    return Err(ValidationError::UnknownService(unknown.clone()));
                }
                Selection::Services(ids.clone())
            }
        };

        Ok(NewBooking {
            customer_name,
            customer_phone,
            customer_email,
            date,
            time,
            selection,
            notes: self.notes.trim().to_string(),
            total_amount: self.total_price(catalog),
            duration_minutes: self.total_duration(catalog),
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn parse_email(raw: &str) -> Result<Option<String>, ValidationError> {
    let email = raw.trim().to_lowercase();
    if email.is_empty() {
        return Ok(None);
    }

    if email.validate_email() {
        Ok(Some(email))
    } else {
        Err(ValidationError::InvalidEmail(raw.trim().to_string()))
    }
}
