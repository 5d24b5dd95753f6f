pub mod mail_api;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::models::{Booking, Selection};
use crate::services::catalog::Catalog;

#[derive(Debug, Clone, PartialEq)]
pub struct Email {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Delivers one message and returns the transport's delivery id.
    async fn send(&self, email: &Email) -> anyhow::Result<String>;

    /// Checks that the transport is configured well enough to send.
    async fn verify(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Sends the "new booking" email to the salon's admin address.
pub struct Notifier {
    mailer: Box<dyn Mailer>,
    salon_name: String,
    from: String,
    recipient: String,
}

impl Notifier {
    pub fn new(mailer: Box<dyn Mailer>, config: &AppConfig) -> Self {
        Self {
            mailer,
            salon_name: config.salon_name.clone(),
            from: format!("\"{}\" <{}>", config.salon_name, config.mail_from),
            recipient: config.admin_email.clone(),
        }
    }

    pub async fn verify(&self) -> anyhow::Result<()> {
        self.mailer.verify().await
    }

    pub fn render(&self, booking: &Booking, catalog: &Catalog) -> Email {
        let long_date = booking.date.format("%A, %-d %B %Y").to_string();
        let selection = describe_selection(&booking.selection, catalog);

        Email {
            from: self.from.clone(),
            to: self.recipient.clone(),
            subject: format!(
                "New Booking: {} - {} on {}",
                booking.customer_name, selection, long_date
            ),
            html: render_booking_html(booking, &selection, &long_date, &self.salon_name),
        }
    }

    pub async fn notify_booking(
        &self,
        booking: &Booking,
        catalog: &Catalog,
    ) -> anyhow::Result<String> {
        let email = self.render(booking, catalog);
        self.mailer.send(&email).await
    }
}

/// Human-readable names for what was booked.
pub fn describe_selection(selection: &Selection, catalog: &Catalog) -> String {
    match selection {
        Selection::Package(id) => catalog
            .package(id)
            .map(|p| p.name.to_string())
            .unwrap_or_else(|| id.clone()),
        Selection::Services(ids) => ids
            .iter()
            .map(|id| catalog.service(id).map(|s| s.name).unwrap_or(id.as_str()))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn render_booking_html(booking: &Booking, selection: &str, long_date: &str, salon_name: &str) -> String {
    let salon = escape_html(salon_name);
    let label = match booking.selection {
        Selection::Package(_) => "Package",
        Selection::Services(_) => "Services",
    };

    let mut customer = format!(
        "<p><strong>Name:</strong> {}</p>\n<p><strong>Phone:</strong> {}</p>\n",
        escape_html(&booking.customer_name),
        escape_html(&booking.customer_phone),
    );
    if let Some(email) = &booking.customer_email {
        customer.push_str(&format!("<p><strong>Email:</strong> {}</p>\n", escape_html(email)));
    }

    let mut details = format!(
        "<p><strong>Date:</strong> {}</p>\n\
         <p><strong>Time:</strong> {}</p>\n\
         <p><strong>{label}:</strong> {}</p>\n\
         <p><strong>Total:</strong> &#8377;{} ({} min)</p>\n",
        escape_html(long_date),
        booking.time.format("%H:%M"),
        escape_html(selection),
        booking.total_amount,
        booking.duration_minutes,
    );
    if !booking.notes.is_empty() {
        details.push_str(&format!("<p><strong>Notes:</strong> {}</p>\n", escape_html(&booking.notes)));
    }

    format!(
        "<div style=\"font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;\">\n\
         <h2 style=\"color: #333; border-bottom: 2px solid #444; padding-bottom: 10px;\">New Booking Received - {salon}</h2>\n\
         <div style=\"background-color: #f5f5f5; padding: 20px; border-radius: 8px; margin: 20px 0;\">\n\
         <h3 style=\"color: #444; margin-top: 0;\">Customer Details</h3>\n\
         {customer}</div>\n\
         <div style=\"background-color: #f5f5f5; padding: 20px; border-radius: 8px; margin: 20px 0;\">\n\
         <h3 style=\"color: #444; margin-top: 0;\">Booking Details</h3>\n\
         {details}</div>\n\
         <p style=\"color: #666; font-size: 12px; margin-top: 30px;\">This is an automated notification from the {salon} booking system.</p>\n\
         </div>\n"
    )
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
