pub mod booking;
pub mod catalog;

pub use booking::{Booking, BookingStatus, NewBooking, Selection};
pub use catalog::{Package, Service, ServiceCategory, TargetAudience};
