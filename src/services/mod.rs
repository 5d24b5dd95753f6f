pub mod booking;
pub mod booking_form;
pub mod calendar;
pub mod catalog;
pub mod chat;
pub mod notification;
pub mod style_guide;
