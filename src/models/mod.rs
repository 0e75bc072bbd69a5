//! Data models for Slotwise

pub mod availability;
pub mod booking;
pub mod host;
pub mod window;

// Re-export commonly used types
pub use availability::{DayAvailability, MonthUnavailability};
pub use booking::Booking;
pub use host::Host;
pub use window::WeeklyWindow;
