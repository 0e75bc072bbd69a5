//! API handlers for the Slotwise REST endpoints

pub mod availability;
pub mod bookings;
pub mod health;
pub mod hosts;
pub mod openapi;
