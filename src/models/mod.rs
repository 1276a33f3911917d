//! Data types exchanged with the booking API.

pub mod appointment;
pub mod provider;
pub mod user;

pub use appointment::{
    format_hour, AppointmentDraft, AvailabilitySlot, DayPeriod, HourSlot, Schedule,
};
pub use provider::Provider;
pub use user::{User, UserPatch};
