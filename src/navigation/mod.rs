//! Stack-based navigation.
//!
//! Signed-out users see the auth stack (sign-in, sign-up); signed-in users
//! see the app stack (dashboard, create-appointment, appointment-created,
//! profile). [`Navigator::sync`] keeps the mounted stack in step with the
//! session store.

pub mod navigator;
pub mod route;
pub mod stack;

pub use navigator::{Mounted, Navigator};
pub use route::{
    AppointmentCreatedParams, CreateAppointmentParams, NavigationError, Route, StackKind,
};
pub use stack::{NavAction, Stack};
